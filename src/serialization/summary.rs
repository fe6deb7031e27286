use crate::models::{FormId, ReportData, SummaryData};
use crate::serialization::writer::XmlWriter;
use crate::types::{WarekiError, WarekiYear};

/// 団体の概要
pub fn serialize_profile(report: &ReportData) -> Result<String, WarekiError> {
    let form = FormId::Profile;
    let profile = &report.profile;
    let report_year = WarekiYear::from_gregorian_year(report.financial_year)?;
    let mut writer = XmlWriter::new();

    writer.open(form.tag());
    writer.text("HOUKOKU_NEN", &report_year.to_string());
    writer.text("DANTAI_NM", &profile.official_name);
    writer.text("DANTAI_KANA", &profile.kana_name);
    writer.text("JIMU_JUSYO", &profile.office_address);
    writer.text("DAIHYO_NM", &profile.representative_name);
    writer.text("KAIKEI_NM", &profile.accountant_name);
    writer.close(form.tag());

    Ok(writer.finish())
}

/// 収支の総括表
pub fn serialize_summary(summary: &SummaryData) -> String {
    let form = FormId::Summary;
    let mut writer = XmlWriter::new();

    writer.open(form.tag());
    writer.amount("ZENNEN_KURIKOSI_GK", summary.previous_year_carryover);
    writer.amount("HONNEN_SYUNYU_GK", summary.current_year_income);
    writer.amount("SYUNYU_SGK", summary.income_total);
    writer.amount("SISYUTU_SGK", summary.expense_total);
    writer.amount("YOKUNEN_KURIKOSI_GK", summary.next_year_carryover);
    writer.amount("KOJIN_KIFU_GK", summary.personal_donation);
    writer.amount("KIFU_GK", summary.donation_total);
    writer.amount("JIGYO_SYUNYU_GK", summary.business_income);
    writer.amount("KARIIRE_GK", summary.loan_income);
    writer.amount("KOFU_SYUNYU_GK", summary.grant_income);
    writer.amount("SONOTA_SYUNYU_GK", summary.other_income);
    writer.amount("KEIJOU_HI_GK", summary.ordinary_expense);
    writer.amount("KOFU_SISYUTU_GK", summary.grant_expenditure);
    writer.close(form.tag());

    writer.finish()
}
