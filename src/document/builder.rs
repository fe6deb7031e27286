use tracing::debug;

use crate::document::errors::RenderError;
use crate::document::flags::build_flag_mask;
use crate::models::{ExpenseCategory, FormId, ReportData};
use crate::serialization::{
    serialize_business_income, serialize_grant_expenditure, serialize_grant_income, serialize_loan_income,
    serialize_ordinary_expenses, serialize_other_income, serialize_personal_donations, serialize_profile,
    serialize_summary, XmlWriter
};

pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"Shift_JIS\"?>";
pub const ROOT_TAG: &str = "BOOK";
pub const FLAG_MASK_TAG: &str = "SYUUSHI_UMU";

/// Collects form fragments and writes them under the document root in statutory order.
#[derive(Debug, Default)]
pub struct DocumentBuilder {
    fragments: Vec<(FormId, String)>
}

impl DocumentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds the fragment of a form, replacing any fragment added earlier for the same form.
    pub fn add_form(&mut self, form: FormId, fragment: String) -> &mut Self {
        self.fragments.retain(|(existing, _)| *existing != form);
        self.fragments.push((form, fragment));
        self
    }

    pub fn build(mut self) -> String {
        self.fragments.sort_by_key(|(form, _)| *form);

        let mask = build_flag_mask(self.fragments.iter().map(|(form, _)| form.tag()));
        let mut writer = XmlWriter::new();

        writer.raw(XML_DECLARATION);
        writer.raw("\n");
        writer.open(ROOT_TAG);
        writer.text(FLAG_MASK_TAG, &mask.to_string());

        for (_, fragment) in &self.fragments {
            writer.raw(fragment);
        }

        writer.close(ROOT_TAG);

        writer.finish()
    }
}

fn serialize_form(report: &ReportData, form: FormId) -> Result<String, RenderError> {
    let fragment = match form {
        FormId::Profile => serialize_profile(report)?,
        FormId::Summary => serialize_summary(&report.summary()?),
        FormId::BusinessIncome => serialize_business_income(&report.business_income)?,
        FormId::LoanIncome => serialize_loan_income(&report.loan_income)?,
        FormId::GrantIncome => serialize_grant_income(&report.grant_income)?,
        FormId::OtherIncome => serialize_other_income(&report.other_income)?,
        FormId::PersonalDonation => serialize_personal_donations(&report.personal_donation)?,
        FormId::OrdinaryExpense => {
            let sheets = ExpenseCategory::ALL.map(|category| (category, report.expense_section(category)));
            serialize_ordinary_expenses(&sheets)?
        },
        FormId::GrantExpenditure => serialize_grant_expenditure(&report.grant_expenditure)?
    };

    Ok(fragment)
}

/// Renders the complete report document for every populated form of `report`.
pub fn render_report(report: &ReportData) -> Result<String, RenderError> {
    let mut builder = DocumentBuilder::new();
    let forms = report.populated_forms();

    for form in &forms {
        builder.add_form(*form, serialize_form(report, *form)?);
    }

    debug!("Rendering report for organization [{}] year [{}] with {} forms", report.organization_id, report.financial_year, forms.len());

    Ok(builder.build())
}
