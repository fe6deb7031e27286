use crate::models::{
    BusinessIncomeSection, ExpenseCategory, ExpenseSection, FormId, GrantExpenditureSection, GrantIncomeSection,
    LoanIncomeSection, OtherIncomeSection, PersonalDonationSection, Section
};
use crate::serialization::rows::XmlRow;
use crate::serialization::writer::XmlWriter;
use crate::types::WarekiError;

/// Writes one `SHEET`: the section totals followed by its rows in aggregation order.
fn write_sheet<R: XmlRow>(writer: &mut XmlWriter, section: &Section<R>, kubun: Option<u8>) -> Result<(), WarekiError> {
    writer.open("SHEET");

    if let Some(kubun) = kubun {
        writer.number("KUBUN", kubun);
    }

    writer.amount("KINGAKU_GK", section.total_amount());
    writer.optional_amount("MIMAN_GK", section.under_threshold_amount());

    for row in section.rows() {
        writer.open("ROW");
        row.write_fields(writer)?;
        writer.close("ROW");
    }

    writer.close("SHEET");

    Ok(())
}

fn serialize_single_sheet<R: XmlRow>(form: FormId, section: &Section<R>) -> Result<String, WarekiError> {
    let mut writer = XmlWriter::new();

    writer.open(form.tag());
    write_sheet(&mut writer, section, None)?;
    writer.close(form.tag());

    Ok(writer.finish())
}

pub fn serialize_business_income(section: &BusinessIncomeSection) -> Result<String, WarekiError> {
    serialize_single_sheet(FormId::BusinessIncome, section)
}

pub fn serialize_loan_income(section: &LoanIncomeSection) -> Result<String, WarekiError> {
    serialize_single_sheet(FormId::LoanIncome, section)
}

pub fn serialize_grant_income(section: &GrantIncomeSection) -> Result<String, WarekiError> {
    serialize_single_sheet(FormId::GrantIncome, section)
}

pub fn serialize_other_income(section: &OtherIncomeSection) -> Result<String, WarekiError> {
    serialize_single_sheet(FormId::OtherIncome, section)
}

pub fn serialize_personal_donations(section: &PersonalDonationSection) -> Result<String, WarekiError> {
    serialize_single_sheet(FormId::PersonalDonation, section)
}

pub fn serialize_grant_expenditure(section: &GrantExpenditureSection) -> Result<String, WarekiError> {
    serialize_single_sheet(FormId::GrantExpenditure, section)
}

/// Ordinary expense form with one sheet per category, each tagged with its `KUBUN` code.
pub fn serialize_ordinary_expenses(sheets: &[(ExpenseCategory, &ExpenseSection)]) -> Result<String, WarekiError> {
    let form = FormId::OrdinaryExpense;
    let mut writer = XmlWriter::new();

    writer.open(form.tag());

    for (category, section) in sheets {
        write_sheet(&mut writer, *section, Some(category.kubun()))?;
    }

    writer.close(form.tag());

    Ok(writer.finish())
}
