mod errors;
mod forms;
mod report;
mod section;
mod transaction;

use std::str::FromStr;

pub use errors::ValidationError;
pub use forms::{ExpenseCategory, FormId};
pub use report::{validate_report_request, OrganizationProfile, ReportData, SummaryData, FIRST_REPORT_YEAR, LAST_REPORT_YEAR};
pub use section::{
    BranchGrantRow, BusinessIncomeRow, BusinessIncomeSection, DonationRow, ExpenseRow, ExpenseSection,
    GrantExpenditureSection, GrantIncomeSection, LoanIncomeRow, LoanIncomeSection, OtherIncomeRow, OtherIncomeSection,
    PersonalDonationSection, Section, SectionRow
};
pub use transaction::{validate_grant_expenditure_flag_update, TransactionRow, TransactionType};

/// The ledger subsets a report is assembled from.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
pub enum SectionKind {
    BusinessIncome,
    LoanIncome,
    GrantIncome,
    OtherIncome,
    PersonalDonation,
    UtilityExpense,
    SuppliesExpense,
    OfficeExpense,
    GrantExpenditure
}

impl SectionKind {
    pub fn as_str(self) -> &'static str {
        match self {
            SectionKind::BusinessIncome => "business_income",
            SectionKind::LoanIncome => "loan_income",
            SectionKind::GrantIncome => "grant_income",
            SectionKind::OtherIncome => "other_income",
            SectionKind::PersonalDonation => "personal_donation",
            SectionKind::UtilityExpense => "utility_expense",
            SectionKind::SuppliesExpense => "supplies_expense",
            SectionKind::OfficeExpense => "office_expense",
            SectionKind::GrantExpenditure => "grant_expenditure"
        }
    }
}

impl FromStr for SectionKind {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim() {
            "business_income" => Ok(SectionKind::BusinessIncome),
            "loan_income" => Ok(SectionKind::LoanIncome),
            "grant_income" => Ok(SectionKind::GrantIncome),
            "other_income" => Ok(SectionKind::OtherIncome),
            "personal_donation" => Ok(SectionKind::PersonalDonation),
            "utility_expense" => Ok(SectionKind::UtilityExpense),
            "supplies_expense" => Ok(SectionKind::SuppliesExpense),
            "office_expense" => Ok(SectionKind::OfficeExpense),
            "grant_expenditure" => Ok(SectionKind::GrantExpenditure),
            _ => Err(ValidationError::UnknownSection { value: value.to_string() })
        }
    }
}
