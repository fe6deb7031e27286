use crate::models::errors::ValidationError;
use crate::models::forms::{ExpenseCategory, FormId};
use crate::models::section::{
    BusinessIncomeSection, ExpenseSection, GrantExpenditureSection, GrantIncomeSection, LoanIncomeSection,
    OtherIncomeSection, PersonalDonationSection
};
use crate::types::{FinancialYear, OrganizationId, Yen, YenError};

/// Earliest and latest financial years a report can be produced for.
pub const FIRST_REPORT_YEAR: FinancialYear = 1989;
pub const LAST_REPORT_YEAR: FinancialYear = 9999;

/// Registered details of a political organization for one financial year.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrganizationProfile {
    pub official_name: String,
    pub kana_name: String,
    pub office_address: String,
    pub representative_name: String,
    pub accountant_name: String,
    /// Balance carried over from the previous financial year (前年繰越額).
    pub previous_year_carryover: Yen
}

/// Every aggregated section of one organization's report for one financial year.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportData {
    pub organization_id: OrganizationId,
    pub financial_year: FinancialYear,
    pub profile: OrganizationProfile,
    pub personal_donation: PersonalDonationSection,
    pub business_income: BusinessIncomeSection,
    pub loan_income: LoanIncomeSection,
    pub grant_income: GrantIncomeSection,
    pub other_income: OtherIncomeSection,
    pub utility_expense: ExpenseSection,
    pub supplies_expense: ExpenseSection,
    pub office_expense: ExpenseSection,
    pub grant_expenditure: GrantExpenditureSection
}

impl ReportData {
    pub fn summary(&self) -> Result<SummaryData, YenError> {
        SummaryData::try_from(self)
    }

    pub fn expense_section(&self, category: ExpenseCategory) -> &ExpenseSection {
        match category {
            ExpenseCategory::Utility => &self.utility_expense,
            ExpenseCategory::Supplies => &self.supplies_expense,
            ExpenseCategory::Office => &self.office_expense
        }
    }

    /// Forms that carry data in this report, in statutory order.
    ///
    /// The profile and summary forms are always present.
    pub fn populated_forms(&self) -> Vec<FormId> {
        FormId::ALL.into_iter()
            .filter(|form| self.is_form_populated(*form))
            .collect()
    }

    fn is_form_populated(&self, form: FormId) -> bool {
        match form {
            FormId::Profile | FormId::Summary => true,
            FormId::BusinessIncome => self.business_income.is_populated(),
            FormId::LoanIncome => self.loan_income.is_populated(),
            FormId::GrantIncome => self.grant_income.is_populated(),
            FormId::OtherIncome => self.other_income.is_populated(),
            FormId::PersonalDonation => self.personal_donation.is_populated(),
            FormId::OrdinaryExpense => ExpenseCategory::ALL.iter()
                .any(|category| self.expense_section(*category).is_populated()),
            FormId::GrantExpenditure => self.grant_expenditure.is_populated()
        }
    }
}

/// Totals printed on the summary form, always recomputed from `ReportData`.
///
/// Building it fails with `YenError::Overflow` when a total does not fit in a `Yen`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SummaryData {
    /// 前年繰越額
    pub previous_year_carryover: Yen,
    /// 本年収入額
    pub current_year_income: Yen,
    /// 収入総額
    pub income_total: Yen,
    /// 支出総額
    pub expense_total: Yen,
    /// 翌年繰越額
    pub next_year_carryover: Yen,
    pub personal_donation: Yen,
    /// 寄附合計
    pub donation_total: Yen,
    pub business_income: Yen,
    pub loan_income: Yen,
    pub grant_income: Yen,
    pub other_income: Yen,
    /// 経常経費
    pub ordinary_expense: Yen,
    pub grant_expenditure: Yen
}

impl TryFrom<&ReportData> for SummaryData {
    type Error = YenError;

    fn try_from(report: &ReportData) -> Result<Self, Self::Error> {
        let personal_donation = report.personal_donation.total_amount();
        let donation_total = personal_donation;
        let business_income = report.business_income.total_amount();
        let loan_income = report.loan_income.total_amount();
        let grant_income = report.grant_income.total_amount();
        let other_income = report.other_income.total_amount();

        let current_year_income = Yen::checked_sum([donation_total, business_income, loan_income, grant_income, other_income])?;

        let previous_year_carryover = report.profile.previous_year_carryover;
        let income_total = previous_year_carryover.checked_add(current_year_income)?;

        let ordinary_expense = Yen::checked_sum(
            ExpenseCategory::ALL.iter().map(|category| report.expense_section(*category).total_amount())
        )?;
        let grant_expenditure = report.grant_expenditure.total_amount();

        let expense_total = ordinary_expense.checked_add(grant_expenditure)?;
        let next_year_carryover = income_total.checked_sub(expense_total)?;

        Ok(Self {
            previous_year_carryover,
            current_year_income,
            income_total,
            expense_total,
            next_year_carryover,
            personal_donation,
            donation_total,
            business_income,
            loan_income,
            grant_income,
            other_income,
            ordinary_expense,
            grant_expenditure
        })
    }
}

/// Rejects report requests that cannot name an existing report.
pub fn validate_report_request(organization_id: OrganizationId, financial_year: FinancialYear) -> Result<(), ValidationError> {
    if organization_id == 0 {
        return Err(ValidationError::InvalidOrganizationId { organization_id });
    }

    if !(FIRST_REPORT_YEAR..=LAST_REPORT_YEAR).contains(&financial_year) {
        return Err(ValidationError::InvalidFinancialYear { financial_year });
    }

    Ok(())
}
