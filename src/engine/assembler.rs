use crate::aggregation::{
    aggregate_business_income, aggregate_expense, aggregate_grant_expenditure, aggregate_grant_income,
    aggregate_loan_income, aggregate_other_income, aggregate_personal_donations, normalize_profile, AggregationError
};
use crate::engine::errors::ReportError;
use crate::models::{validate_report_request, ReportData, SectionKind};
use crate::storage::ReportTransactionRepository;
use crate::types::{FinancialYear, OrganizationId};
use std::sync::Arc;
use tracing::debug;

const SUMMARY_SECTION: &str = "summary";

/// Builds `ReportData` for one organization and financial year from a repository.
pub struct ReportAssembler<R: ReportTransactionRepository> {
    repository: Arc<R>
}

impl<R: ReportTransactionRepository> ReportAssembler<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository
        }
    }

    /// Fetches every section concurrently and aggregates it.
    ///
    /// # Errors
    /// Returns `ReportError` if:
    /// - The organization id or financial year is malformed.
    /// - The organization has no profile for the financial year.
    /// - Any repository query fails (passed through unchanged).
    /// - Grant expenditure rows include an income transaction.
    /// - A section or summary total does not fit in a `Yen`.
    pub async fn assemble(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<ReportData, ReportError> {
        validate_report_request(organization_id, financial_year)?;

        let repository = self.repository.as_ref();

        let profile = repository.find_organization_profile(organization_id, financial_year).await?
            .ok_or(ReportError::OrganizationNotFound { organization_id, financial_year })?;

        let (business, loans, grants, other, donations, utility, supplies, office, grant_expenditure) = tokio::try_join!(
            repository.find_business_income_transactions(organization_id, financial_year),
            repository.find_loan_income_transactions(organization_id, financial_year),
            repository.find_grant_income_transactions(organization_id, financial_year),
            repository.find_other_income_transactions(organization_id, financial_year),
            repository.find_personal_donation_transactions(organization_id, financial_year),
            repository.find_utility_expense_transactions(organization_id, financial_year),
            repository.find_supplies_expense_transactions(organization_id, financial_year),
            repository.find_office_expense_transactions(organization_id, financial_year),
            repository.find_grant_expenditure_transactions(organization_id, financial_year)
        )?;

        debug!("Fetched ledger sections for organization [{organization_id}] year [{financial_year}]");

        let report = ReportData {
            organization_id,
            financial_year,
            profile: normalize_profile(profile),
            personal_donation: aggregated(SectionKind::PersonalDonation, aggregate_personal_donations(&donations))?,
            business_income: aggregated(SectionKind::BusinessIncome, aggregate_business_income(&business))?,
            loan_income: aggregated(SectionKind::LoanIncome, aggregate_loan_income(&loans))?,
            grant_income: aggregated(SectionKind::GrantIncome, aggregate_grant_income(&grants))?,
            other_income: aggregated(SectionKind::OtherIncome, aggregate_other_income(&other))?,
            utility_expense: aggregated(SectionKind::UtilityExpense, aggregate_expense(&utility))?,
            supplies_expense: aggregated(SectionKind::SuppliesExpense, aggregate_expense(&supplies))?,
            office_expense: aggregated(SectionKind::OfficeExpense, aggregate_expense(&office))?,
            grant_expenditure: aggregated(SectionKind::GrantExpenditure, aggregate_grant_expenditure(&grant_expenditure))?
        };

        report.summary().map_err(|source| ReportError::AmountOverflow { section: SUMMARY_SECTION, source })?;

        Ok(report)
    }
}

fn aggregated<S>(section: SectionKind, result: Result<S, AggregationError>) -> Result<S, ReportError> {
    result.map_err(|error| match error {
        AggregationError::Validation(error) => ReportError::Validation(error),
        AggregationError::Overflow(source) => ReportError::AmountOverflow { section: section.as_str(), source }
    })
}
