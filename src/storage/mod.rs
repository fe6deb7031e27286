mod errors;
mod ledger_storage;

use async_trait::async_trait;

use crate::models::{OrganizationProfile, TransactionRow};
use crate::types::{FinancialYear, OrganizationId};

pub use errors::RepositoryError;
pub use ledger_storage::LedgerStorage;

/// Source of the pre-filtered ledger rows a report is assembled from.
///
/// Every query is scoped to one organization and one financial year. Returning an
/// empty list is not an error; failures are passed to the caller unchanged.
#[async_trait]
pub trait ReportTransactionRepository: Send + Sync + 'static {
    async fn find_organization_profile(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Option<OrganizationProfile>, RepositoryError>;
    async fn find_business_income_transactions(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Vec<TransactionRow>, RepositoryError>;
    async fn find_loan_income_transactions(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Vec<TransactionRow>, RepositoryError>;
    async fn find_grant_income_transactions(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Vec<TransactionRow>, RepositoryError>;
    async fn find_other_income_transactions(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Vec<TransactionRow>, RepositoryError>;
    async fn find_personal_donation_transactions(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Vec<TransactionRow>, RepositoryError>;
    async fn find_utility_expense_transactions(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Vec<TransactionRow>, RepositoryError>;
    async fn find_supplies_expense_transactions(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Vec<TransactionRow>, RepositoryError>;
    async fn find_office_expense_transactions(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Vec<TransactionRow>, RepositoryError>;
    async fn find_grant_expenditure_transactions(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Vec<TransactionRow>, RepositoryError>;
}
