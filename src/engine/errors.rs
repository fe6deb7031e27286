use crate::document::RenderError;
use crate::models::ValidationError;
use crate::storage::RepositoryError;
use crate::types::{FinancialYear, OrganizationId, YenError};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ReportError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Organization [{organization_id}] has no report for financial year [{financial_year}]")]
    OrganizationNotFound {
        organization_id: OrganizationId,
        financial_year: FinancialYear
    },
    #[error(transparent)]
    Repository(#[from] RepositoryError),
    #[error("Amounts of [{section}] are out of range: {source}")]
    AmountOverflow {
        section: &'static str,
        #[source]
        source: YenError
    },
    #[error(transparent)]
    Render(#[from] RenderError)
}
