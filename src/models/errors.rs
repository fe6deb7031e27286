use crate::types::{FinancialYear, OrganizationId};
use thiserror::Error;

/// Input rejected before any aggregation happens.
///
/// The grant flag message is shown to users as-is.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("交付金フラグは支出取引のみに設定できます")]
    GrantFlagOnIncome,
    #[error("Unknown transaction type [{value}]")]
    UnknownTransactionType {
        value: String
    },
    #[error("Unknown report section [{value}]")]
    UnknownSection {
        value: String
    },
    #[error("Invalid organization id [{organization_id}]")]
    InvalidOrganizationId {
        organization_id: OrganizationId
    },
    #[error("Invalid financial year [{financial_year}]")]
    InvalidFinancialYear {
        financial_year: FinancialYear
    }
}
