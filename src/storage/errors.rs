use thiserror::Error;

use crate::models::ValidationError;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Ledger I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Ledger CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Ledger record [{transaction_no}] is invalid: {source}")]
    InvalidRecord {
        transaction_no: String,
        #[source]
        source: ValidationError
    },
    #[error("Ledger source is unavailable: {0}")]
    Unavailable(String)
}
