use thiserror::Error;

use crate::models::ValidationError;
use crate::types::YenError;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum AggregationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Section total is out of range: {0}")]
    Overflow(#[from] YenError)
}
