use thiserror::Error;

use crate::types::{WarekiError, YenError};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum RenderError {
    #[error(transparent)]
    Wareki(#[from] WarekiError),
    #[error("Summary totals are out of range: {0}")]
    SummaryOverflow(#[from] YenError)
}
