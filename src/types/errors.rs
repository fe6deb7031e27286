use chrono::NaiveDate;
use thiserror::Error;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum YenError {
    #[error("Yen error: {0}")]
    InvalidFormat(String),
    #[error("Yen error: Overflow")]
    Overflow
}

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum WarekiError {
    #[error("Date [{date}] precedes the first supported Japanese era")]
    BeforeFirstEra {
        date: NaiveDate
    },
    #[error("Year [{year}] precedes the first supported Japanese era")]
    YearBeforeFirstEra {
        year: i32
    }
}
