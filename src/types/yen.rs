use crate::types::errors::YenError;
use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};
use serde::{de, Deserialize, Deserializer};
use std::fmt;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A whole-yen amount.
///
/// Reports never carry fractions of a yen, so the value is a plain `i64`.
/// `Display` renders the bare integer (`150000`) which is the form the
/// government schema expects.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct Yen(i64);

impl Yen {
    pub const ZERO: Yen = Yen(0);

    pub const fn new(value: i64) -> Self {
        Yen(value)
    }

    pub fn is_zero(self) -> bool {
        self.0 == 0
    }

    pub fn checked_add(self, rhs: Yen) -> Result<Yen, YenError> {
        self.0.checked_add(rhs.0).map(Yen).ok_or(YenError::Overflow)
    }

    pub fn checked_sub(self, rhs: Yen) -> Result<Yen, YenError> {
        self.0.checked_sub(rhs.0).map(Yen).ok_or(YenError::Overflow)
    }

    /// Adds up `amounts`, failing instead of wrapping or saturating.
    pub fn checked_sum<I: IntoIterator<Item = Yen>>(amounts: I) -> Result<Yen, YenError> {
        amounts.into_iter().try_fold(Yen::ZERO, Yen::checked_add)
    }

    /// Converts a ledger amount to whole yen, rounding half away from zero.
    pub fn from_decimal(amount: Decimal) -> Result<Yen, YenError> {
        amount
            .round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
            .to_i64()
            .map(Yen)
            .ok_or(YenError::Overflow)
    }
}

impl From<i64> for Yen {
    fn from(value: i64) -> Self {
        Yen(value)
    }
}

impl Display for Yen {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}", self.0)
    }
}

/// Parses a ledger amount as exported, e.g. `150000`, `150,000` or `1234.5`.
pub fn parse_amount(value: &str) -> Result<Decimal, YenError> {
    let value = value.trim();

    if value.is_empty() {
        return Err(YenError::InvalidFormat("Value is an empty string".to_string()));
    }

    //NOTE: Ledger exports sometimes keep the thousands separators, they carry no meaning here
    let cleaned: String = value.chars().filter(|c| *c != ',').collect();

    Decimal::from_str(&cleaned).map_err(|error| {
        YenError::InvalidFormat(format!("Value [{value}] is not a number: {error}"))
    })
}

impl FromStr for Yen {
    type Err = YenError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        Yen::from_decimal(parse_amount(value)?)
    }
}

impl<'de> Deserialize<'de> for Yen {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let value = String::deserialize(deserializer)?;

        if value.trim().is_empty() {
            return Ok(Yen::ZERO);
        }

        Yen::from_str(&value).map_err(de::Error::custom)
    }
}
