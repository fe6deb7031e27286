use crate::types::errors::WarekiError;
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::fmt::{Display, Formatter};

/// Japanese imperial eras supported by the report schema.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Era {
    Meiji,
    Taisho,
    Showa,
    Heisei,
    Reiwa
}

/// First day of each era as (year, month, day), newest first.
const ERA_STARTS: [(Era, (i32, u32, u32)); 5] = [
    (Era::Reiwa, (2019, 5, 1)),
    (Era::Heisei, (1989, 1, 8)),
    (Era::Showa, (1926, 12, 25)),
    (Era::Taisho, (1912, 7, 30)),
    (Era::Meiji, (1868, 1, 25))
];

impl Era {
    /// Single letter code used in the schema's date fields.
    pub fn code(self) -> char {
        match self {
            Era::Meiji => 'M',
            Era::Taisho => 'T',
            Era::Showa => 'S',
            Era::Heisei => 'H',
            Era::Reiwa => 'R'
        }
    }

    fn containing(key: (i32, u32, u32)) -> Option<(Era, i32)> {
        ERA_STARTS.iter()
            .find(|(_, start)| key >= *start)
            .map(|(era, start)| (*era, start.0))
    }
}

/// A Gregorian date expressed in the Japanese era calendar, e.g. `R6/4/1`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct WarekiDate {
    pub era: Era,
    pub year: i32,
    pub month: u32,
    pub day: u32
}

impl WarekiDate {
    pub fn from_gregorian(date: NaiveDate) -> Result<Self, WarekiError> {
        let (era, first_year) = Era::containing((date.year(), date.month(), date.day()))
            .ok_or(WarekiError::BeforeFirstEra { date })?;

        Ok(Self {
            era,
            year: date.year() - first_year + 1,
            month: date.month(),
            day: date.day()
        })
    }
}

impl Display for WarekiDate {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}{}/{}/{}", self.era.code(), self.year, self.month, self.day)
    }
}

/// The era year a financial year is reported under.
///
/// A calendar year that spans an era change is reported in the era in effect on
/// December 31st, so 2019 is `R1` and 1989 is `H1`.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct WarekiYear {
    pub era: Era,
    pub year: i32
}

impl WarekiYear {
    pub fn from_gregorian_year(year: i32) -> Result<Self, WarekiError> {
        let (era, first_year) = Era::containing((year, 12, 31))
            .ok_or(WarekiError::YearBeforeFirstEra { year })?;

        Ok(Self {
            era,
            year: year - first_year + 1
        })
    }
}

impl Display for WarekiYear {
    fn fmt(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
        write!(formatter, "{}{}", self.era.code(), self.year)
    }
}
