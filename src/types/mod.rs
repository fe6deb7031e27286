mod errors;
mod wareki;
mod yen;

pub use errors::{WarekiError, YenError};
pub use wareki::{Era, WarekiDate, WarekiYear};
pub use yen::{parse_amount, Yen};

pub type OrganizationId = u32;
pub type FinancialYear = i32;
