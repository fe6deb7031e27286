use chrono::NaiveDate;

use crate::types::{Yen, YenError};

/// Shared shape of one printable line of a report section.
pub trait SectionRow {
    fn ichiren_no(&self) -> &str;
    fn kingaku(&self) -> Yen;
    fn bikou(&self) -> &str;
}

/// An aggregated report section.
///
/// The total is derived from the rows and the below-threshold bucket at
/// construction, so `total_amount == sum(rows.kingaku) + under_threshold_amount`
/// holds for every instance. `under_threshold_amount` is `None` for sections
/// without a below-threshold concept and `Some(Yen::ZERO)` when the concept
/// exists but nothing fell below it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<R> {
    total_amount: Yen,
    under_threshold_amount: Option<Yen>,
    rows: Vec<R>
}

impl<R: SectionRow> Section<R> {
    /// # Errors
    /// Returns `YenError::Overflow` when the total does not fit in a `Yen`.
    pub fn new(rows: Vec<R>, under_threshold_amount: Option<Yen>) -> Result<Self, YenError> {
        let total_amount = Yen::checked_sum(rows.iter().map(SectionRow::kingaku))?
            .checked_add(under_threshold_amount.unwrap_or(Yen::ZERO))?;

        Ok(Self {
            total_amount,
            under_threshold_amount,
            rows
        })
    }

    pub fn total_amount(&self) -> Yen {
        self.total_amount
    }

    pub fn under_threshold_amount(&self) -> Option<Yen> {
        self.under_threshold_amount
    }

    pub fn rows(&self) -> &[R] {
        &self.rows
    }

    /// Whether the section has anything to print in the report.
    pub fn is_populated(&self) -> bool {
        !self.rows.is_empty() || !self.total_amount.is_zero()
    }
}

/// その他の収入
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OtherIncomeRow {
    pub ichiren_no: String,
    pub tekiyou: String,
    pub kingaku: Yen,
    pub bikou: String
}

/// 事業による収入, one row per kind of business.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BusinessIncomeRow {
    pub ichiren_no: String,
    pub kind: String,
    pub kingaku: Yen,
    pub bikou: String
}

/// 借入金
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoanIncomeRow {
    pub ichiren_no: String,
    pub lender_name: String,
    pub kingaku: Yen,
    pub dt: NaiveDate,
    pub bikou: String
}

/// A grant received from, or paid to, a headquarters or branch organization.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BranchGrantRow {
    pub ichiren_no: String,
    pub branch_name: String,
    pub kingaku: Yen,
    pub dt: NaiveDate,
    pub office_address: String,
    pub bikou: String
}

/// 個人からの寄附
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DonationRow {
    pub ichiren_no: String,
    pub donor_name: String,
    pub kingaku: Yen,
    pub dt: NaiveDate,
    pub donor_address: String,
    pub bikou: String
}

/// 経常経費の内訳
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpenseRow {
    pub ichiren_no: String,
    pub purpose: String,
    pub kingaku: Yen,
    pub dt: NaiveDate,
    pub payee_name: String,
    pub payee_address: String,
    pub bikou: String
}

macro_rules! impl_section_row {
    ($($row:ty),+ $(,)?) => {
        $(
            impl SectionRow for $row {
                fn ichiren_no(&self) -> &str {
                    &self.ichiren_no
                }

                fn kingaku(&self) -> Yen {
                    self.kingaku
                }

                fn bikou(&self) -> &str {
                    &self.bikou
                }
            }
        )+
    };
}

impl_section_row!(OtherIncomeRow, BusinessIncomeRow, LoanIncomeRow, BranchGrantRow, DonationRow, ExpenseRow);

pub type OtherIncomeSection = Section<OtherIncomeRow>;
pub type BusinessIncomeSection = Section<BusinessIncomeRow>;
pub type LoanIncomeSection = Section<LoanIncomeRow>;
pub type GrantIncomeSection = Section<BranchGrantRow>;
pub type GrantExpenditureSection = Section<BranchGrantRow>;
pub type PersonalDonationSection = Section<DonationRow>;
pub type ExpenseSection = Section<ExpenseRow>;
