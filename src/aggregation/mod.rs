mod donation;
mod errors;
mod expense;
mod income;
#[cfg(test)]
mod tests;
pub mod text;

use tracing::warn;

use crate::aggregation::text::{sanitize, ADDRESS_MAX_CHARS, NAME_MAX_CHARS};
use crate::models::{OrganizationProfile, Section, SectionRow, TransactionRow};
use crate::types::Yen;

pub use donation::aggregate_personal_donations;
pub use errors::AggregationError;
pub use expense::{aggregate_expense, aggregate_grant_expenditure};
pub use income::{aggregate_business_income, aggregate_grant_income, aggregate_loan_income, aggregate_other_income};

/// Threshold for itemizing other income (inclusive).
pub const OTHER_INCOME_THRESHOLD: Yen = Yen::new(100_000);
/// Threshold for itemizing ordinary expenses (inclusive).
pub const EXPENSE_THRESHOLD: Yen = Yen::new(50_000);
/// Yearly per-donor total a donation must exceed to be itemized.
pub const DONATION_THRESHOLD: Yen = Yen::new(50_000);

/// Which side of the journal entry carries the amount of a section's transactions.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum AmountPriority {
    /// Income sections read the credit side first.
    Credit,
    /// Expense sections read the debit side first.
    Debit
}

/// Rule deciding whether an amount is printed as its own row or summed into the
/// below-threshold bucket.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Disclosure {
    /// Every transaction is itemized and the section has no bucket.
    Always,
    /// Amounts at or above the threshold are itemized.
    AtLeast(Yen),
    /// Amounts strictly above the threshold are itemized.
    Exceeding(Yen)
}

impl Disclosure {
    pub fn is_itemized(self, amount: Yen) -> bool {
        match self {
            Disclosure::Always => true,
            Disclosure::AtLeast(threshold) => amount >= threshold,
            Disclosure::Exceeding(threshold) => amount > threshold
        }
    }

    /// Starting value of the below-threshold bucket, `None` when the section has no bucket.
    pub fn empty_bucket(self) -> Option<Yen> {
        match self {
            Disclosure::Always => None,
            Disclosure::AtLeast(_) | Disclosure::Exceeding(_) => Some(Yen::ZERO)
        }
    }
}

/// Resolves the amount of a transaction, falling back to the opposite side when the
/// preferred side is missing or zero. Missing values resolve to zero.
///
/// A negative preferred side is kept as is, so reversals reduce the section total.
pub fn resolve_amount(transaction: &TransactionRow, priority: AmountPriority) -> Yen {
    let (preferred, fallback) = match priority {
        AmountPriority::Credit => (transaction.credit_amount, transaction.debit_amount),
        AmountPriority::Debit => (transaction.debit_amount, transaction.credit_amount)
    };

    let amount = preferred
        .filter(|amount| !amount.is_zero())
        .or(fallback);

    let Some(amount) = amount else {
        return Yen::ZERO;
    };

    match Yen::from_decimal(amount) {
        Ok(yen) => yen,
        Err(error) => {
            warn!("Transaction [{}] amount [{amount}] could not be resolved: {error}", transaction.transaction_no);
            Yen::ZERO
        }
    }
}

/// Applies the free-text rules to the registered organization details.
pub fn normalize_profile(profile: OrganizationProfile) -> OrganizationProfile {
    OrganizationProfile {
        official_name: sanitize(&profile.official_name, NAME_MAX_CHARS),
        kana_name: sanitize(&profile.kana_name, NAME_MAX_CHARS),
        office_address: sanitize(&profile.office_address, ADDRESS_MAX_CHARS),
        representative_name: sanitize(&profile.representative_name, NAME_MAX_CHARS),
        accountant_name: sanitize(&profile.accountant_name, NAME_MAX_CHARS),
        previous_year_carryover: profile.previous_year_carryover
    }
}

/// Splits transactions into itemized rows and the below-threshold bucket, numbering
/// rows in input order.
fn itemize<R, F>(transactions: &[TransactionRow], priority: AmountPriority, disclosure: Disclosure, make_row: F) -> Result<Section<R>, AggregationError>
where
    R: SectionRow,
    F: Fn(&TransactionRow, Yen, String) -> R
{
    let mut rows = Vec::new();
    let mut bucket = disclosure.empty_bucket();

    for transaction in transactions {
        let amount = resolve_amount(transaction, priority);

        if disclosure.is_itemized(amount) {
            let ichiren_no = (rows.len() + 1).to_string();
            rows.push(make_row(transaction, amount, ichiren_no));
        } else if let Some(bucket) = bucket.as_mut() {
            *bucket = bucket.checked_add(amount)?;
        }
    }

    Ok(Section::new(rows, bucket)?)
}
