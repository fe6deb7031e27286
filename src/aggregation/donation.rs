use std::collections::HashMap;

use tracing::debug;

use crate::aggregation::text::{build_bikou, sanitize, ADDRESS_MAX_CHARS, NAME_MAX_CHARS};
use crate::aggregation::{resolve_amount, AggregationError, AmountPriority, Disclosure, DONATION_THRESHOLD};
use crate::models::{DonationRow, PersonalDonationSection, Section, TransactionRow};
use crate::types::Yen;

/// 個人からの寄附
///
/// Donations are bucketed per donor: a donor whose yearly total exceeds ¥50,000 has
/// every one of their donations itemized, in input order. Donations from everyone
/// else are summed into the below-threshold bucket.
///
/// Donations without a donor name are not grouped, each one is judged on its own amount.
pub fn aggregate_personal_donations(transactions: &[TransactionRow]) -> Result<PersonalDonationSection, AggregationError> {
    let disclosure = Disclosure::Exceeding(DONATION_THRESHOLD);

    let resolved: Vec<(&TransactionRow, Donor, Yen)> = transactions.iter()
        .map(|transaction| {
            let donor = Donor {
                name: sanitize(&transaction.counterpart_name, NAME_MAX_CHARS),
                address: sanitize(&transaction.counterpart_address, ADDRESS_MAX_CHARS)
            };
            (transaction, donor, resolve_amount(transaction, AmountPriority::Credit))
        })
        .collect();

    let mut donor_totals: HashMap<&Donor, Yen> = HashMap::new();

    for (_, donor, amount) in resolved.iter().filter(|(_, donor, _)| donor.is_named()) {
        let total = donor_totals.entry(donor).or_default();
        *total = total.checked_add(*amount)?;
    }

    let mut rows = Vec::new();
    let mut bucket = disclosure.empty_bucket();

    for (transaction, donor, amount) in &resolved {
        let judged_amount = if donor.is_named() {
            donor_totals.get(donor).copied().unwrap_or_default()
        } else {
            *amount
        };

        if disclosure.is_itemized(judged_amount) {
            rows.push(DonationRow {
                ichiren_no: (rows.len() + 1).to_string(),
                donor_name: donor.name.clone(),
                kingaku: *amount,
                dt: transaction.transaction_date,
                donor_address: donor.address.clone(),
                bikou: build_bikou(&transaction.memo, &transaction.transaction_no)
            });
        } else if let Some(bucket) = bucket.as_mut() {
            *bucket = bucket.checked_add(*amount)?;
        }
    }

    debug!("Personal donations: {} transactions, {} donors, {} rows", transactions.len(), donor_totals.len(), rows.len());

    Ok(Section::new(rows, bucket)?)
}

#[derive(Debug, Eq, PartialEq, Hash)]
struct Donor {
    name: String,
    address: String
}

impl Donor {
    fn is_named(&self) -> bool {
        !self.name.is_empty()
    }
}
