use std::collections::HashMap;

use tracing::debug;

use crate::aggregation::text::{build_bikou, first_present, sanitize, ADDRESS_MAX_CHARS, NAME_MAX_CHARS, TEXT_MAX_CHARS};
use crate::aggregation::{itemize, resolve_amount, AggregationError, AmountPriority, Disclosure, OTHER_INCOME_THRESHOLD};
use crate::models::{
    BranchGrantRow, BusinessIncomeRow, BusinessIncomeSection, GrantIncomeSection, LoanIncomeRow, LoanIncomeSection,
    OtherIncomeRow, OtherIncomeSection, Section, TransactionRow
};
use crate::types::Yen;

/// Kind printed for business income that carries no category or label.
const DEFAULT_BUSINESS_KIND: &str = "事業収入";

/// その他の収入: itemizes transactions of ¥100,000 or more, buckets the rest.
pub fn aggregate_other_income(transactions: &[TransactionRow]) -> Result<OtherIncomeSection, AggregationError> {
    let section = itemize(
        transactions,
        AmountPriority::Credit,
        Disclosure::AtLeast(OTHER_INCOME_THRESHOLD),
        |transaction, kingaku, ichiren_no| OtherIncomeRow {
            ichiren_no,
            tekiyou: first_present(&[transaction.label.as_str(), transaction.description.as_str(), transaction.friendly_category.as_str()], TEXT_MAX_CHARS),
            kingaku,
            bikou: build_bikou(&transaction.memo, &transaction.transaction_no)
        }
    )?;

    debug!("Other income: {} transactions, {} rows", transactions.len(), section.rows().len());

    Ok(section)
}

/// 借入金: every loan is itemized.
pub fn aggregate_loan_income(transactions: &[TransactionRow]) -> Result<LoanIncomeSection, AggregationError> {
    let section = itemize(
        transactions,
        AmountPriority::Credit,
        Disclosure::Always,
        |transaction, kingaku, ichiren_no| LoanIncomeRow {
            ichiren_no,
            lender_name: first_present(&[transaction.counterpart_name.as_str(), transaction.label.as_str()], NAME_MAX_CHARS),
            kingaku,
            dt: transaction.transaction_date,
            bikou: build_bikou(&transaction.memo, &transaction.transaction_no)
        }
    )?;

    debug!("Loan income: {} transactions, {} rows", transactions.len(), section.rows().len());

    Ok(section)
}

/// 本部又は支部から供与された交付金: every grant is itemized.
pub fn aggregate_grant_income(transactions: &[TransactionRow]) -> Result<GrantIncomeSection, AggregationError> {
    let section = itemize(
        transactions,
        AmountPriority::Credit,
        Disclosure::Always,
        |transaction, kingaku, ichiren_no| BranchGrantRow {
            ichiren_no,
            branch_name: first_present(&[transaction.counterpart_name.as_str(), transaction.label.as_str()], NAME_MAX_CHARS),
            kingaku,
            dt: transaction.transaction_date,
            office_address: sanitize(&transaction.counterpart_address, ADDRESS_MAX_CHARS),
            bikou: build_bikou(&transaction.memo, &transaction.transaction_no)
        }
    )?;

    debug!("Grant income: {} transactions, {} rows", transactions.len(), section.rows().len());

    Ok(section)
}

/// 事業による収入: one row per kind of business, in order of first appearance.
///
/// Rows are totals over several transactions, so they carry no remark.
pub fn aggregate_business_income(transactions: &[TransactionRow]) -> Result<BusinessIncomeSection, AggregationError> {
    let mut kinds: Vec<(String, Yen)> = Vec::new();
    let mut positions: HashMap<String, usize> = HashMap::new();

    for transaction in transactions {
        let amount = resolve_amount(transaction, AmountPriority::Credit);
        let kind = first_present(&[transaction.friendly_category.as_str(), transaction.label.as_str()], TEXT_MAX_CHARS);
        let kind = if kind.is_empty() { DEFAULT_BUSINESS_KIND.to_string() } else { kind };

        match positions.get(&kind).copied() {
            Some(position) => kinds[position].1 = kinds[position].1.checked_add(amount)?,
            None => {
                positions.insert(kind.clone(), kinds.len());
                kinds.push((kind, amount));
            }
        }
    }

    let rows = kinds.into_iter()
        .enumerate()
        .map(|(index, (kind, kingaku))| BusinessIncomeRow {
            ichiren_no: (index + 1).to_string(),
            kind,
            kingaku,
            bikou: String::new()
        })
        .collect::<Vec<_>>();

    debug!("Business income: {} transactions, {} kinds", transactions.len(), rows.len());

    Ok(Section::new(rows, None)?)
}
