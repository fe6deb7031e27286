use tracing::debug;

use crate::aggregation::text::{build_bikou, first_present, sanitize, ADDRESS_MAX_CHARS, NAME_MAX_CHARS, TEXT_MAX_CHARS};
use crate::aggregation::{itemize, AggregationError, AmountPriority, Disclosure, EXPENSE_THRESHOLD};
use crate::models::{
    validate_grant_expenditure_flag_update, BranchGrantRow, ExpenseRow, ExpenseSection, GrantExpenditureSection,
    TransactionRow
};

/// Ordinary expense sheet: itemizes payments of ¥50,000 or more, buckets the rest.
pub fn aggregate_expense(transactions: &[TransactionRow]) -> Result<ExpenseSection, AggregationError> {
    let section = itemize(
        transactions,
        AmountPriority::Debit,
        Disclosure::AtLeast(EXPENSE_THRESHOLD),
        |transaction, kingaku, ichiren_no| ExpenseRow {
            ichiren_no,
            purpose: first_present(&[transaction.label.as_str(), transaction.description.as_str(), transaction.friendly_category.as_str()], TEXT_MAX_CHARS),
            kingaku,
            dt: transaction.transaction_date,
            payee_name: sanitize(&transaction.counterpart_name, NAME_MAX_CHARS),
            payee_address: sanitize(&transaction.counterpart_address, ADDRESS_MAX_CHARS),
            bikou: build_bikou(&transaction.memo, &transaction.transaction_no)
        }
    )?;

    debug!("Expense: {} transactions, {} rows", transactions.len(), section.rows().len());

    Ok(section)
}

/// 本部又は支部に対して支出した交付金: every grant paid out is itemized.
///
/// # Errors
/// Returns `ValidationError::GrantFlagOnIncome` if any transaction is an income transaction.
pub fn aggregate_grant_expenditure(transactions: &[TransactionRow]) -> Result<GrantExpenditureSection, AggregationError> {
    for transaction in transactions {
        validate_grant_expenditure_flag_update(transaction.transaction_type)?;
    }

    let section = itemize(
        transactions,
        AmountPriority::Debit,
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

    debug!("Grant expenditure: {} transactions, {} rows", transactions.len(), section.rows().len());

    Ok(section)
}
