use chrono::NaiveDate;
use rust_decimal::Decimal;
use std::str::FromStr;

use crate::models::errors::ValidationError;

/// Direction of a ledger transaction as recorded by the bookkeeping system.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum TransactionType {
    Income,
    Expense
}

impl TransactionType {
    pub fn as_str(self) -> &'static str {
        match self {
            TransactionType::Income => "income",
            TransactionType::Expense => "expense"
        }
    }
}

impl FromStr for TransactionType {
    type Err = ValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_lowercase().as_str() {
            "income" => Ok(TransactionType::Income),
            "expense" => Ok(TransactionType::Expense),
            _ => Err(ValidationError::UnknownTransactionType { value: value.to_string() })
        }
    }
}

/// Checks whether the grant expenditure flag may be set on a transaction of the given type.
///
/// Only expense transactions may carry the flag.
pub fn validate_grant_expenditure_flag_update(transaction_type: TransactionType) -> Result<(), ValidationError> {
    match transaction_type {
        TransactionType::Expense => Ok(()),
        TransactionType::Income => Err(ValidationError::GrantFlagOnIncome)
    }
}

/// One ledger row as supplied by the repository, already filtered to a report section.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionRow {
    /// Row number in the source ledger export, echoed in every remark.
    pub transaction_no: String,
    pub transaction_date: NaiveDate,
    pub transaction_type: TransactionType,
    pub debit_account: String,
    pub debit_amount: Option<Decimal>,
    pub credit_account: String,
    pub credit_amount: Option<Decimal>,
    pub friendly_category: String,
    pub label: String,
    pub description: String,
    pub memo: String,
    pub counterpart_name: String,
    pub counterpart_address: String,
    is_grant_expenditure: bool
}

impl TransactionRow {
    pub fn new(transaction_no: impl Into<String>, transaction_date: NaiveDate, transaction_type: TransactionType) -> Self {
        Self {
            transaction_no: transaction_no.into(),
            transaction_date,
            transaction_type,
            debit_account: String::new(),
            debit_amount: None,
            credit_account: String::new(),
            credit_amount: None,
            friendly_category: String::new(),
            label: String::new(),
            description: String::new(),
            memo: String::new(),
            counterpart_name: String::new(),
            counterpart_address: String::new(),
            is_grant_expenditure: false
        }
    }

    pub fn with_debit(mut self, account: impl Into<String>, amount: Decimal) -> Self {
        self.debit_account = account.into();
        self.debit_amount = Some(amount);
        self
    }

    pub fn with_credit(mut self, account: impl Into<String>, amount: Decimal) -> Self {
        self.credit_account = account.into();
        self.credit_amount = Some(amount);
        self
    }

    pub fn with_category(mut self, friendly_category: impl Into<String>) -> Self {
        self.friendly_category = friendly_category.into();
        self
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_memo(mut self, memo: impl Into<String>) -> Self {
        self.memo = memo.into();
        self
    }

    pub fn with_counterpart(mut self, name: impl Into<String>, address: impl Into<String>) -> Self {
        self.counterpart_name = name.into();
        self.counterpart_address = address.into();
        self
    }

    /// Marks or clears the grant expenditure flag.
    ///
    /// # Errors
    /// Returns `ValidationError::GrantFlagOnIncome` when setting the flag on an income transaction.
    pub fn with_grant_expenditure_flag(mut self, flag: bool) -> Result<Self, ValidationError> {
        if flag {
            validate_grant_expenditure_flag_update(self.transaction_type)?;
        }

        self.is_grant_expenditure = flag;

        Ok(self)
    }

    pub fn is_grant_expenditure(&self) -> bool {
        self.is_grant_expenditure
    }
}
