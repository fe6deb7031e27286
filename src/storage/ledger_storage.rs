use crate::models::{OrganizationProfile, SectionKind, TransactionRow, TransactionType, ValidationError};
use crate::storage::{ReportTransactionRepository, RepositoryError};
use crate::types::{parse_amount, FinancialYear, OrganizationId, Yen};
use async_trait::async_trait;
use chrono::NaiveDate;
use csv::{ReaderBuilder, Trim};
use dashmap::DashMap;
use rust_decimal::Decimal;
use serde::{de, Deserialize, Deserializer};
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;
use std::str::FromStr;
use std::sync::Arc;
use tracing::{debug, info};

type SectionKey = (OrganizationId, FinancialYear, SectionKind);
type ReportKey = (OrganizationId, FinancialYear);

/// One row of a normalized ledger CSV export.
#[derive(Debug, Deserialize)]
struct LedgerRecord {
    organization_id: OrganizationId,
    financial_year: FinancialYear,
    section: String,
    transaction_no: String,
    transaction_date: NaiveDate,
    transaction_type: String,
    #[serde(default)]
    debit_account: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    debit_amount: Option<Decimal>,
    #[serde(default)]
    credit_account: String,
    #[serde(default, deserialize_with = "deserialize_amount")]
    credit_amount: Option<Decimal>,
    #[serde(default)]
    friendly_category: String,
    #[serde(default)]
    label: String,
    #[serde(default)]
    description: String,
    #[serde(default)]
    memo: String,
    #[serde(default)]
    counterpart_name: String,
    #[serde(default)]
    counterpart_address: String,
    #[serde(default)]
    is_grant_expenditure: Option<bool>
}

/// One row of the organization register CSV.
#[derive(Debug, Deserialize)]
struct OrganizationRecord {
    organization_id: OrganizationId,
    financial_year: FinancialYear,
    official_name: String,
    #[serde(default)]
    kana_name: String,
    #[serde(default)]
    office_address: String,
    #[serde(default)]
    representative_name: String,
    #[serde(default)]
    accountant_name: String,
    #[serde(default)]
    previous_year_carryover: Yen
}

/// Empty cells are missing amounts, anything else goes through the same parsing as `Yen`.
fn deserialize_amount<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = String::deserialize(deserializer)?;

    if value.trim().is_empty() {
        return Ok(None);
    }

    parse_amount(&value).map(Some).map_err(de::Error::custom)
}

fn invalid_record(transaction_no: &str, source: ValidationError) -> RepositoryError {
    RepositoryError::InvalidRecord {
        transaction_no: transaction_no.to_string(),
        source
    }
}

impl LedgerRecord {
    fn into_entry(self) -> Result<(SectionKey, TransactionRow), RepositoryError> {
        let section = SectionKind::from_str(&self.section)
            .map_err(|error| invalid_record(&self.transaction_no, error))?;
        let transaction_type = TransactionType::from_str(&self.transaction_type)
            .map_err(|error| invalid_record(&self.transaction_no, error))?;

        let mut row = TransactionRow::new(self.transaction_no, self.transaction_date, transaction_type);
        row.debit_account = self.debit_account;
        row.debit_amount = self.debit_amount;
        row.credit_account = self.credit_account;
        row.credit_amount = self.credit_amount;
        row.friendly_category = self.friendly_category;
        row.label = self.label;
        row.description = self.description;
        row.memo = self.memo;
        row.counterpart_name = self.counterpart_name;
        row.counterpart_address = self.counterpart_address;

        let transaction_no = row.transaction_no.clone();
        let row = row.with_grant_expenditure_flag(self.is_grant_expenditure.unwrap_or(false))
            .map_err(|error| invalid_record(&transaction_no, error))?;

        Ok(((self.organization_id, self.financial_year, section), row))
    }
}

/// In-memory ledger keyed by organization, financial year and report section.
///
/// Rows keep the order they were loaded in, which is the order they are reported in.
pub struct LedgerStorage {
    transactions: Arc<DashMap<SectionKey, Vec<TransactionRow>>>,
    organizations: Arc<DashMap<ReportKey, OrganizationProfile>>
}

impl LedgerStorage {
    pub fn new() -> Self {
        Self {
            transactions: Arc::new(DashMap::new()),
            organizations: Arc::new(DashMap::new())
        }
    }

    pub fn save_transaction(&self, organization_id: OrganizationId, financial_year: FinancialYear, section: SectionKind, row: TransactionRow) {
        self.transactions.entry((organization_id, financial_year, section))
            .or_default()
            .push(row);
    }

    pub fn save_organization(&self, organization_id: OrganizationId, financial_year: FinancialYear, profile: OrganizationProfile) {
        self.organizations.insert((organization_id, financial_year), profile);
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.iter().map(|entry| entry.value().len()).sum()
    }

    /// Loads ledger rows from CSV, returning how many rows were stored.
    ///
    /// # Errors
    /// Any malformed row aborts the load, no rows are skipped.
    pub fn load_ledger<R: Read>(&self, reader: R) -> Result<usize, RepositoryError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(reader);

        let mut loaded = 0;

        for result in reader.deserialize::<LedgerRecord>() {
            let ((organization_id, financial_year, section), row) = result?.into_entry()?;

            debug!(
                "Ledger row [{}] ({}) loaded into [{}] for organization [{organization_id}] year [{financial_year}]",
                row.transaction_no, row.transaction_type.as_str(), section.as_str()
            );

            self.save_transaction(organization_id, financial_year, section, row);
            loaded += 1;
        }

        Ok(loaded)
    }

    pub fn load_ledger_file(&self, path: impl AsRef<Path>) -> Result<usize, RepositoryError> {
        let file = File::open(path.as_ref())?;
        let loaded = self.load_ledger(BufReader::new(file))?;

        info!("Loaded {loaded} ledger rows from {}", path.as_ref().display());

        Ok(loaded)
    }

    /// Loads organization profiles from CSV, returning how many were stored.
    pub fn load_organizations<R: Read>(&self, reader: R) -> Result<usize, RepositoryError> {
        let mut reader = ReaderBuilder::new()
            .trim(Trim::All)
            .from_reader(reader);

        let mut loaded = 0;

        for result in reader.deserialize::<OrganizationRecord>() {
            let record = result?;

            self.save_organization(record.organization_id, record.financial_year, OrganizationProfile {
                official_name: record.official_name,
                kana_name: record.kana_name,
                office_address: record.office_address,
                representative_name: record.representative_name,
                accountant_name: record.accountant_name,
                previous_year_carryover: record.previous_year_carryover
            });
            loaded += 1;
        }

        Ok(loaded)
    }

    pub fn load_organizations_file(&self, path: impl AsRef<Path>) -> Result<usize, RepositoryError> {
        let file = File::open(path.as_ref())?;
        let loaded = self.load_organizations(BufReader::new(file))?;

        info!("Loaded {loaded} organization profiles from {}", path.as_ref().display());

        Ok(loaded)
    }

    fn section(&self, organization_id: OrganizationId, financial_year: FinancialYear, section: SectionKind) -> Vec<TransactionRow> {
        self.transactions.get(&(organization_id, financial_year, section))
            .map(|rows| rows.value().clone())
            .unwrap_or_default()
    }
}

impl Default for LedgerStorage {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ReportTransactionRepository for LedgerStorage {
    async fn find_organization_profile(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Option<OrganizationProfile>, RepositoryError> {
        Ok(self.organizations.get(&(organization_id, financial_year)).map(|profile| profile.value().clone()))
    }

    async fn find_business_income_transactions(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Vec<TransactionRow>, RepositoryError> {
        Ok(self.section(organization_id, financial_year, SectionKind::BusinessIncome))
    }

    async fn find_loan_income_transactions(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Vec<TransactionRow>, RepositoryError> {
        Ok(self.section(organization_id, financial_year, SectionKind::LoanIncome))
    }

    async fn find_grant_income_transactions(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Vec<TransactionRow>, RepositoryError> {
        Ok(self.section(organization_id, financial_year, SectionKind::GrantIncome))
    }

    async fn find_other_income_transactions(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Vec<TransactionRow>, RepositoryError> {
        Ok(self.section(organization_id, financial_year, SectionKind::OtherIncome))
    }

    async fn find_personal_donation_transactions(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Vec<TransactionRow>, RepositoryError> {
        Ok(self.section(organization_id, financial_year, SectionKind::PersonalDonation))
    }

    async fn find_utility_expense_transactions(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Vec<TransactionRow>, RepositoryError> {
        Ok(self.section(organization_id, financial_year, SectionKind::UtilityExpense))
    }

    async fn find_supplies_expense_transactions(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Vec<TransactionRow>, RepositoryError> {
        Ok(self.section(organization_id, financial_year, SectionKind::SuppliesExpense))
    }

    async fn find_office_expense_transactions(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Vec<TransactionRow>, RepositoryError> {
        Ok(self.section(organization_id, financial_year, SectionKind::OfficeExpense))
    }

    async fn find_grant_expenditure_transactions(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Vec<TransactionRow>, RepositoryError> {
        Ok(self.section(organization_id, financial_year, SectionKind::GrantExpenditure))
    }
}
