use crate::document::render_report;
use crate::engine::assembler::ReportAssembler;
use crate::engine::errors::ReportError;
use crate::models::ReportData;
use crate::storage::ReportTransactionRepository;
use crate::types::{FinancialYear, OrganizationId};
use moka::future::Cache;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::info;

const DEFAULT_CACHE_CAPACITY: u64 = 64;
const DEFAULT_CACHE_TIMEOUT: Duration = Duration::from_secs(600);

/// A rendered report, ready to be re-encoded and offered for download.
#[derive(Debug, Clone)]
pub struct ExportedReport {
    /// UTF-8 XML. The declaration names Shift_JIS, the encoding it is submitted in.
    pub xml: String,
    pub report_data: ReportData,
    pub filename: String
}

pub fn report_filename(organization_id: OrganizationId, financial_year: FinancialYear) -> String {
    format!("SYUUSHI_{organization_id}_{financial_year}.xml")
}

/// Assembles and renders the report of one organization for one financial year.
pub async fn export_report<R: ReportTransactionRepository>(repository: Arc<R>, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<ExportedReport, ReportError> {
    let timer = Instant::now();
    info!("Exporting report for organization [{organization_id}] year [{financial_year}]");

    let report_data = ReportAssembler::new(repository).assemble(organization_id, financial_year).await?;
    let xml = render_report(&report_data)?;
    let filename = report_filename(organization_id, financial_year);

    info!("Exported {filename} ({} bytes) in {:?}", xml.len(), timer.elapsed());

    Ok(ExportedReport {
        xml,
        report_data,
        filename
    })
}

/// Caches whole exports per organization and financial year.
///
/// Failed exports are not cached, the next call retries them.
pub struct ReportExporter<R: ReportTransactionRepository> {
    repository: Arc<R>,
    cache: Cache<(OrganizationId, FinancialYear), Arc<ExportedReport>>,
    cache_capacity: u64,
    cache_timeout: Duration
}

impl<R: ReportTransactionRepository> ReportExporter<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self {
            repository,
            cache: Self::build_cache(DEFAULT_CACHE_CAPACITY, DEFAULT_CACHE_TIMEOUT),
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_timeout: DEFAULT_CACHE_TIMEOUT
        }
    }

    pub fn with_cache_capacity(mut self, capacity: u64) -> Self {
        self.cache_capacity = capacity;
        self.cache = Self::build_cache(self.cache_capacity, self.cache_timeout);
        self
    }

    pub fn with_cache_timeout(mut self, timeout: Duration) -> Self {
        self.cache_timeout = timeout;
        self.cache = Self::build_cache(self.cache_capacity, self.cache_timeout);
        self
    }

    fn build_cache(capacity: u64, timeout: Duration) -> Cache<(OrganizationId, FinancialYear), Arc<ExportedReport>> {
        Cache::builder()
            .max_capacity(capacity)
            .time_to_live(timeout)
            .build()
    }

    pub async fn export(&self, organization_id: OrganizationId, financial_year: FinancialYear) -> Result<Arc<ExportedReport>, Arc<ReportError>> {
        let repository = self.repository.clone();

        self.cache
            .try_get_with((organization_id, financial_year), async move {
                export_report(repository, organization_id, financial_year).await.map(Arc::new)
            })
            .await
    }

    /// Drops the cached export, e.g. after the ledger changed.
    pub async fn invalidate(&self, organization_id: OrganizationId, financial_year: FinancialYear) {
        self.cache.invalidate(&(organization_id, financial_year)).await;
    }
}
