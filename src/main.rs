use std::io::{stderr, stdout, BufWriter, Write};
use std::process::exit;
use std::sync::Arc;
use std::time::Instant;

use anyhow::{anyhow, Result};
use tokio::task::spawn_blocking;
use tracing::{error, info};
use tracing::level_filters::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, Layer};

use fund_report::engine::export_report;
use fund_report::storage::LedgerStorage;
use fund_report::types::{FinancialYear, OrganizationId};

#[tokio::main]
async fn main() -> Result<()> {
    let args: Vec<String> = std::env::args().collect();

    if args.len() < 5 {
        eprintln!("Usage: fund-report [ledger].csv [organizations].csv [organization_id] [financial_year] [log_level:optional] > [report].xml");
        eprintln!("Available log levels: error, warn, info, debug, trace (default: error)");
        exit(1);
    }

    let organization_id: OrganizationId = args[3].parse()
        .map_err(|error| anyhow!("Invalid organization id '{}': {error}", args[3]))?;
    let financial_year: FinancialYear = args[4].parse()
        .map_err(|error| anyhow!("Invalid financial year '{}': {error}", args[4]))?;
    let log_level = args.get(5)
        .map(|s| parse_log_level(s)).unwrap_or_else(|| LevelFilter::ERROR);

    setup_logging(log_level);

    let timer = Instant::now();
    let storage = Arc::new(load_storage(args[1].clone(), args[2].clone()).await?);

    let exported = match export_report(storage, organization_id, financial_year).await {
        Ok(exported) => exported,
        Err(report_error) => {
            error!("Export failed: {report_error}");
            return Err(report_error.into());
        }
    };

    info!("Exported {} in: {:?}", exported.filename, timer.elapsed());

    write_xml_to_stdout(&exported.xml)?;

    Ok(())
}

fn parse_log_level(level: &str) -> LevelFilter {
    match level.to_lowercase().as_str() {
        "trace" => LevelFilter::TRACE,
        "debug" => LevelFilter::DEBUG,
        "info" => LevelFilter::INFO,
        "warn" => LevelFilter::WARN,
        "error" => LevelFilter::ERROR,
        _ => {
            eprintln!("Invalid log level '{}', defaulting to 'error'", level);
            LevelFilter::ERROR
        }
    }
}

fn setup_logging(level: LevelFilter) {
    //NOTE: The report goes to stdout, so logging has to use stderr
    let terminal_log = fmt::layer()
        .with_target(false)
        .with_writer(stderr)
        .with_filter(level);

    tracing_subscriber::registry()
        .with(terminal_log)
        .init();
}

async fn load_storage(ledger_path: String, organizations_path: String) -> Result<LedgerStorage> {
    spawn_blocking(move || -> Result<LedgerStorage> {
        let storage = LedgerStorage::new();
        storage.load_organizations_file(&organizations_path)?;
        storage.load_ledger_file(&ledger_path)?;
        Ok(storage)
    }).await?
}

fn write_xml_to_stdout(xml: &str) -> Result<()> {
    let mut output = BufWriter::new(stdout().lock());

    output.write_all(xml.as_bytes())?;
    writeln!(output)?;

    output.flush()?;

    Ok(())
}
