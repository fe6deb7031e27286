mod assembler;
mod errors;
mod exporter;

pub use assembler::ReportAssembler;
pub use errors::ReportError;
pub use exporter::{export_report, report_filename, ExportedReport, ReportExporter};
