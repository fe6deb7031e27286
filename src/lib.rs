//! Political fund report export.
//!
//! Aggregates ledger rows of one political organization and financial year into the
//! statutory report sections and renders them as the SYUUSHI07 series XML document.

pub mod aggregation;
pub mod document;
pub mod engine;
pub mod models;
pub mod serialization;
pub mod storage;
pub mod types;
