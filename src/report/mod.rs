//! Report generation - aggregation and rendering.
//!
//! # Module Organization
//!
//! - `rows` - Per-category aggregation with the shared row accumulator
//! - `table` - Plain-text column alignment helpers
//! - `summary` - Console summary (counts, common failures, slow tests)
//! - `export` - CSV output
//! - `console` - Detailed breakdown for the console
//! - `wiki` - Detailed breakdown as mediawiki markup

mod console;
mod export;
mod rows;
mod summary;
mod table;
mod wiki;

pub use console::detailed_report_console;
pub use export::csv_report;
pub use rows::{AggRow, DetailedTable, build_detailed_table};
pub use summary::summary_report;
pub use wiki::detailed_report_wiki;
