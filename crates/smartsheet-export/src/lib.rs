//! Row/attachment flattening and CSV emission for Smartsheet exports.
//!
//! A sheet is fetched once through a [`SheetSource`], then each row's
//! attachments are fetched in row order and written as one CSV line per
//! attachment (or one placeholder line for a row with none).
//!
//! [`SheetSource`]: smartsheet_model::SheetSource

pub mod error;
pub mod exporter;
pub mod flatten;
pub mod redact;
pub mod writer;

pub use error::{ExportError, Result};
pub use exporter::{ExportSummary, export_sheet, export_to_path};
pub use flatten::{flatten_row, primary_column_id, primary_value};
pub use writer::RecordWriter;
