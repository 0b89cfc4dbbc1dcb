//! Read-only snapshot types for Smartsheet sheets, rows and attachments.
//!
//! Everything here mirrors the JSON returned by the Smartsheet REST API 2.0
//! closely enough to deserialize it directly, plus the flattened
//! [`ExportRecord`] written to CSV and the [`SheetSource`] capability the
//! exporter consumes.

pub mod error;
pub mod ids;
pub mod record;
pub mod sheet;
pub mod source;

pub use error::ModelError;
pub use ids::SheetId;
pub use record::{EXPORT_HEADER, ExportRecord};
pub use sheet::{Attachment, Cell, Column, Row, Sheet};
pub use source::SheetSource;
