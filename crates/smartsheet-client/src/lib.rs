//! Blocking client for the Smartsheet REST API 2.0.
//!
//! Only the two read-only calls the exporter needs are implemented:
//! fetching a sheet and listing a row's attachments. Requests are issued
//! sequentially and never retried; a failed call surfaces as a
//! [`ClientError`].
//!
//! ```no_run
//! use smartsheet_client::SmartsheetClient;
//! use smartsheet_model::SheetId;
//!
//! # fn main() -> smartsheet_client::Result<()> {
//! let client = SmartsheetClient::new("token", smartsheet_client::DEFAULT_API_BASE_URL)?;
//! let sheet = client.get_sheet(SheetId::new(3002834590427012))?;
//! for row in &sheet.rows {
//!     let attachments = client.list_row_attachments(SheetId::new(sheet.id), row.id)?;
//!     println!("row {} has {} attachments", row.row_number, attachments.len());
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod error;
pub mod types;

pub use client::{DEFAULT_API_BASE_URL, SmartsheetClient};
pub use error::{ClientError, Result};
