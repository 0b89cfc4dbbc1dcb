use crate::{Attachment, Sheet, SheetId};

/// Read-only access to a sheet and its row attachments.
///
/// The exporter only needs these two calls; the HTTP client implements them
/// against the Smartsheet API and tests implement them in memory.
pub trait SheetSource {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Fetches the sheet with its columns and rows.
    fn fetch_sheet(&self, sheet_id: SheetId) -> Result<Sheet, Self::Error>;

    /// Fetches every attachment of one row, in service order.
    fn fetch_row_attachments(
        &self,
        sheet_id: SheetId,
        row_id: u64,
    ) -> Result<Vec<Attachment>, Self::Error>;
}
