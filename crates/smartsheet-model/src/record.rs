use serde::Serialize;

/// CSV header, in field order of [`ExportRecord`].
pub const EXPORT_HEADER: [&str; 5] = [
    "row_id",
    "row_number",
    "primary_value",
    "attachment_id",
    "attachment_name",
];

/// One CSV line: a row paired with one of its attachments, or with none.
///
/// Rows without attachments produce a single record whose attachment fields
/// are `None` and serialize as empty CSV fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExportRecord {
    pub row_id: u64,
    pub row_number: u64,
    pub primary_value: String,
    pub attachment_id: Option<u64>,
    pub attachment_name: Option<String>,
}

impl ExportRecord {
    pub fn has_attachment(&self) -> bool {
        self.attachment_id.is_some()
    }
}
