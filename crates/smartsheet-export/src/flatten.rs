//! Primary value resolution and row flattening.
//!
//! Both lookups are single forward scans where the first match wins, so
//! duplicate column ids resolve the same way the service orders them.

use smartsheet_model::{Attachment, Cell, Column, ExportRecord, Row};

/// Returns the id of the first column flagged primary.
pub fn primary_column_id(columns: &[Column]) -> Option<u64> {
    columns.iter().find(|column| column.primary).map(|column| column.id)
}

/// Text of the row's first cell in the primary column, or `""`.
pub fn primary_value(row: &Row, primary_column: Option<u64>) -> String {
    let Some(column_id) = primary_column else {
        return String::new();
    };
    row.cells
        .iter()
        .find(|cell| cell.column_id == column_id)
        .map(Cell::text)
        .unwrap_or_default()
}

/// Expands a row into one record per attachment, or a single record with
/// empty attachment fields when there are none.
pub fn flatten_row(row: &Row, primary_value: &str, attachments: &[Attachment]) -> Vec<ExportRecord> {
    let record = |attachment: Option<&Attachment>| ExportRecord {
        row_id: row.id,
        row_number: row.row_number,
        primary_value: primary_value.to_string(),
        attachment_id: attachment.map(|a| a.id),
        attachment_name: attachment.map(|a| a.name.clone()),
    };

    if attachments.is_empty() {
        return vec![record(None)];
    }
    attachments.iter().map(|a| record(Some(a))).collect()
}
