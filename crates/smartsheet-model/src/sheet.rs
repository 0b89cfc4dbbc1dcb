//! Sheet snapshot types as returned by `GET /sheets/{sheetId}` and
//! `GET /sheets/{sheetId}/rows/{rowId}/attachments`.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// A sheet with its columns and rows in the order the service returned them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Sheet {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub rows: Vec<Row>,
}

/// Column definition. At most one column per sheet is expected to be primary.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Column {
    pub id: u64,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub primary: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Row {
    pub id: u64,
    /// 1-based display position assigned by the service.
    pub row_number: u64,
    #[serde(default)]
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Cell {
    pub column_id: u64,
    #[serde(default)]
    pub value: Option<Value>,
}

impl Cell {
    /// Renders the cell value as CSV text.
    ///
    /// Absent and null values become the empty string, strings pass through
    /// verbatim and numbers or booleans use their JSON text form.
    #[must_use]
    pub fn text(&self) -> String {
        match &self.value {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(text)) => text.clone(),
            Some(Value::Number(number)) => number.to_string(),
            Some(Value::Bool(flag)) => flag.to_string(),
            Some(other) => other.to_string(),
        }
    }
}

/// A file attached to a single row.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Attachment {
    pub id: u64,
    #[serde(default)]
    pub name: String,
}
