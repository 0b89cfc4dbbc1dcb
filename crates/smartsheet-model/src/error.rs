use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ModelError {
    #[error("sheet id must not be empty")]
    EmptySheetId,
    #[error("sheet id must be numeric, got {0:?}")]
    InvalidSheetId(String),
}
