use std::path::PathBuf;

use smartsheet_model::SheetId;
use thiserror::Error;

/// Boxed error from a [`smartsheet_model::SheetSource`] implementation.
pub type SourceError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("failed to fetch sheet {sheet_id}")]
    FetchSheet {
        sheet_id: SheetId,
        #[source]
        source: SourceError,
    },
    #[error("failed to fetch attachments for row {row_id} of sheet {sheet_id}")]
    FetchAttachments {
        sheet_id: SheetId,
        row_id: u64,
        #[source]
        source: SourceError,
    },
    #[error("failed to create output file {}", path.display())]
    CreateOutput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to write CSV record")]
    Write(#[from] csv::Error),
}

impl ExportError {
    /// True for failures that came from the remote service.
    pub fn is_remote(&self) -> bool {
        matches!(
            self,
            Self::FetchSheet { .. } | Self::FetchAttachments { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, ExportError>;
