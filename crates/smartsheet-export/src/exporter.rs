//! Sheet export driver.
//!
//! One request fetches the sheet; then, strictly in row order, one request
//! per row fetches its attachments and the resulting records are written
//! before moving on. The first failed request aborts the export and
//! whatever was already written stays in the output.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;
use std::time::Instant;

use smartsheet_model::{Sheet, SheetId, SheetSource};
use tracing::{debug, info, info_span, warn};

use crate::error::{ExportError, Result};
use crate::flatten::{flatten_row, primary_column_id, primary_value};
use crate::redact::redact_value;
use crate::writer::RecordWriter;

/// Counts describing a finished export.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportSummary {
    pub sheet_id: SheetId,
    pub sheet_name: Option<String>,
    pub rows: usize,
    pub attachments: usize,
    pub records: usize,
}

/// Fetches the sheet and writes every row's records to `writer`.
pub fn export_sheet<S, W>(
    source: &S,
    sheet_id: SheetId,
    writer: &mut RecordWriter<W>,
) -> Result<ExportSummary>
where
    S: SheetSource,
    W: Write,
{
    let span = info_span!("export", sheet_id = %sheet_id);
    let _guard = span.enter();
    let sheet = fetch_sheet(source, sheet_id)?;
    write_sheet(source, sheet_id, &sheet, writer)
}

/// Fetches the sheet, then creates (or truncates) `path` and writes the CSV.
///
/// The file is only created once the sheet itself has been fetched.
pub fn export_to_path<S>(source: &S, sheet_id: SheetId, path: &Path) -> Result<ExportSummary>
where
    S: SheetSource,
{
    let span = info_span!("export", sheet_id = %sheet_id, output = %path.display());
    let _guard = span.enter();
    let sheet = fetch_sheet(source, sheet_id)?;

    let file = File::create(path).map_err(|source| ExportError::CreateOutput {
        path: path.to_path_buf(),
        source,
    })?;
    let mut writer = RecordWriter::new(BufWriter::new(file))?;
    let summary = write_sheet(source, sheet_id, &sheet, &mut writer)?;
    writer.finish()?;
    Ok(summary)
}

fn fetch_sheet<S: SheetSource>(source: &S, sheet_id: SheetId) -> Result<Sheet> {
    let start = Instant::now();
    let sheet = source
        .fetch_sheet(sheet_id)
        .map_err(|err| ExportError::FetchSheet {
            sheet_id,
            source: Box::new(err),
        })?;
    info!(
        sheet_name = sheet.name.as_deref().unwrap_or_default(),
        columns = sheet.columns.len(),
        rows = sheet.rows.len(),
        duration_ms = start.elapsed().as_millis(),
        "sheet fetched"
    );
    Ok(sheet)
}

fn write_sheet<S, W>(
    source: &S,
    sheet_id: SheetId,
    sheet: &Sheet,
    writer: &mut RecordWriter<W>,
) -> Result<ExportSummary>
where
    S: SheetSource,
    W: Write,
{
    let primary_column = primary_column_id(&sheet.columns);
    match primary_column {
        Some(column_id) => debug!(column_id, "primary column resolved"),
        None => warn!("sheet has no primary column, primary_value will be empty"),
    }

    let mut summary = ExportSummary {
        sheet_id,
        sheet_name: sheet.name.clone(),
        rows: 0,
        attachments: 0,
        records: 0,
    };

    for row in &sheet.rows {
        let value = primary_value(row, primary_column);
        let attachments = source
            .fetch_row_attachments(sheet_id, row.id)
            .map_err(|err| ExportError::FetchAttachments {
                sheet_id,
                row_id: row.id,
                source: Box::new(err),
            })?;
        debug!(
            row_id = row.id,
            row_number = row.row_number,
            primary_value = redact_value(&value),
            attachments = attachments.len(),
            "row fetched"
        );

        for record in flatten_row(row, &value, &attachments) {
            writer.write(&record)?;
            summary.records += 1;
        }
        summary.rows += 1;
        summary.attachments += attachments.len();
    }
    writer.flush()?;

    info!(
        rows = summary.rows,
        attachments = summary.attachments,
        records = summary.records,
        "export complete"
    );
    Ok(summary)
}
