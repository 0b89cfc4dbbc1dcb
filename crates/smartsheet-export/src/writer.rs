//! CSV output for export records.

use std::io::Write;

use csv::{QuoteStyle, Terminator, WriterBuilder};
use smartsheet_model::{EXPORT_HEADER, ExportRecord};

use crate::error::Result;

/// Writes the export header on creation, then one line per record.
///
/// Fields are quoted only when they contain a delimiter, quote or line
/// break; records end with `\n`.
pub struct RecordWriter<W: Write> {
    inner: csv::Writer<W>,
    records: usize,
}

impl<W: Write> RecordWriter<W> {
    pub fn new(writer: W) -> Result<Self> {
        let mut inner = WriterBuilder::new()
            .has_headers(false)
            .quote_style(QuoteStyle::Necessary)
            .terminator(Terminator::Any(b'\n'))
            .from_writer(writer);
        inner.write_record(EXPORT_HEADER)?;
        Ok(Self { inner, records: 0 })
    }

    pub fn write(&mut self, record: &ExportRecord) -> Result<()> {
        self.inner.serialize(record)?;
        self.records += 1;
        Ok(())
    }

    /// Number of records written so far, excluding the header.
    pub fn records_written(&self) -> usize {
        self.records
    }

    pub fn flush(&mut self) -> Result<()> {
        self.inner.flush().map_err(csv::Error::from)?;
        Ok(())
    }

    /// Flushes buffered output and returns the underlying writer.
    pub fn finish(self) -> Result<W> {
        self.inner
            .into_inner()
            .map_err(|err| {
                let io = std::io::Error::new(err.error().kind(), err.to_string());
                csv::Error::from(io).into()
            })
    }
}
