use std::io::{BufWriter, Write};
use tracing::debug;

use crate::config::writer_config::WriterConfig;
use crate::error::Result;
use crate::table::table::Table;

/// Writes headings and numeric records as delimited text.
///
/// Output goes through an internal `BufWriter`. `write_all` flushes before
/// returning; after single `write_heading`/`write` calls use `flush` (or
/// drop the writer, which flushes and ignores any error).
///
/// A failed write leaves whatever was already emitted in the sink.
pub struct Writer<W: Write> {
    config: WriterConfig,
    sink: BufWriter<W>,
}

impl<W: Write> Writer<W> {
    pub fn new(sink: W) -> Self {
        Writer::with_config(sink, WriterConfig::default())
    }

    pub fn with_config(sink: W, config: WriterConfig) -> Self {
        Writer {
            config,
            sink: BufWriter::new(sink),
        }
    }

    pub fn config(&self) -> &WriterConfig {
        &self.config
    }

    /// Writes `names` joined by the delimiter, each wrapped in double quotes
    /// when `quote_heading` is set.
    pub fn write_heading<S: AsRef<str>>(&mut self, names: &[S]) -> Result<()> {
        for (n, name) in names.iter().enumerate() {
            if n > 0 {
                self.sink.write_all(self.config.delimiter.as_bytes())?;
            }
            if self.config.quote_heading {
                write!(self.sink, "\"{}\"", name.as_ref())?;
            } else {
                self.sink.write_all(name.as_ref().as_bytes())?;
            }
        }
        self.end_line()
    }

    /// Writes one record using the configured float format.
    pub fn write(&mut self, record: &[f64]) -> Result<()> {
        for (n, value) in record.iter().enumerate() {
            if n > 0 {
                self.sink.write_all(self.config.delimiter.as_bytes())?;
            }
            let text = self.config.float_format.format(*value);
            self.sink.write_all(text.as_bytes())?;
        }
        self.end_line()
    }

    /// Writes the heading (if any) and every row of `table`, then flushes.
    ///
    /// The flush is attempted even when an earlier write failed; the first
    /// error wins.
    pub fn write_all(&mut self, headings: Option<&[String]>, table: &Table) -> Result<()> {
        let written = self.write_table(headings, table);
        let flushed = self.flush();
        written.and(flushed)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.sink.flush()?;
        Ok(())
    }

    /// Flushes and returns the underlying sink.
    pub fn into_inner(self) -> Result<W> {
        self.sink.into_inner().map_err(|e| e.into_error().into())
    }

    fn write_table(&mut self, headings: Option<&[String]>, table: &Table) -> Result<()> {
        if let Some(names) = headings {
            self.write_heading(names)?;
        }
        for row in table.rows_iter() {
            self.write(row)?;
        }
        debug!(rows = table.rows(), cols = table.cols(), "wrote table");
        Ok(())
    }

    fn end_line(&mut self) -> Result<()> {
        self.sink.write_all(self.config.line_ending().as_bytes())?;
        Ok(())
    }
}
