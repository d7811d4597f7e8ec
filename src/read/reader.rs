use std::io::{self, BufRead, BufReader, Read};
use tracing::{debug, trace};

use crate::config::reader_config::ReaderConfig;
use crate::error::{NumCsvError, Result};
use crate::read::fields::{split_fields, strip_quotes, trim_line_ending};
use crate::table::table::Table;

/// Where a `Reader` is in its stream.
///
/// ```text
/// Unstarted ──read_heading──▶ HeadingRead ──read──▶ Reading ──EOF──▶ Exhausted
///     └────────────────────────read──────────────────▲
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadState {
    Unstarted,
    HeadingRead,
    Reading,
    Exhausted,
}

/// Reads numeric records, one per line, from a buffered byte source.
///
/// Call `read_heading` at most once and before any `read` if the input has a
/// heading line. Calling it again is not guarded against and will consume
/// a data line as if it were a heading. If the stream holds nothing but blank
/// and comment lines, `read_heading` returns an empty heading and the reader
/// is exhausted.
pub struct Reader<R> {
    config: ReaderConfig,
    source: R,
    line_buf: String,
    line: usize,
    state: ReadState,
    fields_per_record: Option<usize>,
}

impl<R: Read> Reader<BufReader<R>> {
    /// Wraps an unbuffered source in a `BufReader`.
    pub fn from_reader(source: R, config: ReaderConfig) -> Self {
        Reader::with_config(BufReader::new(source), config)
    }
}

impl<R: BufRead> Reader<R> {
    /// A reader with the default config (comma delimited, no comments).
    pub fn new(source: R) -> Self {
        Reader::with_config(source, ReaderConfig::default())
    }

    pub fn with_config(source: R, config: ReaderConfig) -> Self {
        // Zero means "not declared".
        let fields_per_record = config.fields_per_record.filter(|&n| n > 0);
        Reader {
            config,
            source,
            line_buf: String::new(),
            line: 0,
            state: ReadState::Unstarted,
            fields_per_record,
        }
    }

    pub fn config(&self) -> &ReaderConfig {
        &self.config
    }

    pub fn state(&self) -> ReadState {
        self.state
    }

    /// The field count every record must have, once it is known.
    pub fn fields_per_record(&self) -> Option<usize> {
        self.fields_per_record
    }

    /// 1-based number of the last physical line consumed; 0 before any.
    pub fn line_number(&self) -> usize {
        self.line
    }

    pub fn into_inner(self) -> R {
        self.source
    }

    /// Reads the heading, skipping any blank or comment lines before it.
    ///
    /// Tokens are trimmed, blank tokens are dropped, and one layer of
    /// surrounding double quotes is removed from each name. The number of
    /// names becomes the expected field count for every following record,
    /// unless one was declared in the config, in which case a mismatch is a
    /// `FieldCount` error.
    ///
    /// If the stream ends before any usable line, an empty heading is
    /// returned and the reader is exhausted.
    pub fn read_heading(&mut self) -> Result<Vec<String>> {
        let mut found = false;
        while self.next_line()? {
            if self.line_buf.trim().is_empty() {
                trace!(line = self.line, "skipping blank line before heading");
                continue;
            }
            if self.config.is_comment(&self.line_buf) {
                trace!(line = self.line, "skipping comment line before heading");
                continue;
            }
            found = true;
            break;
        }

        if !found {
            debug!(lines = self.line, "stream ended before a heading line");
            self.state = ReadState::Exhausted;
            return match self.fields_per_record {
                Some(expected) => Err(NumCsvError::FieldCount {
                    line: self.line,
                    expected,
                    found: 0,
                }),
                None => Ok(Vec::new()),
            };
        }

        let names: Vec<String> =
            split_fields(&self.line_buf, self.config.effective_heading_delimiter())
                .into_iter()
                .map(|name| strip_quotes(name).to_string())
                .collect();

        if let Some(expected) = self.fields_per_record {
            if names.len() != expected {
                return Err(NumCsvError::FieldCount {
                    line: self.line,
                    expected,
                    found: names.len(),
                });
            }
        }
        self.fields_per_record = Some(names.len());
        self.state = ReadState::HeadingRead;
        debug!(line = self.line, fields = names.len(), "parsed heading");
        Ok(names)
    }

    /// Reads the next record.
    ///
    /// Returns `Ok(None)` once the stream is exhausted, and keeps doing so on
    /// every later call. An error consumes the offending line, so the caller
    /// may skip it by calling `read` again.
    pub fn read(&mut self) -> Result<Option<Vec<f64>>> {
        if self.state == ReadState::Exhausted {
            return Ok(None);
        }
        loop {
            if !self.next_line()? {
                debug!(lines = self.line, "end of stream");
                self.state = ReadState::Exhausted;
                return Ok(None);
            }
            if self.config.skip_blank_records
                && (self.line_buf.trim().is_empty() || self.config.is_comment(&self.line_buf))
            {
                trace!(line = self.line, "skipping blank or comment record");
                continue;
            }
            break;
        }

        let line = self.line;
        let fields = split_fields(&self.line_buf, &self.config.delimiter);
        let expected = match self.fields_per_record {
            Some(n) => n,
            None => {
                debug!(line, fields = fields.len(), "field count taken from first record");
                self.fields_per_record = Some(fields.len());
                fields.len()
            }
        };
        self.state = ReadState::Reading;

        if fields.len() != expected {
            return Err(NumCsvError::FieldCount {
                line,
                expected,
                found: fields.len(),
            });
        }

        let row = fields
            .iter()
            .enumerate()
            .map(|(field, token)| {
                token.parse::<f64>().map_err(|source| NumCsvError::Parse {
                    line,
                    field,
                    token: token.to_string(),
                    source,
                })
            })
            .collect::<Result<Vec<f64>>>()?;
        Ok(Some(row))
    }

    /// Reads every remaining record into a table.
    ///
    /// The first error aborts the whole read and the rows gathered so far
    /// are dropped. Drive `read` directly to keep going past bad lines.
    pub fn read_all(&mut self) -> Result<Table> {
        let mut data = Vec::new();
        let mut rows = 0;
        while let Some(row) = self.read()? {
            data.extend_from_slice(&row);
            rows += 1;
        }
        let cols = self.fields_per_record.unwrap_or(0);
        debug!(rows, cols, "read table");
        Ok(Table::from_flat(rows, cols, data))
    }

    /// Iterates over the remaining records. `FieldCount` and `Parse` errors
    /// are yielded and iteration continues with the next line; a `Stream`
    /// error ends the iteration after it is yielded.
    pub fn records(&mut self) -> Records<'_, R> {
        Records { reader: self, failed: false }
    }

    /// A line that is not valid UTF-8 still counts toward `line` before it
    /// is reported, so later errors point at the right physical line.
    fn next_line(&mut self) -> Result<bool> {
        let mut bytes = std::mem::take(&mut self.line_buf).into_bytes();
        bytes.clear();
        let n = self.source.read_until(b'\n', &mut bytes)?;
        if n == 0 {
            return Ok(false);
        }
        self.line += 1;
        self.line_buf = String::from_utf8(bytes)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
        trim_line_ending(&mut self.line_buf);
        Ok(true)
    }
}

pub struct Records<'a, R> {
    reader: &'a mut Reader<R>,
    failed: bool,
}

impl<R: BufRead> Iterator for Records<'_, R> {
    type Item = Result<Vec<f64>>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed {
            return None;
        }
        let next = self.reader.read().transpose();
        if let Some(Err(e)) = &next {
            self.failed = e.is_stream();
        }
        next
    }
}
