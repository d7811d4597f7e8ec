use std::num::ParseFloatError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, NumCsvError>;

/// Every way a read or write call can fail.
///
/// None of these leave the reader desynchronized: the offending line has
/// already been consumed, so after a `FieldCount` or `Parse` error the caller
/// may keep calling `Reader::read` to continue with the next line.
#[derive(Debug, Error)]
pub enum NumCsvError {
    /// The underlying byte source or sink failed. Also covers lines that are
    /// not valid UTF-8.
    #[error("stream error: {0}")]
    Stream(#[from] std::io::Error),

    /// A line (or the heading) had a different number of non-blank fields
    /// than the stream expects.
    #[error("line {line}: expected {expected} fields, found {found}")]
    FieldCount {
        line: usize,
        expected: usize,
        found: usize,
    },

    /// A field could not be read as a floating-point number.
    #[error("line {line}, field {field}: cannot parse {token:?} as a number")]
    Parse {
        line: usize,
        /// 0-based index among the non-blank fields of the line.
        field: usize,
        token: String,
        #[source]
        source: ParseFloatError,
    },
}

impl NumCsvError {
    pub fn is_stream(&self) -> bool {
        matches!(self, NumCsvError::Stream(_))
    }
}
