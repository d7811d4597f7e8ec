//! Reading and writing numeric delimiter-separated files that do not quite
//! follow the CSV rules: stray whitespace, blank and comment lines before
//! the heading, trailing delimiters, quoted column names.

pub mod error;
pub mod config;
pub mod table;
pub mod read;
pub mod write;
pub mod dataset;

// Convenience re-exports
pub use error::{NumCsvError, Result};
pub use config::{ReaderConfig, WriterConfig};
pub use table::Table;
pub use read::{Reader, ReadState};
pub use write::{Writer, FloatFormat};
pub use dataset::{Dataset, read_dataset, write_dataset};
