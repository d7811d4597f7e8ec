use serde::Serialize;
use std::io::{BufRead, Write};
use tracing::debug;

use crate::error::Result;
use crate::read::reader::Reader;
use crate::table::table::Table;
use crate::write::writer::Writer;

/// A table plus its column names, as handed to downstream consumers.
///
/// `heading` is `None` when the input was read with `no_heading`.
#[derive(Debug, Clone, PartialEq, Serialize, Default)]
pub struct Dataset {
    pub heading: Option<Vec<String>>,
    pub table: Table,
}

impl Dataset {
    pub fn new(heading: Option<Vec<String>>, table: Table) -> Self {
        Dataset { heading, table }
    }

    /// Index of the column called `name`, if the dataset has a heading.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.heading.as_ref()?.iter().position(|h| h == name)
    }

    /// Copies out the column called `name`.
    pub fn column_by_name(&self, name: &str) -> Option<Vec<f64>> {
        self.column_index(name).map(|j| self.table.column(j))
    }
}

/// Reads a whole stream: the heading unless the reader's config says
/// `no_heading`, then every record.
pub fn read_dataset<R: BufRead>(reader: &mut Reader<R>) -> Result<Dataset> {
    let heading = if reader.config().no_heading {
        None
    } else {
        Some(reader.read_heading()?)
    };
    let table = reader.read_all()?;
    debug!(
        rows = table.rows(),
        cols = table.cols(),
        has_heading = heading.is_some(),
        "read dataset"
    );
    Ok(Dataset { heading, table })
}

/// Writes the heading (if any) and every row, then flushes.
pub fn write_dataset<W: Write>(writer: &mut Writer<W>, dataset: &Dataset) -> Result<()> {
    writer.write_all(dataset.heading.as_deref(), &dataset.table)
}
