use serde::{Serialize, Deserialize};

/// How a `Reader` splits and validates its input.
///
/// # Fields
/// - `delimiter`          — separates fields on every data line (default `","`)
/// - `heading_delimiter`  — separates fields on the heading line only; `None`
///                          or an empty string means "use `delimiter`"
/// - `comment`            — lines whose first characters are this prefix are
///                          skipped while searching for the heading
/// - `fields_per_record`  — pre-declared column count; when `None` it is
///                          taken from the heading or the first data line
/// - `no_heading`         — tells `read_dataset` not to look for a heading
/// - `skip_blank_records` — also skip blank and comment lines between data
///                          rows instead of reporting them as short rows
///
/// The config is attached to a reader at construction and never changes
/// during a pass.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReaderConfig {
    pub delimiter: String,
    pub heading_delimiter: Option<String>,
    pub comment: Option<String>,
    pub fields_per_record: Option<usize>,
    pub no_heading: bool,
    pub skip_blank_records: bool,
}

impl Default for ReaderConfig {
    fn default() -> Self {
        ReaderConfig {
            delimiter: ",".to_string(),
            heading_delimiter: None,
            comment: None,
            fields_per_record: None,
            no_heading: false,
            skip_blank_records: false,
        }
    }
}

impl ReaderConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_heading_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.heading_delimiter = Some(delimiter.into());
        self
    }

    pub fn with_comment(mut self, prefix: impl Into<String>) -> Self {
        self.comment = Some(prefix.into());
        self
    }

    pub fn with_fields_per_record(mut self, count: usize) -> Self {
        self.fields_per_record = Some(count);
        self
    }

    pub fn with_no_heading(mut self, no_heading: bool) -> Self {
        self.no_heading = no_heading;
        self
    }

    pub fn with_skip_blank_records(mut self, skip: bool) -> Self {
        self.skip_blank_records = skip;
        self
    }

    /// The delimiter used for the heading line.
    pub fn effective_heading_delimiter(&self) -> &str {
        match self.heading_delimiter.as_deref() {
            Some(d) if !d.is_empty() => d,
            _ => &self.delimiter,
        }
    }

    /// `true` if `line` starts with the configured comment prefix. An
    /// indented prefix does not count.
    pub fn is_comment(&self, line: &str) -> bool {
        match self.comment.as_deref() {
            Some(prefix) if !prefix.is_empty() => line.starts_with(prefix),
            _ => false,
        }
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `ReaderConfig` from a JSON file. Missing keys take their
    /// default values.
    pub fn load_json(path: &str) -> std::io::Result<ReaderConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
