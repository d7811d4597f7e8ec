use serde::{Serialize, Deserialize};
use crate::write::float_format::FloatFormat;

/// How a `Writer` lays out its output.
///
/// # Fields
/// - `delimiter`     — placed between fields (default `","`)
/// - `use_crlf`      — terminate lines with `\r\n` instead of `\n`
/// - `quote_heading` — wrap every heading name in double quotes
/// - `float_format`  — textual style for values; see `FloatFormat`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WriterConfig {
    pub delimiter: String,
    pub use_crlf: bool,
    pub quote_heading: bool,
    pub float_format: FloatFormat,
}

impl Default for WriterConfig {
    fn default() -> Self {
        WriterConfig {
            delimiter: ",".to_string(),
            use_crlf: false,
            quote_heading: false,
            float_format: FloatFormat::Scientific,
        }
    }
}

impl WriterConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiter(mut self, delimiter: impl Into<String>) -> Self {
        self.delimiter = delimiter.into();
        self
    }

    pub fn with_crlf(mut self, use_crlf: bool) -> Self {
        self.use_crlf = use_crlf;
        self
    }

    pub fn with_quote_heading(mut self, quote: bool) -> Self {
        self.quote_heading = quote;
        self
    }

    pub fn with_float_format(mut self, format: FloatFormat) -> Self {
        self.float_format = format;
        self
    }

    pub fn line_ending(&self) -> &'static str {
        if self.use_crlf { "\r\n" } else { "\n" }
    }

    /// Serializes the config to a pretty-printed JSON file.
    pub fn save_json(&self, path: &str) -> std::io::Result<()> {
        let file = std::fs::File::create(path)?;
        let writer = std::io::BufWriter::new(file);
        serde_json::to_writer_pretty(writer, self)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))
    }

    /// Deserializes a `WriterConfig` from a JSON file.
    pub fn load_json(path: &str) -> std::io::Result<WriterConfig> {
        let file = std::fs::File::open(path)?;
        let reader = std::io::BufReader::new(file);
        serde_json::from_reader(reader)
            .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidData, e))
    }
}
