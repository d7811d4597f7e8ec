pub mod reader_config;
pub mod writer_config;

pub use reader_config::ReaderConfig;
pub use writer_config::WriterConfig;
