pub mod float_format;
pub mod writer;

pub use float_format::FloatFormat;
pub use writer::Writer;
