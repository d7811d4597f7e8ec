pub mod fields;
pub mod reader;

pub use reader::{Reader, ReadState, Records};
