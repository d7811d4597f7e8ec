pub mod dataset;

pub use dataset::{Dataset, read_dataset, write_dataset};
