// src/dataset/mod.rs

pub mod dataset_size;

pub use dataset_size::{DatasetSize, ParseDatasetSizeError};
