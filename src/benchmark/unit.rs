// src/benchmark/unit.rs

use std::fmt;
use crate::dataset::DatasetSize;

/// A named benchmark unit: runs some work at the given size, returns a status
/// where non-zero means the unit reported a failure.
pub struct BenchmarkUnit {
    name: String,
    invoke: Box<dyn Fn(DatasetSize) -> i32>,
}

impl BenchmarkUnit {
    pub fn new<F>(name: impl Into<String>, invoke: F) -> Self
    where
        F: Fn(DatasetSize) -> i32 + 'static,
    {
        BenchmarkUnit {
            name: name.into(),
            invoke: Box::new(invoke),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn invoke(&self, dataset: DatasetSize) -> i32 {
        (self.invoke)(dataset)
    }
}

impl fmt::Debug for BenchmarkUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BenchmarkUnit").field("name", &self.name).finish()
    }
}
