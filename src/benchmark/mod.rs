// src/benchmark/mod.rs

pub mod unit;
pub mod registry;
pub mod results;
pub mod runner;

pub use unit::BenchmarkUnit;
pub use registry::{Registry, RegistryError};
pub use results::{InvocationRecord, RunReport};
pub use runner::{BenchmarkRunner, FailurePolicy, RunnerState};
