// src/benchmark/registry.rs

use std::error::Error;
use std::fmt;
use log::debug;
use crate::benchmark::unit::BenchmarkUnit;
use crate::dataset::DatasetSize;
use crate::kernels::STANDARD_SUITE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegistryError {
    DuplicateUnit {
        name: String,
    },
    UnknownUnit {
        name: String,
        available: Vec<String>,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::DuplicateUnit { name } => {
                write!(f, "benchmark unit '{}' is already registered", name)
            }
            RegistryError::UnknownUnit { name, available } => {
                write!(f, "unknown benchmark unit '{}' (available: {})", name, available.join(", "))
            }
        }
    }
}

impl Error for RegistryError {}

/// Ordered set of benchmark units. Order of registration is the order of
/// invocation within a pass.
#[derive(Debug, Default)]
pub struct Registry {
    units: Vec<BenchmarkUnit>,
}

impl Registry {
    pub fn new() -> Self {
        Registry { units: Vec::new() }
    }

    /// The full PolyBench suite, correlation first.
    pub fn standard() -> Self {
        let units = STANDARD_SUITE
            .iter()
            .map(|&(name, kernel)| BenchmarkUnit::new(name, kernel))
            .collect();
        Registry { units }
    }

    pub fn register<F>(&mut self, name: impl Into<String>, invoke: F) -> Result<(), RegistryError>
    where
        F: Fn(DatasetSize) -> i32 + 'static,
    {
        let name = name.into();
        if self.contains(&name) {
            return Err(RegistryError::DuplicateUnit { name });
        }
        self.units.push(BenchmarkUnit::new(name, invoke));
        Ok(())
    }

    /// Builder form of [`Registry::register`].
    pub fn with_unit<F>(mut self, name: impl Into<String>, invoke: F) -> Result<Self, RegistryError>
    where
        F: Fn(DatasetSize) -> i32 + 'static,
    {
        self.register(name, invoke)?;
        Ok(self)
    }

    /// Keep only the named units. The declared order is preserved regardless
    /// of the order of `names`; an empty list keeps everything.
    pub fn select<S: AsRef<str>>(self, names: &[S]) -> Result<Self, RegistryError> {
        if names.is_empty() {
            return Ok(self);
        }

        for name in names {
            if !self.contains(name.as_ref()) {
                return Err(RegistryError::UnknownUnit {
                    name: name.as_ref().to_string(),
                    available: self.names().iter().map(|n| n.to_string()).collect(),
                });
            }
        }

        let units: Vec<BenchmarkUnit> = self
            .units
            .into_iter()
            .filter(|unit| names.iter().any(|n| n.as_ref() == unit.name()))
            .collect();
        debug!("Selected {} benchmark units", units.len());
        Ok(Registry { units })
    }

    pub fn contains(&self, name: &str) -> bool {
        self.units.iter().any(|unit| unit.name() == name)
    }

    pub fn names(&self) -> Vec<&str> {
        self.units.iter().map(|unit| unit.name()).collect()
    }

    pub fn units(&self) -> &[BenchmarkUnit] {
        &self.units
    }

    pub fn len(&self) -> usize {
        self.units.len()
    }

    pub fn is_empty(&self) -> bool {
        self.units.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_registry_order() {
        let registry = Registry::standard();
        assert_eq!(registry.len(), 16);
        assert_eq!(
            registry.names(),
            vec![
                "correlation", "2mm", "3mm", "atax", "bicg", "cholesky", "doitgen", "gemm",
                "gemver", "gesummv", "mvt", "symm", "syr2k", "syrk", "trisolv", "trmm",
            ]
        );
    }

    #[test]
    fn test_register_rejects_duplicates() {
        let mut registry = Registry::new();
        registry.register("a", |_| 0).unwrap();
        let err = registry.register("a", |_| 1).unwrap_err();
        assert_eq!(err, RegistryError::DuplicateUnit { name: "a".to_string() });
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_select_keeps_declared_order() {
        let registry = Registry::standard().select(&["trmm", "correlation", "gemm"]).unwrap();
        assert_eq!(registry.names(), vec!["correlation", "gemm", "trmm"]);
    }

    #[test]
    fn test_select_empty_keeps_everything() {
        let names: [&str; 0] = [];
        let registry = Registry::standard().select(&names).unwrap();
        assert_eq!(registry.len(), 16);
    }

    #[test]
    fn test_select_unknown_unit() {
        let err = Registry::standard().select(&["lu"]).unwrap_err();
        match err {
            RegistryError::UnknownUnit { name, available } => {
                assert_eq!(name, "lu");
                assert_eq!(available.len(), 16);
            }
            other => panic!("unexpected error: {}", other),
        }
    }
}
