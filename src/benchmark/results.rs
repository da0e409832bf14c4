// src/benchmark/results.rs

use serde::{Deserialize, Serialize};
use crate::dataset::DatasetSize;

/// Outcome of a single unit invocation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct InvocationRecord {
    pub unit: String,
    /// Zero-based index of the pass the invocation belongs to.
    pub pass: usize,
    pub status: i32,
}

impl InvocationRecord {
    pub fn is_failure(&self) -> bool {
        self.status != 0
    }
}

/// Everything a run observed, in invocation order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    pub dataset: DatasetSize,
    pub repetitions: usize,
    /// Number of units invoked in each full pass.
    pub units_per_pass: usize,
    pub records: Vec<InvocationRecord>,
    /// Set when a fail-fast run stopped at a failing unit.
    pub halted_early: bool,
}

impl RunReport {
    pub fn new(dataset: DatasetSize, repetitions: usize, units_per_pass: usize) -> Self {
        RunReport {
            dataset,
            repetitions,
            units_per_pass,
            records: Vec::new(),
            halted_early: false,
        }
    }

    pub fn record(&mut self, unit: &str, pass: usize, status: i32) {
        self.records.push(InvocationRecord {
            unit: unit.to_string(),
            pass,
            status,
        });
    }

    pub fn invocations(&self) -> usize {
        self.records.len()
    }

    pub fn failures(&self) -> impl Iterator<Item = &InvocationRecord> {
        self.records.iter().filter(|record| record.is_failure())
    }

    pub fn failure_count(&self) -> usize {
        self.failures().count()
    }

    /// Records of one pass, in invocation order.
    pub fn pass(&self, pass: usize) -> impl Iterator<Item = &InvocationRecord> {
        self.records.iter().filter(move |record| record.pass == pass)
    }

    /// Passes whose last unit ran.
    pub fn passes_completed(&self) -> usize {
        if self.units_per_pass == 0 {
            self.repetitions
        } else {
            self.records.len() / self.units_per_pass
        }
    }

    /// Status of the run itself. Unit failures are never folded into it.
    pub fn status(&self) -> i32 {
        0
    }

    /// Process exit code: non-zero only when a fail-fast run was cut short.
    pub fn exit_code(&self) -> i32 {
        if self.halted_early {
            1
        } else {
            self.status()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_failures_and_passes() {
        let mut report = RunReport::new(DatasetSize::Mini, 2, 2);
        report.record("a", 0, 0);
        report.record("b", 0, 3);
        report.record("a", 1, 0);
        report.record("b", 1, 0);

        assert_eq!(report.invocations(), 4);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.failures().next().map(|r| r.unit.as_str()), Some("b"));
        assert_eq!(report.pass(1).count(), 2);
        assert_eq!(report.passes_completed(), 2);
        assert_eq!(report.status(), 0);
        assert_eq!(report.exit_code(), 0);
    }

    #[test]
    fn test_halted_report() {
        let mut report = RunReport::new(DatasetSize::Small, 5, 2);
        report.record("a", 0, 0);
        report.record("b", 0, 0);
        report.record("a", 1, 7);
        report.halted_early = true;

        assert_eq!(report.passes_completed(), 1);
        assert_eq!(report.status(), 0);
        assert_eq!(report.exit_code(), 1);
    }

    #[test]
    fn test_pass_counts_once_its_last_unit_ran() {
        let mut report = RunReport::new(DatasetSize::Mini, 3, 2);
        report.record("a", 0, 0);
        report.record("b", 0, 0);
        report.record("a", 1, 0);
        report.record("b", 1, 4);
        report.halted_early = true;

        assert_eq!(report.passes_completed(), 2);
    }

    #[test]
    fn test_empty_registry_completes_every_pass() {
        let report = RunReport::new(DatasetSize::Mini, 5, 0);
        assert_eq!(report.passes_completed(), 5);
    }
}
