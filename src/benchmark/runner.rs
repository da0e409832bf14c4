// src/benchmark/runner.rs

use log::{debug, trace, warn};
use serde::{Deserialize, Serialize};
use crate::benchmark::registry::Registry;
use crate::benchmark::results::RunReport;
use crate::dataset::DatasetSize;

/// What to do when a unit reports a non-zero status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    /// Record the failure and carry on with the next unit.
    #[default]
    Continue,
    /// Stop the run at the first failing unit.
    FailFast,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerState {
    Idle,
    Running,
}

/// Runs every unit of a registry once per pass, in registry order, for a
/// fixed number of passes. Single-threaded; each unit runs to completion
/// before the next one starts. A panicking unit is not caught.
pub struct BenchmarkRunner {
    registry: Registry,
    dataset: DatasetSize,
    policy: FailurePolicy,
    state: RunnerState,
}

impl BenchmarkRunner {
    pub fn new(registry: Registry, dataset: DatasetSize) -> Self {
        BenchmarkRunner {
            registry,
            dataset,
            policy: FailurePolicy::default(),
            state: RunnerState::Idle,
        }
    }

    pub fn with_failure_policy(mut self, policy: FailurePolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Run `repetitions` full passes over the registry.
    pub fn run(&mut self, repetitions: usize) -> RunReport {
        let mut report = RunReport::new(self.dataset, repetitions, self.registry.len());
        let total = repetitions * self.registry.len();

        self.state = RunnerState::Running;
        debug!(
            "Running {} units x {} passes at {}",
            self.registry.len(),
            repetitions,
            self.dataset
        );

        'passes: for pass in 0..repetitions {
            for unit in self.registry.units() {
                trace!("pass {}: {}", pass, unit.name());
                let status = unit.invoke(self.dataset);
                report.record(unit.name(), pass, status);

                if status != 0 {
                    warn!("{} returned status {} in pass {}", unit.name(), status, pass);
                    // A failure on the very last invocation leaves nothing to skip.
                    if self.policy == FailurePolicy::FailFast && report.invocations() < total {
                        report.halted_early = true;
                        break 'passes;
                    }
                }
            }
        }

        self.state = RunnerState::Idle;
        debug!(
            "Run finished: {} invocations, {} failures",
            report.invocations(),
            report.failure_count()
        );
        report
    }

    /// Run and return only the runner's own status, which is always 0.
    pub fn run_status(&mut self, repetitions: usize) -> i32 {
        self.run(repetitions).status()
    }

    pub fn state(&self) -> RunnerState {
        self.state
    }

    pub fn dataset(&self) -> DatasetSize {
        self.dataset
    }

    pub fn failure_policy(&self) -> FailurePolicy {
        self.policy
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    fn recording_registry(names: &[&str], log: &Rc<RefCell<Vec<String>>>) -> Registry {
        let mut registry = Registry::new();
        for &name in names {
            let log = Rc::clone(log);
            let owned = name.to_string();
            registry
                .register(name, move |_| {
                    log.borrow_mut().push(owned.clone());
                    0
                })
                .unwrap();
        }
        registry
    }

    #[test]
    fn test_new_runner_is_idle() {
        let runner = BenchmarkRunner::new(Registry::new(), DatasetSize::Mini);
        assert_eq!(runner.state(), RunnerState::Idle);
        assert_eq!(runner.failure_policy(), FailurePolicy::Continue);
    }

    #[test]
    fn test_order_repeats_every_pass() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let registry = recording_registry(&["A", "B", "C"], &log);
        let mut runner = BenchmarkRunner::new(registry, DatasetSize::Mini);

        assert_eq!(runner.run_status(2), 0);
        assert_eq!(*log.borrow(), vec!["A", "B", "C", "A", "B", "C"]);
        assert_eq!(runner.state(), RunnerState::Idle);
    }

    #[test]
    fn test_runner_returns_to_idle_after_run() {
        let mut runner = BenchmarkRunner::new(Registry::standard().select(&["atax"]).unwrap(), DatasetSize::Mini);
        let report = runner.run(1);
        assert_eq!(report.invocations(), 1);
        assert_eq!(runner.state(), RunnerState::Idle);
    }

    #[test]
    fn test_fail_fast_stops_at_first_failure() {
        let calls = Rc::new(RefCell::new(0usize));
        let (c1, c2) = (Rc::clone(&calls), Rc::clone(&calls));
        let registry = Registry::new()
            .with_unit("ok", move |_| {
                *c1.borrow_mut() += 1;
                0
            })
            .unwrap()
            .with_unit("bad", move |_| {
                *c2.borrow_mut() += 1;
                1
            })
            .unwrap();

        let mut runner = BenchmarkRunner::new(registry, DatasetSize::Mini)
            .with_failure_policy(FailurePolicy::FailFast);
        let report = runner.run(3);

        assert_eq!(*calls.borrow(), 2);
        assert!(report.halted_early);
        assert_eq!(report.status(), 0);
        assert_eq!(report.exit_code(), 1);
        assert_eq!(runner.state(), RunnerState::Idle);
    }

    #[test]
    fn test_fail_fast_failure_on_final_unit_completes_run() {
        let registry = Registry::new()
            .with_unit("a", |_| 0)
            .unwrap()
            .with_unit("bad", |_| 1)
            .unwrap();

        let mut runner = BenchmarkRunner::new(registry, DatasetSize::Mini)
            .with_failure_policy(FailurePolicy::FailFast);
        let report = runner.run(1);

        assert_eq!(report.invocations(), 2);
        assert!(!report.halted_early);
        assert_eq!(report.passes_completed(), 1);
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.exit_code(), 0);
    }
}
