// tests/config_env_tests.rs
//
// Environment overrides for the runner configuration. Kept in its own test
// binary with a single test, since it mutates process environment variables.

use std::env;
use std::io::Write;
use polybench::benchmark::FailurePolicy;
use polybench::config::RunnerConfig;
use polybench::dataset::DatasetSize;

#[cfg(test)]
mod config_env_tests {
    use super::*;

    #[test]
    fn test_environment_overrides_file_values() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "dataset = \"small\"\nrepetitions = 1\nfailure_policy = \"continue\"\nunits = [\"syrk\"]"
        )
        .unwrap();

        env::set_var("POLYBENCH_UNITS", "gemm,2mm");
        env::set_var("POLYBENCH_REPETITIONS", "3");
        env::set_var("POLYBENCH_FAILURE_POLICY", "fail_fast");

        let loaded = RunnerConfig::load_from_file(file.path());

        env::remove_var("POLYBENCH_UNITS");
        env::remove_var("POLYBENCH_REPETITIONS");
        env::remove_var("POLYBENCH_FAILURE_POLICY");

        let config = loaded.unwrap();
        // Untouched by the environment, so the file value stands.
        assert_eq!(config.dataset, DatasetSize::Small);
        assert_eq!(config.repetitions, 3);
        assert_eq!(config.failure_policy, FailurePolicy::FailFast);
        assert_eq!(config.units, vec!["gemm".to_string(), "2mm".to_string()]);
        assert_eq!(config.log_level, "info");
    }
}
