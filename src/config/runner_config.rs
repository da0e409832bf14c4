// src/config/runner_config.rs

use serde::{Deserialize, Serialize};
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File};
use std::path::Path;
use crate::benchmark::FailurePolicy;
use crate::dataset::DatasetSize;

const DEFAULT_REPETITIONS: usize = 10;

/// Runner configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RunnerConfig {
    /// Size class every kernel runs at
    pub dataset: DatasetSize,

    /// Number of full passes over the suite
    pub repetitions: usize,

    /// Logging level (error, warn, info, debug, trace)
    pub log_level: String,

    /// Whether a failing unit stops the run
    pub failure_policy: FailurePolicy,

    /// Units to run, by name; empty runs the whole suite
    pub units: Vec<String>,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        RunnerConfig {
            dataset: DatasetSize::Mini,
            repetitions: DEFAULT_REPETITIONS,
            log_level: "info".to_string(),
            failure_policy: FailurePolicy::Continue,
            units: Vec::new(),
        }
    }
}

impl RunnerConfig {
    /// Load configuration with precedence: config file → env vars → defaults
    pub fn load() -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        // TOML preferred, YAML fallback
        if Path::new("polybench.toml").exists() {
            builder = builder.add_source(File::with_name("polybench.toml"));
        } else if Path::new("polybench.yaml").exists() {
            builder = builder.add_source(File::with_name("polybench.yaml"));
        }

        Self::finish(builder)
    }

    /// Load configuration with custom file path
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let mut builder = Self::defaults()?;

        if path.as_ref().exists() {
            builder = builder.add_source(File::from(path.as_ref()));
        }

        Self::finish(builder)
    }

    fn defaults() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
        Config::builder()
            .set_default("dataset", DatasetSize::Mini.as_str())?
            .set_default("repetitions", DEFAULT_REPETITIONS as i64)?
            .set_default("log_level", "info")?
            .set_default("failure_policy", "continue")?
            .set_default("units", Vec::<String>::new())
    }

    fn finish(builder: ConfigBuilder<DefaultState>) -> Result<Self, ConfigError> {
        // Override with environment variables (prefix: POLYBENCH_)
        let builder = builder.add_source(
            Environment::with_prefix("POLYBENCH")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true)
                .list_separator(",")
                .with_list_parse_key("units"),
        );

        let config = builder.build()?;
        config.try_deserialize()
    }
}
