// src/main.rs

use log::{info, warn, error};
use env_logger::Env;
use polybench::benchmark::{BenchmarkRunner, Registry};
use polybench::config::RunnerConfig;

fn main() {
    let (config, config_error) = match RunnerConfig::load() {
        Ok(config) => (config, None),
        Err(e) => (RunnerConfig::default(), Some(e)),
    };

    // Initialize the logger
    let env = Env::default()
        .filter_or("POLYBENCH_LOG", config.log_level.as_str())
        .write_style_or("POLYBENCH_LOG_STYLE", "auto");

    env_logger::Builder::from_env(env).init();

    if let Some(e) = config_error {
        warn!("Could not load configuration, using defaults: {}", e);
    }

    let registry = match Registry::standard().select(&config.units) {
        Ok(registry) => registry,
        Err(e) => {
            error!("{}", e);
            std::process::exit(2);
        }
    };

    info!(
        "PolyBench: {} units, {} passes, dataset {}",
        registry.len(),
        config.repetitions,
        config.dataset
    );

    let mut runner = BenchmarkRunner::new(registry, config.dataset)
        .with_failure_policy(config.failure_policy);
    let report = runner.run(config.repetitions);

    if report.halted_early {
        warn!("Run halted after {} passes", report.passes_completed());
    }
    info!(
        "Completed {} invocations ({} reported failure)",
        report.invocations(),
        report.failure_count()
    );

    std::process::exit(report.exit_code());
}
