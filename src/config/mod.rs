// src/config/mod.rs

pub mod runner_config;

// Re-export main types for convenience
pub use runner_config::RunnerConfig;
