// src/lib.rs

pub mod benchmark;
pub mod config;
pub mod dataset;
pub mod kernels;
