// src/kernels/solvers/mod.rs

pub mod cholesky;
pub mod trisolv;
