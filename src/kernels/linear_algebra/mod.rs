// src/kernels/linear_algebra/mod.rs
// Dense linear-algebra kernels: chained products and matrix-vector sweeps.

pub mod two_mm;
pub mod three_mm;
pub mod atax;
pub mod bicg;
pub mod doitgen;
pub mod mvt;
