// src/kernels/mod.rs
//
// The PolyBench kernels exercised by the runner. Every kernel sizes, fills and
// frees its own arrays on each invocation, using only the dataset size it is
// handed.

pub mod datamining;
pub mod linear_algebra;
pub mod blas;
pub mod solvers;

use crate::dataset::DatasetSize;

pub use datamining::correlation;
pub use linear_algebra::{two_mm, three_mm, atax, bicg, doitgen, mvt};
pub use blas::{gemm, gemver, gesummv, symm, syr2k, syrk, trmm};
pub use solvers::{cholesky, trisolv};

/// Scalar multiplier used by the BLAS-style kernels.
pub const ALPHA: f64 = 1.5;
/// Scalar multiplier applied to the accumulated output.
pub const BETA: f64 = 1.2;

/// Entry point of a kernel: runs it once at the given size, returns its status.
pub type KernelFn = fn(DatasetSize) -> i32;

/// Kernels in the order a full pass invokes them. The data-mining kernel goes
/// first, then the linear-algebra kernels.
pub static STANDARD_SUITE: [(&str, KernelFn); 16] = [
    ("correlation", correlation::run),
    ("2mm", two_mm::run),
    ("3mm", three_mm::run),
    ("atax", atax::run),
    ("bicg", bicg::run),
    ("cholesky", cholesky::run),
    ("doitgen", doitgen::run),
    ("gemm", gemm::run),
    ("gemver", gemver::run),
    ("gesummv", gesummv::run),
    ("mvt", mvt::run),
    ("symm", symm::run),
    ("syr2k", syr2k::run),
    ("syrk", syrk::run),
    ("trisolv", trisolv::run),
    ("trmm", trmm::run),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_suite_starts_with_correlation() {
        assert_eq!(STANDARD_SUITE[0].0, "correlation");
        assert_eq!(STANDARD_SUITE[STANDARD_SUITE.len() - 1].0, "trmm");
    }

    #[test]
    fn test_suite_names_are_unique() {
        let names: HashSet<&str> = STANDARD_SUITE.iter().map(|(name, _)| *name).collect();
        assert_eq!(names.len(), STANDARD_SUITE.len());
    }
}
