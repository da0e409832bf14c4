// src/kernels/blas/syr2k.rs
// Symmetric rank-2k update, lower triangle: C := alpha*A*B^T + alpha*B*A^T + beta*C

use ndarray::Array2;
use std::hint::black_box;
use crate::dataset::DatasetSize;
use crate::kernels::{ALPHA, BETA};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub m: usize,
    pub n: usize,
}

impl Dims {
    pub fn for_size(size: DatasetSize) -> Self {
        let (m, n) = size.pick([(20, 30), (60, 80), (200, 240), (1000, 1200), (2000, 2600)]);
        Dims { m, n }
    }
}

/// Returns `(C, A, B)` shaped `n×n`, `n×m`, `n×m`.
pub fn init_array(dims: Dims) -> (Array2<f64>, Array2<f64>, Array2<f64>) {
    let Dims { m, n } = dims;
    let a = Array2::from_shape_fn((n, m), |(i, j)| ((i * j + 1) % n) as f64 / n as f64);
    let b = Array2::from_shape_fn((n, m), |(i, j)| ((i * j + 2) % m) as f64 / m as f64);
    let c = Array2::from_shape_fn((n, n), |(i, j)| ((i * j + 3) % n) as f64 / m as f64);
    (c, a, b)
}

/// Only the lower triangle of `c` is read and written.
pub fn kernel(alpha: f64, beta: f64, c: &mut Array2<f64>, a: &Array2<f64>, b: &Array2<f64>) {
    let (n, m) = a.dim();
    for i in 0..n {
        for j in 0..=i {
            c[[i, j]] *= beta;
        }
        for k in 0..m {
            for j in 0..=i {
                c[[i, j]] += a[[j, k]] * alpha * b[[i, k]] + b[[j, k]] * alpha * a[[i, k]];
            }
        }
    }
}

pub fn run(size: DatasetSize) -> i32 {
    let (mut c, a, b) = init_array(Dims::for_size(size));

    kernel(ALPHA, BETA, &mut c, &a, &b);

    black_box(&c);
    0
}
