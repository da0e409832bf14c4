// src/kernels/blas/trmm.rs
// B := alpha*A^T*B, A unit lower triangular

use ndarray::Array2;
use std::hint::black_box;
use crate::dataset::DatasetSize;
use crate::kernels::ALPHA;

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

/// Returns `(A, B)` shaped `m×m`, `m×n`. The strict upper triangle of `A` is zero.
pub fn init_array(dims: Dims) -> (Array2<f64>, Array2<f64>) {
    let Dims { m, n } = dims;
    let a = Array2::from_shape_fn((m, m), |(i, j)| {
        if j < i {
            ((i + j) % m) as f64 / m as f64
        } else if j == i {
            1.0
        } else {
            0.0
        }
    });
    let b = Array2::from_shape_fn((m, n), |(i, j)| ((n + i - j) % n) as f64 / n as f64);
    (a, b)
}

pub fn kernel(alpha: f64, a: &Array2<f64>, b: &mut Array2<f64>) {
    let (m, n) = b.dim();
    for i in 0..m {
        for j in 0..n {
            for k in (i + 1)..m {
                b[[i, j]] += a[[k, i]] * b[[k, j]];
            }
            b[[i, j]] *= alpha;
        }
    }
}

pub fn run(size: DatasetSize) -> i32 {
    let (a, mut b) = init_array(Dims::for_size(size));

    kernel(ALPHA, &a, &mut b);

    black_box(&b);
    0
}
