// src/kernels/blas/symm.rs
// C := alpha*A*B + beta*C, A symmetric and stored in its lower triangle

use ndarray::Array2;
use std::hint::black_box;
use crate::dataset::DatasetSize;
use crate::kernels::{ALPHA, BETA};

/// Filler for the unused upper triangle of `A`; never read by the kernel.
const UNUSED: f64 = -999.0;

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

/// Returns `(C, A, B)` shaped `m×n`, `m×m`, `m×n`.
pub fn init_array(dims: Dims) -> (Array2<f64>, Array2<f64>, Array2<f64>) {
    let Dims { m, n } = dims;
    let c = Array2::from_shape_fn((m, n), |(i, j)| ((i + j) % 100) as f64 / m as f64);
    let b = Array2::from_shape_fn((m, n), |(i, j)| ((n + i - j) % 100) as f64 / m as f64);
    let a = Array2::from_shape_fn((m, m), |(i, j)| {
        if j <= i {
            ((i + j) % 100) as f64 / m as f64
        } else {
            UNUSED
        }
    });
    (c, a, b)
}

pub fn kernel(alpha: f64, beta: f64, c: &mut Array2<f64>, a: &Array2<f64>, b: &Array2<f64>) {
    let (m, n) = c.dim();
    for i in 0..m {
        for j in 0..n {
            let mut temp2 = 0.0;
            for k in 0..i {
                c[[k, j]] += alpha * b[[i, j]] * a[[i, k]];
                temp2 += b[[k, j]] * a[[i, k]];
            }
            c[[i, j]] = beta * c[[i, j]] + alpha * b[[i, j]] * a[[i, i]] + alpha * temp2;
        }
    }
}

pub fn run(size: DatasetSize) -> i32 {
    let (mut c, a, b) = init_array(Dims::for_size(size));

    kernel(ALPHA, BETA, &mut c, &a, &b);

    black_box(&c);
    0
}
