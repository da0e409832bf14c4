// src/kernels/blas/gemm.rs
// C := alpha*A*B + beta*C

use ndarray::Array2;
use std::hint::black_box;
use crate::dataset::DatasetSize;
use crate::kernels::{ALPHA, BETA};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub ni: usize,
    pub nj: usize,
    pub nk: usize,
}

impl Dims {
    pub fn for_size(size: DatasetSize) -> Self {
        let (ni, nj, nk) = size.pick([
            (20, 25, 30),
            (60, 70, 80),
            (200, 220, 240),
            (1000, 1100, 1200),
            (2000, 2300, 2600),
        ]);
        Dims { ni, nj, nk }
    }
}

/// Returns `(C, A, B)` shaped `ni×nj`, `ni×nk`, `nk×nj`.
pub fn init_array(dims: Dims) -> (Array2<f64>, Array2<f64>, Array2<f64>) {
    let Dims { ni, nj, nk } = dims;
    let c = Array2::from_shape_fn((ni, nj), |(i, j)| ((i * j + 1) % ni) as f64 / ni as f64);
    let a = Array2::from_shape_fn((ni, nk), |(i, j)| (i * (j + 1) % nk) as f64 / nk as f64);
    let b = Array2::from_shape_fn((nk, nj), |(i, j)| (i * (j + 2) % nj) as f64 / nj as f64);
    (c, a, b)
}

pub fn kernel(alpha: f64, beta: f64, c: &mut Array2<f64>, a: &Array2<f64>, b: &Array2<f64>) {
    let (ni, nk) = a.dim();
    let nj = c.ncols();
    for i in 0..ni {
        for j in 0..nj {
            c[[i, j]] *= beta;
        }
        for k in 0..nk {
            for j in 0..nj {
                c[[i, j]] += alpha * a[[i, k]] * b[[k, j]];
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
