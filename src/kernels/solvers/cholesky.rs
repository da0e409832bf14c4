// src/kernels/solvers/cholesky.rs
// In-place Cholesky factorisation A = L*L^T, L stored in the lower triangle of A.

use ndarray::Array2;
use std::hint::black_box;
use crate::dataset::DatasetSize;

pub fn dim(size: DatasetSize) -> usize {
    size.pick([40, 120, 400, 2000, 4000])
}

/// Builds a symmetric positive-definite matrix as `L*L^T` from a unit-diagonal
/// lower-triangular `L`.
pub fn init_array(n: usize) -> Array2<f64> {
    let lower = Array2::from_shape_fn((n, n), |(i, j)| {
        if j == i {
            1.0
        } else if j < i {
            1.0 - j as f64 / n as f64
        } else {
            0.0
        }
    });

    let mut a = Array2::<f64>::zeros((n, n));
    for t in 0..n {
        for r in 0..n {
            for s in 0..n {
                a[[r, s]] += lower[[r, t]] * lower[[s, t]];
            }
        }
    }
    a
}

/// Only the lower triangle of `a` is read. The strict upper triangle is left as is.
pub fn kernel(a: &mut Array2<f64>) {
    let n = a.nrows();
    for i in 0..n {
        for j in 0..i {
            for k in 0..j {
                a[[i, j]] -= a[[i, k]] * a[[j, k]];
            }
            a[[i, j]] /= a[[j, j]];
        }
        for k in 0..i {
            a[[i, i]] -= a[[i, k]] * a[[i, k]];
        }
        a[[i, i]] = a[[i, i]].sqrt();
    }
}

pub fn run(size: DatasetSize) -> i32 {
    let mut a = init_array(dim(size));

    kernel(&mut a);

    black_box(&a);
    0
}
