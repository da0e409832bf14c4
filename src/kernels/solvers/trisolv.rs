// src/kernels/solvers/trisolv.rs
// Forward substitution: solve L*x = b for lower-triangular L.

use ndarray::{Array1, Array2};
use std::hint::black_box;
use crate::dataset::DatasetSize;

pub fn dim(size: DatasetSize) -> usize {
    size.pick([40, 120, 400, 2000, 4000])
}

/// Returns `(L, x, b)`; `x` starts out filled with a sentinel the solve overwrites.
pub fn init_array(n: usize) -> (Array2<f64>, Array1<f64>, Array1<f64>) {
    let x = Array1::from_elem(n, -999.0);
    let b = Array1::from_shape_fn(n, |i| i as f64);
    let l = Array2::from_shape_fn((n, n), |(i, j)| {
        if j <= i {
            (i + n - j + 1) as f64 * 2.0 / n as f64
        } else {
            0.0
        }
    });
    (l, x, b)
}

pub fn kernel(l: &Array2<f64>, x: &mut Array1<f64>, b: &Array1<f64>) {
    let n = l.nrows();
    for i in 0..n {
        x[i] = b[i];
        for j in 0..i {
            x[i] -= l[[i, j]] * x[j];
        }
        x[i] /= l[[i, i]];
    }
}

pub fn run(size: DatasetSize) -> i32 {
    let (l, mut x, b) = init_array(dim(size));

    kernel(&l, &mut x, &b);

    black_box(&x);
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solution_satisfies_system() {
        let (l, mut x, b) = init_array(dim(DatasetSize::Mini));
        kernel(&l, &mut x, &b);

        let residual = l.dot(&x) - &b;
        for r in residual.iter() {
            assert!(r.abs() < 1e-8);
        }
    }
}
