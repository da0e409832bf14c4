// src/kernels/blas/syrk.rs
// Symmetric rank-k update, lower triangle: C := alpha*A*A^T + beta*C

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

/// Returns `(C, A)` shaped `n×n`, `n×m`.
pub fn init_array(dims: Dims) -> (Array2<f64>, Array2<f64>) {
    let Dims { m, n } = dims;
    let a = Array2::from_shape_fn((n, m), |(i, j)| ((i * j + 1) % n) as f64 / n as f64);
    let c = Array2::from_shape_fn((n, n), |(i, j)| ((i * j + 2) % m) as f64 / m as f64);
    (c, a)
}

pub fn kernel(alpha: f64, beta: f64, c: &mut Array2<f64>, a: &Array2<f64>) {
    let (n, m) = a.dim();
    for i in 0..n {
        for j in 0..=i {
            c[[i, j]] *= beta;
        }
        for k in 0..m {
            for j in 0..=i {
                c[[i, j]] += alpha * a[[i, k]] * a[[j, k]];
            }
        }
    }
}

pub fn run(size: DatasetSize) -> i32 {
    let (mut c, a) = init_array(Dims::for_size(size));

    kernel(ALPHA, BETA, &mut c, &a);

    black_box(&c);
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lower_triangle_matches_gram_matrix() {
        let dims = Dims::for_size(DatasetSize::Mini);
        let (mut c, a) = init_array(dims);
        let expected = a.dot(&a.t()) * ALPHA + &c * BETA;

        kernel(ALPHA, BETA, &mut c, &a);

        for i in 0..dims.n {
            for j in 0..=i {
                assert!((c[[i, j]] - expected[[i, j]]).abs() < 1e-9);
            }
        }
    }
}
