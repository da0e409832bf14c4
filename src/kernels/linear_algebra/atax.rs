// src/kernels/linear_algebra/atax.rs
// y := A^T * (A * x)

use ndarray::{Array1, Array2};
use std::hint::black_box;
use crate::dataset::DatasetSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub m: usize,
    pub n: usize,
}

impl Dims {
    pub fn for_size(size: DatasetSize) -> Self {
        let (m, n) = size.pick([(38, 42), (116, 124), (390, 410), (1900, 2100), (1800, 2200)]);
        Dims { m, n }
    }
}

pub fn init_array(dims: Dims) -> (Array2<f64>, Array1<f64>) {
    let Dims { m, n } = dims;
    let fn_ = n as f64;
    let x = Array1::from_shape_fn(n, |i| 1.0 + i as f64 / fn_);
    let a = Array2::from_shape_fn((m, n), |(i, j)| ((i + j) % n) as f64 / (5 * m) as f64);
    (a, x)
}

pub fn kernel(a: &Array2<f64>, x: &Array1<f64>, y: &mut Array1<f64>, tmp: &mut Array1<f64>) {
    let (m, n) = a.dim();
    y.fill(0.0);
    for i in 0..m {
        tmp[i] = 0.0;
        for j in 0..n {
            tmp[i] += a[[i, j]] * x[j];
        }
        for j in 0..n {
            y[j] += a[[i, j]] * tmp[i];
        }
    }
}

pub fn run(size: DatasetSize) -> i32 {
    let dims = Dims::for_size(size);
    let (a, x) = init_array(dims);
    let mut y = Array1::<f64>::zeros(dims.n);
    let mut tmp = Array1::<f64>::zeros(dims.m);

    kernel(&a, &x, &mut y, &mut tmp);

    black_box(&y);
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_transpose_product() {
        let dims = Dims::for_size(DatasetSize::Mini);
        let (a, x) = init_array(dims);
        let mut y = Array1::<f64>::zeros(dims.n);
        let mut tmp = Array1::<f64>::zeros(dims.m);
        kernel(&a, &x, &mut y, &mut tmp);

        let expected = a.t().dot(&a.dot(&x));
        for (got, want) in y.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-9);
        }
    }
}
