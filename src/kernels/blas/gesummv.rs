// src/kernels/blas/gesummv.rs
// y := alpha*A*x + beta*B*x

use ndarray::{Array1, Array2};
use std::hint::black_box;
use crate::dataset::DatasetSize;
use crate::kernels::{ALPHA, BETA};

pub fn dim(size: DatasetSize) -> usize {
    size.pick([30, 90, 250, 1300, 2800])
}

/// Returns `(A, B, x)`.
pub fn init_array(n: usize) -> (Array2<f64>, Array2<f64>, Array1<f64>) {
    let a = Array2::from_shape_fn((n, n), |(i, j)| ((i * j + 1) % n) as f64 / n as f64);
    let b = Array2::from_shape_fn((n, n), |(i, j)| ((i * j + 2) % n) as f64 / n as f64);
    let x = Array1::from_shape_fn(n, |i| (i % n) as f64 / n as f64);
    (a, b, x)
}

pub fn kernel(
    alpha: f64,
    beta: f64,
    a: &Array2<f64>,
    b: &Array2<f64>,
    x: &Array1<f64>,
    tmp: &mut Array1<f64>,
    y: &mut Array1<f64>,
) {
    let n = a.nrows();
    for i in 0..n {
        tmp[i] = 0.0;
        y[i] = 0.0;
        for j in 0..n {
            tmp[i] += a[[i, j]] * x[j];
            y[i] += b[[i, j]] * x[j];
        }
        y[i] = alpha * tmp[i] + beta * y[i];
    }
}

pub fn run(size: DatasetSize) -> i32 {
    let n = dim(size);
    let (a, b, x) = init_array(n);
    let mut tmp = Array1::<f64>::zeros(n);
    let mut y = Array1::<f64>::zeros(n);

    kernel(ALPHA, BETA, &a, &b, &x, &mut tmp, &mut y);

    black_box(&y);
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sum_of_scaled_products() {
        let n = dim(DatasetSize::Mini);
        let (a, b, x) = init_array(n);
        let mut tmp = Array1::<f64>::zeros(n);
        let mut y = Array1::<f64>::zeros(n);
        kernel(ALPHA, BETA, &a, &b, &x, &mut tmp, &mut y);

        let expected = a.dot(&x) * ALPHA + b.dot(&x) * BETA;
        for (got, want) in y.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-9);
        }
    }
}
