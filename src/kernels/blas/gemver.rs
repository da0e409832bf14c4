// src/kernels/blas/gemver.rs
//
// Vector multiplication and matrix addition:
//   A := A + u1*v1^T + u2*v2^T
//   x := beta*A^T*y + z
//   w := alpha*A*x

use ndarray::{Array1, Array2};
use std::hint::black_box;
use crate::dataset::DatasetSize;
use crate::kernels::{ALPHA, BETA};

pub fn dim(size: DatasetSize) -> usize {
    size.pick([40, 120, 400, 2000, 4000])
}

pub struct Arrays {
    pub a: Array2<f64>,
    pub u1: Array1<f64>,
    pub v1: Array1<f64>,
    pub u2: Array1<f64>,
    pub v2: Array1<f64>,
    pub w: Array1<f64>,
    pub x: Array1<f64>,
    pub y: Array1<f64>,
    pub z: Array1<f64>,
}

pub fn init_array(n: usize) -> Arrays {
    let fn_ = n as f64;
    let scaled = |divisor: f64| Array1::from_shape_fn(n, |i| ((i + 1) as f64 / fn_) / divisor);
    Arrays {
        a: Array2::from_shape_fn((n, n), |(i, j)| (i * j % n) as f64 / n as f64),
        u1: Array1::from_shape_fn(n, |i| i as f64),
        u2: scaled(2.0),
        v1: scaled(4.0),
        v2: scaled(6.0),
        y: scaled(8.0),
        z: scaled(9.0),
        x: Array1::zeros(n),
        w: Array1::zeros(n),
    }
}

pub fn kernel(alpha: f64, beta: f64, arrays: &mut Arrays) {
    let Arrays { a, u1, v1, u2, v2, w, x, y, z } = arrays;
    let n = a.nrows();

    for i in 0..n {
        for j in 0..n {
            a[[i, j]] += u1[i] * v1[j] + u2[i] * v2[j];
        }
    }
    for i in 0..n {
        for j in 0..n {
            x[i] += beta * a[[j, i]] * y[j];
        }
    }
    for i in 0..n {
        x[i] += z[i];
    }
    for i in 0..n {
        for j in 0..n {
            w[i] += alpha * a[[i, j]] * x[j];
        }
    }
}

pub fn run(size: DatasetSize) -> i32 {
    let mut arrays = init_array(dim(size));

    kernel(ALPHA, BETA, &mut arrays);

    black_box(&arrays.w);
    0
}
