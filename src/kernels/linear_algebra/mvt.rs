// src/kernels/linear_algebra/mvt.rs
// x1 := x1 + A * y1, x2 := x2 + A^T * y2

use ndarray::{Array1, Array2};
use std::hint::black_box;
use crate::dataset::DatasetSize;

pub fn dim(size: DatasetSize) -> usize {
    size.pick([40, 120, 400, 2000, 4000])
}

pub struct Arrays {
    pub x1: Array1<f64>,
    pub x2: Array1<f64>,
    pub y1: Array1<f64>,
    pub y2: Array1<f64>,
    pub a: Array2<f64>,
}

pub fn init_array(n: usize) -> Arrays {
    let fill = |offset: usize| Array1::from_shape_fn(n, |i| ((i + offset) % n) as f64 / n as f64);
    Arrays {
        x1: fill(0),
        x2: fill(1),
        y1: fill(3),
        y2: fill(4),
        a: Array2::from_shape_fn((n, n), |(i, j)| (i * j % n) as f64 / n as f64),
    }
}

pub fn kernel(arrays: &mut Arrays) {
    let Arrays { x1, x2, y1, y2, a } = arrays;
    let n = a.nrows();
    for i in 0..n {
        for j in 0..n {
            x1[i] += a[[i, j]] * y1[j];
        }
    }
    for i in 0..n {
        for j in 0..n {
            x2[i] += a[[j, i]] * y2[j];
        }
    }
}

pub fn run(size: DatasetSize) -> i32 {
    let mut arrays = init_array(dim(size));

    kernel(&mut arrays);

    black_box((&arrays.x1, &arrays.x2));
    0
}
