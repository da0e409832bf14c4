// src/kernels/linear_algebra/bicg.rs
// BiCG sub-kernel: s := A^T * r, q := A * p

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

/// Returns `(A, r, p)` with `A` shaped `n × m`.
pub fn init_array(dims: Dims) -> (Array2<f64>, Array1<f64>, Array1<f64>) {
    let Dims { m, n } = dims;
    let p = Array1::from_shape_fn(m, |i| (i % m) as f64 / m as f64);
    let r = Array1::from_shape_fn(n, |i| (i % n) as f64 / n as f64);
    let a = Array2::from_shape_fn((n, m), |(i, j)| (i * (j + 1) % n) as f64 / n as f64);
    (a, r, p)
}

pub fn kernel(
    a: &Array2<f64>,
    r: &Array1<f64>,
    p: &Array1<f64>,
    s: &mut Array1<f64>,
    q: &mut Array1<f64>,
) {
    let (n, m) = a.dim();
    s.fill(0.0);
    for i in 0..n {
        q[i] = 0.0;
        for j in 0..m {
            s[j] += r[i] * a[[i, j]];
            q[i] += a[[i, j]] * p[j];
        }
    }
}

pub fn run(size: DatasetSize) -> i32 {
    let dims = Dims::for_size(size);
    let (a, r, p) = init_array(dims);
    let mut s = Array1::<f64>::zeros(dims.m);
    let mut q = Array1::<f64>::zeros(dims.n);

    kernel(&a, &r, &p, &mut s, &mut q);

    black_box((&s, &q));
    0
}
