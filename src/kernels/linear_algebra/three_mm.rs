// src/kernels/linear_algebra/three_mm.rs
// G := (A*B)*(C*D)

use ndarray::Array2;
use std::hint::black_box;
use crate::dataset::DatasetSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub ni: usize,
    pub nj: usize,
    pub nk: usize,
    pub nl: usize,
    pub nm: usize,
}

impl Dims {
    pub fn for_size(size: DatasetSize) -> Self {
        let (ni, nj, nk, nl, nm) = size.pick([
            (16, 18, 20, 22, 24),
            (40, 50, 60, 70, 80),
            (180, 190, 200, 210, 220),
            (800, 900, 1000, 1100, 1200),
            (1600, 1800, 2000, 2200, 2400),
        ]);
        Dims { ni, nj, nk, nl, nm }
    }
}

/// Returns `(A, B, C, D)` shaped `ni×nk`, `nk×nj`, `nj×nm`, `nm×nl`.
pub fn init_array(dims: Dims) -> (Array2<f64>, Array2<f64>, Array2<f64>, Array2<f64>) {
    let Dims { ni, nj, nk, nl, nm } = dims;
    let a = Array2::from_shape_fn((ni, nk), |(i, j)| ((i * j + 1) % ni) as f64 / (5 * ni) as f64);
    let b = Array2::from_shape_fn((nk, nj), |(i, j)| ((i * (j + 1) + 2) % nj) as f64 / (5 * nj) as f64);
    let c = Array2::from_shape_fn((nj, nm), |(i, j)| (i * (j + 3) % nl) as f64 / (5 * nl) as f64);
    let d = Array2::from_shape_fn((nm, nl), |(i, j)| ((i * (j + 2) + 2) % nk) as f64 / (5 * nk) as f64);
    (a, b, c, d)
}

fn multiply_into(out: &mut Array2<f64>, lhs: &Array2<f64>, rhs: &Array2<f64>) {
    let (rows, inner) = lhs.dim();
    let cols = rhs.ncols();
    for i in 0..rows {
        for j in 0..cols {
            out[[i, j]] = 0.0;
            for k in 0..inner {
                out[[i, j]] += lhs[[i, k]] * rhs[[k, j]];
            }
        }
    }
}

/// Computes `E = A*B`, `F = C*D` and `G = E*F`.
pub fn kernel(
    a: &Array2<f64>,
    b: &Array2<f64>,
    c: &Array2<f64>,
    d: &Array2<f64>,
    e: &mut Array2<f64>,
    f: &mut Array2<f64>,
    g: &mut Array2<f64>,
) {
    multiply_into(e, a, b);
    multiply_into(f, c, d);
    multiply_into(g, e, f);
}

pub fn run(size: DatasetSize) -> i32 {
    let dims = Dims::for_size(size);
    let (a, b, c, d) = init_array(dims);
    let mut e = Array2::<f64>::zeros((dims.ni, dims.nj));
    let mut f = Array2::<f64>::zeros((dims.nj, dims.nl));
    let mut g = Array2::<f64>::zeros((dims.ni, dims.nl));

    kernel(&a, &b, &c, &d, &mut e, &mut f, &mut g);

    black_box(&g);
    0
}
