// src/kernels/linear_algebra/two_mm.rs
// D := alpha*A*B*C + beta*D

use ndarray::Array2;
use std::hint::black_box;
use crate::dataset::DatasetSize;
use crate::kernels::{ALPHA, BETA};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub ni: usize,
    pub nj: usize,
    pub nk: usize,
    pub nl: usize,
}

impl Dims {
    pub fn for_size(size: DatasetSize) -> Self {
        let (ni, nj, nk, nl) = size.pick([
            (16, 18, 22, 24),
            (40, 50, 70, 80),
            (180, 190, 210, 220),
            (800, 900, 1100, 1200),
            (1600, 1800, 2200, 2400),
        ]);
        Dims { ni, nj, nk, nl }
    }
}

pub struct Arrays {
    pub a: Array2<f64>,
    pub b: Array2<f64>,
    pub c: Array2<f64>,
    pub d: Array2<f64>,
}

pub fn init_array(dims: Dims) -> Arrays {
    let Dims { ni, nj, nk, nl } = dims;
    Arrays {
        a: Array2::from_shape_fn((ni, nk), |(i, j)| ((i * j + 1) % ni) as f64 / ni as f64),
        b: Array2::from_shape_fn((nk, nj), |(i, j)| (i * (j + 1) % nj) as f64 / nj as f64),
        c: Array2::from_shape_fn((nj, nl), |(i, j)| ((i * (j + 3) + 1) % nl) as f64 / nl as f64),
        d: Array2::from_shape_fn((ni, nl), |(i, j)| (i * (j + 2) % nk) as f64 / nk as f64),
    }
}

/// `tmp` must be `ni × nj`; the result overwrites `d`.
pub fn kernel(alpha: f64, beta: f64, tmp: &mut Array2<f64>, arrays: &mut Arrays) {
    let Arrays { a, b, c, d } = arrays;
    let (ni, nk) = a.dim();
    let nj = b.ncols();
    let nl = c.ncols();

    for i in 0..ni {
        for j in 0..nj {
            tmp[[i, j]] = 0.0;
            for k in 0..nk {
                tmp[[i, j]] += alpha * a[[i, k]] * b[[k, j]];
            }
        }
    }
    for i in 0..ni {
        for j in 0..nl {
            d[[i, j]] *= beta;
            for k in 0..nj {
                d[[i, j]] += tmp[[i, k]] * c[[k, j]];
            }
        }
    }
}

pub fn run(size: DatasetSize) -> i32 {
    let dims = Dims::for_size(size);
    let mut arrays = init_array(dims);
    let mut tmp = Array2::<f64>::zeros((dims.ni, dims.nj));

    kernel(ALPHA, BETA, &mut tmp, &mut arrays);

    black_box(&arrays.d);
    0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matches_ndarray_dot() {
        let dims = Dims::for_size(DatasetSize::Mini);
        let mut arrays = init_array(dims);
        let expected = arrays.a.dot(&arrays.b).dot(&arrays.c) * ALPHA + &arrays.d * BETA;

        let mut tmp = Array2::<f64>::zeros((dims.ni, dims.nj));
        kernel(ALPHA, BETA, &mut tmp, &mut arrays);

        for (got, want) in arrays.d.iter().zip(expected.iter()) {
            assert!((got - want).abs() < 1e-9, "{} != {}", got, want);
        }
    }
}
