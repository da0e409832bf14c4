// src/kernels/datamining/correlation.rs

use ndarray::{Array1, Array2};
use std::hint::black_box;
use crate::dataset::DatasetSize;

const EPS: f64 = 0.1;

/// `m` attributes observed over `n` data points.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub m: usize,
    pub n: usize,
}

impl Dims {
    pub fn for_size(size: DatasetSize) -> Self {
        let (m, n) = size.pick([(28, 32), (80, 100), (240, 260), (1200, 1400), (2600, 3000)]);
        Dims { m, n }
    }
}

/// Returns `(float_n, data)` with `data` shaped `n × m`.
pub fn init_array(dims: Dims) -> (f64, Array2<f64>) {
    let Dims { m, n } = dims;
    let float_n = n as f64;
    let data = Array2::from_shape_fn((n, m), |(i, j)| (i * j) as f64 / m as f64 + i as f64);
    (float_n, data)
}

/// Pearson correlation matrix of the columns of `data`.
///
/// `data` is normalised in place; `corr` must be `m × m`.
pub fn kernel(float_n: f64, data: &mut Array2<f64>, corr: &mut Array2<f64>) {
    let (n, m) = data.dim();
    let mut mean = Array1::<f64>::zeros(m);
    let mut stddev = Array1::<f64>::zeros(m);

    for j in 0..m {
        let mut sum = 0.0;
        for i in 0..n {
            sum += data[[i, j]];
        }
        mean[j] = sum / float_n;
    }

    for j in 0..m {
        let mut sum = 0.0;
        for i in 0..n {
            let centered = data[[i, j]] - mean[j];
            sum += centered * centered;
        }
        let sd = (sum / float_n).sqrt();
        // Near-zero deviations would blow up the normalisation below.
        stddev[j] = if sd <= EPS { 1.0 } else { sd };
    }

    let sqrt_n = float_n.sqrt();
    for i in 0..n {
        for j in 0..m {
            data[[i, j]] -= mean[j];
            data[[i, j]] /= sqrt_n * stddev[j];
        }
    }

    if m == 0 {
        return;
    }
    for i in 0..m - 1 {
        corr[[i, i]] = 1.0;
        for j in (i + 1)..m {
            let mut sum = 0.0;
            for k in 0..n {
                sum += data[[k, i]] * data[[k, j]];
            }
            corr[[i, j]] = sum;
            corr[[j, i]] = sum;
        }
    }
    corr[[m - 1, m - 1]] = 1.0;
}

pub fn run(size: DatasetSize) -> i32 {
    let dims = Dims::for_size(size);
    let (float_n, mut data) = init_array(dims);
    let mut corr = Array2::<f64>::zeros((dims.m, dims.m));

    kernel(float_n, &mut data, &mut corr);

    black_box(&corr);
    0
}
