// src/kernels/linear_algebra/doitgen.rs
// Multiresolution analysis kernel (MADNESS): A[r][q][:] := A[r][q][:] * C4

use ndarray::{Array1, Array2, Array3};
use std::hint::black_box;
use crate::dataset::DatasetSize;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dims {
    pub nq: usize,
    pub nr: usize,
    pub np: usize,
}

impl Dims {
    pub fn for_size(size: DatasetSize) -> Self {
        let (nq, nr, np) = size.pick([
            (8, 10, 12),
            (20, 25, 30),
            (40, 50, 60),
            (140, 150, 160),
            (220, 250, 270),
        ]);
        Dims { nq, nr, np }
    }
}

/// Returns `(A, C4)` with `A` shaped `nr × nq × np`.
pub fn init_array(dims: Dims) -> (Array3<f64>, Array2<f64>) {
    let Dims { nq, nr, np } = dims;
    let a = Array3::from_shape_fn((nr, nq, np), |(i, j, k)| ((i * j + k) % np) as f64 / np as f64);
    let c4 = Array2::from_shape_fn((np, np), |(i, j)| (i * j % np) as f64 / np as f64);
    (a, c4)
}

pub fn kernel(a: &mut Array3<f64>, c4: &Array2<f64>, sum: &mut Array1<f64>) {
    let (nr, nq, np) = a.dim();
    for r in 0..nr {
        for q in 0..nq {
            for p in 0..np {
                sum[p] = 0.0;
                for s in 0..np {
                    sum[p] += a[[r, q, s]] * c4[[s, p]];
                }
            }
            for p in 0..np {
                a[[r, q, p]] = sum[p];
            }
        }
    }
}

pub fn run(size: DatasetSize) -> i32 {
    let dims = Dims::for_size(size);
    let (mut a, c4) = init_array(dims);
    let mut sum = Array1::<f64>::zeros(dims.np);

    kernel(&mut a, &c4, &mut sum);

    black_box(&a);
    0
}

#[cfg(test)]
mod tests {
    use super::*;
    use ndarray::s;

    #[test]
    fn test_each_row_is_multiplied_by_c4() {
        let dims = Dims::for_size(DatasetSize::Mini);
        let (mut a, c4) = init_array(dims);
        let original = a.clone();
        let mut sum = Array1::<f64>::zeros(dims.np);
        kernel(&mut a, &c4, &mut sum);

        for r in 0..dims.nr {
            for q in 0..dims.nq {
                let expected = original.slice(s![r, q, ..]).dot(&c4);
                for (got, want) in a.slice(s![r, q, ..]).iter().zip(expected.iter()) {
                    assert!((got - want).abs() < 1e-12);
                }
            }
        }
    }
}
