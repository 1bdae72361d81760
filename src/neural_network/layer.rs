use rand::Rng;
use rand::distributions::Uniform;
use crate::common::utils;

use super::activation::*;


/// A fully-connected layer computing `activation(W x + b)`.
/// `W` is a matrix of size `nrow x ncol`.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Layer {
    nrow: usize,
    ncol: usize,
    pub(super) matrix: Vec<Vec<f64>>,
    pub(super) bias: Vec<f64>,
    pub(super) activation: Activation,
}


impl Layer {
    /// Construct a new layer.
    /// Weights and biases are drawn from `U(-1/sqrt(ncol), 1/sqrt(ncol))`.
    #[inline(always)]
    pub(crate) fn new<R: Rng + ?Sized>(
        nrow: usize,
        ncol: usize,
        activation: Activation,
        rng: &mut R,
    ) -> Self
    {
        let bound = 1.0 / (ncol.max(1) as f64).sqrt();
        let dist = Uniform::new_inclusive(-bound, bound);
        let matrix = (0..nrow).map(|_|
                (0..ncol).map(|_| rng.sample(dist))
                    .collect::<Vec<_>>()
            )
            .collect::<Vec<_>>();
        let bias = (0..nrow).map(|_| rng.sample(dist)).collect();

        Self { nrow, ncol, matrix, bias, activation, }
    }


    #[inline(always)]
    pub(crate) fn input_dim(&self) -> usize {
        self.ncol
    }


    #[inline(always)]
    pub(crate) fn output_dim(&self) -> usize {
        self.nrow
    }


    #[inline(always)]
    pub(crate) fn shape(&self) -> (usize, usize) {
        (self.nrow, self.ncol)
    }


    #[inline(always)]
    pub(crate) fn affine<T: AsRef<[f64]>>(&self, x: T) -> Vec<f64> {
        let x = x.as_ref();
        debug_assert_eq!(self.ncol, x.len());

        self.matrix.iter()
            .zip(&self.bias)
            .map(|(w, b)| utils::inner_product(w, x) + b)
            .collect::<Vec<f64>>()
    }


    #[inline(always)]
    pub(crate) fn nonlinear<T: AsRef<[f64]>>(&self, u: T) -> Vec<f64> {
        self.activation.eval(u)
    }


    #[inline(always)]
    pub(crate) fn forward<T: AsRef<[f64]>>(&self, x: T) -> Vec<f64> {
        let u = self.affine(x);
        self.nonlinear(u)
    }
}

/// Computes `A^T B` for matrices `A` and `B`.
#[inline(always)]
pub(super) fn matrix_inner_product(m1: &[Vec<f64>], m2: &[Vec<f64>])
    -> Vec<Vec<f64>>
{
    // Check the shape condition.
    assert_eq!(m1.len(), m2.len());

    let nrow = m1[0].len();
    let ncol = m2[0].len();
    let nmid = m1.len();

    let mut ans = vec![vec![0.0; ncol]; nrow];
    for i in 0..nrow {
        for j in 0..ncol {
            for k in 0..nmid {
                ans[i][j] += m1[k][i] * m2[k][j];
            }
        }
    }
    ans
}



/// Computes `A B` for matrices `A` and `B`.
#[inline(always)]
pub(super) fn matrix_product(m1: &[Vec<f64>], m2: &[Vec<f64>])
    -> Vec<Vec<f64>>
{
    // Check the shape condition.
    assert_eq!(m1[0].len(), m2.len());

    let nrow = m1.len();
    let ncol = m2[0].len();
    let nmid = m1[0].len();

    let mut ans = vec![vec![0.0; ncol]; nrow];
    for i in 0..nrow {
        for j in 0..ncol {
            for k in 0..nmid {
                ans[i][j] += m1[i][k] * m2[k][j];
            }
        }
    }
    ans
}


#[inline(always)]
pub(super) fn column_sum(matrix: &[Vec<f64>]) -> Vec<f64> {
    let ncol = matrix[0].len();
    let mut columns = vec![0.0; ncol];

    matrix.iter()
        .for_each(|row| {
            columns.iter_mut()
                .zip(row)
                .for_each(|(c, r)| {
                    *c += r;
                });
        });
    columns
}
