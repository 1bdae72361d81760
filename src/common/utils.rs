//! This file provides some common functions
//! such as inner products and summary statistics.


/// Compute the inner-product of the given two slices.
#[inline(always)]
pub(crate) fn inner_product(v1: &[f64], v2: &[f64]) -> f64 {
    v1.iter()
        .zip(v2)
        .map(|(a, b)| a * b)
        .sum::<f64>()
}


/// Computes the element-wise product of two matrices of the same shape.
#[inline(always)]
pub(crate) fn hadamard_product(mut m1: Vec<Vec<f64>>, m2: Vec<Vec<f64>>)
    -> Vec<Vec<f64>>
{
    assert_eq!(m1.len(), m2.len());

    m1.iter_mut()
        .zip(m2)
        .for_each(|(r1, r2)| {
            r1.iter_mut()
                .zip(r2)
                .for_each(|(a, b)| { *a *= b; });
        });
    m1
}


/// Returns the arithmetic mean of `values`.
/// Returns `None` for an empty slice.
#[inline(always)]
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() { return None; }

    let n = values.len() as f64;
    Some(values.iter().sum::<f64>() / n)
}


/// Returns the standard deviation of `values`
/// with `ddof` delta degrees of freedom.
/// `ddof = 1` gives the sample standard deviation,
/// `ddof = 0` the population one.
/// Returns `None` if `values.len() <= ddof`.
#[inline(always)]
pub fn std(values: &[f64], ddof: usize) -> Option<f64> {
    let n = values.len();
    if n <= ddof { return None; }

    let mu = mean(values)?;
    let sum_sq = values.iter()
        .map(|v| (v - mu).powi(2))
        .sum::<f64>();

    Some((sum_sq / (n - ddof) as f64).sqrt())
}
