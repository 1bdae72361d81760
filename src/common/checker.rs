//! This file defines some functions that checks some pre-conditions
//! E.g., Shape of data

use crate::{EstimationError, Result, Sample};


/// Check whether the training sample is valid or not.
#[inline(always)]
pub(crate) fn check_sample(sample: &Sample, n_feature: usize) -> Result<()>
{
    let (n_sample, width) = sample.shape();

    // A sample without rows cannot be used to train anything.
    if n_sample == 0 {
        return Err(EstimationError::NoTrainingData);
    }

    check_input_width(width, n_feature)?;

    let features = sample.features()
        .iter()
        .map(|feature| (feature.name(), &feature.sample[..]));
    let target = std::iter::once((sample.name(), sample.target()));
    for (name, values) in features.chain(target) {
        check_finite(name, values)?;
    }
    Ok(())
}


/// Check whether an input has as many values as the network has inputs.
#[inline(always)]
pub(crate) fn check_input_width(width: usize, n_feature: usize)
    -> Result<()>
{
    if width != n_feature {
        return Err(EstimationError::Shape(format!(
            "the network expects {n_feature} features, got {width}"
        )));
    }
    Ok(())
}


/// Check whether every value of the column `name` is finite.
#[inline(always)]
fn check_finite(name: &str, values: &[f64]) -> Result<()> {
    match values.iter().find(|v| !v.is_finite()) {
        Some(v) => Err(EstimationError::DataRange {
            target: name.to_string(),
            value: *v,
        }),
        None => Ok(()),
    }
}


/// Check whether the target values are probabilities.
/// Binary cross-entropy is only defined for targets in `[0, 1]`.
#[inline(always)]
pub(crate) fn check_binary_target(sample: &Sample) -> Result<()> {
    let outside = sample.target()
        .iter()
        .find(|y| !(0f64..=1f64).contains(*y));

    match outside {
        Some(y) => Err(EstimationError::DataRange {
            target: sample.name().to_string(),
            value: *y,
        }),
        None => Ok(()),
    }
}


/// Check whether the given probability lies in `[0, 1]`.
#[inline(always)]
pub(crate) fn check_probability(p: f64, target: &str) -> Result<()> {
    if (0f64..=1f64).contains(&p) {
        Ok(())
    } else {
        Err(EstimationError::DataRange { target: target.to_string(), value: p })
    }
}
