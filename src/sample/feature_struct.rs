use polars::prelude::*;
use std::ops::Index;

use crate::{EstimationError, Result};


/// Dense representation of a feature.
#[derive(Debug, Clone, PartialEq)]
pub struct DenseFeature {
    /// Feature name
    pub name: String,
    /// Feature values.
    pub sample: Vec<f64>,
}


impl DenseFeature {
    /// Construct a dense feature from `name` and `values`.
    pub fn with_values<T: ToString>(name: T, values: Vec<f64>) -> Self {
        Self {
            name: name.to_string(),
            sample: values,
        }
    }


    /// Convert `polars::Series` into a `DenseFeature`.
    /// Integer and boolean columns are cast to `f64`.
    /// Fails if any value is missing or cannot be read as a number.
    pub fn from_series(series: &Series) -> Result<Self> {
        let name = series.name().to_string();
        let sample = series_to_vec(series)?;

        Ok(Self { name, sample })
    }


    /// Returns the feature name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns the number of items in this feature.
    pub fn len(&self) -> usize {
        self.sample.len()
    }


    /// Returns `true` if this feature holds no value.
    pub fn is_empty(&self) -> bool {
        self.sample.is_empty()
    }


    pub(crate) fn into_target(self) -> Vec<f64> {
        self.sample
    }
}


impl Index<usize> for DenseFeature {
    type Output = f64;
    fn index(&self, idx: usize) -> &Self::Output {
        &self.sample[idx]
    }
}


/// Converts a numeric `Series` into `Vec<f64>`.
pub(crate) fn series_to_vec(series: &Series) -> Result<Vec<f64>> {
    let name = series.name().to_string();
    let casted = series.cast(&DataType::Float64)
        .map_err(|_| EstimationError::NonNumeric(name.clone()))?;

    casted.f64()?
        .into_iter()
        .collect::<Option<Vec<_>>>()
        .ok_or(EstimationError::NonNumeric(name))
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn integer_series_is_cast() {
        let series = Series::new("x", &[1_i64, 0, 1]);
        let feature = DenseFeature::from_series(&series).unwrap();
        assert_eq!(feature.name(), "x");
        assert_eq!(feature.sample, vec![1.0, 0.0, 1.0]);
        assert_eq!(feature[2], 1.0);
        assert_eq!(feature.len(), 3);
        assert!(!feature.is_empty());
    }


    #[test]
    fn empty_series_gives_an_empty_feature() {
        let series = Series::new("x", Vec::<f64>::new());
        let feature = DenseFeature::from_series(&series).unwrap();
        assert!(feature.is_empty());
    }


    #[test]
    fn text_series_is_rejected() {
        let series = Series::new("x", &["0.5", "abc"]);
        let err = DenseFeature::from_series(&series).unwrap_err();
        assert!(matches!(err, EstimationError::NonNumeric(name) if name == "x"));
    }


    #[test]
    fn missing_values_are_rejected() {
        let series = Series::new("x", &[Some(1.0_f64), None]);
        assert!(DenseFeature::from_series(&series).is_err());
    }
}
