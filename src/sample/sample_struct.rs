use polars::prelude::*;
use rayon::prelude::*;

use super::feature_struct::*;
use crate::{EstimationError, Result};


/// Struct `Sample` holds the parent features (column-major)
/// and the target values of a single node.
#[derive(Debug, Clone)]
pub struct Sample {
    pub(super) name: String,
    pub(super) features: Vec<DenseFeature>,
    pub(super) target: Vec<f64>,
    pub(super) n_sample: usize,
    pub(super) n_feature: usize,
}


impl Sample {
    /// Construct a `Sample` from feature columns and a named target.
    /// Every feature must have the same length as `target`.
    pub fn new<S: ToString>(
        name: S,
        features: Vec<DenseFeature>,
        target: Vec<f64>,
    ) -> Result<Self>
    {
        let n_sample = target.len();
        let n_feature = features.len();

        if let Some(feat) = features.iter().find(|f| f.len() != n_sample) {
            return Err(EstimationError::Shape(format!(
                "feature `{}` has {} rows, but the target has {n_sample}",
                feat.name(), feat.len(),
            )));
        }

        let name = name.to_string();
        Ok(Self { name, features, target, n_sample, n_feature, })
    }


    /// Convert `polars::DataFrame` and `polars::Series` into `Sample`.
    /// Fails if some value is not numeric or
    /// if the table heights do not match.
    pub fn from_dataframe(data: &DataFrame, target: &Series)
        -> Result<Self>
    {
        let name = target.name().to_string();
        let target = DenseFeature::from_series(target)?.into_target();

        let features = data.get_columns()
            .par_iter()
            .map(DenseFeature::from_series)
            .collect::<Result<Vec<_>>>()?;

        Self::new(name, features, target)
    }


    /// Returns the target name.
    pub fn name(&self) -> &str {
        &self.name
    }


    /// Returns a slice of type `f64`.
    pub fn target(&self) -> &[f64] {
        &self.target[..]
    }


    /// Returns a slice of type `DenseFeature`.
    pub fn features(&self) -> &[DenseFeature] {
        &self.features[..]
    }


    /// Returns the pair of the number of examples and
    /// the number of features
    pub fn shape(&self) -> (usize, usize) {
        (self.n_sample, self.n_feature)
    }


    /// Returns the `idx`-th instance `(x, y)`.
    pub fn at(&self, idx: usize) -> (Vec<f64>, f64) {
        let x = self.features.iter()
            .map(|feat| feat[idx])
            .collect::<Vec<f64>>();
        let y = self.target[idx];

        (x, y)
    }


    /// Returns the rows at `indices` as a feature matrix and targets.
    pub fn rows<T: AsRef<[usize]>>(&self, indices: T)
        -> (Vec<Vec<f64>>, Vec<f64>)
    {
        indices.as_ref()
            .iter()
            .map(|&i| self.at(i))
            .unzip()
    }


    /// Split `self` into the first `min(n_sample, index)` rows
    /// and the remaining rows.
    pub fn split_at(&self, index: usize) -> (Self, Self) {
        let index = index.min(self.n_sample);

        let (head, tail): (Vec<_>, Vec<_>) = self.features.iter()
            .map(|feat| {
                let head = DenseFeature::with_values(
                    feat.name(), feat.sample[..index].to_vec()
                );
                let tail = DenseFeature::with_values(
                    feat.name(), feat.sample[index..].to_vec()
                );
                (head, tail)
            })
            .unzip();

        let train = Self {
            name: self.name.clone(),
            features: head,
            target: self.target[..index].to_vec(),
            n_sample: index,
            n_feature: self.n_feature,
        };
        let test = Self {
            name: self.name.clone(),
            features: tail,
            target: self.target[index..].to_vec(),
            n_sample: self.n_sample - index,
            n_feature: self.n_feature,
        };
        (train, test)
    }
}
