//! Parametric distributions fitted for root nodes.
//!
//! A [`DistributionFamily`] plays the role of a distribution constructor:
//! it takes the parameters estimated from data and returns
//! a [`RootDistribution`], or a [`DistributionError`]
//! if the parameters do not fit the family.
use std::fmt;

use rand::Rng;
use rand::distributions::Distribution;
use rand_distr::{Bernoulli, Normal, LogNormal};
use serde::{Serialize, Deserialize};
use thiserror::Error;


/// Reasons a distribution cannot be constructed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum DistributionError {
    /// The family takes a different number of parameters.
    #[error("{family} takes {expected} parameter(s), got {got}")]
    Arity {
        /// The family that was called.
        family: DistributionFamily,
        /// Number of parameters the family takes.
        expected: usize,
        /// Number of parameters given.
        got: usize,
    },

    /// A parameter is outside of the family's support.
    #[error("invalid parameter for {family}: {reason}")]
    InvalidParameter {
        /// The family that was called.
        family: DistributionFamily,
        /// Human-readable reason.
        reason: String,
    },
}


/// Distribution families available to root nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DistributionFamily {
    /// `Bernoulli(p)` for binary nodes.
    Bernoulli,
    /// `Normal(mean, std)`.
    Normal,
    /// `LogNormal(mu, sigma)`, where `mu` and `sigma` are
    /// the mean and the standard deviation of the underlying normal.
    LogNormal,
}


impl fmt::Display for DistributionFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bernoulli => "Bernoulli",
            Self::Normal => "Normal",
            Self::LogNormal => "LogNormal",
        };

        write!(f, "{name}")
    }
}


impl DistributionFamily {
    /// Number of parameters the constructor takes.
    pub fn arity(&self) -> usize {
        match self {
            Self::Bernoulli => 1,
            Self::Normal | Self::LogNormal => 2,
        }
    }


    /// Construct a distribution of this family from `params`.
    ///
    /// ```
    /// use belscm::DistributionFamily;
    ///
    /// let bernoulli = DistributionFamily::Bernoulli.construct(&[0.8]).unwrap();
    /// assert_eq!(bernoulli.params(), &[0.8]);
    ///
    /// // `Normal` takes a mean and a standard deviation.
    /// assert!(DistributionFamily::Normal.construct(&[0.8]).is_err());
    /// ```
    pub fn construct(&self, params: &[f64])
        -> Result<RootDistribution, DistributionError>
    {
        let expected = self.arity();
        if params.len() != expected {
            return Err(DistributionError::Arity {
                family: *self,
                expected,
                got: params.len(),
            });
        }

        let family = *self;
        let invalid = |reason: String| {
            DistributionError::InvalidParameter { family, reason }
        };

        let sampler = match self {
            Self::Bernoulli => {
                let p = params[0];
                let dist = Bernoulli::new(p)
                    .map_err(|e| invalid(format!("p = {p}: {e}")))?;
                Sampler::Bernoulli(dist)
            },
            Self::Normal => {
                let (mean, std) = location_and_scale(params, &invalid)?;
                let dist = Normal::new(mean, std)
                    .map_err(|e| invalid(e.to_string()))?;
                Sampler::Normal(dist)
            },
            Self::LogNormal => {
                let (mu, sigma) = location_and_scale(params, &invalid)?;
                let dist = LogNormal::new(mu, sigma)
                    .map_err(|e| invalid(e.to_string()))?;
                Sampler::LogNormal(dist)
            },
        };

        Ok(RootDistribution {
            family,
            params: params.to_vec(),
            sampler,
        })
    }
}


/// The location must be finite and the scale positive.
fn location_and_scale<F>(params: &[f64], invalid: F)
    -> Result<(f64, f64), DistributionError>
    where F: Fn(String) -> DistributionError,
{
    let (loc, scale) = (params[0], params[1]);
    if !loc.is_finite() {
        return Err(invalid(format!("location {loc} is not finite")));
    }
    if !(scale.is_finite() && scale > 0.0) {
        return Err(invalid(format!("scale {scale} is not positive")));
    }
    Ok((loc, scale))
}


#[derive(Debug, Clone, Copy)]
enum Sampler {
    Bernoulli(Bernoulli),
    Normal(Normal<f64>),
    LogNormal(LogNormal<f64>),
}


/// A fitted distribution of a root node.
/// Immutable once constructed.
#[derive(Debug, Clone)]
pub struct RootDistribution {
    family: DistributionFamily,
    params: Vec<f64>,
    sampler: Sampler,
}


impl RootDistribution {
    /// The family this distribution belongs to.
    pub fn family(&self) -> DistributionFamily {
        self.family
    }


    /// The parameters this distribution was constructed with.
    pub fn params(&self) -> &[f64] {
        &self.params[..]
    }


    /// The expected value.
    pub fn mean(&self) -> f64 {
        match self.family {
            DistributionFamily::Bernoulli | DistributionFamily::Normal => {
                self.params[0]
            },
            DistributionFamily::LogNormal => {
                let (mu, sigma) = (self.params[0], self.params[1]);
                (mu + 0.5 * sigma * sigma).exp()
            },
        }
    }
}


impl fmt::Display for RootDistribution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self.params.iter()
            .map(|p| format!("{p:.4}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}({params})", self.family)
    }
}


impl Distribution<f64> for RootDistribution {
    fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        match &self.sampler {
            Sampler::Bernoulli(dist) => {
                if dist.sample(rng) { 1.0 } else { 0.0 }
            },
            Sampler::Normal(dist) => dist.sample(rng),
            Sampler::LogNormal(dist) => dist.sample(rng),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn bernoulli_samples_are_binary() {
        let dist = DistributionFamily::Bernoulli.construct(&[0.3]).unwrap();
        let mut rng = StdRng::seed_from_u64(0);
        let draws = dist.sample_iter(&mut rng)
            .take(2000)
            .collect::<Vec<f64>>();
        assert!(draws.iter().all(|&d| d == 0.0 || d == 1.0));

        let freq = draws.iter().sum::<f64>() / draws.len() as f64;
        assert!((freq - 0.3).abs() < 0.05, "{freq}");
    }


    #[test]
    fn bernoulli_rejects_invalid_probability() {
        let err = DistributionFamily::Bernoulli.construct(&[1.5]).unwrap_err();
        assert!(matches!(err, DistributionError::InvalidParameter { .. }));
    }


    #[test]
    fn arity_is_checked() {
        let err = DistributionFamily::Bernoulli
            .construct(&[0.1, 0.2])
            .unwrap_err();
        assert_eq!(
            err,
            DistributionError::Arity {
                family: DistributionFamily::Bernoulli,
                expected: 1,
                got: 2,
            }
        );
    }


    #[test]
    fn normal_needs_positive_scale() {
        let family = DistributionFamily::Normal;
        assert!(family.construct(&[1.0, 0.0]).is_err());
        assert!(family.construct(&[1.0, f64::NAN]).is_err());
        assert!(family.construct(&[f64::INFINITY, 1.0]).is_err());

        let dist = family.construct(&[1.0, 2.0]).unwrap();
        assert_eq!(dist.params(), &[1.0, 2.0]);
        assert_eq!(dist.mean(), 1.0);
        assert_eq!(dist.to_string(), "Normal(1.0000, 2.0000)");
    }


    #[test]
    fn log_normal_mean() {
        let dist = DistributionFamily::LogNormal
            .construct(&[0.0, 1.0])
            .unwrap();
        assert!((dist.mean() - 0.5_f64.exp()).abs() < 1e-12);
        let mut rng = StdRng::seed_from_u64(1);
        assert!(dist.sample(&mut rng) > 0.0);
    }


    #[test]
    fn family_from_json() {
        let family: DistributionFamily = serde_json::from_str("\"Normal\"")
            .unwrap();
        assert_eq!(family, DistributionFamily::Normal);
    }
}
