//! Estimates the node-level mechanisms of a structural causal model.
//!
//! Root nodes get a parametric distribution fitted in closed form,
//! non-root nodes get a trained two-layer network.

/// Defines the parameter estimator
pub mod parameter_estimation;
pub(crate) mod progress;

pub use parameter_estimation::ParameterEstimator;
