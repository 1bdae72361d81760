#![warn(missing_docs)]

//! 
//! A crate that fits the node-level mechanisms of
//! a structural causal model (SCM) built from a BEL graph.
//! 
//! Nodes are estimated in two ways.
//! 
//! - Root nodes
//!     A root node has no parent that contributes data.
//!     Its observations are summarized by a parametric distribution
//!     whose parameters are estimated in closed form:
//!     `Bernoulli(mean)` for categorical (binary) nodes and
//!     `Normal(mean, std)` or another two-parameter family
//!     for continuous nodes.
//! 
//! 
//! - Non-root nodes
//!     A non-root node is predicted from the values of its parents
//!     by a two-layered neural network,
//!     a regressor for continuous nodes and
//!     a logistic classifier for categorical nodes.
//! 
//! [`ParameterEstimator`] walks a [`CausalGraph`] and
//! collects both kinds of results in node-keyed maps.

pub mod common;
pub mod config;
pub mod distribution;
pub mod error;
pub mod estimator;
pub mod graph;
pub mod neural_network;
pub mod sample;

pub mod prelude;


pub use common::Task;
pub use config::{Config, VariableType, VariableTypes};
pub use distribution::{
    DistributionError,
    DistributionFamily,
    RootDistribution,
};
pub use error::{EstimationError, Result};
pub use estimator::ParameterEstimator;
pub use graph::{BelGraph, CausalGraph, NodeData, NodeInfo};
pub use neural_network::{
    Activation,
    NNLoss,
    TrainableModel,
    Trainer,
    TrainerConfig,
};
pub use sample::{Sample, DenseFeature};
