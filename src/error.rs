//! Error types for parameter estimation.
//!
//! Every failure is fatal for the estimation pass that raised it.
//! Nothing is retried and no partial result is stored for a failing node.

use std::fmt;

use polars::prelude::PolarsError;
use thiserror::Error;

use crate::distribution::DistributionError;


/// Convenient alias used throughout this crate.
pub type Result<T> = std::result::Result<T, EstimationError>;


/// The kind of root node whose distribution could not be constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RootKind {
    /// Categorical (binary) root, constructed from a probability.
    Binary,
    /// Continuous root, constructed from a mean and a standard deviation.
    Continuous,
}


impl fmt::Display for RootKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Binary => "binary",
            Self::Continuous => "continuous",
        };

        write!(f, "{name}")
    }
}


/// Top-level error type.
#[derive(Debug, Error)]
pub enum EstimationError {
    // Preconditions ----------------------------------------------------

    /// The graph has no node or no node data.
    #[error("Empty Graph or data not loaded.")]
    EmptyGraph,

    /// Node data refers to a node the graph does not know.
    #[error("Unknown node: {0}")]
    UnknownNode(String),

    /// The configuration has no distribution for a node label.
    #[error("No distribution configured for node label `{label}` (node {node})")]
    MissingDistribution {
        /// Node identifier.
        node: String,
        /// Node label looked up in the configuration.
        label: String,
    },

    /// Hyperparameters that cannot be used for training.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    // Data -------------------------------------------------------------

    /// A value that should be a probability is outside of `[0, 1]`.
    #[error("Something wrong with data for {target}: {value} is not in [0, 1]")]
    DataRange {
        /// Name of the target column.
        target: String,
        /// The offending value.
        value: f64,
    },

    /// Constructing a root distribution failed.
    #[error("The schema for a {kind} root does not match the distribution for node {target}")]
    SchemaMismatch {
        /// Root kind that was being estimated.
        kind: RootKind,
        /// Name of the target column.
        target: String,
        /// Why the constructor rejected the parameters.
        #[source]
        source: DistributionError,
    },

    /// A column holds values that cannot be read as `f64`.
    #[error("Column `{0}` contains non-numeric or missing values")]
    NonNumeric(String),

    /// A root node without observations.
    #[error("Target `{0}` has no observations")]
    EmptyTarget(String),

    /// Malformed feature/target tables.
    #[error("Shape mismatch: {0}")]
    Shape(String),

    /// The train/test split left no training rows.
    #[error("The training split is empty")]
    NoTrainingData,

    // Infrastructure ---------------------------------------------------

    /// Error raised by polars while converting tables.
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),

    /// I/O error while reading a configuration file.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Malformed JSON configuration.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
