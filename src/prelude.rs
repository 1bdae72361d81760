//! Exports the estimator, its inputs, and its outputs.
//! 
pub use crate::estimator::ParameterEstimator;


pub use crate::graph::{
    // Graph trait
    CausalGraph,

    BelGraph,
    NodeInfo,
    NodeData,
};


pub use crate::config::{
    Config,
    VariableType,
    VariableTypes,
};


pub use crate::distribution::{
    DistributionFamily,
    RootDistribution,
};


pub use crate::neural_network::{
    Trainer,
    TrainerConfig,
    TrainableModel,
};


pub use crate::sample::{
    Sample,
    DenseFeature,
};


pub use crate::common::Task;


pub use crate::error::EstimationError;
