//! Two-layered neural network module.

/// Defines activation functions
pub mod activation;
/// Defines the hyperparameters of a trainer
pub mod config;
/// Defines the trainable two-layer network
pub mod model;
/// Defines some loss functions
pub mod nn_loss;
/// Defines the Adam optimizer
pub mod optimizer;
/// Defines a neural network trainer
pub mod trainer;
pub(crate) mod layer;

pub use activation::Activation;
pub use config::TrainerConfig;
pub use model::{TrainableModel, Gradients};
pub use nn_loss::NNLoss;
pub use optimizer::Adam;
pub use trainer::Trainer;
