use serde::{Serialize, Deserialize};

use crate::{EstimationError, Result};

const LEARNING_RATE: f64 = 0.01;
const N_HIDDEN: usize = 10;
const N_EPOCH: usize = 30;
const MINIBATCH_SIZE: usize = 128;
const TRAIN_TEST_SPLIT_INDEX: usize = 2000;


/// Hyperparameters of a [`Trainer`](super::Trainer).
///
/// ```
/// use belscm::TrainerConfig;
///
/// let config = TrainerConfig::default()
///     .n_epoch(50)
///     .seed(7);
/// assert_eq!(config.batch_size, 128);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrainerConfig {
    /// Step size of the Adam optimizer.
    pub learning_rate: f64,
    /// Width of the hidden layer.
    pub n_hidden: usize,
    /// Number of passes over the training split.
    pub n_epoch: usize,
    /// Mini-batch size. The last batch of an epoch may be shorter.
    pub batch_size: usize,
    /// Rows before this index are used for training,
    /// the remaining rows for testing.
    pub split_index: usize,
    /// Seed for the weight initialization and the shuffling.
    /// `None` draws a seed from the OS.
    pub seed: Option<u64>,
}


impl Default for TrainerConfig {
    fn default() -> Self {
        Self {
            learning_rate: LEARNING_RATE,
            n_hidden: N_HIDDEN,
            n_epoch: N_EPOCH,
            batch_size: MINIBATCH_SIZE,
            split_index: TRAIN_TEST_SPLIT_INDEX,
            seed: None,
        }
    }
}


impl TrainerConfig {
    /// Set the learning rate.
    #[inline(always)]
    pub fn learning_rate(mut self, rate: f64) -> Self {
        self.learning_rate = rate;
        self
    }


    /// Set the width of the hidden layer.
    #[inline(always)]
    pub fn n_hidden(mut self, n_hidden: usize) -> Self {
        self.n_hidden = n_hidden;
        self
    }


    /// Set the number of epochs
    #[inline(always)]
    pub fn n_epoch(mut self, epoch: usize) -> Self {
        self.n_epoch = epoch;
        self
    }


    /// Set the mini-batch size
    #[inline(always)]
    pub fn batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }


    /// Set the train/test split index.
    #[inline(always)]
    pub fn split_index(mut self, index: usize) -> Self {
        self.split_index = index;
        self
    }


    /// Fix the random seed.
    #[inline(always)]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }


    /// Check whether the hyperparameters can be used for training.
    pub fn validate(&self) -> Result<()> {
        if self.batch_size == 0 {
            return Err(EstimationError::InvalidConfig(
                "batch size must be positive".into()
            ));
        }
        if self.n_hidden == 0 {
            return Err(EstimationError::InvalidConfig(
                "hidden layer must have at least one unit".into()
            ));
        }
        let rate = self.learning_rate;
        if !(rate.is_finite() && rate > 0.0) {
            return Err(EstimationError::InvalidConfig(format!(
                "learning rate must be a positive number. got {rate}"
            )));
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = TrainerConfig::default();
        assert_eq!(config.learning_rate, 0.01);
        assert_eq!(config.n_hidden, 10);
        assert_eq!(config.n_epoch, 30);
        assert_eq!(config.batch_size, 128);
        assert_eq!(config.split_index, 2000);
        assert!(config.seed.is_none());
        assert!(config.validate().is_ok());
    }


    #[test]
    fn partial_json_keeps_defaults() {
        let config: TrainerConfig = serde_json::from_str(
            r#"{"n_epoch": 5, "seed": 3}"#
        ).unwrap();
        assert_eq!(config.n_epoch, 5);
        assert_eq!(config.seed, Some(3));
        assert_eq!(config.batch_size, 128);
    }


    #[test]
    fn zero_batch_size_is_rejected() {
        let config = TrainerConfig::default().batch_size(0);
        assert!(matches!(
            config.validate(),
            Err(EstimationError::InvalidConfig(_))
        ));
    }
}
