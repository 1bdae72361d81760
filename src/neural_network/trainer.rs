use rand::SeedableRng;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;

use crate::{Sample, Result, EstimationError};
use crate::common::{checker, task, task::Task};

use super::{
    config::TrainerConfig,
    model::TrainableModel,
    nn_loss::NNLoss,
    optimizer::Adam,
};


/// Trains a [`TrainableModel`] for a single node.
///
/// The loss is selected by the task:
/// mean squared error for regression,
/// binary cross-entropy for classification.
/// Parameters are updated by [`Adam`] over shuffled mini-batches.
///
/// ```no_run
/// use belscm::prelude::*;
///
/// # fn run(sample: &Sample) -> belscm::Result<()> {
/// let config = TrainerConfig::default().seed(0);
/// let mut trainer = Trainer::new(1, 1, Task::Regression, config);
/// trainer.fit(sample)?;
/// println!("test loss: {:?}", trainer.test_loss());
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Trainer {
    config: TrainerConfig,
    model: TrainableModel,
    optimizer: Adam,
    loss_func: NNLoss,
    rng: StdRng,
    train_loss: f64,
    test_loss: Option<f64>,
}


impl Trainer {
    /// Construct a new trainer for a network
    /// with `n_feature` inputs and `n_output` outputs.
    pub fn new(
        n_feature: usize,
        n_output: usize,
        task: Task,
        config: TrainerConfig,
    ) -> Self
    {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let loss_func = match task {
            Task::Regression => NNLoss::L2,
            Task::Binary => NNLoss::CrossEntropy,
        };
        let model = TrainableModel::new(
            task, n_feature, config.n_hidden, n_output, &mut rng
        );
        let optimizer = Adam::new(&model, config.learning_rate);

        Self {
            config,
            model,
            optimizer,
            loss_func,
            rng,
            train_loss: 0.0,
            test_loss: None,
        }
    }


    /// Train the network on the first `split_index` rows of `sample`
    /// and record the losses on the training and test splits.
    pub fn fit(&mut self, sample: &Sample) -> Result<()> {
        self.config.validate()?;
        checker::check_sample(sample, self.model.n_feature())?;
        if self.task() == Task::Binary {
            checker::check_binary_target(sample)?;
        }

        let (train, test) = sample.split_at(self.config.split_index);
        let n_train = train.shape().0;
        if n_train == 0 {
            return Err(EstimationError::NoTrainingData);
        }

        for _ in 0..self.config.n_epoch {
            let mut permutation = (0..n_train).collect::<Vec<usize>>();
            permutation.shuffle(&mut self.rng);

            for indices in permutation.chunks(self.config.batch_size) {
                let (batch_x, batch_y) = train.rows(indices);
                let grads = self.model.gradients(
                    self.loss_func, &batch_x, &batch_y
                );
                self.optimizer.step(&mut self.model, &grads);
            }
        }

        self.train_loss = self.mean_loss(&train)
            .ok_or(EstimationError::NoTrainingData)?;
        self.test_loss = self.mean_loss(&test);
        Ok(())
    }


    /// Returns the mean loss of the current network over `sample`.
    /// Returns `Ok(None)` if `sample` has no rows.
    pub fn loss(&self, sample: &Sample) -> Result<Option<f64>> {
        checker::check_input_width(sample.shape().1, self.model.n_feature())?;
        Ok(self.mean_loss(sample))
    }


    fn mean_loss(&self, sample: &Sample) -> Option<f64> {
        let n_sample = sample.shape().0;
        let dim = self.model.n_output();

        let (predictions, targets): (Vec<_>, Vec<_>) = (0..n_sample)
            .map(|i| {
                let (x, y) = sample.at(i);
                (self.model.forward(x), task::vectorize(y, dim))
            })
            .unzip();

        self.loss_func.mean(&predictions, &targets)
    }


    /// Runs the forward pass for a single input.
    /// Fails with [`EstimationError::Shape`] if the width of `x`
    /// differs from the number of inputs of the network.
    pub fn predict<T: AsRef<[f64]>>(&self, x: T) -> Result<Vec<f64>> {
        self.model.predict(x)
    }


    /// Predicts the first output for every row of `sample`.
    pub fn predict_all(&self, sample: &Sample) -> Result<Vec<f64>> {
        let (n_sample, width) = sample.shape();
        checker::check_input_width(width, self.model.n_feature())?;

        let predictions = (0..n_sample)
            .map(|i| {
                let (x, _) = sample.at(i);
                self.model.forward(x)[0]
            })
            .collect();
        Ok(predictions)
    }


    /// Loss over the training split after the last epoch.
    pub fn train_loss(&self) -> f64 {
        self.train_loss
    }


    /// Loss over the test split after the last epoch.
    /// `None` if the test split is empty or `fit` has not been called.
    pub fn test_loss(&self) -> Option<f64> {
        self.test_loss
    }


    /// Returns the trained network.
    pub fn model(&self) -> &TrainableModel {
        &self.model
    }


    /// Returns the task of the trained network.
    pub fn task(&self) -> Task {
        self.model.task()
    }


    /// Returns the loss function used for training.
    pub fn loss_function(&self) -> NNLoss {
        self.loss_func
    }


    /// Returns the hyperparameters.
    pub fn config(&self) -> &TrainerConfig {
        &self.config
    }
}
