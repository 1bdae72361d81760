use rand::Rng;

use crate::Result;
use crate::common::{
    checker,
    task,
    utils,
    task::Task,
};
use super::{
    layer::*,
    nn_loss::*,
    activation::*,
};

/// 2-layered neural network.
/// ```text
///          O
///  O
///          O
///  O                O
///          O
///  O
///          O
/// L0      L1       L2
/// ```
/// # Layer 1
/// Computes `z = relu(u)` for `u = Wx + b`.
/// Here, `x` is an `n`-dimensional vector,
/// `W` is a matrix of size `kxn`,
/// and `b` is an `k`-dimensional vector.
/// # Layer 2
/// Computes `activation_2(v)` for `v = W'z + b'`,
/// where `activation_2` is the identity for regression
/// and the sigmoid for binary classification.
#[derive(Debug, Clone, PartialEq)]
pub struct TrainableModel {
    task: Task,
    pub(super) layers: Vec<Layer>,
}


/// Gradients of the mean batch loss,
/// one weight matrix and one bias vector per layer.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradients {
    pub(super) dw: Vec<Vec<Vec<f64>>>,
    pub(super) db: Vec<Vec<f64>>,
}


impl Gradients {
    /// All-zero gradients shaped like `model`.
    pub(super) fn zeros(model: &TrainableModel) -> Self {
        let dw = model.layers.iter()
            .map(|layer| {
                let (nrow, ncol) = layer.shape();
                vec![vec![0.0; ncol]; nrow]
            })
            .collect();
        let db = model.layers.iter()
            .map(|layer| vec![0.0; layer.output_dim()])
            .collect();
        Self { dw, db }
    }
}


impl TrainableModel {
    /// Construct a network with a ReLU hidden layer of width `n_hidden`.
    /// The output activation is chosen by `task`.
    pub fn new<R: Rng + ?Sized>(
        task: Task,
        n_feature: usize,
        n_hidden: usize,
        n_output: usize,
        rng: &mut R,
    ) -> Self
    {
        let output_activation = match task {
            Task::Regression => Activation::Id,
            Task::Binary => Activation::Sigmoid,
        };
        let hidden = Layer::new(n_hidden, n_feature, Activation::ReLu, rng);
        let output = Layer::new(n_output, n_hidden, output_activation, rng);

        Self { task, layers: vec![hidden, output] }
    }


    /// Returns the task this network is trained for.
    pub fn task(&self) -> Task {
        self.task
    }


    /// Number of inputs.
    pub fn n_feature(&self) -> usize {
        self.layers.first()
            .map(|layer| layer.input_dim())
            .unwrap_or(0)
    }


    /// Number of outputs.
    pub fn n_output(&self) -> usize {
        self.layers.last()
            .map(|layer| layer.output_dim())
            .unwrap_or(0)
    }


    /// Evaluate the given input.
    /// Fails with [`crate::EstimationError::Shape`] if `x` does not have
    /// one value per input unit.
    pub fn predict<T: AsRef<[f64]>>(&self, x: T) -> Result<Vec<f64>> {
        let x = x.as_ref();
        checker::check_input_width(x.len(), self.n_feature())?;
        Ok(self.forward(x))
    }


    /// Evaluate an input whose width is already checked.
    #[inline(always)]
    pub(crate) fn forward<T: AsRef<[f64]>>(&self, x: T) -> Vec<f64>
    {
        self.layers.iter()
            .fold(x.as_ref().to_vec(), |z, layer| layer.forward(z))
    }


    /// Prints stats of this network.
    #[inline(always)]
    pub fn stats(&self) {
        println!("Stats");
        println!("----------------");
        for (l, layer) in self.layers.iter().enumerate() {
            let (nrow, ncol) = layer.shape();
            let act = layer.activation;
            println!(
                "\t[Layer {k: >3}] \
                [input: {ncol: >7}]\t\
                [output: {nrow: >7}]\t\
                [activation: {act}]",
                k = l + 1
            );
        }
        println!("----------------");
    }


    /// Computes the gradient of the mean loss over the given mini-batch.
    /// `self` is not modified.
    pub fn gradients(
        &self,
        loss_func: NNLoss,
        batch_x: &[Vec<f64>],
        batch_y: &[f64],
    ) -> Gradients
    {
        let batch_size = batch_x.len();
        if batch_size == 0 {
            return Gradients::zeros(self);
        }

        let n_layers = self.layers.len();
        // Keep sub-gradients for all hidden layers.
        let mut dfs = vec![Vec::with_capacity(batch_size); n_layers-1];
        // Keep the inputs of each layer for back propagation.
        let mut outputs = vec![Vec::with_capacity(batch_size); n_layers];

        // The `i`-th **row** of `batch_delta` corresponds to
        // the `delta` at `i`-th example `(xi, yi)`.
        let mut batch_delta = Vec::with_capacity(batch_size);

        let dim = self.n_output();
        let scale = 1.0 / (batch_size * dim) as f64;
        for (x, &y) in batch_x.iter().zip(batch_y) {
            // Forward propagation
            let final_output = self.layers.iter()
                .enumerate()
                .fold(x.clone(), |z, (l, layer)| {
                    // Linear transformation: `u = Wx + b`
                    let u = layer.affine(&z);
                    outputs[l].push(z);
                    // Nonlinear transformation: `z = f(u)`
                    let z = layer.nonlinear(&u);

                    if l+1 < n_layers {
                        let df = layer.activation.diff(u);
                        dfs[l].push(df);
                    }

                    z
                });

            let y = task::vectorize(y, dim);
            // Compute the `delta` for the last layer.
            let delta = loss_func.diff(final_output, y)
                .into_iter()
                .map(|d| d * scale)
                .collect::<Vec<_>>();
            batch_delta.push(delta);
        }


        let mut dw = Vec::with_capacity(n_layers);
        let mut db = Vec::with_capacity(n_layers);
        let mut delta = batch_delta;
        let layers = self.layers.iter().rev().zip(outputs.into_iter().rev());
        for (layer, output) in layers {
            dw.push(matrix_inner_product(&delta, &output));
            db.push(column_sum(&delta));

            // Update `delta` for the previous layer
            if let Some(df) = dfs.pop() {
                let delta_x_weights = matrix_product(&delta, &layer.matrix);
                delta = utils::hadamard_product(df, delta_x_weights);
            }
        }
        dw.reverse();
        db.reverse();

        Gradients { dw, db }
    }
}
