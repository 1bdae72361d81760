use super::model::{TrainableModel, Gradients};

const BETA1: f64 = 0.9;
const BETA2: f64 = 0.999;
const EPSILON: f64 = 1e-8;


/// Adam optimizer with a fixed learning rate.
/// Holds the first and second moment estimates
/// for every parameter of the model it was created for.
#[derive(Debug, Clone)]
pub struct Adam {
    learning_rate: f64,
    beta1: f64,
    beta2: f64,
    epsilon: f64,
    step: i32,
    moments: Gradients,
    squared_moments: Gradients,
}


impl Adam {
    /// Construct a new optimizer for the parameters of `model`.
    pub fn new(model: &TrainableModel, learning_rate: f64) -> Self {
        Self {
            learning_rate,
            beta1: BETA1,
            beta2: BETA2,
            epsilon: EPSILON,
            step: 0,
            moments: Gradients::zeros(model),
            squared_moments: Gradients::zeros(model),
        }
    }


    /// Returns the number of steps taken so far.
    pub fn n_steps(&self) -> usize {
        self.step as usize
    }


    /// Perform a single optimization step.
    pub fn step(&mut self, model: &mut TrainableModel, grads: &Gradients) {
        self.step += 1;
        let correction1 = 1.0 - self.beta1.powi(self.step);
        let correction2 = 1.0 - self.beta2.powi(self.step);

        let update = |param: &mut f64, g: f64, m: &mut f64, v: &mut f64| {
            *m = self.beta1 * *m + (1.0 - self.beta1) * g;
            *v = self.beta2 * *v + (1.0 - self.beta2) * g * g;

            let m_hat = *m / correction1;
            let v_hat = *v / correction2;
            *param -= self.learning_rate * m_hat / (v_hat.sqrt() + self.epsilon);
        };

        let layers = model.layers.iter_mut()
            .zip(&grads.dw)
            .zip(&grads.db)
            .zip(self.moments.dw.iter_mut().zip(&mut self.moments.db))
            .zip(self.squared_moments.dw.iter_mut().zip(&mut self.squared_moments.db));

        for ((((layer, dw), db), (m_w, m_b)), (v_w, v_b)) in layers {
            let rows = layer.matrix.iter_mut()
                .zip(dw)
                .zip(m_w.iter_mut())
                .zip(v_w.iter_mut());
            for (((row, drow), mrow), vrow) in rows {
                let cells = row.iter_mut()
                    .zip(drow)
                    .zip(mrow.iter_mut())
                    .zip(vrow.iter_mut());
                for (((w, &g), m), v) in cells {
                    update(w, g, m, v);
                }
            }

            let cells = layer.bias.iter_mut()
                .zip(db)
                .zip(m_b.iter_mut())
                .zip(v_b.iter_mut());
            for (((b, &g), m), v) in cells {
                update(b, g, m, v);
            }
        }
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use crate::Task;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn first_step_moves_each_parameter_by_the_learning_rate() {
        let mut rng = StdRng::seed_from_u64(5);
        let mut model = TrainableModel::new(Task::Regression, 1, 3, 1, &mut rng);
        let before = model.clone();
        let mut adam = Adam::new(&model, 0.01);

        let mut grads = Gradients::zeros(&model);
        grads.dw[1][0][2] = 4.0;
        grads.db[0][1] = -0.5;
        adam.step(&mut model, &grads);

        assert_eq!(adam.n_steps(), 1);
        let moved = model.layers[1].matrix[0][2] - before.layers[1].matrix[0][2];
        assert!((moved + 0.01).abs() < 1e-6);
        let moved = model.layers[0].bias[1] - before.layers[0].bias[1];
        assert!((moved - 0.01).abs() < 1e-6);
        assert_eq!(model.layers[0].matrix, before.layers[0].matrix);
    }
}
