use belscm::prelude::*;
use polars::prelude::*;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;


/// `y = relu(x1 - x2)` with two parents.
fn two_parent_sample(n_sample: usize) -> Sample {
    let mut rng = StdRng::seed_from_u64(99);
    let x1 = (0..n_sample).map(|_| rng.gen_range(-1.0..1.0)).collect::<Vec<f64>>();
    let x2 = (0..n_sample).map(|_| rng.gen_range(-1.0..1.0)).collect::<Vec<f64>>();
    let y = x1.iter()
        .zip(&x2)
        .map(|(a, b)| (a - b).max(0.0))
        .collect::<Vec<f64>>();

    let data = DataFrame::new(vec![
        Series::new("p(HGNC:A)", x1),
        Series::new("p(HGNC:B)", x2),
    ]).unwrap();
    let target = Series::new("p(HGNC:C)", y);
    Sample::from_dataframe(&data, &target).unwrap()
}


/// Tests for `Trainer`.
#[cfg(test)]
pub mod neuralnetwork_tests {
    use super::*;

    #[test]
    fn two_parents() {
        let sample = two_parent_sample(2400);
        let (n_sample, n_feature) = sample.shape();
        assert_eq!(n_feature, 2);

        let config = TrainerConfig::default()
            .n_hidden(16)
            .n_epoch(40)
            .seed(0);
        let mut trainer = Trainer::new(n_feature, 1, Task::Regression, config);
        trainer.fit(&sample).unwrap();

        trainer.model().stats();

        let predictions = trainer.predict_all(&sample).unwrap();
        assert_eq!(predictions.len(), n_sample);

        let loss = sample.target()
            .iter()
            .zip(predictions)
            .map(|(t, p)| (t - p).powi(2))
            .sum::<f64>() / n_sample as f64;

        println!("L2-Loss (two parents, NN): {loss}");
        let test_loss = trainer.test_loss().unwrap();
        assert!(test_loss < 0.05, "{test_loss}");
        assert!(trainer.loss(&sample).unwrap().unwrap() < 0.05);
    }


    #[test]
    fn split_sizes() {
        let sample = two_parent_sample(2100);
        let (train, test) = sample.split_at(2000);
        assert_eq!(train.shape().0, 2000);
        assert_eq!(test.shape().0, 100);

        let sample = two_parent_sample(1999);
        let (train, test) = sample.split_at(2000);
        assert_eq!(train.shape().0, 1999);
        assert_eq!(test.shape().0, 0);
    }
}
