use std::fmt;


/// `ln(0)` is clamped to this value, so the cross-entropy stays finite.
const LOG_CLAMP: f64 = -100.0;


/// Loss functions available to Neural networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NNLoss {
    /// Mean squared error, paired with a linear output.
    L2,

    /// Binary cross-entropy, paired with a sigmoid output.
    CrossEntropy,
}


impl fmt::Display for NNLoss {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::L2 => "Mean Squared Error",
            Self::CrossEntropy => "Binary Cross Entropy",
        };

        write!(f, "{name}")
    }
}


impl NNLoss {
    /// Returns the loss of a single prediction `p` for the target `y`,
    /// summed over the output units.
    #[inline(always)]
    pub fn eval(&self, p: &[f64], y: &[f64]) -> f64 {
        match self {
            Self::L2 => l2(p, y),
            Self::CrossEntropy => cross_entropy(p, y),
        }
    }


    /// Returns the mean loss over the given predictions.
    /// Returns `None` for an empty batch.
    #[inline(always)]
    pub fn mean(&self, predictions: &[Vec<f64>], targets: &[Vec<f64>])
        -> Option<f64>
    {
        let n_items = predictions.iter()
            .map(|p| p.len())
            .sum::<usize>();
        if n_items == 0 { return None; }

        let total = predictions.iter()
            .zip(targets)
            .map(|(p, y)| self.eval(p, y))
            .sum::<f64>();
        Some(total / n_items as f64)
    }


    /// Returns the derivative of the loss
    /// with respect to the pre-activation of the output layer.
    #[inline(always)]
    pub fn diff(&self, p: Vec<f64>, y: Vec<f64>) -> Vec<f64> {
        match self {
            Self::L2 => l2_diff(p, y),
            Self::CrossEntropy => cross_entropy_diff(p, y),
        }
    }
}


#[inline(always)]
fn l2(p: &[f64], y: &[f64]) -> f64 {
    p.iter()
        .zip(y)
        .map(|(pi, yi)| (pi - yi).powi(2))
        .sum()
}


#[inline(always)]
fn cross_entropy(p: &[f64], y: &[f64]) -> f64 {
    p.iter()
        .zip(y)
        .map(|(pi, yi)| {
            let log_p = pi.ln().max(LOG_CLAMP);
            let log_q = (1.0 - pi).ln().max(LOG_CLAMP);
            -(yi * log_p + (1.0 - yi) * log_q)
        })
        .sum()
}


#[inline(always)]
fn l2_diff(p: Vec<f64>, y: Vec<f64>) -> Vec<f64> {
    p.into_iter()
        .zip(y)
        .map(|(pi, yi)| 2.0 * (pi - yi))
        .collect()
}

#[inline(always)]
fn cross_entropy_diff(p: Vec<f64>, y: Vec<f64>) -> Vec<f64> {
    p.into_iter()
        .zip(y)
        .map(|(pi, yi)| pi - yi)
        .collect()
}
