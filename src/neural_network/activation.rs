use std::fmt;

/// Activation functions available to neural networks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Activation {
    /// Sigmoid function
    Sigmoid,
    /// ReLU function.
    ReLu,
    /// Identity function
    Id,
}


impl fmt::Display for Activation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Sigmoid => "Sigmoid",
            Self::ReLu => "ReLU",
            Self::Id => "Identity",
        };

        write!(f, "{name}")
    }
}


impl Activation {
    pub(crate) fn eval<T: AsRef<[f64]>>(&self, x: T) -> Vec<f64> {
        match self {
            Self::Sigmoid => sigmoid(x),
            Self::ReLu => relu(x),
            Self::Id => id(x),
        }
    }

    pub(crate) fn diff<T: AsRef<[f64]>>(&self, x: T) -> Vec<f64> {
        match self {
            Self::Sigmoid => sigmoid_diff(x),
            Self::ReLu => relu_diff(x),
            Self::Id => id_diff(x),
        }
    }
}


/// Numerically stable logistic function.
#[inline(always)]
pub(crate) fn logistic(x: f64) -> f64 {
    if x >= 0.0 {
        1.0 / (1.0 + (-x).exp())
    } else {
        let e = x.exp();
        e / (1.0 + e)
    }
}


#[inline]
fn sigmoid<T: AsRef<[f64]>>(x: T) -> Vec<f64> {
    x.as_ref()
        .iter()
        .map(|&xi| logistic(xi))
        .collect()
}


#[inline]
fn relu<T: AsRef<[f64]>>(x: T) -> Vec<f64> {
    x.as_ref()
        .iter()
        .map(|xi| if *xi <= 0.0 { 0.0 } else { *xi })
        .collect()
}


#[inline]
fn id<T: AsRef<[f64]>>(x: T) -> Vec<f64> {
    x.as_ref().to_vec()
}


#[inline]
fn sigmoid_diff<T: AsRef<[f64]>>(x: T) -> Vec<f64> {
    x.as_ref()
        .iter()
        .map(|&xi| {
            let s = logistic(xi);
            s * (1.0 - s)
        })
        .collect()
}


#[inline]
fn relu_diff<T: AsRef<[f64]>>(x: T) -> Vec<f64> {
    x.as_ref()
        .iter()
        .map(|xi| if *xi <= 0.0 { 0.0 } else { 1.0 })
        .collect()
}


#[inline]
fn id_diff<T: AsRef<[f64]>>(x: T) -> Vec<f64> {
    vec![1.0; x.as_ref().len()]
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sigmoid_stays_in_the_unit_interval() {
        let x = [-1e4, -30.0, -1.0, 0.0, 1.0, 30.0, 1e4];
        let s = Activation::Sigmoid.eval(x);
        assert!(s.iter().all(|v| (0.0..=1.0).contains(v)));
        assert_eq!(s[3], 0.5);
        assert!(s.iter().all(|v| v.is_finite()));
    }


    #[test]
    fn relu_cuts_negative_values() {
        let y = Activation::ReLu.eval([-2.0, 0.0, 3.0]);
        assert_eq!(y, vec![0.0, 0.0, 3.0]);
        let dy = Activation::ReLu.diff([-2.0, 0.0, 3.0]);
        assert_eq!(dy, vec![0.0, 0.0, 1.0]);
    }


    #[test]
    fn sigmoid_derivative_at_zero() {
        let d = Activation::Sigmoid.diff([0.0]);
        assert!((d[0] - 0.25).abs() < 1e-12);
    }
}
