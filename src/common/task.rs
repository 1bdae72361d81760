use std::fmt;

/// Defines machine learning tasks.
/// A trained network is either a regressor or a binary classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Task {
    /// Binary classification. The target labels are `0` or `1`.
    Binary,
    /// Regression
    Regression,
}


impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Binary => "Binary classification",
            Self::Regression => "Regression",
        };

        write!(f, "{name}")
    }
}


/// Convert a label into a vector.
/// Every network in this crate has a single output unit,
/// so a scalar target becomes a one-element vector.
#[inline(always)]
pub(crate) fn vectorize(y: f64, n_output: usize) -> Vec<f64> {
    vec![y; n_output]
}
