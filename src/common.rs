//! Defines some common functions used in this library.

/// Defines some useful functions such as inner products and statistics.
pub mod utils;

/// Defines some checker functions.
pub(crate) mod checker;

/// Defines machine learning tasks.
pub mod task;

pub use task::*;
