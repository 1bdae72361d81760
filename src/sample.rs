//! Struct `Sample` represents the numeric data of a single node:
//! the parent features and the node's own target values.

// Provides feature struct.
pub(crate) mod feature_struct;
// Provides sample struct.
pub(crate) mod sample_struct;


pub use sample_struct::Sample;
pub use feature_struct::DenseFeature;
