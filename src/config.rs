//! Configuration of a parameter estimation pass.
use std::collections::{HashMap, HashSet};
use std::fs;
use std::path::Path;

use serde::{Serialize, Deserialize};

use crate::{Result, Task, TrainerConfig, DistributionFamily};


/// BEL functions whose nodes take binary values.
pub const CATEGORICAL_LABELS: [&str; 8] = [
    "biologicalProcess",
    "pathology",
    "activity",
    "reaction",
    "translocation",
    "degradation",
    "cellSecretion",
    "cellSurfaceExpression",
];


/// Kind of values a node takes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VariableType {
    /// Binary values, `0` or `1`.
    Categorical,
    /// Real values.
    Continuous,
}


impl VariableType {
    /// The learning task for a non-root node of this type.
    pub fn task(&self) -> Task {
        match self {
            Self::Categorical => Task::Binary,
            Self::Continuous => Task::Regression,
        }
    }
}


/// Partition of node labels into categorical and continuous ones.
/// Every label that is not categorical is continuous.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VariableTypes {
    categorical: HashSet<String>,
}


impl Default for VariableTypes {
    fn default() -> Self {
        Self::new(CATEGORICAL_LABELS)
    }
}


impl VariableTypes {
    /// Construct a partition from the categorical labels.
    pub fn new<I, S>(categorical: I) -> Self
        where I: IntoIterator<Item = S>,
              S: ToString,
    {
        let categorical = categorical.into_iter()
            .map(|s| s.to_string())
            .collect();
        Self { categorical }
    }


    /// Classify `label`.
    pub fn variable_type(&self, label: &str) -> VariableType {
        if self.categorical.contains(label) {
            VariableType::Categorical
        } else {
            VariableType::Continuous
        }
    }
}


/// Everything the estimator needs besides the graph.
///
/// ```
/// use belscm::{Config, DistributionFamily};
///
/// let config = Config::from_json_str(r#"{
///     "node_label_distribution_info": {
///         "protein": "Normal",
///         "pathology": "Bernoulli"
///     },
///     "trainer": {"n_epoch": 10, "seed": 7}
/// }"#).unwrap();
///
/// assert_eq!(
///     config.distribution_for("protein"),
///     Some(DistributionFamily::Normal)
/// );
/// assert_eq!(config.trainer.n_epoch, 10);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Distribution constructor per node label.
    pub node_label_distribution_info: HashMap<String, DistributionFamily>,
    /// Partition of node labels.
    #[serde(rename = "categorical_labels")]
    pub variable_types: VariableTypes,
    /// Hyperparameters of every trained network.
    pub trainer: TrainerConfig,
    /// Print progress while training.
    pub verbose: bool,
}


impl Default for Config {
    fn default() -> Self {
        Self {
            node_label_distribution_info: HashMap::new(),
            variable_types: VariableTypes::default(),
            trainer: TrainerConfig::default(),
            verbose: true,
        }
    }
}


impl Config {
    /// Parse a configuration from JSON.
    /// Missing fields keep their default values.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config = serde_json::from_str(json)?;
        Ok(config)
    }


    /// Read a JSON configuration file.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let json = fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }


    /// Set the distribution constructor for `label`.
    pub fn with_distribution<S: ToString>(
        mut self,
        label: S,
        family: DistributionFamily,
    ) -> Self
    {
        self.node_label_distribution_info.insert(label.to_string(), family);
        self
    }


    /// Replace the categorical labels.
    pub fn with_categorical_labels<I, S>(mut self, labels: I) -> Self
        where I: IntoIterator<Item = S>,
              S: ToString,
    {
        self.variable_types = VariableTypes::new(labels);
        self
    }


    /// Replace the trainer hyperparameters.
    pub fn with_trainer(mut self, trainer: TrainerConfig) -> Self {
        self.trainer = trainer;
        self
    }


    /// Turn progress printing on or off.
    pub fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }


    /// Returns the distribution constructor for `label`.
    pub fn distribution_for(&self, label: &str) -> Option<DistributionFamily> {
        self.node_label_distribution_info.get(label).copied()
    }


    /// Classify `label`.
    pub fn variable_type(&self, label: &str) -> VariableType {
        self.variable_types.variable_type(label)
    }
}
