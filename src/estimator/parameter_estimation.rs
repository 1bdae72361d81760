use rayon::prelude::*;

use std::collections::HashMap;
use std::time::Instant;

use crate::{
    Config,
    Sample,
    Trainer,
    RootDistribution,
    EstimationError,
    Result,
};
use crate::common::{checker, utils};
use crate::config::VariableType;
use crate::error::RootKind;
use crate::graph::{CausalGraph, NodeData, NodeInfo};
use crate::sample::feature_struct::series_to_vec;

use super::progress;

/// Each trained network has a single output unit.
const N_OUTPUT: usize = 1;

/// Continuous roots use the sample standard deviation.
const STD_DDOF: usize = 1;


/// Fits a distribution for every root node and
/// a network for every non-root node of a graph.
///
/// A node is estimated as a root iff it is marked as a root
/// and has no feature data.
/// A network is trained for a node iff it is not a root
/// and has feature data.
///
/// ```no_run
/// use belscm::prelude::*;
///
/// # fn run(graph: &BelGraph, config: &Config) -> belscm::Result<()> {
/// let mut estimator = ParameterEstimator::new(graph, config)?;
/// estimator.get_distribution_for_roots_from_data()?;
/// estimator.get_model_for_each_non_root_node()?;
///
/// let (roots, networks) = estimator.into_parts();
/// # Ok(())
/// # }
/// ```
pub struct ParameterEstimator<'a, G> {
    graph: &'a G,
    config: &'a Config,
    root_distributions: HashMap<String, RootDistribution>,
    trained_networks: HashMap<String, Trainer>,
}


impl<'a, G> ParameterEstimator<'a, G>
    where G: CausalGraph,
{
    /// Construct a new estimator.
    /// Fails if the graph has no node or no node data.
    pub fn new(graph: &'a G, config: &'a Config) -> Result<Self> {
        if graph.n_nodes() == 0 || graph.node_data().is_empty() {
            return Err(EstimationError::EmptyGraph);
        }
        config.trainer.validate()?;

        Ok(Self {
            graph,
            config,
            root_distributions: HashMap::new(),
            trained_networks: HashMap::new(),
        })
    }


    /// Fitted distributions, keyed by node identifier.
    pub fn root_distributions(&self) -> &HashMap<String, RootDistribution> {
        &self.root_distributions
    }


    /// Trained networks, keyed by node identifier.
    pub fn trained_networks(&self) -> &HashMap<String, Trainer> {
        &self.trained_networks
    }


    /// Consumes `self` and returns
    /// the fitted distributions and the trained networks.
    pub fn into_parts(self)
        -> (HashMap<String, RootDistribution>, HashMap<String, Trainer>)
    {
        (self.root_distributions, self.trained_networks)
    }


    /// Runs [`Self::get_distribution_for_roots_from_data`] and then
    /// [`Self::get_model_for_each_non_root_node`].
    pub fn estimate(&mut self) -> Result<()> {
        self.get_distribution_for_roots_from_data()?;
        self.get_model_for_each_non_root_node()
    }


    /// Fits a distribution for every root node without feature data.
    ///
    /// Categorical roots are constructed from the mean of the target,
    /// continuous roots from the mean and
    /// the sample standard deviation of the target.
    /// Distributions are stored only if every root succeeds.
    pub fn get_distribution_for_roots_from_data(&mut self) -> Result<()> {
        let graph = self.graph;
        let mut fitted = Vec::new();
        for data in graph.node_data() {
            let info = self.node_info(data)?;
            if !(info.root && data.has_empty_features()) { continue; }

            let dist = self.distribution_for_root(data, info)?;
            fitted.push((data.node.clone(), dist));
        }

        self.root_distributions.extend(fitted);
        Ok(())
    }


    /// Trains a network for every non-root node with feature data.
    /// Each network is stored as soon as its training succeeds.
    pub fn get_model_for_each_non_root_node(&mut self) -> Result<()> {
        let graph = self.graph;
        for data in graph.node_data() {
            let info = self.node_info(data)?;
            if info.root || data.has_empty_features() { continue; }

            let trainer = self.train_network(data, info)?;
            self.trained_networks.insert(data.node.clone(), trainer);
        }
        Ok(())
    }


    fn node_info(&self, data: &NodeData) -> Result<&'a NodeInfo> {
        self.graph.node_info(&data.node)
            .ok_or_else(|| EstimationError::UnknownNode(data.node.clone()))
    }


    fn distribution_for_root(&self, data: &NodeData, info: &NodeInfo)
        -> Result<RootDistribution>
    {
        let label = &info.node_label;
        let family = self.config.distribution_for(label)
            .ok_or_else(|| EstimationError::MissingDistribution {
                node: data.node.clone(),
                label: label.clone(),
            })?;

        let target = data.target.name().to_string();
        let values = series_to_vec(&data.target)?;
        let mean = utils::mean(&values)
            .ok_or_else(|| EstimationError::EmptyTarget(target.clone()))?;

        match self.config.variable_type(label) {
            VariableType::Categorical => {
                // The mean of a binary target is the success probability.
                checker::check_probability(mean, &target)?;
                family.construct(&[mean])
                    .map_err(|source| EstimationError::SchemaMismatch {
                        kind: RootKind::Binary,
                        target,
                        source,
                    })
            },
            VariableType::Continuous => {
                // A single observation has no sample deviation;
                // `NaN` lets the constructor reject it.
                let std = utils::std(&values, STD_DDOF).unwrap_or(f64::NAN);
                family.construct(&[mean, std])
                    .map_err(|source| EstimationError::SchemaMismatch {
                        kind: RootKind::Continuous,
                        target,
                        source,
                    })
            },
        }
    }


    fn train_network(&self, data: &NodeData, info: &NodeInfo)
        -> Result<Trainer>
    {
        let task = self.config.variable_type(&info.node_label).task();
        let sample = Sample::from_dataframe(&data.features, &data.target)?;
        let n_feature = sample.shape().1;

        let mut trainer = Trainer::new(
            n_feature, N_OUTPUT, task, self.config.trainer.clone()
        );

        let verbose = self.config.verbose;
        if verbose { progress::print_start(&data.node, task); }

        let now = Instant::now();
        trainer.fit(&sample)?;

        if verbose {
            progress::print_finish(&data.node, now.elapsed(), trainer.test_loss());
        }
        Ok(trainer)
    }
}


impl<'a, G> ParameterEstimator<'a, G>
    where G: CausalGraph + Sync,
{
    /// Same as [`Self::get_model_for_each_non_root_node`],
    /// but trains the networks of different nodes in parallel.
    /// Every node owns its trainer and random number generator,
    /// so the results do not depend on the scheduling.
    /// Networks are stored only if every node succeeds.
    pub fn get_model_for_each_non_root_node_par(&mut self) -> Result<()> {
        let this = &*self;
        let targets = this.graph.node_data()
            .iter()
            .map(|data| this.node_info(data).map(|info| (data, info)))
            .collect::<Result<Vec<_>>>()?;

        let trained = targets.into_par_iter()
            .filter(|(data, info)| !info.root && !data.has_empty_features())
            .map(|(data, info)| {
                this.train_network(data, info)
                    .map(|trainer| (data.node.clone(), trainer))
            })
            .collect::<Result<Vec<_>>>()?;

        self.trained_networks.extend(trained);
        Ok(())
    }
}
