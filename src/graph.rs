//! The graph collaborator consumed by the estimator.
//!
//! Any type that exposes per-node metadata and per-node
//! `{features, target}` tables can be estimated
//! by implementing [`CausalGraph`].
use std::collections::HashMap;

use polars::prelude::*;

use crate::{EstimationError, Result};


/// Metadata of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeInfo {
    /// `true` if no parent of this node contributes data.
    pub root: bool,
    /// BEL function of the node, e.g. `protein` or `pathology`.
    pub node_label: String,
}


impl NodeInfo {
    /// Construct node metadata.
    pub fn new<S: ToString>(root: bool, node_label: S) -> Self {
        Self { root, node_label: node_label.to_string() }
    }
}


/// Observations of a node.
/// Each column of `features` holds the values of a parent,
/// `target` holds the values of the node itself.
#[derive(Debug, Clone)]
pub struct NodeData {
    /// Node identifier.
    pub node: String,
    /// Parent values. Rows are observations.
    pub features: DataFrame,
    /// Node values.
    pub target: Series,
}


impl NodeData {
    /// Returns `true` if no parent value is available.
    pub fn has_empty_features(&self) -> bool {
        let (height, width) = self.features.shape();
        height == 0 || width == 0
    }
}


/// A graph whose nodes can be estimated.
pub trait CausalGraph {
    /// Returns the metadata of `node`.
    fn node_info(&self, node: &str) -> Option<&NodeInfo>;


    /// Number of nodes in the graph.
    fn n_nodes(&self) -> usize;


    /// Observations per node, in the order nodes are estimated.
    fn node_data(&self) -> &[NodeData];
}


/// An in-memory [`CausalGraph`].
///
/// ```
/// use belscm::prelude::*;
/// use polars::prelude::*;
///
/// let mut graph = BelGraph::new();
/// graph.add_node("p(HGNC:AKT1)", NodeInfo::new(true, "protein"));
/// graph.add_data(
///     "p(HGNC:AKT1)",
///     DataFrame::empty(),
///     Series::new("p(HGNC:AKT1)", &[0.4, 0.6]),
/// ).unwrap();
/// assert_eq!(graph.n_nodes(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct BelGraph {
    nodes: HashMap<String, NodeInfo>,
    node_data: Vec<NodeData>,
}


impl BelGraph {
    /// Construct an empty graph.
    pub fn new() -> Self {
        Self::default()
    }


    /// Add or replace the metadata of `node`.
    pub fn add_node<S: ToString>(&mut self, node: S, info: NodeInfo) {
        self.nodes.insert(node.to_string(), info);
    }


    /// Attach observations to a node added by [`BelGraph::add_node`].
    /// Observations attached earlier to the same node are replaced.
    pub fn add_data<S: ToString>(
        &mut self,
        node: S,
        features: DataFrame,
        target: Series,
    ) -> Result<()>
    {
        let node = node.to_string();
        if !self.nodes.contains_key(&node) {
            return Err(EstimationError::UnknownNode(node));
        }

        let data = NodeData { node, features, target };
        match self.node_data.iter_mut().find(|d| d.node == data.node) {
            Some(slot) => { *slot = data; },
            None => { self.node_data.push(data); },
        }
        Ok(())
    }
}


impl CausalGraph for BelGraph {
    fn node_info(&self, node: &str) -> Option<&NodeInfo> {
        self.nodes.get(node)
    }


    fn n_nodes(&self) -> usize {
        self.nodes.len()
    }


    fn node_data(&self) -> &[NodeData] {
        &self.node_data[..]
    }
}
