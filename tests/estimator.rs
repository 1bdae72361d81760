use belscm::prelude::*;
use polars::prelude::*;
use rand::{Rng, SeedableRng};
use rand::rngs::StdRng;
use rand_distr::Normal;

const ROOT: &str = "path(MESH:Hypoxia)";
const CHILD: &str = "p(HGNC:HIF1A)";
const SWITCH: &str = "bp(GO:angiogenesis)";


/// Root: 80 ones and 20 zeros.
/// Child: `2 * parent + noise` over 3000 rows.
/// Switch: `1` iff the continuous parent is positive.
fn scenario_graph() -> BelGraph {
    let mut rng = StdRng::seed_from_u64(2024);
    let mut graph = BelGraph::new();

    graph.add_node(ROOT, NodeInfo::new(true, "pathology"));
    graph.add_node(CHILD, NodeInfo::new(false, "protein"));
    graph.add_node(SWITCH, NodeInfo::new(false, "biologicalProcess"));

    let root = (0..100)
        .map(|i| if i < 80 { 1.0 } else { 0.0 })
        .collect::<Vec<f64>>();
    graph.add_data(ROOT, DataFrame::empty(), Series::new(ROOT, root))
        .unwrap();

    let noise = Normal::new(0.0, 0.1).unwrap();
    let parent = (0..3000)
        .map(|_| if rng.gen_bool(0.8) { 1.0 } else { 0.0 })
        .collect::<Vec<f64>>();
    let child = parent.iter()
        .map(|x| 2.0 * x + rng.sample(noise))
        .collect::<Vec<f64>>();
    let features = DataFrame::new(vec![Series::new(ROOT, parent)]).unwrap();
    graph.add_data(CHILD, features, Series::new(CHILD, child)).unwrap();

    let parent = (0..1500)
        .map(|_| rng.gen_range(-2.0..2.0))
        .collect::<Vec<f64>>();
    let switch = parent.iter()
        .map(|&x| if x > 0.0 { 1.0 } else { 0.0 })
        .collect::<Vec<f64>>();
    let features = DataFrame::new(vec![Series::new(CHILD, parent)]).unwrap();
    graph.add_data(SWITCH, features, Series::new(SWITCH, switch)).unwrap();

    graph
}


fn scenario_config() -> Config {
    Config::default()
        .with_distribution("pathology", DistributionFamily::Bernoulli)
        .with_distribution("biologicalProcess", DistributionFamily::Bernoulli)
        .with_distribution("protein", DistributionFamily::Normal)
        .with_trainer(TrainerConfig::default().seed(17))
}


/// A graph whose node data refers to a node without metadata.
struct DanglingGraph {
    data: Vec<NodeData>,
}


impl CausalGraph for DanglingGraph {
    fn node_info(&self, _node: &str) -> Option<&NodeInfo> {
        None
    }

    fn n_nodes(&self) -> usize {
        1
    }

    fn node_data(&self) -> &[NodeData] {
        &self.data[..]
    }
}


/// End-to-end tests for `ParameterEstimator`.
#[cfg(test)]
pub mod estimator_tests {
    use super::*;

    #[test]
    fn end_to_end() {
        let graph = scenario_graph();
        let config = scenario_config();

        let mut estimator = ParameterEstimator::new(&graph, &config).unwrap();
        estimator.get_distribution_for_roots_from_data().unwrap();
        estimator.get_model_for_each_non_root_node().unwrap();

        let (roots, networks) = estimator.into_parts();
        assert_eq!(roots.len(), 1);
        let p = roots[ROOT].params()[0];
        assert!((p - 0.8).abs() < 1e-12, "{p}");

        assert_eq!(networks.len(), 2);
        let child = &networks[CHILD];
        assert_eq!(child.task(), Task::Regression);
        let test_mse = child.test_loss().unwrap();
        assert!(test_mse < 0.1, "test MSE = {test_mse}");
        for x in [0.0, 1.0] {
            let y = child.predict([x]).unwrap()[0];
            assert!((y - 2.0 * x).abs() < 0.25, "f({x}) = {y}");
        }

        let switch = &networks[SWITCH];
        assert_eq!(switch.task(), Task::Binary);
        for x in [-1e6, -1.0, 0.0, 1.0, 1e6] {
            let p = switch.predict([x]).unwrap()[0];
            assert!((0.0..=1.0).contains(&p), "{p}");
        }
        assert!(switch.predict([1.5]).unwrap()[0] > 0.5);
        assert!(switch.predict([-1.5]).unwrap()[0] < 0.5);
        assert!(switch.test_loss().is_none());
    }


    #[test]
    fn parallel_training_matches_sequential_training() {
        let graph = scenario_graph();
        let config = scenario_config()
            .with_trainer(TrainerConfig::default().n_epoch(3).seed(5))
            .verbose(false);

        let mut sequential = ParameterEstimator::new(&graph, &config).unwrap();
        sequential.get_model_for_each_non_root_node().unwrap();
        let mut parallel = ParameterEstimator::new(&graph, &config).unwrap();
        parallel.get_model_for_each_non_root_node_par().unwrap();

        let sequential = sequential.trained_networks();
        let parallel = parallel.trained_networks();
        assert_eq!(sequential.len(), parallel.len());
        for (node, trainer) in sequential {
            let other = &parallel[node];
            assert_eq!(trainer.train_loss(), other.train_loss());
            assert_eq!(trainer.test_loss(), other.test_loss());
        }
    }


    #[test]
    fn empty_graph_is_rejected() {
        let graph = BelGraph::new();
        let config = scenario_config();
        let err = ParameterEstimator::new(&graph, &config).err().unwrap();
        assert!(matches!(err, EstimationError::EmptyGraph));
        assert_eq!(err.to_string(), "Empty Graph or data not loaded.");
    }


    #[test]
    fn graph_without_data_is_rejected() {
        let mut graph = BelGraph::new();
        graph.add_node(ROOT, NodeInfo::new(true, "pathology"));
        let config = scenario_config();
        assert!(matches!(
            ParameterEstimator::new(&graph, &config),
            Err(EstimationError::EmptyGraph)
        ));
    }


    #[test]
    fn invalid_trainer_config_is_rejected() {
        let graph = scenario_graph();
        let config = scenario_config()
            .with_trainer(TrainerConfig::default().batch_size(0));
        assert!(matches!(
            ParameterEstimator::new(&graph, &config),
            Err(EstimationError::InvalidConfig(_))
        ));
    }


    #[test]
    fn dangling_node_data_is_reported() {
        let graph = DanglingGraph {
            data: vec![NodeData {
                node: "p(HGNC:GHOST)".into(),
                features: DataFrame::empty(),
                target: Series::new("p(HGNC:GHOST)", &[1.0]),
            }],
        };
        let config = scenario_config();

        let mut estimator = ParameterEstimator::new(&graph, &config).unwrap();
        assert!(matches!(
            estimator.get_distribution_for_roots_from_data(),
            Err(EstimationError::UnknownNode(_))
        ));
    }


    #[test]
    fn malformed_features_abort_training() {
        let mut graph = BelGraph::new();
        graph.add_node(CHILD, NodeInfo::new(false, "protein"));
        let features = df!(ROOT => &["1.0", "yes", "0.0"]).unwrap();
        graph.add_data(CHILD, features, Series::new(CHILD, &[2.0, 2.1, 0.0]))
            .unwrap();
        let config = scenario_config().verbose(false);

        let mut estimator = ParameterEstimator::new(&graph, &config).unwrap();
        assert!(matches!(
            estimator.get_model_for_each_non_root_node(),
            Err(EstimationError::NonNumeric(_))
        ));
        assert!(estimator.trained_networks().is_empty());
    }


    #[test]
    fn config_from_json_drives_the_estimation() {
        let config = Config::from_json_str(r#"{
            "node_label_distribution_info": {"pathology": "Bernoulli"},
            "trainer": {"n_epoch": 1, "seed": 1},
            "verbose": false
        }"#).unwrap();
        let graph = scenario_graph();

        let mut estimator = ParameterEstimator::new(&graph, &config).unwrap();
        estimator.estimate().unwrap();
        assert_eq!(estimator.root_distributions().len(), 1);
        assert_eq!(estimator.trained_networks().len(), 2);
    }
}
