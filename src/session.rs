use crate::algo::{Strategy, shortest_paths};
use crate::all_pairs::{CancelToken, all_pairs_cancellable};
use crate::error::{Error, Result};
use crate::generator::{AsTopologyGenerator, TopologyGenerator};
use crate::graph::{Graph, NodeId};
use crate::matrix::DistanceMatrix;
use crate::utils::Distance;
use crate::weights::assign_weights;
use log::info;
use rand::SeedableRng;
use rand::rngs::StdRng;

#[cfg(feature = "parallel")]
use crate::all_pairs::par_all_pairs_cancellable;

#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Fixed seed for reproducible graphs; `None` draws one from the OS.
    pub seed: Option<u64>,
    pub strategy: Strategy,
    /// Run all-pairs on the rayon pool (needs the `parallel` feature).
    pub parallel: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            seed: None,
            strategy: Strategy::default(),
            parallel: cfg!(feature = "parallel"),
        }
    }
}

/// Outcome of a route query. `distance` and `hops` are `None` when there is no path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub from: NodeId,
    pub to: NodeId,
    pub distance: Option<Distance>,
    pub hops: Option<Vec<NodeId>>,
}

/// Holds the current graph between interactive actions.
///
/// A graph is replaced only as a whole, by [`Session::generate`] or
/// [`Session::replace_graph`]; every other operation reads it.
pub struct Session<G: TopologyGenerator = AsTopologyGenerator> {
    generator: G,
    rng: StdRng,
    graph: Option<Graph>,
    config: SessionConfig,
}

impl Session {
    pub fn new(config: SessionConfig) -> Self {
        Session::with_generator(AsTopologyGenerator::default(), config)
    }
}

impl<G: TopologyGenerator> Session<G> {
    pub fn with_generator(generator: G, config: SessionConfig) -> Self {
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Session {
            generator,
            rng,
            graph: None,
            config,
        }
    }

    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Generates and weights a new topology, replacing the current graph.
    /// On error the previous graph is kept.
    pub fn generate(&mut self, node_count: usize) -> Result<&Graph> {
        if node_count == 0 {
            return Err(Error::InvalidNodeCount(node_count.to_string()));
        }

        let topology = self.generator.generate(node_count, &mut self.rng)?;
        let graph = assign_weights(&topology, &mut self.rng)?;
        if !graph.is_connected() {
            return Err(Error::InvariantViolation(format!(
                "generator produced a disconnected graph with {node_count} nodes"
            )));
        }

        info!(
            "generated graph: {} nodes, {} links",
            graph.node_count(),
            graph.edge_count()
        );
        let graph: &Graph = self.graph.insert(graph);
        Ok(graph)
    }

    pub fn replace_graph(&mut self, graph: Graph) {
        info!(
            "graph replaced: {} nodes, {} links",
            graph.node_count(),
            graph.edge_count()
        );
        self.graph = Some(graph);
    }

    pub fn graph(&self) -> Result<&Graph> {
        self.graph.as_ref().ok_or(Error::NoGraphYet)
    }

    pub fn has_graph(&self) -> bool {
        self.graph.is_some()
    }

    /// All-pairs shortest distances of the current graph.
    pub fn distance_matrix(&self) -> Result<DistanceMatrix> {
        self.distance_matrix_cancellable(&CancelToken::new())
    }

    /// Like [`Session::distance_matrix`], but gives up with [`Error::Cancelled`]
    /// once `token` is cancelled from another thread.
    pub fn distance_matrix_cancellable(&self, token: &CancelToken) -> Result<DistanceMatrix> {
        let graph = self.graph()?;
        let strategy = self.config.strategy;

        #[cfg(feature = "parallel")]
        let maps = if self.config.parallel {
            par_all_pairs_cancellable(graph, strategy, token)?
        } else {
            all_pairs_cancellable(graph, strategy, token)?
        };
        #[cfg(not(feature = "parallel"))]
        let maps = all_pairs_cancellable(graph, strategy, token)?;

        let order: Vec<NodeId> = graph.nodes().collect();
        let matrix = DistanceMatrix::assemble(&maps, &order)?;
        info!(
            "distance matrix built for {} nodes ({:?}, parallel: {})",
            matrix.size(),
            strategy,
            self.config.parallel
        );
        Ok(matrix)
    }

    pub fn route(&self, from: NodeId, to: NodeId) -> Result<Route> {
        let graph = self.graph()?;
        if !graph.contains(to) {
            return Err(Error::NodeNotFound(to));
        }

        let paths = shortest_paths(graph, from, self.config.strategy)?;
        Ok(Route {
            from,
            to,
            distance: paths.distance(to),
            hops: paths.path_to(to),
        })
    }
}
