use crate::error::Result;
use crate::generator::Topology;
use crate::graph::{Graph, WEIGHT_RANGE};
use log::debug;
use rand::Rng;

/// Turns a generated topology into a weighted [`Graph`].
///
/// Each link gets an independent weight drawn uniformly from [`WEIGHT_RANGE`].
/// This runs exactly once per topology; graphs are never re-weighted.
pub fn assign_weights<R: Rng>(topology: &Topology, rng: &mut R) -> Result<Graph> {
    let mut graph = Graph::new(topology.nodes);

    for &(from, to) in &topology.links {
        let weight = rng.random_range(WEIGHT_RANGE);
        graph.add_edge(from, to, weight)?;
    }

    debug!(
        "weighted {} links across {} nodes",
        graph.edge_count(),
        graph.node_count()
    );
    Ok(graph)
}
