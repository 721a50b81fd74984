use crate::error::Result;
use crate::graph::{Graph, Weight};
use petgraph::visit::{EdgeRef, IntoEdgeReferences, IntoNodeIdentifiers, NodeIndexable};

/// Builds a [`Graph`] from any petgraph graph, so topologies from other
/// generators can go through the same shortest-path pipeline.
///
/// Node ids follow `NodeIndexable::to_index`. Each edge reference becomes one
/// undirected link, so a directed input holding both `u -> v` and `v -> u`
/// is rejected as a duplicate, as are self-loops and weights outside 1..=99.
pub fn from_petgraph<G>(graph: G) -> Result<Graph>
where
    G: IntoEdgeReferences + IntoNodeIdentifiers + NodeIndexable,
    G::EdgeWeight: Into<Weight> + Copy,
{
    let mut ours = Graph::new(graph.node_bound());

    for edge in graph.edge_references() {
        let from = graph.to_index(edge.source());
        let to = graph.to_index(edge.target());
        ours.add_edge(from, to, (*edge.weight()).into())?;
    }

    Ok(ours)
}
