use crate::error::{Error, Result};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::ops::{Range, RangeInclusive};

pub type NodeId = usize;
pub type Weight = u32;

/// Allowed link weights.
pub const WEIGHT_RANGE: RangeInclusive<Weight> = 1..=99;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Edge {
    pub to: NodeId,
    pub weight: Weight,
}

/// Simple undirected graph with weighted links, stored as adjacency lists.
///
/// Every link is kept in both endpoints' lists with the same weight. Nodes are
/// numbered `0..node_count` in the order the generator produced them.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "EdgeList", into = "EdgeList"))]
pub struct Graph {
    adjacency: Vec<Vec<Edge>>,
    edge_count: usize,
}

/// Serialized form of a [`Graph`]: node count plus each link once.
/// Loading goes back through [`Graph::add_edge`], so stored graphs get the same checks.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct EdgeList {
    nodes: usize,
    edges: Vec<(NodeId, NodeId, Weight)>,
}

#[cfg(feature = "serde")]
impl From<Graph> for EdgeList {
    fn from(graph: Graph) -> Self {
        EdgeList {
            nodes: graph.node_count(),
            edges: graph.edges().collect(),
        }
    }
}

#[cfg(feature = "serde")]
impl TryFrom<EdgeList> for Graph {
    type Error = Error;

    fn try_from(list: EdgeList) -> Result<Self> {
        let mut graph = Graph::new(list.nodes);
        for (from, to, weight) in list.edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }
}

impl Graph {
    pub fn new(nodes: usize) -> Self {
        Graph {
            adjacency: vec![Vec::new(); nodes],
            edge_count: 0,
        }
    }

    /// Adds the undirected link `{from, to}`.
    ///
    /// Rejects unknown endpoints, self-loops, a second link between the same
    /// pair and weights outside [`WEIGHT_RANGE`].
    pub fn add_edge(&mut self, from: NodeId, to: NodeId, weight: Weight) -> Result<()> {
        let invalid = |reason: String| Error::InvalidEdge { from, to, reason };

        if !self.contains(from) || !self.contains(to) {
            return Err(invalid(format!(
                "endpoint outside 0..{}",
                self.node_count()
            )));
        }
        if from == to {
            return Err(invalid("self-loop".to_string()));
        }
        if !WEIGHT_RANGE.contains(&weight) {
            return Err(invalid(format!(
                "weight {weight} outside {}..={}",
                WEIGHT_RANGE.start(),
                WEIGHT_RANGE.end()
            )));
        }
        if self.weight(from, to).is_some() {
            return Err(invalid("duplicate link".to_string()));
        }

        self.adjacency[from].push(Edge { to, weight });
        self.adjacency[to].push(Edge { to: from, weight });
        self.edge_count += 1;
        Ok(())
    }

    pub fn node_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn contains(&self, node: NodeId) -> bool {
        node < self.adjacency.len()
    }

    /// Nodes in generation order.
    pub fn nodes(&self) -> Range<NodeId> {
        0..self.adjacency.len()
    }

    /// Each undirected link once, as `(u, v, weight)` with `u < v`.
    pub fn edges(&self) -> impl Iterator<Item = (NodeId, NodeId, Weight)> + '_ {
        self.adjacency.iter().enumerate().flat_map(|(from, adj)| {
            adj.iter()
                .filter(move |edge| from < edge.to)
                .map(move |edge| (from, edge.to, edge.weight))
        })
    }

    /// Panics if `node` is not in the graph; check with [`Graph::contains`] first.
    pub fn neighbors(&self, node: NodeId) -> &[Edge] {
        &self.adjacency[node]
    }

    /// Weight of the link between `from` and `to`, or `None` when they are not adjacent.
    pub fn weight(&self, from: NodeId, to: NodeId) -> Option<Weight> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|edge| edge.to == to)
            .map(|edge| edge.weight)
    }

    pub fn degree(&self, node: NodeId) -> usize {
        self.adjacency.get(node).map_or(0, Vec::len)
    }

    pub fn degrees_sorted(&self) -> Vec<usize> {
        let mut degrees: Vec<usize> = self.adjacency.iter().map(|adj| adj.len()).collect();
        degrees.sort_unstable();
        degrees
    }

    /// Hop counts from `start`; unreachable nodes stay `None`.
    pub fn bfs_hops(&self, start: NodeId) -> Vec<Option<usize>> {
        let mut hops = vec![None; self.node_count()];
        if !self.contains(start) {
            return hops;
        }

        let mut queue = VecDeque::new();
        hops[start] = Some(0);
        queue.push_back(start);

        while let Some(node) = queue.pop_front() {
            let current = hops[node].unwrap_or_default();
            for edge in &self.adjacency[node] {
                if hops[edge.to].is_none() {
                    hops[edge.to] = Some(current + 1);
                    queue.push_back(edge.to);
                }
            }
        }

        hops
    }

    /// An empty graph counts as connected.
    pub fn is_connected(&self) -> bool {
        self.node_count() == 0 || self.bfs_hops(0).iter().all(Option::is_some)
    }

    #[cfg(feature = "petgraph")]
    pub fn to_petgraph(&self) -> petgraph::graph::UnGraph<NodeId, Weight> {
        let mut pg_graph = petgraph::graph::UnGraph::new_undirected();
        let nodes: Vec<_> = self.nodes().map(|i| pg_graph.add_node(i)).collect();

        for (from, to, weight) in self.edges() {
            pg_graph.add_edge(nodes[from], nodes[to], weight);
        }
        pg_graph
    }
}
