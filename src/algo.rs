use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::utils::{Distance, DistanceMap, VertexDistance};
use log::trace;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

/// How the next node to settle is selected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Strategy {
    /// Linear scan over unsettled nodes, O(N²) per source. Ties go to the lowest id.
    #[default]
    Scan,
    /// Binary heap, O((N + E) log N) per source.
    Heap,
}

/// Result of one single-source run: final distances plus the shortest-path tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShortestPaths {
    pub source: NodeId,
    pub distances: Vec<Option<Distance>>,
    pub predecessors: Vec<Option<NodeId>>,
}

impl ShortestPaths {
    fn start(graph: &Graph, source: NodeId) -> Result<Self> {
        if !graph.contains(source) {
            return Err(Error::NodeNotFound(source));
        }
        let n = graph.node_count();
        let mut distances = vec![None; n];
        distances[source] = Some(0);

        Ok(ShortestPaths {
            source,
            distances,
            predecessors: vec![None; n],
        })
    }

    /// Relaxes every link out of `node`, which must already have a distance.
    /// `skip` tells which neighbours are settled and can no longer improve.
    fn relax_from<F>(&mut self, graph: &Graph, node: NodeId, mut on_improve: F, skip: &[bool])
    where
        F: FnMut(NodeId, Distance),
    {
        let Some(base) = self.distances[node] else {
            return;
        };

        for edge in graph.neighbors(node) {
            if skip[edge.to] {
                continue;
            }
            let candidate = base + Distance::from(edge.weight);
            if self.distances[edge.to].is_none_or(|current| candidate < current) {
                self.distances[edge.to] = Some(candidate);
                self.predecessors[edge.to] = Some(node);
                on_improve(edge.to, candidate);
            }
        }
    }

    pub fn distance(&self, goal: NodeId) -> Option<Distance> {
        self.distances.get(goal).copied().flatten()
    }

    /// Nodes from the source to `goal` inclusive, or `None` when `goal` is unreachable.
    pub fn path_to(&self, goal: NodeId) -> Option<Vec<NodeId>> {
        self.distance(goal)?;

        let mut path = vec![goal];
        let mut current = goal;
        while current != self.source {
            current = self.predecessors[current]?;
            path.push(current);
        }
        path.reverse();
        Some(path)
    }

    /// A [`DistanceMap`] with one entry per node of the graph.
    pub fn to_distance_map(&self) -> DistanceMap {
        DistanceMap::from_entries(self.source, self.distances.iter().copied().enumerate())
    }
}

/// Dijkstra from `source` over the whole graph.
pub fn shortest_paths(graph: &Graph, source: NodeId, strategy: Strategy) -> Result<ShortestPaths> {
    match strategy {
        Strategy::Scan => scan_dijkstra(graph, source),
        Strategy::Heap => heap_dijkstra(graph, source),
    }
}

/// Distances from `source` to every node, using the default strategy.
pub fn dijkstra(graph: &Graph, source: NodeId) -> Result<DistanceMap> {
    shortest_paths(graph, source, Strategy::default()).map(|paths| paths.to_distance_map())
}

fn scan_dijkstra(graph: &Graph, source: NodeId) -> Result<ShortestPaths> {
    let mut paths = ShortestPaths::start(graph, source)?;
    let n = graph.node_count();
    let mut settled = vec![false; n];

    for _ in 0..n {
        let mut selected: Option<(NodeId, Distance)> = None;
        for node in graph.nodes() {
            if settled[node] {
                continue;
            }
            if let Some(d) = paths.distances[node]
                && selected.is_none_or(|(_, best)| d < best)
            {
                selected = Some((node, d));
            }
        }

        // Whatever is still unsettled has no finite distance.
        let Some((node, distance)) = selected else {
            break;
        };

        trace!("settle {node} at {distance}");
        paths.relax_from(graph, node, |_, _| {}, &settled);
        settled[node] = true;
    }

    Ok(paths)
}

fn heap_dijkstra(graph: &Graph, source: NodeId) -> Result<ShortestPaths> {
    let mut paths = ShortestPaths::start(graph, source)?;
    let mut settled = vec![false; graph.node_count()];
    let mut heap = BinaryHeap::new();
    heap.push(Reverse(VertexDistance::new(source, 0)));

    while let Some(Reverse(VertexDistance { vertex, distance })) = heap.pop() {
        if settled[vertex] {
            continue;
        }
        settled[vertex] = true;

        trace!("settle {vertex} at {distance}");
        paths.relax_from(
            graph,
            vertex,
            |to, candidate| heap.push(Reverse(VertexDistance::new(to, candidate))),
            &settled,
        );
    }

    Ok(paths)
}
