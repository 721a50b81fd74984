use crate::graph::NodeId;
use std::cmp::Ordering;

#[cfg(not(feature = "hashbrown"))]
use std::collections::HashMap;

#[cfg(feature = "hashbrown")]
use hashbrown::HashMap;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Total weight of a path. Weights are at most 99, so `u64` never overflows in practice.
pub type Distance = u64;

/// Heap entry for the priority-queue strategy.
///
/// Ordered by distance, then by vertex id, so `Reverse<VertexDistance>` pops
/// the closest vertex first and breaks ties towards the lower id.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VertexDistance {
    pub vertex: NodeId,
    pub distance: Distance,
}

impl VertexDistance {
    pub fn new(vertex: NodeId, distance: Distance) -> Self {
        VertexDistance { vertex, distance }
    }
}

impl Ord for VertexDistance {
    fn cmp(&self, other: &Self) -> Ordering {
        self.distance
            .cmp(&other.distance)
            .then_with(|| self.vertex.cmp(&other.vertex))
    }
}

impl PartialOrd for VertexDistance {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Distances from one source to every node of a graph.
///
/// An entry of `None` means the node is unreachable from the source. A node
/// with no entry at all is not part of the graph this map was computed on.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DistanceMap {
    source: NodeId,
    distances: HashMap<NodeId, Option<Distance>>,
}

impl DistanceMap {
    pub fn new(source: NodeId) -> Self {
        DistanceMap {
            source,
            distances: HashMap::new(),
        }
    }

    pub fn from_entries<I>(source: NodeId, entries: I) -> Self
    where
        I: IntoIterator<Item = (NodeId, Option<Distance>)>,
    {
        DistanceMap {
            source,
            distances: entries.into_iter().collect(),
        }
    }

    pub fn source(&self) -> NodeId {
        self.source
    }

    pub fn insert(&mut self, node: NodeId, distance: Option<Distance>) {
        self.distances.insert(node, distance);
    }

    /// `None` if `node` has no entry; `Some(None)` if it is unreachable.
    pub fn entry(&self, node: NodeId) -> Option<Option<Distance>> {
        self.distances.get(&node).copied()
    }

    /// Distance to `node`, or `None` when there is no path (or no entry).
    pub fn distance(&self, node: NodeId) -> Option<Distance> {
        self.entry(node).flatten()
    }

    pub fn is_reachable(&self, node: NodeId) -> bool {
        self.distance(node).is_some()
    }

    pub fn len(&self) -> usize {
        self.distances.len()
    }

    pub fn is_empty(&self) -> bool {
        self.distances.is_empty()
    }

    pub fn reachable_count(&self) -> usize {
        self.distances.values().filter(|d| d.is_some()).count()
    }

    /// Entries sorted by node id.
    pub fn sorted(&self) -> Vec<(NodeId, Option<Distance>)> {
        let mut entries: Vec<_> = self.distances.iter().map(|(&n, &d)| (n, d)).collect();
        entries.sort_unstable_by_key(|&(n, _)| n);
        entries
    }
}
