use crate::algo::{Strategy, shortest_paths};
use crate::error::{Error, Result};
use crate::graph::{Graph, NodeId};
use crate::utils::DistanceMap;
use log::{debug, warn};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Shared flag for aborting a running all-pairs computation from another thread.
#[derive(Debug, Clone, Default)]
pub struct CancelToken {
    cancelled: Arc<AtomicBool>,
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::Relaxed)
    }
}

/// One [`DistanceMap`] per node, index-aligned with `graph.nodes()`.
pub fn all_pairs(graph: &Graph, strategy: Strategy) -> Result<Vec<DistanceMap>> {
    graph
        .nodes()
        .map(|source| run_source(graph, source, strategy))
        .collect()
}

/// Same as [`all_pairs`], but runs the sources on the rayon pool.
#[cfg(feature = "parallel")]
pub fn par_all_pairs(graph: &Graph, strategy: Strategy) -> Result<Vec<DistanceMap>> {
    graph
        .nodes()
        .into_par_iter()
        .map(|source| run_source(graph, source, strategy))
        .collect()
}

/// Sequential all-pairs that checks `token` before every source.
pub fn all_pairs_cancellable(
    graph: &Graph,
    strategy: Strategy,
    token: &CancelToken,
) -> Result<Vec<DistanceMap>> {
    seq_cancellable(graph, strategy, token, &|_: NodeId| {})
}

/// Parallel all-pairs; every rayon task checks `token` before running its source.
#[cfg(feature = "parallel")]
pub fn par_all_pairs_cancellable(
    graph: &Graph,
    strategy: Strategy,
    token: &CancelToken,
) -> Result<Vec<DistanceMap>> {
    par_cancellable(graph, strategy, token, &|_: NodeId| {})
}

fn seq_cancellable<F: Fn(NodeId) + Sync>(
    graph: &Graph,
    strategy: Strategy,
    token: &CancelToken,
    on_done: &F,
) -> Result<Vec<DistanceMap>> {
    let maps = graph
        .nodes()
        .map(|source| checked_source(graph, source, strategy, token, on_done))
        .collect();
    log_cancel(graph, maps)
}

#[cfg(feature = "parallel")]
fn par_cancellable<F: Fn(NodeId) + Sync>(
    graph: &Graph,
    strategy: Strategy,
    token: &CancelToken,
    on_done: &F,
) -> Result<Vec<DistanceMap>> {
    let maps = graph
        .nodes()
        .into_par_iter()
        .map(|source| checked_source(graph, source, strategy, token, on_done))
        .collect();
    log_cancel(graph, maps)
}

fn checked_source<F: Fn(NodeId) + Sync>(
    graph: &Graph,
    source: NodeId,
    strategy: Strategy,
    token: &CancelToken,
    on_done: &F,
) -> Result<DistanceMap> {
    if token.is_cancelled() {
        return Err(Error::Cancelled);
    }
    let map = run_source(graph, source, strategy)?;
    on_done(source);
    Ok(map)
}

fn log_cancel(graph: &Graph, maps: Result<Vec<DistanceMap>>) -> Result<Vec<DistanceMap>> {
    if let Err(Error::Cancelled) = &maps {
        warn!("all-pairs over {} nodes cancelled", graph.node_count());
    }
    maps
}

fn run_source(graph: &Graph, source: NodeId, strategy: Strategy) -> Result<DistanceMap> {
    let paths = shortest_paths(graph, source, strategy)?;
    let map = paths.to_distance_map();
    debug!(
        "source {source}: {} of {} nodes reachable",
        map.reachable_count(),
        map.len()
    );
    Ok(map)
}
