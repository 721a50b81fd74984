//! Random AS-like topologies.
//!
//! The shipped generator builds a small tiered hierarchy in the spirit of
//! internet AS graphs: a fully meshed tier-1 core, transit nodes buying
//! transit from the core or each other (and peering among themselves), and
//! stub customers hanging off the transit layer. Providers are picked with
//! probability proportional to their current degree, which gives the usual
//! few-hubs-many-leaves shape.

use crate::error::{Error, Result};
use crate::graph::NodeId;
use log::debug;
use rand::Rng;
use std::collections::HashSet;

/// Unweighted output of a generator: `nodes` ids `0..nodes` and the links between them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Topology {
    pub nodes: usize,
    pub links: Vec<(NodeId, NodeId)>,
}

pub trait TopologyGenerator {
    /// Produces a connected topology with exactly `node_count` nodes.
    fn generate<R: Rng>(&self, node_count: usize, rng: &mut R) -> Result<Topology>;
}

#[derive(Debug, Clone)]
pub struct AsTopologyGenerator {
    pub tier1_fraction: f64,
    pub max_tier1: usize,
    pub transit_fraction: f64,
    pub peering_probability: f64,
    pub multihoming_probability: f64,
}

impl Default for AsTopologyGenerator {
    fn default() -> Self {
        AsTopologyGenerator {
            tier1_fraction: 0.1,
            max_tier1: 5,
            transit_fraction: 0.15,
            peering_probability: 0.1,
            multihoming_probability: 0.5,
        }
    }
}

impl AsTopologyGenerator {
    /// Fractions and probabilities must be finite and within `[0, 1]`.
    pub fn validate(&self) -> Result<()> {
        let unit = [
            ("tier1_fraction", self.tier1_fraction),
            ("transit_fraction", self.transit_fraction),
            ("peering_probability", self.peering_probability),
            ("multihoming_probability", self.multihoming_probability),
        ];
        for (name, value) in unit {
            if !(0.0..=1.0).contains(&value) {
                return Err(Error::InvalidGeneratorConfig {
                    name,
                    value: value.to_string(),
                    reason: "expected a number in [0, 1]",
                });
            }
        }
        if self.max_tier1 == 0 {
            return Err(Error::InvalidGeneratorConfig {
                name: "max_tier1",
                value: self.max_tier1.to_string(),
                reason: "the tier-1 core needs at least one node",
            });
        }
        Ok(())
    }

    /// Sizes of the tier-1 and transit layers for `n` nodes; customers take the rest.
    fn layer_sizes(&self, n: usize) -> (usize, usize) {
        let tier1 = (n as f64 * self.tier1_fraction).ceil() as usize;
        let tier1 = tier1.clamp(1, self.max_tier1).min(n);
        let transit = ((n as f64 * self.transit_fraction).round() as usize).min(n - tier1);
        (tier1, transit)
    }

    fn provider_count<R: Rng>(&self, rng: &mut R) -> usize {
        if rng.random_bool(self.multihoming_probability) {
            2
        } else {
            1
        }
    }
}

impl TopologyGenerator for AsTopologyGenerator {
    fn generate<R: Rng>(&self, node_count: usize, rng: &mut R) -> Result<Topology> {
        if node_count == 0 {
            return Err(Error::InvalidNodeCount(node_count.to_string()));
        }
        self.validate()?;

        let (tier1, transit) = self.layer_sizes(node_count);
        let mut builder = LinkBuilder::new(node_count);

        for u in 0..tier1 {
            for v in (u + 1)..tier1 {
                builder.link(u, v);
            }
        }

        let transit_end = tier1 + transit;
        for node in tier1..transit_end {
            // Anything earlier is a valid provider: tier-1 or an older transit node.
            let providers = self.provider_count(rng);
            builder.attach(node, 0..node, providers, rng);
        }

        for u in tier1..transit_end {
            for v in (u + 1)..transit_end {
                if rng.random_bool(self.peering_probability) {
                    builder.link(u, v);
                }
            }
        }

        for node in transit_end..node_count {
            let providers = self.provider_count(rng);
            builder.attach(node, 0..transit_end, providers, rng);
        }

        debug!(
            "generated AS topology: {} tier-1, {} transit, {} customers, {} links",
            tier1,
            transit,
            node_count - transit_end,
            builder.links.len()
        );

        Ok(Topology {
            nodes: node_count,
            links: builder.links,
        })
    }
}

struct LinkBuilder {
    links: Vec<(NodeId, NodeId)>,
    seen: HashSet<(NodeId, NodeId)>,
    degrees: Vec<usize>,
}

impl LinkBuilder {
    fn new(nodes: usize) -> Self {
        LinkBuilder {
            links: Vec::new(),
            seen: HashSet::new(),
            degrees: vec![0; nodes],
        }
    }

    /// Returns false if the pair was already linked.
    fn link(&mut self, u: NodeId, v: NodeId) -> bool {
        let key = (u.min(v), u.max(v));
        if u == v || !self.seen.insert(key) {
            return false;
        }
        self.links.push(key);
        self.degrees[u] += 1;
        self.degrees[v] += 1;
        true
    }

    /// Links `node` to up to `count` distinct providers drawn from `candidates`.
    /// At least one link is always made when `candidates` is non-empty.
    fn attach<R: Rng>(
        &mut self,
        node: NodeId,
        candidates: std::ops::Range<NodeId>,
        count: usize,
        rng: &mut R,
    ) {
        let count = count.min(candidates.len());
        let mut chosen = Vec::with_capacity(count);

        while chosen.len() < count {
            let provider = self.pick_preferential(candidates.clone(), &chosen, rng);
            chosen.push(provider);
            self.link(node, provider);
        }
    }

    /// Degree-proportional pick (degree + 1, so fresh nodes still get a chance).
    fn pick_preferential<R: Rng>(
        &self,
        candidates: std::ops::Range<NodeId>,
        exclude: &[NodeId],
        rng: &mut R,
    ) -> NodeId {
        let weight = |v: NodeId| {
            if exclude.contains(&v) {
                0
            } else {
                self.degrees[v] + 1
            }
        };
        let total: usize = candidates.clone().map(weight).sum();

        let mut ticket = rng.random_range(0..total);
        for v in candidates.clone() {
            let w = weight(v);
            if ticket < w {
                return v;
            }
            ticket -= w;
        }
        candidates.start
    }
}
