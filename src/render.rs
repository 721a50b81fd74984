//! Text views of a topology, a distance matrix and a single route.

use crate::error::{Error, Result};
use crate::graph::Graph;
use crate::matrix::DistanceMatrix;
use crate::session::Route;
use std::io::Write;

const UNREACHABLE: &str = "-";

/// Lists every node with its neighbours and link weights.
pub fn render_topology<W: Write>(graph: Option<&Graph>, out: &mut W) -> Result<()> {
    let graph = graph.ok_or(Error::NoGraphYet)?;

    writeln!(
        out,
        "AS topology: {} nodes, {} links",
        graph.node_count(),
        graph.edge_count()
    )?;
    for node in graph.nodes() {
        let neighbours: Vec<String> = graph
            .neighbors(node)
            .iter()
            .map(|edge| format!("{} (w={})", edge.to, edge.weight))
            .collect();
        if neighbours.is_empty() {
            writeln!(out, "  {node:>3} -> (isolated)")?;
        } else {
            writeln!(out, "  {node:>3} -> {}", neighbours.join(", "))?;
        }
    }
    Ok(())
}

/// Graphviz DOT of the topology with weights as edge labels.
pub fn topology_dot(graph: &Graph) -> String {
    let mut dot = String::from("graph as_topology {\n");
    for node in graph.nodes() {
        dot.push_str(&format!("  {node};\n"));
    }
    for (from, to, weight) in graph.edges() {
        dot.push_str(&format!("  {from} -- {to} [label=\"{weight}\"];\n"));
    }
    dot.push_str("}\n");
    dot
}

/// Sources down the side, destinations across the top, `-` where there is no path.
pub fn render_matrix<W: Write>(matrix: &DistanceMatrix, out: &mut W) -> Result<()> {
    let label = |d: Option<u64>| d.map_or_else(|| UNREACHABLE.to_string(), |d| d.to_string());

    let width = matrix
        .rows()
        .iter()
        .flatten()
        .map(|&d| label(d).len())
        .chain(matrix.order().iter().map(|n| n.to_string().len()))
        .chain(std::iter::once("src\\dst".len()))
        .max()
        .unwrap_or(1);

    write!(out, "{:>width$}", "src\\dst")?;
    for node in matrix.order() {
        write!(out, " {node:>width$}")?;
    }
    writeln!(out)?;

    for (i, node) in matrix.order().iter().enumerate() {
        write!(out, "{node:>width$}")?;
        for &cell in matrix.row(i) {
            write!(out, " {:>width$}", label(cell))?;
        }
        writeln!(out)?;
    }

    let unreachable = matrix.unreachable_pairs().len();
    match matrix.diameter() {
        Some(diameter) => write!(out, "diameter: {diameter}")?,
        None => write!(out, "diameter: n/a")?,
    }
    if unreachable > 0 {
        write!(out, ", unreachable pairs: {unreachable}")?;
    }
    writeln!(out)?;
    Ok(())
}

pub fn render_route<W: Write>(route: &Route, out: &mut W) -> Result<()> {
    match (&route.hops, route.distance) {
        (Some(hops), Some(distance)) => {
            let hops: Vec<String> = hops.iter().map(ToString::to_string).collect();
            writeln!(
                out,
                "Shortest path {} -> {}: {} (distance {distance})",
                route.from,
                route.to,
                hops.join(" -> ")
            )?;
        }
        _ => writeln!(out, "No path from {} to {}", route.from, route.to)?,
    }
    Ok(())
}
