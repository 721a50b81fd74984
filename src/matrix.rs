use crate::error::{Error, Result};
use crate::graph::NodeId;
use crate::utils::{Distance, DistanceMap};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Dense N×N shortest-path distances, rows are sources and columns destinations,
/// both in `order`. `None` cells have no path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "MatrixCells"))]
pub struct DistanceMatrix {
    order: Vec<NodeId>,
    cells: Vec<Option<Distance>>,
}

#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct MatrixCells {
    order: Vec<NodeId>,
    cells: Vec<Option<Distance>>,
}

#[cfg(feature = "serde")]
impl TryFrom<MatrixCells> for DistanceMatrix {
    type Error = Error;

    fn try_from(raw: MatrixCells) -> Result<Self> {
        let n = raw.order.len();
        if n.checked_mul(n) != Some(raw.cells.len()) {
            return Err(Error::InvariantViolation(format!(
                "{} cells for a {n}x{n} matrix",
                raw.cells.len()
            )));
        }
        Ok(DistanceMatrix {
            order: raw.order,
            cells: raw.cells,
        })
    }
}

impl DistanceMatrix {
    /// Builds the matrix so that `matrix[i][j]` is `maps[i]`'s entry for `order[j]`.
    ///
    /// Every map must have an entry for every node in `order` and there must be
    /// exactly one map per node; anything else is an engine bug and is reported
    /// as [`Error::InvariantViolation`].
    pub fn assemble(maps: &[DistanceMap], order: &[NodeId]) -> Result<Self> {
        if maps.len() != order.len() {
            return Err(Error::InvariantViolation(format!(
                "{} distance maps for {} nodes",
                maps.len(),
                order.len()
            )));
        }

        let mut cells = Vec::with_capacity(order.len() * order.len());
        for (row, map) in maps.iter().enumerate() {
            for &node in order {
                let entry = map.entry(node).ok_or_else(|| {
                    Error::InvariantViolation(format!(
                        "distance map {row} (source {}) has no entry for node {node}",
                        map.source()
                    ))
                })?;
                cells.push(entry);
            }
        }

        Ok(DistanceMatrix {
            order: order.to_vec(),
            cells,
        })
    }

    pub fn size(&self) -> usize {
        self.order.len()
    }

    pub fn order(&self) -> &[NodeId] {
        &self.order
    }

    /// Distance from the `i`-th to the `j`-th node; `None` if unreachable or out of bounds.
    pub fn get(&self, i: usize, j: usize) -> Option<Distance> {
        let n = self.size();
        if i >= n || j >= n {
            return None;
        }
        self.cells.get(i * n + j).copied().flatten()
    }

    pub fn row(&self, i: usize) -> &[Option<Distance>] {
        let n = self.size();
        &self.cells[i * n..(i + 1) * n]
    }

    pub fn rows(&self) -> Vec<Vec<Option<Distance>>> {
        (0..self.size()).map(|i| self.row(i).to_vec()).collect()
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.size();
        (0..n).all(|i| (i + 1..n).all(|j| self.cells[i * n + j] == self.cells[j * n + i]))
    }

    /// Largest finite distance, the weighted diameter when the graph is connected.
    pub fn diameter(&self) -> Option<Distance> {
        self.cells.iter().flatten().copied().max()
    }

    /// Ordered `(i, j)` index pairs with no path between them.
    pub fn unreachable_pairs(&self) -> Vec<(usize, usize)> {
        let n = self.size();
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, cell)| cell.is_none())
            .map(|(k, _)| (k / n, k % n))
            .collect()
    }

    #[cfg(feature = "serde_json")]
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
