pub mod algo;
pub mod all_pairs;
pub mod error;
pub mod generator;
pub mod graph;
pub mod matrix;
pub mod menu;
#[cfg(feature = "petgraph")]
pub mod petgraph_utils;
pub mod render;
pub mod session;
pub mod shell;
pub mod utils;
pub mod weights;

pub use algo::{ShortestPaths, Strategy, dijkstra, shortest_paths};
pub use error::{Error, Result};
pub use graph::{Edge, Graph, NodeId, Weight};
pub use matrix::DistanceMatrix;
pub use session::{Session, SessionConfig};
pub use utils::{Distance, DistanceMap};
