//! Breadth-first enumeration of the flip graph.
//!
//! Purpose
//! - Starting from the canonical strips, apply every applicable rewrite to
//!   every discovered rectangulation, deduplicate by combinatorial
//!   equivalence, and record labeled edges between states.
//!
//! Layout
//! - `graph.rs`: `AdjacencyMatrix`, `FlipGraph`, `EnumerateStats`.
//! - `driver.rs`: `EnumerateCfg`, `enumerate`, `explore`.
//! - `dot.rs`: Graphviz text export of a finished graph.

mod dot;
mod driver;
mod graph;

pub use dot::to_dot;
pub use driver::{enumerate, explore, EnumerateCfg};
pub use graph::{AdjacencyMatrix, EnumerateStats, FlipGraph};

#[cfg(test)]
mod tests;
