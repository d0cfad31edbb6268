//! Graphviz DOT text for a flip graph: flips in red, T-flips in blue.

use std::fmt::Write;

use crate::moves::MoveKind;

use super::graph::FlipGraph;

fn color(kind: MoveKind) -> &'static str {
    match kind {
        MoveKind::Flip => "red",
        MoveKind::TFlip => "blue",
    }
}

/// Undirected DOT graph named `name`; nodes are discovery indices.
pub fn to_dot(graph: &FlipGraph, name: &str) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "graph \"{}\" {{", name.replace('"', "\\\""));
    let _ = writeln!(out, "    node [shape=box];");
    for i in 0..graph.len() {
        let _ = writeln!(out, "    {i};");
    }
    for (i, j, kind) in graph.edges() {
        let _ = writeln!(
            out,
            "    {i} -- {j} [color={}, label=\"{kind}\"];",
            color(kind)
        );
    }
    out.push_str("}\n");
    out
}
