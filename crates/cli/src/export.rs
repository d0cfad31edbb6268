//! Serializable rows for a finished flip graph or walk.

use std::collections::BTreeMap;

use rectflip::api::{bounds_by_label, FlipGraph, MoveKind, Rectangulation, Walk};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct RectRow {
    pub label: usize,
    pub x0: f64,
    pub y0: f64,
    pub x1: f64,
    pub y1: f64,
}

#[derive(Debug, Serialize)]
pub struct EdgeRow {
    pub from: usize,
    pub to: usize,
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub struct GraphDoc {
    pub n: usize,
    /// Edge count per move name, every kind present even when zero.
    pub counts: BTreeMap<&'static str, usize>,
    pub states: Vec<Vec<RectRow>>,
    pub edges: Vec<EdgeRow>,
}

#[derive(Debug, Serialize)]
pub struct StepRow {
    pub labels: (usize, usize),
    pub kind: String,
}

#[derive(Debug, Serialize)]
pub struct WalkDoc {
    pub seed: u64,
    pub end: Vec<RectRow>,
    pub path: Vec<StepRow>,
}

pub fn rect_rows(r: &Rectangulation) -> Vec<RectRow> {
    bounds_by_label(r)
        .into_iter()
        .map(|(label, x0, y0, x1, y1)| RectRow {
            label,
            x0,
            y0,
            x1,
            y1,
        })
        .collect()
}

pub fn graph_doc(n: usize, g: &FlipGraph) -> GraphDoc {
    GraphDoc {
        n,
        counts: MoveKind::ALL.map(|k| (k.name(), g.count(k))).into_iter().collect(),
        states: g.states().iter().map(rect_rows).collect(),
        edges: g
            .edges()
            .into_iter()
            .map(|(from, to, kind)| EdgeRow {
                from,
                to,
                kind: kind.to_string(),
            })
            .collect(),
    }
}

pub fn walk_doc(seed: u64, w: &Walk) -> WalkDoc {
    WalkDoc {
        seed,
        end: rect_rows(&w.end),
        path: w
            .path
            .iter()
            .map(|s| StepRow {
                labels: s.labels,
                kind: s.kind.to_string(),
            })
            .collect(),
    }
}
