//! Worklist-driven breadth-first exploration.

use std::collections::{HashMap, VecDeque};

use crate::contact::Signature;
use crate::error::EnumerateError;
use crate::geom::RectCfg;
use crate::moves::{applicable_moves, MoveKind};
use crate::rectangulation::Rectangulation;

use super::graph::{AdjacencyMatrix, EnumerateStats, FlipGraph};

/// Enumeration configuration.
#[derive(Clone, Copy, Debug, Default)]
pub struct EnumerateCfg {
    pub geom: RectCfg,
    /// Abort with `EnumerateError::StateLimit` once more states than this are found.
    pub max_states: Option<usize>,
}

/// Enumerates every rectangulation of `n` rectangles reachable from the canonical strips.
pub fn enumerate(n: usize, cfg: EnumerateCfg) -> Result<FlipGraph, EnumerateError> {
    let start = Rectangulation::canonical(n)?;
    explore(start, cfg)
}

/// Enumerates the flip-graph component containing `start`.
pub fn explore(start: Rectangulation, cfg: EnumerateCfg) -> Result<FlipGraph, EnumerateError> {
    start.validate(&cfg.geom)?;
    let n = start.len();
    let graph = Explorer::new(start, cfg).run()?;
    tracing::info!(
        n,
        states = graph.len(),
        edges = graph.edge_count(),
        flips = graph.count(MoveKind::Flip),
        t_flips = graph.count(MoveKind::TFlip),
        "enumeration complete"
    );
    Ok(graph)
}

/// Owns the result list, its signature index, the FIFO worklist and the matrix.
struct Explorer {
    cfg: EnumerateCfg,
    results: Vec<Rectangulation>,
    index: HashMap<Signature, usize>,
    worklist: VecDeque<usize>,
    adjacency: AdjacencyMatrix,
    stats: EnumerateStats,
}

impl Explorer {
    fn new(start: Rectangulation, cfg: EnumerateCfg) -> Self {
        let mut index = HashMap::new();
        index.insert(start.signature(&cfg.geom), 0);
        let mut adjacency = AdjacencyMatrix::new();
        adjacency.grow();
        Self {
            cfg,
            results: vec![start],
            index,
            worklist: VecDeque::from([0]),
            adjacency,
            stats: EnumerateStats::default(),
        }
    }

    fn run(mut self) -> Result<FlipGraph, EnumerateError> {
        while let Some(&cur) = self.worklist.front() {
            self.expand(cur)?;
            self.worklist.pop_front();
        }
        Ok(FlipGraph {
            states: self.results,
            adjacency: self.adjacency,
            stats: self.stats,
            index: self.index,
            cfg: self.cfg.geom,
        })
    }

    fn expand(&mut self, cur: usize) -> Result<(), EnumerateError> {
        let geom = self.cfg.geom;
        let moves = applicable_moves(&self.results[cur], &geom)?;
        for m in moves {
            self.stats.rewrites += 1;
            let sig = m.result.signature(&geom);
            let known = self.index.get(&sig).copied();
            match known {
                None => {
                    m.result.validate(&geom)?;
                    if let Some(limit) = self.cfg.max_states {
                        if self.results.len() >= limit {
                            return Err(EnumerateError::StateLimit { limit });
                        }
                    }
                    let idx = self.adjacency.grow();
                    debug_assert_eq!(idx, self.results.len());
                    self.adjacency.set(cur, idx, m.kind);
                    self.results.push(m.result);
                    self.index.insert(sig, idx);
                    self.worklist.push_back(idx);
                    self.stats.discovered += 1;
                    tracing::debug!(from = cur, to = idx, kind = %m.kind, i = m.i, j = m.j, "new");
                }
                Some(old) if old != cur => {
                    self.adjacency.set(cur, old, m.kind);
                    self.stats.revisits += 1;
                    tracing::debug!(from = cur, to = old, kind = %m.kind, "old");
                }
                Some(_) => {}
            }
        }
        self.stats.expanded += 1;
        Ok(())
    }
}
