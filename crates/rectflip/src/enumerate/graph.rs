//! Result containers of an enumeration run.

use std::collections::HashMap;

use crate::contact::Signature;
use crate::geom::RectCfg;
use crate::moves::MoveKind;
use crate::rectangulation::Rectangulation;

/// Symmetric matrix over discovery indices; a cell holds the move connecting
/// two states, or `None`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    rows: Vec<Vec<Option<MoveKind>>>,
}

impl AdjacencyMatrix {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Appends a node without edges and returns its index.
    pub fn grow(&mut self) -> usize {
        let n = self.rows.len();
        for row in &mut self.rows {
            row.push(None);
        }
        self.rows.push(vec![None; n + 1]);
        n
    }

    /// Sets both `(i, j)` and `(j, i)`; a later label replaces an earlier one.
    pub fn set(&mut self, i: usize, j: usize, kind: MoveKind) {
        debug_assert_ne!(i, j, "self-edges are never recorded");
        self.rows[i][j] = Some(kind);
        self.rows[j][i] = Some(kind);
    }

    #[inline]
    pub fn get(&self, i: usize, j: usize) -> Option<MoveKind> {
        self.rows.get(i).and_then(|row| row.get(j)).copied().flatten()
    }

    pub fn row(&self, i: usize) -> &[Option<MoveKind>] {
        &self.rows[i]
    }

    pub fn is_symmetric(&self) -> bool {
        let n = self.rows.len();
        (0..n).all(|i| (0..n).all(|j| self.rows[i][j] == self.rows[j][i]))
    }
}

/// Counters collected while exploring.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct EnumerateStats {
    /// States taken off the worklist and fully expanded.
    pub expanded: usize,
    /// Rewrites applied (pivots that produced a move).
    pub rewrites: usize,
    /// Rewrites that produced a previously unseen state.
    pub discovered: usize,
    /// Rewrites that led to an existing state other than the source.
    pub revisits: usize,
}

/// Discovered rectangulations (in discovery order) and the labeled edges between them.
#[derive(Clone, Debug)]
pub struct FlipGraph {
    pub(crate) states: Vec<Rectangulation>,
    pub(crate) adjacency: AdjacencyMatrix,
    pub(crate) stats: EnumerateStats,
    pub(crate) index: HashMap<Signature, usize>,
    pub(crate) cfg: RectCfg,
}

impl FlipGraph {
    #[inline]
    pub fn len(&self) -> usize {
        self.states.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.states.is_empty()
    }

    pub fn states(&self) -> &[Rectangulation] {
        &self.states
    }

    pub fn adjacency(&self) -> &AdjacencyMatrix {
        &self.adjacency
    }

    pub fn stats(&self) -> EnumerateStats {
        self.stats
    }

    #[inline]
    pub fn edge(&self, i: usize, j: usize) -> Option<MoveKind> {
        self.adjacency.get(i, j)
    }

    pub fn neighbors(&self, i: usize) -> impl Iterator<Item = (usize, MoveKind)> + '_ {
        self.adjacency
            .row(i)
            .iter()
            .enumerate()
            .filter_map(|(j, cell)| cell.map(|k| (j, k)))
    }

    /// Upper-triangle edges `(i, j, kind)` with `i < j`, row-major.
    pub fn edges(&self) -> Vec<(usize, usize, MoveKind)> {
        let n = self.len();
        let mut out = Vec::new();
        for i in 0..n {
            for j in i + 1..n {
                if let Some(k) = self.adjacency.get(i, j) {
                    out.push((i, j, k));
                }
            }
        }
        out
    }

    pub fn edge_count(&self) -> usize {
        self.edges().len()
    }

    pub fn count(&self, kind: MoveKind) -> usize {
        self.edges().iter().filter(|(_, _, k)| *k == kind).count()
    }

    /// Discovery index of the state equivalent to `r`, if any.
    pub fn index_of(&self, r: &Rectangulation) -> Option<usize> {
        self.index.get(&r.signature(&self.cfg)).copied()
    }
}
