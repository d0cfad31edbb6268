//! Move labels and rewrite descriptors.

use std::fmt;

use crate::geom::Axis;
use crate::rectangulation::Rectangulation;

/// Kind of rewrite labelling an edge of the flip graph.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum MoveKind {
    Flip,
    TFlip,
}

impl MoveKind {
    pub const ALL: [MoveKind; 2] = [MoveKind::Flip, MoveKind::TFlip];

    pub fn name(self) -> &'static str {
        match self {
            MoveKind::Flip => "flip",
            MoveKind::TFlip => "T-flip",
        }
    }
}

impl fmt::Display for MoveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A classified contact, ready to apply.
///
/// `axis` is the orientation of the shared edge. `i_first` tells whether the
/// first rectangle of the pair is the lower (horizontal edge) or left
/// (vertical edge) one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Rewrite {
    Flip { axis: Axis, i_first: bool },
    TFlip { axis: Axis, i_first: bool },
}

impl Rewrite {
    #[inline]
    pub fn kind(self) -> MoveKind {
        match self {
            Rewrite::Flip { .. } => MoveKind::Flip,
            Rewrite::TFlip { .. } => MoveKind::TFlip,
        }
    }
}

/// One applied rewrite: the positions of the pair, its kind and the result.
#[derive(Clone, Debug)]
pub struct Move {
    pub i: usize,
    pub j: usize,
    pub kind: MoveKind,
    pub result: Rectangulation,
}
