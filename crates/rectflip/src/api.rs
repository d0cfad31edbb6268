//! Curated surface for the command-line collaborator.
//!
//! Re-exports what a caller needs to run an enumeration or a walk and turn
//! the result into rows, without reaching into the module tree.

pub use crate::contact::{common_edge, equivalent, Signature};
pub use crate::enumerate::{enumerate, explore, to_dot, EnumerateCfg, EnumerateStats, FlipGraph};
pub use crate::error::{EnumerateError, RectError, SplitError};
pub use crate::geom::{RectCfg, Rectangle};
pub use crate::moves::MoveKind;
pub use crate::rectangulation::Rectangulation;
pub use crate::walk::{FlipWalker, Walk, WalkParams, WalkReplay, WalkSample};

/// Enumerate with default tolerances and no state limit.
pub fn enumerate_default(n: usize) -> Result<FlipGraph, EnumerateError> {
    enumerate(n, EnumerateCfg::default())
}

/// `(label, x0, y0, x1, y1)` per rectangle, sorted by label.
pub fn bounds_by_label(r: &Rectangulation) -> Vec<(usize, f64, f64, f64, f64)> {
    let mut rows: Vec<_> = r
        .rects()
        .iter()
        .map(|q| (q.label, q.left(), q.bottom(), q.right(), q.top()))
        .collect();
    rows.sort_by_key(|row| row.0);
    rows
}
