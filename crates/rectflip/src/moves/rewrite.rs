//! Flip and T-flip as functional updates of a rectangle pair.

use crate::error::SplitError;
use crate::geom::{approx_eq, edges_eq, Axis, Edge, RectCfg, Rectangle};
use crate::rectangulation::Rectangulation;
use crate::split::find_spot;

#[inline]
fn ordered(i: usize, j: usize, i_first: bool) -> (usize, usize) {
    if i_first {
        (i, j)
    } else {
        (j, i)
    }
}

/// Flip across a full shared edge.
///
/// The pair's combined box is cut perpendicular to the old edge at the split
/// coordinate. Across a vertical edge the left rectangle becomes the top part
/// and the right one the bottom part; across a horizontal edge the upper
/// rectangle becomes the left part and the lower one the right part. Applying
/// the flip again to the same pair restores the original order.
pub fn flip(
    r: &Rectangulation,
    i: usize,
    j: usize,
    axis: Axis,
    i_first: bool,
    cfg: &RectCfg,
) -> Result<Rectangulation, SplitError> {
    let (f, s) = ordered(i, j, i_first);
    let first = &r.rects()[f];
    let second = &r.rects()[s];
    let low = first.bottom_left;
    let high = second.top_right;
    match axis {
        Axis::Vertical => {
            let middle = 0.5 * (first.bottom() + first.top());
            let spot = find_spot(middle, low, high, axis, cfg)?;
            tracing::trace!(left = first.label, right = second.label, spot, "flip");
            let top = Rectangle::from_bounds(low.x, spot, high.x, high.y, first.label);
            let bottom = Rectangle::from_bounds(low.x, low.y, high.x, spot, second.label);
            Ok(r.with_pair(f, top, s, bottom))
        }
        Axis::Horizontal => {
            let middle = 0.5 * (first.left() + first.right());
            let spot = find_spot(middle, low, high, axis, cfg)?;
            tracing::trace!(lower = first.label, upper = second.label, spot, "flip");
            let right = Rectangle::from_bounds(spot, low.y, high.x, high.y, first.label);
            let left = Rectangle::from_bounds(low.x, low.y, spot, high.y, second.label);
            Ok(r.with_pair(f, right, s, left))
        }
    }
}

/// T-flip at a corner-anchored T-junction.
///
/// `edge` is the longer facing side; its owner is the wide rectangle. The
/// narrow rectangle grows across the wide one, the wide one keeps only the
/// part beyond the narrow rectangle's free end. No new coordinate is created.
pub fn t_flip(
    r: &Rectangulation,
    i: usize,
    j: usize,
    edge: Edge,
    axis: Axis,
    i_first: bool,
    cfg: &RectCfg,
) -> Rectangulation {
    let eps = cfg.eps;
    let (f, s) = ordered(i, j, i_first);
    let first = &r.rects()[f];
    let wide_is_first = match axis {
        Axis::Vertical => edges_eq(first.right_edge(), edge, eps),
        Axis::Horizontal => edges_eq(first.top_edge(), edge, eps),
    };
    let (w, n) = if wide_is_first { (f, s) } else { (s, f) };
    let wide = &r.rects()[w];
    let narrow = &r.rects()[n];
    tracing::trace!(wide = wide.label, narrow = narrow.label, ?axis, "t-flip");
    let (wide_new, narrow_new) = match axis {
        Axis::Vertical => {
            let grown = Rectangle::from_bounds(
                wide.left().min(narrow.left()),
                narrow.bottom(),
                wide.right().max(narrow.right()),
                narrow.top(),
                narrow.label,
            );
            let shrunk = if approx_eq(narrow.bottom(), wide.bottom(), eps) {
                Rectangle::from_bounds(wide.left(), narrow.top(), wide.right(), wide.top(), wide.label)
            } else {
                Rectangle::from_bounds(
                    wide.left(),
                    wide.bottom(),
                    wide.right(),
                    narrow.bottom(),
                    wide.label,
                )
            };
            (shrunk, grown)
        }
        Axis::Horizontal => {
            let grown = Rectangle::from_bounds(
                narrow.left(),
                wide.bottom().min(narrow.bottom()),
                narrow.right(),
                wide.top().max(narrow.top()),
                narrow.label,
            );
            let shrunk = if approx_eq(narrow.left(), wide.left(), eps) {
                Rectangle::from_bounds(
                    narrow.right(),
                    wide.bottom(),
                    wide.right(),
                    wide.top(),
                    wide.label,
                )
            } else {
                Rectangle::from_bounds(wide.left(), wide.bottom(), narrow.left(), wide.top(), wide.label)
            };
            (shrunk, grown)
        }
    };
    r.with_pair(w, wide_new, n, narrow_new)
}
