//! Contact classification and rewrite dispatch.

use crate::contact::common_edge;
use crate::error::SplitError;
use crate::geom::{edges_eq, points_eq, Axis, Edge, RectCfg, Rectangle};
use crate::rectangulation::Rectangulation;

use super::rewrite::{flip, t_flip};
use super::types::{Move, MoveKind, Rewrite};

/// Decides which rewrite, if any, applies to `a` and `b` sharing `edge`.
///
/// Sides of `a` are tested first. When `edge` is one of `a`'s sides, the pair
/// flips if it is also `b`'s opposite side, T-flips if the corner on the
/// anchored end coincides, and otherwise has no rewrite. Only when `edge` is
/// none of `a`'s sides are `b`'s sides tested.
pub fn classify(a: &Rectangle, b: &Rectangle, edge: Edge, cfg: &RectCfg) -> Option<Rewrite> {
    use Axis::{Horizontal as H, Vertical as V};
    let eps = cfg.eps;
    let same = |e: Edge| edges_eq(edge, e, eps);
    let pt = |p, q| points_eq(p, q, eps);
    let to_flip = |axis, i_first| Some(Rewrite::Flip { axis, i_first });
    let to_tflip = |axis, i_first| Some(Rewrite::TFlip { axis, i_first });

    if same(a.top_edge()) {
        if same(b.bottom_edge()) {
            to_flip(H, true)
        } else if pt(a.top_left, b.bottom_left) {
            to_tflip(H, true)
        } else {
            None
        }
    } else if same(a.left_edge()) {
        if same(b.right_edge()) {
            to_flip(V, false)
        } else if pt(a.top_left, b.top_right) {
            to_tflip(V, false)
        } else {
            None
        }
    } else if same(a.bottom_edge()) {
        if same(b.top_edge()) {
            to_flip(H, false)
        } else if pt(a.bottom_right, b.top_right) {
            to_tflip(H, false)
        } else {
            None
        }
    } else if same(a.right_edge()) {
        if same(b.left_edge()) {
            to_flip(V, true)
        } else if pt(a.bottom_right, b.bottom_left) {
            to_tflip(V, true)
        } else {
            None
        }
    } else if same(b.top_edge()) && pt(a.bottom_left, b.top_left) {
        to_tflip(H, false)
    } else if same(b.left_edge()) && pt(a.top_right, b.top_left) {
        to_tflip(V, true)
    } else if same(b.bottom_edge()) && pt(a.top_right, b.bottom_right) {
        to_tflip(H, true)
    } else if same(b.right_edge()) && pt(a.bottom_left, b.bottom_right) {
        to_tflip(V, false)
    } else {
        None
    }
}

/// Applies the rewrite for the pair at positions `i`, `j` sharing `edge`.
///
/// `Ok(None)` means the contact admits no rewrite; this is a normal outcome.
pub fn pivot(
    r: &Rectangulation,
    i: usize,
    j: usize,
    edge: Edge,
    cfg: &RectCfg,
) -> Result<Option<(Rectangulation, MoveKind)>, SplitError> {
    let rects = r.rects();
    let Some(rewrite) = classify(&rects[i], &rects[j], edge, cfg) else {
        return Ok(None);
    };
    let next = match rewrite {
        Rewrite::Flip { axis, i_first } => flip(r, i, j, axis, i_first, cfg)?,
        Rewrite::TFlip { axis, i_first } => t_flip(r, i, j, edge, axis, i_first, cfg),
    };
    Ok(Some((next, rewrite.kind())))
}

/// Every rewrite applicable to `r`, over pairs `i < j` in position order.
pub fn applicable_moves(r: &Rectangulation, cfg: &RectCfg) -> Result<Vec<Move>, SplitError> {
    let rects = r.rects();
    let mut out = Vec::new();
    for i in 0..rects.len() {
        for j in i + 1..rects.len() {
            let Some(edge) = common_edge(&rects[i], &rects[j], cfg) else {
                continue;
            };
            if let Some((result, kind)) = pivot(r, i, j, edge, cfg)? {
                out.push(Move { i, j, kind, result });
            }
        }
    }
    Ok(out)
}
