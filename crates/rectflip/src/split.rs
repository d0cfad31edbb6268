//! Split-point search for the edge introduced by a flip.
//!
//! The new edge spans the combined box of the two flipped rectangles and must
//! cross the reference diagonal strictly: its two end points lie on opposite
//! sides of the diagonal. Starting from the middle of the old shared edge, the
//! search bisects the box extent: a candidate entirely below the diagonal
//! becomes the new lower bound, one entirely above becomes the new upper bound.

use crate::error::SplitError;
use crate::geom::{approx_eq, diagonal, Axis, Point, RectCfg, SQUARE_SIDE};

/// Side of the reference diagonal on which `p` lies: `1` below, `-1` above,
/// `0` within `cfg.diag_band` of it.
pub fn diagonal_side(p: Point, cfg: &RectCfg) -> i8 {
    let (start, end) = diagonal();
    let cross = (end - start).perp(&(end - p));
    if cross.abs() < cfg.diag_band * SQUARE_SIDE {
        0
    } else if cross > 0.0 {
        1
    } else {
        -1
    }
}

/// Coordinate of the new edge for a flip across a shared edge of orientation `shared`.
///
/// `low`/`high` are the bottom-left and top-right corners of the combined box.
/// For a vertical shared edge the result is a `y` coordinate (new horizontal
/// edge from `low.x` to `high.x`); for a horizontal one it is an `x` coordinate.
pub fn find_spot(
    middle: f64,
    low: Point,
    high: Point,
    shared: Axis,
    cfg: &RectCfg,
) -> Result<f64, SplitError> {
    let (mut lo, mut hi) = match shared {
        Axis::Vertical => (low.y, high.y),
        Axis::Horizontal => (low.x, high.x),
    };
    if approx_eq(lo, hi, cfg.eps) {
        return Err(SplitError::Degenerate { low: lo, high: hi });
    }
    let probes = |spot: f64| -> (Point, Point) {
        match shared {
            Axis::Vertical => (Point::new(high.x, spot), Point::new(low.x, spot)),
            Axis::Horizontal => (Point::new(spot, high.y), Point::new(spot, low.y)),
        }
    };
    let mut spot = middle;
    for _ in 0..=cfg.max_bisections {
        let (far, near) = probes(spot);
        let (da, db) = (diagonal_side(far, cfg), diagonal_side(near, cfg));
        if da * db < 0 {
            return Ok(spot);
        }
        // The far probe decides; it only defers to the near one when on the diagonal.
        let toward = if da != 0 { da } else { db };
        match toward {
            1 => {
                lo = spot;
                spot = 0.5 * (hi + spot);
            }
            -1 => {
                hi = spot;
                spot = 0.5 * (lo + spot);
            }
            _ => return Err(SplitError::Collinear { spot }),
        }
    }
    Err(SplitError::NoConvergence {
        steps: cfg.max_bisections,
    })
}
