use super::types::{Edge, Point};

#[inline]
pub fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
    (a - b).abs() <= eps
}

#[inline]
pub fn points_eq(p: Point, q: Point, eps: f64) -> bool {
    approx_eq(p.x, q.x, eps) && approx_eq(p.y, q.y, eps)
}

#[inline]
pub fn edges_eq(e: Edge, f: Edge, eps: f64) -> bool {
    points_eq(e.0, f.0, eps) && points_eq(e.1, f.1, eps)
}

/// Open intervals `(a0, a1)` and `(b0, b1)` share more than `eps` of length.
#[inline]
pub fn open_overlap(a0: f64, a1: f64, b0: f64, b1: f64, eps: f64) -> bool {
    a1.min(b1) - a0.max(b0) > eps
}
