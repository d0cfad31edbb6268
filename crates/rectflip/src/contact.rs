//! Contact analysis between rectangles and the combinatorial signature.
//!
//! - `common_edge`: corner-anchored contact between two rectangles (the eight
//!   aligned-corner configurations), returning the longer of the two facing
//!   sides.
//! - `Signature`: per label, the sorted neighbor labels on each side. Two
//!   rectangulations are equivalent iff their signatures are equal; absolute
//!   coordinates never enter the comparison.

use crate::geom::{approx_eq, open_overlap, points_eq, Edge, RectCfg, Rectangle, Side};
use crate::rectangulation::Rectangulation;

/// Shared edge of `a` and `b` when they meet at an aligned corner.
///
/// The first matching corner coincidence decides the case; if its containment
/// condition fails there is no common edge.
pub fn common_edge(a: &Rectangle, b: &Rectangle, cfg: &RectCfg) -> Option<Edge> {
    let eps = cfg.eps;
    let eq = |x: f64, y: f64| approx_eq(x, y, eps);
    let pt = |p, q| points_eq(p, q, eps);

    // b right of a, bottoms aligned, a at least as tall.
    if pt(a.bottom_right, b.bottom_left) {
        return (a.top_right.y >= b.top_left.y - eps && eq(a.top_right.x, b.top_left.x))
            .then(|| a.right_edge());
    }
    // a above b, right sides aligned, a at least as wide.
    if pt(a.bottom_right, b.top_right) {
        return (a.bottom_left.x <= b.top_left.x + eps && eq(a.bottom_left.y, b.top_left.y))
            .then(|| a.bottom_edge());
    }
    // b left of a, bottoms aligned, b at least as tall.
    if pt(a.bottom_left, b.bottom_right) {
        return (a.top_left.y <= b.top_right.y + eps && eq(a.top_left.x, b.top_right.x))
            .then(|| b.right_edge());
    }
    // a above b, left sides aligned, b at least as wide.
    if pt(a.bottom_left, b.top_left) {
        return (a.bottom_right.x <= b.top_right.x + eps && eq(a.bottom_right.y, b.top_right.y))
            .then(|| b.top_edge());
    }
    // b right of a, tops aligned, b at least as tall.
    if pt(a.top_right, b.top_left) {
        return (a.bottom_right.y >= b.bottom_left.y - eps
            && eq(a.bottom_right.x, b.bottom_left.x))
            .then(|| b.left_edge());
    }
    // a below b, right sides aligned, b at least as wide.
    if pt(a.top_right, b.bottom_right) {
        return (a.top_left.x >= b.bottom_left.x - eps && eq(a.top_left.y, b.bottom_left.y))
            .then(|| b.bottom_edge());
    }
    // b left of a, tops aligned, a at least as tall.
    if pt(a.top_left, b.top_right) {
        return (a.bottom_left.y <= b.bottom_right.y + eps
            && eq(a.bottom_left.x, b.bottom_right.x))
            .then(|| a.left_edge());
    }
    // a below b, left sides aligned, a at least as wide.
    if pt(a.top_left, b.bottom_left) {
        return (a.top_right.x >= b.bottom_right.x - eps && eq(a.top_right.y, b.bottom_right.y))
            .then(|| a.top_edge());
    }
    None
}

/// Side of `a` along which `b` touches it with positive overlap.
pub fn touching_side(a: &Rectangle, b: &Rectangle, cfg: &RectCfg) -> Option<Side> {
    let eps = cfg.eps;
    let x_overlap = || open_overlap(a.left(), a.right(), b.left(), b.right(), eps);
    let y_overlap = || open_overlap(a.bottom(), a.top(), b.bottom(), b.top(), eps);
    if approx_eq(b.bottom(), a.top(), eps) && x_overlap() {
        Some(Side::Top)
    } else if approx_eq(b.right(), a.left(), eps) && y_overlap() {
        Some(Side::Left)
    } else if approx_eq(b.top(), a.bottom(), eps) && x_overlap() {
        Some(Side::Bottom)
    } else if approx_eq(b.left(), a.right(), eps) && y_overlap() {
        Some(Side::Right)
    } else {
        None
    }
}

/// Neighbor labels on each side of one rectangle, sorted ascending.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub struct Neighbors {
    pub top: Vec<usize>,
    pub left: Vec<usize>,
    pub bottom: Vec<usize>,
    pub right: Vec<usize>,
}

impl Neighbors {
    pub fn side(&self, side: Side) -> &[usize] {
        match side {
            Side::Top => &self.top,
            Side::Left => &self.left,
            Side::Bottom => &self.bottom,
            Side::Right => &self.right,
        }
    }

    fn side_mut(&mut self, side: Side) -> &mut Vec<usize> {
        match side {
            Side::Top => &mut self.top,
            Side::Left => &mut self.left,
            Side::Bottom => &mut self.bottom,
            Side::Right => &mut self.right,
        }
    }
}

/// Neighbors of the rectangle at position `i`.
pub fn neighbors(r: &Rectangulation, i: usize, cfg: &RectCfg) -> Neighbors {
    let rects = r.rects();
    let mut out = Neighbors::default();
    for (j, other) in rects.iter().enumerate() {
        if j == i {
            continue;
        }
        if let Some(side) = touching_side(&rects[i], other, cfg) {
            out.side_mut(side).push(other.label);
        }
    }
    for side in Side::ALL {
        out.side_mut(side).sort_unstable();
    }
    out
}

/// Materialized combinatorial signature, keyed by label.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Signature {
    entries: Vec<(usize, Neighbors)>,
}

impl Signature {
    pub fn get(&self, label: usize) -> Option<&Neighbors> {
        self.entries
            .binary_search_by_key(&label, |(l, _)| *l)
            .ok()
            .map(|k| &self.entries[k].1)
    }

    pub fn iter(&self) -> impl Iterator<Item = (usize, &Neighbors)> {
        self.entries.iter().map(|(l, n)| (*l, n))
    }

    /// Number of unordered touching pairs.
    pub fn contact_count(&self) -> usize {
        let total: usize = self
            .iter()
            .flat_map(|(_, n)| Side::ALL.map(|side| n.side(side).len()))
            .sum();
        total / 2
    }
}

/// Builds all neighbor lists in one pass over unordered pairs; a contact on
/// side `s` of `a` is recorded on side `s.opposite()` of `b`.
pub fn signature(r: &Rectangulation, cfg: &RectCfg) -> Signature {
    let rects = r.rects();
    let mut entries: Vec<(usize, Neighbors)> = rects
        .iter()
        .map(|q| (q.label, Neighbors::default()))
        .collect();
    for i in 0..rects.len() {
        for j in i + 1..rects.len() {
            if let Some(side) = touching_side(&rects[i], &rects[j], cfg) {
                entries[i].1.side_mut(side).push(rects[j].label);
                entries[j].1.side_mut(side.opposite()).push(rects[i].label);
            }
        }
    }
    for (_, n) in entries.iter_mut() {
        for side in Side::ALL {
            n.side_mut(side).sort_unstable();
        }
    }
    entries.sort_unstable_by_key(|(l, _)| *l);
    Signature { entries }
}

/// True iff every label has the same neighbor lists on all four sides in both.
///
/// Short-circuits on the first mismatching rectangle.
pub fn equivalent(r1: &Rectangulation, r2: &Rectangulation, cfg: &RectCfg) -> bool {
    if r1.len() != r2.len() {
        return false;
    }
    r1.rects().iter().enumerate().all(|(i, rect)| {
        r2.position(rect.label)
            .is_some_and(|k| neighbors(r1, i, cfg) == neighbors(r2, k, cfg))
    })
}
