//! Basic geometric types and tolerances.
//!
//! - `RectCfg`: centralizes the comparison epsilon, the diagonal dead band and
//!   the bisection budget.
//! - `Rectangle`: four corners plus a stable integer label.

use nalgebra::Vector2;

use super::util::approx_eq;
use crate::error::RectError;

/// A point of the reference frame `[0, 100] × [0, 100]`.
pub type Point = Vector2<f64>;

/// A segment given by its two end points (lower/left end first).
pub type Edge = (Point, Point);

/// Side length of the reference square.
pub const SQUARE_SIDE: f64 = 100.0;

/// Reference diagonal from `(0, 100)` to `(100, 0)`; new flip edges must cross it.
#[inline]
pub fn diagonal() -> (Point, Point) {
    (Vector2::new(0.0, SQUARE_SIDE), Vector2::new(SQUARE_SIDE, 0.0))
}

/// Numeric configuration (tolerances).
#[derive(Clone, Copy, Debug)]
pub struct RectCfg {
    /// Tolerance for every coordinate comparison.
    pub eps: f64,
    /// Probes closer than this (per axis) to the diagonal count as lying on it.
    pub diag_band: f64,
    /// Upper bound on split-point bisection steps.
    pub max_bisections: usize,
}

impl Default for RectCfg {
    fn default() -> Self {
        Self {
            eps: 1e-9,
            diag_band: 1e-2,
            max_bisections: 128,
        }
    }
}

/// Orientation of a segment.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// One of the four sides of a rectangle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Side {
    Top,
    Left,
    Bottom,
    Right,
}

impl Side {
    pub const ALL: [Side; 4] = [Side::Top, Side::Left, Side::Bottom, Side::Right];

    #[inline]
    pub fn opposite(self) -> Side {
        match self {
            Side::Top => Side::Bottom,
            Side::Left => Side::Right,
            Side::Bottom => Side::Top,
            Side::Right => Side::Left,
        }
    }
}

/// Axis-aligned rectangle with a label that identifies it for the lifetime of
/// a rectangulation.
#[derive(Clone, Debug, PartialEq)]
pub struct Rectangle {
    pub bottom_left: Point,
    pub bottom_right: Point,
    pub top_left: Point,
    pub top_right: Point,
    pub label: usize,
}

impl Rectangle {
    #[inline]
    pub fn new(
        bottom_left: Point,
        bottom_right: Point,
        top_left: Point,
        top_right: Point,
        label: usize,
    ) -> Self {
        Self {
            bottom_left,
            bottom_right,
            top_left,
            top_right,
            label,
        }
    }

    /// Rectangle `[x0, x1] × [y0, y1]`.
    #[inline]
    pub fn from_bounds(x0: f64, y0: f64, x1: f64, y1: f64, label: usize) -> Self {
        Self {
            bottom_left: Vector2::new(x0, y0),
            bottom_right: Vector2::new(x1, y0),
            top_left: Vector2::new(x0, y1),
            top_right: Vector2::new(x1, y1),
            label,
        }
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.bottom_left.x
    }
    #[inline]
    pub fn right(&self) -> f64 {
        self.bottom_right.x
    }
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.bottom_left.y
    }
    #[inline]
    pub fn top(&self) -> f64 {
        self.top_left.y
    }
    #[inline]
    pub fn width(&self) -> f64 {
        self.right() - self.left()
    }
    #[inline]
    pub fn height(&self) -> f64 {
        self.top() - self.bottom()
    }
    #[inline]
    pub fn area(&self) -> f64 {
        self.width() * self.height()
    }

    #[inline]
    pub fn top_edge(&self) -> Edge {
        (self.top_left, self.top_right)
    }
    #[inline]
    pub fn bottom_edge(&self) -> Edge {
        (self.bottom_left, self.bottom_right)
    }
    #[inline]
    pub fn left_edge(&self) -> Edge {
        (self.bottom_left, self.top_left)
    }
    #[inline]
    pub fn right_edge(&self) -> Edge {
        (self.bottom_right, self.top_right)
    }

    pub fn edge(&self, side: Side) -> Edge {
        match side {
            Side::Top => self.top_edge(),
            Side::Left => self.left_edge(),
            Side::Bottom => self.bottom_edge(),
            Side::Right => self.right_edge(),
        }
    }

    /// Checks the corner invariants: axis-aligned corners and positive area.
    pub fn validate(&self, cfg: &RectCfg) -> Result<(), RectError> {
        let eps = cfg.eps;
        let aligned = approx_eq(self.bottom_left.y, self.bottom_right.y, eps)
            && approx_eq(self.top_left.y, self.top_right.y, eps)
            && approx_eq(self.bottom_left.x, self.top_left.x, eps)
            && approx_eq(self.bottom_right.x, self.top_right.x, eps);
        if !aligned {
            return Err(RectError::malformed(self.label, "corners are not axis-aligned"));
        }
        if self.width() <= eps || self.height() <= eps {
            return Err(RectError::malformed(self.label, "non-positive extent"));
        }
        let inside = |v: f64| v >= -eps && v <= SQUARE_SIDE + eps;
        let corners = [
            self.bottom_left,
            self.bottom_right,
            self.top_left,
            self.top_right,
        ];
        if !corners.iter().all(|c| inside(c.x) && inside(c.y)) {
            return Err(RectError::malformed(
                self.label,
                "corner outside the reference square",
            ));
        }
        Ok(())
    }
}
