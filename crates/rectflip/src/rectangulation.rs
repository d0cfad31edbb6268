//! Rectangulations of the `100 × 100` reference square.
//!
//! A `Rectangulation` is an ordered list of labeled rectangles tiling the
//! square. It is built once by `canonical` and afterwards only by rewrites,
//! which return a new value and leave the source untouched.

use crate::contact::{self, Signature};
use crate::error::RectError;
use crate::geom::{approx_eq, open_overlap, RectCfg, Rectangle, SQUARE_SIDE};

#[derive(Clone, Debug, PartialEq)]
pub struct Rectangulation {
    rects: Vec<Rectangle>,
}

impl Rectangulation {
    /// `n` vertical strips of equal width, labeled `1..=n` from left to right.
    pub fn canonical(n: usize) -> Result<Self, RectError> {
        if n == 0 {
            return Err(RectError::InvalidSize { n });
        }
        let width = SQUARE_SIDE / n as f64;
        let rects = (0..n)
            .map(|i| {
                let x0 = width * i as f64;
                // Pin the last strip to the square so rounding cannot leave a sliver.
                let x1 = if i + 1 == n {
                    SQUARE_SIDE
                } else {
                    width * (i + 1) as f64
                };
                Rectangle::from_bounds(x0, 0.0, x1, SQUARE_SIDE, i + 1)
            })
            .collect();
        Ok(Self { rects })
    }

    /// Wraps externally built rectangles after checking the dissection invariant.
    pub fn from_rects(rects: Vec<Rectangle>, cfg: &RectCfg) -> Result<Self, RectError> {
        let r = Self { rects };
        r.validate(cfg)?;
        Ok(r)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.rects.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rects.is_empty()
    }

    #[inline]
    pub fn rects(&self) -> &[Rectangle] {
        &self.rects
    }

    #[inline]
    pub fn get(&self, i: usize) -> Option<&Rectangle> {
        self.rects.get(i)
    }

    pub fn position(&self, label: usize) -> Option<usize> {
        self.rects.iter().position(|r| r.label == label)
    }

    pub fn by_label(&self, label: usize) -> Option<&Rectangle> {
        self.rects.iter().find(|r| r.label == label)
    }

    /// Checks every rectangle, unique labels, full area and pairwise disjoint interiors.
    pub fn validate(&self, cfg: &RectCfg) -> Result<(), RectError> {
        if self.rects.is_empty() {
            return Err(RectError::InvalidSize { n: 0 });
        }
        for (k, r) in self.rects.iter().enumerate() {
            r.validate(cfg)?;
            if self.rects[..k].iter().any(|q| q.label == r.label) {
                return Err(RectError::malformed(r.label, "duplicate label"));
            }
        }
        let area: f64 = self.rects.iter().map(Rectangle::area).sum();
        let full = SQUARE_SIDE * SQUARE_SIDE;
        if !approx_eq(area, full, cfg.eps * full) {
            return Err(RectError::malformed(
                self.rects[0].label,
                format!("total area {area} differs from {full}"),
            ));
        }
        for (k, a) in self.rects.iter().enumerate() {
            for b in &self.rects[k + 1..] {
                let x = open_overlap(a.left(), a.right(), b.left(), b.right(), cfg.eps);
                let y = open_overlap(a.bottom(), a.top(), b.bottom(), b.top(), cfg.eps);
                if x && y {
                    return Err(RectError::malformed(
                        a.label,
                        format!("interior overlaps rectangle {}", b.label),
                    ));
                }
            }
        }
        Ok(())
    }

    pub fn signature(&self, cfg: &RectCfg) -> Signature {
        contact::signature(self, cfg)
    }

    /// Combinatorial equivalence; see `contact::equivalent`.
    pub fn equivalent(&self, other: &Rectangulation, cfg: &RectCfg) -> bool {
        contact::equivalent(self, other, cfg)
    }

    /// Copy with the rectangles at positions `i` and `j` replaced.
    pub(crate) fn with_pair(&self, i: usize, ri: Rectangle, j: usize, rj: Rectangle) -> Self {
        debug_assert_ne!(i, j);
        let mut rects = self.rects.clone();
        rects[i] = ri;
        rects[j] = rj;
        Self { rects }
    }
}
