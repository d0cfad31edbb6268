//! Seeded random walks on the flip graph.
//!
//! Purpose
//! - Sample rectangulations for sizes where exhaustive enumeration is out of
//!   reach, by applying a uniformly chosen applicable rewrite at every step.
//! - Every sample carries a replay token (the per-walk seed) so the exact walk
//!   can be regenerated from the parameters alone.

use rand::rngs::StdRng;
use rand::{Rng, RngCore, SeedableRng};

use crate::error::{EnumerateError, RectError};
use crate::geom::RectCfg;
use crate::moves::{applicable_moves, MoveKind};
use crate::rectangulation::Rectangulation;

/// Walk parameters: rectangle count and number of rewrites per walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkParams {
    pub n: usize,
    pub steps: usize,
}

impl WalkParams {
    fn validate(&self) -> Result<(), RectError> {
        if self.n == 0 {
            return Err(RectError::InvalidSize { n: self.n });
        }
        Ok(())
    }
}

/// Replay token: the seed of a single walk.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkReplay {
    pub seed: u64,
}

/// One applied rewrite, by label of the two rectangles involved.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct WalkStep {
    pub labels: (usize, usize),
    pub kind: MoveKind,
}

/// Final rectangulation and the rewrites that led there from the canonical strips.
#[derive(Clone, Debug)]
pub struct Walk {
    pub end: Rectangulation,
    pub path: Vec<WalkStep>,
}

#[derive(Clone, Debug)]
pub struct WalkSample {
    pub walk: Walk,
    pub params: WalkParams,
    pub replay: WalkReplay,
}

/// Stream of reproducible random walks.
pub struct FlipWalker {
    params: WalkParams,
    cfg: RectCfg,
    master_rng: StdRng,
}

impl FlipWalker {
    pub fn new(params: WalkParams, seed: u64, cfg: RectCfg) -> Result<Self, RectError> {
        params.validate()?;
        Ok(Self {
            params,
            cfg,
            master_rng: StdRng::seed_from_u64(seed),
        })
    }

    pub fn params(&self) -> &WalkParams {
        &self.params
    }

    pub fn generate_next(&mut self) -> Result<WalkSample, EnumerateError> {
        let seed = self.master_rng.next_u64();
        let walk = Self::walk_single(&self.params, seed, &self.cfg)?;
        Ok(WalkSample {
            walk,
            params: self.params,
            replay: WalkReplay { seed },
        })
    }

    pub fn regenerate(&self, replay: &WalkReplay) -> Result<Walk, EnumerateError> {
        Self::walk_single(&self.params, replay.seed, &self.cfg)
    }

    /// Walks `params.steps` rewrites from the canonical strips. Stops early only
    /// if a state has no applicable rewrite (a single rectangle).
    pub fn walk_single(
        params: &WalkParams,
        seed: u64,
        cfg: &RectCfg,
    ) -> Result<Walk, EnumerateError> {
        params.validate()?;
        let mut rng = StdRng::seed_from_u64(seed);
        let mut cur = Rectangulation::canonical(params.n)?;
        let mut path = Vec::with_capacity(params.steps);
        for _ in 0..params.steps {
            let mut moves = applicable_moves(&cur, cfg)?;
            if moves.is_empty() {
                break;
            }
            let m = moves.swap_remove(rng.gen_range(0..moves.len()));
            let labels = (cur.rects()[m.i].label, cur.rects()[m.j].label);
            path.push(WalkStep {
                labels,
                kind: m.kind,
            });
            cur = m.result;
        }
        tracing::debug!(n = params.n, steps = path.len(), seed, "walk");
        Ok(Walk { end: cur, path })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn walks_replay_exactly() {
        let params = WalkParams { n: 5, steps: 25 };
        let mut gen = FlipWalker::new(params, 2025, RectCfg::default()).unwrap();
        let a = gen.generate_next().unwrap();
        let b = gen.generate_next().unwrap();
        assert_ne!(a.replay, b.replay);
        let again = gen.regenerate(&a.replay).unwrap();
        assert_eq!(again.end, a.walk.end);
        assert_eq!(again.path, a.walk.path);
        assert_eq!(a.walk.path.len(), 25);
        assert!(a.walk.end.validate(&RectCfg::default()).is_ok());
    }

    #[test]
    fn single_rectangle_cannot_move() {
        let params = WalkParams { n: 1, steps: 10 };
        let w = FlipWalker::walk_single(&params, 7, &RectCfg::default()).unwrap();
        assert!(w.path.is_empty());
        assert_eq!(w.end, Rectangulation::canonical(1).unwrap());
    }

    #[test]
    fn zero_rectangles_rejected() {
        let params = WalkParams { n: 0, steps: 1 };
        assert!(FlipWalker::new(params, 1, RectCfg::default()).is_err());
    }

    #[test]
    fn two_rectangles_alternate() {
        let params = WalkParams { n: 2, steps: 3 };
        let w = FlipWalker::walk_single(&params, 11, &RectCfg::default()).unwrap();
        assert!(w
            .path
            .iter()
            .all(|s| s.labels == (1, 2) && s.kind == MoveKind::Flip));
        // Odd number of flips ends on the stacked layout.
        assert!(w.end.rects().iter().all(|r| r.width() == 100.0));
    }
}
