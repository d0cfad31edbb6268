//! Enumeration of rectangulations of a square and their flip graph.
//!
//! Starting from `n` vertical strips, the crate applies the two local rewrites
//! (flip and T-flip) to every touching pair of every discovered
//! rectangulation, merges combinatorially equivalent results, and records the
//! labeled edges between distinct states.
//!
//! Modules, leaves first
//! - `geom`: points, rectangles, tolerances.
//! - `rectangulation`: the tiled square and its invariants.
//! - `contact`: `common_edge` and the combinatorial signature.
//! - `split`: split-point search for the edge a flip introduces.
//! - `moves`: `pivot`, `flip`, `t_flip`.
//! - `enumerate`: the breadth-first driver and `FlipGraph`.
//! - `walk`: seeded random flip walks.

pub mod api;
pub mod contact;
pub mod enumerate;
pub mod error;
pub mod geom;
pub mod moves;
pub mod rectangulation;
pub mod split;
pub mod walk;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::{EnumerateError, RectError, SplitError};
pub use geom::{Point, RectCfg, Rectangle};
pub use rectangulation::Rectangulation;

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::contact::{common_edge, equivalent, Signature};
    pub use crate::enumerate::{enumerate, explore, to_dot, EnumerateCfg, FlipGraph};
    pub use crate::geom::{Axis, Edge, Point, RectCfg, Rectangle, Side, SQUARE_SIDE};
    pub use crate::moves::{applicable_moves, pivot, MoveKind};
    pub use crate::rectangulation::Rectangulation;
    pub use crate::walk::{FlipWalker, WalkParams, WalkReplay};
}
