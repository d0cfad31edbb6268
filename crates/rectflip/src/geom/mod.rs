//! Axis-aligned geometry for rectangulations of the reference square.
//!
//! Purpose
//! - Provide `Point`, `Rectangle`, and the tolerance config `RectCfg` shared by
//!   every predicate in the crate.
//! - Keep comparisons eps-aware and uniform: corner coincidence, edge equality
//!   and the open-interval overlap test all go through `util`.
//!
//! Code cross-refs: `contact::{common_edge, Signature}`, `split::find_spot`,
//! `moves::{flip, t_flip}`.

mod types;
mod util;

pub use types::{diagonal, Axis, Edge, Point, RectCfg, Rectangle, Side, SQUARE_SIDE};
pub use util::{approx_eq, edges_eq, open_overlap, points_eq};

#[cfg(test)]
mod tests;
