//! Local rewrites: flip, T-flip and the `pivot` dispatcher.
//!
//! Purpose
//! - Classify the contact between two rectangles that share a corner-anchored
//!   edge (`classify`) and apply the matching rewrite (`pivot`).
//! - Rewrites are functional: they read two rectangles of the source and
//!   return a new `Rectangulation` with both replaced; the source is never
//!   observed mid-mutation.
//!
//! Layout
//! - `types.rs`: `MoveKind`, `Rewrite`, `Move`.
//! - `rewrite.rs`: `flip` and `t_flip`.
//! - `pivot.rs`: classification, dispatch and `applicable_moves`.
//!
//! Code cross-refs: `contact::common_edge`, `split::find_spot`.

mod pivot;
mod rewrite;
mod types;

pub use pivot::{applicable_moves, classify, pivot};
pub use rewrite::{flip, t_flip};
pub use types::{Move, MoveKind, Rewrite};
