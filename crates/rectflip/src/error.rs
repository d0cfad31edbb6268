//! Error types for construction, split search and enumeration.
//!
//! Every variant signals either bad external input (`InvalidSize`) or a broken
//! internal invariant; none of them is recovered from mid-run.

use std::fmt;

/// Construction and validation failures for rectangles and rectangulations.
#[derive(Clone, Debug, PartialEq)]
pub enum RectError {
    InvalidSize { n: usize },
    Malformed { label: usize, reason: String },
}

impl RectError {
    pub(crate) fn malformed(label: usize, reason: impl Into<String>) -> Self {
        Self::Malformed {
            label,
            reason: reason.into(),
        }
    }
}

impl fmt::Display for RectError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSize { n } => write!(f, "need at least one rectangle, got n = {n}"),
            Self::Malformed { label, reason } => {
                write!(f, "malformed rectangle {label}: {reason}")
            }
        }
    }
}

impl std::error::Error for RectError {}

/// Split-point search failures. Each indicates a misclassified flip.
#[derive(Clone, Debug, PartialEq)]
pub enum SplitError {
    /// The combined extent along the split axis is empty.
    Degenerate { low: f64, high: f64 },
    /// Both probes sit on the diagonal; bisection cannot pick a direction.
    Collinear { spot: f64 },
    NoConvergence { steps: usize },
}

impl fmt::Display for SplitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Degenerate { low, high } => {
                write!(f, "degenerate split interval [{low}, {high}]")
            }
            Self::Collinear { spot } => {
                write!(f, "split edge at {spot} lies on the reference diagonal")
            }
            Self::NoConvergence { steps } => {
                write!(f, "split search did not converge after {steps} steps")
            }
        }
    }
}

impl std::error::Error for SplitError {}

/// Aborts an enumeration run.
#[derive(Clone, Debug, PartialEq)]
pub enum EnumerateError {
    Rect(RectError),
    Split(SplitError),
    StateLimit { limit: usize },
}

impl fmt::Display for EnumerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rect(e) => write!(f, "invalid rectangulation: {e}"),
            Self::Split(e) => write!(f, "rewrite failed: {e}"),
            Self::StateLimit { limit } => {
                write!(f, "state limit of {limit} rectangulations exceeded")
            }
        }
    }
}

impl std::error::Error for EnumerateError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Rect(e) => Some(e),
            Self::Split(e) => Some(e),
            Self::StateLimit { .. } => None,
        }
    }
}

impl From<RectError> for EnumerateError {
    fn from(e: RectError) -> Self {
        Self::Rect(e)
    }
}

impl From<SplitError> for EnumerateError {
    fn from(e: SplitError) -> Self {
        Self::Split(e)
    }
}
