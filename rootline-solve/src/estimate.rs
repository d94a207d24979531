use crate::{Bracket, round::Rounded, round_to};

/// How a refinement loop ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize), serde(rename_all = "kebab-case"))]
pub enum Status {
    /// Converged according to the configured tolerance.
    Converged,
    /// Stopped early due to an observer decision.
    StoppedByObserver,
}

/// A refined root for one bracket.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct RootEstimate {
    /// Root rounded to `digits` decimal places.
    pub root: f64,
    /// Unrounded result of the final refinement step.
    pub x: f64,
    /// Decimal places `root` was rounded to.
    pub digits: u8,
    /// Number of refinement loop iterations performed.
    pub iters: usize,
    /// The bracket this estimate was refined from.
    pub bracket: Bracket,
    /// Final solver status.
    pub status: Status,
}

impl RootEstimate {
    pub(crate) fn new(x: f64, digits: u8, iters: usize, bracket: Bracket, status: Status) -> Self {
        Self {
            root: round_to(x, digits),
            x,
            digits,
            iters,
            bracket,
            status,
        }
    }

    /// Returns the rounded root, ready for display.
    #[must_use]
    pub fn rounded(&self) -> Rounded {
        Rounded::new(self.root, self.digits)
    }
}
