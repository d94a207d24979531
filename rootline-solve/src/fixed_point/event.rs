use crate::Bracket;

/// Iteration event emitted by the fixed-point solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The bracket being refined.
    pub bracket: Bracket,
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Iterate after this iteration's step.
    pub x: f64,
    /// Distance between this iterate and the previous one.
    pub err: f64,
    /// Step multiplier in use.
    pub mul: f64,
}
