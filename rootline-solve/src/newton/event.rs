use crate::Bracket;

/// Iteration event emitted by the Newton solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The bracket being refined.
    pub bracket: Bracket,
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Iterate after this iteration's step.
    pub x: f64,
    /// Length of this iteration's step.
    pub err: f64,
}
