use crate::Bracket;

/// Iteration event emitted by the bisection solver.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Event {
    /// The bracket being refined.
    pub bracket: Bracket,
    /// Iteration counter (1-based).
    pub iter: usize,
    /// Left bound after this iteration's update.
    pub left: f64,
    /// Right bound after this iteration's update.
    pub right: f64,
    /// Midpoint evaluated in this iteration.
    pub mid: f64,
}
