use thiserror::Error;

/// Errors that can occur during bisection.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("no convergence after {iters} iterations (midpoint {x})")]
    MaxIters { iters: usize, x: f64 },
}
