use thiserror::Error;

/// Errors that can occur during Newton refinement.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("derivative is zero at x = {x} after {iters} iterations")]
    ZeroDerivative { x: f64, iters: usize },

    #[error("non-finite iterate {x} after {iters} iterations")]
    NonFiniteIterate { x: f64, iters: usize },

    #[error("no convergence after {iters} iterations (last iterate {x})")]
    MaxIters { iters: usize, x: f64 },
}
