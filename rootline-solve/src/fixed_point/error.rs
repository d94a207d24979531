use thiserror::Error;

use crate::{Bracket, scan};

/// Errors that can occur during fixed-point refinement.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("derivative bound is zero on {bracket}, no step multiplier")]
    ZeroDerivativeBound { bracket: Bracket },

    #[error("derivative bound scan failed")]
    Scan(#[from] scan::Error),

    #[error("non-finite iterate {x} after {iters} iterations")]
    NonFiniteIterate { x: f64, iters: usize },

    #[error("no convergence after {iters} iterations (last iterate {x})")]
    MaxIters { iters: usize, x: f64 },
}
