use thiserror::Error;

use crate::round::MAX_DIGITS;

/// Errors that can occur when building scanner or solver configurations.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("step must be finite and positive, got {0}")]
    NonPositiveStep(f64),

    #[error("tolerance must be finite and positive, got {0}")]
    NonPositiveTolerance(f64),

    #[error("cannot round to {0} digits (at most {max})", max = MAX_DIGITS)]
    InvalidDigits(u8),
}

/// A finite, strictly positive grid step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Step(f64);

impl Step {
    /// Default step for bracket scans.
    pub const SCAN: Self = Self(1e-3);

    /// Default step for derivative-bound scans.
    pub const BOUND_SCAN: Self = Self(1e-4);

    /// Creates a validated step.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NonPositiveStep` if `h` is non-finite or not
    /// strictly positive.
    pub fn new(h: f64) -> Result<Self, ConfigError> {
        if !h.is_finite() || h <= 0.0 {
            return Err(ConfigError::NonPositiveStep(h));
        }
        Ok(Self(h))
    }

    /// Returns the step size.
    #[must_use]
    pub fn get(self) -> f64 {
        self.0
    }
}

/// When a refinement loop is allowed to stop.
///
/// Loops run until successive iterates (or bracket bounds) are within `eps`.
/// An optional `max_iters` cap turns a loop that would otherwise never settle
/// into an error; without one the loop is unbounded.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Convergence {
    eps: f64,
    max_iters: Option<usize>,
}

impl Default for Convergence {
    fn default() -> Self {
        Self {
            eps: 1e-15,
            max_iters: None,
        }
    }
}

impl Convergence {
    /// Creates an uncapped convergence criterion with tolerance `eps`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::NonPositiveTolerance` if `eps` is non-finite or
    /// not strictly positive.
    pub fn new(eps: f64) -> Result<Self, ConfigError> {
        if !eps.is_finite() || eps <= 0.0 {
            return Err(ConfigError::NonPositiveTolerance(eps));
        }
        Ok(Self {
            eps,
            max_iters: None,
        })
    }

    /// Caps the number of loop iterations.
    #[must_use]
    pub fn with_max_iters(self, max_iters: usize) -> Self {
        Self {
            max_iters: Some(max_iters),
            ..self
        }
    }

    /// Returns the convergence tolerance.
    #[must_use]
    pub fn eps(&self) -> f64 {
        self.eps
    }

    /// Returns the iteration cap, if any.
    #[must_use]
    pub fn max_iters(&self) -> Option<usize> {
        self.max_iters
    }

    /// Returns true if `iters` iterations use up the cap.
    pub(crate) fn is_exhausted(&self, iters: usize) -> bool {
        self.max_iters.is_some_and(|max| iters >= max)
    }
}

/// Validates a number of reporting digits.
pub(crate) fn check_digits(digits: u8) -> Result<u8, ConfigError> {
    if digits > MAX_DIGITS {
        return Err(ConfigError::InvalidDigits(digits));
    }
    Ok(digits)
}
