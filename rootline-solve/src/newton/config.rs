use crate::{ConfigError, Convergence, config::check_digits};

/// Configuration for the Newton solver.
///
/// Roots are rounded to four decimal places by default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    convergence: Convergence,
    digits: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            convergence: Convergence::default(),
            digits: 4,
        }
    }
}

impl Config {
    /// Creates a config that rounds reported roots to `digits` decimal places.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDigits` if `digits` exceeds
    /// [`MAX_DIGITS`](crate::MAX_DIGITS).
    pub fn new(convergence: Convergence, digits: u8) -> Result<Self, ConfigError> {
        Ok(Self {
            convergence,
            digits: check_digits(digits)?,
        })
    }

    /// Returns the convergence criterion.
    #[must_use]
    pub fn convergence(&self) -> Convergence {
        self.convergence
    }

    /// Returns the decimal places reported roots are rounded to.
    #[must_use]
    pub fn digits(&self) -> u8 {
        self.digits
    }
}
