use crate::{ConfigError, Convergence, Step, config::check_digits};

/// Configuration for the fixed-point solver.
///
/// Roots are reported as whole numbers by default, and the derivative bound
/// is scanned with [`Step::BOUND_SCAN`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    convergence: Convergence,
    digits: u8,
    bound_step: Step,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            convergence: Convergence::default(),
            digits: 0,
            bound_step: Step::BOUND_SCAN,
        }
    }
}

impl Config {
    /// Creates a config that rounds reported roots to `digits` decimal places
    /// and scans the derivative bound with `bound_step`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDigits` if `digits` exceeds
    /// [`MAX_DIGITS`](crate::MAX_DIGITS).
    pub fn new(convergence: Convergence, digits: u8, bound_step: Step) -> Result<Self, ConfigError> {
        Ok(Self {
            convergence,
            digits: check_digits(digits)?,
            bound_step,
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

    /// Returns the step of the derivative-bound scan.
    #[must_use]
    pub fn bound_step(&self) -> Step {
        self.bound_step
    }
}
