use crate::{ConfigError, Step, config::check_digits, round_to};

/// Configuration for [`find_brackets`](super::find_brackets).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Config {
    step: Step,
    digits: Option<u8>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            step: Step::SCAN,
            digits: Some(4),
        }
    }
}

impl Config {
    /// Creates a scan config.
    ///
    /// Bracket bounds are rounded to `digits` decimal places, or left as the
    /// raw scan positions when `digits` is `None`.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidDigits` if `digits` exceeds
    /// [`MAX_DIGITS`](crate::MAX_DIGITS).
    pub fn new(step: Step, digits: Option<u8>) -> Result<Self, ConfigError> {
        let digits = digits.map(check_digits).transpose()?;
        Ok(Self { step, digits })
    }

    /// Returns the scan step.
    #[must_use]
    pub fn step(&self) -> Step {
        self.step
    }

    /// Returns the digits bracket bounds are rounded to.
    #[must_use]
    pub fn digits(&self) -> Option<u8> {
        self.digits
    }

    /// Applies the configured rounding to a scan position.
    pub(super) fn report(&self, x: f64) -> f64 {
        match self.digits {
            Some(digits) => round_to(x, digits),
            None => x,
        }
    }
}
