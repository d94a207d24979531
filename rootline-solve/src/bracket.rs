use std::fmt;

use thiserror::Error;

/// Errors that can occur when creating a [`Bracket`] by hand.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum BracketError {
    /// One or both endpoints are non-finite.
    #[error("non-finite endpoint(s)")]
    NonFinite,
    /// The left endpoint lies to the right of the right endpoint.
    #[error("left endpoint exceeds right endpoint")]
    Reversed,
}

/// A sub-interval in which the function changes sign.
///
/// Brackets from [`scan::find_brackets`](crate::scan::find_brackets) carry
/// the bounds exactly as reported (rounded to the scan's digits), and the
/// refiners start from those reported bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Bracket {
    left: f64,
    right: f64,
}

impl Bracket {
    /// Creates a bracket from finite, ordered bounds.
    ///
    /// The sign change itself is not checked, since that needs the function.
    ///
    /// # Errors
    ///
    /// Returns `BracketError` if either bound is non-finite or `left > right`.
    pub fn new(left: f64, right: f64) -> Result<Self, BracketError> {
        if !left.is_finite() || !right.is_finite() {
            return Err(BracketError::NonFinite);
        }
        if left > right {
            return Err(BracketError::Reversed);
        }
        Ok(Self { left, right })
    }

    /// Creates a bracket from scan positions already known to be ordered.
    pub(crate) fn from_scan(left: f64, right: f64) -> Self {
        Self { left, right }
    }

    /// Returns the left bound.
    #[must_use]
    pub fn left(&self) -> f64 {
        self.left
    }

    /// Returns the right bound.
    #[must_use]
    pub fn right(&self) -> f64 {
        self.right
    }

    /// Returns the bracket bounds as an array.
    #[must_use]
    pub fn as_array(&self) -> [f64; 2] {
        [self.left, self.right]
    }

    /// Returns the midpoint of the bracket.
    #[must_use]
    pub fn midpoint(&self) -> f64 {
        (self.left + self.right) / 2.0
    }

    /// Returns the bracket width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.right - self.left
    }
}

impl fmt::Display for Bracket {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {:?})", self.left, self.right)
    }
}
