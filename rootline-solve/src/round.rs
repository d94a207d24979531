use std::fmt;

/// Largest number of decimal places a reported value may be rounded to.
pub const MAX_DIGITS: u8 = 15;

/// Every `f64` at or above 2^52 is already an integer.
const INTEGRAL: f64 = 4_503_599_627_370_496.0;

/// Rounds `x` to `digits` decimal places, ties to even.
///
/// The decision is made on the exact binary value of `x`, so `-1.02755`
/// (stored as `-1.027549999...`) rounds to `-1.0275` at four digits. Values
/// that are non-finite or too large to have a fraction are returned
/// unchanged, and the sign of a value that rounds to zero is kept.
#[must_use]
pub fn round_to(x: f64, digits: u8) -> f64 {
    if digits == 0 {
        return x.round_ties_even();
    }
    if !x.is_finite() || x.abs() >= INTEGRAL {
        return x;
    }

    round_decimal(x, usize::from(digits)).unwrap_or(x)
}

/// Rounds the exact decimal expansion of `x`.
fn round_decimal(x: f64, digits: usize) -> Option<f64> {
    // 1074 fractional digits hold the exact expansion of any finite f64.
    let exact = format!("{:.1074}", x.abs());
    let (whole, fraction) = exact.split_once('.')?;
    let (kept, rest) = fraction.split_at(digits);

    let mut scaled: u128 = format!("{whole}{kept}").parse().ok()?;
    let round_up = match rest.as_bytes().first().copied()? {
        b'6'..=b'9' => true,
        b'5' => rest[1..].bytes().any(|b| b != b'0') || scaled % 2 == 1,
        _ => false,
    };
    if round_up {
        scaled += 1;
    }

    let padded = format!("{scaled:0>width$}", width = digits + 1);
    let (int_digits, frac_digits) = padded.split_at(padded.len() - digits);
    let sign = if x.is_sign_negative() { "-" } else { "" };
    format!("{sign}{int_digits}.{frac_digits}").parse().ok()
}

/// A rounded value that knows how it should be printed.
///
/// Values rounded to zero digits print as integers (`-1`, `0`, `2`), with
/// negative zero shown as `0`. Anything else uses the shortest round-trip
/// form with a fractional part (`1.2689`, `-0.0`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rounded {
    value: f64,
    digits: u8,
}

impl Rounded {
    /// Wraps an already rounded value.
    #[must_use]
    pub fn new(value: f64, digits: u8) -> Self {
        Self { value, digits }
    }
}

impl fmt::Display for Rounded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.digits == 0 && self.value.is_finite() {
            // Adding zero folds -0.0 into 0.0.
            write!(f, "{}", self.value + 0.0)
        } else {
            write!(f, "{:?}", self.value)
        }
    }
}
