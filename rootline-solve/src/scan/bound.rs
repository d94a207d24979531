use rootline_core::Function;
use tracing::{instrument, trace};

use crate::Step;

use super::{Error, error};

/// Returns the largest value `derivative` takes on a grid from `a` towards `b`.
///
/// Evaluates at `a`, then keeps stepping by `step` while the position is
/// below `b`, tracking the running maximum. The final position may overshoot
/// `b` by less than one step. When `a >= b` the grid is the single point `a`
/// and the result is exactly `derivative(a)`.
///
/// This is a signed maximum: for a derivative that is negative everywhere it
/// is the value closest to zero, not the one of largest magnitude.
///
/// # Errors
///
/// Returns `Error::NonFiniteBound` if either bound is non-finite,
/// `Error::StepTooSmall` if adding the step no longer moves the position, or
/// `Error::NanSample` if the derivative is NaN at a grid point.
#[instrument(level = "trace", skip(derivative, step))]
pub fn find_max<D>(derivative: &D, a: f64, b: f64, step: Step) -> Result<f64, Error>
where
    D: Function + ?Sized,
{
    error::check_finite(a)?;
    error::check_finite(b)?;

    let h = step.get();
    let mut x = a;
    let mut maximum = error::sample(derivative, x)?;

    while x < b {
        x = error::advance(x, h)?;
        maximum = error::sample(derivative, x)?.max(maximum);
    }

    trace!(maximum, "derivative bound");
    Ok(maximum)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    fn d_atan_line(x: f64) -> f64 {
        2.0 / (1.0 + x * x) - 3.0
    }

    fn step(h: f64) -> Step {
        Step::new(h).expect("valid step")
    }

    #[test]
    fn tracks_running_maximum() {
        // Grid is 0.0, 0.25, 0.5, 0.75, 1.0.
        let maximum = find_max(&|x: f64| x, 0.0, 1.0, step(0.25)).expect("finite bounds");
        assert_relative_eq!(maximum, 1.0);
    }

    #[test]
    fn finds_interior_peak() {
        let maximum = find_max(&d_atan_line, -1.0, 1.0, Step::BOUND_SCAN).expect("finite bounds");
        assert_relative_eq!(maximum, -1.0, epsilon = 1e-6);
    }

    #[test]
    fn signed_maximum_of_negative_derivative() {
        // |d| peaks at -2.0 near x = 1, yet the maximum is the value nearest zero.
        let maximum = find_max(&|x: f64| -2.0 * x, 0.5, 1.0, step(0.1)).expect("finite bounds");
        assert_relative_eq!(maximum, -1.0);
    }

    #[test]
    fn nan_sample_is_an_error() {
        let derivative = |x: f64| if x > 0.6 { f64::NAN } else { x };
        let result = find_max(&derivative, 0.0, 1.0, step(0.25));
        assert_eq!(result, Err(Error::NanSample { x: 0.75 }));

        let result = find_max(&|_: f64| f64::NAN, 1.0, -1.0, Step::BOUND_SCAN);
        assert_eq!(result, Err(Error::NanSample { x: 1.0 }));
    }

    #[test]
    fn reversed_bounds_sample_only_start() {
        let maximum = find_max(&d_atan_line, 1.0, -1.0, Step::BOUND_SCAN).expect("finite bounds");
        assert_eq!(maximum, d_atan_line(1.0));
        assert_relative_eq!(maximum, -2.0);
    }

    #[test]
    fn equal_bounds_sample_only_start() {
        let maximum = find_max(&|x: f64| x.cos(), 0.3, 0.3, Step::BOUND_SCAN).expect("finite bounds");
        assert_eq!(maximum, 0.3_f64.cos());
    }

    #[test]
    fn rejects_non_finite_bounds() {
        assert!(matches!(
            find_max(&|x: f64| x, f64::NEG_INFINITY, 0.0, Step::BOUND_SCAN),
            Err(Error::NonFiniteBound { .. })
        ));
    }
}
