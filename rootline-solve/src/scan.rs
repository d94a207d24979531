//! Grid scans over an interval.
//!
//! - [`find_brackets`] locates sign changes of a function.
//! - [`find_max`] estimates the largest value a derivative takes.
//!
//! Both walk the interval in fixed steps of a validated [`Step`](crate::Step).
//! Nothing adapts the step: features narrower than the step can be missed,
//! and a root that lands exactly on a grid point makes a zero product, which
//! is not reported as a sign change.

mod bound;
mod config;
mod error;

pub use bound::find_max;
pub use config::Config;
pub use error::Error;

use rootline_core::Function;
use tracing::{debug, instrument, trace};

use crate::Bracket;

/// Scans `[xl, xr]` left to right and returns every sign-change bracket.
///
/// The scan evaluates the function at `xl` and then at `xl + h`,
/// `xl + 2h`, ... for as long as the previous position is at most `xr`, so
/// the last evaluation may overshoot `xr` by less than one step. Adjacent
/// positions whose values have a strictly negative product become a
/// [`Bracket`], with both bounds rounded to the configured digits.
///
/// An interval with `xl > xr`, or one with no sign change, gives an empty
/// list.
///
/// # Errors
///
/// Returns `Error::NonFiniteBound` if either bound is non-finite, or
/// `Error::StepTooSmall` if adding the step no longer moves the position.
#[instrument(level = "debug", skip_all, fields(xl = interval[0], xr = interval[1]))]
pub fn find_brackets<F>(function: &F, interval: [f64; 2], config: &Config) -> Result<Vec<Bracket>, Error>
where
    F: Function + ?Sized,
{
    let [xl, xr] = interval;
    error::check_finite(xl)?;
    error::check_finite(xr)?;

    let step = config.step().get();
    let mut brackets = Vec::new();

    let mut prev_x = xl;
    let mut curr_x = xl;
    let mut curr_y = function.call(curr_x);

    while curr_x <= xr {
        curr_x = error::advance(curr_x, step)?;
        let prev_y = curr_y;
        curr_y = function.call(curr_x);

        if prev_y * curr_y < 0.0 {
            let bracket = Bracket::from_scan(config.report(prev_x), config.report(curr_x));
            trace!(%bracket, "sign change");
            brackets.push(bracket);
        }

        prev_x = curr_x;
    }

    debug!(count = brackets.len(), "bracket scan finished");
    Ok(brackets)
}
