//! Bisection refinement of sign-change brackets.
//!
//! # Algorithm
//!
//! Starting from a [`Bracket`] `(xl, xr)`, each iteration evaluates the
//! midpoint and keeps the half in which `f(xl) * f(mid) < 0`; otherwise the
//! left bound moves to the midpoint. This includes the case `f(mid) == 0`,
//! which is not treated as an exact hit. The loop runs while
//! `|xl - xr| > eps`, and the reported root is the midpoint of the final
//! bracket rounded to the configured digits.
//!
//! Since the width halves every iteration, a bracket of width `w` needs about
//! `ceil(log2(w / eps))` iterations. Near large roots the spacing between
//! adjacent floats can exceed `eps`, in which case the width never gets that
//! small; cap the loop with [`Convergence::with_max_iters`] when that matters.
//!
//! [`Convergence::with_max_iters`]: crate::Convergence::with_max_iters
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per iteration, after the bracket update.
//! Observers can return [`Action::StopEarly`] to finish with the current
//! bracket.

mod config;
mod error;
mod event;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::Error;
pub use event::Event;

use rootline_core::{Function, Observer};
use tracing::{debug, instrument, warn};

use crate::{Action, Bracket, RootEstimate, Status};

/// Refines one bracket by bisection.
///
/// # Errors
///
/// Returns `Error::MaxIters` if an iteration cap is configured and reached
/// before the bracket is narrower than `eps`.
#[instrument(level = "debug", name = "bisection", skip_all, fields(bracket = %bracket))]
pub fn refine<F, Obs>(
    function: &F,
    bracket: Bracket,
    config: &Config,
    observer: &mut Obs,
) -> Result<RootEstimate, Error>
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    let convergence = config.convergence();
    let [mut left, mut right] = bracket.as_array();
    let mut left_value = function.call(left);
    let mut iters = 0;
    let mut status = Status::Converged;

    while (left - right).abs() > convergence.eps() {
        if convergence.is_exhausted(iters) {
            return Err(Error::MaxIters {
                iters,
                x: (left + right) / 2.0,
            });
        }

        let mid = (left + right) / 2.0;
        let mid_value = function.call(mid);
        if left_value * mid_value < 0.0 {
            right = mid;
        } else {
            left = mid;
            left_value = mid_value;
        }
        iters += 1;

        let event = Event {
            bracket,
            iter: iters,
            left,
            right,
            mid,
        };
        if let Some(action) = observer.observe(&event) {
            match action {
                Action::StopEarly => {
                    status = Status::StoppedByObserver;
                    break;
                }
            }
        }
    }

    let estimate = RootEstimate::new((left + right) / 2.0, config.digits(), iters, bracket, status);
    debug!(iters, x = estimate.x, "bisection finished");
    Ok(estimate)
}

/// Refines one bracket by bisection without observation.
///
/// # Errors
///
/// Returns `Error::MaxIters` if an iteration cap is configured and reached.
pub fn refine_unobserved<F>(function: &F, bracket: Bracket, config: &Config) -> Result<RootEstimate, Error>
where
    F: Function + ?Sized,
{
    refine(function, bracket, config, &mut ())
}

/// Refines every bracket, in order, with a shared observer.
///
/// Each bracket gets its own `Result`, so one failure does not hide the
/// estimates for the others.
pub fn solve_observed<F, Obs>(
    function: &F,
    brackets: &[Bracket],
    config: &Config,
    observer: &mut Obs,
) -> Vec<Result<RootEstimate, Error>>
where
    F: Function + ?Sized,
    Obs: Observer<Event, Action>,
{
    brackets
        .iter()
        .map(|&bracket| {
            let result = refine(function, bracket, config, observer);
            if let Err(error) = &result {
                warn!(%bracket, %error, "bisection failed");
            }
            result
        })
        .collect()
}

/// Refines every bracket, in order, without observation.
pub fn solve<F>(function: &F, brackets: &[Bracket], config: &Config) -> Vec<Result<RootEstimate, Error>>
where
    F: Function + ?Sized,
{
    solve_observed(function, brackets, config, &mut ())
}
