//! Newton-Raphson refinement starting from a bracket's left bound.
//!
//! # Algorithm
//!
//! From `x = bracket.left()`, each iteration steps to
//! `x - f(x) / f'(x)` and measures the step length. The loop runs at least
//! once and stops when a step is no longer than `eps`; one more step is then
//! taken and its result, rounded to the configured digits, is the root.
//!
//! Newton's method only converges locally. The bracket guarantees a sign
//! change, not that its left bound lies in the basin of attraction of the
//! root inside it, so the estimate may leave the bracket.
//!
//! # Failure modes
//!
//! - A derivative of exactly zero makes the step undefined:
//!   [`Error::ZeroDerivative`].
//! - A step that overflows or produces NaN: [`Error::NonFiniteIterate`].
//! - Iterates that never settle within `eps` loop forever unless an
//!   iteration cap is configured: [`Error::MaxIters`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per loop iteration. The extra final step is
//! not reported.

mod config;
mod error;
mod event;


pub use config::Config;
pub use error::Error;
pub use event::Event;

use rootline_core::{Differentiable, Observer};
use tracing::{debug, instrument, warn};

use crate::{Action, Bracket, RootEstimate, Status};

/// Refines one bracket with Newton-Raphson steps.
///
/// # Errors
///
/// Returns an error if the derivative vanishes at an iterate, an iterate is
/// non-finite, or a configured iteration cap is reached.
#[instrument(level = "debug", name = "newton", skip_all, fields(bracket = %bracket))]
pub fn refine<F, Obs>(
    function: &F,
    bracket: Bracket,
    config: &Config,
    observer: &mut Obs,
) -> Result<RootEstimate, Error>
where
    F: Differentiable + ?Sized,
    Obs: Observer<Event, Action>,
{
    let convergence = config.convergence();
    let mut x = bracket.left();
    let mut err = f64::INFINITY;
    let mut iters = 0;
    let mut status = Status::Converged;

    while err > convergence.eps() {
        if convergence.is_exhausted(iters) {
            return Err(Error::MaxIters { iters, x });
        }

        let next = step(function, x, iters)?;
        err = (x - next).abs();
        x = next;
        iters += 1;

        let event = Event {
            bracket,
            iter: iters,
            x,
            err,
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

    let estimate = RootEstimate::new(step(function, x, iters)?, config.digits(), iters, bracket, status);
    debug!(iters, x = estimate.x, "newton finished");
    Ok(estimate)
}

/// Refines one bracket with Newton-Raphson steps, without observation.
///
/// # Errors
///
/// See [`refine`].
pub fn refine_unobserved<F>(function: &F, bracket: Bracket, config: &Config) -> Result<RootEstimate, Error>
where
    F: Differentiable + ?Sized,
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
    F: Differentiable + ?Sized,
    Obs: Observer<Event, Action>,
{
    brackets
        .iter()
        .map(|&bracket| {
            let result = refine(function, bracket, config, observer);
            if let Err(error) = &result {
                warn!(%bracket, %error, "newton failed");
            }
            result
        })
        .collect()
}

/// Refines every bracket, in order, without observation.
pub fn solve<F>(function: &F, brackets: &[Bracket], config: &Config) -> Vec<Result<RootEstimate, Error>>
where
    F: Differentiable + ?Sized,
{
    solve_observed(function, brackets, config, &mut ())
}

/// Takes one Newton step from `x`.
fn step<F>(function: &F, x: f64, iters: usize) -> Result<f64, Error>
where
    F: Differentiable + ?Sized,
{
    let slope = function.derivative(x);

    if slope == 0.0 {
        return Err(Error::ZeroDerivative { x, iters });
    }

    let next = x - function.call(x) / slope;
    if !next.is_finite() {
        return Err(Error::NonFiniteIterate { x: next, iters });
    }
    Ok(next)
}
