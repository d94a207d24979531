//! Fixed-point refinement with a derivative-scaled step.
//!
//! # Algorithm
//!
//! The root of `f` is sought as a fixed point of `g(x) = x - mul * f(x)`,
//! where `mul = 1 / bound` and `bound` comes from
//! [`find_max`](crate::scan::find_max) applied to the derivative. Starting at
//! the bracket midpoint, each iteration moves to `g(x)` until successive
//! iterates are within `eps`; `g` is then applied once more and the result,
//! rounded to the configured digits, is the root.
//!
//! The derivative scan runs from the bracket's right bound to its left bound.
//! Since the right bound is never below the left one, the scan does not
//! advance and `bound` is exactly `f'(right)`. This reproduces the behavior
//! that reported results were produced with; scanning the whole bracket would
//! change every multiplier.
//!
//! # Convergence
//!
//! `g` contracts near the root only while `|1 - mul * f'(x)| < 1`. When the
//! multiplier misses that condition the iterates diverge or cycle, and
//! without an iteration cap the loop may never end. Configure
//! [`Convergence::with_max_iters`](crate::Convergence::with_max_iters) to turn
//! that into [`Error::MaxIters`].
//!
//! # Observer Events
//!
//! The solver emits one [`Event`] per loop iteration.

mod config;
mod error;
mod event;

#[cfg(test)]
mod tests;

pub use config::Config;
pub use error::Error;
pub use event::Event;

use rootline_core::{Differentiable, Observer};
use tracing::{debug, instrument, warn};

use crate::{Action, Bracket, RootEstimate, Status, scan};

/// Refines one bracket by fixed-point iteration.
///
/// # Errors
///
/// Returns an error if the sampled derivative bound is zero, an iterate is
/// non-finite, or a configured iteration cap is reached.
#[instrument(level = "debug", name = "fixed_point", skip_all, fields(bracket = %bracket))]
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
    let mul = multiplier(function, bracket, config)?;

    let mut prev = bracket.midpoint();
    let mut err = f64::INFINITY;
    let mut iters = 0;
    let mut status = Status::Converged;

    while err > convergence.eps() {
        if convergence.is_exhausted(iters) {
            return Err(Error::MaxIters { iters, x: prev });
        }

        let cur = step(function, prev, mul, iters)?;
        err = (cur - prev).abs();
        prev = cur;
        iters += 1;

        let event = Event {
            bracket,
            iter: iters,
            x: prev,
            err,
            mul,
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

    let estimate = RootEstimate::new(step(function, prev, mul, iters)?, config.digits(), iters, bracket, status);
    debug!(iters, mul, x = estimate.x, "fixed point finished");
    Ok(estimate)
}

/// Refines one bracket by fixed-point iteration, without observation.
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
                warn!(%bracket, %error, "fixed point failed");
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

/// Computes the step multiplier `1 / bound` for a bracket.
fn multiplier<F>(function: &F, bracket: Bracket, config: &Config) -> Result<f64, Error>
where
    F: Differentiable + ?Sized,
{
    let [left, right] = bracket.as_array();
    let derivative = |x: f64| function.derivative(x);

    // Right-to-left on purpose: see the module docs.
    let bound = scan::find_max(&derivative, right, left, config.bound_step())?;

    if bound == 0.0 {
        return Err(Error::ZeroDerivativeBound { bracket });
    }
    Ok(1.0 / bound)
}

/// Applies `x - mul * f(x)`.
fn step<F>(function: &F, x: f64, mul: f64, iters: usize) -> Result<f64, Error>
where
    F: Differentiable + ?Sized,
{
    let next = x - mul * function.call(x);
    if !next.is_finite() {
        return Err(Error::NonFiniteIterate { x: next, iters });
    }
    Ok(next)
}
