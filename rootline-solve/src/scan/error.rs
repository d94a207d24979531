use rootline_core::Function;
use thiserror::Error;

/// Errors that can occur during a grid scan.
#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum Error {
    #[error("scan bound is not finite: {value}")]
    NonFiniteBound { value: f64 },

    #[error("step {step} is too small to move past x = {x}")]
    StepTooSmall { x: f64, step: f64 },

    #[error("derivative is NaN at x = {x}")]
    NanSample { x: f64 },
}

/// Rejects a non-finite scan bound.
pub(super) fn check_finite(value: f64) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFiniteBound { value })
    }
}

/// Advances `x` by `step`, failing if the sum rounds back to `x`.
pub(super) fn advance(x: f64, step: f64) -> Result<f64, Error> {
    let next = x + step;
    if next == x {
        return Err(Error::StepTooSmall { x, step });
    }
    Ok(next)
}

/// Evaluates `derivative` at `x`, rejecting a NaN result.
pub(super) fn sample<D>(derivative: &D, x: f64) -> Result<f64, Error>
where
    D: Function + ?Sized,
{
    let value = derivative.call(x);
    if value.is_nan() {
        return Err(Error::NanSample { x });
    }
    Ok(value)
}
