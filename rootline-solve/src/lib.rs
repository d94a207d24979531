//! Bracketing and refinement of real roots of scalar functions.
//!
//! Root finding here is a two-stage pipeline:
//!
//! 1. [`scan::find_brackets`] walks an interval on a fixed grid and reports
//!    every sub-interval where the function changes sign.
//! 2. One of the refiners turns each [`Bracket`] into a [`RootEstimate`]:
//!    - [`bisection`]: Halves the bracket until it is narrower than `eps`
//!    - [`newton`]: Newton-Raphson steps from the bracket's left bound
//!    - [`fixed_point`]: Iterates `x - mul * f(x)` with `mul` taken from
//!      the derivative at the bracket
//!
//! The refiners are independent: each consumes the same bracket list and
//! yields one result per bracket, in order.
//!
//! ```
//! use rootline_core::FunctionPair;
//! use rootline_solve::{bisection, newton, scan};
//!
//! let pair = FunctionPair::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
//! let brackets = scan::find_brackets(&pair, [0.0, 3.0], &scan::Config::default())?;
//! assert_eq!(brackets.len(), 1);
//!
//! let halved = bisection::solve(&pair, &brackets, &bisection::Config::default());
//! assert_eq!(halved[0].as_ref().map(|estimate| estimate.root), Ok(1.0));
//!
//! let stepped = newton::solve(&pair, &brackets, &newton::Config::default());
//! assert_eq!(stepped[0].as_ref().map(|estimate| estimate.root), Ok(1.4142));
//! # Ok::<(), scan::Error>(())
//! ```

mod action;
mod bracket;
mod config;
mod estimate;
mod round;

pub mod bisection;
pub mod fixed_point;
pub mod newton;
pub mod observers;
pub mod scan;

pub use action::Action;
pub use bracket::{Bracket, BracketError};
pub use config::{ConfigError, Convergence, Step};
pub use estimate::{RootEstimate, Status};
pub use round::{MAX_DIGITS, Rounded, round_to};
