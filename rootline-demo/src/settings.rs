use rootline_solve::{Convergence, Step, bisection, fixed_point, newton, scan};

use crate::error::Result;

/// Everything a demo run needs besides the job list.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Settings {
    interval: [f64; 2],
    scan: scan::Config,
    bisection: bisection::Config,
    newton: newton::Config,
    fixed_point: fixed_point::Config,
}

impl Settings {
    /// Validates raw command-line values.
    ///
    /// Rounding digits stay at each solver's default. `max_iters` caps every
    /// solver alike.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a step or `eps` is not finite and positive.
    pub fn new(interval: [f64; 2], step: f64, bound_step: f64, eps: f64, max_iters: Option<usize>) -> Result<Self> {
        let mut convergence = Convergence::new(eps)?;
        if let Some(max_iters) = max_iters {
            convergence = convergence.with_max_iters(max_iters);
        }

        Ok(Self {
            interval,
            scan: scan::Config::new(Step::new(step)?, Some(4))?,
            bisection: bisection::Config::new(convergence, 0)?,
            newton: newton::Config::new(convergence, 4)?,
            fixed_point: fixed_point::Config::new(convergence, 0, Step::new(bound_step)?)?,
        })
    }

    #[must_use]
    pub fn interval(&self) -> [f64; 2] {
        self.interval
    }

    #[must_use]
    pub fn scan(&self) -> &scan::Config {
        &self.scan
    }

    #[must_use]
    pub fn bisection(&self) -> &bisection::Config {
        &self.bisection
    }

    #[must_use]
    pub fn newton(&self) -> &newton::Config {
        &self.newton
    }

    #[must_use]
    pub fn fixed_point(&self) -> &fixed_point::Config {
        &self.fixed_point
    }
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            interval: [-3.0, 3.0],
            scan: scan::Config::default(),
            bisection: bisection::Config::default(),
            newton: newton::Config::default(),
            fixed_point: fixed_point::Config::default(),
        }
    }
}
