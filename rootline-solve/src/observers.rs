//! Reusable observers that work across all refiners.
//!
//! - [`HasIterate`]: Capability trait implemented by every solver event
//! - [`Trace`]: Logs each iteration through `tracing`
//! - [`Recorder`]: Keeps a copy of every event
//!
//! # Example
//!
//! ```rust
//! use rootline_solve::{Bracket, bisection, newton, observers::{Recorder, Trace}};
//! use rootline_core::FunctionPair;
//!
//! let pair = FunctionPair::new(|x: f64| x * x - 2.0, |x: f64| 2.0 * x);
//! let bracket = Bracket::new(1.0, 2.0)?;
//!
//! let mut recorder = Recorder::<bisection::Event>::new();
//! bisection::refine(&pair, bracket, &bisection::Config::default(), &mut recorder)?;
//! assert!(recorder.events().iter().all(|event| event.left <= 2.0_f64.sqrt()));
//!
//! newton::refine(&pair, bracket, &newton::Config::default(), &mut Trace)?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

use rootline_core::Observer;
use tracing::trace;

use crate::{Action, Bracket, bisection, fixed_point, newton};

/// An event that reports the current iterate of a refinement loop.
pub trait HasIterate {
    /// Returns the bracket being refined.
    fn bracket(&self) -> Bracket;

    /// Returns the 1-based iteration counter.
    fn iter(&self) -> usize;

    /// Returns the iterate produced by this iteration.
    ///
    /// For bisection this is the midpoint that was evaluated.
    fn x(&self) -> f64;
}

impl HasIterate for bisection::Event {
    fn bracket(&self) -> Bracket {
        self.bracket
    }

    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.mid
    }
}

impl HasIterate for newton::Event {
    fn bracket(&self) -> Bracket {
        self.bracket
    }

    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }
}

impl HasIterate for fixed_point::Event {
    fn bracket(&self) -> Bracket {
        self.bracket
    }

    fn iter(&self) -> usize {
        self.iter
    }

    fn x(&self) -> f64 {
        self.x
    }
}

/// Logs every iteration at `TRACE` level and never intervenes.
#[derive(Debug, Clone, Copy, Default)]
pub struct Trace;

impl<E: HasIterate> Observer<E, Action> for Trace {
    fn observe(&mut self, event: &E) -> Option<Action> {
        trace!(bracket = %event.bracket(), iter = event.iter(), x = event.x(), "iteration");
        None
    }
}

/// Records a copy of every observed event.
#[derive(Debug, Clone)]
pub struct Recorder<E> {
    events: Vec<E>,
}

impl<E> Default for Recorder<E> {
    fn default() -> Self {
        Self { events: Vec::new() }
    }
}

impl<E> Recorder<E> {
    /// Creates an empty recorder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the events recorded so far.
    #[must_use]
    pub fn events(&self) -> &[E] {
        &self.events
    }

    /// Consumes the recorder and returns its events.
    #[must_use]
    pub fn into_events(self) -> Vec<E> {
        self.events
    }
}

impl<E: Clone, A> Observer<E, A> for Recorder<E> {
    fn observe(&mut self, event: &E) -> Option<A> {
        self.events.push(event.clone());
        None
    }
}
