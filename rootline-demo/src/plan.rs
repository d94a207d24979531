use clap::ValueEnum;
use serde::Serialize;

use crate::Sample;

/// A root-refinement method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Method {
    Bisection,
    Newton,
    FixedPoint,
}

impl Method {
    pub const ALL: [Method; 3] = [Method::Bisection, Method::Newton, Method::FixedPoint];

    /// Report label, e.g. `Newton method`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Method::Bisection => "bisection method",
            Method::Newton => "Newton method",
            Method::FixedPoint => "fixed point iteration method",
        }
    }
}

/// One sample function refined with one method.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Job {
    pub sample: Sample,
    pub method: Method,
}

impl Job {
    #[must_use]
    pub fn new(sample: Sample, method: Method) -> Self {
        Self { sample, method }
    }
}

/// The five runs whose output the demo reproduces by default.
#[must_use]
pub fn reference_plan() -> Vec<Job> {
    vec![
        Job::new(Sample::First, Method::Bisection),
        Job::new(Sample::First, Method::Newton),
        Job::new(Sample::Second, Method::Bisection),
        Job::new(Sample::Second, Method::Newton),
        Job::new(Sample::Second, Method::FixedPoint),
    ]
}

/// Builds the job list for a command-line selection.
///
/// With nothing selected this is the [`reference_plan`]. Otherwise every
/// selected sample is paired with every selected method, in the order given,
/// and an empty side of the selection stands for all of it.
#[must_use]
pub fn select(samples: &[Sample], methods: &[Method]) -> Vec<Job> {
    if samples.is_empty() && methods.is_empty() {
        return reference_plan();
    }

    let samples = if samples.is_empty() { &Sample::ALL[..] } else { samples };
    let methods = if methods.is_empty() { &Method::ALL[..] } else { methods };

    samples
        .iter()
        .flat_map(|&sample| methods.iter().map(move |&method| Job::new(sample, method)))
        .collect()
}
