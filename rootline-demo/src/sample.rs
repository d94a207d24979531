use clap::ValueEnum;
use rootline_core::FunctionPair;
use serde::Serialize;

/// A function pair built from plain function pointers.
pub type SamplePair = FunctionPair<fn(f64) -> f64, fn(f64) -> f64>;

/// The sample functions the demo knows how to scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ValueEnum, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Sample {
    /// `2 atan(x) - 3x + 2`, one root near 1.2689.
    First,
    /// `5.67 sin(4.794x) - 4.55x`, roots near -0.5584, 0 and 0.5584.
    Second,
}

impl Sample {
    pub const ALL: [Sample; 2] = [Sample::First, Sample::Second];

    /// Report label, e.g. `First function`.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Sample::First => "First function",
            Sample::Second => "Second function",
        }
    }

    /// The function together with its analytic derivative.
    #[must_use]
    pub fn pair(self) -> SamplePair {
        match self {
            Sample::First => FunctionPair::new(first as fn(f64) -> f64, d_first as fn(f64) -> f64),
            Sample::Second => FunctionPair::new(second as fn(f64) -> f64, d_second as fn(f64) -> f64),
        }
    }
}

fn first(x: f64) -> f64 {
    2.0 * x.atan() - 3.0 * x + 2.0
}

fn d_first(x: f64) -> f64 {
    2.0 / (1.0 + x * x) - 3.0
}

fn second(x: f64) -> f64 {
    5.67 * (4.794 * x).sin() - 4.55 * x
}

fn d_second(x: f64) -> f64 {
    27.18198 * (4.794 * x).cos() - 4.55
}
