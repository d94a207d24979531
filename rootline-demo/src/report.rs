use std::fmt;

use rootline_solve::{Bracket, RootEstimate};
use serde::Serialize;

use crate::{Method, Sample};

/// The result of refining one bracket.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Estimate(RootEstimate),
    Failed(String),
}

/// One line of the demo report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Record {
    pub function: Sample,
    pub method: Method,
    pub bracket: Bracket,
    pub outcome: Outcome,
}

impl Record {
    /// Builds a record from a solver result, keeping only the error message
    /// of a failure.
    pub fn new<E: fmt::Display>(
        function: Sample,
        method: Method,
        bracket: Bracket,
        result: Result<RootEstimate, E>,
    ) -> Self {
        let outcome = match result {
            Ok(estimate) => Outcome::Estimate(estimate),
            Err(error) => Outcome::Failed(error.to_string()),
        };
        Self {
            function,
            method,
            bracket,
            outcome,
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}, {}, on segment {}: ",
            self.function.label(),
            self.method.label(),
            self.bracket
        )?;
        match &self.outcome {
            Outcome::Estimate(estimate) => write!(
                f,
                "root is {}, number of iterations: {}",
                estimate.rounded(),
                estimate.iters
            ),
            Outcome::Failed(error) => write!(f, "failed: {error}"),
        }
    }
}

/// Renders records as text, one per line.
#[must_use]
pub fn to_text(records: &[Record]) -> String {
    records.iter().map(|record| format!("{record}\n")).collect()
}

/// Renders records as a pretty-printed JSON array.
///
/// # Errors
///
/// Returns an error if serialization fails.
pub fn to_json(records: &[Record]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(records)
}
