//! Driver for the Rootline sample runs.
//!
//! [`run`] scans each sample function for sign changes and refines every
//! bracket with the requested method, producing one [`Record`] per bracket.
//! The default [`reference_plan`] reproduces the report the project's
//! numbers are checked against.

mod error;
mod logging;
mod plan;
mod report;
mod sample;
mod settings;

use std::{
    collections::{HashMap, hash_map::Entry},
    fmt,
};

use rootline_solve::{Bracket, RootEstimate, bisection, fixed_point, newton, observers::Trace, scan};
use tracing::{debug, info, instrument};

pub use error::{Error, Result};
pub use logging::{level_filter, setup_logging};
pub use plan::{Job, Method, reference_plan, select};
pub use report::{Outcome, Record, to_json, to_text};
pub use sample::{Sample, SamplePair};
pub use settings::Settings;

/// Runs every job in order.
///
/// Each sample is scanned once, then its brackets go to the solver of every
/// job that names it. A solver failure on one bracket becomes a
/// [`Outcome::Failed`] record and the run carries on.
///
/// # Errors
///
/// Returns `Error::Scan` if the scan interval is not finite or the step
/// cannot advance through it.
#[instrument(level = "info", skip_all, fields(jobs = jobs.len()))]
pub fn run(settings: &Settings, jobs: &[Job]) -> Result<Vec<Record>> {
    let mut scanned: HashMap<Sample, Vec<Bracket>> = HashMap::new();
    let mut records = Vec::new();

    for job in jobs {
        let pair = job.sample.pair();
        let brackets: &[Bracket] = match scanned.entry(job.sample) {
            Entry::Occupied(entry) => entry.into_mut(),
            Entry::Vacant(entry) => {
                let brackets = scan::find_brackets(&pair, settings.interval(), settings.scan())?;
                info!(function = job.sample.label(), count = brackets.len(), "brackets found");
                entry.insert(brackets)
            }
        };

        debug!(function = job.sample.label(), method = job.method.label(), "refining");
        match job.method {
            Method::Bisection => {
                let results = bisection::solve_observed(&pair, brackets, settings.bisection(), &mut Trace);
                collect(*job, brackets, results, &mut records);
            }
            Method::Newton => {
                let results = newton::solve_observed(&pair, brackets, settings.newton(), &mut Trace);
                collect(*job, brackets, results, &mut records);
            }
            Method::FixedPoint => {
                let results = fixed_point::solve_observed(&pair, brackets, settings.fixed_point(), &mut Trace);
                collect(*job, brackets, results, &mut records);
            }
        }
    }

    Ok(records)
}

/// Pairs each bracket with its solver result.
fn collect<E: fmt::Display>(
    job: Job,
    brackets: &[Bracket],
    results: Vec<std::result::Result<RootEstimate, E>>,
    records: &mut Vec<Record>,
) {
    records.extend(
        brackets
            .iter()
            .zip(results)
            .map(|(&bracket, result)| Record::new(job.sample, job.method, bracket, result)),
    );
}
