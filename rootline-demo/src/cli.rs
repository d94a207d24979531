use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use rootline_demo::{Method, Sample, Settings};

const HELP_TEMPLATE: &str = "\
{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}
";

#[derive(Parser, Debug)]
#[command(
    version,
    about = "Scans the sample functions for sign changes and refines each root.",
    help_template = HELP_TEMPLATE,
)]
pub struct Cli {
    /// Left end of the scan interval
    #[arg(long, default_value_t = -3.0, allow_negative_numbers = true, value_name = "X")]
    pub from: f64,

    /// Right end of the scan interval
    #[arg(long, default_value_t = 3.0, allow_negative_numbers = true, value_name = "X")]
    pub to: f64,

    /// Step of the sign-change scan
    #[arg(long, default_value_t = 0.001, value_name = "H")]
    pub step: f64,

    /// Step of the derivative-bound scan used by fixed-point iteration
    #[arg(long, default_value_t = 0.0001, value_name = "H")]
    pub bound_step: f64,

    /// Convergence tolerance for every method
    #[arg(long, default_value_t = 1e-15, value_name = "EPS")]
    pub eps: f64,

    /// Give up on a bracket after this many iterations
    #[arg(long, value_name = "N")]
    pub max_iters: Option<usize>,

    /// Sample function to scan (repeatable; default: all)
    #[arg(long = "function", value_enum, value_name = "NAME")]
    pub functions: Vec<Sample>,

    /// Method to refine with (repeatable; default: all)
    #[arg(long = "method", value_enum, value_name = "NAME")]
    pub methods: Vec<Method>,

    /// Report format
    #[arg(long, value_enum, default_value_t = Format::Text)]
    pub format: Format,

    /// Increase verbosity level (-v for INFO, -vv for DEBUG, -vvv for TRACE)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Write logs to a file in addition to stderr
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Text,
    Json,
}

impl Cli {
    pub fn settings(&self) -> rootline_demo::Result<Settings> {
        Settings::new([self.from, self.to], self.step, self.bound_step, self.eps, self.max_iters)
    }
}
