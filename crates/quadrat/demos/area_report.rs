//! Prints the signed integral or enclosed area of `ax² + bx + c`.
//!
//! ```text
//! cargo run --example area_report -- 1 0 -1 -2 2 --absolute --log-level debug
//! ```
//!
//! Coefficients and bounds accept integers, fractions (`-3/4`) and decimals.
//! Decimals switch the engine to floating point.

use std::process::ExitCode;

use clap::Parser;
use log::{error, info};
use simplelog::{ColorChoice, Config, LevelFilter, TermLogger, TerminalMode};

use quadrat::prelude::*;
use quadrat::summary;

/// Command line arguments.
#[derive(Debug, Parser, Clone)]
#[command(name = "area_report", about = "Exact area under a quadratic curve")]
struct Args {
    /// Coefficient of x².
    #[arg(allow_hyphen_values = true)]
    a: Operand,
    /// Coefficient of x.
    #[arg(allow_hyphen_values = true)]
    b: Operand,
    /// Constant term.
    #[arg(allow_hyphen_values = true)]
    c: Operand,
    /// Start of the interval.
    #[arg(allow_hyphen_values = true)]
    start: Operand,
    /// End of the interval.
    #[arg(allow_hyphen_values = true)]
    end: Operand,

    /// Sum the area on each side of the axis instead of the signed integral.
    #[arg(long)]
    absolute: bool,

    /// Leading coefficients at or below this magnitude count as zero (decimal input only).
    #[arg(long)]
    leading_tolerance: Option<f64>,

    /// Largest denominator used when rounding inexact values.
    #[arg(long)]
    max_denominator: Option<u64>,

    /// Log verbosity.
    #[arg(long, default_value = "warn", value_parser = ["off", "error", "warn", "info", "debug", "trace"])]
    log_level: String,
}

impl Args {
    fn level(&self) -> LevelFilter {
        match self.log_level.as_str() {
            "off" => LevelFilter::Off,
            "error" => LevelFilter::Error,
            "info" => LevelFilter::Info,
            "debug" => LevelFilter::Debug,
            "trace" => LevelFilter::Trace,
            _ => LevelFilter::Warn,
        }
    }

    fn request(&self) -> IntegrationRequest {
        let coefficients =
            QuadraticCoefficients::new(self.a.clone(), self.b.clone(), self.c.clone());
        let mode = if self.absolute {
            IntegrationMode::AbsoluteArea
        } else {
            IntegrationMode::Signed
        };
        IntegrationRequest::new(coefficients, self.start.clone(), self.end.clone(), mode)
    }

    fn options(&self) -> IntegrationOptions {
        let mut options = IntegrationOptions::default();
        if let Some(tolerance) = self.leading_tolerance {
            options = options.with_leading_tolerance(tolerance);
        }
        if let Some(bound) = self.max_denominator {
            options = options.with_max_denominator(bound);
        }
        options
    }
}

fn main() -> ExitCode {
    let args = Args::parse();

    if TermLogger::init(args.level(), Config::default(), TerminalMode::Stderr, ColorChoice::Auto)
        .is_err()
    {
        eprintln!("logger already initialized");
    }

    let request = args.request();
    info!("request: {request:?}");

    let outcome = request
        .validate()
        .and_then(|()| integrate_with_options(&request, &args.options()));

    match outcome {
        Ok(result) => {
            println!("{}", summary::render(&request, &result));
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("integration failed: {e}");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}
