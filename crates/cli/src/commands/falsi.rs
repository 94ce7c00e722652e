use std::io::Write;

use rootfind_observers::Logger;
use rootfind_solvers::{method, regula_falsi, scan};

use super::{RangeArgs, compile, select};
use crate::{CliError, Result, config::Defaults, render};

#[derive(Debug, clap::Args)]
pub struct Args {
    #[command(flatten)]
    pub range: RangeArgs,

    /// Stop once the relative step falls below this tolerance [default: 1e-6]
    #[arg(long)]
    pub tol: Option<f64>,

    /// Iteration limit per bracket [default: 100]
    #[arg(long)]
    pub max_iters: Option<usize>,

    /// Ignore the tolerance and run every iteration
    #[arg(long)]
    pub no_tol: bool,

    /// Only refine these brackets (1-based, as listed by `brackets`), e.g. `--select 1,3`
    #[arg(long, value_delimiter = ',')]
    pub select: Vec<usize>,
}

/// Scans the range and refines the selected brackets.
pub fn run(args: &Args, defaults: &Defaults, out: &mut impl Write) -> Result<()> {
    let f = compile(&args.range.f)?;
    let settings = &defaults.regula_falsi;
    let config = regula_falsi::Config::new(
        args.tol.unwrap_or(settings.tol),
        args.max_iters.unwrap_or(settings.max_iters),
        settings.use_tol && !args.no_tol,
    )?;

    let range = args.range.range();
    let brackets = scan::search(&f, range, args.range.delta.unwrap_or(defaults.scan.delta))?;
    if brackets.is_empty() {
        return Err(CliError::NoBrackets { range });
    }
    let selected = select(&brackets, &args.select)?;

    let sweep = method::sweep(&f, &selected, &config, |bracket| {
        Logger::new(format!("falsi {bracket}"))
    })?;

    for bracket in &sweep.skipped {
        writeln!(out, "Skipping {bracket}: f has the same sign at both ends.")?;
    }
    if sweep.runs.is_empty() {
        return Err(CliError::NoValidBrackets);
    }

    for (i, run) in sweep.runs.iter().enumerate() {
        if i > 0 {
            writeln!(out)?;
        }
        render::falsi_run(out, run)?;
    }
    Ok(())
}
