use std::io::Write;

use rootfind_observers::{DivergenceGuard, Logger};
use rootfind_solvers::fixed_point::{self, Mode};

use super::compile;
use crate::{Result, config::Defaults, render};

#[derive(Debug, clap::Args)]
pub struct Args {
    /// The iteration map g(x), e.g. "cos(x)"
    pub g: String,

    /// Starting point
    #[arg(long, allow_negative_numbers = true)]
    pub x0: f64,

    /// Stop once the step falls below this tolerance [default: 1e-8]
    #[arg(long)]
    pub tol: Option<f64>,

    /// Iteration limit [default: 100]
    #[arg(long)]
    pub max_iters: Option<usize>,

    /// Accelerate with Aitken's delta-squared process
    #[arg(long)]
    pub aitken: bool,

    /// Equation f(x) = 0 to evaluate at the final estimate
    #[arg(long)]
    pub f: Option<String>,

    /// Give up once the step has grown this many times in a row
    #[arg(long)]
    pub patience: Option<usize>,
}

/// Iterates `g` and reports the trace, the estimate and the visited points.
pub fn run(args: &Args, defaults: &Defaults, out: &mut impl Write) -> Result<()> {
    let g = compile(&args.g)?;
    let check = args.f.as_deref().map(compile).transpose()?;

    let settings = &defaults.fixed_point;
    let mode = if args.aitken || settings.aitken {
        Mode::Aitken
    } else {
        Mode::Standard
    };
    let config = fixed_point::Config::new(
        args.tol.unwrap_or(settings.tol),
        args.max_iters.unwrap_or(settings.max_iters),
        mode,
    )?;

    let guard = args.patience.or(settings.patience).map(DivergenceGuard::new);
    let solution = fixed_point::solve(&g, args.x0, &config, (Logger::new("fixed-point"), guard))?;

    render::fixed_point_trace(out, &solution.trace)?;
    match solution.root() {
        Some(root) => writeln!(out, "Root: {root:.10}")?,
        None => writeln!(out, "Root: none (no step recorded)")?,
    }
    writeln!(out, "Status: {}", render::status(solution.trace.status()))?;
    render::points(out, &solution.points)?;

    if let Some(f) = &check {
        if let Some(Ok(value)) = solution.residual(f) {
            writeln!(out, "f(root) = {value:.2e}")?;
        }
    }
    Ok(())
}
