//! Plain-text tables.

use std::io::{self, Write};

use rootfind_solvers::{Interval, Status, Trace, fixed_point, method::BracketRun};

pub fn brackets(out: &mut impl Write, brackets: &[Interval]) -> io::Result<()> {
    writeln!(out, "{:>3}  Bracket", "#")?;
    for (index, bracket) in brackets.iter().enumerate() {
        writeln!(out, "{:>3}  {bracket}", index + 1)?;
    }
    Ok(())
}

/// Writes one regula falsi run as `Iter a b xr f(xr) Error`.
pub fn falsi_run(out: &mut impl Write, run: &BracketRun) -> io::Result<()> {
    writeln!(out, "Bracket {}", run.bracket)?;
    writeln!(
        out,
        "{:>4} {:>12} {:>12} {:>12} {:>10} {:>10}",
        "Iter", "a", "b", "xr", "f(xr)", "Error"
    )?;
    for r in &run.trace {
        writeln!(
            out,
            "{:>4} {:>12.6} {:>12.6} {:>12.6} {:>10.2e} {:>10.2e}",
            r.iter, r.a, r.b, r.xr, r.fxr, r.error
        )?;
    }
    writeln!(out, "Status: {}", status(run.trace.status()))
}

/// Writes a fixed-point trace as `Iter x Error`.
pub fn fixed_point_trace(out: &mut impl Write, trace: &Trace<fixed_point::Record>) -> io::Result<()> {
    writeln!(out, "{:>4} {:>18} {:>10}", "Iter", "x", "Error")?;
    for r in trace {
        writeln!(out, "{:>4} {:>18.10} {:>10.2e}", r.iter, r.x, r.error)?;
    }
    Ok(())
}

pub fn points(out: &mut impl Write, points: &[f64]) -> io::Result<()> {
    write!(out, "Points:")?;
    for p in points {
        write!(out, " {p:.6}")?;
    }
    writeln!(out)
}

pub fn status(status: Status) -> &'static str {
    match status {
        Status::ZeroResidual => "exact root (residual below machine epsilon)",
        Status::Converged => "converged",
        Status::MaxIters => "iteration limit reached",
        Status::Degenerate => "stopped on a degenerate step",
        Status::Diverged => "diverged (iterate not finite)",
        Status::StoppedByObserver => "stopped early",
    }
}
