use std::io::Write;

use rootfind_solvers::scan;

use super::{RangeArgs, compile};
use crate::{Result, config::Defaults, render};

/// Lists the brackets found by scanning the range.
pub fn run(args: &RangeArgs, defaults: &Defaults, out: &mut impl Write) -> Result<()> {
    let f = compile(&args.f)?;
    let delta = args.delta.unwrap_or(defaults.scan.delta);

    let brackets = scan::search(&f, args.range(), delta)?;
    if brackets.is_empty() {
        writeln!(out, "No sign changes found in {}.", args.range())?;
        return Ok(());
    }

    render::brackets(out, &brackets)?;
    Ok(())
}
