//! CLI command implementations.
//!
//! Each submodule implements one subcommand and writes its report to the
//! given output.

pub mod brackets;
pub mod falsi;
pub mod fixed_point;

use rootfind_core::Compile;
use rootfind_expr::{Compiler, Expr};
use rootfind_solvers::Interval;

use crate::{CliError, Result};

/// Function and search range shared by `brackets` and `falsi`.
#[derive(Debug, clap::Args)]
pub struct RangeArgs {
    /// The function f(x), e.g. "x^3 - 2x - 5"
    pub f: String,

    /// Left end of the search range
    #[arg(short, long = "from", allow_negative_numbers = true)]
    pub a: f64,

    /// Right end of the search range
    #[arg(short, long = "to", allow_negative_numbers = true)]
    pub b: f64,

    /// Scan step [default: 0.5]
    #[arg(short, long)]
    pub delta: Option<f64>,
}

impl RangeArgs {
    pub fn range(&self) -> Interval {
        Interval::new(self.a, self.b)
    }
}

fn compile(source: &str) -> Result<Expr> {
    Compiler::default()
        .compile(source)
        .map_err(|error| CliError::Parse {
            expr: source.to_string(),
            source: error,
        })
}

/// Picks brackets by 1-based index; no indices selects all of them.
fn select(brackets: &[Interval], indices: &[usize]) -> Result<Vec<Interval>> {
    if indices.is_empty() {
        return Ok(brackets.to_vec());
    }

    let mut indices = indices.to_vec();
    indices.sort_unstable();
    indices.dedup();

    indices
        .into_iter()
        .map(|index| {
            index
                .checked_sub(1)
                .and_then(|i| brackets.get(i))
                .copied()
                .ok_or(CliError::Selection {
                    index,
                    available: brackets.len(),
                })
        })
        .collect()
}

#[cfg(test)]
fn output(run: impl FnOnce(&mut Vec<u8>) -> Result<()>) -> Result<String> {
    let mut buf = Vec::new();
    run(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brackets() -> Vec<Interval> {
        vec![
            Interval::new(-2.5, -2.0),
            Interval::new(-2.0, -1.5),
            Interval::new(1.5, 2.0),
        ]
    }

    #[test]
    fn empty_selection_keeps_everything() {
        assert_eq!(select(&brackets(), &[]).expect("valid"), brackets());
    }

    #[test]
    fn selection_is_ordered_and_deduplicated() {
        let picked = select(&brackets(), &[3, 1, 3]).expect("valid");
        assert_eq!(picked, vec![brackets()[0], brackets()[2]]);
    }

    #[test]
    fn selection_out_of_range() {
        for index in [0, 4] {
            assert!(matches!(
                select(&brackets(), &[index]),
                Err(CliError::Selection { available: 3, .. })
            ));
        }
    }

    #[test]
    fn compile_errors_name_the_expression() {
        let Err(CliError::Parse { expr, .. }) = compile("x +") else {
            panic!("expected a parse error");
        };
        assert_eq!(expr, "x +");
    }
}
