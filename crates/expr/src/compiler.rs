use std::{convert::Infallible, fmt};

use rootfind_core::{Compile, Function};

use crate::{ParseError, ast::Node, parser};

/// Compiles expression text over a single named variable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compiler {
    variable: String,
}

impl Compiler {
    /// Creates a compiler whose expressions use `variable` as the unknown.
    #[must_use]
    pub fn new(variable: impl Into<String>) -> Self {
        Self {
            variable: variable.into(),
        }
    }

    #[must_use]
    pub fn variable(&self) -> &str {
        &self.variable
    }
}

impl Default for Compiler {
    fn default() -> Self {
        Self::new("x")
    }
}

impl Compile for Compiler {
    type Function = Expr;
    type Error = ParseError;

    fn compile(&self, source: &str) -> Result<Expr, ParseError> {
        let root = parser::parse(source, &self.variable)?;
        Ok(Expr {
            root,
            source: source.trim().to_string(),
            variable: self.variable.clone(),
        })
    }
}

/// A compiled expression.
///
/// Evaluation never fails. Outside the domain the result is `NaN` or
/// infinite, as with plain `f64` arithmetic, and each solver applies its own
/// rule to such values.
///
/// `Display` writes the parsed form with every operation parenthesized,
/// which makes precedence visible: `-x^2` displays as `(-(x ^ 2))`.
#[derive(Debug, Clone, PartialEq)]
pub struct Expr {
    root: Node,
    source: String,
    variable: String,
}

impl Expr {
    /// The text this expression was compiled from.
    #[must_use]
    pub fn source(&self) -> &str {
        &self.source
    }
}

impl Function for Expr {
    type Error = Infallible;

    fn call(&self, x: f64) -> Result<f64, Infallible> {
        Ok(self.root.eval(x))
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.root.write(f, &self.variable)
    }
}
