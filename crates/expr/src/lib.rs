//! Compiles textual math expressions of one variable into callable functions.
//!
//! ```rust
//! use rootfind_core::{Compile, Function};
//! use rootfind_expr::Compiler;
//!
//! let f = Compiler::default().compile("x^2 - 4").unwrap();
//! assert_eq!(f.call(3.0).unwrap(), 5.0);
//! ```
//!
//! # Syntax
//!
//! - Numbers: `3`, `0.5`, `.5`, `1e-3`
//! - The variable (`x` unless configured otherwise) and the constants `pi`, `e`, `E`
//! - Operators: `+ - * /`, power as `^` or `**`, unary `-` and `+`
//! - One-argument functions: `sin cos tan asin acos atan sinh cosh tanh exp
//!   ln log log10 log2 sqrt cbrt abs` (`log` is the natural logarithm)
//! - Implicit multiplication: `2x`, `3(x + 1)`, `(x - 1)(x + 1)`, `x sin(x)`
//!
//! Evaluation follows `f64` arithmetic: outside the domain of an expression,
//! e.g. `ln(x)` at `x < 0`, the result is `NaN` or infinite.
//!
//! Power binds tighter than unary minus and associates to the right, so
//! `-x^2` is `-(x^2)` and `2^3^2` is `2^9`.

mod ast;
mod compiler;
mod error;
mod parser;
mod token;


pub use compiler::{Compiler, Expr};
pub use error::ParseError;
