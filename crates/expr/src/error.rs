use thiserror::Error;

/// Errors reported while compiling expression text.
///
/// Positions are zero-based character offsets into the source.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ParseError {
    #[error("empty expression")]
    Empty,

    #[error("unexpected character '{ch}' at position {pos}")]
    UnexpectedChar { ch: char, pos: usize },

    #[error("invalid number '{text}' at position {pos}")]
    InvalidNumber { text: String, pos: usize },

    #[error("unknown identifier '{name}' at position {pos}")]
    UnknownIdentifier { name: String, pos: usize },

    #[error("function '{name}' at position {pos} must be followed by '('")]
    MissingCallParen { name: String, pos: usize },

    #[error("unbalanced parenthesis at position {pos}")]
    UnbalancedParen { pos: usize },

    #[error("missing operand at position {pos}")]
    MissingOperand { pos: usize },
}

