//! Shunting-yard parser producing an expression tree.

use std::f64::consts::{E, PI};

use crate::{
    ParseError,
    ast::{BinOp, Func, NEG_PRECEDENCE, Node},
    token::{Spanned, Token, Tokenizer},
};

/// Operators waiting on the stack, with the position they appeared at.
#[derive(Debug)]
enum Pending {
    Binary(BinOp, usize),
    Neg(usize),
    Call(Func, usize),
    Open(usize),
}

struct Parser<'v> {
    variable: &'v str,
    operands: Vec<Node>,
    operators: Vec<Pending>,
    expect_operand: bool,
}

/// Parses `source` into an expression tree over `variable`.
pub(crate) fn parse(source: &str, variable: &str) -> Result<Node, ParseError> {
    if source.trim().is_empty() {
        return Err(ParseError::Empty);
    }

    let mut parser = Parser {
        variable,
        operands: Vec::new(),
        operators: Vec::new(),
        expect_operand: true,
    };

    let mut tokens = Tokenizer::new(source);
    while let Some(next) = tokens.next() {
        let (pos, token) = next?;
        parser.token(pos, token, &mut tokens)?;
    }

    parser.finish(source.chars().count())
}

impl Parser<'_> {
    fn token(
        &mut self,
        pos: usize,
        token: Token,
        tokens: &mut impl Iterator<Item = Result<Spanned, ParseError>>,
    ) -> Result<(), ParseError> {
        if self.expect_operand {
            return self.operand(pos, token, tokens);
        }

        let op = match token {
            Token::Plus => BinOp::Add,
            Token::Minus => BinOp::Sub,
            Token::Star => BinOp::Mul,
            Token::Slash => BinOp::Div,
            Token::Caret => BinOp::Pow,
            Token::RParen => return self.close(pos),
            Token::Number(_) | Token::Ident(_) | Token::LParen => {
                // Implicit multiplication, as in `2x` or `(x - 1)(x + 1)`.
                self.push_binary(BinOp::Mul, pos)?;
                return self.operand(pos, token, tokens);
            }
        };
        self.push_binary(op, pos)
    }

    fn operand(
        &mut self,
        pos: usize,
        token: Token,
        tokens: &mut impl Iterator<Item = Result<Spanned, ParseError>>,
    ) -> Result<(), ParseError> {
        match token {
            Token::Number(value) => self.push_operand(Node::Const(value)),
            Token::Ident(name) if name == self.variable => self.push_operand(Node::Var),
            Token::Ident(name) if name == "pi" => self.push_operand(Node::Const(PI)),
            Token::Ident(name) if name == "e" || name == "E" => self.push_operand(Node::Const(E)),
            Token::Ident(name) => {
                let Some(func) = Func::from_name(&name) else {
                    return Err(ParseError::UnknownIdentifier { name, pos });
                };
                match tokens.next().transpose()? {
                    Some((open, Token::LParen)) => {
                        self.operators.push(Pending::Call(func, pos));
                        self.operators.push(Pending::Open(open));
                    }
                    _ => return Err(ParseError::MissingCallParen { name, pos }),
                }
            }
            Token::LParen => self.operators.push(Pending::Open(pos)),
            Token::Minus => self.operators.push(Pending::Neg(pos)),
            Token::Plus => {}
            Token::Star | Token::Slash | Token::Caret | Token::RParen => {
                return Err(ParseError::MissingOperand { pos });
            }
        }
        Ok(())
    }

    fn push_operand(&mut self, node: Node) {
        self.operands.push(node);
        self.expect_operand = false;
    }

    fn push_binary(&mut self, op: BinOp, pos: usize) -> Result<(), ParseError> {
        while let Some(top) = self.operators.last() {
            let top_precedence = match top {
                Pending::Binary(top_op, _) => top_op.precedence(),
                Pending::Neg(_) => NEG_PRECEDENCE,
                Pending::Call(..) | Pending::Open(_) => break,
            };
            let binds_tighter = top_precedence > op.precedence()
                || (top_precedence == op.precedence() && !op.is_right_assoc());
            if !binds_tighter {
                break;
            }
            self.reduce()?;
        }
        self.operators.push(Pending::Binary(op, pos));
        self.expect_operand = true;
        Ok(())
    }

    fn close(&mut self, pos: usize) -> Result<(), ParseError> {
        loop {
            match self.operators.last() {
                None => return Err(ParseError::UnbalancedParen { pos }),
                Some(Pending::Open(_)) => {
                    self.operators.pop();
                    break;
                }
                Some(_) => self.reduce()?,
            }
        }
        if let Some(Pending::Call(..)) = self.operators.last() {
            self.reduce()?;
        }
        self.expect_operand = false;
        Ok(())
    }

    /// Pops one operator and applies it to the operands it consumes.
    fn reduce(&mut self) -> Result<(), ParseError> {
        let node = match self.operators.pop() {
            Some(Pending::Binary(op, pos)) => {
                let rhs = self.pop_operand(pos)?;
                let lhs = self.pop_operand(pos)?;
                Node::Binary(op, Box::new(lhs), Box::new(rhs))
            }
            Some(Pending::Neg(pos)) => Node::Neg(Box::new(self.pop_operand(pos)?)),
            Some(Pending::Call(func, pos)) => Node::Call(func, Box::new(self.pop_operand(pos)?)),
            Some(Pending::Open(pos)) => return Err(ParseError::UnbalancedParen { pos }),
            None => return Ok(()),
        };
        self.operands.push(node);
        Ok(())
    }

    fn pop_operand(&mut self, pos: usize) -> Result<Node, ParseError> {
        self.operands
            .pop()
            .ok_or(ParseError::MissingOperand { pos })
    }

    fn finish(mut self, end: usize) -> Result<Node, ParseError> {
        if self.expect_operand {
            return Err(ParseError::MissingOperand { pos: end });
        }
        while !self.operators.is_empty() {
            self.reduce()?;
        }
        match (self.operands.pop(), self.operands.is_empty()) {
            (Some(root), true) => Ok(root),
            _ => Err(ParseError::MissingOperand { pos: end }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tree(source: &str) -> Node {
        parse(source, "x").expect("valid expression")
    }

    fn var() -> Box<Node> {
        Box::new(Node::Var)
    }

    fn num(v: f64) -> Box<Node> {
        Box::new(Node::Const(v))
    }

    #[test]
    fn power_binds_tighter_than_negation() {
        assert_eq!(
            tree("-x^2"),
            Node::Neg(Box::new(Node::Binary(BinOp::Pow, var(), num(2.0))))
        );
    }

    #[test]
    fn power_is_right_associative() {
        assert_eq!(
            tree("2^3^2"),
            Node::Binary(
                BinOp::Pow,
                num(2.0),
                Box::new(Node::Binary(BinOp::Pow, num(3.0), num(2.0)))
            )
        );
    }

    #[test]
    fn subtraction_is_left_associative() {
        assert_eq!(
            tree("x - 1 - 2"),
            Node::Binary(
                BinOp::Sub,
                Box::new(Node::Binary(BinOp::Sub, var(), num(1.0))),
                num(2.0)
            )
        );
    }

    #[test]
    fn implicit_multiplication_before_function() {
        assert_eq!(
            tree("2sin(x)"),
            Node::Binary(
                BinOp::Mul,
                num(2.0),
                Box::new(Node::Call(Func::Sin, var()))
            )
        );
    }

    #[test]
    fn unary_plus_is_dropped() {
        assert_eq!(tree("+x"), Node::Var);
    }
}
