use std::fmt;

/// One-argument functions callable from expressions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Func {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Sinh,
    Cosh,
    Tanh,
    Exp,
    Ln,
    Log10,
    Log2,
    Sqrt,
    Cbrt,
    Abs,
}

impl Func {
    pub(crate) fn from_name(name: &str) -> Option<Self> {
        Some(match name {
            "sin" => Self::Sin,
            "cos" => Self::Cos,
            "tan" => Self::Tan,
            "asin" => Self::Asin,
            "acos" => Self::Acos,
            "atan" => Self::Atan,
            "sinh" => Self::Sinh,
            "cosh" => Self::Cosh,
            "tanh" => Self::Tanh,
            "exp" => Self::Exp,
            "ln" | "log" => Self::Ln,
            "log10" => Self::Log10,
            "log2" => Self::Log2,
            "sqrt" => Self::Sqrt,
            "cbrt" => Self::Cbrt,
            "abs" => Self::Abs,
            _ => return None,
        })
    }

    fn name(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Asin => "asin",
            Self::Acos => "acos",
            Self::Atan => "atan",
            Self::Sinh => "sinh",
            Self::Cosh => "cosh",
            Self::Tanh => "tanh",
            Self::Exp => "exp",
            Self::Ln => "ln",
            Self::Log10 => "log10",
            Self::Log2 => "log2",
            Self::Sqrt => "sqrt",
            Self::Cbrt => "cbrt",
            Self::Abs => "abs",
        }
    }

    fn apply(self, v: f64) -> f64 {
        match self {
            Self::Sin => v.sin(),
            Self::Cos => v.cos(),
            Self::Tan => v.tan(),
            Self::Asin => v.asin(),
            Self::Acos => v.acos(),
            Self::Atan => v.atan(),
            Self::Sinh => v.sinh(),
            Self::Cosh => v.cosh(),
            Self::Tanh => v.tanh(),
            Self::Exp => v.exp(),
            Self::Ln => v.ln(),
            Self::Log10 => v.log10(),
            Self::Log2 => v.log2(),
            Self::Sqrt => v.sqrt(),
            Self::Cbrt => v.cbrt(),
            Self::Abs => v.abs(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum BinOp {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
}

impl BinOp {
    /// Binding strength; unary minus sits between `Mul` and `Pow`.
    pub(crate) fn precedence(self) -> u8 {
        match self {
            Self::Add | Self::Sub => 1,
            Self::Mul | Self::Div => 2,
            Self::Pow => 4,
        }
    }

    pub(crate) fn is_right_assoc(self) -> bool {
        self == Self::Pow
    }

    fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Sub => '-',
            Self::Mul => '*',
            Self::Div => '/',
            Self::Pow => '^',
        }
    }
}

pub(crate) const NEG_PRECEDENCE: u8 = 3;

#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Node {
    Const(f64),
    Var,
    Neg(Box<Node>),
    Binary(BinOp, Box<Node>, Box<Node>),
    Call(Func, Box<Node>),
}

impl Node {
    pub(crate) fn eval(&self, x: f64) -> f64 {
        match self {
            Self::Const(c) => *c,
            Self::Var => x,
            Self::Neg(inner) => -inner.eval(x),
            Self::Call(func, arg) => func.apply(arg.eval(x)),
            Self::Binary(op, lhs, rhs) => {
                let (l, r) = (lhs.eval(x), rhs.eval(x));
                match op {
                    BinOp::Add => l + r,
                    BinOp::Sub => l - r,
                    BinOp::Mul => l * r,
                    BinOp::Div => l / r,
                    BinOp::Pow => l.powf(r),
                }
            }
        }
    }

    /// Writes the node fully parenthesized, naming the variable `var`.
    pub(crate) fn write(&self, f: &mut fmt::Formatter<'_>, var: &str) -> fmt::Result {
        match self {
            Self::Const(c) => write!(f, "{c}"),
            Self::Var => f.write_str(var),
            Self::Neg(inner) => {
                f.write_str("(-")?;
                inner.write(f, var)?;
                f.write_str(")")
            }
            Self::Call(func, arg) => {
                write!(f, "{}(", func.name())?;
                arg.write(f, var)?;
                f.write_str(")")
            }
            Self::Binary(op, lhs, rhs) => {
                f.write_str("(")?;
                lhs.write(f, var)?;
                write!(f, " {} ", op.symbol())?;
                rhs.write(f, var)?;
                f.write_str(")")
            }
        }
    }
}
