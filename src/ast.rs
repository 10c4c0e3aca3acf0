/// Represents a binary operator.
///
/// The language has exactly four, all over 64-bit signed integers.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// An abstract syntax tree (AST) node representing one expression.
///
/// A node is either a number leaf or a binary operation whose two children it
/// exclusively owns; parsing builds the tree once and it is immutable
/// afterwards. Both consumers of the tree — the evaluator and the LLVM
/// lowering — traverse it children-first in the same order.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer literal.
    Number {
        /// The constant value.
        value: i64,
    },
    /// A binary operation (addition, subtraction, etc.).
    BinaryOp {
        /// Left operand.
        left:   Box<Self>,
        /// The operator.
        op:     BinaryOperator,
        /// Right operand.
        right:  Box<Self>,
        /// Byte offset of the operator token in the source, carried for
        /// diagnostics only.
        offset: usize,
    },
}

impl Expr {
    fn fmt_at(&self, f: &mut std::fmt::Formatter<'_>, depth: usize) -> std::fmt::Result {
        match self {
            Self::Number { value } => writeln!(f, "{:depth$}Number {value}", ""),
            Self::BinaryOp { left, op, right, .. } => {
                writeln!(f, "{:depth$}Operator {op}", "")?;
                left.fmt_at(f, depth + 2)?;
                right.fmt_at(f, depth + 2)
            },
        }
    }
}

/// Renders the node as an indented tree, one line per node, children indented
/// two spaces below their parent.
impl std::fmt::Display for Expr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.fmt_at(f, 0)
    }
}

/// An ordered sequence of top-level expressions, one per statement.
///
/// Insertion order is source order, and every consumer processes statements in
/// exactly that order.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// The parsed statements.
    pub statements: Vec<Expr>,
}
