#[derive(Debug)]
/// Represents all errors that can occur during evaluation.
pub enum EvalError {
    /// The right operand of a division evaluated to zero.
    DivisionByZero {
        /// Byte offset of the division operator in the source.
        offset: usize,
    },
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DivisionByZero { offset } => {
                write!(f, "Error at offset {offset}: Division by zero.")
            },
        }
    }
}

impl std::error::Error for EvalError {}
