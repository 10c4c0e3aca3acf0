use crate::{
    ast::{BinaryOperator, Expr, Program},
    error::EvalError,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// [`EvalError`] describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates a single expression tree to its integer value.
///
/// A number leaf returns its payload. A binary node evaluates its left child,
/// then its right child, then applies the operator. Arithmetic wraps in
/// two's complement so that the result is bit-identical to executing the
/// instructions the lowering backend emits for the same tree; division
/// truncates toward zero.
///
/// # Errors
/// [`EvalError::DivisionByZero`] when the right operand of a division is
/// zero. There are no other failure modes.
///
/// # Example
/// ```
/// use arithc::compiler::{evaluator::evaluate, parser::Parser};
///
/// let program = Parser::parse("2+3*4;", None).unwrap();
/// assert_eq!(evaluate(&program.statements[0]).unwrap(), 14);
/// ```
pub fn evaluate(expr: &Expr) -> EvalResult<i64> {
    match expr {
        Expr::Number { value } => Ok(*value),

        Expr::BinaryOp { left, op, right, offset } => {
            let lhs = evaluate(left)?;
            let rhs = evaluate(right)?;

            match op {
                BinaryOperator::Add => Ok(lhs.wrapping_add(rhs)),
                BinaryOperator::Sub => Ok(lhs.wrapping_sub(rhs)),
                BinaryOperator::Mul => Ok(lhs.wrapping_mul(rhs)),
                BinaryOperator::Div => {
                    if rhs == 0 {
                        Err(EvalError::DivisionByZero { offset: *offset })
                    } else {
                        Ok(lhs.wrapping_div(rhs))
                    }
                },
            }
        },
    }
}

/// Evaluates every statement of a program in source order.
///
/// # Errors
/// Fails fast: the first [`EvalError`] aborts the run and no further
/// statements are evaluated.
pub fn evaluate_program(program: &Program) -> EvalResult<Vec<i64>> {
    let mut results = Vec::with_capacity(program.statements.len());
    for statement in &program.statements {
        results.push(evaluate(statement)?);
    }
    Ok(results)
}
