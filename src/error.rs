/// Evaluation errors.
///
/// Contains the error types that can be raised while the tree-walking
/// evaluator executes a program. Division by zero is the only runtime failure
/// the language admits.
pub mod eval_error;
/// Lexing errors.
///
/// Defines the error types that can occur while turning raw source text into
/// tokens: unrecognized characters and integer literals too large to
/// represent.
pub mod lex_error;
/// Lowering errors.
///
/// Contains the error types raised by the LLVM backend, currently only a
/// failed verification of the generated module.
pub mod lowering_error;
/// Parsing errors.
///
/// Defines all error types that can occur while the parser consumes the token
/// stream: tokens that do not match a grammar rule, unterminated statements,
/// and lexer failures surfacing mid-parse.
pub mod parse_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
pub use lowering_error::LoweringError;
pub use parse_error::ParseError;
