/// The evaluator module executes AST nodes and computes results.
///
/// The evaluator traverses the AST and computes the integer value of each
/// statement. It is one of the two terminal consumers of a parsed program;
/// the lowering backend is the other, and both apply identical operator
/// semantics in identical traversal order.
///
/// # Responsibilities
/// - Evaluates AST nodes with wrapping two's-complement arithmetic.
/// - Reports division by zero, the single runtime failure of the language.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces tokens one at
/// a time, each corresponding to a meaningful language element: an integer
/// literal, one of the four operators, or a semicolon. This is the first
/// stage of compilation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens, lazily, on demand.
/// - Reports the byte offset of every token for diagnostics and tracing.
/// - Reports lexical errors for unrecognized characters and oversized
///   literals.
pub mod lexer;
/// The lowering module translates AST nodes into LLVM IR.
///
/// Lowering is the code-generation twin of the evaluator: the same traversal
/// over the same tree, but instead of computing values it emits one LLVM
/// instruction per node into a per-run module, so that executing the emitted
/// program reproduces the evaluator's results exactly.
///
/// # Responsibilities
/// - Emits a constant per number leaf and one arithmetic instruction per
///   binary node, children first.
/// - Builds a `main` function printing each statement's result in source
///   order.
/// - Verifies the generated module and renders it as textual IR.
pub mod lowering;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser pulls tokens from the lexer one lookahead at a time and
/// constructs an AST per statement, enforcing operator precedence through
/// grammar layering rather than precedence tables.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes.
/// - Validates the grammar, reporting errors with byte offsets.
/// - Requires a terminating semicolon after every statement.
pub mod parser;
