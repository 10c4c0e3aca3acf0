//! # arithc
//!
//! arithc is a minimal compiler front-end for a language of
//! semicolon-terminated arithmetic statements over signed 64-bit integers.
//! It lexes, parses, and then either interprets each statement or lowers the
//! whole program to LLVM IR; both consumers walk the same tree with the same
//! operator semantics, so they always agree on results.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc)]

use inkwell::context::Context as LlvmContext;

use crate::{
    ast::Program,
    compiler::{evaluator::evaluate_program, lowering::Lowering, parser::Parser},
    error::ParseError,
    trace::Trace,
};

/// Defines the structure of parsed code.
///
/// This module declares the `Expr` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser and traversed by the evaluator and the lowering backend.
///
/// # Responsibilities
/// - Defines the expression, operator, and program types.
/// - Renders expressions as indented trees for debugging.
pub mod ast;
/// The pipeline stages of the compiler front-end.
///
/// This module ties together lexing, parsing, evaluation, and LLVM lowering.
/// The lexer and parser form a strict pull pipeline with one token of
/// lookahead; the evaluator and the lowering backend are alternate terminal
/// consumers of the parsed program.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, lowering.
/// - Manages the flow of data and errors between phases.
pub mod compiler;
/// Provides unified error types for every pipeline stage.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// evaluating, or lowering code. Every error carries enough detail for a
/// human-readable diagnostic, including byte offsets into the source where
/// they apply.
///
/// # Responsibilities
/// - Defines one error enum per failure stage.
/// - Supports integration with standard error handling traits.
pub mod error;
/// The optional append-only trace sink.
///
/// This module provides the debug-log capability that the parser and the
/// lowering backend write diagnostic lines to when a sink is supplied. Its
/// absence or failure never changes a pipeline result.
///
/// # Responsibilities
/// - Opens the sink in append mode and writes lines synchronously.
/// - Downgrades write failures to a single stderr warning.
pub mod trace;

/// Parses `source` into a program.
///
/// This is the shared front half of both pipeline modes; the result can be
/// handed to the evaluator, the lowering backend, or printed as syntax trees.
///
/// # Errors
/// Returns the first lexing or parsing error encountered.
pub fn parse_source(source: &str, trace: Option<&mut Trace>) -> Result<Program, ParseError> {
    Parser::parse(source, trace)
}

/// Parses and evaluates all statements in the provided source string.
///
/// Statements are evaluated strictly in source order and their results are
/// returned in that order, one per statement.
///
/// # Errors
/// Returns an error if lexing, parsing, or evaluation fails; the first
/// failure aborts the whole run with no partial results.
///
/// # Examples
/// ```
/// // Precedence: `*` binds tighter than `+`.
/// let results = arithc::evaluate_source("2+3*4;", None).unwrap();
/// assert_eq!(results, vec![14]);
///
/// // Division by zero is the one runtime error.
/// assert!(arithc::evaluate_source("5/0;", None).is_err());
/// ```
pub fn evaluate_source(source: &str,
                       trace: Option<&mut Trace>)
                       -> Result<Vec<i64>, Box<dyn std::error::Error>> {
    let program = parse_source(source, trace)?;
    let results = evaluate_program(&program)?;
    Ok(results)
}

/// Parses and lowers the whole program, then returns its textual LLVM IR.
///
/// The emitted module defines a `main` that prints each statement's value in
/// source order, and is verified before being rendered.
///
/// # Errors
/// Returns an error if lexing or parsing fails, or if the generated module
/// fails LLVM verification.
///
/// # Examples
/// ```
/// let ir = arithc::lower_source("1+1;", None).unwrap();
/// assert!(ir.contains("printf"));
/// ```
pub fn lower_source(source: &str,
                    mut trace: Option<&mut Trace>)
                    -> Result<String, Box<dyn std::error::Error>> {
    let program = parse_source(source, trace.as_deref_mut())?;

    let ctx = LlvmContext::create();
    let mut lowering = Lowering::new(&ctx, trace);
    lowering.lower_program(&program);
    lowering.verify()?;

    Ok(lowering.ir())
}
