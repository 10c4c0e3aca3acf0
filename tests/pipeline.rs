use std::fs;

use arithc::{
    ast::{BinaryOperator, Expr, Program},
    compiler::{
        evaluator::evaluate,
        lexer::{Lexer, Token},
        parser::Parser,
    },
    error::LexError,
    evaluate_source,
    trace::Trace,
};
use walkdir::WalkDir;

fn assert_results(src: &str, expected: &[i64]) {
    match evaluate_source(src, None) {
        Ok(results) => assert_eq!(results, expected, "wrong results for {src:?}"),
        Err(e) => panic!("Script failed: {e}"),
    }
}

fn assert_failure(src: &str, needle: &str) {
    match evaluate_source(src, None) {
        Ok(results) => panic!("Script succeeded with {results:?} but was expected to fail"),
        Err(e) => {
            let message = e.to_string();
            assert!(message.contains(needle),
                    "unexpected error for {src:?}: {message}");
        },
    }
}

#[test]
fn multiplication_binds_tighter_than_addition() {
    assert_results("2+3*4;", &[14]);
    assert_results("2*3+4;", &[10]);
    assert_results("10-4/2;", &[8]);
}

#[test]
fn same_precedence_operators_fold_left() {
    assert_results("10-3-2;", &[5]);
    assert_results("100/5/2;", &[10]);
    assert_results("2*3*4;", &[24]);
}

#[test]
fn statement_results_keep_source_order() {
    assert_results("1+1;2*2;", &[2, 4]);
    assert_results("9;8;7;", &[9, 8, 7]);
}

#[test]
fn empty_source_is_a_valid_program() {
    assert_results("", &[]);
    assert_results(" \t\n", &[]);
}

#[test]
fn whitespace_between_tokens_is_insignificant() {
    assert_results("  2 +\t3 * 4 ;\n", &[14]);
    assert_results("1\n+\n1\n;", &[2]);
}

#[test]
fn division_truncates_toward_zero() {
    assert_results("7/2;", &[3]);
    assert_results("9/10;", &[0]);
}

#[test]
fn division_by_zero_fails_the_whole_run() {
    assert_failure("5/0;1+1;", "Division by zero");
}

#[test]
fn dangling_operator_is_rejected() {
    assert_failure("2+;", "Unexpected token");
    assert_failure("2*;", "Unexpected token");
    assert_failure(";", "Unexpected token");
}

#[test]
fn missing_terminator_is_rejected() {
    assert_failure("2+3", "Expected ';'");
}

#[test]
fn unknown_character_is_rejected() {
    assert_failure("2$3;", "Unexpected character");
}

#[test]
fn oversized_literal_is_rejected() {
    assert_failure("99999999999999999999;", "does not fit");
}

#[test]
fn addition_over_multiplication_parses_into_expected_tree() {
    let program = Parser::parse("2+3*4;", None).unwrap();

    let expected = Expr::BinaryOp { left:   Box::new(Expr::Number { value: 2 }),
                                    op:     BinaryOperator::Add,
                                    right:  Box::new(Expr::BinaryOp {
                                        left:   Box::new(Expr::Number { value: 3 }),
                                        op:     BinaryOperator::Mul,
                                        right:  Box::new(Expr::Number { value: 4 }),
                                        offset: 3,
                                    }),
                                    offset: 1, };
    assert_eq!(program, Program { statements: vec![expected] });
}

#[test]
fn subtraction_builds_a_left_leaning_tree() {
    let program = Parser::parse("10-3-2;", None).unwrap();

    let expected = Expr::BinaryOp { left:   Box::new(Expr::BinaryOp {
                                        left:   Box::new(Expr::Number { value: 10 }),
                                        op:     BinaryOperator::Sub,
                                        right:  Box::new(Expr::Number { value: 3 }),
                                        offset: 2,
                                    }),
                                    op:     BinaryOperator::Sub,
                                    right:  Box::new(Expr::Number { value: 2 }),
                                    offset: 4, };
    assert_eq!(program, Program { statements: vec![expected] });
}

#[test]
fn end_token_is_idempotent() {
    let mut lexer = Lexer::new("7;");
    assert_eq!(lexer.next_token().unwrap(), Token::Number(7));
    assert_eq!(lexer.next_token().unwrap(), Token::Semicolon);
    for _ in 0..4 {
        assert_eq!(lexer.next_token().unwrap(), Token::End);
    }
}

#[test]
fn lex_errors_carry_character_and_offset() {
    let mut lexer = Lexer::new("1 ?");
    assert_eq!(lexer.next_token().unwrap(), Token::Number(1));
    match lexer.next_token() {
        Err(LexError::UnexpectedCharacter { character, offset }) => {
            assert_eq!(character, '?');
            assert_eq!(offset, 2);
        },
        other => panic!("expected a lex error, got {other:?}"),
    }
}

#[test]
fn leading_zeros_are_allowed() {
    assert_results("007;", &[7]);
}

#[test]
fn evaluation_wraps_on_overflow() {
    let program = Parser::parse("9223372036854775807+1;", None).unwrap();
    assert_eq!(evaluate(&program.statements[0]).unwrap(), i64::MIN);
}

#[test]
fn expression_trees_render_indented() {
    let program = Parser::parse("10-3-2;", None).unwrap();
    let rendered = program.statements[0].to_string();
    let expected = "Operator -\n  Operator -\n    Number 10\n    Number 3\n  Number 2\n";
    assert_eq!(rendered, expected);
}

#[test]
fn trace_sink_records_one_line_per_token() {
    let path = std::env::temp_dir().join(format!("arithc-trace-{}.log", std::process::id()));
    let _ = fs::remove_file(&path);

    let mut trace = Trace::open(&path).unwrap();
    Parser::parse("1+2;", Some(&mut trace)).unwrap();
    drop(trace);

    let log = fs::read_to_string(&path).unwrap();
    assert_eq!(log.lines().count(), 5, "number, '+', number, ';', end");
    assert!(log.contains("token number 1 at offset 0"));
    assert!(log.contains("token end of input at offset 4"));

    let _ = fs::remove_file(&path);
}

#[test]
fn demo_programs_produce_their_recorded_output() {
    let mut count = 0;

    for entry in WalkDir::new("demos").into_iter()
                                      .filter_map(Result::ok)
                                      .filter(|e| {
                                          e.path().extension().is_some_and(|ext| ext == "calc")
                                      })
    {
        let path = entry.path();
        let source =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));
        let expected = fs::read_to_string(path.with_extension("out")).unwrap_or_else(|e| {
            panic!("Failed to read the expected output for {path:?}: {e}")
        });

        let results = match evaluate_source(&source, None) {
            Ok(results) => results,
            Err(e) => panic!("Demo {path:?} failed:\n{source}\nError: {e}"),
        };
        let printed: String = results.iter().map(|r| format!("{r}\n")).collect();
        assert_eq!(printed, expected, "wrong output for {path:?}");
        count += 1;
    }

    assert!(count > 0, "No demo programs found in demos/");
}
