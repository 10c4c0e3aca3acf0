use arithc::{
    compiler::{evaluator::evaluate, lowering::Lowering, parser::Parser},
    lower_source,
};
use inkwell::{context::Context, execution_engine::JitFunction, OptimizationLevel};

#[test]
fn emitted_main_prints_each_statement_in_order() {
    let ir = lower_source("1+1;2*2;", None).unwrap();

    assert!(ir.contains("define i32 @main"));
    assert!(ir.contains("%lld"), "format string missing from {ir}");
    // One printf call per statement; the builder folds the all-constant
    // arithmetic, so the calls are the only instructions left besides `ret`.
    assert_eq!(ir.matches("call").count(), 2, "unexpected call count in {ir}");
}

#[test]
fn lowering_folds_to_the_evaluated_constants() {
    let ir = lower_source("2+3*4;", None).unwrap();
    assert!(ir.contains("i64 14"), "folded result missing from {ir}");

    let ir = lower_source("10-3-2;", None).unwrap();
    assert!(ir.contains("i64 5"), "folded result missing from {ir}");
}

#[test]
fn empty_program_lowers_to_a_verifiable_module() {
    let ir = lower_source("", None).unwrap();
    assert!(ir.contains("define i32 @main"));
    assert_eq!(ir.matches("call").count(), 0);
}

#[test]
fn executing_lowered_statements_reproduces_evaluator_results() {
    let sources = ["2+3*4;",
                   "10-3-2;",
                   "100/5/2;",
                   "7/2;",
                   "1+1;2*2;9-8;",
                   "0;1;9223372036854775807;"];

    for source in sources {
        let program = Parser::parse(source, None).unwrap();

        let ctx = Context::create();
        let mut lowering = Lowering::new(&ctx, None);
        for (i, statement) in program.statements.iter().enumerate() {
            lowering.lower_statement_function(&format!("stmt{i}"), statement);
        }
        lowering.verify().unwrap();

        let engine = lowering.module()
                             .create_jit_execution_engine(OptimizationLevel::None)
                             .unwrap();
        for (i, statement) in program.statements.iter().enumerate() {
            let compiled: JitFunction<unsafe extern "C" fn() -> i64> =
                unsafe { engine.get_function(&format!("stmt{i}")).unwrap() };
            let executed = unsafe { compiled.call() };
            assert_eq!(executed,
                       evaluate(statement).unwrap(),
                       "consumers disagree for {source:?}");
        }
    }
}
