//! LLVM IR generation using Inkwell.

use inkwell::{
    builder::Builder,
    context::Context,
    module::{Linkage, Module},
    values::{FunctionValue, IntValue},
    AddressSpace,
};

use crate::{
    ast::{BinaryOperator, Expr, Program},
    error::LoweringError,
    trace::Trace,
};

/// Per-run LLVM code-generation context.
///
/// Owns the module and builder created from a caller-supplied LLVM context;
/// there is no process-wide state, so repeated runs are independent. Dropping
/// the value ends the run. Each binary instruction emitted is reported to the
/// optional trace sink.
pub struct Lowering<'ctx, 'trace> {
    ctx:     &'ctx Context,
    builder: Builder<'ctx>,
    module:  Module<'ctx>,
    printf:  FunctionValue<'ctx>,
    trace:   Option<&'trace mut Trace>,
}

impl<'ctx, 'trace> Lowering<'ctx, 'trace> {
    /// Creates a lowering context with an empty module and the `printf`
    /// declaration the emitted `main` prints through.
    #[must_use]
    pub fn new(ctx: &'ctx Context, trace: Option<&'trace mut Trace>) -> Self {
        let module = ctx.create_module("arithc");
        let builder = ctx.create_builder();

        // declare i32 @printf(i8*, ...)
        let i32_t = ctx.i32_type();
        let i8ptr_t = ctx.i8_type().ptr_type(AddressSpace::default());
        let printf_ty = i32_t.fn_type(&[i8ptr_t.into()], true);
        let printf = module.add_function("printf", printf_ty, Some(Linkage::External));

        Self { ctx, builder, module, printf, trace }
    }

    /// Emits the instructions for one expression and returns the handle to
    /// the value they produce.
    ///
    /// A number leaf becomes an `i64` constant; a binary node lowers its left
    /// child, then its right child, then emits one `add`/`sub`/`mul`/`sdiv`
    /// wired to the two child values — the same traversal order and operator
    /// mapping the evaluator applies. The builder must already be positioned
    /// inside a basic block; [`Lowering::lower_program`] and
    /// [`Lowering::lower_statement_function`] arrange this.
    pub fn lower_expr(&mut self, expr: &Expr) -> IntValue<'ctx> {
        let i64_t = self.ctx.i64_type();

        match expr {
            Expr::Number { value } => i64_t.const_int(*value as u64, true),

            Expr::BinaryOp { left, op, right, .. } => {
                let lhs = self.lower_expr(left);
                let rhs = self.lower_expr(right);

                if let Some(trace) = self.trace.as_deref_mut() {
                    trace.lowered(*op);
                }

                match op {
                    BinaryOperator::Add => self.builder.build_int_add(lhs, rhs, "add").unwrap(),
                    BinaryOperator::Sub => self.builder.build_int_sub(lhs, rhs, "sub").unwrap(),
                    BinaryOperator::Mul => self.builder.build_int_mul(lhs, rhs, "mul").unwrap(),
                    BinaryOperator::Div => {
                        self.builder.build_int_signed_div(lhs, rhs, "div").unwrap()
                    },
                }
            },
        }
    }

    /// Builds the whole-program `main` function.
    ///
    /// Statements are lowered in source order; each value is printed with
    /// `printf("%lld\n", value)`, so executing the emitted module prints
    /// exactly what interpret mode prints.
    pub fn lower_program(&mut self, program: &Program) {
        let i32_t = self.ctx.i32_type();
        let main_fn = self.module.add_function("main", i32_t.fn_type(&[], false), None);
        let entry = self.ctx.append_basic_block(main_fn, "entry");
        self.builder.position_at_end(entry);

        let fmt = self.builder
                      .build_global_string_ptr("%lld\n", ".fmt")
                      .unwrap()
                      .as_pointer_value();

        for statement in &program.statements {
            let value = self.lower_expr(statement);
            self.builder
                .build_call(self.printf, &[fmt.into(), value.into()], "")
                .unwrap();
        }

        self.builder.build_return(Some(&i32_t.const_zero())).unwrap();
    }

    /// Lowers one statement into a zero-argument function returning its
    /// value, so callers can execute statements individually.
    pub fn lower_statement_function(&mut self, name: &str, expr: &Expr) -> FunctionValue<'ctx> {
        let i64_t = self.ctx.i64_type();
        let function = self.module.add_function(name, i64_t.fn_type(&[], false), None);
        let entry = self.ctx.append_basic_block(function, "entry");
        self.builder.position_at_end(entry);

        let value = self.lower_expr(expr);
        self.builder.build_return(Some(&value)).unwrap();
        function
    }

    /// Runs LLVM verification over the generated module.
    ///
    /// # Errors
    /// [`LoweringError::InvalidModule`] with the verifier's diagnostic.
    pub fn verify(&self) -> Result<(), LoweringError> {
        self.module
            .verify()
            .map_err(|e| LoweringError::InvalidModule { message: e.to_string() })
    }

    /// Returns the textual LLVM IR of the generated module.
    #[must_use]
    pub fn ir(&self) -> String {
        self.module.print_to_string().to_string()
    }

    /// The generated module, for execution-engine consumers.
    #[must_use]
    pub const fn module(&self) -> &Module<'ctx> {
        &self.module
    }
}
