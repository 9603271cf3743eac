use tracing::trace;

use crate::{
    ast::{Body, Declaration, Expr, LocalDeclaration, Type},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            environment::Frame,
        },
        value::core::Value,
    },
};

impl<'p> Context<'p> {
    /// Evaluates a call expression.
    ///
    /// The callee is looked up first, then the arguments are evaluated left to
    /// right in the caller's frame, and finally the call is made.
    ///
    /// # Errors
    /// - `UndefinedFunction` if the callee is not declared.
    /// - `MissingValue` if an argument yields no value.
    /// - `ArityMismatch` if the argument count differs from the parameter
    ///   count.
    /// - Any error raised by the callee's body.
    #[tracing::instrument(level = "trace", skip(self, arguments), fields(depth = self.depth()))]
    pub fn eval_invoke(&mut self, name: &str, arguments: &[Expr]) -> EvalResult<Option<Value>> {
        let function = self.registry.lookup(name)?;

        let arg_vals = arguments.iter()
                                .map(|arg| self.eval_value(arg, "a call argument"))
                                .collect::<EvalResult<Vec<_>>>()?;

        self.call(function, arg_vals)
    }

    /// Calls `function` with already evaluated arguments.
    ///
    /// Parameters are bound by position in a fresh frame. The frame is pushed
    /// for the duration of the body and popped on every exit path, so a
    /// failing body leaves the stack exactly as it was before the call.
    ///
    /// # Errors
    /// Returns `ArityMismatch` if the argument count differs from the
    /// parameter count, and propagates errors of the body.
    pub fn call(&mut self, function: &'p Declaration, arg_vals: Vec<Value>) -> EvalResult<Option<Value>> {
        if arg_vals.len() != function.params.len() {
            return Err(RuntimeError::ArityMismatch { expected: function.params.len(),
                                                     got:      arg_vals.len(), });
        }

        let frame = function.params
                            .iter()
                            .map(|param| param.name.clone())
                            .zip(arg_vals)
                            .collect::<Frame>();

        let mut scoped = self.scoped(frame);
        let result = scoped.eval_body(&function.body);
        trace!(name = function.name(), ?result, "call finished");
        result
    }

    /// Evaluates a function body in the current frame.
    ///
    /// Local declarations are processed in order: a local with an initializer
    /// is bound to the initializer's value, which is visible to every later
    /// initializer; a local without one starts at `0`. The tail sequence is
    /// evaluated afterwards and its last value is the body's result.
    ///
    /// # Errors
    /// - `TypeMismatch` if a `bool` local is initialized to something other
    ///   than `0` or `1`.
    /// - `MissingValue` if an initializer yields no value.
    /// - Any error raised while evaluating initializers or the tail.
    pub fn eval_body(&mut self, body: &Body) -> EvalResult<Option<Value>> {
        for local in &body.locals {
            let value = self.eval_local(local)?;
            self.env.write(&local.var.name, value)?;
        }

        self.eval_sequence(&body.tail)
    }

    /// Computes the initial value of a local declaration.
    fn eval_local(&mut self, local: &LocalDeclaration) -> EvalResult<Value> {
        let Some(initializer) = &local.initializer else {
            return Ok(0);
        };

        let value = self.eval_value(initializer, "a local initializer")?;
        if local.var.ty == Type::Bool && value != 0 && value != 1 {
            return Err(RuntimeError::TypeMismatch { name:     local.var.name.clone(),
                                                    declared: Type::Bool, });
        }
        Ok(value)
    }
}
