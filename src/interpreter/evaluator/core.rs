use tracing::debug;

use crate::{
    ast::{Expr, Program},
    error::RuntimeError,
    interpreter::{
        evaluator::{environment::EnvironmentStack, print::PrintHandler, registry::FunctionRegistry},
        value::core::{Value, from_bool, parse_argument},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Name of the function where execution starts.
pub const ENTRY_POINT: &str = "main";

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for one run of a program: the
/// function registry, the stack of call frames and the output sink.
///
/// ## Usage
///
/// A `Context` is created from a parsed [`Program`], which it borrows for its
/// whole lifetime, and is then started with [`Context::run`].
pub struct Context<'p> {
    pub(crate) registry: FunctionRegistry<'p>,
    pub(crate) env:      EnvironmentStack,
    pub(crate) output:   PrintHandler,
}

impl<'p> Context<'p> {
    /// Creates a context that prints to standard output.
    #[must_use]
    pub fn new(program: &'p Program) -> Self {
        Self::with_output(program, PrintHandler::Stdout)
    }

    /// Creates a context with the given output sink.
    #[must_use]
    pub fn with_output(program: &'p Program, output: PrintHandler) -> Self {
        Self { registry: FunctionRegistry::from_program(program),
               env: EnvironmentStack::new(),
               output }
    }

    /// Runs the program's `main` function.
    ///
    /// Each argument token is converted (`"true"` is `1`, `"false"` is `0`,
    /// anything else must be an integer) and bound to `main`'s parameters by
    /// position.
    ///
    /// # Errors
    /// - `MissingEntryPoint` if there is no `main`.
    /// - `InvalidArgument` if a token cannot be converted.
    /// - `ArityMismatch` if the token count differs from `main`'s parameter
    ///   count.
    /// - Any error raised while evaluating the program.
    ///
    /// # Returns
    /// The value of `main`'s body, or `None` if it yields no value.
    ///
    /// # Example
    /// ```
    /// use simplang::{
    ///     interpreter::evaluator::{core::Context, print::PrintHandler},
    ///     parse_program,
    /// };
    ///
    /// let program = parse_program("int main(int a, bool b) { print a; (a + b) }").unwrap();
    /// let mut context = Context::with_output(&program, PrintHandler::buffer());
    ///
    /// assert_eq!(context.run(&["41", "true"]), Ok(Some(42)));
    /// assert_eq!(context.output().captured(), "41");
    /// assert_eq!(context.depth(), 0);
    /// ```
    pub fn run<S: AsRef<str>>(&mut self, args: &[S]) -> EvalResult<Option<Value>> {
        let main = self.registry
                       .lookup(ENTRY_POINT)
                       .map_err(|_| RuntimeError::MissingEntryPoint)?;

        let arg_vals = args.iter()
                           .map(|arg| parse_argument(arg.as_ref()))
                           .collect::<EvalResult<Vec<_>>>()?;

        debug!(args = ?arg_vals, "running {ENTRY_POINT}");
        let result = self.call(main, arg_vals);
        debug!(?result, depth = self.depth(), "{ENTRY_POINT} finished");

        result
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the single dispatch point over expression kinds.
    ///
    /// # Returns
    /// `Some(Value)` for expressions that produce a value, or `None` for
    /// constructs that do not yield one (`while`, `repeat`, `print`, `space`,
    /// `newline`, and sequences ending in one of those).
    pub fn eval(&mut self, expr: &Expr) -> EvalResult<Option<Value>> {
        match expr {
            Expr::Assign { name, value } => self.eval_assign(name, value).map(Some),
            Expr::BinaryOp { op, left, right } => {
                let left = self.eval_value(left, "the left operand")?;
                let right = self.eval_value(right, "the right operand")?;
                Self::eval_binary(*op, left, right).map(Some)
            },
            Expr::Invoke { name, arguments } => self.eval_invoke(name, arguments),
            Expr::Block(block) => self.eval_block(block),
            Expr::If { condition,
                       then_branch,
                       else_branch, } => self.eval_if(condition, then_branch, else_branch),
            Expr::While { condition, body } => self.eval_while(condition, body).map(|()| None),
            Expr::Repeat { body, condition } => self.eval_repeat(body, condition).map(|()| None),
            Expr::Print(operand) => self.eval_print(operand).map(|()| None),
            Expr::Space => {
                self.output.print(" ");
                Ok(None)
            },
            Expr::NewLine => {
                self.output.newline();
                Ok(None)
            },
            Expr::Skip => Ok(Some(0)),
            Expr::Bool(b) => Ok(Some(from_bool(*b))),
            Expr::Integer(value) => Ok(Some(*value)),
            Expr::Identifier(name) => self.env.read(name).map(Some),
        }
    }

    /// Evaluates a subexpression and ensures that it produces a value.
    ///
    /// `what` names the position of the expression for the error message.
    ///
    /// # Errors
    /// Returns `MissingValue` when the expression yields nothing, and
    /// propagates its evaluation errors.
    pub fn eval_value(&mut self, expr: &Expr, what: &'static str) -> EvalResult<Value> {
        self.eval(expr)?.ok_or(RuntimeError::MissingValue(what))
    }

    /// Evaluates `name := value` and returns the assigned value.
    fn eval_assign(&mut self, name: &str, value: &Expr) -> EvalResult<Value> {
        let value = self.eval_value(value, "the assigned value")?;
        self.env.write(name, value)?;
        Ok(value)
    }

    /// Returns the number of active call frames.
    ///
    /// Zero whenever no run is in progress, including after a failed run.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.env.depth()
    }

    /// Returns the output sink.
    #[must_use]
    pub const fn output(&self) -> &PrintHandler {
        &self.output
    }

    /// Consumes the context and returns its output sink.
    #[must_use]
    pub fn into_output(self) -> PrintHandler {
        self.output
    }
}
