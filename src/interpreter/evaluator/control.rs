use crate::{
    ast::{Block, Expr},
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::{Value, is_truthy},
    },
};

impl Context<'_> {
    /// Evaluates a sequence of expressions and returns the last result.
    ///
    /// An empty sequence yields no value, and so does a sequence whose last
    /// expression yields none.
    pub fn eval_sequence(&mut self, exprs: &[Expr]) -> EvalResult<Option<Value>> {
        let mut result = None;
        for expr in exprs {
            result = self.eval(expr)?;
        }
        Ok(result)
    }

    /// Evaluates a braced block.
    pub fn eval_block(&mut self, block: &Block) -> EvalResult<Option<Value>> {
        self.eval_sequence(&block.exprs)
    }

    /// Evaluates an `if` expression.
    ///
    /// The then-branch is taken only for a strictly positive condition; zero
    /// and negative values select the else-branch. The result is the result of
    /// the chosen branch.
    pub fn eval_if(&mut self,
                   condition: &Expr,
                   then_branch: &Block,
                   else_branch: &Block)
                   -> EvalResult<Option<Value>> {
        let condition = self.eval_value(condition, "the if condition")?;

        if is_truthy(condition) {
            self.eval_block(then_branch)
        } else {
            self.eval_block(else_branch)
        }
    }

    /// Evaluates a `while` loop.
    ///
    /// The condition is tested before each iteration with the same rule as
    /// `if`. Body results are discarded.
    pub fn eval_while(&mut self, condition: &Expr, body: &Block) -> EvalResult<()> {
        while is_truthy(self.eval_value(condition, "the while condition")?) {
            self.eval_block(body)?;
        }
        Ok(())
    }

    /// Evaluates a `repeat ... until` loop.
    ///
    /// The body runs at least once. The loop ends as soon as the condition is
    /// non-zero, so a negative condition also ends it.
    pub fn eval_repeat(&mut self, body: &Block, condition: &Expr) -> EvalResult<()> {
        loop {
            self.eval_block(body)?;
            if self.eval_value(condition, "the repeat condition")? != 0 {
                return Ok(());
            }
        }
    }
}
