use std::collections::HashMap;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::core::Value},
};

/// The variables of one call activation.
pub type Frame = HashMap<String, Value>;

/// A stack of call frames.
///
/// Scoping is flat: reads and writes only touch the top frame, there is no
/// lookup in the frames of callers.
#[derive(Debug, Default)]
pub struct EnvironmentStack {
    frames: Vec<Frame>,
}

impl EnvironmentStack {
    /// Creates an empty stack.
    #[must_use]
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    /// Pushes a frame for a new activation.
    pub fn push(&mut self, frame: Frame) {
        self.frames.push(frame);
    }

    /// Removes and returns the top frame.
    ///
    /// # Errors
    /// Returns `InternalError` if the stack is empty.
    pub fn pop(&mut self) -> EvalResult<Frame> {
        self.frames.pop().ok_or_else(empty_stack)
    }

    /// Returns the top frame.
    ///
    /// # Errors
    /// Returns `InternalError` if the stack is empty.
    pub fn current(&mut self) -> EvalResult<&mut Frame> {
        self.frames.last_mut().ok_or_else(empty_stack)
    }

    /// Reads a variable from the top frame.
    ///
    /// # Errors
    /// Returns `UndefinedVariable` if the name is not bound in the top frame,
    /// or `InternalError` if the stack is empty.
    ///
    /// # Example
    /// ```
    /// use simplang::{
    ///     error::RuntimeError,
    ///     interpreter::evaluator::environment::{EnvironmentStack, Frame},
    /// };
    ///
    /// let mut env = EnvironmentStack::new();
    /// env.push(Frame::from([("x".to_string(), 10)]));
    /// env.push(Frame::new());
    ///
    /// // Only the top frame is visible.
    /// assert_eq!(env.read("x"), Err(RuntimeError::UndefinedVariable("x".to_string())));
    ///
    /// env.pop().unwrap();
    /// assert_eq!(env.read("x"), Ok(10));
    /// ```
    pub fn read(&self, name: &str) -> EvalResult<Value> {
        let frame = self.frames.last().ok_or_else(empty_stack)?;
        frame.get(name)
             .copied()
             .ok_or_else(|| RuntimeError::UndefinedVariable(name.to_string()))
    }

    /// Binds or updates a variable in the top frame.
    ///
    /// Writing a name that is not bound yet creates it.
    ///
    /// # Errors
    /// Returns `InternalError` if the stack is empty.
    pub fn write(&mut self, name: &str, value: Value) -> EvalResult<()> {
        self.current()?.insert(name.to_string(), value);
        Ok(())
    }

    /// Returns the number of frames on the stack.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if no frame is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }
}

fn empty_stack() -> RuntimeError {
    RuntimeError::InternalError("empty stack".to_string())
}
