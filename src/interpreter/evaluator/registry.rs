use std::collections::HashMap;

use tracing::debug;

use crate::{
    ast::{Declaration, Program},
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Maps function names to their declarations.
///
/// The registry borrows the declarations from the program, which outlives
/// every evaluation. It is filled once before evaluation starts and only read
/// afterwards.
#[derive(Debug, Default)]
pub struct FunctionRegistry<'p> {
    functions: HashMap<&'p str, &'p Declaration>,
}

impl<'p> FunctionRegistry<'p> {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self { functions: HashMap::new() }
    }

    /// Builds a registry holding every declaration of `program`.
    ///
    /// # Example
    /// ```
    /// use simplang::{interpreter::evaluator::registry::FunctionRegistry, parse_program};
    ///
    /// let program = parse_program("int one() { 1 } int main() { one() }").unwrap();
    /// let registry = FunctionRegistry::from_program(&program);
    ///
    /// assert_eq!(registry.len(), 2);
    /// assert!(registry.lookup("one").is_ok());
    /// assert!(registry.lookup("two").is_err());
    /// ```
    #[must_use]
    pub fn from_program(program: &'p Program) -> Self {
        let mut registry = Self::new();
        for declaration in &program.declarations {
            registry.register(declaration);
        }
        debug!(functions = registry.len(), "function registry built");
        registry
    }

    /// Registers a declaration under its name.
    ///
    /// A later declaration with the same name replaces the earlier one.
    pub fn register(&mut self, declaration: &'p Declaration) {
        if let Some(previous) = self.functions.insert(declaration.name(), declaration) {
            debug!(name = declaration.name(),
                   replaced_line = previous.line,
                   line = declaration.line,
                   "function declared twice; the later declaration wins");
        }
    }

    /// Looks up a function by name.
    ///
    /// # Errors
    /// Returns `UndefinedFunction` if no function of that name was
    /// registered.
    pub fn lookup(&self, name: &str) -> EvalResult<&'p Declaration> {
        self.functions
            .get(name)
            .copied()
            .ok_or_else(|| RuntimeError::UndefinedFunction(name.to_string()))
    }

    /// Returns the number of registered functions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.functions.len()
    }

    /// Returns `true` if no function is registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.functions.is_empty()
    }
}
