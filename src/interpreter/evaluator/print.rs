use crate::{
    ast::Expr,
    interpreter::evaluator::core::{Context, EvalResult},
};

/// Destination for program output.
///
/// Output is appended in evaluation order and never reordered.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum PrintHandler {
    /// Writes straight to standard output.
    #[default]
    Stdout,
    /// Captures output in memory, for tests and embedders.
    Buffer(String),
}

impl PrintHandler {
    /// Creates an empty capturing handler.
    #[must_use]
    pub const fn buffer() -> Self {
        Self::Buffer(String::new())
    }

    /// Appends text without a line terminator.
    pub fn print(&mut self, text: &str) {
        match self {
            Self::Stdout => print!("{text}"),
            Self::Buffer(buf) => buf.push_str(text),
        }
    }

    /// Appends a line terminator.
    pub fn newline(&mut self) {
        match self {
            Self::Stdout => println!(),
            Self::Buffer(buf) => buf.push('\n'),
        }
    }

    /// Returns the captured output; always empty for `Stdout`.
    #[must_use]
    pub fn captured(&self) -> &str {
        match self {
            Self::Stdout => "",
            Self::Buffer(buf) => buf,
        }
    }
}

impl Context<'_> {
    /// Evaluates `print <operand>`.
    ///
    /// The `space` and `newline` primitives print themselves; any other
    /// operand is evaluated and its decimal form is printed. Nothing else is
    /// added around the printed text.
    ///
    /// # Errors
    /// Propagates evaluation errors of the operand, and returns
    /// `MissingValue` if the operand yields no value.
    pub fn eval_print(&mut self, operand: &Expr) -> EvalResult<()> {
        match operand {
            Expr::Space => self.output.print(" "),
            Expr::NewLine => self.output.newline(),
            _ => {
                let value = self.eval_value(operand, "the print operand")?;
                self.output.print(&value.to_string());
            },
        }
        Ok(())
    }
}
