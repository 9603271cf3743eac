/// The declared type of a typed identifier.
///
/// Types are advisory at runtime: every value is an `i64`. The only check
/// that consults a declared type is the `bool` local initializer check, which
/// requires the initial value to be exactly `0` or `1`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Type {
    /// `int`
    Int,
    /// `bool`
    Bool,
    /// `unit`
    Unit,
}

impl std::fmt::Display for Type {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Int => "int",
            Self::Bool => "bool",
            Self::Unit => "unit",
        };
        write!(f, "{name}")
    }
}

/// An identifier together with its declared type, e.g. `int n`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypedIdentifier {
    /// The declared type.
    pub ty:   Type,
    /// The identifier.
    pub name: String,
}

impl TypedIdentifier {
    /// Creates a typed identifier.
    ///
    /// ## Example
    /// ```
    /// use simplang::ast::{Type, TypedIdentifier};
    ///
    /// let param = TypedIdentifier::new(Type::Int, "n");
    /// assert_eq!(param.name, "n");
    /// assert_eq!(param.ty, Type::Int);
    /// ```
    #[must_use]
    pub fn new(ty: Type, name: impl Into<String>) -> Self {
        Self { ty,
               name: name.into() }
    }
}

/// A whole program: the ordered list of top-level declarations.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Program {
    /// Declarations in source order.
    pub declarations: Vec<Declaration>,
}

/// A top-level function declaration.
///
/// In source, the first typed identifier of a declaration names the function
/// and its return type; the parser stores it as `signature`, so `params` only
/// holds the actual parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Declaration {
    /// The function's own name and return type.
    pub signature: TypedIdentifier,
    /// The parameters, in declaration order.
    pub params:    Vec<TypedIdentifier>,
    /// The function body.
    pub body:      Body,
    /// Line number in the source code.
    pub line:      usize,
}

impl Declaration {
    /// The declared function name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.signature.name
    }
}

/// A local variable declaration at the top of a body, with an optional
/// initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LocalDeclaration {
    /// The declared variable.
    pub var:         TypedIdentifier,
    /// The initial value; locals without one start at `0`.
    pub initializer: Option<Expr>,
}

/// A function body: local declarations followed by the tail expressions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Body {
    /// Local declarations, evaluated in order.
    pub locals: Vec<LocalDeclaration>,
    /// Tail expressions; the last value is the body's result.
    pub tail:   Vec<Expr>,
}

/// A braced sequence of expressions.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Block {
    /// Expressions inside the block; the last value is the block's result.
    pub exprs: Vec<Expr>,
}

impl From<Vec<Expr>> for Block {
    fn from(exprs: Vec<Expr>) -> Self {
        Self { exprs }
    }
}

/// An abstract syntax tree node representing an expression.
///
/// Every construct of the language is an expression, including loops and the
/// print primitives; those simply produce no value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
    /// `name := expr`
    Assign {
        /// The variable being written.
        name:  String,
        /// The value being assigned.
        value: Box<Self>,
    },
    /// `(lhs op rhs)`
    BinaryOp {
        /// The operator.
        op:    BinaryOperator,
        /// Left operand.
        left:  Box<Self>,
        /// Right operand.
        right: Box<Self>,
    },
    /// `name(args...)`
    Invoke {
        /// Name of the callee.
        name:      String,
        /// Argument expressions, evaluated left to right.
        arguments: Vec<Self>,
    },
    /// `{ ... }`
    Block(Block),
    /// `if cond then { ... } else { ... }`
    If {
        /// The condition.
        condition:   Box<Self>,
        /// Taken when the condition is strictly positive.
        then_branch: Block,
        /// Taken otherwise.
        else_branch: Block,
    },
    /// `while cond do { ... }`
    While {
        /// The loop condition.
        condition: Box<Self>,
        /// The loop body.
        body:      Block,
    },
    /// `repeat { ... } until cond`
    Repeat {
        /// The loop body.
        body:      Block,
        /// The exit condition.
        condition: Box<Self>,
    },
    /// `print expr`
    Print(Box<Self>),
    /// `space`
    Space,
    /// `newline`
    NewLine,
    /// `skip`
    Skip,
    /// `true` or `false`
    Bool(bool),
    /// An integer literal.
    Integer(i64),
    /// Reference to a variable by name.
    Identifier(String),
}

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Equal to (`==`)
    Equal,
    /// Less than (`<`)
    Less,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than (`>`)
    Greater,
    /// Greater than or equal (`>=`)
    GreaterEqual,
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
    /// Logical and (`&`)
    And,
    /// Logical or (`|`)
    Or,
    /// Logical exclusive or (`^`)
    Xor,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{
            Add, And, Div, Equal, Greater, GreaterEqual, Less, LessEqual, Mul, Or, Sub, Xor,
        };
        let operator = match self {
            Equal => "==",
            Less => "<",
            LessEqual => "<=",
            Greater => ">",
            GreaterEqual => ">=",
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            And => "&",
            Or => "|",
            Xor => "^",
        };
        write!(f, "{operator}")
    }
}
