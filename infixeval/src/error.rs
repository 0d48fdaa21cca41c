use thiserror::Error;

pub type Result<T> = std::result::Result<T, ExprError>;

/// Grouping problems found while converting infix into RPN.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ParseError {
    #[error("Mismatched parentheses")]
    MissingOParen,
    #[error("Mismatched parentheses")]
    MissingCParen,
    #[error("Parse error for function '{}'", .0.as_deref().unwrap_or("null"))]
    MisplacedComma(Option<String>),
    #[error("Unknown operator or function: {0}")]
    UnknownSymbol(String),
}

/// Stack-depth problems found while checking an RPN sequence.
#[derive(Clone, Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("Too many operators or functions at: {0}")]
    TooManyOperators(String),
    #[error("Too many numbers or variables")]
    TooManyOperands,
    #[error("Empty expression")]
    Empty,
}

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ExprError {
    #[error("Unknown operator '{token}' at position {pos}")]
    UnknownOperator { token: String, pos: usize },
    #[error("Invalid number '{literal}': {reason}")]
    NumberFormat { literal: String, reason: String },
    #[error(transparent)]
    Structural(#[from] ParseError),
    #[error("Missing operator at character position {pos}")]
    MissingOperator { pos: usize },
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("Function {function} expected {expected} parameters, got {got}")]
    Arity { function: String, expected: usize, got: usize },
    #[error("{0}")]
    Domain(String),
}

impl ExprError {
    /// Failure raised from inside an operator or function implementation.
    pub fn domain(msg: impl Into<String>) -> ExprError {
        ExprError::Domain(msg.into())
    }

    pub fn number_format(literal: &str, reason: impl ToString) -> ExprError {
        ExprError::NumberFormat { literal: literal.to_string(), reason: reason.to_string() }
    }
}
