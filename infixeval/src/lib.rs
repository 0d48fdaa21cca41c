// Trace parsing and substitution to stderr when built with 'debug'
macro_rules! debug {
    ($($args:tt)*) => (if cfg!(feature="debug") { eprintln!($($args)*); })
}

mod error;
mod binding;
mod symbols;
mod tokenizer;
mod parser;
mod validate;
mod rpneval;
mod expression;
#[cfg(feature = "float")]
mod float;

pub use error::{ExprError, ParseError, Result, ValidationError};
pub use binding::Binding;
pub use symbols::{Arity, Assoc, BinaryOp, Callable, Function, Operator, Symbols};
pub use tokenizer::{OperatorSet, Token, Tokenizer};
pub use parser::{Rpn, RpnToken, ShuntingParser};
pub use validate::validate;
pub use rpneval::eval;
pub use expression::Expression;
#[cfg(feature = "float")]
pub use float::Float;

#[cfg(test)]
mod parser_test;
#[cfg(all(test, feature = "float"))]
mod rpneval_test;
