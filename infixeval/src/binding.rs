use crate::error::Result;
use crate::symbols::Symbols;

/// Ties the evaluator to a concrete numeric type.
///
/// A binding decides how literals become values, which context value is
/// threaded through every operator and function call, and which vocabulary
/// a fresh expression starts with.
pub trait Binding {
    type Value: Clone;
    type Context;

    const DECIMAL_SEPARATOR: char = '.';

    /// Convert a number literal as it appears in the expression.
    fn val(literal: &str, cx: &Self::Context) -> Result<Self::Value>;

    /// Applied to every variable read during evaluation.
    fn round(value: Self::Value, _cx: &Self::Context) -> Self::Value {
        value
    }

    /// Canonical form of a result, used by `Expression::eval_normalized`.
    fn normalize(value: Self::Value, _cx: &Self::Context) -> Self::Value {
        value
    }

    /// Register the baseline operators, functions and constants.
    fn install(_symbols: &mut Symbols<Self::Value, Self::Context>) {}
}
