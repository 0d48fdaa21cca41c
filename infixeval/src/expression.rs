use std::cell::OnceCell;
use std::collections::HashMap;
use std::fmt;

use lexers::{is_ident_char, scan_number, Scanner};

use crate::binding::Binding;
use crate::error::Result;
use crate::parser::{Rpn, ShuntingParser};
use crate::rpneval;
use crate::symbols::{Function, Operator, Symbols};
use crate::tokenizer::Tokenizer;
use crate::validate::validate;

type Value<B> = <B as Binding>::Value;
type Context<B> = <B as Binding>::Context;

/// An infix expression bound to a numeric type.
///
/// The RPN form is computed on first use and kept until the source text
/// changes, which only happens when a variable is set to a sub-expression.
/// Setting a variable to a value keeps the cached RPN.
///
/// ```ignore
/// let mut e = Expression::<Float>::from("SQRT(a^2 + b^2)");
/// e.set_variable("a", 3.0).set_variable("b", 4.0);
/// assert_eq!(e.eval()?, 5.0);
/// ```
pub struct Expression<B: Binding> {
    source: String,
    context: Context<B>,
    symbols: Symbols<Value<B>, Context<B>>,
    rpn: OnceCell<Rpn>,
}

impl<B: Binding> Expression<B> {
    pub fn new(source: impl Into<String>, context: Context<B>) -> Self {
        let mut symbols = Symbols::new();
        B::install(&mut symbols);
        Expression { source: source.into(), context, symbols, rpn: OnceCell::new() }
    }

    pub fn source(&self) -> &str { &self.source }

    pub fn context(&self) -> &Context<B> { &self.context }

    pub fn set_context(&mut self, context: Context<B>) -> &mut Self {
        self.context = context;
        self
    }

    pub fn symbols(&self) -> &Symbols<Value<B>, Context<B>> { &self.symbols }

    /// Returns the operator previously registered under the same symbol.
    pub fn add_operator(&mut self, op: Operator<Value<B>, Context<B>>) -> Option<Operator<Value<B>, Context<B>>> {
        self.symbols.add_operator(op)
    }

    /// Returns the function previously registered under the same name.
    pub fn add_function(&mut self, func: Function<Value<B>, Context<B>>) -> Option<Function<Value<B>, Context<B>>> {
        self.symbols.add_function(func)
    }

    pub fn set_variable(&mut self, name: &str, value: Value<B>) -> &mut Self {
        self.symbols.set_variable(name, value);
        self
    }

    /// A number literal is converted and stored, anything else is spliced
    /// into the source in place of every whole-word occurrence of `name`.
    pub fn set_variable_str(&mut self, name: &str, text: &str) -> Result<&mut Self> {
        if is_literal(text, B::DECIMAL_SEPARATOR) {
            let value = B::val(text.trim(), &self.context)?;
            self.symbols.set_variable(name, value);
        } else {
            self.substitute(name, text);
        }
        Ok(self)
    }

    pub fn with(mut self, name: &str, value: Value<B>) -> Self {
        self.set_variable(name, value);
        self
    }

    pub fn with_str(mut self, name: &str, text: &str) -> Result<Self> {
        self.set_variable_str(name, text)?;
        Ok(self)
    }

    // the only place where the source text changes
    fn substitute(&mut self, name: &str, text: &str) {
        let replaced = replace_word(&self.source, name, &format!("({})", text));
        debug!("substitute {} => {}", name, replaced);
        if replaced != self.source {
            self.source = replaced;
            self.rpn = OnceCell::new();
        }
    }

    pub fn tokens(&self) -> Tokenizer<'_, HashMap<String, Operator<Value<B>, Context<B>>>> {
        Tokenizer::new(&self.source, self.symbols.operators())
            .with_decimal_separator(B::DECIMAL_SEPARATOR)
    }

    /// Cached, validated RPN of the current source.
    pub fn rpn(&self) -> Result<&Rpn> {
        if let Some(rpn) = self.rpn.get() {
            return Ok(rpn);
        }
        let rpn = ShuntingParser::parse(&mut self.tokens(), &self.symbols)?;
        validate(&rpn, &self.symbols)?;
        debug!("cached rpn for '{}': {}", self.source, rpn);
        Ok(self.rpn.get_or_init(|| rpn))
    }

    pub fn to_rpn(&self) -> Result<String> {
        Ok(self.rpn()?.to_string())
    }

    pub fn eval(&self) -> Result<Value<B>> {
        rpneval::eval::<B>(self.rpn()?, &self.symbols, &self.context)
    }

    pub fn eval_normalized(&self) -> Result<Value<B>> {
        Ok(B::normalize(self.eval()?, &self.context))
    }
}

impl<B: Binding> From<&str> for Expression<B>
where
    Context<B>: Default,
{
    fn from(source: &str) -> Self {
        Expression::new(source, <Context<B> as Default>::default())
    }
}

impl<B: Binding> fmt::Debug for Expression<B> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Expression")
            .field("source", &self.source)
            .field("rpn", &self.rpn.get().map(|rpn| rpn.to_string()))
            .finish()
    }
}

// an optionally negative number literal and nothing else
fn is_literal(text: &str, separator: char) -> bool {
    let mut s = Scanner::new(text.trim());
    s.accept('-');
    scan_number(&mut s, separator).is_some() && s.is_done()
}

// Replace 'word' where it isn't part of a longer identifier
fn replace_word(source: &str, word: &str, replacement: &str) -> String {
    if word.is_empty() {
        return source.to_string();
    }
    let mut out = String::with_capacity(source.len());
    let mut last = 0;
    for (idx, _) in source.match_indices(word) {
        let end = idx + word.len();
        let before = source[..idx].chars().next_back();
        let after = source[end..].chars().next();
        if before.is_some_and(is_ident_char) || after.is_some_and(is_ident_char) {
            continue;
        }
        out.push_str(&source[last..idx]);
        out.push_str(replacement);
        last = end;
    }
    out.push_str(&source[last..]);
    out
}

#[cfg(test)]
mod tests {
    use super::{is_literal, replace_word};

    #[test]
    fn whole_words_only() {
        assert_eq!(replace_word("3+a+aa+aaa", "a", "(1*x)"), "3+(1*x)+aa+aaa");
        assert_eq!(replace_word("3+a+aa+aaa", "aa", "(2*x)"), "3+a+(2*x)+aaa");
        assert_eq!(replace_word("a_1*a*a", "a", "y"), "a_1*y*y");
        assert_eq!(replace_word("max(x,x2)", "x", "(1)"), "max((1),x2)");
        assert_eq!(replace_word("y", "x", "(1)"), "y");
    }

    #[test]
    fn literals() {
        assert!(is_literal("2", '.'));
        assert!(is_literal(" -2.5e3 ", '.'));
        assert!(!is_literal("2*x", '.'));
        assert!(!is_literal("-", '.'));
        assert!(!is_literal("x", '.'));
    }
}
