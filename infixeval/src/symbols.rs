use std::collections::HashMap;
use std::fmt;
use std::rc::Rc;

use crate::error::{ExprError, Result};
use crate::tokenizer::is_op_char;

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Assoc {
    Left,
    Right,
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Arity {
    Fixed(usize),
    /// Any number of parameters, the implementation checks its own minimum
    Variadic,
}

/// Evaluation rule of a binary operator.
pub trait BinaryOp<T, C> {
    fn eval(&self, lhs: T, rhs: T, cx: &C) -> Result<T>;
}

impl<T, C, F> BinaryOp<T, C> for F
where
    F: Fn(T, T, &C) -> Result<T>,
{
    fn eval(&self, lhs: T, rhs: T, cx: &C) -> Result<T> {
        self(lhs, rhs, cx)
    }
}

/// Evaluation rule of a function, parameters come in positional order.
pub trait Callable<T, C> {
    fn call(&self, args: Vec<T>, cx: &C) -> Result<T>;
}

impl<T, C, F> Callable<T, C> for F
where
    F: Fn(Vec<T>, &C) -> Result<T>,
{
    fn call(&self, args: Vec<T>, cx: &C) -> Result<T> {
        self(args, cx)
    }
}

pub struct Operator<T, C> {
    symbol: String,
    precedence: i32,
    assoc: Assoc,
    imp: Rc<dyn BinaryOp<T, C>>,
}

impl<T, C> Operator<T, C> {
    pub fn new<F>(symbol: &str, precedence: i32, assoc: Assoc, f: F) -> Self
    where
        F: Fn(T, T, &C) -> Result<T> + 'static,
    {
        Self::from_impl(symbol, precedence, assoc, f)
    }

    /// The symbol must be made of operator chars only (no letters, digits,
    /// '_', whitespace, parens or commas) or the tokenizer can't produce it.
    pub fn from_impl(symbol: &str, precedence: i32, assoc: Assoc,
                     imp: impl BinaryOp<T, C> + 'static) -> Self {
        debug_assert!(!symbol.is_empty() && symbol.chars().all(is_op_char),
                      "operator symbol '{}' can't be tokenized", symbol);
        Operator { symbol: symbol.to_string(), precedence, assoc, imp: Rc::new(imp) }
    }

    pub fn symbol(&self) -> &str { &self.symbol }
    pub fn precedence(&self) -> i32 { self.precedence }
    pub fn assoc(&self) -> Assoc { self.assoc }

    pub fn eval(&self, lhs: T, rhs: T, cx: &C) -> Result<T> {
        self.imp.eval(lhs, rhs, cx)
    }

    // true if this operator, sitting on the stack, must be emitted before
    // pushing 'incoming'
    pub(crate) fn yields_to(&self, incoming: &Operator<T, C>) -> bool {
        (incoming.assoc == Assoc::Left && incoming.precedence <= self.precedence)
            || incoming.precedence < self.precedence
    }
}

impl<T, C> Clone for Operator<T, C> {
    fn clone(&self) -> Self {
        Operator {
            symbol: self.symbol.clone(),
            precedence: self.precedence,
            assoc: self.assoc,
            imp: Rc::clone(&self.imp),
        }
    }
}

impl<T, C> fmt::Debug for Operator<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Operator")
            .field("symbol", &self.symbol)
            .field("precedence", &self.precedence)
            .field("assoc", &self.assoc)
            .finish()
    }
}

pub struct Function<T, C> {
    name: String,
    arity: Arity,
    imp: Rc<dyn Callable<T, C>>,
}

impl<T, C> Function<T, C> {
    pub fn new<F>(name: &str, arity: Arity, f: F) -> Self
    where
        F: Fn(Vec<T>, &C) -> Result<T> + 'static,
    {
        Self::from_impl(name, arity, f)
    }

    pub fn from_impl(name: &str, arity: Arity, imp: impl Callable<T, C> + 'static) -> Self {
        Function { name: canonical(name), arity, imp: Rc::new(imp) }
    }

    /// Upper-cased name
    pub fn name(&self) -> &str { &self.name }
    pub fn arity(&self) -> Arity { self.arity }

    /// Fixed arities are checked before the implementation sees `args`.
    pub fn call(&self, args: Vec<T>, cx: &C) -> Result<T> {
        if let Arity::Fixed(expected) = self.arity {
            if args.len() != expected {
                return Err(ExprError::Arity { function: self.name.clone(), expected, got: args.len() });
            }
        }
        self.imp.call(args, cx)
    }
}

impl<T, C> Clone for Function<T, C> {
    fn clone(&self) -> Self {
        Function { name: self.name.clone(), arity: self.arity, imp: Rc::clone(&self.imp) }
    }
}

impl<T, C> fmt::Debug for Function<T, C> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Function")
            .field("name", &self.name)
            .field("arity", &self.arity)
            .finish()
    }
}

fn canonical(name: &str) -> String {
    name.to_uppercase()
}

/// The vocabulary of an expression: operators by symbol, functions by
/// upper-cased name and variables by exact name.
pub struct Symbols<T, C> {
    operators: HashMap<String, Operator<T, C>>,
    functions: HashMap<String, Function<T, C>>,
    variables: HashMap<String, T>,
}

impl<T, C> Default for Symbols<T, C> {
    fn default() -> Self {
        Symbols {
            operators: HashMap::new(),
            functions: HashMap::new(),
            variables: HashMap::new(),
        }
    }
}

impl<T, C> Symbols<T, C> {
    pub fn new() -> Self { Self::default() }

    pub fn add_operator(&mut self, op: Operator<T, C>) -> Option<Operator<T, C>> {
        self.operators.insert(op.symbol.clone(), op)
    }

    pub fn add_function(&mut self, func: Function<T, C>) -> Option<Function<T, C>> {
        self.functions.insert(func.name.clone(), func)
    }

    pub fn set_variable(&mut self, name: &str, value: T) -> Option<T> {
        self.variables.insert(name.to_string(), value)
    }

    pub fn operator(&self, symbol: &str) -> Option<&Operator<T, C>> {
        self.operators.get(symbol)
    }

    pub fn function(&self, name: &str) -> Option<&Function<T, C>> {
        self.functions.get(&canonical(name))
    }

    pub fn variable(&self, name: &str) -> Option<&T> {
        self.variables.get(name)
    }

    pub fn operators(&self) -> &HashMap<String, Operator<T, C>> {
        &self.operators
    }
}
