use std::fmt;

use crate::error::{ExprError, ParseError, Result};
use crate::symbols::Symbols;
use crate::tokenizer::{OperatorSet, Token, Tokenizer};

/// One element of a postfix sequence, classified against the symbol tables
/// at the time the sequence was built.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum RpnToken {
    Number(String),
    Variable(String),
    Operator(String),
    /// Function name as written in the expression
    Function(String),
    /// Marks where the arguments of the following function call begin
    ParamsStart,
}

impl RpnToken {
    pub fn as_str(&self) -> &str {
        match self {
            RpnToken::Number(s) | RpnToken::Variable(s)
                | RpnToken::Operator(s) | RpnToken::Function(s) => s,
            RpnToken::ParamsStart => "(",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Rpn(pub Vec<RpnToken>);

impl Rpn {
    pub fn iter(&self) -> std::slice::Iter<'_, RpnToken> {
        self.0.iter()
    }
}

impl std::ops::Index<usize> for Rpn {
    type Output = RpnToken;
    fn index(&self, idx: usize) -> &RpnToken {
        &self.0[idx]
    }
}

impl fmt::Display for Rpn {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let tokens = self.iter().map(RpnToken::as_str).collect::<Vec<_>>();
        write!(f, "{}", tokens.join(" "))
    }
}

pub struct ShuntingParser;

impl ShuntingParser {
    /// Numbers are read with '.' as decimal separator, use `parse` with a
    /// configured `Tokenizer` for anything else.
    pub fn parse_str<T, C>(expr: &str, symbols: &Symbols<T, C>) -> Result<Rpn> {
        Self::parse(&mut Tokenizer::new(expr, symbols.operators()), symbols)
    }

    pub fn parse<T, C, S>(lex: &mut Tokenizer<'_, S>, symbols: &Symbols<T, C>) -> Result<Rpn>
    where
        S: OperatorSet + ?Sized,
    {
        let mut out = Vec::new();
        let mut stack: Vec<Token> = Vec::new();
        let mut last_function = None;
        let mut prev = None;

        while let Some(token) = lex.next() {
            let token = token?;
            match token {
                Token::Number(num) => out.push(RpnToken::Number(num.to_string())),
                Token::Ident(id) if symbols.variable(id).is_some() => {
                    out.push(RpnToken::Variable(id.to_string()))
                }
                Token::Ident(id) => {
                    if symbols.function(id).is_some() {
                        last_function = Some(id);
                    }
                    // unknown names wait on the stack, they fail if they
                    // ever reach the output
                    stack.push(token);
                }
                Token::Comma => {
                    Self::pop_until_oparen(&mut stack, &mut out, symbols)?;
                    if stack.is_empty() {
                        let function = last_function.map(str::to_string);
                        return Err(ParseError::MisplacedComma(function).into());
                    }
                }
                Token::Op(sym) => {
                    let incoming = symbols.operator(sym)
                        .ok_or_else(|| ParseError::UnknownSymbol(sym.to_string()))?;
                    while let Some(&Token::Op(top)) = stack.last() {
                        match symbols.operator(top) {
                            Some(op) if op.yields_to(incoming) => {
                                out.push(RpnToken::Operator(top.to_string()));
                                stack.pop();
                            }
                            _ => break,
                        }
                    }
                    stack.push(token);
                }
                Token::OParen => {
                    match prev {
                        Some(Token::Number(_)) => {
                            return Err(ExprError::MissingOperator { pos: lex.pos() });
                        }
                        // the call's arguments start here
                        Some(Token::Ident(id)) if symbols.function(id).is_some() => {
                            out.push(RpnToken::ParamsStart)
                        }
                        _ => (),
                    }
                    stack.push(token);
                }
                Token::CParen => {
                    Self::pop_until_oparen(&mut stack, &mut out, symbols)?;
                    if stack.pop().is_none() {
                        return Err(ParseError::MissingOParen.into());
                    }
                    // end of grouping: check if this is a function call
                    if let Some(&Token::Ident(id)) = stack.last() {
                        if symbols.function(id).is_some() {
                            out.push(RpnToken::Function(id.to_string()));
                            stack.pop();
                        }
                    }
                }
            }
            prev = Some(token);
        }

        while let Some(top) = stack.pop() {
            match top {
                Token::OParen | Token::CParen => return Err(ParseError::MissingCParen.into()),
                Token::Op(op) if symbols.operator(op).is_some() => {
                    out.push(RpnToken::Operator(op.to_string()))
                }
                other => return Err(ParseError::UnknownSymbol(other.to_string()).into()),
            }
        }
        debug!("rpn: {}", Rpn(out.clone()));
        Ok(Rpn(out))
    }

    // Move stacked operators and functions to the output until the top of
    // the stack is an opening paren or the stack runs out.
    fn pop_until_oparen<T, C>(stack: &mut Vec<Token>, out: &mut Vec<RpnToken>,
                              symbols: &Symbols<T, C>) -> Result<()> {
        while let Some(&top) = stack.last() {
            let token = match top {
                Token::OParen => break,
                Token::Op(op) => RpnToken::Operator(op.to_string()),
                Token::Ident(id) if symbols.function(id).is_some() => {
                    RpnToken::Function(id.to_string())
                }
                other => return Err(ParseError::UnknownSymbol(other.to_string()).into()),
            };
            out.push(token);
            stack.pop();
        }
        Ok(())
    }
}
