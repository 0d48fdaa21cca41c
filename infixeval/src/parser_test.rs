use crate::error::{ExprError, ParseError};
use crate::parser::{RpnToken, ShuntingParser};
use crate::symbols::{Arity, Assoc, Function, Operator, Symbols};
use crate::tokenizer::Tokenizer;

fn symbols() -> Symbols<f64, ()> {
    let mut symbols = Symbols::new();
    let ops = [("+", 20, Assoc::Left), ("-", 20, Assoc::Left), ("*", 30, Assoc::Left),
               ("/", 30, Assoc::Left), ("^", 40, Assoc::Right), ("&&", 4, Assoc::Right)];
    for (sym, prec, assoc) in ops.iter() {
        symbols.add_operator(Operator::new(sym, *prec, *assoc, |l: f64, r: f64, _: &()| Ok(l + r)));
    }
    symbols.add_function(Function::new("SIN", Arity::Fixed(1), |a: Vec<f64>, _: &()| Ok(a[0])));
    symbols.add_function(Function::new("MAX", Arity::Variadic, |a: Vec<f64>, _: &()| Ok(a[0])));
    symbols.set_variable("x", 1.0);
    symbols
}

fn rpn(expr: &str) -> String {
    ShuntingParser::parse_str(expr, &symbols()).unwrap().to_string()
}

fn parse_err(expr: &str) -> ExprError {
    ShuntingParser::parse_str(expr, &symbols()).unwrap_err()
}

#[test]
fn test_precedence() {
    assert_eq!(rpn("1+2"), "1 2 +");
    assert_eq!(rpn("1+2/4"), "1 2 4 / +");
    assert_eq!(rpn("(1+2)/4"), "1 2 + 4 /");
    assert_eq!(rpn("(1.98+2.87)/4.76"), "1.98 2.87 + 4.76 /");
    assert_eq!(rpn("3 + 4 * 2 / ( 1 - 5 ) ^ 2 ^ 3"), "3 4 2 * 1 5 - 2 3 ^ ^ / +");
    assert_eq!(rpn("1-2-3"), "1 2 - 3 -");
    assert_eq!(rpn("1&&0"), "1 0 &&");
}

#[test]
fn test_functions() {
    assert_eq!(rpn("SIN(23.6)"), "( 23.6 SIN");
    assert_eq!(rpn("MAX(-7,8)"), "( -7 8 MAX");
    assert_eq!(rpn("MAX(SIN(3.7),MAX(2.6,-8.0))"), "( ( 3.7 SIN ( 2.6 -8.0 MAX MAX");
    // names keep the spelling they were written with
    assert_eq!(rpn("2*max(x, 1)"), "2 ( x 1 max *");
    assert_eq!(rpn("max()"), "( max");
}

#[test]
fn test_token_kinds() {
    let rpn = ShuntingParser::parse_str("sin(x) + 2", &symbols()).unwrap();
    let expect = [
        RpnToken::ParamsStart,
        RpnToken::Variable("x".to_string()),
        RpnToken::Function("sin".to_string()),
        RpnToken::Number("2".to_string()),
        RpnToken::Operator("+".to_string()),
    ];
    for (i, token) in expect.iter().enumerate() {
        assert_eq!(rpn[i], *token);
    }
}

#[test]
fn test_grouping_after_operand() {
    assert_eq!(parse_err("2*3(5*3)"), ExprError::MissingOperator { pos: 4 });
    assert_eq!(parse_err("2*(3((5*3)))").to_string(), "Missing operator at character position 5");
    // plain groupings in sequence parse, the validator rejects them
    assert_eq!(rpn("(12)(18)"), "12 18");
}

#[test]
fn test_mismatched_parens() {
    assert_eq!(parse_err("(1+2"), ExprError::from(ParseError::MissingCParen));
    assert_eq!(parse_err("1+2)"), ExprError::from(ParseError::MissingOParen));
    assert_eq!(parse_err("(1+2").to_string(), "Mismatched parentheses");
}

#[test]
fn test_misplaced_comma() {
    assert_eq!(parse_err("1,2"), ExprError::from(ParseError::MisplacedComma(None)));
    assert_eq!(parse_err("1,2").to_string(), "Parse error for function 'null'");
    assert_eq!(parse_err("MAX(1),2").to_string(), "Parse error for function 'MAX'");
}

#[test]
fn test_unknown_names() {
    assert_eq!(parse_err("e2"), ExprError::from(ParseError::UnknownSymbol("e2".to_string())));
    assert_eq!(parse_err("e2").to_string(), "Unknown operator or function: e2");
    assert_eq!(parse_err("foo(1)"), ExprError::from(ParseError::UnknownSymbol("foo".to_string())));
    assert_eq!(parse_err("1 + y"), ExprError::from(ParseError::UnknownSymbol("y".to_string())));
}

#[test]
fn test_decimal_separator() {
    let symbols = symbols();
    let mut lex = Tokenizer::new("1,5*MAX(2,25 , x)", symbols.operators()).with_decimal_separator(',');
    let rpn = ShuntingParser::parse(&mut lex, &symbols).unwrap();
    assert_eq!(rpn.to_string(), "1,5 ( 2,25 x MAX *");
    // parse_str sticks to '.', the comma separates parameters
    assert_eq!(ShuntingParser::parse_str("MAX(1,5)", &symbols).unwrap().to_string(), "( 1 5 MAX");
}
