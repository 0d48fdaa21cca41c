use crate::binding::Binding;
use crate::error::{ExprError, ParseError, ValidationError};
use crate::float::Float;
use crate::parser::{Rpn, RpnToken, ShuntingParser};
use crate::rpneval::eval;
use crate::symbols::Symbols;

macro_rules! fuzzy_eq {
    ($lhs:expr, $rhs:expr) => { assert!(($lhs - $rhs).abs() < 1.0e-10) }
}

fn symbols() -> Symbols<f64, ()> {
    let mut symbols = Symbols::new();
    Float::install(&mut symbols);
    symbols
}

fn run(expr: &str) -> Result<f64, ExprError> {
    let symbols = symbols();
    let rpn = ShuntingParser::parse_str(expr, &symbols)?;
    eval::<Float>(&rpn, &symbols, &())
}

#[test]
fn test_eval1() {
    fuzzy_eq!(run("3+4*2/(1-5)^2^3").unwrap(), 3.0001220703125);
    fuzzy_eq!(run("2^3^2").unwrap(), 512.0);
    fuzzy_eq!(run("(2^3)^2").unwrap(), 64.0);
}

#[test]
fn test_eval2() {
    fuzzy_eq!(run("(1+2)*((1+2)+1)").unwrap(), 12.0);
    fuzzy_eq!(run("(3+4)/2").unwrap(), 3.5);
    fuzzy_eq!(run("8%3").unwrap(), 2.0);
    fuzzy_eq!(run("4.2*1.9").unwrap(), 7.98);
}

#[test]
fn test_functions() {
    fuzzy_eq!(run("SIN(30)").unwrap(), 0.5);
    fuzzy_eq!(run("sin(30)^2 + cos(30)^2").unwrap(), 1.0);
    fuzzy_eq!(run("MAX(3,max(MAX(9.6,-4.2),Min(5,9)))").unwrap(), 9.6);
    fuzzy_eq!(run("MIN(0, SIN(SIN(COS(23.6))), 0-MAX(3,4,MAX(0,SIN(1))), 10)").unwrap(), -4.0);
    fuzzy_eq!(run("max(1,2,max(3,4,5,max(9,10,3,4,5),8),7)").unwrap(), 10.0);
}

#[test]
fn test_runtime_arity() {
    // evaluating unvalidated RPN still checks fixed arities
    let rpn = Rpn(vec![
        RpnToken::ParamsStart,
        RpnToken::Number("1".to_string()),
        RpnToken::Number("6".to_string()),
        RpnToken::Function("SIN".to_string()),
    ]);
    assert_eq!(eval::<Float>(&rpn, &symbols(), &()),
               Err(ExprError::Arity { function: "SIN".to_string(), expected: 1, got: 2 }));
}

#[test]
fn test_stack_errors() {
    let symbols = symbols();
    let rpn = Rpn(vec![RpnToken::Number("1".to_string()), RpnToken::Operator("+".to_string())]);
    assert_eq!(eval::<Float>(&rpn, &symbols, &()),
               Err(ExprError::Validation(ValidationError::TooManyOperators("+".to_string()))));
    assert_eq!(eval::<Float>(&Rpn(vec![]), &symbols, &()),
               Err(ExprError::Validation(ValidationError::Empty)));
    assert_eq!(run("12 18 2"), Err(ExprError::Validation(ValidationError::TooManyOperands)));
    let rpn = Rpn(vec![RpnToken::Variable("q".to_string())]);
    assert_eq!(eval::<Float>(&rpn, &symbols, &()),
               Err(ExprError::Structural(ParseError::UnknownSymbol("q".to_string()))));
}

#[test]
fn test_domain_errors() {
    assert_eq!(run("1/0"), Err(ExprError::Domain("Division by zero".to_string())));
    assert_eq!(run("5%0"), Err(ExprError::Domain("Division by zero".to_string())));
    assert_eq!(run("SQRT(-4)").unwrap_err().to_string(),
               "Argument to SQRT() function must not be negative");
    assert_eq!(run("max()").unwrap_err().to_string(), "MAX requires at least one parameter");
    assert_eq!(run("1234e2.3").unwrap_err(),
               ExprError::number_format("1234e2.3", "invalid float literal"));
}
