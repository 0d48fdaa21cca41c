use crate::binding::Binding;
use crate::error::{ExprError, Result};
use crate::symbols::{Arity, Assoc, Function, Operator, Symbols};

/// Native `f64` arithmetic. Booleans are 1.0 and 0.0, any non-zero value
/// is true. Trigonometric functions work in degrees.
pub struct Float;

fn truth(b: bool) -> f64 {
    if b { 1.0 } else { 0.0 }
}

// shorthands for building the vocabulary
macro_rules! binop {
    ($sym:expr, $prec:expr, $assoc:expr, |$l:ident, $r:ident| $body:expr) => {
        Operator::new($sym, $prec, $assoc, |$l: f64, $r: f64, _: &()| $body)
    };
}

macro_rules! unary {
    ($name:expr, |$x:ident| $body:expr) => {
        Function::new($name, Arity::Fixed(1), |args: Vec<f64>, _: &()| {
            let $x = args[0];
            Ok($body)
        })
    };
    ($name:expr, $f:path) => {
        Function::new($name, Arity::Fixed(1), |args: Vec<f64>, _: &()| Ok($f(args[0])))
    };
}

fn divide(l: f64, r: f64) -> Result<f64> {
    if r == 0.0 {
        return Err(ExprError::domain("Division by zero"));
    }
    Ok(l / r)
}

fn remainder(l: f64, r: f64) -> Result<f64> {
    if r == 0.0 {
        return Err(ExprError::domain("Division by zero"));
    }
    Ok(l % r)
}

fn sqrt(args: Vec<f64>, _: &()) -> Result<f64> {
    if args[0] < 0.0 {
        return Err(ExprError::domain("Argument to SQRT() function must not be negative"));
    }
    Ok(args[0].sqrt())
}

// ROUND(x, digits) rounds half away from zero
fn round_digits(args: Vec<f64>, _: &()) -> Result<f64> {
    let scale = 10f64.powi(args[1] as i32);
    Ok((args[0] * scale).round() / scale)
}

fn fold_variadic(name: &'static str, pick: fn(f64, f64) -> f64) -> Function<f64, ()> {
    Function::new(name, Arity::Variadic, move |args: Vec<f64>, _: &()| {
        args.into_iter()
            .reduce(pick)
            .ok_or_else(|| ExprError::domain(format!("{} requires at least one parameter", name)))
    })
}

impl Binding for Float {
    type Value = f64;
    type Context = ();

    fn val(literal: &str, _: &()) -> Result<f64> {
        literal.parse::<f64>().map_err(|e| ExprError::number_format(literal, e))
    }

    fn install(symbols: &mut Symbols<f64, ()>) {
        use Assoc::{Left, Right};

        let operators = vec![
            binop!("+", 20, Left, |l, r| Ok(l + r)),
            binop!("-", 20, Left, |l, r| Ok(l - r)),
            binop!("*", 30, Left, |l, r| Ok(l * r)),
            binop!("/", 30, Left, |l, r| divide(l, r)),
            binop!("%", 30, Left, |l, r| remainder(l, r)),
            binop!("^", 40, Right, |l, r| Ok(l.powf(r))),
            binop!("&&", 4, Right, |l, r| Ok(truth(l != 0.0 && r != 0.0))),
            binop!("||", 2, Right, |l, r| Ok(truth(l != 0.0 || r != 0.0))),
            binop!(">", 10, Right, |l, r| Ok(truth(l > r))),
            binop!(">=", 10, Right, |l, r| Ok(truth(l >= r))),
            binop!("<", 10, Right, |l, r| Ok(truth(l < r))),
            binop!("<=", 10, Right, |l, r| Ok(truth(l <= r))),
            binop!("=", 7, Right, |l, r| Ok(truth(l == r))),
            binop!("==", 7, Right, |l, r| Ok(truth(l == r))),
            binop!("!=", 7, Right, |l, r| Ok(truth(l != r))),
            binop!("<>", 7, Right, |l, r| Ok(truth(l != r))),
        ];
        for op in operators {
            symbols.add_operator(op);
        }

        let functions = vec![
            unary!("NOT", |x| truth(x == 0.0)),
            Function::new("IF", Arity::Fixed(3), |args: Vec<f64>, _: &()| {
                Ok(if args[0] != 0.0 { args[1] } else { args[2] })
            }),
            Function::new("RANDOM", Arity::Fixed(0), |_: Vec<f64>, _: &()| Ok(rand::random::<f64>())),
            unary!("SIN", |x| x.to_radians().sin()),
            unary!("COS", |x| x.to_radians().cos()),
            unary!("TAN", |x| x.to_radians().tan()),
            unary!("ASIN", |x| x.asin().to_degrees()),
            unary!("ACOS", |x| x.acos().to_degrees()),
            unary!("ATAN", |x| x.atan().to_degrees()),
            unary!("SINH", f64::sinh),
            unary!("COSH", f64::cosh),
            unary!("TANH", f64::tanh),
            unary!("RAD", f64::to_radians),
            unary!("DEG", f64::to_degrees),
            fold_variadic("MAX", f64::max),
            fold_variadic("MIN", f64::min),
            unary!("ABS", f64::abs),
            unary!("LOG", f64::ln),
            unary!("LOG10", f64::log10),
            Function::new("ROUND", Arity::Fixed(2), round_digits),
            unary!("FLOOR", f64::floor),
            unary!("CEILING", f64::ceil),
            Function::new("SQRT", Arity::Fixed(1), sqrt),
        ];
        for func in functions {
            symbols.add_function(func);
        }

        symbols.set_variable("PI", std::f64::consts::PI);
        symbols.set_variable("TRUE", 1.0);
        symbols.set_variable("FALSE", 0.0);
    }
}
