use crate::binding::Binding;
use crate::error::{ExprError, ParseError, Result, ValidationError};
use crate::parser::{Rpn, RpnToken};
use crate::symbols::{Arity, Symbols};

// an entry of the evaluation stack
enum Slot<T> {
    Value(T),
    ParamsStart,
}

fn pop_operand<T>(operands: &mut Vec<Slot<T>>, op: &str) -> Result<T> {
    match operands.pop() {
        Some(Slot::Value(v)) => Ok(v),
        _ => Err(ValidationError::TooManyOperators(op.to_string()).into()),
    }
}

fn unknown(name: &str) -> ExprError {
    ParseError::UnknownSymbol(name.to_string()).into()
}

/// Run an RPN sequence, implementations are looked up by name on each step.
pub fn eval<B: Binding>(
    rpn: &Rpn,
    symbols: &Symbols<B::Value, B::Context>,
    cx: &B::Context,
) -> Result<B::Value> {
    let mut operands = Vec::new();

    for token in rpn.iter() {
        match token {
            RpnToken::Number(num) => operands.push(Slot::Value(B::val(num, cx)?)),
            RpnToken::Variable(var) => {
                let value = symbols.variable(var).ok_or_else(|| unknown(var))?;
                operands.push(Slot::Value(B::round(value.clone(), cx)));
            }
            RpnToken::Operator(op) => {
                let r = pop_operand(&mut operands, op)?;
                let l = pop_operand(&mut operands, op)?;
                let imp = symbols.operator(op).ok_or_else(|| unknown(op))?;
                operands.push(Slot::Value(imp.eval(l, r, cx)?));
            }
            RpnToken::ParamsStart => operands.push(Slot::ParamsStart),
            RpnToken::Function(fname) => {
                let func = symbols.function(fname).ok_or_else(|| unknown(fname))?;
                // pop parameters until we hit the start of this call
                let mut args = Vec::new();
                while let Some(Slot::Value(v)) = operands.pop() {
                    args.push(v);
                }
                args.reverse();
                if let Arity::Fixed(expected) = func.arity() {
                    if args.len() != expected {
                        return Err(ExprError::Arity {
                            function: fname.clone(),
                            expected,
                            got: args.len(),
                        });
                    }
                }
                operands.push(Slot::Value(func.call(args, cx)?));
            }
        }
    }

    match (operands.pop(), operands.is_empty()) {
        (Some(Slot::Value(result)), true) => Ok(result),
        (None, _) => Err(ValidationError::Empty.into()),
        _ => Err(ValidationError::TooManyOperands.into()),
    }
}
