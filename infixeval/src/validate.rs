use crate::error::{ExprError, ParseError, Result, ValidationError};
use crate::parser::{Rpn, RpnToken};
use crate::symbols::{Arity, Symbols};

/// Check that operators and functions have enough values to work on and
/// that a single value would be left at the end, without evaluating.
///
/// Each open call gets its own frame counting the values pushed since its
/// `ParamsStart`, the bottom frame is the expression itself.
pub fn validate<T, C>(rpn: &Rpn, symbols: &Symbols<T, C>) -> Result<()> {
    let mut frames = vec![0usize];
    for token in rpn.iter() {
        match token {
            RpnToken::ParamsStart => frames.push(0),
            RpnToken::Number(_) | RpnToken::Variable(_) => bump(&mut frames),
            RpnToken::Operator(op) => {
                let depth = top(&mut frames);
                if *depth < 2 {
                    return Err(ValidationError::TooManyOperators(op.clone()).into());
                }
                *depth -= 1;
            }
            RpnToken::Function(name) => {
                if frames.len() < 2 {
                    return Err(ValidationError::TooManyOperators(name.clone()).into());
                }
                let got = frames.pop().unwrap_or(0);
                if let Some(Arity::Fixed(expected)) = symbols.function(name).map(|f| f.arity()) {
                    if expected != got {
                        return Err(ExprError::Arity { function: name.clone(), expected, got });
                    }
                }
                bump(&mut frames);
            }
        }
    }
    match frames[..] {
        [1] => Ok(()),
        [0] => Err(ValidationError::Empty.into()),
        [_] => Err(ValidationError::TooManyOperands.into()),
        _ => Err(ParseError::MissingCParen.into()),
    }
}

fn top(frames: &mut [usize]) -> &mut usize {
    let last = frames.len() - 1;
    &mut frames[last]
}

fn bump(frames: &mut [usize]) {
    *top(frames) += 1;
}
