//! Upper-case formula functions callable from calculator expressions.
//!
//! evalexpr passes a single argument as itself, several arguments as a
//! tuple and an empty argument list as `Value::Empty`.

use evalexpr::{EvalexprError, EvalexprResult, Value};

/// Names of the supported functions.
pub(crate) const FUNCTION_NAMES: &[&str] = &[
    "ABS", "SQRT", "ROUND", "FLOOR", "CEIL", "MIN", "MAX", "SUM", "AVERAGE",
];

/// Call the function `name` with the grammar's `argument`.
pub(crate) fn call(name: &str, argument: &Value) -> EvalexprResult<Value> {
    if !FUNCTION_NAMES.contains(&name) {
        return Err(EvalexprError::FunctionIdentifierNotFound(name.to_string()));
    }
    let args = numbers(argument)?;

    let result = match name {
        "ABS" => unary(name, &args)?.abs(),
        "SQRT" => unary(name, &args)?.sqrt(),
        "ROUND" => unary(name, &args)?.round(),
        "FLOOR" => unary(name, &args)?.floor(),
        "CEIL" => unary(name, &args)?.ceil(),
        "MIN" => non_empty(name, &args)?.iter().copied().fold(f64::INFINITY, f64::min),
        "MAX" => non_empty(name, &args)?
            .iter()
            .copied()
            .fold(f64::NEG_INFINITY, f64::max),
        "SUM" => args.iter().sum(),
        "AVERAGE" => {
            let args = non_empty(name, &args)?;
            args.iter().sum::<f64>() / args.len() as f64
        }
        _ => return Err(EvalexprError::FunctionIdentifierNotFound(name.to_string())),
    };

    Ok(Value::Float(result))
}

/// Flatten the argument into a list of numbers.
fn numbers(argument: &Value) -> EvalexprResult<Vec<f64>> {
    match argument {
        Value::Empty => Ok(Vec::new()),
        Value::Tuple(values) => values.iter().map(Value::as_number).collect(),
        value => Ok(vec![value.as_number()?]),
    }
}

fn unary(name: &str, args: &[f64]) -> EvalexprResult<f64> {
    match args {
        [value] => Ok(*value),
        _ => Err(EvalexprError::CustomMessage(format!(
            "{} takes exactly one argument, got {}",
            name,
            args.len()
        ))),
    }
}

fn non_empty<'a>(name: &str, args: &'a [f64]) -> EvalexprResult<&'a [f64]> {
    if args.is_empty() {
        return Err(EvalexprError::CustomMessage(format!(
            "{} needs at least one argument",
            name
        )));
    }
    Ok(args)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn call_with(name: &str, args: &[f64]) -> EvalexprResult<Value> {
        let argument = match args {
            [] => Value::Empty,
            [single] => Value::Float(*single),
            many => Value::Tuple(many.iter().map(|v| Value::Float(*v)).collect()),
        };
        call(name, &argument)
    }

    #[test]
    fn test_unary_functions() {
        assert_eq!(call_with("ABS", &[-4.0]), Ok(Value::Float(4.0)));
        assert_eq!(call_with("SQRT", &[16.0]), Ok(Value::Float(4.0)));
        assert_eq!(call_with("ROUND", &[2.5]), Ok(Value::Float(3.0)));
        assert_eq!(call_with("FLOOR", &[2.7]), Ok(Value::Float(2.0)));
        assert_eq!(call_with("CEIL", &[2.1]), Ok(Value::Float(3.0)));
    }

    #[test]
    fn test_aggregate_functions() {
        assert_eq!(call_with("MIN", &[3.0, 1.0, 2.0]), Ok(Value::Float(1.0)));
        assert_eq!(call_with("MAX", &[3.0, 1.0, 2.0]), Ok(Value::Float(3.0)));
        assert_eq!(call_with("SUM", &[1.0, 2.0, 3.0]), Ok(Value::Float(6.0)));
        assert_eq!(call_with("SUM", &[]), Ok(Value::Float(0.0)));
        assert_eq!(call_with("AVERAGE", &[1.0, 2.0, 6.0]), Ok(Value::Float(3.0)));
    }

    #[test]
    fn test_int_arguments() {
        assert_eq!(call("ABS", &Value::Int(-2)), Ok(Value::Float(2.0)));
    }

    #[test]
    fn test_wrong_arity() {
        assert!(call_with("SQRT", &[1.0, 2.0]).is_err());
        assert!(call_with("ABS", &[]).is_err());
        assert!(call_with("MAX", &[]).is_err());
        assert!(call_with("AVERAGE", &[]).is_err());
    }

    #[test]
    fn test_non_numeric_argument() {
        assert!(call("ABS", &Value::String("X".to_string())).is_err());
    }

    #[test]
    fn test_unknown_function() {
        assert_eq!(
            call_with("FOO", &[1.0]),
            Err(EvalexprError::FunctionIdentifierNotFound("FOO".to_string()))
        );
        assert!(FUNCTION_NAMES.iter().all(|name| call_with(name, &[1.0]).is_ok()));
    }
}
