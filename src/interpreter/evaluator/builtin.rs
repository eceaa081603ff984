use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::Value},
};

/// Calls the built-in function `name` with already-evaluated arguments.
///
/// # Errors
/// - `RuntimeError::UnknownFunction` when no built-in has that name.
/// - `RuntimeError::ArgumentCountMismatch` when the arity is wrong.
///
/// # Example
/// ```
/// use pylite::interpreter::{evaluator::builtin::call_builtin, value::Value};
///
/// let text = call_builtin("str", &[Value::Integer(42)], 1).unwrap();
///
/// assert_eq!(text, Value::Str("42".to_owned()));
/// ```
pub fn call_builtin(name: &str, args: &[Value], line: usize) -> EvalResult<Value> {
    match name {
        "str" => builtin_str(args, line),
        _ => Err(RuntimeError::UnknownFunction {
            name: name.to_owned(),
            line,
        }),
    }
}

fn check_arity(name: &str, args: &[Value], expected: usize, line: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch {
            name: name.to_owned(),
            expected,
            found: args.len(),
            line,
        })
    }
}

/// Converts its single argument to its display string.
fn builtin_str(args: &[Value], line: usize) -> EvalResult<Value> {
    check_arity("str", args, 1, line)?;

    Ok(Value::Str(args[0].to_string()))
}
