use std::rc::Rc;

use crate::{
    ast::NumberValue,
    error::RuntimeError,
    interpreter::evaluator::core::EvalResult,
};

/// Represents a runtime value in the interpreter.
///
/// This enum models all the possible types that can appear in expressions,
/// assignments, and the variable environment. Values are dynamically typed;
/// the integer/float distinction made by the lexer is preserved here and
/// never collapsed implicitly.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// An integer value (64-bit).
    Integer(i64),
    /// A floating-point value (double precision).
    Float(f64),
    /// A boolean value, produced by comparison operators or the `True` and
    /// `False` literals.
    Bool(bool),
    /// A string value, with no surrounding quotes.
    Str(String),
    /// An ordered list of values.
    List(Rc<Vec<Self>>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Str(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Str(v.to_string())
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::List(Rc::new(v))
    }
}

impl From<NumberValue> for Value {
    fn from(v: NumberValue) -> Self {
        match v {
            NumberValue::Integer(n) => Self::Integer(n),
            NumberValue::Float(r) => Self::Float(r),
        }
    }
}

impl Value {
    /// Returns whether the value counts as true in a condition.
    ///
    /// Truthiness follows the source language: `False`, `0`, `0.0`, the
    /// empty string, and the empty list are falsy; everything else is
    /// truthy.
    ///
    /// # Example
    /// ```
    /// use pylite::interpreter::value::Value;
    ///
    /// assert!(Value::Integer(3).truthy());
    /// assert!(!Value::Str(String::new()).truthy());
    /// ```
    #[must_use]
    pub fn truthy(&self) -> bool {
        match self {
            Self::Bool(b) => *b,
            Self::Integer(n) => *n != 0,
            Self::Float(r) => *r != 0.0,
            Self::Str(s) => !s.is_empty(),
            Self::List(items) => !items.is_empty(),
        }
    }

    /// Converts the value to an `f64`, or returns an error if not numeric.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(f64)`: If the value is an integer or a float.
    /// - `Err(RuntimeError::TypeError)`: Otherwise.
    #[allow(clippy::cast_precision_loss)]
    pub fn as_float(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Float(r) => Ok(*r),
            Self::Integer(n) => Ok(*n as f64),
            _ => Err(RuntimeError::TypeError {
                details: format!("expected a number, found '{}'", self.type_name()),
                line,
            }),
        }
    }

    /// Converts the value to an `i64` for use as a `range` bound.
    ///
    /// Only integers are accepted. Floats are rejected rather than
    /// truncated, so `range(1.5, 3)` is a `TypeError` instead of silently
    /// iterating from 1.
    ///
    /// # Parameters
    /// - `line`: Source code line number for error reporting.
    ///
    /// # Returns
    /// - `Ok(i64)`: The integer value.
    /// - `Err(RuntimeError::TypeError)`: If the value is not an integer.
    pub fn as_range_bound(&self, line: usize) -> EvalResult<i64> {
        match self {
            Self::Integer(n) => Ok(*n),
            _ => Err(RuntimeError::TypeError {
                details: format!(
                    "range() bounds must be integers, found '{}'",
                    self.type_name()
                ),
                line,
            }),
        }
    }

    /// Returns the language-level name of this value's type, used in
    /// `TypeError` messages.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Integer(_) => "int",
            Self::Float(_) => "float",
            Self::Bool(_) => "bool",
            Self::Str(_) => "str",
            Self::List(_) => "list",
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // Whole floats keep one decimal place so the float tag stays
            // visible: `print(6 / 2)` shows `3.0`.
            Self::Float(r) if r.fract() == 0.0 && r.is_finite() => write!(f, "{r:.1}"),
            Self::Float(r) => write!(f, "{r}"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Str(s) => f.write_str(s),
            Self::List(items) => {
                write!(f, "[")?;

                for (index, value) in items.iter().enumerate() {
                    if index > 0 {
                        write!(f, ", ")?;
                    }

                    write!(f, "{value}")?;
                }

                write!(f, "]")
            },
        }
    }
}
