use crate::{
    ast::{BinaryOperator, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::Value,
    },
};

/// Applies an ordering-capable comparison to two operands of one type.
fn compare<T: PartialOrd>(op: BinaryOperator, a: &T, b: &T) -> bool {
    use BinaryOperator::{Equal, Greater, GreaterEqual, Less, LessEqual, NotEqual};

    match op {
        Equal => a == b,
        NotEqual => a != b,
        Less => a < b,
        Greater => a > b,
        LessEqual => a <= b,
        GreaterEqual => a >= b,
        _ => unreachable!("not a comparison operator"),
    }
}

impl Context {
    /// Evaluates a binary operation.
    ///
    /// Both operands are evaluated first, left fully before right, then the
    /// operator is applied: arithmetic for `+ - * /`, boolean-producing
    /// comparison otherwise.
    pub(crate) fn eval_binary_op(
        &mut self,
        left: &Node,
        op: BinaryOperator,
        right: &Node,
        line: usize,
    ) -> EvalResult<Value> {
        let left = self.eval_child(left)?;
        let right = self.eval_child(right)?;

        if op.is_comparison() {
            Self::eval_comparison(op, &left, &right, line)
        } else {
            Self::eval_arithmetic(op, &left, &right, line)
        }
    }

    /// Evaluates an arithmetic operation on two values.
    ///
    /// Two integers stay in integer arithmetic for `+ - *`; any float
    /// operand promotes the whole operation to floats. Division always
    /// yields a float quotient, even for two integers, and fails when the
    /// right operand is zero. `+` additionally concatenates two strings or
    /// two lists. Anything else is a `TypeError`.
    ///
    /// # Errors
    /// - `RuntimeError::DivisionByZero` for a zero divisor.
    /// - `RuntimeError::TypeError` for unsupported operand types.
    ///
    /// # Example
    /// ```
    /// use pylite::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::Value},
    /// };
    ///
    /// let quotient =
    ///     Context::eval_arithmetic(BinaryOperator::Div, &Value::Integer(7), &Value::Integer(2), 1)
    ///         .unwrap();
    ///
    /// assert_eq!(quotient, Value::Float(3.5));
    /// ```
    pub fn eval_arithmetic(
        op: BinaryOperator,
        left: &Value,
        right: &Value,
        line: usize,
    ) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};
        use Value::{Float, Integer, List, Str};

        match (left, right) {
            // Integer arithmetic wraps on 64-bit overflow; evaluation never
            // panics on operand magnitude.
            (Integer(a), Integer(b)) => match op {
                Add => Ok(Integer(a.wrapping_add(*b))),
                Sub => Ok(Integer(a.wrapping_sub(*b))),
                Mul => Ok(Integer(a.wrapping_mul(*b))),
                Div => {
                    if *b == 0 {
                        Err(RuntimeError::DivisionByZero { line })
                    } else {
                        #[allow(clippy::cast_precision_loss)]
                        let quotient = *a as f64 / *b as f64;

                        Ok(Float(quotient))
                    }
                },
                _ => unreachable!("not an arithmetic operator"),
            },
            (Integer(_) | Float(_), Integer(_) | Float(_)) => {
                let a = left.as_float(line)?;
                let b = right.as_float(line)?;

                match op {
                    Add => Ok(Float(a + b)),
                    Sub => Ok(Float(a - b)),
                    Mul => Ok(Float(a * b)),
                    Div => {
                        if b == 0.0 {
                            Err(RuntimeError::DivisionByZero { line })
                        } else {
                            Ok(Float(a / b))
                        }
                    },
                    _ => unreachable!("not an arithmetic operator"),
                }
            },
            (Str(a), Str(b)) if op == Add => Ok(Str(format!("{a}{b}"))),
            (List(a), List(b)) if op == Add => {
                let mut items = a.as_ref().clone();
                items.extend(b.iter().cloned());

                Ok(Value::from(items))
            },
            _ => Err(RuntimeError::TypeError {
                details: format!(
                    "unsupported operand type(s) for {op}: '{}' and '{}'",
                    left.type_name(),
                    right.type_name()
                ),
                line,
            }),
        }
    }

    /// Evaluates a comparison operation on two values, producing a boolean.
    ///
    /// Mixed integer/float operands are compared numerically. Strings
    /// compare lexicographically; booleans and lists support only equality
    /// and inequality. Values of unrelated types are never equal, and
    /// ordering them is a `TypeError`.
    ///
    /// # Errors
    /// Returns `RuntimeError::TypeError` for an ordering comparison between
    /// operands with no natural order.
    pub fn eval_comparison(
        op: BinaryOperator,
        left: &Value,
        right: &Value,
        line: usize,
    ) -> EvalResult<Value> {
        use BinaryOperator::{Equal, NotEqual};
        use Value::{Bool, Float, Integer, List, Str};

        match (left, right) {
            (Integer(a), Integer(b)) => Ok(Bool(compare(op, a, b))),
            (Integer(_) | Float(_), Integer(_) | Float(_)) => {
                let a = left.as_float(line)?;
                let b = right.as_float(line)?;

                Ok(Bool(compare(op, &a, &b)))
            },
            (Str(a), Str(b)) => Ok(Bool(compare(op, a, b))),
            (Bool(a), Bool(b)) => match op {
                Equal => Ok(Bool(a == b)),
                NotEqual => Ok(Bool(a != b)),
                _ => Err(Self::unordered(op, left, right, line)),
            },
            (List(a), List(b)) => match op {
                Equal => Ok(Bool(a == b)),
                NotEqual => Ok(Bool(a != b)),
                _ => Err(Self::unordered(op, left, right, line)),
            },
            _ => match op {
                Equal => Ok(Bool(false)),
                NotEqual => Ok(Bool(true)),
                _ => Err(Self::unordered(op, left, right, line)),
            },
        }
    }

    fn unordered(op: BinaryOperator, left: &Value, right: &Value, line: usize) -> RuntimeError {
        RuntimeError::TypeError {
            details: format!(
                "'{op}' not supported between instances of '{}' and '{}'",
                left.type_name(),
                right.type_name()
            ),
            line,
        }
    }
}
