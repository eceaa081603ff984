use std::collections::HashMap;

use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{evaluator::builtin::call_builtin, value::Value},
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state for one program run: a single
/// flat mapping from variable names to values, and the output buffer that
/// `print` appends to. There are no nested scopes; `for` binds its iterator
/// into the same table assignments use.
///
/// ## Usage
///
/// A `Context` is created empty, handed the root AST node via
/// [`Context::eval`], and discarded (or drained with
/// [`Context::take_output`]) when the run ends. It is not safe to share
/// between concurrent evaluations.
pub struct Context {
    variables: HashMap<String, Value>,
    output: String,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with an empty variable table and an
    /// empty output buffer.
    #[must_use]
    pub fn new() -> Self {
        Self {
            variables: HashMap::new(),
            output: String::new(),
        }
    }

    /// Looks up a variable by name without reporting an error.
    #[must_use]
    pub fn get_variable(&self, name: &str) -> Option<&Value> {
        self.variables.get(name)
    }

    /// Binds `name` to `value`, overwriting any prior binding.
    ///
    /// # Example
    /// ```
    /// use pylite::interpreter::{evaluator::core::Context, value::Value};
    ///
    /// let mut context = Context::new();
    /// context.set_variable("x", Value::Integer(10));
    ///
    /// assert_eq!(context.get_variable("x"), Some(&Value::Integer(10)));
    /// ```
    pub fn set_variable(&mut self, name: &str, value: Value) {
        self.variables.insert(name.to_string(), value);
    }

    /// Returns the accumulated `print` output so far.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// Takes the accumulated `print` output, leaving the buffer empty.
    pub fn take_output(&mut self) -> String {
        std::mem::take(&mut self.output)
    }

    /// Evaluates an AST node and returns the resulting value.
    ///
    /// This is the main entry point for evaluation. The evaluator
    /// dispatches based on node variant: literals, variables, binary
    /// operations, assignments, lists, control flow, `print`, and built-in
    /// function calls. Statements yield `None`; expressions (and
    /// assignments, which return the assigned value) yield `Some`.
    ///
    /// Evaluation is strictly left-to-right and single-threaded, with no
    /// laziness beyond what the grammar encodes. A `while` loop with an
    /// always-true condition runs forever; callers needing bounded
    /// execution must wrap the evaluator in an external watchdog.
    ///
    /// # Errors
    /// Returns a [`RuntimeError`] for undefined names, type mismatches, and
    /// division by zero. Bindings made before the failure stay in the
    /// environment.
    pub fn eval(&mut self, node: &Node) -> EvalResult<Option<Value>> {
        match node {
            Node::Block { statements, .. } => self.eval_block(statements),
            Node::Number { value, .. } => Ok(Some(Value::from(*value))),
            Node::Boolean { value, .. } => Ok(Some(Value::Bool(*value))),
            Node::Str { value, .. } => Ok(Some(Value::Str(value.clone()))),
            Node::Variable { name, line } => self.eval_variable(name, *line).map(Some),
            Node::BinaryOp {
                left,
                op,
                right,
                line,
            } => self.eval_binary_op(left, *op, right, *line).map(Some),
            Node::Assignment {
                target,
                value,
                line: _,
            } => self.eval_assignment(target, value).map(Some),
            Node::List { items, .. } => self.eval_list(items).map(Some),
            Node::If {
                condition,
                then_body,
                else_body,
                ..
            } => {
                self.eval_if(condition, then_body, else_body.as_deref())?;
                Ok(None)
            },
            Node::For {
                iterator,
                start,
                end,
                body,
                line,
            } => {
                self.eval_for(iterator, start, end, body, *line)?;
                Ok(None)
            },
            Node::While {
                condition, body, ..
            } => {
                self.eval_while(condition, body)?;
                Ok(None)
            },
            Node::Print { expr, .. } => {
                self.eval_print(expr)?;
                Ok(None)
            },
            Node::FunctionCall {
                name,
                arguments,
                line,
            } => self.eval_call(name, arguments, *line).map(Some),
        }
    }

    /// Evaluates a subexpression and requires it to produce a value.
    ///
    /// Expression positions in the grammar can only hold value-producing
    /// nodes, so a `None` here means the tree was built by hand in an
    /// unsupported shape; it is reported as a `TypeError`.
    pub(crate) fn eval_child(&mut self, node: &Node) -> EvalResult<Value> {
        let line = node.line_number();

        self.eval(node)?.ok_or(RuntimeError::TypeError {
            details: String::from("expression did not produce a value"),
            line,
        })
    }

    /// Evaluates each statement of a block in order. Blocks yield no value.
    fn eval_block(&mut self, statements: &[Node]) -> EvalResult<Option<Value>> {
        for statement in statements {
            self.eval(statement)?;
        }

        Ok(None)
    }

    /// Looks up a variable, failing with `UnknownVariable` when absent.
    /// There is no implicit default for unbound names.
    fn eval_variable(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.variables
            .get(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable {
                name: name.to_string(),
                line,
            })
    }

    /// Evaluates the right-hand side, binds it under `target`, and returns
    /// the assigned value.
    fn eval_assignment(&mut self, target: &str, value: &Node) -> EvalResult<Value> {
        let value = self.eval_child(value)?;
        self.variables.insert(target.to_string(), value.clone());

        Ok(value)
    }

    /// Evaluates list items left to right into a list value.
    fn eval_list(&mut self, items: &[Node]) -> EvalResult<Value> {
        let values = items
            .iter()
            .map(|item| self.eval_child(item))
            .collect::<EvalResult<Vec<Value>>>()?;

        Ok(Value::from(values))
    }

    fn eval_if(
        &mut self,
        condition: &Node,
        then_body: &Node,
        else_body: Option<&Node>,
    ) -> EvalResult<()> {
        if self.eval_child(condition)?.truthy() {
            self.eval(then_body)?;
        } else if let Some(else_body) = else_body {
            self.eval(else_body)?;
        }

        Ok(())
    }

    /// Evaluates a `for` loop over the half-open range `[start, end)`.
    ///
    /// Both bounds are evaluated once, before the first iteration, and must
    /// be integers. When `end <= start` the body never runs. The iterator
    /// is bound into the flat environment like any assignment and remains
    /// bound to its last value after the loop.
    fn eval_for(
        &mut self,
        iterator: &str,
        start: &Node,
        end: &Node,
        body: &Node,
        line: usize,
    ) -> EvalResult<()> {
        let start = self.eval_child(start)?.as_range_bound(line)?;
        let end = self.eval_child(end)?.as_range_bound(line)?;

        for i in start..end {
            self.variables.insert(iterator.to_string(), Value::Integer(i));
            self.eval(body)?;
        }

        Ok(())
    }

    /// Evaluates a `while` loop, re-checking the condition before every
    /// iteration. Not bounded: an always-true condition loops forever.
    fn eval_while(&mut self, condition: &Node, body: &Node) -> EvalResult<()> {
        while self.eval_child(condition)?.truthy() {
            self.eval(body)?;
        }

        Ok(())
    }

    /// Evaluates the expression and appends its text plus a newline to the
    /// output buffer.
    fn eval_print(&mut self, expr: &Node) -> EvalResult<()> {
        let value = self.eval_child(expr)?;

        self.output.push_str(&value.to_string());
        self.output.push('\n');

        Ok(())
    }

    /// Evaluates call arguments left to right, then dispatches to the
    /// built-in function table.
    fn eval_call(&mut self, name: &str, arguments: &[Node], line: usize) -> EvalResult<Value> {
        let args = arguments
            .iter()
            .map(|argument| self.eval_child(argument))
            .collect::<EvalResult<Vec<Value>>>()?;

        call_builtin(name, &args, line)
    }
}
