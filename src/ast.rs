/// Represents a numeric literal in the language.
///
/// A number remembers whether its source literal contained a decimal point:
/// `3` produces an `Integer`, `3.0` produces a `Float`. The distinction is
/// kept through evaluation and is never collapsed by the parser.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NumberValue {
    /// A 64-bit signed integer literal, such as `42`.
    Integer(i64),
    /// A 64-bit floating-point literal, such as `3.14`.
    Float(f64),
}

impl From<i64> for NumberValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for NumberValue {
    fn from(value: f64) -> Self {
        Self::Float(value)
    }
}

impl std::fmt::Display for NumberValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            // A whole float keeps one decimal place so the float tag stays
            // visible in output: `6 / 2` prints as `3.0`, not `3`.
            Self::Float(r) if r.fract() == 0.0 && r.is_finite() => write!(f, "{r:.1}"),
            Self::Float(r) => write!(f, "{r}"),
        }
    }
}

/// Represents a binary operator.
///
/// Binary operators cover arithmetic (`+ - * /`) and the six comparisons.
/// Comparisons are only produced in condition position by the parser.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`); always yields a float quotient.
    Div,
    /// Equal to (`==`)
    Equal,
    /// Not equal to (`!=`)
    NotEqual,
    /// Less than (`<`)
    Less,
    /// Greater than (`>`)
    Greater,
    /// Less than or equal (`<=`)
    LessEqual,
    /// Greater than or equal (`>=`)
    GreaterEqual,
}

impl BinaryOperator {
    /// Returns `true` for the six comparison operators.
    #[must_use]
    pub const fn is_comparison(self) -> bool {
        !matches!(self, Self::Add | Self::Sub | Self::Mul | Self::Div)
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Equal => "==",
            Self::NotEqual => "!=",
            Self::Less => "<",
            Self::Greater => ">",
            Self::LessEqual => "<=",
            Self::GreaterEqual => ">=",
        };
        write!(f, "{operator}")
    }
}

/// An abstract syntax tree (AST) node.
///
/// `Node` is a closed tagged union covering every syntax shape the grammar
/// can produce, from literal leaves to compound statements. The tree is
/// immutable once built: evaluation only mutates the external environment,
/// never the nodes. Every variant carries the source line it started on for
/// runtime error reporting.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A `;`-separated statement sequence. The root of every parsed program
    /// is a `Block`; loop and `if` bodies only become one when they contain
    /// more than one statement.
    Block {
        /// Statements in source order; never empty when built by the parser.
        statements: Vec<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A numeric literal, tagged integer or float.
    Number {
        /// The literal value.
        value: NumberValue,
        /// Line number in the source code.
        line: usize,
    },
    /// A boolean literal: `True` or `False`.
    Boolean {
        /// The literal value.
        value: bool,
        /// Line number in the source code.
        line: usize,
    },
    /// A string literal, with the surrounding double quotes stripped.
    Str {
        /// The literal text.
        value: String,
        /// Line number in the source code.
        line: usize,
    },
    /// Reference to a variable by name.
    Variable {
        /// Name of the variable.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// An arithmetic or comparison operation.
    BinaryOp {
        /// Left operand.
        left: Box<Self>,
        /// The operator.
        op: BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// An assignment binding a name to an expression (`x = 10`).
    Assignment {
        /// The name being assigned to.
        target: String,
        /// The right-hand side expression.
        value: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A list literal (`[1, x, "a"]`).
    List {
        /// Element expressions in source order.
        items: Vec<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// An `if` statement with an optional `else` branch.
    If {
        /// The condition; always a comparison per the grammar.
        condition: Box<Self>,
        /// Statement(s) run when the condition is truthy.
        then_body: Box<Self>,
        /// Statement(s) run otherwise, if present.
        else_body: Option<Box<Self>>,
        /// Line number in the source code.
        line: usize,
    },
    /// A `for i in range(start, end): body` loop over a half-open range.
    For {
        /// The loop variable name.
        iterator: String,
        /// Start of the range, inclusive.
        start: Box<Self>,
        /// End of the range, exclusive.
        end: Box<Self>,
        /// The loop body.
        body: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A `while condition: body` loop.
    While {
        /// The condition, re-evaluated before every iteration.
        condition: Box<Self>,
        /// The loop body.
        body: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A `print(expr)` statement.
    Print {
        /// The expression whose value is printed.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A call to a built-in function, such as `str(x)`.
    FunctionCall {
        /// Name of the function being called.
        name: String,
        /// Arguments to the function.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line: usize,
    },
}

impl Node {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use pylite::ast::Node;
    ///
    /// let node = Node::Variable {
    ///     name: "x".to_string(),
    ///     line: 5,
    /// };
    ///
    /// assert_eq!(node.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Block { line, .. }
            | Self::Number { line, .. }
            | Self::Boolean { line, .. }
            | Self::Str { line, .. }
            | Self::Variable { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Assignment { line, .. }
            | Self::List { line, .. }
            | Self::If { line, .. }
            | Self::For { line, .. }
            | Self::While { line, .. }
            | Self::Print { line, .. }
            | Self::FunctionCall { line, .. } => *line,
        }
    }
}
