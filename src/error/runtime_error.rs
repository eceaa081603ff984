/// Classifies a [`RuntimeError`] into the taxonomy the language exposes to
/// callers, mirroring the exception names scripts would see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuntimeErrorKind {
    /// An undefined variable or function name.
    NameError,
    /// A wrong operand type or argument count.
    TypeError,
    /// A division whose right operand is zero.
    ZeroDivisionError,
}

impl std::fmt::Display for RuntimeErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NameError => f.write_str("NameError"),
            Self::TypeError => f.write_str("TypeError"),
            Self::ZeroDivisionError => f.write_str("ZeroDivisionError"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can be raised during evaluation.
///
/// A runtime error aborts evaluation mid-statement. Variable bindings made
/// before the failing statement remain in the environment; there is no
/// rollback.
pub enum RuntimeError {
    /// Tried to read an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function name with no built-in registered for it.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a built-in.
    ArgumentCountMismatch {
        /// The name of the function.
        name: String,
        /// How many arguments the built-in takes.
        expected: usize,
        /// How many arguments were supplied.
        found: usize,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A value had an unexpected or incompatible type.
    TypeError {
        /// Details about the type mismatch.
        details: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl RuntimeError {
    /// Returns which exception family this error belongs to.
    #[must_use]
    pub const fn kind(&self) -> RuntimeErrorKind {
        match self {
            Self::UnknownVariable { .. } | Self::UnknownFunction { .. } => {
                RuntimeErrorKind::NameError
            },
            Self::ArgumentCountMismatch { .. } | Self::TypeError { .. } => {
                RuntimeErrorKind::TypeError
            },
            Self::DivisionByZero { .. } => RuntimeErrorKind::ZeroDivisionError,
        }
    }

    /// Returns the source line the error points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::UnknownFunction { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::TypeError { line, .. }
            | Self::DivisionByZero { line } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: NameError: name '{name}' is not defined.")
            },
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: NameError: function '{name}' is not defined.")
            },
            Self::ArgumentCountMismatch {
                name,
                expected,
                found,
                line,
            } => {
                write!(
                    f,
                    "Error on line {line}: TypeError: {name}() takes exactly {expected} argument(s), {found} given."
                )
            },
            Self::TypeError { details, line } => {
                write!(f, "Error on line {line}: TypeError: {details}.")
            },
            Self::DivisionByZero { line } => {
                write!(f, "Error on line {line}: ZeroDivisionError: division by zero.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
