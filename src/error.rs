/// Parsing errors.
///
/// Defines all error types that can occur during lexing and parsing of source
/// code. Parse errors include illegal characters, unexpected tokens, missing
/// delimiters, and running out of input mid-construct.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include undefined names, division by zero, and type or arity
/// mismatches.
pub mod runtime_error;

pub use parse_error::{DiagnosticKind, ParseError};
pub use runtime_error::{RuntimeError, RuntimeErrorKind};
