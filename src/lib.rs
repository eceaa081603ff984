//! # pylite
//!
//! pylite is a small Python-flavored scripting language written in Rust.
//! It tokenizes, parses, pretty-prints, and evaluates programs built from
//! assignments, arithmetic, comparisons, lists, `if`/`else`, `for` over
//! `range`, `while`, and `print`.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::{ParseError, RuntimeError},
    interpreter::{
        evaluator::core::Context, lexer::tokenize, parser::statement::parse_program,
    },
};

pub use crate::ast::Node;

/// Defines the structure of parsed code.
///
/// This module declares the `Node` enum and related types that represent the
/// syntactic structure of source code as a tree. The AST is built by the
/// parser, rendered by the printer, and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines node types for every language construct.
/// - Attaches source line numbers to nodes for error reporting.
/// - Keeps the integer/float distinction made by the lexer.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, parsing,
/// or evaluating code. It standardizes error reporting and carries detailed
/// information about failures, including error kinds, descriptions, and
/// source locations for debugging and user feedback.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Classifies errors into diagnostic and runtime kinds.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, printing, evaluation, value
/// representations, and error handling to provide a complete runtime for
/// source code execution.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, printer, and evaluator.
/// - Provides the building blocks behind the crate-level entry points.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

/// An error from any phase of interpretation.
///
/// Wraps the phase-specific error types so callers that do not care where a
/// failure happened can handle a single type.
#[derive(Debug, PartialEq)]
pub enum InterpreterError {
    /// The source could not be tokenized or parsed.
    Parse(ParseError),
    /// The program failed during evaluation.
    Runtime(RuntimeError),
}

impl From<ParseError> for InterpreterError {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for InterpreterError {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for InterpreterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for InterpreterError {}

/// Parses a complete program into its AST.
///
/// The returned node is always a `Node::Block` holding the program's
/// top-level statements, even for a single statement.
///
/// # Errors
/// Returns a `ParseError` if the source contains an illegal character or
/// does not match the grammar.
///
/// # Example
/// ```
/// use pylite::{parse, Node};
///
/// let ast = parse("x = 1; print(x)").unwrap();
///
/// assert!(matches!(ast, Node::Block { ref statements, .. } if statements.len() == 2));
/// ```
pub fn parse(source: &str) -> Result<Node, ParseError> {
    let tokens = tokenize(source)?;
    let mut iter = tokens.iter().peekable();

    parse_program(&mut iter)
}

/// Executes a parsed program in a fresh context and returns its output.
///
/// The output is everything `print` produced, one line per call.
///
/// # Errors
/// Returns a `RuntimeError` if evaluation fails.
///
/// # Example
/// ```
/// use pylite::{parse, run};
///
/// let ast = parse("for i in range(0, 3): print(i)").unwrap();
///
/// assert_eq!(run(&ast).unwrap(), "0\n1\n2\n");
/// ```
pub fn run(ast: &Node) -> Result<String, RuntimeError> {
    let mut context = Context::new();

    context.eval(ast)?;

    Ok(context.take_output())
}

/// Executes a parsed program in an existing context.
///
/// Variables assigned by the program stay in `context` afterwards, and its
/// output accumulates in the context's output buffer. This is the entry
/// point for a session that runs several programs against shared state.
///
/// # Errors
/// Returns a `RuntimeError` if evaluation fails. Assignments made before
/// the failure remain visible in `context`.
pub fn run_with_context(ast: &Node, context: &mut Context) -> Result<(), RuntimeError> {
    context.eval(ast)?;

    Ok(())
}

/// Parses and executes a program in one step, returning its output.
///
/// # Errors
/// Returns an `InterpreterError` wrapping the parse or runtime failure.
///
/// # Example
/// ```
/// use pylite::interpret;
///
/// assert_eq!(interpret("print(2 + 3)").unwrap(), "5\n");
/// ```
pub fn interpret(source: &str) -> Result<String, InterpreterError> {
    let ast = parse(source)?;

    Ok(run(&ast)?)
}
