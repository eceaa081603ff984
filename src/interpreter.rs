/// The evaluator module executes AST nodes and produces output.
///
/// The evaluator traverses the AST, evaluates expressions and statements
/// against a mutable variable environment, performs arithmetic and
/// comparisons, and accumulates everything `print` produces into an output
/// buffer. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Evaluates AST nodes, performing all supported operations.
/// - Handles variables, built-in function calls, and control flow.
/// - Reports runtime errors such as division by zero or undefined names.
pub mod evaluator;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer (tokenizer) reads the raw source text and produces a stream of
/// tokens, each corresponding to meaningful language elements such as
/// numbers, strings, identifiers, operators, delimiters, and keywords. This
/// is the first stage of interpretation.
///
/// # Responsibilities
/// - Converts the input character stream into tokens with source lines.
/// - Handles numeric and string literals, identifiers, and operators.
/// - Reports lexical errors for unrecognized characters.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser processes the token stream produced by the lexer and
/// constructs an AST that represents the syntactic structure of statements
/// and expressions. This enables later phases to display and execute user
/// code.
///
/// # Responsibilities
/// - Converts tokens into structured AST nodes (statements, expressions).
/// - Validates correct grammar and syntax, reporting errors with line info.
/// - Supports assignments, lists, conditionals, loops, and `print`.
pub mod parser;
/// The printer module renders an AST as indented, human-readable text.
///
/// This output is purely diagnostic: it is shown to users who ask for an
/// AST dump, and no component ever re-parses it.
pub mod printer;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the dynamically-typed values that variables hold
/// and expressions produce: integers, floats, booleans, strings, and lists.
pub mod value;
