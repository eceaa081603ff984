/// Classifies a [`ParseError`] into the two diagnostic families callers
/// present differently: lexical errors and grammar errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// An unrecognized character in the source text.
    LexError,
    /// A token stream that does not match the grammar.
    SyntaxError,
}

impl std::fmt::Display for DiagnosticKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::LexError => f.write_str("LexError"),
            Self::SyntaxError => f.write_str("SyntaxError"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during lexing or parsing.
///
/// Parsing aborts on the first error; no partial AST is ever returned
/// alongside one of these.
pub enum ParseError {
    /// The lexer met a character that starts no token.
    IllegalCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Found a token the grammar cannot accept at the current position.
    UnexpectedToken {
        /// The token encountered.
        token: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A specific token was required but something else was found.
    ExpectedToken {
        /// What the grammar required, e.g. `':'`.
        expected: String,
        /// The token actually encountered.
        found: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Reached the end of input in the middle of a construct.
    UnexpectedEndOfInput {
        /// The source line where the error occurred.
        line: usize,
    },
}

impl ParseError {
    /// Returns whether this is a lexical or a grammar diagnostic.
    #[must_use]
    pub const fn kind(&self) -> DiagnosticKind {
        match self {
            Self::IllegalCharacter { .. } => DiagnosticKind::LexError,
            _ => DiagnosticKind::SyntaxError,
        }
    }

    /// Returns the source line the diagnostic points at.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::IllegalCharacter { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::ExpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::IllegalCharacter { character, line } => {
                write!(f, "Error on line {line}: Illegal character '{character}'.")
            },
            Self::UnexpectedToken { token, line } => {
                write!(f, "Error on line {line}: Syntax error at {token}.")
            },
            Self::ExpectedToken {
                expected,
                found,
                line,
            } => {
                write!(f, "Error on line {line}: Expected {expected}, found {found}.")
            },
            Self::UnexpectedEndOfInput { line } => {
                write!(f, "Error on line {line}: Unexpected end of input.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
