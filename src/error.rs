use std::fmt::Display;

use thiserror::Error;

use crate::token::{Token, TokenKind};
use crate::value::Position;

#[derive(Debug, PartialEq, Clone)]
pub enum Kind {
    /// The token cannot start an expression (this is where illegal input surfaces).
    NoParseFunction(TokenKind),
    UnexpectedToken {
        expected: TokenKind,
        found: TokenKind,
    },
    InvalidInteger(String),
    DepthLimitExceeded(usize),
}

impl Display for Kind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoParseFunction(kind) => write!(f, "no parse function for {} found.", kind),
            Self::UnexpectedToken { expected, found } => write!(
                f,
                "expected next token to be {}, got {} instead.",
                expected, found
            ),
            Self::InvalidInteger(literal) => {
                write!(f, "could not parse {:?} as integer.", literal)
            }
            Self::DepthLimitExceeded(max) => {
                write!(f, "maximum nesting depth of {} exceeded.", max)
            }
        }
    }
}

/// A parse error and the span of the token it was raised on.
#[derive(Debug, PartialEq, Clone, Error)]
#[error("{kind}")]
pub struct Error {
    pub start: Position,
    pub end: Position,
    pub kind: Kind,
}

impl Error {
    pub fn new(start: Position, end: Position, kind: Kind) -> Self {
        Self { start, end, kind }
    }

    pub fn at(token: &Token, kind: Kind) -> Self {
        Self::new(token.start, token.end, kind)
    }
}

/// Every error of a failed parse, in the order they were found.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Errors(pub Vec<Error>);

impl Errors {
    pub fn messages(&self) -> Vec<String> {
        self.0.iter().map(ToString::to_string).collect()
    }
}

impl Display for Errors {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, e) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", e)?;
        }

        Ok(())
    }
}

impl std::error::Error for Errors {}

impl From<Vec<Error>> for Errors {
    fn from(value: Vec<Error>) -> Self {
        Self(value)
    }
}

/// Failure to resolve a path with [`Document::get`](crate::ast::Document::get).
#[derive(Debug, PartialEq, Eq, Clone, Error)]
pub enum PathError {
    /// The segment starts with `[` but is not `[<integer>]`.
    #[error("index error - \"{0}\"")]
    IndexSyntax(String),
    #[error("index error - index out of bounds")]
    IndexOutOfBounds,
    /// Indexing into something that is not an array.
    #[error("index error - cannot use \"[]\"")]
    IndexType,
    /// Missing key, or a key used on something that is not an object.
    #[error("key error - \"{0}\"")]
    Key(String),
}
