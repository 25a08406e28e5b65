use std::fmt::Display;

use crate::value::Position;

/// Lexical category of a [`Token`].
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum TokenKind {
    Illegal,
    Eof,

    Comma,
    Colon,

    LBrace,
    RBrace,
    LBracket,
    RBracket,

    True,
    False,
    Null,

    Int,
    Float,
    String,

    Minus,
}

impl TokenKind {
    /// Name used in parser messages.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Illegal => "ILLEGAL",
            Self::Eof => "EOF",
            Self::Comma => "COMMA",
            Self::Colon => "COLON",
            Self::LBrace => "{",
            Self::RBrace => "}",
            Self::LBracket => "[",
            Self::RBracket => "]",
            Self::True => "TRUE",
            Self::False => "FALSE",
            Self::Null => "NULL",
            Self::Int => "INT",
            Self::Float => "FLOAT",
            Self::String => "STRING",
            Self::Minus => "-",
        }
    }

    pub fn punctuation(c: char) -> Option<Self> {
        match c {
            ',' => Some(Self::Comma),
            ':' => Some(Self::Colon),
            '{' => Some(Self::LBrace),
            '}' => Some(Self::RBrace),
            '[' => Some(Self::LBracket),
            ']' => Some(Self::RBracket),
            '-' => Some(Self::Minus),
            _ => None,
        }
    }

    /// Keyword for a run of letters, `Illegal` when it is none of them.
    pub fn keyword(word: &str) -> Self {
        match word {
            "true" => Self::True,
            "false" => Self::False,
            "null" => Self::Null,
            _ => Self::Illegal,
        }
    }
}

impl Display for TokenKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One scanned unit of input.
///
/// For strings, `literal` holds the decoded text (without the surrounding quotes).
#[derive(Debug, PartialEq, Clone)]
pub struct Token {
    pub kind: TokenKind,
    pub literal: String,
    pub start: Position,
    pub end: Position,
}

impl Token {
    pub fn new(kind: TokenKind, literal: impl Into<String>) -> Self {
        Self {
            kind,
            literal: literal.into(),
            start: Position::default(),
            end: Position::default(),
        }
    }

    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }
}
