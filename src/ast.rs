use std::fmt::{Display, Write};

use crate::token::Token;
use crate::value::Position;

/// A node of the parsed tree.
///
/// Evaluation and printing recurse once per level; only trees produced by
/// [`Parser`](crate::parser::Parser) are bounded in depth.
///
/// Every node keeps the token it starts at. Scalars render back from that
/// token, so a float is printed exactly as it was written.
#[derive(Debug, PartialEq, Clone)]
pub enum Expression {
    Boolean {
        token: Token,
        value: bool,
    },
    Null {
        token: Token,
    },
    Integer {
        token: Token,
        value: i64,
    },
    /// Kept as source text until evaluated.
    Float {
        token: Token,
        value: String,
    },
    String {
        token: Token,
        value: String,
    },
    Prefix {
        token: Token,
        operator: String,
        right: Box<Expression>,
    },
    /// Pairs in source order, keys unique.
    Object {
        token: Token,
        pairs: Vec<(String, Expression)>,
    },
    Array {
        token: Token,
        values: Vec<Expression>,
    },
}

impl Expression {
    pub fn token(&self) -> &Token {
        match self {
            Self::Boolean { token, .. }
            | Self::Null { token }
            | Self::Integer { token, .. }
            | Self::Float { token, .. }
            | Self::String { token, .. }
            | Self::Prefix { token, .. }
            | Self::Object { token, .. }
            | Self::Array { token, .. } => token,
        }
    }

    pub fn token_literal(&self) -> &str {
        &self.token().literal
    }

    pub fn start(&self) -> Position {
        self.token().start
    }

    /// Value of `key` when this is an object.
    pub fn get(&self, key: &str) -> Option<&Expression> {
        match self {
            Self::Object { pairs, .. } => pairs.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }
}

// `"` is written back as `\"`. A value ending in `\` (only possible from an
// unterminated string) has no terminated spelling: its closing quote reads as
// an escaped one.
fn write_quoted(f: &mut std::fmt::Formatter<'_>, s: &str) -> std::fmt::Result {
    f.write_char('"')?;
    for (i, part) in s.split('"').enumerate() {
        if i > 0 {
            f.write_str("\\\"")?;
        }
        f.write_str(part)?;
    }
    f.write_char('"')
}

impl Display for Expression {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Boolean { token, .. }
            | Self::Null { token }
            | Self::Integer { token, .. }
            | Self::Float { token, .. } => f.write_str(&token.literal),
            Self::String { value, .. } => write_quoted(f, value),
            Self::Prefix {
                operator, right, ..
            } => write!(f, "{}{}", operator, right),
            Self::Object { pairs, .. } => {
                f.write_char('{')?;
                for (i, (key, value)) in pairs.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write_quoted(f, key)?;
                    write!(f, ": {}", value)?;
                }
                f.write_char('}')
            }
            Self::Array { values, .. } => {
                f.write_char('[')?;
                for (i, value) in values.iter().enumerate() {
                    if i > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{}", value)?;
                }
                f.write_char(']')
            }
        }
    }
}

/// The result of a parse: a single root expression, absent when parsing failed
/// before one could be built.
#[derive(Debug, PartialEq, Clone, Default)]
pub struct Document {
    pub(crate) root: Option<Expression>,
}

impl Document {
    /// Wraps a tree built by hand. Such a tree is not held to the parser's
    /// nesting bound, so evaluating or printing a very deep one can overflow
    /// the stack.
    pub fn new(root: Expression) -> Self {
        Self { root: Some(root) }
    }

    pub fn root(&self) -> Option<&Expression> {
        self.root.as_ref()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn into_root(self) -> Option<Expression> {
        self.root
    }
}

/// Renders the root expression; an empty document renders as an empty string.
impl Display for Document {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.root {
            Some(root) => write!(f, "{}", root),
            None => Ok(()),
        }
    }
}
