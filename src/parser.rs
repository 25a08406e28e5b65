use std::collections::{hash_map::Entry, HashMap};
use std::str::FromStr;

use crate::ast::{Document, Expression};
use crate::error::{Error, Errors, Kind};
use crate::lexer::Lexer;
use crate::token::{Token, TokenKind};

/// Default bound on how deeply expressions may nest.
pub const DEFAULT_MAX_DEPTH: usize = 128;

pub type Result<T> = std::result::Result<T, Error>;

type ParseFn<'a> = fn(&mut Parser<'a>) -> Result<Expression>;

/// The function that parses an expression starting with a token of `kind`.
fn prefix_parse_fn<'a>(kind: TokenKind) -> Option<ParseFn<'a>> {
    let parse: ParseFn<'a> = match kind {
        TokenKind::True | TokenKind::False => Parser::parse_boolean,
        TokenKind::Null => Parser::parse_null,
        TokenKind::Int => Parser::parse_integer,
        TokenKind::Float => Parser::parse_float,
        TokenKind::Minus => Parser::parse_prefix_expression,
        TokenKind::String => Parser::parse_string,
        TokenKind::LBrace => Parser::parse_object,
        TokenKind::LBracket => Parser::parse_array,
        _ => return None,
    };

    Some(parse)
}

/// Integer literal rules: an optional `0x`, `0o` or `0b` prefix, and a
/// leading `0` meaning octal.
fn parse_int_literal(literal: &str) -> Option<i64> {
    let (digits, radix) = match literal.as_bytes() {
        [b'0', b'x' | b'X', ..] => (&literal[2..], 16),
        [b'0', b'o' | b'O', ..] => (&literal[2..], 8),
        [b'0', b'b' | b'B', ..] => (&literal[2..], 2),
        [b'0', _, ..] => (&literal[1..], 8),
        _ => (literal, 10),
    };

    i64::from_str_radix(digits, radix).ok()
}

/// Recursive descent parser over a [`Lexer`].
///
/// Each parse function starts on the first token of its expression and
/// returns with the last one as the current token. The first failure unwinds
/// the whole parse; [`Parser::parse`] records it and returns a document
/// without a root.
pub struct Parser<'a> {
    lexer: Lexer<'a>,
    errors: Vec<Error>,

    current: Token,
    peek: Token,

    depth: usize,
    max_depth: usize,
}

impl<'a> Parser<'a> {
    pub fn new(lexer: Lexer<'a>) -> Self {
        Self::with_max_depth(lexer, DEFAULT_MAX_DEPTH)
    }

    pub fn with_max_depth(mut lexer: Lexer<'a>, max_depth: usize) -> Self {
        let current = lexer.next_token();
        let peek = lexer.next_token();

        Self {
            lexer,
            errors: Vec::new(),
            current,
            peek,
            depth: 0,
            max_depth,
        }
    }

    pub fn errors(&self) -> &[Error] {
        &self.errors
    }

    pub fn into_errors(self) -> Vec<Error> {
        self.errors
    }

    /// Parses one expression and stops; whatever follows it is not read.
    /// Check [`Parser::errors`] afterwards to tell a failed parse apart.
    pub fn parse(&mut self) -> Document {
        let root = match self.parse_expression() {
            Ok(root) => Some(root),
            Err(e) => {
                self.record(e);
                None
            }
        };

        Document { root }
    }

    fn record(&mut self, e: Error) {
        log::debug!("parse error at {}: {}", e.start, e);
        self.errors.push(e);
    }

    fn next_token(&mut self) {
        self.current = std::mem::replace(&mut self.peek, self.lexer.next_token());
    }

    fn cur_token_is(&self, kind: TokenKind) -> bool {
        self.current.is(kind)
    }

    fn peek_token_is(&self, kind: TokenKind) -> bool {
        self.peek.is(kind)
    }

    /// Advances when the next token is a `kind`.
    fn expect_peek(&mut self, kind: TokenKind) -> Result<()> {
        if self.peek_token_is(kind) {
            self.next_token();
            Ok(())
        } else {
            Err(self.peek_error(kind))
        }
    }

    fn peek_error(&self, expected: TokenKind) -> Error {
        Error::at(
            &self.peek,
            Kind::UnexpectedToken {
                expected,
                found: self.peek.kind,
            },
        )
    }

    fn parse_expression(&mut self) -> Result<Expression> {
        let Some(parse) = prefix_parse_fn(self.current.kind) else {
            return Err(Error::at(
                &self.current,
                Kind::NoParseFunction(self.current.kind),
            ));
        };

        if self.depth >= self.max_depth {
            return Err(Error::at(
                &self.current,
                Kind::DepthLimitExceeded(self.max_depth),
            ));
        }

        self.depth += 1;
        let expression = parse(self);
        self.depth -= 1;

        expression
    }

    fn parse_boolean(&mut self) -> Result<Expression> {
        Ok(Expression::Boolean {
            value: self.cur_token_is(TokenKind::True),
            token: self.current.clone(),
        })
    }

    fn parse_null(&mut self) -> Result<Expression> {
        Ok(Expression::Null {
            token: self.current.clone(),
        })
    }

    fn parse_integer(&mut self) -> Result<Expression> {
        let literal = &self.current.literal;

        let value = parse_int_literal(literal).ok_or_else(|| {
            Error::at(&self.current, Kind::InvalidInteger(literal.clone()))
        })?;

        Ok(Expression::Integer {
            token: self.current.clone(),
            value,
        })
    }

    fn parse_float(&mut self) -> Result<Expression> {
        Ok(Expression::Float {
            value: self.current.literal.clone(),
            token: self.current.clone(),
        })
    }

    fn parse_prefix_expression(&mut self) -> Result<Expression> {
        let token = self.current.clone();

        self.next_token();

        let right = self.parse_expression()?;

        Ok(Expression::Prefix {
            operator: token.literal.clone(),
            token,
            right: Box::new(right),
        })
    }

    fn parse_string(&mut self) -> Result<Expression> {
        Ok(Expression::String {
            value: self.current.literal.clone(),
            token: self.current.clone(),
        })
    }

    fn parse_object(&mut self) -> Result<Expression> {
        let token = self.current.clone();

        let mut pairs: Vec<(String, Expression)> = Vec::new();
        let mut index: HashMap<String, usize> = HashMap::new();

        while !self.peek_token_is(TokenKind::RBrace) {
            self.expect_peek(TokenKind::String)?;

            let key = self.current.literal.clone();

            self.expect_peek(TokenKind::Colon)?;

            self.next_token();
            let value = self.parse_expression()?;

            match index.entry(key) {
                Entry::Occupied(slot) => {
                    log::debug!("duplicate key {:?} at {}", slot.key(), value.start());
                    pairs[*slot.get()].1 = value;
                }
                Entry::Vacant(slot) => {
                    pairs.push((slot.key().clone(), value));
                    slot.insert(pairs.len() - 1);
                }
            }

            if !self.peek_token_is(TokenKind::RBrace) {
                self.expect_peek(TokenKind::Comma)?;
            }
        }

        self.expect_peek(TokenKind::RBrace)?;

        Ok(Expression::Object { token, pairs })
    }

    fn parse_array(&mut self) -> Result<Expression> {
        let token = self.current.clone();
        let mut values = Vec::new();

        if self.peek_token_is(TokenKind::RBracket) {
            self.next_token();
            return Ok(Expression::Array { token, values });
        }

        self.next_token();
        values.push(self.parse_expression()?);

        while self.peek_token_is(TokenKind::Comma) {
            self.next_token();
            self.next_token();
            values.push(self.parse_expression()?);
        }

        self.expect_peek(TokenKind::RBracket)?;

        Ok(Expression::Array { token, values })
    }
}

/// Parses `s` and returns the document together with every error found.
pub fn parse(s: &str) -> (Document, Vec<Error>) {
    let mut parser = Parser::new(Lexer::new(s));

    let document = parser.parse();

    (document, parser.into_errors())
}

/// Strict parsing: any error fails the whole document.
impl FromStr for Document {
    type Err = Errors;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match parse(s) {
            (document, errors) if errors.is_empty() => Ok(document),
            (_, errors) => Err(Errors(errors)),
        }
    }
}
