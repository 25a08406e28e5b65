use memchr::memchr2;
use nom::{
    branch::alt,
    bytes::complete::{take_while, take_while1},
    character::complete::{anychar, char, digit0, digit1},
    combinator::{eof, map, map_opt, opt, recognize},
    sequence::{pair, preceded},
    IResult, InputTake,
};
use nom_locate::{position, LocatedSpan};

use crate::token::{Token, TokenKind};
use crate::value::Position;

pub type Span<'a> = LocatedSpan<&'a str>;

type Result<'a, R> = IResult<Span<'a>, R>;

fn is_sp(c: char) -> bool {
    let chars = " \t\r\n";

    chars.contains(c)
}

fn is_letter(c: char) -> bool {
    c.is_ascii_alphabetic() || c == '_'
}

fn end_of_input(i: Span) -> Result<(TokenKind, String)> {
    map(eof, |_| (TokenKind::Eof, String::new()))(i)
}

fn punctuation(i: Span) -> Result<(TokenKind, String)> {
    map_opt(anychar, |c| {
        TokenKind::punctuation(c).map(|kind| (kind, c.to_string()))
    })(i)
}

/// Everything after an opening quote, up to and including the closing one.
///
/// `\"` is the only escape: it stands for a quote and does not close the
/// string. Any other byte, backslashes included, is kept as is. A string
/// missing its closing quote runs to the end of the input.
fn string_body(i: Span) -> Result<String> {
    let frag = *i.fragment();
    let bytes = frag.as_bytes();

    let mut decoded = String::new();
    let mut offset = 0;

    let consumed = loop {
        let Some(found) = memchr2(b'"', b'\\', &bytes[offset..]) else {
            decoded.push_str(&frag[offset..]);
            break frag.len();
        };
        let at = offset + found;

        if bytes[at] == b'"' {
            decoded.push_str(&frag[offset..at]);
            break at + 1;
        }

        if bytes.get(at + 1) == Some(&b'"') {
            decoded.push_str(&frag[offset..at]);
            decoded.push('"');
            offset = at + 2;
        } else {
            decoded.push_str(&frag[offset..=at]);
            offset = at + 1;
        }
    };

    let (rest, _) = i.take_split(consumed);

    Ok((rest, decoded))
}

fn string(i: Span) -> Result<(TokenKind, String)> {
    map(preceded(char('"'), string_body), |s| (TokenKind::String, s))(i)
}

// Digits with at most one dot. A second dot ends the number.
fn number(i: Span) -> Result<(TokenKind, String)> {
    map(
        recognize(pair(digit1, opt(pair(char('.'), digit0)))),
        |n: Span| {
            let literal = n.fragment().to_string();
            let kind = if literal.contains('.') {
                TokenKind::Float
            } else {
                TokenKind::Int
            };

            (kind, literal)
        },
    )(i)
}

fn keyword(i: Span) -> Result<(TokenKind, String)> {
    map(take_while1(is_letter), |word: Span| {
        (TokenKind::keyword(word.fragment()), word.fragment().to_string())
    })(i)
}

fn illegal(i: Span) -> Result<(TokenKind, String)> {
    map(anychar, |c| (TokenKind::Illegal, c.to_string()))(i)
}

fn token(i: Span) -> Result<Token> {
    let (i, _) = take_while(is_sp)(i)?;

    let (i, start) = position(i)?;

    let (i, (kind, literal)) =
        alt((end_of_input, punctuation, string, number, keyword, illegal))(i)?;

    let (i, end) = position(i)?;

    Ok((
        i,
        Token {
            kind,
            literal,
            start: start.into(),
            end: end.into(),
        },
    ))
}

/// Hands out one token at a time from an in-memory document.
///
/// Once the input is exhausted every call to [`Lexer::next_token`] returns an
/// `EOF` token with an empty literal.
#[derive(Debug, Clone)]
pub struct Lexer<'a> {
    input: Span<'a>,
}

impl<'a> Lexer<'a> {
    pub fn new(input: &'a str) -> Self {
        Self {
            input: Span::new(input),
        }
    }

    pub fn next_token(&mut self) -> Token {
        match token(self.input) {
            Ok((rest, token)) => {
                self.input = rest;
                log::trace!("{} {:?} at {}", token.kind, token.literal, token.start);

                token
            }
            // `illegal` accepts any character and `end_of_input` an empty rest,
            // so this is only reached if the grammar above changes.
            Err(_) => {
                let position = Position::from(self.input);
                let (rest, _) = self.input.take_split(self.input.fragment().len());
                self.input = rest;

                Token {
                    kind: TokenKind::Eof,
                    literal: String::new(),
                    start: position,
                    end: position,
                }
            }
        }
    }
}

/// Yields every token before `EOF`.
impl<'a> Iterator for Lexer<'a> {
    type Item = Token;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();

        (!token.is(TokenKind::Eof)).then_some(token)
    }
}
