#![forbid(unsafe_code)]
#![warn(clippy::all)]
//! This crate parses a JSON document into an expression tree and lets you pull
//! values out of it with a dotted path, without walking the tree yourself.
//!
//! ## How to use it ?
//!
//! ```rust
//! use dotted_json::{parse, value::Value};
//!
//! let (document, errors) = parse(r#"{"foo": [1, 2, {"bar": 3, "baz": 4}]}"#);
//!
//! assert!(errors.is_empty());
//! assert_eq!(document.get("foo.[2].baz"), Ok(Value::Int(4)));
//! assert_eq!(document.to_string(), r#"{"foo": [1, 2, {"bar": 3, "baz": 4}]}"#);
//! ```
//!
//! Errors come back next to the document. The first error aborts the parse,
//! so the document has no root when one could not be built.
//!
//! ```rust
//! use dotted_json::parse;
//!
//! let (document, errors) = parse("{");
//!
//! assert!(document.is_empty());
//! assert_eq!(
//!     errors[0].to_string(),
//!     "expected next token to be STRING, got EOF instead."
//! );
//! ```
//!
//! If any error should fail the parse, use [`str::parse`]:
//!
//! ```rust
//! use dotted_json::ast::Document;
//!
//! let document: Document = "[true, null, -3.14]".parse().unwrap();
//!
//! assert_eq!(document.get("[2]").unwrap().as_f64(), Some(-3.14));
//! ```
//!
//! ## Paths
//!
//! A path is split on `.`. Each segment is either an object key (`foo`) or an
//! array index in brackets (`[0]`). Lookup errors are [`error::PathError`]s.
//!
//! ## Limits
//!
//! Expressions nest at most [`parser::DEFAULT_MAX_DEPTH`] deep unless the
//! parser is built with [`parser::Parser::with_max_depth`]. Only `\"` is
//! decoded inside strings; every other byte is kept as written.

mod evaluator;
mod ser;

pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod token;
pub mod value;

pub use evaluator::evaluate;
pub use parser::parse;
