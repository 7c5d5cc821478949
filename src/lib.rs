//! A lexer for a small JavaScript-like language.
//!
//! [`lexer::tokenize`] turns a source string into keywords, identifiers,
//! numbers, strings, comments, operators and punctuation, each tagged with
//! the line and column it starts at. The sequence always ends with a single
//! end-of-input token.
//!
//! ```
//! use jslex::lexer::{self, tokens::TokenKind};
//!
//! let tokens = lexer::tokenize("let x = -1.5e3; // done").unwrap();
//! let kinds: Vec<_> = tokens.iter().map(|t| t.kind).collect();
//!
//! assert_eq!(
//!     kinds,
//!     [
//!         TokenKind::Keyword,
//!         TokenKind::Identifier,
//!         TokenKind::Operator,
//!         TokenKind::Number,
//!         TokenKind::Punctuation,
//!         TokenKind::Comment,
//!         TokenKind::EndOfInput,
//!     ]
//! );
//! assert_eq!(tokens[3].lexeme, "-1.5e3");
//! ```
pub mod error;
pub mod lexer;
pub mod position;
pub mod source_map;
