//! Functionality for converting a source code string into a
//! [`Token`](tokens::Token) stream.
mod char_ext;
mod char_lexer;
mod comment;
mod error;
mod identifier;
mod lexer;
mod number;
mod operator;
mod string;

pub mod tokens;

pub use error::{ErrorType, LexError};
pub use lexer::*;
