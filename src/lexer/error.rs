//! Errors produced while lexing.
use std::fmt::{Display, Formatter};

use thiserror::Error;

use crate::{error::PositionalError, position::Position};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErrorType {
    #[error("Malformed number")]
    MalformedNumber,
    #[error("Numbers may not start with a zero followed by another digit")]
    LeadingZero,
    #[error("Malformed exponent")]
    MalformedExponent,
    #[error("Invalid character '{0}' directly after a number")]
    InvalidTrailingCharacter(char),
    #[error("Unterminated string literal")]
    UnterminatedString,
    #[error("Unterminated block comment")]
    UnterminatedComment,
    #[error("Unknown operator")]
    UnknownOperator,
}

/// A lexer failure, located at the first character of the offending token.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    pub position: Position,
    pub error_type: ErrorType,
}

impl LexError {
    pub fn new(error_type: ErrorType, position: Position) -> Self {
        Self {
            position,
            error_type,
        }
    }
}

impl Display for LexError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at line {}, column {}",
            self.error_type, self.position.line, self.position.column
        )
    }
}

impl PositionalError for LexError {
    fn position(&self) -> Position {
        self.position
    }

    fn describe(&self) -> String {
        self.error_type.to_string()
    }
}
