//! Tokens, as produced by the lexer.
use std::fmt::{self, Display};

use crate::position::Position;

/// Reserved words. An identifier whose text is one of these is lexed as a
/// [`TokenKind::Keyword`] instead.
pub const KEYWORDS: [&str; 8] = [
    "var", "if", "else", "function", "return", "let", "const", "while",
];

pub fn is_keyword(text: &str) -> bool {
    KEYWORDS.contains(&text)
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Token {
    pub kind: TokenKind,
    /// The consumed source text. String and comment tokens hold only the
    /// text between their delimiters.
    pub lexeme: String,
    /// Line and column of the token's first character.
    pub position: Position,
}
impl Token {
    pub fn new(kind: TokenKind, lexeme: impl Into<String>, position: Position) -> Self {
        Self {
            kind,
            lexeme: lexeme.into(),
            position,
        }
    }
}
impl Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(
            f,
            "[{}] {} '{}'",
            self.position,
            self.kind.short_label(),
            self.lexeme
        )
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Number,
    String,
    Comment,
    Operator,
    Punctuation,
    EndOfInput,
}
impl TokenKind {
    /// The abbreviation used when tracing tokens.
    pub fn short_label(&self) -> &'static str {
        match self {
            TokenKind::Keyword => "KW",
            TokenKind::Identifier => "ID",
            TokenKind::Number => "NUM",
            TokenKind::String => "STR",
            TokenKind::Comment => "CMT",
            TokenKind::Operator => "OP",
            TokenKind::Punctuation => "PUN",
            TokenKind::EndOfInput => "EOF",
        }
    }
}
impl Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            TokenKind::Keyword => "Keyword",
            TokenKind::Identifier => "Identifier",
            TokenKind::Number => "Number",
            TokenKind::String => "String",
            TokenKind::Comment => "Comment",
            TokenKind::Operator => "Operator",
            TokenKind::Punctuation => "Punctuation",
            TokenKind::EndOfInput => "EndOfInput",
        };
        f.write_str(name)
    }
}
