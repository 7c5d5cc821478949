//! Operator and punctuation lexing.
use super::{
    char_lexer::CharLexer,
    error::{ErrorType, LexError},
    tokens::{Token, TokenKind},
};

/// Operator DFA states, named after the text consumed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Assign,
    Equal,
    Bang,
    NotEqual,
    Less,
    Greater,
    Shift,
    UnsignedShift,
    Ampersand,
    Pipe,
    Arithmetic,
    /// No operator can be extended any further.
    Complete,
}

/// Reads the longest operator starting at the lexer's position.
pub(super) fn operator(lexer: &mut CharLexer) -> Result<Token, LexError> {
    let start = lexer.position();
    let from = lexer.byte_position();
    let mut state = State::Start;

    loop {
        state = match (state, lexer.peek()) {
            (State::Start, Some('=')) => State::Assign,
            (State::Start, Some('!')) => State::Bang,
            (State::Start, Some('<')) => State::Less,
            (State::Start, Some('>')) => State::Greater,
            (State::Start, Some('&')) => State::Ampersand,
            (State::Start, Some('|')) => State::Pipe,
            (State::Start, Some('+' | '-' | '*' | '/' | '%' | '^')) => State::Arithmetic,
            (State::Start, _) => return Err(LexError::new(ErrorType::UnknownOperator, start)),

            // = == ===
            (State::Assign, Some('=')) => State::Equal,
            (State::Equal, Some('=')) => State::Complete,
            // ! != !==
            (State::Bang, Some('=')) => State::NotEqual,
            (State::NotEqual, Some('=')) => State::Complete,
            // < << <=
            (State::Less, Some('<' | '=')) => State::Complete,
            // > >= >> >>= >>> >>>=
            (State::Greater, Some('>')) => State::Shift,
            (State::Shift, Some('>')) => State::UnsignedShift,
            (State::Greater | State::Shift | State::UnsignedShift, Some('=')) => State::Complete,
            // && ||
            (State::Ampersand, Some('&')) => State::Complete,
            (State::Pipe, Some('|')) => State::Complete,
            // + += - -= etc.
            (State::Arithmetic, Some('=')) => State::Complete,

            _ => break,
        };
        lexer.try_next();
    }

    Ok(Token::new(TokenKind::Operator, lexer.slice_from(from), start))
}

/// Reads a single punctuation character.
pub(super) fn punctuation(lexer: &mut CharLexer) -> Token {
    let start = lexer.position();
    let from = lexer.byte_position();
    lexer.try_next();
    Token::new(TokenKind::Punctuation, lexer.slice_from(from), start)
}
