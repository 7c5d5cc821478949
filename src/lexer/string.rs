//! String literal lexing.
use super::{
    char_lexer::CharLexer,
    error::{ErrorType, LexError},
    tokens::{Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Body,
    Escape,
    Accept,
}

/// Reads a string literal delimited by the quote character under the lexer.
///
/// The token holds the text between the quotes with escape sequences left
/// as written. Strings may not span lines; an escaped newline is the only
/// way to continue one.
pub(super) fn string_literal(lexer: &mut CharLexer) -> Result<Token, LexError> {
    let start = lexer.position();
    let mut quote = '"';
    let mut content_start = lexer.byte_position();
    let mut content_end = content_start;
    let mut state = State::Start;

    while state != State::Accept {
        let previous = state;
        state = match (state, lexer.peek()) {
            (_, None) | (State::Body, Some('\n')) => {
                return Err(LexError::new(ErrorType::UnterminatedString, start))
            }
            (State::Start, Some(ch)) => {
                quote = ch;
                State::Body
            }
            (State::Body, Some('\\')) => State::Escape,
            (State::Body, Some(ch)) if ch == quote => {
                content_end = lexer.byte_position();
                State::Accept
            }
            (State::Body, Some(_)) | (State::Escape, Some(_)) => State::Body,
            (State::Accept, _) => unreachable!("String lexing continued after the closing quote"),
        };
        lexer.try_next();

        if previous == State::Start {
            content_start = lexer.byte_position();
        }
    }

    Ok(Token::new(
        TokenKind::String,
        lexer.slice(content_start, content_end),
        start,
    ))
}
