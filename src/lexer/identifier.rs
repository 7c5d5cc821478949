//! Identifier and keyword lexing.
use super::{
    char_ext::CharExt,
    char_lexer::CharLexer,
    tokens::{is_keyword, Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Body,
}

/// Reads an identifier, reclassifying it as a keyword if it is reserved.
/// The lexer must be positioned on a letter, `_` or `$`.
pub(super) fn identifier(lexer: &mut CharLexer) -> Token {
    let start = lexer.position();
    let from = lexer.byte_position();
    let mut state = State::Start;

    loop {
        state = match (state, lexer.peek()) {
            (State::Start, Some(ch)) if ch.is_ident_start() => State::Body,
            (State::Start, _) => unreachable!("Identifier lexing started on a non-identifier"),
            (State::Body, Some(ch)) if ch.is_ident_continue() => State::Body,
            (State::Body, _) => break,
        };
        lexer.try_next();
    }

    let text = lexer.slice_from(from);
    let kind = if is_keyword(text) {
        TokenKind::Keyword
    } else {
        TokenKind::Identifier
    };
    Token::new(kind, text, start)
}
