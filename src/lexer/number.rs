//! Number literal lexing.
//!
//! Numbers are decimal, with an optional sign, an optional fraction and an
//! optional exponent: `-12.5e+3`. A zero may not be followed by another
//! digit, and a literal may not run straight into an identifier character.
use super::{
    char_ext::CharExt,
    char_lexer::CharLexer,
    error::{ErrorType, LexError},
    tokens::{Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Sign,
    Zero,
    IntPart,
    Dot,
    FracPart,
    Exp,
    ExpSign,
    ExpNum,
}

/// Reads a number literal. The lexer must be positioned on a digit, or on
/// a `+` or `-` followed by a digit.
///
/// The resulting lexeme is the literal exactly as written, sign included.
pub(super) fn number(lexer: &mut CharLexer) -> Result<Token, LexError> {
    let start = lexer.position();
    let from = lexer.byte_position();
    let error = |error_type| Err(LexError::new(error_type, start));
    let mut state = State::Start;

    loop {
        let next = lexer.peek();
        let is_digit = next.is_some_and(|ch| ch.is_ascii_digit());

        state = match (state, next) {
            (State::Start, Some('+' | '-')) => State::Sign,
            (State::Start | State::Sign, Some('0')) => State::Zero,
            (State::Start | State::Sign, _) if is_digit => State::IntPart,
            (State::Start | State::Sign, _) => return error(ErrorType::MalformedNumber),

            (State::Zero, _) if is_digit => return error(ErrorType::LeadingZero),
            (State::IntPart, _) if is_digit => State::IntPart,
            (State::Zero | State::IntPart, Some('.')) => State::Dot,

            (State::Dot, _) if is_digit => State::FracPart,
            (State::Dot, _) => return error(ErrorType::MalformedNumber),
            (State::FracPart, _) if is_digit => State::FracPart,

            (State::Zero | State::IntPart | State::FracPart, Some('e' | 'E')) => State::Exp,
            (State::Exp, Some('+' | '-')) => State::ExpSign,
            (State::Exp | State::ExpSign | State::ExpNum, _) if is_digit => State::ExpNum,
            (State::Exp | State::ExpSign, _) => return error(ErrorType::MalformedExponent),

            (State::Zero | State::IntPart | State::FracPart | State::ExpNum, _) => break,
        };
        lexer.try_next();
    }

    match lexer.peek() {
        Some(ch) if ch.is_ident_continue() => error(ErrorType::InvalidTrailingCharacter(ch)),
        _ => Ok(Token::new(TokenKind::Number, lexer.slice_from(from), start)),
    }
}
