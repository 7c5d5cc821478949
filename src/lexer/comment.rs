//! Comment lexing.
//!
//! Both `// line` and `/* block */` comments become tokens whose lexeme is
//! the text between the delimiters. Block comments may span lines.
use super::{
    char_lexer::CharLexer,
    error::{ErrorType, LexError},
    tokens::{Token, TokenKind},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    Start,
    Slash,
    Single,
    Multi,
    Star,
    Accept,
}

/// Reads a comment. The lexer must be positioned on `//` or `/*`.
pub(super) fn comment(lexer: &mut CharLexer) -> Result<Token, LexError> {
    let start = lexer.position();
    let mut content_start = lexer.byte_position();
    let mut content_end = content_start;
    let mut state = State::Start;

    while state != State::Accept {
        let previous = state;
        state = match (state, lexer.peek()) {
            (State::Start, Some('/')) => State::Slash,
            (State::Slash, Some('/')) => State::Single,
            (State::Slash, Some('*')) => State::Multi,
            (State::Start | State::Slash, _) => {
                unreachable!("Comment lexing started without a comment opener")
            }

            // The terminating newline belongs to the surrounding whitespace.
            (State::Single, None | Some('\n')) => {
                content_end = lexer.byte_position();
                break;
            }
            (State::Single, Some(_)) => State::Single,

            (State::Multi | State::Star, None) => {
                return Err(LexError::new(ErrorType::UnterminatedComment, start))
            }
            (State::Multi | State::Star, Some('*')) => {
                content_end = lexer.byte_position();
                State::Star
            }
            (State::Star, Some('/')) => State::Accept,
            (State::Multi | State::Star, Some(_)) => State::Multi,

            (State::Accept, _) => {
                unreachable!("Comment lexing continued after the closing delimiter")
            }
        };
        lexer.try_next();

        if previous == State::Slash {
            content_start = lexer.byte_position();
        }
    }

    Ok(Token::new(
        TokenKind::Comment,
        lexer.slice(content_start, content_end),
        start,
    ))
}
