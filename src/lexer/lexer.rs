//! The scanner driver: skips whitespace, classifies the next token by
//! looking ahead, and hands off to exactly one recognizer.
use log::{debug, trace};

use super::{
    char_ext::CharExt,
    char_lexer::CharLexer,
    comment::comment,
    error::LexError,
    identifier::identifier,
    number::number,
    operator::{operator, punctuation},
    string::string_literal,
    tokens::{Token, TokenKind},
};

/// Tokenizes `source`, ending with a single [`TokenKind::EndOfInput`] token.
pub fn tokenize(source: &str) -> Result<Vec<Token>, LexError> {
    tokenize_with(source, |_| {})
}

/// Tokenizes `source`, calling `on_token` for every token in the order
/// it was produced, the final [`TokenKind::EndOfInput`] included.
pub fn tokenize_with<F>(source: &str, mut on_token: F) -> Result<Vec<Token>, LexError>
where
    F: FnMut(&Token),
{
    let mut tokens = vec![];
    for result in Lexer::new(source) {
        let token = result?;
        on_token(&token);
        tokens.push(token);
    }

    debug!("Lexer produced {} tokens", tokens.len());
    Ok(tokens)
}

/// The recognizer the driver picks for the upcoming token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookahead {
    Number,
    Identifier,
    String,
    Comment,
    Operator,
    Punctuation,
    Unknown,
}

impl Lookahead {
    /// Classifies the upcoming token from its first two characters.
    ///
    /// The order of the checks matters: `+` and `-` start a number when a
    /// digit follows them and an operator otherwise, and `/` starts a
    /// comment only when followed by `/` or `*`.
    pub fn classify(first: char, second: Option<char>) -> Self {
        let second_is_digit = second.is_some_and(|ch| ch.is_ascii_digit());

        match first {
            '+' | '-' if second_is_digit => Lookahead::Number,
            ch if ch.is_ascii_digit() => Lookahead::Number,
            ch if ch.is_ident_start() => Lookahead::Identifier,
            '"' | '\'' => Lookahead::String,
            '/' if matches!(second, Some('/' | '*')) => Lookahead::Comment,
            ch if ch.is_operator_start() => Lookahead::Operator,
            ch if ch.is_punctuation() => Lookahead::Punctuation,
            _ => Lookahead::Unknown,
        }
    }
}

/// Lazily produces tokens from a source string.
///
/// The iterator yields [`TokenKind::EndOfInput`] as its last item. After an
/// error has been yielded, it yields nothing further.
pub struct Lexer<'s> {
    lexer: CharLexer<'s>,
    finished: bool,
}

impl<'s> Lexer<'s> {
    pub fn new(source: &'s str) -> Self {
        Self {
            lexer: CharLexer::new(source),
            finished: false,
        }
    }

    /// Reads the next token. Once the input is exhausted, every call
    /// returns a [`TokenKind::EndOfInput`] token.
    pub fn next_token(&mut self) -> Result<Token, LexError> {
        loop {
            self.lexer.consume_while(char::is_whitespace);

            let Some(first) = self.lexer.peek() else {
                return Ok(Token::new(
                    TokenKind::EndOfInput,
                    "",
                    self.lexer.position(),
                ));
            };

            let lexer = &mut self.lexer;
            let token = match Lookahead::classify(first, lexer.peek_second()) {
                Lookahead::Number => number(lexer)?,
                Lookahead::Identifier => identifier(lexer),
                Lookahead::String => string_literal(lexer)?,
                Lookahead::Comment => comment(lexer)?,
                Lookahead::Operator => operator(lexer)?,
                Lookahead::Punctuation => punctuation(lexer),
                Lookahead::Unknown => {
                    // Unrecognised characters are dropped rather than reported.
                    debug!("Skipping {first:?} at {}", lexer.position());
                    lexer.try_next();
                    continue;
                }
            };
            return Ok(token);
        }
    }
}

impl Iterator for Lexer<'_> {
    type Item = Result<Token, LexError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.finished {
            return None;
        }

        let result = self.next_token();
        match &result {
            Ok(token) => {
                trace!("{token}");
                self.finished = token.kind == TokenKind::EndOfInput;
            }
            Err(error) => {
                debug!("Lexer stopped: {error}");
                self.finished = true;
            }
        }
        Some(result)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;
    use crate::{
        lexer::{error::ErrorType, tokens::KEYWORDS},
        position::Position,
    };

    fn expect_kinds(expected: Vec<(TokenKind, &str)>, actual: Vec<Token>) {
        let actual: Vec<(TokenKind, &str)> = actual
            .iter()
            .map(|t| (t.kind, t.lexeme.as_str()))
            .collect();

        assert_eq!(
            expected, actual,
            "\n\nWhen comparing:\n  (expected) {:?}\n  (actual)   {:?}",
            expected, actual
        );
    }

    /// Asserts the token kinds and lexemes, not counting the final end of input.
    fn assert_lexes(source: &str, expected: Vec<(TokenKind, &str)>) {
        let mut tokens = tokenize(source).expect("Unexpected lexer error");
        let last = tokens.pop().expect("Lexer produced no tokens");
        assert_eq!(last.kind, TokenKind::EndOfInput);

        expect_kinds(expected, tokens);
    }

    fn assert_lex_fails(source: &str, error_type: ErrorType) -> LexError {
        match tokenize(source) {
            Ok(tokens) => panic!("Expected lexer to fail, but it produced: {:#?}", tokens),
            Err(error) => {
                assert_eq!(error.error_type, error_type);
                error
            }
        }
    }

    fn positions(source: &str) -> Vec<Position> {
        tokenize(source)
            .expect("Unexpected lexer error")
            .iter()
            .map(|t| t.position)
            .collect()
    }

    #[test]
    fn empty_source_produces_end_of_input() {
        let tokens = tokenize("").expect("Unexpected lexer error");

        assert_eq!(
            tokens,
            vec![Token::new(TokenKind::EndOfInput, "", Position::start())]
        );
    }

    #[test]
    fn end_of_input_is_at_final_position() {
        let tokens = tokenize("x\n  ").expect("Unexpected lexer error");

        assert_eq!(tokens.last().map(|t| t.position), Some(Position::new(2, 3)));
    }

    #[test]
    fn statement_with_string() {
        assert_lexes(
            r#"let x = "ok";"#,
            vec![
                (TokenKind::Keyword, "let"),
                (TokenKind::Identifier, "x"),
                (TokenKind::Operator, "="),
                (TokenKind::String, "ok"),
                (TokenKind::Punctuation, ";"),
            ],
        );
        assert_eq!(
            positions(r#"let x = "ok";"#),
            vec![
                Position::new(1, 1),
                Position::new(1, 5),
                Position::new(1, 7),
                Position::new(1, 9),
                Position::new(1, 13),
                Position::new(1, 14),
            ]
        );
    }

    #[test]
    fn all_keywords_are_recognised() {
        assert_lexes(
            "var if else function return let const while",
            vec![
                (TokenKind::Keyword, "var"),
                (TokenKind::Keyword, "if"),
                (TokenKind::Keyword, "else"),
                (TokenKind::Keyword, "function"),
                (TokenKind::Keyword, "return"),
                (TokenKind::Keyword, "let"),
                (TokenKind::Keyword, "const"),
                (TokenKind::Keyword, "while"),
            ],
        );
    }

    #[test]
    fn numbers_keep_their_text() {
        for source in ["0", "42", "-12.5e+3", "3.14"] {
            assert_lexes(source, vec![(TokenKind::Number, source)]);
        }
    }

    #[test]
    fn sign_before_digit_starts_a_number() {
        assert_lexes(
            "a-1",
            vec![(TokenKind::Identifier, "a"), (TokenKind::Number, "-1")],
        );
    }

    #[test]
    fn sign_before_space_is_an_operator() {
        assert_lexes(
            "a - 1",
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Operator, "-"),
                (TokenKind::Number, "1"),
            ],
        );
    }

    #[test]
    fn number_errors_abort_lexing() {
        assert_lex_fails("007", ErrorType::LeadingZero);
        assert_lex_fails("1.", ErrorType::MalformedNumber);
        assert_lex_fails("12e", ErrorType::MalformedExponent);
        assert_lex_fails("123abc", ErrorType::InvalidTrailingCharacter('a'));
    }

    #[test]
    fn errors_report_token_start() {
        let error = assert_lex_fails("let a = 1;\nb = 08;", ErrorType::LeadingZero);

        assert_eq!(error.position, Position::new(2, 5));
    }

    #[test]
    fn unterminated_literals() {
        assert_lex_fails(r#""abc"#, ErrorType::UnterminatedString);
        assert_lex_fails("/* abc", ErrorType::UnterminatedComment);
    }

    #[test]
    fn string_may_not_contain_newline() {
        let error = assert_lex_fails("x = 'one\ntwo'", ErrorType::UnterminatedString);

        assert_eq!(error.position, Position::new(1, 5));
    }

    #[test]
    fn operators_use_maximal_munch() {
        assert_lexes(">>>=", vec![(TokenKind::Operator, ">>>=")]);
        assert_lexes(
            "a!==b&&c",
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Operator, "!=="),
                (TokenKind::Identifier, "b"),
                (TokenKind::Operator, "&&"),
                (TokenKind::Identifier, "c"),
            ],
        );
    }

    #[test]
    fn division_is_not_a_comment() {
        assert_lexes(
            "a / b",
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Operator, "/"),
                (TokenKind::Identifier, "b"),
            ],
        );
    }

    #[test]
    fn comments_are_tokens() {
        assert_lexes(
            "x // note\n/* block */ y",
            vec![
                (TokenKind::Identifier, "x"),
                (TokenKind::Comment, " note"),
                (TokenKind::Comment, " block "),
                (TokenKind::Identifier, "y"),
            ],
        );
    }

    #[test]
    fn block_comment_over_three_lines_moves_two_lines_down() {
        let positions = positions("  /* one\n two\n three */ next");

        assert_eq!(positions[0], Position::new(1, 3));
        assert_eq!(positions[1], Position::new(3, 11));
    }

    #[test]
    fn punctuation() {
        assert_lexes(
            "f(a[0], {}).g;",
            vec![
                (TokenKind::Identifier, "f"),
                (TokenKind::Punctuation, "("),
                (TokenKind::Identifier, "a"),
                (TokenKind::Punctuation, "["),
                (TokenKind::Number, "0"),
                (TokenKind::Punctuation, "]"),
                (TokenKind::Punctuation, ","),
                (TokenKind::Punctuation, "{"),
                (TokenKind::Punctuation, "}"),
                (TokenKind::Punctuation, ")"),
                (TokenKind::Punctuation, "."),
                (TokenKind::Identifier, "g"),
                (TokenKind::Punctuation, ";"),
            ],
        );
    }

    #[test]
    fn unknown_characters_are_skipped() {
        assert_lexes(
            "a # b @ é ? c",
            vec![
                (TokenKind::Identifier, "a"),
                (TokenKind::Identifier, "b"),
                (TokenKind::Identifier, "c"),
            ],
        );
        assert_eq!(positions("#@x")[0], Position::new(1, 3));
    }

    #[test]
    fn multi_line_program() {
        let source = "if (x >= 0 && x !== y) {\n    console.log(\"ok\");\n}\n";
        let tokens = tokenize(source).expect("Unexpected lexer error");
        let rendered: Vec<String> = tokens.iter().map(Token::to_string).collect();

        assert_eq!(
            rendered,
            vec![
                "[1:1] KW 'if'",
                "[1:4] PUN '('",
                "[1:5] ID 'x'",
                "[1:7] OP '>='",
                "[1:10] NUM '0'",
                "[1:12] OP '&&'",
                "[1:15] ID 'x'",
                "[1:17] OP '!=='",
                "[1:21] ID 'y'",
                "[1:22] PUN ')'",
                "[1:24] PUN '{'",
                "[2:5] ID 'console'",
                "[2:12] PUN '.'",
                "[2:13] ID 'log'",
                "[2:16] PUN '('",
                "[2:17] STR 'ok'",
                "[2:21] PUN ')'",
                "[2:22] PUN ';'",
                "[3:1] PUN '}'",
                "[4:1] EOF ''",
            ]
        );
    }

    #[test]
    fn hook_sees_every_token_in_order() {
        let mut seen = vec![];
        let tokens = tokenize_with("a = 1", |token| seen.push(token.clone()))
            .expect("Unexpected lexer error");

        assert_eq!(seen, tokens);
        assert_eq!(seen.last().map(|t| t.kind), Some(TokenKind::EndOfInput));
    }

    #[test]
    fn hook_is_not_called_past_an_error() {
        let mut seen = vec![];
        let result = tokenize_with("a 1. b", |token| seen.push(token.lexeme.clone()));

        assert!(result.is_err());
        assert_eq!(seen, vec!["a".to_string()]);
    }

    #[test]
    fn iterator_stops_after_end_of_input() {
        let mut lexer = Lexer::new("x");

        assert!(matches!(lexer.next(), Some(Ok(t)) if t.kind == TokenKind::Identifier));
        assert!(matches!(lexer.next(), Some(Ok(t)) if t.kind == TokenKind::EndOfInput));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn iterator_stops_after_error() {
        let mut lexer = Lexer::new("'open x y");

        assert!(matches!(lexer.next(), Some(Err(_))));
        assert!(lexer.next().is_none());
    }

    #[test]
    fn next_token_repeats_end_of_input() {
        let mut lexer = Lexer::new(" ");

        assert_eq!(lexer.next_token().map(|t| t.kind), Ok(TokenKind::EndOfInput));
        assert_eq!(lexer.next_token().map(|t| t.kind), Ok(TokenKind::EndOfInput));
    }

    #[test]
    fn classification_priority() {
        assert_eq!(Lookahead::classify('-', Some('4')), Lookahead::Number);
        assert_eq!(Lookahead::classify('-', Some('=')), Lookahead::Operator);
        assert_eq!(Lookahead::classify('+', None), Lookahead::Operator);
        assert_eq!(Lookahead::classify('9', None), Lookahead::Number);
        assert_eq!(Lookahead::classify('$', Some('1')), Lookahead::Identifier);
        assert_eq!(Lookahead::classify('\'', None), Lookahead::String);
        assert_eq!(Lookahead::classify('/', Some('*')), Lookahead::Comment);
        assert_eq!(Lookahead::classify('/', Some('=')), Lookahead::Operator);
        assert_eq!(Lookahead::classify('.', Some('5')), Lookahead::Punctuation);
        assert_eq!(Lookahead::classify('#', None), Lookahead::Unknown);
    }

    proptest! {
        #[test]
        fn whitespace_only_source_is_end_of_input(source in "[ \t\r\n]{0,40}") {
            let tokens = tokenize(&source).expect("Unexpected lexer error");

            prop_assert_eq!(tokens.len(), 1);
            prop_assert_eq!(tokens[0].kind, TokenKind::EndOfInput);
        }

        #[test]
        fn identifiers_are_single_tokens(source in "[a-zA-Z_$][a-zA-Z0-9_$]{0,30}") {
            let tokens = tokenize(&source).expect("Unexpected lexer error");

            prop_assert_eq!(tokens.len(), 2);
            prop_assert_eq!(&tokens[0].lexeme, &source);
            let expected = if KEYWORDS.contains(&source.as_str()) {
                TokenKind::Keyword
            } else {
                TokenKind::Identifier
            };
            prop_assert_eq!(tokens[0].kind, expected);
        }

        #[test]
        fn tokenizing_is_repeatable(source in "[ -~\n]{0,80}") {
            prop_assert_eq!(tokenize(&source), tokenize(&source));
        }
    }
}
