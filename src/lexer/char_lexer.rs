use std::str::Chars;

use crate::position::Position;

/// Abstraction over a char iterator with position information.
///
/// This is the single cursor shared by the driver and every recognizer.
/// Each consumed character moves the byte offset forward and updates the
/// line and column, so recognizers never do their own bookkeeping.
#[derive(Clone)]
pub struct CharLexer<'a> {
    source: &'a str,
    chars: Chars<'a>,
    byte_position: usize,
    position: Position,
}

impl<'a> CharLexer<'a> {
    /// Constructs a new [`CharLexer`] for the given source string,
    /// starting at line 1, column 1.
    pub fn new(source: &'a str) -> Self {
        Self {
            source,
            chars: source.chars(),
            byte_position: 0,
            position: Position::start(),
        }
    }

    /// Tries to advance the lexer by one character.
    /// Returns the character wrapped in an [`Option`] if it was successful,
    /// or [`None`] if the lexer cannot advance any further.
    pub fn try_next(&mut self) -> Option<char> {
        let next = self.chars.next();
        if let Some(ch) = next {
            self.byte_position += ch.len_utf8();
            self.position.advance(ch);
        }
        next
    }

    /// Returns the next character without consuming it.
    pub fn peek(&self) -> Option<char> {
        self.chars.clone().next()
    }

    /// Returns the character after the next one without consuming anything.
    pub fn peek_second(&self) -> Option<char> {
        self.chars.clone().nth(1)
    }

    /// Retrieves the byte offset of the lexer.
    pub fn byte_position(&self) -> usize {
        self.byte_position
    }

    /// Retrieves the line and column of the next character.
    pub fn position(&self) -> Position {
        self.position
    }

    /// Consumes characters while `predicate` evaluates to `true`.
    /// Returns the consumed slice of the source.
    pub fn consume_while<P>(&mut self, mut predicate: P) -> &'a str
    where
        P: FnMut(char) -> bool,
    {
        let start = self.byte_position;
        while let Some(ch) = self.peek() {
            if !predicate(ch) {
                break;
            }
            self.try_next();
        }
        self.slice(start, self.byte_position)
    }

    /// Returns the source text between two byte offsets.
    pub fn slice(&self, from: usize, to: usize) -> &'a str {
        &self.source[from..to]
    }

    /// Returns the source text from `from` up to the current byte offset.
    pub fn slice_from(&self, from: usize) -> &'a str {
        self.slice(from, self.byte_position)
    }
}
