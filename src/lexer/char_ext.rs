//! Character classes used by the lexer.
pub trait CharExt {
    /// Letters, `_` and `$` may start an identifier.
    fn is_ident_start(self) -> bool;

    /// Letters, digits, `_` and `$` may continue an identifier.
    fn is_ident_continue(self) -> bool;

    fn is_operator_start(self) -> bool;

    fn is_punctuation(self) -> bool;
}
impl CharExt for char {
    fn is_ident_start(self) -> bool {
        self.is_ascii_alphabetic() || self == '_' || self == '$'
    }

    fn is_ident_continue(self) -> bool {
        self.is_ascii_alphanumeric() || self == '_' || self == '$'
    }

    fn is_operator_start(self) -> bool {
        matches!(
            self,
            '+' | '-' | '*' | '/' | '=' | '<' | '>' | '!' | '&' | '|' | '^' | '%'
        )
    }

    fn is_punctuation(self) -> bool {
        matches!(self, '(' | ')' | '{' | '}' | '[' | ']' | ',' | ';' | '.')
    }
}
