use crate::position::Position;

/// An error that can be traced back to a single location in the source code.
pub trait PositionalError {
    fn position(&self) -> Position;
    fn describe(&self) -> String;
}
