use thiserror::Error;

use crate::values::SLOTS;

/// Errors raised while filling a [`Values`](crate::Values) table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValuesError {
    #[error("value index {index} is out of range (placeholders go from %0 to %9)")]
    IndexOutOfRange { index: usize },
    #[error("{given} values supplied but the table only holds {max}", max = SLOTS)]
    TooMany { given: usize },
}

/// Errors raised by the fixed-capacity [`StackBuffer`](crate::StackBuffer) sink.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum BufferError {
    #[error("buffer full: capacity is {capacity} bytes")]
    Full { capacity: usize },
}
