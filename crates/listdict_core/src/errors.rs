//! The container error taxonomy.
//!
//! Errors are compared by kind, never by identity. The runtime error type in `listdict` carries context (index,
//! length, rendered value) on top of one of these kinds.

use core::fmt;

use crate::lang;

/// The four ways a container operation can fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    /// The operation needs at least one element/entry but the container has none.
    EmptyContainer,
    /// A supplied index is less than zero.
    NegativeIndex,
    /// A supplied index is greater than or equal to the current length.
    IndexOutOfRange,
    /// A search or removal by value found no equal element.
    NotFound,
}

impl ErrorKind {
    /// All error kinds, in registry order.
    pub const ALL: &'static [ErrorKind] = &[
        ErrorKind::EmptyContainer,
        ErrorKind::NegativeIndex,
        ErrorKind::IndexOutOfRange,
        ErrorKind::NotFound,
    ];

    /// Return the canonical spelling (e.g. `"EmptyContainer"`).
    #[inline]
    pub fn as_str(self) -> &'static str {
        lang::errors::as_str(self)
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
