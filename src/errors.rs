//! Error values returned by `List` and `Dict` operations.
//!
//! The semantic core (`listdict_core`) owns the error taxonomy (`ErrorKind`) and its spellings. This module adds the
//! per-call context (container, index, length, rendered value) and the user-facing messages. Callers that only care
//! about *which* failure happened compare [`CollectionError::kind`].

use listdict_core::errors::ErrorKind;
use listdict_core::lang::containers::ContainerKind;
use miette::Diagnostic;
use thiserror::Error;

/// Result alias used by every fallible container operation.
pub type Result<T> = std::result::Result<T, CollectionError>;

/// An error returned by a container operation.
///
/// A failed operation leaves its container exactly as it was before the call.
#[derive(Debug, Clone, PartialEq, Eq, Error, Diagnostic)]
pub enum CollectionError {
    #[error("{op} from empty {container}")]
    #[diagnostic(code(listdict::empty_container))]
    EmptyContainer { container: ContainerKind, op: &'static str },

    #[error("negative index {index} is not supported for {container}")]
    #[diagnostic(code(listdict::negative_index), help("indices count from 0; negative indexing is not supported"))]
    NegativeIndex { container: ContainerKind, index: i64 },

    #[error("index {index} out of range for {container} of length {len}")]
    #[diagnostic(code(listdict::index_out_of_range))]
    IndexOutOfRange { container: ContainerKind, index: i64, len: usize },

    #[error("{value} is not in {container}")]
    #[diagnostic(code(listdict::not_found))]
    NotFound { container: ContainerKind, value: String },
}

impl CollectionError {
    /// Return the error kind, for comparison by tag.
    pub fn kind(&self) -> ErrorKind {
        match self {
            CollectionError::EmptyContainer { .. } => ErrorKind::EmptyContainer,
            CollectionError::NegativeIndex { .. } => ErrorKind::NegativeIndex,
            CollectionError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
            CollectionError::NotFound { .. } => ErrorKind::NotFound,
        }
    }

    /// Return the container the failing operation ran on.
    pub fn container(&self) -> ContainerKind {
        match self {
            CollectionError::EmptyContainer { container, .. }
            | CollectionError::NegativeIndex { container, .. }
            | CollectionError::IndexOutOfRange { container, .. }
            | CollectionError::NotFound { container, .. } => *container,
        }
    }

    pub(crate) fn empty_list(op: &'static str) -> Self {
        CollectionError::EmptyContainer {
            container: ContainerKind::List,
            op,
        }
    }

    pub(crate) fn empty_dict(op: &'static str) -> Self {
        CollectionError::EmptyContainer {
            container: ContainerKind::Dict,
            op,
        }
    }

    pub(crate) fn not_in_list(value: impl std::fmt::Display) -> Self {
        CollectionError::NotFound {
            container: ContainerKind::List,
            value: value.to_string(),
        }
    }
}
