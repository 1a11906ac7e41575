//! Provide the shared, pure policy and vocabulary behind the `listdict` containers.
//!
//! This crate is intentionally small and dependency-free. It holds the pieces both containers must agree on:
//! - the error taxonomy ([`errors::ErrorKind`]) and its registry,
//! - container and value kind vocabularies,
//! - numeric equality, the cross-kind sort order and float rendering ([`ordering`]).
//!
//! ## Notes
//!
//! - No IO, no global state, no container types. `listdict` owns `Value`, `List` and `Dict`.

pub mod errors;
pub mod lang;
pub mod ordering;

pub use errors::ErrorKind;
pub use lang::containers::ContainerKind;
pub use lang::kinds::ValueKind;
