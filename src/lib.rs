#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]
//! Python-like `list` and `dict` containers over heterogeneous values.
//!
//! [`List`] is an ordered, growable sequence and [`Dict`] a string-keyed map. Both store [`Value`]s (a tagged union of
//! `None`, bool, int, float, str and nested list/dict handles) and offer the familiar Python methods: `append`,
//! `insert`, `delete`, `pop`, `index`, `remove`, `reverse`, `sort`, `set_default`, `update`, `items`/`keys`/`values`.
//!
//! ## Error Policy
//!
//! Operations that Python would raise on return a [`CollectionError`] instead. Nothing panics, nothing logs, and a
//! failed mutation leaves the container unchanged. Compare errors with [`CollectionError::kind`].
//!
//! ## Threading
//!
//! Containers are single-threaded: nested values are `Rc<RefCell<_>>` handles, so `List`, `Dict` and `Value` are
//! neither `Send` nor `Sync`.
//!
//! ## Examples
//! ```rust
//! use listdict::prelude::*;
//!
//! let mut d = dict! {"a" => 1};
//! d.update(&dict! {"a" => 2, "b" => 3});
//! assert_eq!(d, dict! {"a" => 2, "b" => 3});
//!
//! let err = Dict::new().pop("x", Value::from(0)).unwrap_err();
//! assert_eq!(err.kind(), ErrorKind::EmptyContainer);
//! ```

mod macros;

pub mod dict;
pub mod errors;
pub mod list;
pub mod prelude;
pub mod value;

#[cfg(feature = "json")]
pub mod json;

pub use dict::{Dict, dict_from_keys};
pub use errors::{CollectionError, Result};
pub use list::List;
pub use value::{DictRef, ListRef, Value};

#[cfg(feature = "json")]
pub use json::{FromJson, ToJson};
