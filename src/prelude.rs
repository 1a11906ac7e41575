//! Prelude module for common imports.
//!
//! ```ignore
//! use listdict::prelude::*;
//! ```

pub use crate::dict::{Dict, dict_from_keys};
pub use crate::errors::{CollectionError, Result};
pub use crate::list::List;
pub use crate::value::{DictRef, ListRef, Value};
pub use crate::{dict, list};
pub use listdict_core::{ContainerKind, ErrorKind, ValueKind};

#[cfg(feature = "json")]
pub use crate::json::{FromJson, ToJson};
