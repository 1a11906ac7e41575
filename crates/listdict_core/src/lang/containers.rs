//! Container kind vocabulary.
//!
//! Error messages name the container they come from (`pop from empty list`, `x is not in list`). This registry keeps
//! those spellings in one place.
//!
//! ## Examples
//! ```rust
//! use listdict_core::lang::containers::{self, ContainerKind};
//!
//! assert_eq!(containers::from_str("Dict"), Some(ContainerKind::Dict));
//! assert_eq!(containers::as_str(ContainerKind::List), "list");
//! ```

use core::fmt;

use super::registry::{LangItemInfo, Stability, find_impl, from_str_impl};

/// Stable identifier for the container types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    List,
    Dict,
}

impl ContainerKind {
    /// All container kinds, in registry order.
    pub const ALL: &'static [ContainerKind] = &[ContainerKind::List, ContainerKind::Dict];
}

impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// Metadata for a container kind.
pub type ContainerInfo = LangItemInfo<ContainerKind>;

/// Registry of container kinds.
pub const CONTAINERS: &[ContainerInfo] = &[
    info(
        ContainerKind::List,
        "list",
        &["List", "sequence"],
        "Ordered, index-addressable, growable sequence of values.",
    ),
    info(
        ContainerKind::Dict,
        "dict",
        &["Dict", "map"],
        "Mapping from unique string keys to values; iteration order is unspecified.",
    ),
];

/// Resolve a spelling to a container kind (case-sensitive).
pub fn from_str(name: &str) -> Option<ContainerKind> {
    from_str_impl(CONTAINERS, name)
}

/// Return the lowercase spelling used in messages (e.g. `"list"`).
pub fn as_str(kind: ContainerKind) -> &'static str {
    info_for(kind).canonical
}

/// Return full metadata for a container kind.
///
/// ## Panics
/// - If the registry is missing an entry for `kind` (programming error).
pub fn info_for(kind: ContainerKind) -> &'static ContainerInfo {
    find_impl(CONTAINERS, kind).expect("INVARIANT: every ContainerKind has a registry entry")
}

const fn info(
    id: ContainerKind,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> ContainerInfo {
    LangItemInfo {
        id,
        canonical,
        aliases,
        description,
        since_version: Some("0.1.0"),
        stability: Stability::Stable,
        examples: &[],
    }
}
