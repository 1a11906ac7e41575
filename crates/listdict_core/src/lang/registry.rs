//! Shareable metadata for `listdict_core::lang` registries.
//!
//! Each vocabulary in `listdict_core::lang` (error kinds, container kinds, value kinds) is a `const` table of
//! [`LangItemInfo`] entries. This submodule holds the small, dependency-free metadata types those tables share.
//!
//! ## Notes
//! - These types are `Copy` so registries can live in `const` tables.
//! - Metadata is meant for docs/diagnostics; behavior lives in the containers themselves.

/// Identify the crate version a vocabulary item is available since (e.g. `"0.1.0"`).
pub type SinceVersion = &'static str;

/// Describe the lifecycle status of a vocabulary item.
///
/// ## Examples
/// ```rust
/// use listdict_core::lang::registry::Stability;
///
/// let s = Stability::Stable;
/// assert_eq!(format!("{s:?}"), "Stable");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Stability {
    Stable,
    Draft,
    Deprecated,
}

/// Represent a small example snippet for documentation.
///
/// ## Notes
/// - `code` is a short Rust snippet using the public container API.
/// - `note` is an optional one-sentence explanation.
#[derive(Debug, Clone, Copy)]
pub struct Example {
    pub code: &'static str,
    pub note: Option<&'static str>,
}

/// Shared metadata shape for registry items.
///
/// - stable identity (`id`)
/// - accepted spellings (`canonical` + `aliases`)
/// - documentation (`description` + `examples`)
/// - provenance (`since_version`, `stability`)
#[derive(Debug, Clone, Copy)]
pub struct LangItemInfo<Id> {
    pub id: Id,
    pub canonical: &'static str,
    pub aliases: &'static [&'static str],
    pub description: &'static str,
    pub since_version: Option<SinceVersion>,
    pub stability: Stability,
    pub examples: &'static [Example],
}

/// Resolve a spelling (canonical first, then aliases) to a registry id.
///
/// Matching is case-sensitive.
pub(crate) fn from_str_impl<Id: Copy>(items: &[LangItemInfo<Id>], name: &str) -> Option<Id> {
    if let Some(item) = items.iter().find(|i| i.canonical == name) {
        return Some(item.id);
    }
    items
        .iter()
        .find(|i| {
            let aliases: &[&str] = i.aliases;
            aliases.contains(&name)
        })
        .map(|i| i.id)
}

/// Return the registry entry for `id`, or `None` if the table has no entry for it.
pub(crate) fn find_impl<Id: Copy + PartialEq>(items: &'static [LangItemInfo<Id>], id: Id) -> Option<&'static LangItemInfo<Id>> {
    items.iter().find(|i| i.id == id)
}
