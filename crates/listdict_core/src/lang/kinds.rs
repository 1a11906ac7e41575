//! Value kind vocabulary.
//!
//! A container element is one of seven kinds. The spelling of each kind follows Python's builtin type names, which is
//! what users of a "list and dict like Python" library expect to read in docs and debug output.
//!
//! ## Notes
//! - The registry order is **not** the sort order. Cross-kind ordering lives in [`crate::ordering`].

use core::fmt;

use super::registry::{LangItemInfo, Stability, find_impl, from_str_impl};

/// Stable identifier for a value kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ValueKind {
    None,
    Bool,
    Int,
    Float,
    Str,
    List,
    Dict,
}

impl ValueKind {
    /// All value kinds, in registry order.
    pub const ALL: &'static [ValueKind] = &[
        ValueKind::None,
        ValueKind::Bool,
        ValueKind::Int,
        ValueKind::Float,
        ValueKind::Str,
        ValueKind::List,
        ValueKind::Dict,
    ];

    /// Return true for `Int` and `Float`.
    #[inline]
    pub fn is_numeric(self) -> bool {
        matches!(self, ValueKind::Int | ValueKind::Float)
    }

    /// Return true for the nested container kinds.
    #[inline]
    pub fn is_container(self) -> bool {
        matches!(self, ValueKind::List | ValueKind::Dict)
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(as_str(*self))
    }
}

/// Metadata for a value kind.
pub type ValueKindInfo = LangItemInfo<ValueKind>;

/// Registry of value kinds.
pub const VALUE_KINDS: &[ValueKindInfo] = &[
    info(ValueKind::None, "None", &["null", "nil"], "The absent value."),
    info(ValueKind::Bool, "bool", &[], "`True` or `False`."),
    info(ValueKind::Int, "int", &["i64"], "64-bit signed integer."),
    info(ValueKind::Float, "float", &["f64"], "64-bit IEEE 754 float."),
    info(ValueKind::Str, "str", &["string"], "UTF-8 string."),
    info(ValueKind::List, "list", &[], "Shared handle to a nested list."),
    info(ValueKind::Dict, "dict", &[], "Shared handle to a nested dict."),
];

/// Resolve a spelling to a value kind (case-sensitive).
pub fn from_str(name: &str) -> Option<ValueKind> {
    from_str_impl(VALUE_KINDS, name)
}

/// Return the canonical spelling for a value kind (e.g. `"int"`).
pub fn as_str(kind: ValueKind) -> &'static str {
    info_for(kind).canonical
}

/// Return full metadata for a value kind.
///
/// ## Panics
/// - If the registry is missing an entry for `kind` (programming error).
pub fn info_for(kind: ValueKind) -> &'static ValueKindInfo {
    find_impl(VALUE_KINDS, kind).expect("INVARIANT: every ValueKind has a registry entry")
}

const fn info(
    id: ValueKind,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
) -> ValueKindInfo {
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
