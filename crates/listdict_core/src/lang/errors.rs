//! Container error vocabulary.
//!
//! Every failure a `List` or `Dict` operation can report is one of four kinds. This registry gives each kind a canonical
//! spelling, the Python exception it corresponds to (as an alias), and documentation.

use crate::errors::ErrorKind;

use super::registry::{Example, LangItemInfo, Stability, find_impl, from_str_impl};

/// Metadata for a container error kind.
pub type ExceptionInfo = LangItemInfo<ErrorKind>;

/// Registry of container error kinds.
pub const EXCEPTIONS: &[ExceptionInfo] = &[
    info(
        ErrorKind::EmptyContainer,
        "EmptyContainer",
        &["IndexError"],
        "Raised when an operation needs at least one element or entry but the container is empty.",
        &[
            Example {
                code: "List::new().pop()",
                note: Some("Fails with `pop from empty list`."),
            },
            Example {
                code: "Dict::new().pop(\"x\", Value::Int(0))",
                note: Some("An empty dict is distinct from an absent key: this fails instead of returning the fallback."),
            },
        ],
    ),
    info(
        ErrorKind::NegativeIndex,
        "NegativeIndex",
        &[],
        "Raised when a supplied index is less than zero. Python-style negative indexing is not supported.",
        &[Example {
            code: "list![1, 2].delete(-1)",
            note: None,
        }],
    ),
    info(
        ErrorKind::IndexOutOfRange,
        "IndexOutOfRange",
        &[],
        "Raised when a supplied index is greater than or equal to the container length.",
        &[Example {
            code: "list![1, 2].pop_item(2)",
            note: Some("Fails with `index 2 out of range for list of length 2`."),
        }],
    ),
    info(
        ErrorKind::NotFound,
        "NotFound",
        &["ValueError"],
        "Raised when a search or removal by value finds no equal element.",
        &[Example {
            code: "list![\"one\", \"two\"].index(&Value::from(\"zero\"))",
            note: Some("Fails with `zero is not in list`."),
        }],
    ),
];

/// Return the canonical spelling for an error kind (e.g. `"NotFound"`).
#[inline]
pub fn as_str(kind: ErrorKind) -> &'static str {
    info_for(kind).canonical
}

/// Return the user-facing description for an error kind.
#[inline]
pub fn description(kind: ErrorKind) -> &'static str {
    info_for(kind).description
}

/// Return the documentation examples for an error kind.
#[inline]
pub fn examples(kind: ErrorKind) -> &'static [Example] {
    info_for(kind).examples
}

/// Resolve a spelling to an error kind.
///
/// Matching is case-sensitive. Aliases resolve too, but `IndexError` maps to `EmptyContainer` only, since several kinds
/// would correspond to it in Python.
pub fn from_str(name: &str) -> Option<ErrorKind> {
    from_str_impl(EXCEPTIONS, name)
}

/// Return full metadata for an error kind.
///
/// ## Panics
/// - If the registry is missing an entry for `kind` (programming error, covered by the registry guardrail tests).
pub fn info_for(kind: ErrorKind) -> &'static ExceptionInfo {
    find_impl(EXCEPTIONS, kind).expect("INVARIANT: every ErrorKind has a registry entry")
}

const fn info(
    id: ErrorKind,
    canonical: &'static str,
    aliases: &'static [&'static str],
    description: &'static str,
    examples: &'static [Example],
) -> ExceptionInfo {
    LangItemInfo {
        id,
        canonical,
        aliases,
        description,
        since_version: Some("0.1.0"),
        stability: Stability::Stable,
        examples,
    }
}
