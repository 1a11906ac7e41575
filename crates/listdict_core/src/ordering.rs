//! Define the comparison and rendering policy shared by `List` and `Dict`.
//!
//! ## Notes
//! - **Numeric equality**: `Int` and `Float` compare by mathematical value (`1 == 1.0`), exactly, without rounding
//!   the integer through `f64`. `NaN` equals `NaN` and no other number, so equality is an equivalence relation.
//! - **Sort order**: one total order over every value kind. Numbers come first (numerically), then strings, bools,
//!   `None`, lists and dicts. See [`kind_rank`].
//! - **NaN placement**: in the sort order `NaN` is greater than every other number and equal to itself, so sorting
//!   never depends on `partial_cmp` returning `None`. Equality agrees with the sort order.

use std::cmp::Ordering;

use crate::lang::kinds::ValueKind;

/// `2^63` as an `f64`: the first float above every `i64`.
const TWO_POW_63: f64 = 9_223_372_036_854_775_808.0;

/// Represent a numeric scalar for policy helpers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Numeric {
    Int(i64),
    Float(f64),
}

/// Return the position of a kind in the cross-kind sort order.
///
/// ## Returns
/// - `0` for `Int`/`Float` (they share a rank and compare numerically with each other)
/// - `1` `Str`, `2` `Bool`, `3` `None`, `4` `List`, `5` `Dict`
///
/// ## Examples
/// ```rust
/// use listdict_core::lang::kinds::ValueKind;
/// use listdict_core::ordering::kind_rank;
///
/// assert_eq!(kind_rank(ValueKind::Int), kind_rank(ValueKind::Float));
/// assert!(kind_rank(ValueKind::Float) < kind_rank(ValueKind::Str));
/// ```
#[inline]
pub fn kind_rank(kind: ValueKind) -> u8 {
    match kind {
        ValueKind::Int | ValueKind::Float => 0,
        ValueKind::Str => 1,
        ValueKind::Bool => 2,
        ValueKind::None => 3,
        ValueKind::List => 4,
        ValueKind::Dict => 5,
    }
}

/// Compare two kinds by [`kind_rank`].
#[inline]
pub fn cmp_kinds(lhs: ValueKind, rhs: ValueKind) -> Ordering {
    kind_rank(lhs).cmp(&kind_rank(rhs))
}

/// Compare an integer with a float exactly.
///
/// `NaN` is treated as greater than every integer.
pub fn cmp_int_float(i: i64, f: f64) -> Ordering {
    if f.is_nan() || f >= TWO_POW_63 {
        return Ordering::Less;
    }
    if f < -TWO_POW_63 {
        return Ordering::Greater;
    }
    let floor = f.floor();
    // In range after the checks above.
    let whole = floor as i64;
    match i.cmp(&whole) {
        Ordering::Equal if f > floor => Ordering::Less,
        other => other,
    }
}

/// Compare two floats, placing `NaN` after every other float.
pub fn cmp_floats(lhs: f64, rhs: f64) -> Ordering {
    match (lhs.is_nan(), rhs.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        (false, false) => lhs.partial_cmp(&rhs).unwrap_or(Ordering::Equal),
    }
}

/// Compare two numeric scalars under the sort order.
///
/// ## Examples
/// ```rust
/// use std::cmp::Ordering;
/// use listdict_core::ordering::{Numeric, numeric_cmp};
///
/// assert_eq!(numeric_cmp(Numeric::Int(1), Numeric::Float(1.3)), Ordering::Less);
/// assert_eq!(numeric_cmp(Numeric::Float(2.0), Numeric::Int(2)), Ordering::Equal);
/// ```
pub fn numeric_cmp(lhs: Numeric, rhs: Numeric) -> Ordering {
    match (lhs, rhs) {
        (Numeric::Int(a), Numeric::Int(b)) => a.cmp(&b),
        (Numeric::Float(a), Numeric::Float(b)) => cmp_floats(a, b),
        (Numeric::Int(a), Numeric::Float(b)) => cmp_int_float(a, b),
        (Numeric::Float(a), Numeric::Int(b)) => cmp_int_float(b, a).reverse(),
    }
}

/// Check numeric equality under the sort order: `NaN == NaN`, and `NaN` equals no other number.
///
/// ## Examples
/// ```rust
/// use listdict_core::ordering::{Numeric, numeric_eq};
///
/// assert!(numeric_eq(Numeric::Float(f64::NAN), Numeric::Float(f64::NAN)));
/// assert!(!numeric_eq(Numeric::Int(0), Numeric::Float(f64::NAN)));
/// ```
pub fn numeric_eq(lhs: Numeric, rhs: Numeric) -> bool {
    numeric_cmp(lhs, rhs) == Ordering::Equal
}

/// Render a float the way container output and dict keys spell it.
///
/// Shortest round-trip decimal; integral values drop the fractional part (`2.0` renders as `2`); non-finite values
/// render as `inf`, `-inf` and `nan`.
///
/// ## Examples
/// ```rust
/// use listdict_core::ordering::format_float;
///
/// assert_eq!(format_float(1.2), "1.2");
/// assert_eq!(format_float(2.0), "2");
/// assert_eq!(format_float(f64::NEG_INFINITY), "-inf");
/// ```
pub fn format_float(f: f64) -> String {
    if f.is_nan() {
        "nan".to_string()
    } else if f.is_infinite() {
        if f > 0.0 { "inf".to_string() } else { "-inf".to_string() }
    } else {
        f.to_string()
    }
}
