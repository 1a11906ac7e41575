//! The heterogeneous element type stored in `List` and `Dict`.
//!
//! ## Notes
//! - Nested containers are shared handles (`Rc<RefCell<_>>`). Cloning a [`Value`] that holds a list or dict clones
//!   the handle, not the contents, so both copies observe later mutation. `Dict::from_keys` relies on this.
//! - Handles make `Value` (and therefore `List`/`Dict`) `!Send`: the containers are single-threaded by construction.
//! - Deep comparison and rendering use `try_borrow`. A handle that is mutably borrowed at the time compares unequal and
//!   renders as `[...]`/`{...}` instead of panicking.
//! - A container may hold its own handle. Rendering tracks the handles it is inside of and prints `[...]`/`{...}`
//!   when it meets one again; comparison treats a pair of handles it is already comparing as equal.

use core::fmt;
use std::cell::RefCell;
use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::Hash;
use std::rc::Rc;
use std::thread::LocalKey;

use listdict_core::lang::kinds::ValueKind;
use listdict_core::ordering::{Numeric, cmp_kinds, format_float, numeric_cmp, numeric_eq};

use crate::dict::Dict;
use crate::list::List;

/// Shared handle to a nested list.
pub type ListRef = Rc<RefCell<List>>;
/// Shared handle to a nested dict.
pub type DictRef = Rc<RefCell<Dict>>;

/// A single container element.
///
/// ## Examples
/// ```rust
/// use listdict::Value;
///
/// assert_eq!(Value::from(1), Value::from(1.0));
/// assert_ne!(Value::from(1), Value::from("1"));
/// assert_eq!(Value::from(2.5).to_string(), "2.5");
/// ```
#[derive(Clone, Default)]
#[cfg_attr(feature = "json", derive(serde::Deserialize), serde(untagged))]
pub enum Value {
    #[default]
    None,
    Bool(bool),
    Int(i64),
    Float(f64),
    Str(String),
    List(ListRef),
    Dict(DictRef),
}

impl Value {
    /// Wrap a list in a fresh shared handle.
    pub fn list(list: List) -> Self {
        Value::List(Rc::new(RefCell::new(list)))
    }

    /// Wrap a dict in a fresh shared handle.
    pub fn dict(dict: Dict) -> Self {
        Value::Dict(Rc::new(RefCell::new(dict)))
    }

    /// Return the kind of this value.
    pub fn kind(&self) -> ValueKind {
        match self {
            Value::None => ValueKind::None,
            Value::Bool(_) => ValueKind::Bool,
            Value::Int(_) => ValueKind::Int,
            Value::Float(_) => ValueKind::Float,
            Value::Str(_) => ValueKind::Str,
            Value::List(_) => ValueKind::List,
            Value::Dict(_) => ValueKind::Dict,
        }
    }

    pub fn is_none(&self) -> bool {
        matches!(self, Value::None)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Return the value as a float; ints are widened, and may round above `2^53`.
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&ListRef> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_dict(&self) -> Option<&DictRef> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Return true if both values hold the same container handle (identity, not equality).
    pub fn same_handle(&self, other: &Value) -> bool {
        match (self, other) {
            (Value::List(a), Value::List(b)) => Rc::ptr_eq(a, b),
            (Value::Dict(a), Value::Dict(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }

    fn numeric(&self) -> Option<Numeric> {
        match self {
            Value::Int(i) => Some(Numeric::Int(*i)),
            Value::Float(f) => Some(Numeric::Float(*f)),
            _ => None,
        }
    }

    /// Compare two values under the sort order used by [`List::sort`].
    ///
    /// Numbers first (numerically, `NaN` last), then strings, bools, `None`, lists and dicts. Within a kind the natural
    /// order applies; lists compare element-wise and dicts compare as key-sorted entry sequences.
    ///
    /// ## Examples
    /// ```rust
    /// use std::cmp::Ordering;
    /// use listdict::Value;
    ///
    /// assert_eq!(Value::from(34).total_cmp(&Value::from("1")), Ordering::Less);
    /// assert_eq!(Value::from("a").total_cmp(&Value::from("ala")), Ordering::Less);
    /// ```
    pub fn total_cmp(&self, other: &Value) -> Ordering {
        if let (Some(a), Some(b)) = (self.numeric(), other.numeric()) {
            return numeric_cmp(a, b);
        }
        let by_kind = cmp_kinds(self.kind(), other.kind());
        if by_kind != Ordering::Equal {
            return by_kind;
        }
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => a.cmp(b),
            (Value::Bool(a), Value::Bool(b)) => a.cmp(b),
            (Value::List(a), Value::List(b)) => {
                if Rc::ptr_eq(a, b) {
                    return Ordering::Equal;
                }
                let Some(_visit) = Visit::enter(&COMPARING, (handle_addr(a), handle_addr(b))) else {
                    return Ordering::Equal;
                };
                match (a.try_borrow(), b.try_borrow()) {
                    (Ok(a), Ok(b)) => a.total_cmp(&b),
                    _ => Ordering::Equal,
                }
            }
            (Value::Dict(a), Value::Dict(b)) => {
                if Rc::ptr_eq(a, b) {
                    return Ordering::Equal;
                }
                let Some(_visit) = Visit::enter(&COMPARING, (handle_addr(a), handle_addr(b))) else {
                    return Ordering::Equal;
                };
                match (a.try_borrow(), b.try_borrow()) {
                    (Ok(a), Ok(b)) => a.total_cmp(&b),
                    _ => Ordering::Equal,
                }
            }
            // `None` vs `None`; other same-rank pairs were handled above.
            _ => Ordering::Equal,
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        if let (Some(a), Some(b)) = (self.numeric(), other.numeric()) {
            return numeric_eq(a, b);
        }
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) => {
                if Rc::ptr_eq(a, b) {
                    return true;
                }
                let Some(_visit) = Visit::enter(&COMPARING, (handle_addr(a), handle_addr(b))) else {
                    return true;
                };
                match (a.try_borrow(), b.try_borrow()) {
                    (Ok(a), Ok(b)) => *a == *b,
                    _ => false,
                }
            }
            (Value::Dict(a), Value::Dict(b)) => {
                if Rc::ptr_eq(a, b) {
                    return true;
                }
                let Some(_visit) = Visit::enter(&COMPARING, (handle_addr(a), handle_addr(b))) else {
                    return true;
                };
                match (a.try_borrow(), b.try_borrow()) {
                    (Ok(a), Ok(b)) => *a == *b,
                    _ => false,
                }
            }
            _ => false,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(true) => f.write_str("True"),
            Value::Bool(false) => f.write_str("False"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(x) => f.write_str(&format_float(*x)),
            Value::Str(s) => f.write_str(s),
            Value::List(l) => {
                let Some(_visit) = Visit::enter(&RENDERING, handle_addr(l)) else {
                    return f.write_str("[...]");
                };
                match l.try_borrow() {
                    Ok(l) => write!(f, "[{l}]"),
                    Err(_) => f.write_str("[...]"),
                }
            }
            Value::Dict(d) => {
                let Some(_visit) = Visit::enter(&RENDERING, handle_addr(d)) else {
                    return f.write_str("{...}");
                };
                match d.try_borrow() {
                    Ok(d) => write!(f, "{d}"),
                    Err(_) => f.write_str("{...}"),
                }
            }
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => f.write_str("None"),
            Value::Bool(b) => f.debug_tuple("Bool").field(b).finish(),
            Value::Int(i) => f.debug_tuple("Int").field(i).finish(),
            Value::Float(x) => f.debug_tuple("Float").field(x).finish(),
            Value::Str(s) => f.debug_tuple("Str").field(s).finish(),
            Value::List(l) => {
                let Some(_visit) = Visit::enter(&RENDERING, handle_addr(l)) else {
                    return f.write_str("List([...])");
                };
                match l.try_borrow() {
                    Ok(l) => f.debug_tuple("List").field(&*l).finish(),
                    Err(_) => f.write_str("List(<borrowed>)"),
                }
            }
            Value::Dict(d) => {
                let Some(_visit) = Visit::enter(&RENDERING, handle_addr(d)) else {
                    return f.write_str("Dict({...})");
                };
                match d.try_borrow() {
                    Ok(d) => f.debug_tuple("Dict").field(&*d).finish(),
                    Err(_) => f.write_str("Dict(<borrowed>)"),
                }
            }
        }
    }
}

/// Untagged, like the derived `Deserialize`. A container that contains itself is an error, since JSON has no
/// back-references.
#[cfg(feature = "json")]
impl serde::Serialize for Value {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::Serialize as _;
        use serde::ser::Error as _;

        match self {
            Value::None => serializer.serialize_unit(),
            Value::Bool(b) => serializer.serialize_bool(*b),
            Value::Int(i) => serializer.serialize_i64(*i),
            Value::Float(x) => serializer.serialize_f64(*x),
            Value::Str(s) => serializer.serialize_str(s),
            Value::List(l) => {
                let Some(_visit) = Visit::enter(&RENDERING, handle_addr(l)) else {
                    return Err(S::Error::custom("list contains itself"));
                };
                l.try_borrow().map_err(S::Error::custom)?.serialize(serializer)
            }
            Value::Dict(d) => {
                let Some(_visit) = Visit::enter(&RENDERING, handle_addr(d)) else {
                    return Err(S::Error::custom("dict contains itself"));
                };
                d.try_borrow().map_err(S::Error::custom)?.serialize(serializer)
            }
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<List> for Value {
    fn from(list: List) -> Self {
        Value::list(list)
    }
}

impl From<Dict> for Value {
    fn from(dict: Dict) -> Self {
        Value::dict(dict)
    }
}

impl From<ListRef> for Value {
    fn from(handle: ListRef) -> Self {
        Value::List(handle)
    }
}

impl From<DictRef> for Value {
    fn from(handle: DictRef) -> Self {
        Value::Dict(handle)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::None, Into::into)
    }
}

thread_local! {
    /// Container handles currently being rendered or serialized on this thread.
    static RENDERING: RefCell<HashSet<usize>> = RefCell::new(HashSet::new());
    /// Pairs of container handles currently being compared on this thread.
    static COMPARING: RefCell<HashSet<(usize, usize)>> = RefCell::new(HashSet::new());
}

fn handle_addr<T>(handle: &Rc<RefCell<T>>) -> usize {
    Rc::as_ptr(handle).cast::<()>() as usize
}

/// Marks `key` as in progress in `set` until dropped.
struct Visit<K: Copy + Eq + Hash + 'static> {
    set: &'static LocalKey<RefCell<HashSet<K>>>,
    key: K,
}

impl<K: Copy + Eq + Hash + 'static> Visit<K> {
    /// Return `None` if `key` is already in progress further up the stack.
    fn enter(set: &'static LocalKey<RefCell<HashSet<K>>>, key: K) -> Option<Self> {
        // Thread-local storage is gone only during thread teardown; recurse unguarded then.
        let fresh = set.try_with(|active| active.borrow_mut().insert(key)).unwrap_or(true);
        fresh.then(|| Visit { set, key })
    }
}

impl<K: Copy + Eq + Hash + 'static> Drop for Visit<K> {
    fn drop(&mut self) {
        let _ = self.set.try_with(|active| active.borrow_mut().remove(&self.key));
    }
}
