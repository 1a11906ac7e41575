//! An ordered, growable sequence of heterogeneous values with Python `list` methods.
//!
//! Out-of-range and not-found conditions are returned as [`CollectionError`]s instead of panicking. Indices are `i64`
//! so that negative input is representable and rejected with `NegativeIndex`; Python-style negative indexing is not
//! supported.
//!
//! ## Examples
//! ```rust
//! use listdict::{List, list};
//!
//! let mut l = list!["one", "two", "three"];
//! l.insert(1, "X")?;
//! assert_eq!(l, list!["one", "X", "two", "three"]);
//! l.remove(&"X".into())?;
//! l.reverse();
//! assert_eq!(l.to_string(), "three, two, one");
//! # Ok::<(), listdict::CollectionError>(())
//! ```

use core::fmt;
use std::cmp::Ordering;

use listdict_core::lang::containers::ContainerKind;

use crate::errors::{CollectionError, Result};
use crate::value::Value;

/// An ordered sequence of [`Value`]s.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct List {
    values: Vec<Value>,
}

impl List {
    /// Create an empty list.
    pub fn new() -> Self {
        Self { values: Vec::new() }
    }

    /// Create a list of `len` `None` values.
    pub fn with_len(len: usize) -> Self {
        Self {
            values: vec![Value::None; len],
        }
    }

    /// Create an empty list with room for `capacity` values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            values: Vec::with_capacity(capacity),
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Return the element at `index`, or `None` if out of range.
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.values.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.values.iter()
    }

    pub fn as_slice(&self) -> &[Value] {
        &self.values
    }

    /// Append a single value.
    pub fn push(&mut self, value: impl Into<Value>) {
        self.values.push(value.into());
    }

    /// Append zero or more values, in order.
    pub fn append<I>(&mut self, values: I)
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        self.values.extend(values.into_iter().map(Into::into));
    }

    /// Append `value` unless an equal element is already present.
    ///
    /// ## Returns
    /// - `true` if the value was appended.
    pub fn append_if_missing(&mut self, value: impl Into<Value>) -> bool {
        let value = value.into();
        if self.values.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    /// Count the elements equal to `value`.
    pub fn count(&self, value: &Value) -> usize {
        self.values.iter().filter(|v| *v == value).count()
    }

    /// Remove the element at `index`, shifting later elements left.
    ///
    /// ## Errors
    /// - `EmptyContainer` if the list is empty.
    /// - `NegativeIndex` if `index < 0`.
    /// - `IndexOutOfRange` if `index >= len`.
    pub fn delete(&mut self, index: i64) -> Result<()> {
        let at = self.checked_index(index, "delete")?;
        self.values.remove(at);
        Ok(())
    }

    /// Append every element of `other`, in order.
    ///
    /// Nested containers in `other` are shared, not deep-copied.
    #[tracing::instrument(level = "trace", skip_all, fields(len = self.values.len(), other_len = other.len()))]
    pub fn extend(&mut self, other: &List) {
        self.values.extend_from_slice(&other.values);
    }

    /// Return the lowest index of an element equal to `value`.
    ///
    /// ## Errors
    /// - `NotFound` (`"{value} is not in list"`) if no element is equal.
    pub fn index(&self, value: &Value) -> Result<usize> {
        self.position(value).ok_or_else(|| CollectionError::not_in_list(value))
    }

    /// Insert `value` so that it ends up at `index`; an index past the end appends.
    ///
    /// ## Errors
    /// - `NegativeIndex` if `index < 0` (also on an empty list).
    pub fn insert(&mut self, index: i64, value: impl Into<Value>) -> Result<()> {
        let at = self.insertion_point(index)?;
        self.values.insert(at, value.into());
        Ok(())
    }

    /// Insert several values as a contiguous run starting at `index`.
    ///
    /// Same index rules as [`List::insert`].
    pub fn insert_many<I>(&mut self, index: i64, values: I) -> Result<()>
    where
        I: IntoIterator,
        I::Item: Into<Value>,
    {
        let at = self.insertion_point(index)?;
        self.values.splice(at..at, values.into_iter().map(Into::into));
        Ok(())
    }

    /// Deep, order-sensitive equality. Same as `==`.
    pub fn is_equal(&self, other: &List) -> bool {
        self == other
    }

    /// Remove and return the last element.
    ///
    /// ## Errors
    /// - `EmptyContainer` if the list is empty.
    pub fn pop(&mut self) -> Result<Value> {
        self.values.pop().ok_or_else(|| CollectionError::empty_list("pop"))
    }

    /// Remove and return the element at `index`.
    ///
    /// ## Errors
    /// Same as [`List::delete`].
    pub fn pop_item(&mut self, index: i64) -> Result<Value> {
        let at = self.checked_index(index, "pop")?;
        Ok(self.values.remove(at))
    }

    /// Remove the first element equal to `value`.
    ///
    /// ## Errors
    /// - `NotFound` if no element is equal (including on an empty list).
    pub fn remove(&mut self, value: &Value) -> Result<()> {
        let at = self.index(value)?;
        self.values.remove(at);
        Ok(())
    }

    /// Reverse the list in place.
    pub fn reverse(&mut self) {
        self.values.reverse();
    }

    /// Sort ascending, stably, under [`Value::total_cmp`].
    ///
    /// ## Examples
    /// ```rust
    /// use listdict::list;
    ///
    /// let mut l = list![1, "one", 2.5, "a", 2];
    /// l.sort();
    /// assert_eq!(l, list![1, 2, 2.5, "a", "one"]);
    /// ```
    #[tracing::instrument(level = "trace", skip_all, fields(len = self.values.len()))]
    pub fn sort(&mut self) {
        self.values.sort_by(Value::total_cmp);
    }

    /// Compare element-wise under [`Value::total_cmp`]; a strict prefix sorts first.
    pub fn total_cmp(&self, other: &List) -> Ordering {
        for (a, b) in self.values.iter().zip(other.values.iter()) {
            let ord = a.total_cmp(b);
            if ord != Ordering::Equal {
                return ord;
            }
        }
        self.values.len().cmp(&other.values.len())
    }

    fn position(&self, value: &Value) -> Option<usize> {
        self.values.iter().position(|v| v == value)
    }

    /// Validate an index that must address an existing element.
    fn checked_index(&self, index: i64, op: &'static str) -> Result<usize> {
        if self.values.is_empty() {
            return Err(CollectionError::empty_list(op));
        }
        if index < 0 {
            return Err(CollectionError::NegativeIndex {
                container: ContainerKind::List,
                index,
            });
        }
        let len = self.values.len();
        match usize::try_from(index) {
            Ok(at) if at < len => Ok(at),
            _ => Err(CollectionError::IndexOutOfRange {
                container: ContainerKind::List,
                index,
                len,
            }),
        }
    }

    /// Clamp an insertion index to `0..=len`, rejecting negatives.
    fn insertion_point(&self, index: i64) -> Result<usize> {
        if index < 0 {
            return Err(CollectionError::NegativeIndex {
                container: ContainerKind::List,
                index,
            });
        }
        let len = self.values.len();
        Ok(usize::try_from(index).map_or(len, |at| at.min(len)))
    }
}

impl fmt::Display for List {
    /// Elements joined by `", "`; an empty list renders as the empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for value in &self.values {
            if !first {
                f.write_str(", ")?;
            }
            first = false;
            write!(f, "{value}")?;
        }
        Ok(())
    }
}

impl From<Vec<Value>> for List {
    fn from(values: Vec<Value>) -> Self {
        Self { values }
    }
}

impl From<List> for Vec<Value> {
    fn from(list: List) -> Self {
        list.values
    }
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for List {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.into_iter()
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.values.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::list;
    use listdict_core::errors::ErrorKind;

    fn kind_of<T: fmt::Debug>(r: Result<T>) -> ErrorKind {
        match r {
            Ok(v) => panic!("expected an error, got {v:?}"),
            Err(e) => e.kind(),
        }
    }

    #[test]
    fn append_preserves_argument_order() {
        let mut l = list!["one", "two"];
        l.append([Value::from(1), Value::from("two"), Value::from(3)]);
        assert_eq!(l, list!["one", "two", 1, "two", 3]);

        let mut empty = List::new();
        empty.append(Vec::<Value>::new());
        assert!(empty.is_empty());
    }

    #[test]
    fn append_if_missing_skips_equal_values() {
        let mut l = list!["one", 1];
        assert!(!l.append_if_missing(1));
        assert!(!l.append_if_missing(1.0));
        assert!(l.append_if_missing("two"));
        assert_eq!(l, list!["one", 1, "two"]);
    }

    #[test]
    fn count_by_value() {
        let l = list!["one", "two", "three", "two"];
        assert_eq!(l.count(&"two".into()), 2);
        assert_eq!(l.count(&"zero".into()), 0);
        assert_eq!(list![1, 2, 3, 2].count(&3.into()), 1);
        assert_eq!(List::new().count(&1.into()), 0);
    }

    #[test]
    fn nan_elements_are_found() {
        let nan = Value::from(f64::NAN);
        let mut l = list![1, nan.clone(), nan.clone()];
        assert_eq!(l.count(&nan), 2);
        assert_eq!(l.count(&1.into()), 1);
        assert_eq!(l.index(&nan).unwrap(), 1);
        assert!(l.is_equal(&l.clone()));
        l.remove(&nan).unwrap();
        assert_eq!(l.len(), 2);
        assert_eq!(l.count(&nan), 1);
        assert_eq!(kind_of(List::new().index(&nan)), ErrorKind::NotFound);
    }

    #[test]
    fn delete_shifts_left() {
        let mut l = list!["one", "two", "three"];
        l.delete(1).unwrap();
        assert_eq!(l, list!["one", "three"]);

        let mut single = list!["one"];
        single.delete(0).unwrap();
        assert!(single.is_empty());
    }

    #[test]
    fn delete_error_precedence() {
        assert_eq!(kind_of(List::new().delete(0)), ErrorKind::EmptyContainer);
        assert_eq!(kind_of(List::new().delete(-1)), ErrorKind::EmptyContainer);
        let mut l = list![1, 2];
        assert_eq!(kind_of(l.delete(-1)), ErrorKind::NegativeIndex);
        assert_eq!(kind_of(l.delete(2)), ErrorKind::IndexOutOfRange);
        assert_eq!(l, list![1, 2]);
    }

    #[test]
    fn extend_appends_in_order() {
        let mut l = list!["one", "two"];
        l.extend(&list!["three"]);
        assert_eq!(l, list!["one", "two", "three"]);
        l.extend(&List::new());
        assert_eq!(l.len(), 3);

        let mut mixed = list![1];
        mixed.extend(&list!["one"]);
        assert_eq!(mixed, list![1, "one"]);
    }

    #[test]
    fn extend_shares_nested_handles() {
        let nested = Value::from(list![1]);
        let source = List::from(vec![nested.clone()]);
        let mut l = List::new();
        l.extend(&source);
        assert!(l.get(0).is_some_and(|v| v.same_handle(&nested)));
    }

    #[test]
    fn index_finds_lowest() {
        let l = list!["one", "two", "three", "two"];
        assert_eq!(l.index(&"two".into()).unwrap(), 1);
        assert_eq!(list![1, 2, 3, 2].index(&3.into()).unwrap(), 2);
    }

    #[test]
    fn index_not_found_carries_value() {
        let err = list!["one", "two"].index(&"zero".into()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::NotFound);
        assert_eq!(err.to_string(), "zero is not in list");
        assert_eq!(List::new().index(&1.into()).unwrap_err().to_string(), "1 is not in list");
    }

    #[test]
    fn insert_positions_and_appends_past_end() {
        let mut l = list!["one", "two", "three"];
        l.insert(1, "inserted").unwrap();
        assert_eq!(l, list!["one", "inserted", "two", "three"]);

        let mut l = list!["one", "two", "three"];
        l.insert(10, "four").unwrap();
        assert_eq!(l, list!["one", "two", "three", "four"]);

        let mut empty = List::new();
        empty.insert(0, 1).unwrap();
        assert_eq!(empty, list![1]);
    }

    #[test]
    fn insert_rejects_negative_index() {
        let mut l = list![1];
        assert_eq!(kind_of(l.insert(-1, 0)), ErrorKind::NegativeIndex);
        assert_eq!(kind_of(List::new().insert(-3, 0)), ErrorKind::NegativeIndex);
        assert_eq!(l, list![1]);
    }

    #[test]
    fn insert_many_keeps_run_contiguous() {
        let mut l = list!["one", "two", "three"];
        l.insert_many(1, [Value::from("1.1"), Value::from(1.2), Value::from("1.3")])
            .unwrap();
        assert_eq!(l, list!["one", "1.1", 1.2, "1.3", "two", "three"]);
        assert_eq!(kind_of(l.insert_many(-1, [1])), ErrorKind::NegativeIndex);
    }

    #[test]
    fn is_equal_is_order_and_length_sensitive() {
        assert!(list![1, 2].is_equal(&list![1, 2]));
        assert!(!list![1, 2].is_equal(&list![1, 2, 3]));
        assert!(!list![1, 2].is_equal(&list![2, 1]));
        assert!(List::new().is_equal(&List::new()));
    }

    #[test]
    fn pop_takes_last() {
        let mut l = list!["one", "two", "three", "two"];
        assert_eq!(l.pop().unwrap(), Value::from("two"));
        assert_eq!(l, list!["one", "two", "three"]);

        let mut empty = List::new();
        assert_eq!(kind_of(empty.pop()), ErrorKind::EmptyContainer);
        assert!(empty.is_empty());
    }

    #[test]
    fn pop_item_takes_index() {
        let mut l = list![1, 2, 3, 2];
        assert_eq!(l.pop_item(2).unwrap(), Value::from(3));
        assert_eq!(l, list![1, 2, 2]);
        assert_eq!(kind_of(l.pop_item(3)), ErrorKind::IndexOutOfRange);
        assert_eq!(kind_of(l.pop_item(-2)), ErrorKind::NegativeIndex);
        assert_eq!(kind_of(List::new().pop_item(0)), ErrorKind::EmptyContainer);
    }

    #[test]
    fn remove_first_occurrence() {
        let mut l = list!["one", "two", "one"];
        l.remove(&"one".into()).unwrap();
        assert_eq!(l, list!["two", "one"]);

        let mut l = list!["one", "two", "three"];
        let err = l.remove(&"zero".into()).unwrap_err();
        assert_eq!(err.to_string(), "zero is not in list");
        assert_eq!(l, list!["one", "two", "three"]);

        assert_eq!(kind_of(List::new().remove(&1.into())), ErrorKind::NotFound);
    }

    #[test]
    fn reverse_in_place() {
        let mut l = list!["one", "two", 2, 1];
        l.reverse();
        assert_eq!(l, list![1, 2, "two", "one"]);

        let mut single = list![2];
        single.reverse();
        assert_eq!(single, list![2]);
    }

    #[test]
    fn sort_numbers_before_strings() {
        let mut l = list![1, "1.2", "a", "ola", 34, 2, "1", "12", 1.2, "2", "ala"];
        l.sort();
        assert_eq!(l, list![1, 1.2, 2, 34, "1", "1.2", "12", "2", "a", "ala", "ola"]);
    }

    #[test]
    fn sort_within_kinds() {
        let mut words = list!["o", "ze", "a", "two"];
        words.sort();
        assert_eq!(words, list!["a", "o", "two", "ze"]);

        let mut ints = list![2, 3, 1, -2];
        ints.sort();
        assert_eq!(ints, list![-2, 1, 2, 3]);

        let mut mixed = list![2, 1.3, 1];
        mixed.sort();
        assert_eq!(mixed, list![1, 1.3, 2]);
    }

    #[test]
    fn sort_is_stable_for_equal_numbers() {
        let mut l = list![1.0, 0, 1];
        l.sort();
        assert_eq!(l.get(1).map(Value::kind), Some(listdict_core::ValueKind::Float));
        assert_eq!(l.get(2).map(Value::kind), Some(listdict_core::ValueKind::Int));
    }

    #[test]
    fn sort_places_other_kinds_after_strings() {
        let mut l = list![Value::None, true, list![1], "b", false, 3];
        l.sort();
        assert_eq!(l, list![3, "b", false, true, Value::None, list![1]]);
    }

    #[test]
    fn with_len_is_presized_with_none() {
        let l = List::with_len(3);
        assert_eq!(l.len(), 3);
        assert_eq!(l.count(&Value::None), 3);
    }

    #[test]
    fn string_rendering() {
        assert_eq!(list!["one", "two", "three", "two"].to_string(), "one, two, three, two");
        assert_eq!(list![1, 2, 3, 2].to_string(), "1, 2, 3, 2");
        assert_eq!(List::new().to_string(), "");
    }
}
