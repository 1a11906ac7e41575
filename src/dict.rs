//! A string-keyed map of heterogeneous values with Python `dict` methods.
//!
//! Iteration order (and therefore the order of [`Dict::keys`], [`Dict::values`] and [`Dict::items`]) is unspecified.
//! `Display` sorts keys so rendered output is deterministic.

use core::fmt;
use std::cmp::Ordering;
use std::collections::HashMap;
use std::collections::hash_map;

use crate::errors::{CollectionError, Result};
use crate::list::List;
use crate::value::Value;

/// A mapping from unique `String` keys to [`Value`]s.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "json", derive(serde::Serialize, serde::Deserialize), serde(transparent))]
pub struct Dict {
    entries: HashMap<String, Value>,
}

impl Dict {
    /// Create an empty dict.
    pub fn new() -> Self {
        Self { entries: HashMap::new() }
    }

    /// Build a dict whose keys are the rendered forms of `keys`, each mapped to `value`.
    ///
    /// Numbers become their decimal spelling (`1` → `"1"`). Every key receives a clone of `value`; a list or dict
    /// `value` is therefore one shared container, not a copy per key. Duplicate renderings collapse to one key.
    ///
    /// ## Examples
    /// ```rust
    /// use listdict::{Dict, Value, dict, list};
    ///
    /// let d = Dict::from_keys(&list![1, 2], Value::from(1));
    /// assert_eq!(d, dict! {"1" => 1, "2" => 1});
    /// ```
    #[tracing::instrument(level = "trace", skip_all, fields(key_count = keys.len()))]
    pub fn from_keys(keys: &List, value: Value) -> Self {
        let mut dict = Self {
            entries: HashMap::with_capacity(keys.len()),
        };
        for key in keys {
            dict.entries.insert(key.to_string(), value.clone());
        }
        dict
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Set `key` to `value` (direct assignment), returning the previous value if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.entries.insert(key.into(), value.into())
    }

    /// Borrow the value for `key`.
    pub fn get_ref(&self, key: &str) -> Option<&Value> {
        self.entries.get(key)
    }

    pub fn iter(&self) -> hash_map::Iter<'_, String, Value> {
        self.entries.iter()
    }

    /// Remove every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Return the value for `key`, or `fallback` if absent. Never inserts.
    pub fn get(&self, key: &str, fallback: Value) -> Value {
        self.entries.get(key).cloned().unwrap_or(fallback)
    }

    pub fn has_key(&self, key: &str) -> bool {
        self.entries.contains_key(key)
    }

    /// Return one two-element list `[key, value]` per entry, in unspecified order.
    pub fn items(&self) -> List {
        self.entries
            .iter()
            .map(|(key, value)| Value::list(List::from(vec![Value::from(key.as_str()), value.clone()])))
            .collect()
    }

    /// Return the keys, in unspecified order.
    pub fn keys(&self) -> List {
        self.entries.keys().map(String::as_str).collect()
    }

    /// Return the values, in unspecified order.
    pub fn values(&self) -> List {
        self.entries.values().cloned().collect()
    }

    /// Remove `key` and return its value; return `fallback` if the key is absent.
    ///
    /// ## Errors
    /// - `EmptyContainer` if the dict has no entries at all. An absent key in a non-empty dict is not an error.
    pub fn pop(&mut self, key: &str, fallback: Value) -> Result<Value> {
        if self.entries.is_empty() {
            return Err(CollectionError::empty_dict("pop"));
        }
        Ok(self.entries.remove(key).unwrap_or(fallback))
    }

    /// Remove and return an arbitrary entry.
    ///
    /// ## Errors
    /// - `EmptyContainer` if the dict is empty.
    pub fn pop_item(&mut self) -> Result<(String, Value)> {
        let key = self
            .entries
            .keys()
            .next()
            .cloned()
            .ok_or_else(|| CollectionError::empty_dict("popitem"))?;
        self.entries
            .remove_entry(&key)
            .ok_or_else(|| CollectionError::empty_dict("popitem"))
    }

    /// Return the value for `key`, inserting `value` first if the key is absent.
    pub fn set_default(&mut self, key: &str, value: Value) -> Value {
        self.entries.entry(key.to_string()).or_insert(value).clone()
    }

    /// Copy every entry of `other` into `self`, overwriting existing keys.
    #[tracing::instrument(level = "trace", skip_all, fields(len = self.entries.len(), other_len = other.len()))]
    pub fn update(&mut self, other: &Dict) {
        for (key, value) in &other.entries {
            self.entries.insert(key.clone(), value.clone());
        }
    }

    /// Order-insensitive deep equality. Same as `==`.
    pub fn is_equal(&self, other: &Dict) -> bool {
        self == other
    }

    /// Compare as key-sorted `(key, value)` sequences; a strict prefix sorts first.
    pub fn total_cmp(&self, other: &Dict) -> Ordering {
        let lhs = self.sorted_entries();
        let rhs = other.sorted_entries();
        for ((ka, va), (kb, vb)) in lhs.iter().zip(rhs.iter()) {
            let ord = ka.cmp(kb).then_with(|| va.total_cmp(vb));
            if ord != Ordering::Equal {
                return ord;
            }
        }
        lhs.len().cmp(&rhs.len())
    }

    fn sorted_entries(&self) -> Vec<(&String, &Value)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|a, b| a.0.cmp(b.0));
        entries
    }
}

/// Build a dict from `keys`; see [`Dict::from_keys`].
pub fn dict_from_keys(keys: &List, value: Value) -> Dict {
    Dict::from_keys(keys, value)
}

impl fmt::Display for Dict {
    /// `{key: value, ...}` with keys in ascending order.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, (key, value)) in self.sorted_entries().into_iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{key}: {value}")?;
        }
        f.write_str("}")
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Dict {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect(),
        }
    }
}

impl From<HashMap<String, Value>> for Dict {
    fn from(entries: HashMap<String, Value>) -> Self {
        Self { entries }
    }
}

impl IntoIterator for Dict {
    type Item = (String, Value);
    type IntoIter = hash_map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a Dict {
    type Item = (&'a String, &'a Value);
    type IntoIter = hash_map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
