//! Literal-style constructors.

/// Build a [`List`](crate::List) from values convertible into [`Value`](crate::Value).
///
/// ## Examples
/// ```rust
/// use listdict::list;
///
/// let l = list![1, "two", 3.0];
/// assert_eq!(l.len(), 3);
/// ```
#[macro_export]
macro_rules! list {
    () => {
        $crate::List::new()
    };
    ($($value:expr),+ $(,)?) => {
        $crate::List::from(vec![$($crate::Value::from($value)),+])
    };
}

/// Build a [`Dict`](crate::Dict) from `key => value` pairs.
///
/// Later pairs overwrite earlier ones with the same key.
///
/// ## Examples
/// ```rust
/// use listdict::dict;
///
/// let d = dict! {"one" => 1, "two" => "2"};
/// assert!(d.has_key("two"));
/// ```
#[macro_export]
macro_rules! dict {
    () => {
        $crate::Dict::new()
    };
    ($($key:expr => $value:expr),+ $(,)?) => {{
        let mut dict = $crate::Dict::new();
        $(
            dict.insert($key, $crate::Value::from($value));
        )+
        dict
    }};
}
