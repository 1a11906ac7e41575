//! End-to-end scenarios over the public API.
//!
//! These lock in the user-facing contract: operation results, error kinds and rendered messages.

use listdict::prelude::*;

#[test]
fn insert_remove_reverse_round_trip() {
    let mut l = list!["one", "two", "three"];

    l.insert(1, "X").unwrap();
    assert_eq!(l, list!["one", "X", "two", "three"]);

    l.remove(&Value::from("X")).unwrap();
    assert_eq!(l, list!["one", "two", "three"]);

    l.reverse();
    assert_eq!(l, list!["three", "two", "one"]);
    insta::assert_snapshot!(l.to_string(), @"three, two, one");
}

#[test]
fn empty_list_removals_fail_and_leave_it_empty() {
    let mut l = List::new();
    for err in [l.delete(0).unwrap_err(), l.pop_item(0).unwrap_err(), l.pop().unwrap_err()] {
        assert_eq!(err.kind(), ErrorKind::EmptyContainer);
        assert_eq!(err.container(), ContainerKind::List);
    }
    assert!(l.is_empty());
}

#[test]
fn error_messages() {
    let mut l = list![1, 2, 3];
    insta::assert_snapshot!(l.delete(-1).unwrap_err(), @"negative index -1 is not supported for list");
    insta::assert_snapshot!(l.pop_item(3).unwrap_err(), @"index 3 out of range for list of length 3");
    insta::assert_snapshot!(l.index(&Value::from(2.5)).unwrap_err(), @"2.5 is not in list");
    insta::assert_snapshot!(List::new().pop().unwrap_err(), @"pop from empty list");
    insta::assert_snapshot!(Dict::new().pop_item().unwrap_err(), @"popitem from empty dict");
    assert_eq!(l, list![1, 2, 3]);
}

#[test]
fn errors_compare_by_kind() {
    let a = list![1].delete(5).unwrap_err();
    let b = list![1, 2, 3].pop_item(9).unwrap_err();
    assert_ne!(a, b);
    assert_eq!(a.kind(), b.kind());
    assert_eq!(a.kind().as_str(), "IndexOutOfRange");
}

#[test]
fn dict_pop_distinguishes_empty_from_absent() {
    let err = Dict::new().pop("x", Value::from(0)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::EmptyContainer);
    assert_eq!(err.container(), ContainerKind::Dict);

    let mut d = dict! {"y" => 1};
    assert_eq!(d.pop("x", Value::from(0)).unwrap(), Value::from(0));
    assert_eq!(d, dict! {"y" => 1});
}

#[test]
fn update_merges() {
    let mut d = dict! {"a" => 1};
    d.update(&dict! {"a" => 2, "b" => 3});
    assert_eq!(d, dict! {"a" => 2, "b" => 3});
    insta::assert_snapshot!(d, @"{a: 2, b: 3}");
}

#[test]
fn set_default_keeps_first_value() {
    let mut d = Dict::new();
    assert_eq!(d.set_default("k", Value::from("v")), Value::from("v"));
    assert_eq!(d.set_default("k", Value::from("v2")), Value::from("v"));
    assert_eq!(d.get("k", Value::None), Value::from("v"));
}

#[test]
fn dict_from_keys_stringifies_and_aliases() {
    let d = dict_from_keys(&list![1, 2], Value::from(1));
    assert_eq!(d, dict! {"1" => 1, "2" => 1});

    let shared = Dict::new();
    let d = Dict::from_keys(&list!["x", 2.5, true], Value::from(shared));
    let mut keys: Vec<String> = d.keys().iter().map(ToString::to_string).collect();
    keys.sort();
    assert_eq!(keys, ["2.5", "True", "x"]);

    if let Some(handle) = d.get_ref("x").and_then(Value::as_dict) {
        handle.borrow_mut().insert("seen", true);
    }
    insta::allow_duplicates! {
        for (_, value) in &d {
            insta::assert_snapshot!(value, @"{seen: True}");
        }
    }
}

#[test]
fn items_feed_back_into_a_dict() {
    let d = dict! {"one" => 1, "two" => list![2]};
    let mut rebuilt = Dict::new();
    for item in d.items() {
        let pair = item.as_list().map(|h| h.borrow().clone()).unwrap_or_default();
        let key = pair.get(0).and_then(Value::as_str).unwrap_or_default().to_string();
        rebuilt.insert(key, pair.get(1).cloned().unwrap_or_default());
    }
    assert!(rebuilt.is_equal(&d));
}

#[test]
fn sorted_mixed_list_renders() {
    let mut l = list![1, "1.2", "a", "ola", 34, 2, "1", "12", 1.2, "2", "ala"];
    l.sort();
    insta::assert_snapshot!(l, @"1, 1.2, 2, 34, 1, 1.2, 12, 2, a, ala, ola");
}

#[test]
fn nested_rendering() {
    let l = list![Value::None, true, list![1, list![]], dict! {"k" => 0.5}];
    insta::assert_snapshot!(l, @"None, True, [1, []], {k: 0.5}");
}
