//! Unit tests for OrderedSet.
//!
//! These tests exercise the native-set-like surface: construction, chaining
//! `add`, strict membership, order-preserving `delete`, `clear`, the snapshot
//! views and the `for_each` family.

use rstest::{fixture, rstest};
use simple_set::OrderedSet;

/// A value type mixing text and numbers, where `"3"` and `3` are distinct.
#[derive(Debug, Clone, PartialEq)]
enum Scalar {
    Text(&'static str),
    Number(i64),
}

#[fixture]
fn set() -> OrderedSet<&'static str> {
    OrderedSet::from_values(["first", "second"])
}

// =============================================================================
// Construction
// =============================================================================

#[rstest]
fn test_new_creates_empty_set() {
    let set: OrderedSet<&str> = OrderedSet::new();
    assert_eq!(set.size(), 0);
    assert!(set.is_empty());
    assert!(set.values().is_empty());
}

#[rstest]
#[case::no_values(vec![], 0)]
#[case::distinct(vec!["a", "b", "c"], 3)]
#[case::with_duplicate(vec!["a", "b", "b", "c"], 3)]
#[case::all_duplicates(vec!["a", "a", "a"], 1)]
fn test_construction_counts_distinct_values(
    #[case] values: Vec<&'static str>,
    #[case] expected: usize,
) {
    let set = OrderedSet::from_values(values);
    assert_eq!(set.size(), expected);
}

#[rstest]
fn test_construction_keeps_first_occurrence_order() {
    let set = OrderedSet::from_values(["a", "b", "b", "c", "a"]);
    assert_eq!(set.values(), vec!["a", "b", "c"]);
}

#[rstest]
fn test_default_is_empty() {
    let set: OrderedSet<i32> = OrderedSet::default();
    assert!(set.is_empty());
}

#[rstest]
fn test_from_array_and_vec() {
    let from_array = OrderedSet::from([1, 2, 2]);
    let from_vec = OrderedSet::from(vec![1, 2, 2]);
    assert_eq!(from_array.values(), vec![1, 2]);
    assert_eq!(from_vec.values(), vec![1, 2]);
}

#[rstest]
fn test_collect_into_set() {
    let set: OrderedSet<char> = "mississippi".chars().collect();
    assert_eq!(set.values(), vec!['m', 'i', 's', 'p']);
}

// =============================================================================
// add / insert
// =============================================================================

#[rstest]
fn test_add(mut set: OrderedSet<&'static str>) {
    set.add("second");
    set.add("third");
    set.add("fourth");
    assert_eq!(set.size(), 4);
}

#[rstest]
fn test_add_chains(mut set: OrderedSet<&'static str>) {
    set.add("second").add("fifth").add("fifth");
    assert_eq!(set.size(), 3);
    assert_eq!(set.values(), vec!["first", "second", "fifth"]);
}

#[rstest]
fn test_add_existing_value_keeps_position(mut set: OrderedSet<&'static str>) {
    set.add("third").add("first");
    assert_eq!(set.values(), vec!["first", "second", "third"]);
}

#[rstest]
fn test_insert_reports_novelty(mut set: OrderedSet<&'static str>) {
    assert!(!set.insert("first"));
    assert!(set.insert("third"));
    assert!(!set.insert("third"));
    assert_eq!(set.len(), 3);
}

// =============================================================================
// has
// =============================================================================

#[rstest]
fn test_has_uses_strict_equality() {
    let mut set = OrderedSet::from_values([Scalar::Text("first"), Scalar::Text("second")]);
    set.add(Scalar::Text("second"));
    set.add(Scalar::Number(3)).add(Scalar::Text("fourth"));

    assert!(!set.has(&Scalar::Text("2")));
    assert!(!set.has(&Scalar::Text("3")));
    assert!(set.has(&Scalar::Number(3)));
    assert!(set.has(&Scalar::Text("first")));
    assert_eq!(set.size(), 4);
}

#[rstest]
fn test_text_and_number_lookalikes_are_distinct() {
    let set = OrderedSet::from_values([Scalar::Number(3), Scalar::Text("3")]);
    assert_eq!(set.size(), 2);
}

#[rstest]
fn test_has_on_empty_set() {
    let set: OrderedSet<i32> = OrderedSet::new();
    assert!(!set.has(&0));
}

// =============================================================================
// values / keys / entries
// =============================================================================

#[rstest]
fn test_values(mut set: OrderedSet<&'static str>) {
    set.add("first");
    set.add("zero");
    assert_eq!(set.values(), vec!["first", "second", "zero"]);
}

#[rstest]
fn test_keys_equal_values(set: OrderedSet<&'static str>) {
    assert_eq!(set.keys(), set.values());
}

#[rstest]
fn test_entries(set: OrderedSet<&'static str>) {
    assert_eq!(
        set.entries(),
        vec![("first", "first"), ("second", "second")]
    );
}

#[rstest]
fn test_views_are_snapshots(mut set: OrderedSet<&'static str>) {
    let values = set.values();
    let entries = set.entries();

    set.delete("first");
    set.add("third");

    assert_eq!(values, vec!["first", "second"]);
    assert_eq!(entries, vec![("first", "first"), ("second", "second")]);
    assert_eq!(set.values(), vec!["second", "third"]);
}

// =============================================================================
// clear
// =============================================================================

#[rstest]
fn test_clear(mut set: OrderedSet<&'static str>) {
    set.clear();
    assert_eq!(set.size(), 0);
    assert!(set.values().is_empty());
    assert!(set.entries().is_empty());

    set.add("first");
    assert_eq!(set.size(), 1);
    assert_eq!(set.values(), vec!["first"]);
}

// =============================================================================
// delete
// =============================================================================

#[rstest]
fn test_delete(mut set: OrderedSet<&'static str>) {
    assert_eq!(set.values(), vec!["first", "second"]);
    assert_eq!(set.size(), 2);

    assert!(!set.delete("kthxbai"));
    assert_eq!(set.values(), vec!["first", "second"]);
    assert_eq!(set.size(), 2);

    assert!(set.delete("first"));
    assert_eq!(set.values(), vec!["second"]);
    assert_eq!(set.size(), 1);
}

#[rstest]
fn test_delete_middle_preserves_relative_order() {
    let mut set = OrderedSet::from_values(["a", "b", "c", "d"]);
    assert!(set.delete("b"));
    assert_eq!(set.values(), vec!["a", "c", "d"]);
}

#[rstest]
fn test_delete_then_add_moves_value_to_end() {
    let mut set = OrderedSet::from_values(["a", "b", "c"]);
    set.delete("a");
    set.add("a");
    assert_eq!(set.values(), vec!["b", "c", "a"]);
}

#[rstest]
fn test_repeated_deletes_keep_size_accurate() {
    let mut set = OrderedSet::from_values(["a", "b", "c"]);
    assert!(set.delete("a"));
    assert!(set.delete("b"));
    assert!(!set.delete("b"));
    assert!(set.delete("c"));
    assert_eq!(set.size(), 0);
    assert!(set.is_empty());
}

// =============================================================================
// for_each
// =============================================================================

#[rstest]
fn test_for_each_visits_in_order_with_set_as_context(set: OrderedSet<&'static str>) {
    let mut visited = Vec::new();
    set.for_each(|value, key, context| {
        visited.push((context.size(), *value, *key));
    });
    assert_eq!(
        visited,
        vec![(2, "first", "first"), (2, "second", "second")]
    );
}

#[rstest]
fn test_for_each_with_binds_context(set: OrderedSet<&'static str>) {
    struct Context {
        hello: &'static str,
    }

    let context = Context { hello: "world" };
    let mut calls = 0;
    set.for_each_with(&context, |value, key, context| {
        assert_eq!(context.hello, "world");
        assert!(["first", "second"].contains(value));
        assert!(["first", "second"].contains(key));
        calls += 1;
    });
    assert_eq!(calls, 2);
}

#[rstest]
fn test_try_for_each_propagates_callback_error(set: OrderedSet<&'static str>) {
    #[derive(Debug, PartialEq)]
    struct Rejected(&'static str);

    let result = set.try_for_each(|value, _key, _set| {
        if *value == "second" {
            Err(Rejected(*value))
        } else {
            Ok(())
        }
    });
    assert_eq!(result, Err(Rejected("second")));
}

#[rstest]
fn test_try_for_each_succeeds_when_callback_does(set: OrderedSet<&'static str>) {
    let mut count = 0;
    let result: Result<(), String> = set.try_for_each(|_value, _key, _set| {
        count += 1;
        Ok(())
    });
    assert!(result.is_ok());
    assert_eq!(count, 2);
}

#[rstest]
#[should_panic(expected = "callback failed")]
fn test_for_each_panic_reaches_caller(set: OrderedSet<&'static str>) {
    set.for_each(|value, _key, _set| {
        if *value == "second" {
            panic!("callback failed");
        }
    });
}

// =============================================================================
// Generic iteration
// =============================================================================

#[rstest]
fn test_collect_matches_values(set: OrderedSet<&'static str>) {
    let collected: Vec<&str> = set.iter().copied().collect();
    assert_eq!(collected, set.values());
}

#[rstest]
fn test_owned_into_iter_matches_values(set: OrderedSet<&'static str>) {
    let expected = set.values();
    let collected: Vec<&str> = set.into_iter().collect();
    assert_eq!(collected, expected);
}

#[rstest]
fn test_for_loop_over_reference(set: OrderedSet<&'static str>) {
    let mut joined = String::new();
    for value in &set {
        joined.push_str(value);
    }
    assert_eq!(joined, "firstsecond");
}

#[rstest]
fn test_extend_absorbs_duplicates(mut set: OrderedSet<&'static str>) {
    set.extend(["second", "third", "third"]);
    set.extend(&["first", "fourth"]);
    assert_eq!(set.values(), vec!["first", "second", "third", "fourth"]);
}
