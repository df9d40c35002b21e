//! Array Strategy Tests

use crate::test_utils::{dispatcher_over, no_params};
use defres_domain::definition::{Definition, Entry};
use defres_domain::value::Value;
use defres_infrastructure::adapters::InMemoryContainer;

#[test]
fn test_map_preserves_keys_and_order() {
    let dispatcher = dispatcher_over(InMemoryContainer::new());
    let definition = Definition::map(
        "limits",
        vec![
            ("a", Entry::from(Definition::value("a", 1_i64))),
            ("b", Entry::from(Definition::value("b", 2_i64))),
        ],
    );

    let value = dispatcher.resolve(&definition, &no_params()).unwrap();
    let map = value.as_map().expect("map");

    let keys: Vec<&str> = map.keys().map(String::as_str).collect();
    assert_eq!(keys, vec!["a", "b"]);
    assert_eq!(map["a"], Value::Int(1));
    assert_eq!(map["b"], Value::Int(2));
}

#[test]
fn test_list_mixes_literals_and_nested_definitions() {
    let dispatcher = dispatcher_over(InMemoryContainer::new().with_entry("db.host", "localhost"));
    let definition = Definition::list(
        "hosts",
        vec![
            Entry::from("static"),
            Entry::from(Definition::alias("hosts.0", "db.host")),
            Entry::from(Definition::string("hosts.1", "{db.host}:5432")),
        ],
    );

    let value = dispatcher.resolve(&definition, &no_params()).unwrap();
    assert_eq!(
        value,
        Value::List(vec![
            Value::from("static"),
            Value::from("localhost"),
            Value::from("localhost:5432"),
        ])
    );
}

#[test]
fn test_nested_arrays_recurse() {
    let dispatcher = dispatcher_over(InMemoryContainer::new());
    let inner = Definition::list("inner", vec![Entry::from(Definition::value("x", true))]);
    let outer = Definition::map("outer", vec![("inner", Entry::from(inner))]);

    let value = dispatcher.resolve(&outer, &no_params()).unwrap();
    assert_eq!(
        value.as_map().unwrap()["inner"],
        Value::List(vec![Value::Bool(true)])
    );
}

#[test]
fn test_failing_entry_fails_whole_array() {
    let dispatcher = dispatcher_over(InMemoryContainer::new());
    let definition = Definition::list(
        "broken",
        vec![
            Entry::from(1_i64),
            Entry::from(Definition::alias("missing", "missing")),
        ],
    );

    let err = dispatcher.resolve(&definition, &no_params()).unwrap_err();
    assert!(err.is_not_found());
}
