//! Sample values per runtime type and sequence shape.

use argcheck_core::{Value, ValueType};

/// One representative value for every concrete runtime type.
pub fn one_of_each() -> Vec<Value> {
    vec![
        Value::None,
        Value::Bool(true),
        Value::Int(7),
        Value::Float(2.5),
        Value::str("hello"),
        Value::list([1, 2, 3]),
        Value::tuple([1, 2]),
        Value::dict([("a", 1)]),
    ]
}

/// Values from [`one_of_each`] that are not instances of `t`.
pub fn not_instances_of(t: ValueType) -> Vec<Value> {
    one_of_each()
        .into_iter()
        .filter(|v| !v.is_instance_of(t))
        .collect()
}

pub fn empty_list() -> Value {
    Value::List(Vec::new())
}

pub fn increasing() -> Value {
    Value::list([1, 2, 5, 9])
}

pub fn decreasing() -> Value {
    Value::list([3, 1])
}

/// Integers with a string in the last position.
pub fn ints_then_str() -> Value {
    Value::list([Value::Int(1), Value::Int(2), Value::str("x")])
}

/// A list whose elements cannot be ordered against each other.
pub fn unorderable() -> Value {
    Value::list([Value::Int(1), Value::str("a")])
}
