//! Dynamic values passed as call arguments.
//!
//! Validated functions receive their arguments as [`Value`]s. Each value
//! carries a runtime [`ValueType`]; the checks in [`crate::check`] inspect
//! values only through the operations defined here (length, iteration,
//! indexing, ordering), so every check reports failures the same way.

mod sequence;
mod types;


use std::borrow::Cow;
use std::cmp::Ordering;
use std::fmt;
use std::sync::Arc;

pub use sequence::SequenceLike;
pub use types::{DeclaredType, ValueType};

/// A runtime value supplied as a call argument or declared as a default.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absent value.
    None,
    /// Boolean; also usable wherever an `int` is declared.
    Bool(bool),
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Text. Indexable and iterable by character, but not sequence-shaped.
    Str(Arc<str>),
    /// Growable list; the only sequence-shaped value.
    List(Vec<Value>),
    /// Fixed-size tuple.
    Tuple(Vec<Value>),
    /// Insertion-ordered mapping. Iterates over its keys.
    Dict(Vec<(Value, Value)>),
}

/// Marker returned when two values have no ordering between them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Unorderable;

impl Value {
    /// Creates a text value.
    pub fn str(s: impl Into<Arc<str>>) -> Self {
        Value::Str(s.into())
    }

    /// Creates a list from anything convertible into values.
    pub fn list<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Value::List(items.into_iter().map(Into::into).collect())
    }

    /// Creates a tuple from anything convertible into values.
    pub fn tuple<T: Into<Value>>(items: impl IntoIterator<Item = T>) -> Self {
        Value::Tuple(items.into_iter().map(Into::into).collect())
    }

    /// Creates a dict from key/value pairs, keeping their order.
    pub fn dict<K: Into<Value>, V: Into<Value>>(entries: impl IntoIterator<Item = (K, V)>) -> Self {
        Value::Dict(
            entries
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }

    /// Returns the runtime type of this value.
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::None => ValueType::None,
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::Str(_) => ValueType::Str,
            Value::List(_) => ValueType::List,
            Value::Tuple(_) => ValueType::Tuple,
            Value::Dict(_) => ValueType::Dict,
        }
    }

    /// Returns true if this value is an instance of `declared`, subtypes included.
    pub fn is_instance_of(&self, declared: ValueType) -> bool {
        self.value_type().is_subtype_of(declared)
    }

    /// Attempts to extract an integer. Booleans count as 0 and 1.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(v) => Some(*v),
            Value::Bool(b) => Some(i64::from(*b)),
            _ => None,
        }
    }

    /// Returns the sequence capability of this value, if it has one.
    ///
    /// Only lists are sequence-shaped: text and tuples support some of the
    /// operations but are deliberately excluded.
    pub fn as_sequence(&self) -> Option<&dyn SequenceLike> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Number of elements, or `None` if the value has no length.
    pub fn try_len(&self) -> Option<usize> {
        match self {
            Value::Str(s) => Some(s.chars().count()),
            Value::List(items) | Value::Tuple(items) => Some(items.len()),
            Value::Dict(entries) => Some(entries.len()),
            _ => None,
        }
    }

    /// Iterates the elements of the value, or `None` if it is not iterable.
    pub fn elements(&self) -> Option<Elements<'_>> {
        match self {
            Value::Str(s) => Some(Elements::Chars(s.chars())),
            Value::List(items) | Value::Tuple(items) => {
                Some(Elements::Items(items.as_slice().iter()))
            }
            Value::Dict(entries) => Some(Elements::Keys(entries.iter())),
            _ => None,
        }
    }

    /// Returns true if the value supports access by integer position.
    pub fn is_indexable(&self) -> bool {
        matches!(self, Value::Str(_) | Value::List(_) | Value::Tuple(_))
    }

    /// Element at `index`, or `None` if not indexable or out of range.
    pub fn index(&self, index: usize) -> Option<Cow<'_, Value>> {
        match self {
            Value::Str(s) => s.chars().nth(index).map(|c| Cow::Owned(Value::from(c))),
            Value::List(items) | Value::Tuple(items) => {
                items.as_slice().get(index).map(Cow::Borrowed)
            }
            _ => None,
        }
    }

    /// Evaluates `self > other`, or `None` if the two values are unorderable.
    ///
    /// Numbers compare across bool/int/float, text compares with text, and
    /// lists and tuples compare lexicographically with their own kind.
    /// A NaN operand yields `Some(false)` rather than `None`.
    pub fn try_gt(&self, other: &Value) -> Option<bool> {
        self.compare(other)
            .ok()
            .map(|ordering| ordering == Some(Ordering::Greater))
    }

    // Outer error: no ordering between the types. Inner `None`: NaN involved.
    pub(crate) fn compare(&self, other: &Value) -> Result<Option<Ordering>, Unorderable> {
        match (self, other) {
            (Value::Str(a), Value::Str(b)) => Ok(Some(a.cmp(b))),
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => {
                compare_lexicographic(a, b)
            }
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => Ok(a.compare(b)),
                _ => Err(Unorderable),
            },
        }
    }

    fn as_number(&self) -> Option<Number> {
        match self {
            Value::Bool(b) => Some(Number::Int(i64::from(*b))),
            Value::Int(v) => Some(Number::Int(*v)),
            Value::Float(v) => Some(Number::Float(*v)),
            _ => None,
        }
    }
}

#[derive(Clone, Copy)]
enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    // Exact across int and float; `None` only when NaN is involved.
    fn compare(self, other: Number) -> Option<Ordering> {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Some(a.cmp(&b)),
            (Number::Float(a), Number::Float(b)) => a.partial_cmp(&b),
            (Number::Int(a), Number::Float(b)) => compare_int_float(a, b),
            (Number::Float(a), Number::Int(b)) => compare_int_float(b, a).map(Ordering::reverse),
        }
    }
}

fn compare_int_float(int: i64, float: f64) -> Option<Ordering> {
    if float.is_nan() {
        return None;
    }
    // The cast saturates, so infinities and huge floats land outside i64 range.
    let whole = float.trunc();
    match i128::from(int).cmp(&(whole as i128)) {
        Ordering::Equal => 0.0_f64.partial_cmp(&(float - whole)),
        unequal => Some(unequal),
    }
}

fn compare_lexicographic(a: &[Value], b: &[Value]) -> Result<Option<Ordering>, Unorderable> {
    // The first unequal pair decides; equal prefixes fall back to length.
    match a.iter().zip(b).find(|(x, y)| x != y) {
        Some((x, y)) => x.compare(y),
        None => Ok(Some(a.len().cmp(&b.len()))),
    }
}

/// Iterator over the elements of an iterable [`Value`].
pub enum Elements<'a> {
    Items(std::slice::Iter<'a, Value>),
    Keys(std::slice::Iter<'a, (Value, Value)>),
    Chars(std::str::Chars<'a>),
}

impl<'a> Iterator for Elements<'a> {
    type Item = Cow<'a, Value>;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Elements::Items(iter) => iter.next().map(Cow::Borrowed),
            Elements::Keys(iter) => iter.next().map(|(k, _)| Cow::Borrowed(k)),
            Elements::Chars(iter) => iter.next().map(|c| Cow::Owned(Value::from(c))),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::None, Value::None) => true,
            (Value::Str(a), Value::Str(b)) => a == b,
            (Value::List(a), Value::List(b)) | (Value::Tuple(a), Value::Tuple(b)) => a == b,
            (Value::Dict(a), Value::Dict(b)) => {
                a.len() == b.len()
                    && a.iter()
                        .all(|(k, v)| b.iter().any(|(k2, v2)| k == k2 && v == v2))
            }
            _ => match (self.as_number(), other.as_number()) {
                (Some(a), Some(b)) => a.compare(b) == Some(Ordering::Equal),
                _ => false,
            },
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "None"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Float(x) => write!(f, "{:?}", x),
            Value::Str(s) => write!(f, "{:?}", s),
            Value::List(items) => {
                write!(f, "[")?;
                write_joined(f, items)?;
                write!(f, "]")
            }
            Value::Tuple(items) => {
                write!(f, "(")?;
                write_joined(f, items)?;
                if items.len() == 1 {
                    write!(f, ",")?;
                }
                write!(f, ")")
            }
            Value::Dict(entries) => {
                write!(f, "{{")?;
                for (i, (k, v)) in entries.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}: {}", k, v)?;
                }
                write!(f, "}}")
            }
        }
    }
}

fn write_joined(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{}", item)?;
    }
    Ok(())
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(i64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<char> for Value {
    fn from(c: char) -> Self {
        Value::Str(Arc::from(c.to_string()))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Arc::from(s))
    }
}

impl From<Vec<Value>> for Value {
    fn from(items: Vec<Value>) -> Self {
        Value::List(items)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::None, Into::into)
    }
}
