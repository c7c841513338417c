//! Runtime and declared types.

use std::fmt;

/// The runtime type of a [`super::Value`], plus the top type `object`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ValueType {
    None,
    Bool,
    Int,
    Float,
    Str,
    List,
    Tuple,
    Dict,
    /// Every value is an instance of `object`.
    Object,
}

impl ValueType {
    /// Short name used in diagnostics.
    pub fn name(self) -> &'static str {
        match self {
            ValueType::None => "none",
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::Str => "str",
            ValueType::List => "list",
            ValueType::Tuple => "tuple",
            ValueType::Dict => "dict",
            ValueType::Object => "object",
        }
    }

    /// Returns true if values of `self` are instances of `declared`.
    pub fn is_subtype_of(self, declared: ValueType) -> bool {
        self == declared
            || declared == ValueType::Object
            || (self == ValueType::Bool && declared == ValueType::Int)
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A type as declared on a parameter, as reported in type violations.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum DeclaredType {
    Type(ValueType),
    Sequence(Box<DeclaredType>),
}

impl DeclaredType {
    pub fn sequence_of(element: DeclaredType) -> Self {
        DeclaredType::Sequence(Box::new(element))
    }
}

impl From<ValueType> for DeclaredType {
    fn from(t: ValueType) -> Self {
        DeclaredType::Type(t)
    }
}

impl fmt::Display for DeclaredType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeclaredType::Type(t) => write!(f, "{}", t),
            DeclaredType::Sequence(element) => write!(f, "Sequence[{}]", element),
        }
    }
}
