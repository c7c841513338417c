//! Constraint descriptions attached to declared parameters.
//!
//! A description is the raw, possibly nested form a declaration carries.
//! It is compiled once into a flat list of checks when a function is
//! registered.

use std::fmt;

use crate::check::{Check, CheckKind};
use crate::value::ValueType;

/// What a parameter's arguments must satisfy.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintDescription {
    /// An instance of this type.
    Plain(ValueType),
    /// The base description, then every value check in `extras`, in order.
    Refined {
        base: Box<ConstraintDescription>,
        extras: Vec<ConstraintItem>,
    },
    /// A sequence-shaped value whose elements satisfy the nested description.
    SequenceOf(Box<ConstraintDescription>),
    /// A host annotation with no compilation rule, kept verbatim.
    Other(String),
}

/// One entry in a refinement's value-check list.
#[derive(Debug, Clone, PartialEq)]
pub enum ConstraintItem {
    /// An already-constructed check.
    Check(Check),
    /// A kind to default-construct.
    Kind(CheckKind),
    /// A nested list, flattened during compilation.
    List(Vec<ConstraintItem>),
}

impl ConstraintDescription {
    pub fn plain(t: ValueType) -> Self {
        ConstraintDescription::Plain(t)
    }

    /// Refines `base` with value checks.
    ///
    /// # Examples
    ///
    /// ```
    /// use argcheck_core::{CheckKind, ConstraintDescription, ValueType};
    ///
    /// let desc = ConstraintDescription::refined(
    ///     ValueType::Int,
    ///     [CheckKind::Positive.into()],
    /// );
    /// assert_eq!(desc.to_string(), "Refined[int, Positive]");
    /// ```
    pub fn refined(
        base: impl Into<ConstraintDescription>,
        extras: impl IntoIterator<Item = ConstraintItem>,
    ) -> Self {
        ConstraintDescription::Refined {
            base: Box::new(base.into()),
            extras: extras.into_iter().collect(),
        }
    }

    pub fn sequence_of(element: impl Into<ConstraintDescription>) -> Self {
        ConstraintDescription::SequenceOf(Box::new(element.into()))
    }

    pub fn other(text: impl Into<String>) -> Self {
        ConstraintDescription::Other(text.into())
    }
}

impl From<ValueType> for ConstraintDescription {
    fn from(t: ValueType) -> Self {
        ConstraintDescription::Plain(t)
    }
}

impl From<Check> for ConstraintItem {
    fn from(check: Check) -> Self {
        ConstraintItem::Check(check)
    }
}

impl From<CheckKind> for ConstraintItem {
    fn from(kind: CheckKind) -> Self {
        ConstraintItem::Kind(kind)
    }
}

impl From<Vec<ConstraintItem>> for ConstraintItem {
    fn from(items: Vec<ConstraintItem>) -> Self {
        ConstraintItem::List(items)
    }
}

impl fmt::Display for ConstraintDescription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintDescription::Plain(t) => write!(f, "{}", t),
            ConstraintDescription::Refined { base, extras } => {
                write!(f, "Refined[{}", base)?;
                for item in extras {
                    write!(f, ", {}", item)?;
                }
                write!(f, "]")
            }
            ConstraintDescription::SequenceOf(element) => write!(f, "Sequence[{}]", element),
            ConstraintDescription::Other(text) => f.write_str(text),
        }
    }
}

impl fmt::Display for ConstraintItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConstraintItem::Check(check) => write!(f, "{}", check),
            ConstraintItem::Kind(kind) => write!(f, "{}", kind),
            ConstraintItem::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}
