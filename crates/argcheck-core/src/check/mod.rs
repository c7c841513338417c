//! The check catalog.
//!
//! A [`Check`] is a single predicate over one argument value plus the
//! contract for reporting its failure. Checks are immutable once built and
//! evaluate without touching shared state, so a compiled list of checks can
//! be shared freely between concurrent calls.
//!
//! Evaluation distinguishes three results:
//! - `Ok(Outcome::Pass)`: the value satisfies the check
//! - `Ok(Outcome::Fail | Outcome::FailWithContext(_))`: a violation
//! - `Err(ExecutionFailure)`: the check itself could not run on this value
//!   (no length, not iterable, unorderable)


use std::borrow::Cow;
use std::fmt;
use std::panic::Location;

use thiserror::Error;

use crate::error::{ArgCheckError, CallingLocation, Result};
use crate::param::{CallArg, ParamRef};
use crate::value::{DeclaredType, Value, ValueType};

/// The failure category a check reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckCategory {
    /// Type conformance; failures become type violations.
    Type,
    /// Value precondition; failures become value violations.
    Value,
    /// Element-wise combinator; failures become each-element violations.
    Each,
}

/// A constructed check.
#[derive(Debug, Clone, PartialEq)]
pub enum Check {
    /// Value is an instance of the declared type (subtypes included).
    TypeEquals(ValueType),
    /// Value offers the [`crate::SequenceLike`] capability.
    IsSequenceShaped(DeclaredType),
    /// Value has at least one element.
    NonEmpty,
    /// Each element is strictly greater than the one before it.
    MonotonicIncreasing,
    /// Value is greater than zero.
    Positive,
    /// The inner check holds for every element.
    EachSatisfies(Box<Check>),
}

/// The uninstantiated kind of a check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CheckKind {
    TypeEquals,
    IsSequenceShaped,
    NonEmpty,
    MonotonicIncreasing,
    Positive,
    EachSatisfies,
}

/// Argument accepted by check combinators: a built check or a kind to default-construct.
#[derive(Debug, Clone, PartialEq)]
pub enum CheckArg {
    Instance(Check),
    Kind(CheckKind),
}

impl From<Check> for CheckArg {
    fn from(check: Check) -> Self {
        CheckArg::Instance(check)
    }
}

impl From<CheckKind> for CheckArg {
    fn from(kind: CheckKind) -> Self {
        CheckArg::Kind(kind)
    }
}

/// Result of a successful evaluation.
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    Pass,
    Fail,
    /// Failure with the first offending element of a sequence.
    FailWithContext(ElementFailure),
}

impl Outcome {
    pub fn is_pass(&self) -> bool {
        matches!(self, Outcome::Pass)
    }
}

/// The first element of a sequence that failed an inner check.
#[derive(Debug, Clone, PartialEq)]
pub struct ElementFailure {
    pub index: usize,
    pub value: Value,
}

/// A check could not be evaluated against a value.
///
/// Names the operation that failed and the value it failed on. Callers
/// translate this into [`ArgCheckError::CallArgCheckExecution`].
#[derive(Debug, Clone, PartialEq, Error)]
#[error("operation `{operation}` failed for this value: {value}")]
pub struct ExecutionFailure {
    pub operation: &'static str,
    pub value: Value,
}

impl ExecutionFailure {
    fn new(operation: &'static str, value: &Value) -> Self {
        Self {
            operation,
            value: value.clone(),
        }
    }
}

impl CheckKind {
    pub fn name(self) -> &'static str {
        match self {
            CheckKind::TypeEquals => "TypeEquals",
            CheckKind::IsSequenceShaped => "IsSequenceShaped",
            CheckKind::NonEmpty => "NonEmpty",
            CheckKind::MonotonicIncreasing => "MonotonicIncreasing",
            CheckKind::Positive => "Positive",
            CheckKind::EachSatisfies => "EachSatisfies",
        }
    }

    /// Default-constructs this kind. `None` for kinds that need an argument.
    pub fn instantiate(self) -> Option<Check> {
        match self {
            CheckKind::NonEmpty => Some(Check::NonEmpty),
            CheckKind::MonotonicIncreasing => Some(Check::MonotonicIncreasing),
            CheckKind::Positive => Some(Check::Positive),
            CheckKind::TypeEquals | CheckKind::IsSequenceShaped | CheckKind::EachSatisfies => None,
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Check {
    pub fn type_equals(declared: ValueType) -> Self {
        Check::TypeEquals(declared)
    }

    pub fn is_sequence_shaped(declared: DeclaredType) -> Self {
        Check::IsSequenceShaped(declared)
    }

    /// Wraps an already-built check.
    pub fn each(inner: Check) -> Self {
        Check::EachSatisfies(Box::new(inner))
    }

    /// Builds `EachSatisfies` from a check or a check kind.
    ///
    /// A kind is default-constructed. Kinds that need a constructor argument
    /// are rejected with [`ArgCheckError::AnnotationConstruction`] naming the
    /// caller's file and line.
    #[track_caller]
    pub fn each_satisfies(inner: impl Into<CheckArg>) -> Result<Self> {
        let location = Location::caller();
        match inner.into() {
            CheckArg::Instance(check) => Ok(Check::each(check)),
            CheckArg::Kind(kind) => match kind.instantiate() {
                Some(check) => Ok(Check::each(check)),
                None => Err(ArgCheckError::AnnotationConstruction {
                    check_kind: CheckKind::EachSatisfies,
                    location: CallingLocation::from(location),
                    problem: format!(
                        "expected a check instance or a default-constructible check kind; received kind: {}",
                        kind
                    ),
                }),
            },
        }
    }

    pub fn kind(&self) -> CheckKind {
        match self {
            Check::TypeEquals(_) => CheckKind::TypeEquals,
            Check::IsSequenceShaped(_) => CheckKind::IsSequenceShaped,
            Check::NonEmpty => CheckKind::NonEmpty,
            Check::MonotonicIncreasing => CheckKind::MonotonicIncreasing,
            Check::Positive => CheckKind::Positive,
            Check::EachSatisfies(_) => CheckKind::EachSatisfies,
        }
    }

    pub fn category(&self) -> CheckCategory {
        match self {
            Check::TypeEquals(_) | Check::IsSequenceShaped(_) => CheckCategory::Type,
            Check::NonEmpty | Check::MonotonicIncreasing | Check::Positive => CheckCategory::Value,
            Check::EachSatisfies(_) => CheckCategory::Each,
        }
    }

    /// Returns true for checks allowed in a refinement's value-check list.
    pub fn is_value_check(&self) -> bool {
        self.category() != CheckCategory::Type
    }

    /// The declared type a type check enforces.
    pub fn declared_type(&self) -> Option<DeclaredType> {
        match self {
            Check::TypeEquals(t) => Some(DeclaredType::Type(*t)),
            Check::IsSequenceShaped(declared) => Some(declared.clone()),
            _ => None,
        }
    }

    /// The stable constructor-like form, e.g. `TypeEquals(type_declared=int)`.
    pub fn describe(&self) -> String {
        self.to_string()
    }

    /// A short human form, e.g. `TypeEquals for type int`.
    pub fn summary(&self) -> String {
        match self {
            Check::TypeEquals(t) => format!("{} for type {}", self.kind(), t),
            Check::IsSequenceShaped(declared) => format!("{} for type {}", self.kind(), declared),
            Check::EachSatisfies(inner) => format!("{}({})", self.kind(), inner),
            _ => self.kind().name().to_string(),
        }
    }

    /// Evaluates the check against one value.
    pub fn evaluate(&self, value: &Value) -> std::result::Result<Outcome, ExecutionFailure> {
        let passed = match self {
            Check::TypeEquals(declared) => value.is_instance_of(*declared),
            Check::IsSequenceShaped(_) => value.as_sequence().is_some(),
            Check::NonEmpty => {
                value
                    .try_len()
                    .ok_or_else(|| ExecutionFailure::new("len(x)", value))?
                    > 0
            }
            Check::MonotonicIncreasing => is_monotonic_increasing(value)?,
            Check::Positive => value
                .try_gt(&Value::Int(0))
                .ok_or_else(|| ExecutionFailure::new("x > 0", value))?,
            Check::EachSatisfies(inner) => return evaluate_each(inner, value),
        };
        Ok(if passed { Outcome::Pass } else { Outcome::Fail })
    }

    /// Builds the violation this check reports for a failed argument.
    pub fn violation(
        &self,
        param: ParamRef,
        arg: CallArg,
        context: Option<ElementFailure>,
    ) -> ArgCheckError {
        match (self.category(), context) {
            (CheckCategory::Type, _) => {
                let type_received = arg.value.value_type();
                let type_declared = self
                    .declared_type()
                    .unwrap_or(DeclaredType::Type(ValueType::Object));
                ArgCheckError::CallArgTypeCheckViolation {
                    param,
                    arg,
                    check: self.clone(),
                    type_declared,
                    type_received,
                }
            }
            (CheckCategory::Each, Some(element)) => ArgCheckError::CallArgEachCheckViolation {
                param,
                arg,
                check: self.clone(),
                index: element.index,
                element: element.value,
            },
            _ => ArgCheckError::CallArgValueCheckViolation {
                param,
                arg,
                check: self.clone(),
            },
        }
    }
}

fn is_monotonic_increasing(value: &Value) -> std::result::Result<bool, ExecutionFailure> {
    let len = value
        .try_len()
        .ok_or_else(|| ExecutionFailure::new("len(x)", value))?;
    if len <= 1 {
        return Ok(true);
    }
    let items: Vec<Cow<'_, Value>> = match value.elements() {
        Some(elements) if value.is_indexable() => elements.collect(),
        _ => return Err(ExecutionFailure::new("x[i+1] > x[i]", value)),
    };
    for pair in items.windows(2) {
        match pair[1].try_gt(&pair[0]) {
            Some(true) => {}
            Some(false) => return Ok(false),
            None => return Err(ExecutionFailure::new("x[i+1] > x[i]", value)),
        }
    }
    Ok(true)
}

fn evaluate_each(inner: &Check, value: &Value) -> std::result::Result<Outcome, ExecutionFailure> {
    let elements = value
        .elements()
        .ok_or_else(|| ExecutionFailure::new("for elem in x", value))?;
    for (index, element) in elements.enumerate() {
        if !inner.evaluate(&element)?.is_pass() {
            return Ok(Outcome::FailWithContext(ElementFailure {
                index,
                value: element.into_owned(),
            }));
        }
    }
    Ok(Outcome::Pass)
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Check::TypeEquals(t) => write!(f, "{}(type_declared={})", self.kind(), t),
            Check::IsSequenceShaped(declared) => {
                write!(f, "{}(type_declared={})", self.kind(), declared)
            }
            Check::EachSatisfies(inner) => {
                write!(f, "{}(check_applied_to_each={})", self.kind(), inner)
            }
            _ => write!(f, "{}()", self.kind()),
        }
    }
}
