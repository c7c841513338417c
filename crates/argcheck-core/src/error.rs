//! Error types for argcheck.
//!
//! Every error raised by registration or by a validated call is an
//! [`ArgCheckError`]. Its variants form a hierarchy, from non-specific to
//! most specific:
//!
//! ```text
//! ArgCheck
//!  ├─ InvalidSignature
//!  ├─ AnnotationCompilation
//!  ├─ AnnotationConstruction
//!  ├─ CallArgBindingRejection
//!  └─ CallArgCheck
//!      ├─ CallArgCheckExecution
//!      └─ CallArgCheckViolation
//!          ├─ CallArgTypeCheckViolation
//!          ├─ CallArgValueCheckViolation
//!          └─ CallArgEachCheckViolation
//! ```
//!
//! The hierarchy is mirrored by [`ErrorKind`], so callers can handle errors at
//! the specificity they choose with [`ArgCheckError::is`]:
//!
//! ```
//! use argcheck_core::{ArgCheckError, BindError, ErrorKind};
//!
//! let err = ArgCheckError::from(BindError::TooManyPositional);
//! assert!(err.is(ErrorKind::CallArgBindingRejection));
//! assert!(err.is(ErrorKind::ArgCheck));
//! assert!(!err.is(ErrorKind::CallArgCheck));
//! ```
//!
//! `Rejection` and `Violation` kinds mean invalid call arguments were
//! detected. `Execution` means the arguments made a check fail to run,
//! which points at a constraint declared against a value shape the check
//! does not support.

use std::fmt;
use std::panic::Location;
use std::sync::Arc;

use thiserror::Error;

use crate::check::{Check, CheckKind};
use crate::param::{CallArg, ParamKind, ParamRef};
use crate::value::{DeclaredType, Value, ValueType};

/// Main error type for argcheck operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArgCheckError {
    /// Non-specific error. Prefer a specific variant.
    #[error("exception during function argument check: {0}")]
    Generic(String),

    /// The declared parameter list is malformed.
    #[error("invalid function signature: {0}")]
    InvalidSignature(#[from] SignatureError),

    /// A parameter's constraint description could not be compiled into checks.
    #[error("unable to compile type annotation `{annotation}` into checks: {problem}")]
    AnnotationCompilation {
        param: ParamRef,
        annotation: String,
        problem: String,
    },

    /// A check combinator received an invalid constructor argument.
    #[error(
        "unable to construct check `{check_kind}` at `{location}` due to invalid constructor argument: {problem}"
    )]
    AnnotationConstruction {
        check_kind: CheckKind,
        location: CallingLocation,
        problem: String,
    },

    /// The call's arguments could not be bound to the declared parameters.
    #[error("unable to bind function call argument: {0}")]
    CallArgBindingRejection(#[from] BindError),

    /// A check could not be evaluated against an argument.
    #[error(
        "operation `{operation}` failed for param {param} during check `{during_check}` for this value: {value}"
    )]
    CallArgCheckExecution {
        param: ParamRef,
        arg: CallArg,
        during_check: Check,
        operation: &'static str,
        value: Value,
    },

    /// An argument is not an instance of the declared type.
    #[error(
        "violation of type check `{check}` for param {param} (declared={type_declared}; received={type_received}): {arg}"
    )]
    CallArgTypeCheckViolation {
        param: ParamRef,
        arg: CallArg,
        check: Check,
        type_declared: DeclaredType,
        type_received: ValueType,
    },

    /// An argument violates a value precondition.
    #[error("violation of value-constraint check `{check}` for param {param}: {arg}")]
    CallArgValueCheckViolation {
        param: ParamRef,
        arg: CallArg,
        check: Check,
    },

    /// An element of a sequence argument violates the element check.
    #[error(
        "violation of sequence check `{check}` for param {param}: {arg} (at sequence element [{index}]={element})"
    )]
    CallArgEachCheckViolation {
        param: ParamRef,
        arg: CallArg,
        check: Check,
        index: usize,
        element: Value,
    },
}

/// Result type alias for argcheck operations.
pub type Result<T> = std::result::Result<T, ArgCheckError>;

/// Levels of the error hierarchy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    ArgCheck,
    InvalidSignature,
    AnnotationCompilation,
    AnnotationConstruction,
    CallArgBindingRejection,
    CallArgCheck,
    CallArgCheckExecution,
    CallArgCheckViolation,
    CallArgTypeCheckViolation,
    CallArgValueCheckViolation,
    CallArgEachCheckViolation,
}

impl ErrorKind {
    /// The next less specific kind; `None` at the root.
    pub fn parent(self) -> Option<ErrorKind> {
        match self {
            ErrorKind::ArgCheck => None,
            ErrorKind::InvalidSignature
            | ErrorKind::AnnotationCompilation
            | ErrorKind::AnnotationConstruction
            | ErrorKind::CallArgBindingRejection
            | ErrorKind::CallArgCheck => Some(ErrorKind::ArgCheck),
            ErrorKind::CallArgCheckExecution | ErrorKind::CallArgCheckViolation => {
                Some(ErrorKind::CallArgCheck)
            }
            ErrorKind::CallArgTypeCheckViolation
            | ErrorKind::CallArgValueCheckViolation
            | ErrorKind::CallArgEachCheckViolation => Some(ErrorKind::CallArgCheckViolation),
        }
    }

    /// Returns true if `self` is `ancestor` or a more specific kind of it.
    pub fn is_a(self, ancestor: ErrorKind) -> bool {
        let mut kind = Some(self);
        while let Some(k) = kind {
            if k == ancestor {
                return true;
            }
            kind = k.parent();
        }
        false
    }

    pub fn name(self) -> &'static str {
        match self {
            ErrorKind::ArgCheck => "ArgCheckError",
            ErrorKind::InvalidSignature => "InvalidSignature",
            ErrorKind::AnnotationCompilation => "AnnotationCompilationError",
            ErrorKind::AnnotationConstruction => "AnnotationConstructionError",
            ErrorKind::CallArgBindingRejection => "CallArgBindingRejection",
            ErrorKind::CallArgCheck => "CallArgCheckError",
            ErrorKind::CallArgCheckExecution => "CallArgCheckExecutionError",
            ErrorKind::CallArgCheckViolation => "CallArgCheckViolation",
            ErrorKind::CallArgTypeCheckViolation => "CallArgTypeCheckViolation",
            ErrorKind::CallArgValueCheckViolation => "CallArgValueCheckViolation",
            ErrorKind::CallArgEachCheckViolation => "CallArgEachCheckViolation",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl ArgCheckError {
    /// The most specific kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ArgCheckError::Generic(_) => ErrorKind::ArgCheck,
            ArgCheckError::InvalidSignature(_) => ErrorKind::InvalidSignature,
            ArgCheckError::AnnotationCompilation { .. } => ErrorKind::AnnotationCompilation,
            ArgCheckError::AnnotationConstruction { .. } => ErrorKind::AnnotationConstruction,
            ArgCheckError::CallArgBindingRejection(_) => ErrorKind::CallArgBindingRejection,
            ArgCheckError::CallArgCheckExecution { .. } => ErrorKind::CallArgCheckExecution,
            ArgCheckError::CallArgTypeCheckViolation { .. } => ErrorKind::CallArgTypeCheckViolation,
            ArgCheckError::CallArgValueCheckViolation { .. } => {
                ErrorKind::CallArgValueCheckViolation
            }
            ArgCheckError::CallArgEachCheckViolation { .. } => ErrorKind::CallArgEachCheckViolation,
        }
    }

    /// Returns true if this error is of `kind` or a more specific kind of it.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind().is_a(kind)
    }

    /// The parameter this error concerns, if any.
    pub fn param(&self) -> Option<&ParamRef> {
        match self {
            ArgCheckError::AnnotationCompilation { param, .. }
            | ArgCheckError::CallArgCheckExecution { param, .. }
            | ArgCheckError::CallArgTypeCheckViolation { param, .. }
            | ArgCheckError::CallArgValueCheckViolation { param, .. }
            | ArgCheckError::CallArgEachCheckViolation { param, .. } => Some(param),
            _ => None,
        }
    }

    /// The argument that caused this error, if any.
    pub fn arg(&self) -> Option<&CallArg> {
        match self {
            ArgCheckError::CallArgCheckExecution { arg, .. }
            | ArgCheckError::CallArgTypeCheckViolation { arg, .. }
            | ArgCheckError::CallArgValueCheckViolation { arg, .. }
            | ArgCheckError::CallArgEachCheckViolation { arg, .. } => Some(arg),
            _ => None,
        }
    }

    /// The check that failed or was executing, if any.
    pub fn check(&self) -> Option<&Check> {
        match self {
            ArgCheckError::CallArgCheckExecution { during_check, .. } => Some(during_check),
            ArgCheckError::CallArgTypeCheckViolation { check, .. }
            | ArgCheckError::CallArgValueCheckViolation { check, .. }
            | ArgCheckError::CallArgEachCheckViolation { check, .. } => Some(check),
            _ => None,
        }
    }

    /// Constructor-like form listing every attribute, for exact comparison in logs and tests.
    pub fn repr(&self) -> String {
        let attrs: Vec<(&str, String)> = match self {
            ArgCheckError::Generic(message) => vec![("message", format!("{:?}", message))],
            ArgCheckError::InvalidSignature(e) => vec![("problem", format!("{:?}", e.to_string()))],
            ArgCheckError::AnnotationCompilation {
                param,
                annotation,
                problem,
            } => vec![
                ("param", param.repr()),
                ("annotation", format!("{:?}", annotation)),
                ("problem", format!("{:?}", problem)),
            ],
            ArgCheckError::AnnotationConstruction {
                check_kind,
                location,
                problem,
            } => vec![
                ("check_type", check_kind.to_string()),
                ("calling_location", location.repr()),
                ("problem", format!("{:?}", problem)),
            ],
            ArgCheckError::CallArgBindingRejection(e) => {
                vec![("exception_args", format!("({:?},)", e.to_string()))]
            }
            ArgCheckError::CallArgCheckExecution {
                param,
                arg,
                during_check,
                operation,
                value,
            } => vec![
                ("param", param.repr()),
                ("arg_that_caused_failure", arg.repr()),
                ("during_check", during_check.to_string()),
                ("operation_that_failed", format!("{:?}", operation)),
                ("value_that_caused_failure", value.to_string()),
            ],
            ArgCheckError::CallArgTypeCheckViolation {
                param,
                arg,
                check,
                type_declared,
                type_received,
            } => vec![
                ("param", param.repr()),
                ("arg_that_caused_failure", arg.repr()),
                ("check_that_failed", check.to_string()),
                ("type_declared", type_declared.to_string()),
                ("type_received", type_received.to_string()),
            ],
            ArgCheckError::CallArgValueCheckViolation { param, arg, check } => vec![
                ("param", param.repr()),
                ("arg_that_caused_failure", arg.repr()),
                ("check_that_failed", check.to_string()),
            ],
            ArgCheckError::CallArgEachCheckViolation {
                param,
                arg,
                check,
                index,
                element,
            } => vec![
                ("param", param.repr()),
                ("arg_that_caused_failure", arg.repr()),
                ("check_that_failed", check.to_string()),
                ("idx_within_sequence", index.to_string()),
                ("value_within_sequence", element.to_string()),
            ],
        };
        let attrs: Vec<String> = attrs
            .into_iter()
            .map(|(name, value)| format!("{}={}", name, value))
            .collect();
        format!("{}({})", self.kind(), attrs.join(", "))
    }
}

/// Source location of a check construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct CallingLocation {
    pub file: &'static str,
    pub line: u32,
    pub column: u32,
}

impl CallingLocation {
    pub fn repr(&self) -> String {
        format!(
            "CallingLocation(file_name={:?}, line_num={})",
            self.file, self.line
        )
    }
}

impl From<&'static Location<'static>> for CallingLocation {
    fn from(location: &'static Location<'static>) -> Self {
        Self {
            file: location.file(),
            line: location.line(),
            column: location.column(),
        }
    }
}

impl fmt::Display for CallingLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.file, self.line)
    }
}

/// Diagnostics of the call binder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BindError {
    #[error("missing a required argument: '{0}'")]
    MissingArgument(Arc<str>),

    #[error("missing a required keyword-only argument: '{0}'")]
    MissingKeywordOnlyArgument(Arc<str>),

    #[error("too many positional arguments")]
    TooManyPositional,

    #[error("multiple values for argument '{0}'")]
    MultipleValues(Arc<str>),

    #[error("got an unexpected keyword argument '{0}'")]
    UnexpectedKeyword(Arc<str>),

    #[error("'{0}' parameter is positional only, but was passed as a keyword")]
    PositionalOnlyAsKeyword(Arc<str>),

    #[error("multiple values for keyword argument '{0}'")]
    DuplicateKeyword(Arc<str>),
}

/// Problems in a declared parameter list.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SignatureError {
    #[error("parameter name must not be empty (position {0})")]
    EmptyName(usize),

    #[error("duplicate parameter name: '{0}'")]
    DuplicateName(Arc<str>),

    #[error("wrong parameter order: {kind} parameter '{name}' follows {previous} parameter")]
    WrongOrder {
        name: Arc<str>,
        kind: ParamKind,
        previous: ParamKind,
    },

    #[error("more than one {kind} parameter: '{name}'")]
    DuplicateVariadic { name: Arc<str>, kind: ParamKind },

    #[error("{kind} parameter '{name}' cannot have a default value")]
    VariadicDefault { name: Arc<str>, kind: ParamKind },

    #[error("parameter without a default follows parameter with a default: '{0}'")]
    RequiredAfterDefault(Arc<str>),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_hierarchy() {
        assert!(ErrorKind::CallArgTypeCheckViolation.is_a(ErrorKind::CallArgCheckViolation));
        assert!(ErrorKind::CallArgTypeCheckViolation.is_a(ErrorKind::CallArgCheck));
        assert!(ErrorKind::CallArgTypeCheckViolation.is_a(ErrorKind::ArgCheck));
        assert!(ErrorKind::CallArgCheckExecution.is_a(ErrorKind::CallArgCheck));
        assert!(!ErrorKind::CallArgCheckExecution.is_a(ErrorKind::CallArgCheckViolation));
        assert!(!ErrorKind::CallArgBindingRejection.is_a(ErrorKind::CallArgCheck));
        assert!(!ErrorKind::ArgCheck.is_a(ErrorKind::CallArgCheck));
        assert_eq!(ErrorKind::ArgCheck.parent(), None);
    }

    #[test]
    fn test_binding_rejection_display() {
        let err = ArgCheckError::from(BindError::MissingArgument("param_2".into()));
        assert_eq!(
            err.to_string(),
            "unable to bind function call argument: missing a required argument: 'param_2'"
        );
        assert_eq!(
            err.repr(),
            "CallArgBindingRejection(exception_args=(\"missing a required argument: 'param_2'\",))"
        );
        assert!(err.param().is_none());
    }

    #[test]
    fn test_type_violation_display() {
        let err = ArgCheckError::CallArgTypeCheckViolation {
            param: ParamRef::new(0, "param_1"),
            arg: CallArg::new(crate::ArgSource::Positional(0), Value::from("hello")),
            check: Check::TypeEquals(ValueType::Int),
            type_declared: DeclaredType::Type(ValueType::Int),
            type_received: ValueType::Str,
        };
        assert_eq!(
            err.to_string(),
            "violation of type check `TypeEquals(type_declared=int)` for param [0]='param_1' \
             (declared=int; received=str): [0]=\"hello\""
        );
        assert_eq!(
            err.repr(),
            "CallArgTypeCheckViolation(param=ParamRef(idx=0, name=\"param_1\"), \
             arg_that_caused_failure=CallArg(source=0, value=\"hello\"), \
             check_that_failed=TypeEquals(type_declared=int), type_declared=int, type_received=str)"
        );
        assert!(err.is(ErrorKind::CallArgCheckViolation));
        assert_eq!(err.param().map(|p| p.idx), Some(0));
    }

    #[test]
    fn test_signature_error_display() {
        let err = SignatureError::WrongOrder {
            name: "a".into(),
            kind: ParamKind::PositionalOrKeyword,
            previous: ParamKind::KeywordOnly,
        };
        assert_eq!(
            err.to_string(),
            "wrong parameter order: positional or keyword parameter 'a' follows keyword-only parameter"
        );
    }
}
