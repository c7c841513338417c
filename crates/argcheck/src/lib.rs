//! argcheck - declarative, compiled checks on function-call arguments
//!
//! Declare each parameter's constraint once; every call is bound and checked
//! before the wrapped function runs.
//!
//! # Example
//!
//! ```rust
//! use argcheck::prelude::*;
//!
//! let mean = ValidatedFn::register(
//!     "mean",
//!     vec![ParamDecl::positional_or_keyword("xs")
//!         .annotated(ConstraintDescription::sequence_of(ValueType::Int))],
//!     |args: CallArgs| args.positional().len(),
//! )
//! .unwrap();
//!
//! assert!(mean.call(CallArgs::new().arg(Value::list([1, 2, 3]))).is_ok());
//!
//! let err = mean
//!     .call(CallArgs::new().arg(Value::list([Value::from(1), Value::from("x")])))
//!     .unwrap_err();
//! assert!(err.is(ErrorKind::CallArgCheckViolation));
//! ```

pub mod bind;
pub mod call;
pub mod compile;
pub mod executor;
pub mod signature;
pub mod validated;

pub use bind::{BoundArgument, BoundArguments};
pub use call::CallArgs;
pub use compile::{compile_annotation, compile_signature};
pub use executor::CompiledFunctionChecks;
pub use signature::{ParamDecl, Signature};
pub use validated::ValidatedFn;

// Core types
pub use argcheck_core::{
    ArgCheckError, ArgSource, BindError, CallArg, Check, CheckKind, ConstraintDescription,
    ConstraintItem, DeclaredType, ErrorKind, Outcome, ParamKind, ParamRef, Result,
    SignatureError, Value, ValueType,
};

// Configuration
pub use argcheck_config::{ConfigError, FunctionOverride, ValidationConfig, ValidationMode};

pub mod prelude {
    pub use super::{CallArgs, ParamDecl, ValidatedFn};
    pub use super::{
        ArgCheckError, Check, CheckKind, ConstraintDescription, ConstraintItem, ErrorKind, Value,
        ValueType,
    };
    pub use super::{ValidationConfig, ValidationMode};
}
