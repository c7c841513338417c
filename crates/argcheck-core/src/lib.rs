//! argcheck core - the building blocks of call-argument validation
//!
//! This crate provides the pieces shared by the compiler and the executor:
//! - A dynamic value model for call arguments and the runtime types they carry
//! - The check catalog: leaf predicates plus the `EachSatisfies` combinator
//! - Constraint descriptions attached to declared parameters
//! - The error taxonomy raised by registration and by every validated call

pub mod check;
pub mod description;
pub mod error;
pub mod param;
pub mod value;

pub use check::{Check, CheckArg, CheckCategory, CheckKind, ElementFailure, ExecutionFailure, Outcome};
pub use description::{ConstraintDescription, ConstraintItem};
pub use error::{ArgCheckError, BindError, CallingLocation, ErrorKind, Result, SignatureError};
pub use param::{ArgSource, CallArg, ParamKind, ParamRef};
pub use value::{DeclaredType, Elements, SequenceLike, Value, ValueType};
