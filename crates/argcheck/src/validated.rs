//! The registration wrapper.

use std::fmt;
use std::sync::Arc;

use argcheck_config::{ValidationConfig, ValidationMode};
use argcheck_core::{ErrorKind, Result};
use tracing::warn;

use crate::call::CallArgs;
use crate::executor::CompiledFunctionChecks;
use crate::signature::{ParamDecl, Signature};

/// A function whose calls are checked against its declared parameters.
///
/// Annotations are compiled once, in [`ValidatedFn::register`]. Every call
/// then binds and checks its arguments and, if they pass, forwards them
/// unchanged to the wrapped function.
///
/// # Examples
///
/// ```
/// use argcheck::prelude::*;
///
/// let double = ValidatedFn::register(
///     "double",
///     vec![ParamDecl::positional_or_keyword("n").annotated(ValueType::Int)],
///     |args: CallArgs| args.positional()[0].as_i64().map(|n| n * 2),
/// )
/// .unwrap();
///
/// assert_eq!(double.call(CallArgs::new().arg(21)).unwrap(), Some(42));
/// assert!(double.call(CallArgs::new().arg("21")).is_err());
/// ```
pub struct ValidatedFn<F> {
    checks: Arc<CompiledFunctionChecks>,
    config: Arc<ValidationConfig>,
    func: F,
}

impl<F> ValidatedFn<F> {
    /// Validates the signature, compiles every annotation and wraps `func`.
    ///
    /// # Errors
    ///
    /// Returns [`argcheck_core::ArgCheckError::InvalidSignature`] for a
    /// malformed parameter list, or
    /// [`argcheck_core::ArgCheckError::AnnotationCompilation`] for the first
    /// annotation that cannot be compiled.
    pub fn register(name: impl Into<Arc<str>>, params: Vec<ParamDecl>, func: F) -> Result<Self> {
        #[cfg(feature = "console")]
        argcheck_console::init();

        let signature = Signature::new(params)?;
        let checks = CompiledFunctionChecks::compile(name, signature)?;
        Ok(Self {
            checks: Arc::new(checks),
            config: Arc::new(ValidationConfig::default()),
            func,
        })
    }

    /// Replaces the configuration that decides this function's mode.
    pub fn with_config(mut self, config: impl Into<Arc<ValidationConfig>>) -> Self {
        self.config = config.into();
        self
    }

    pub fn name(&self) -> &str {
        self.checks.name()
    }

    pub fn signature(&self) -> &Signature {
        self.checks.signature()
    }

    pub fn checks(&self) -> &CompiledFunctionChecks {
        &self.checks
    }

    /// The mode in effect for this function.
    pub fn mode(&self) -> ValidationMode {
        self.config.mode_for(self.name())
    }

    /// Checks `args` and, if they pass, calls the wrapped function with them.
    ///
    /// # Errors
    ///
    /// In enforce mode, returns the first binding rejection, violation or
    /// checking-execution error. In warn mode, only binding rejections are
    /// returned; check failures are logged and the call proceeds. In off
    /// mode, never fails.
    pub fn call<R>(&self, args: CallArgs) -> Result<R>
    where
        F: Fn(CallArgs) -> R,
    {
        match self.mode() {
            ValidationMode::Off => {}
            ValidationMode::Enforce => self.checks.check_call(&args)?,
            ValidationMode::Warn => {
                if let Err(err) = self.checks.check_call(&args) {
                    if !err.is(ErrorKind::CallArgCheck) {
                        return Err(err);
                    }
                    warn!(
                        event = "violation",
                        function = %self.name(),
                        kind = %err.kind(),
                        error = %err,
                    );
                }
            }
        }
        Ok((self.func)(args))
    }
}

impl<F: Clone> Clone for ValidatedFn<F> {
    fn clone(&self) -> Self {
        Self {
            checks: Arc::clone(&self.checks),
            config: Arc::clone(&self.config),
            func: self.func.clone(),
        }
    }
}

impl<F> fmt::Debug for ValidatedFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedFn")
            .field("name", &self.name())
            .field("mode", &self.mode())
            .field("checks", &self.checks.check_count())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argcheck_core::{ArgCheckError, ConstraintDescription, Value, ValueType};
    use argcheck_test::descriptions;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn first(args: CallArgs) -> Value {
        args.positional().first().cloned().unwrap_or(Value::None)
    }

    fn int_fn() -> ValidatedFn<fn(CallArgs) -> Value> {
        ValidatedFn::register(
            "int_fn",
            vec![ParamDecl::positional_or_keyword("n").annotated(descriptions::positive_int())],
            first as fn(CallArgs) -> Value,
        )
        .unwrap()
    }

    #[test]
    fn test_forwards_arguments_unchanged() {
        let f = int_fn();
        assert_eq!(f.call(CallArgs::new().arg(7)).unwrap(), Value::from(7));
        assert_eq!(f.name(), "int_fn");
    }

    #[test]
    fn test_enforce_rejects() {
        let f = int_fn();
        let err = f.call(CallArgs::new().arg(-1)).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CallArgValueCheckViolation);
    }

    #[test]
    fn test_wrapped_not_called_on_failure() {
        let calls = AtomicUsize::new(0);
        let f = ValidatedFn::register(
            "counted",
            vec![ParamDecl::positional_or_keyword("n").annotated(ValueType::Int)],
            |_args: CallArgs| calls.fetch_add(1, Ordering::SeqCst),
        )
        .unwrap();
        assert!(f.call(CallArgs::new().arg("x")).is_err());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
        assert!(f.call(CallArgs::new().arg(1)).is_ok());
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_warn_forwards_violations() {
        let f = int_fn().with_config(ValidationConfig::new().with_mode(ValidationMode::Warn));
        assert_eq!(f.call(CallArgs::new().arg(-1)).unwrap(), Value::from(-1));
    }

    #[test]
    fn test_warn_still_rejects_binding() {
        let f = int_fn().with_config(ValidationConfig::new().with_mode(ValidationMode::Warn));
        let err = f.call(CallArgs::new()).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::CallArgBindingRejection);
    }

    #[test]
    fn test_off_skips_binding() {
        let f = int_fn().with_config(ValidationConfig::new().with_mode(ValidationMode::Off));
        assert_eq!(f.call(CallArgs::new()).unwrap(), Value::None);
    }

    #[test]
    fn test_function_override() {
        let config = ValidationConfig::new()
            .with_mode(ValidationMode::Off)
            .with_function_mode("int_fn", ValidationMode::Enforce);
        let f = int_fn().with_config(config);
        assert_eq!(f.mode(), ValidationMode::Enforce);
        assert!(f.call(CallArgs::new().arg(-1)).is_err());
    }

    #[test]
    fn test_compile_error_at_registration() {
        let result = ValidatedFn::register(
            "bad",
            vec![ParamDecl::positional_or_keyword("x")
                .annotated(ConstraintDescription::other("Union[int, str]"))],
            first as fn(CallArgs) -> Value,
        );
        assert!(matches!(
            result,
            Err(ArgCheckError::AnnotationCompilation { .. })
        ));
    }

    #[test]
    fn test_invalid_signature() {
        let result = ValidatedFn::register(
            "dup",
            vec![
                ParamDecl::positional_or_keyword("x"),
                ParamDecl::positional_or_keyword("x"),
            ],
            first as fn(CallArgs) -> Value,
        );
        assert_eq!(result.unwrap_err().kind(), ErrorKind::InvalidSignature);
    }
}
