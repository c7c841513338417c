//! Per-function compiled checks and their execution against calls.
//!
//! A call runs through three steps:
//! 1. Bind the supplied arguments to declared parameters
//! 2. Expand variadic parameters into their individual values
//! 3. Run each parameter's checks against each of its values, in order
//!
//! The first failure ends the call. Argument values are never changed.

#[cfg(test)]
mod tests;

use std::sync::Arc;

use argcheck_core::{ArgCheckError, CallArg, Check, Outcome, ParamRef, Result};
use tracing::{debug, trace};

use crate::bind::BoundArgument;
use crate::call::CallArgs;
use crate::compile::compile_signature;
use crate::signature::Signature;

/// The compiled check table of one registered function.
///
/// Immutable after construction and safe to share between threads.
#[derive(Debug, Clone, PartialEq)]
pub struct CompiledFunctionChecks {
    name: Arc<str>,
    signature: Signature,
    params: Vec<ParamRef>,
    checks: Vec<Vec<Check>>,
}

impl CompiledFunctionChecks {
    /// Compiles every annotation of `signature`.
    ///
    /// # Errors
    ///
    /// Returns [`ArgCheckError::AnnotationCompilation`] for the first
    /// parameter whose description cannot be compiled.
    pub fn compile(name: impl Into<Arc<str>>, signature: Signature) -> Result<Self> {
        let name = name.into();
        let checks = compile_signature(&signature)?;
        let params = signature
            .params()
            .iter()
            .enumerate()
            .map(|(idx, decl)| ParamRef::new(idx, decl.name.clone()))
            .collect();

        debug!(
            event = "compile",
            function = %name,
            params = signature.len(),
            checks = checks.iter().map(Vec::len).sum::<usize>(),
        );

        Ok(Self {
            name,
            signature,
            params,
            checks,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// The checks compiled for one parameter; empty if it is unannotated.
    pub fn checks_for(&self, param_idx: usize) -> &[Check] {
        self.checks.get(param_idx).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Total number of compiled checks across all parameters.
    pub fn check_count(&self) -> usize {
        self.checks.iter().map(Vec::len).sum()
    }

    /// Binds `call` and runs every compiled check against its values.
    ///
    /// # Errors
    ///
    /// Returns [`ArgCheckError::CallArgBindingRejection`] if the call cannot
    /// be bound, a violation for the first failed check, or
    /// [`ArgCheckError::CallArgCheckExecution`] if a check cannot run on a value.
    pub fn check_call(&self, call: &CallArgs) -> Result<()> {
        let bound = self.signature.bind(call).map_err(|e| {
            debug!(event = "bind_rejected", function = %self.name, error = %e);
            ArgCheckError::from(e)
        })?;

        for arg in bound.iter() {
            for check in self.checks_for(arg.param_idx) {
                if let Err(err) = self.run_check(check, arg) {
                    debug!(
                        event = "violation",
                        function = %self.name,
                        kind = %err.kind(),
                        param = %self.params[arg.param_idx],
                        error = %err,
                    );
                    return Err(err);
                }
            }
        }
        Ok(())
    }

    fn run_check(&self, check: &Check, arg: &BoundArgument<'_>) -> Result<()> {
        let outcome = check.evaluate(arg.value);
        trace!(
            event = "check",
            function = %self.name,
            param = %self.params[arg.param_idx],
            source = %arg.source,
            check = %check,
            passed = matches!(outcome, Ok(Outcome::Pass)),
        );

        let param = || self.params[arg.param_idx].clone();
        let call_arg = || CallArg::new(arg.source.clone(), arg.value.clone());
        match outcome {
            Ok(Outcome::Pass) => Ok(()),
            Ok(Outcome::Fail) => Err(check.violation(param(), call_arg(), None)),
            Ok(Outcome::FailWithContext(element)) => {
                Err(check.violation(param(), call_arg(), Some(element)))
            }
            Err(failure) => Err(ArgCheckError::CallArgCheckExecution {
                param: param(),
                arg: call_arg(),
                during_check: check.clone(),
                operation: failure.operation,
                value: failure.value,
            }),
        }
    }
}
