//! Annotation compiler.
//!
//! Turns each parameter's [`ConstraintDescription`] into a flat list of
//! checks, once, when a function is registered:
//!
//! - `Plain(T)` compiles to `[TypeEquals(T)]`
//! - `Refined(base, extras)` compiles `base`, then appends every value check
//!   in `extras` in order, flattening nested lists
//! - `SequenceOf(elem)` compiles to `[IsSequenceShaped, EachSatisfies(c)]`
//!   where `elem` must compile to exactly one check `c`
//! - anything else is rejected
//!
//! The result never nests checks except through `EachSatisfies`.

#[cfg(test)]
mod tests;

use argcheck_core::{
    ArgCheckError, Check, ConstraintDescription, ConstraintItem, DeclaredType, ParamRef, Result,
    ValueType,
};
use tracing::trace;

use crate::signature::Signature;

/// Compiles one parameter's description into a flat list of checks.
///
/// # Errors
///
/// Returns [`ArgCheckError::AnnotationCompilation`] naming `param` and the
/// full description when any part of it cannot be compiled.
pub fn compile_annotation(
    param: &ParamRef,
    description: &ConstraintDescription,
) -> Result<Vec<Check>> {
    let mut checks = Vec::new();
    compile_into(description, &mut checks).map_err(|problem| {
        ArgCheckError::AnnotationCompilation {
            param: param.clone(),
            annotation: description.to_string(),
            problem,
        }
    })?;
    Ok(checks)
}

/// Compiles every parameter of `signature`, in declaration order.
///
/// Unannotated parameters get an empty list.
pub fn compile_signature(signature: &Signature) -> Result<Vec<Vec<Check>>> {
    signature
        .params()
        .iter()
        .enumerate()
        .map(|(idx, decl)| {
            let checks = match &decl.annotation {
                Some(description) => {
                    compile_annotation(&ParamRef::new(idx, decl.name.clone()), description)?
                }
                None => Vec::new(),
            };
            trace!(
                event = "compile_param",
                param = %decl.name,
                kind = %decl.kind,
                checks = checks.len(),
            );
            Ok(checks)
        })
        .collect()
}

fn compile_into(
    description: &ConstraintDescription,
    out: &mut Vec<Check>,
) -> std::result::Result<(), String> {
    match description {
        ConstraintDescription::Plain(t) => out.push(Check::type_equals(*t)),
        ConstraintDescription::Refined { base, extras } => {
            if extras.is_empty() {
                return Err("refinement must list at least one value check".to_string());
            }
            compile_into(base, out)?;
            for item in extras {
                compile_item(item, out)?;
            }
        }
        ConstraintDescription::SequenceOf(element) => {
            let mut inner = Vec::new();
            compile_into(element, &mut inner)?;
            let inner = match <[Check; 1]>::try_from(inner) {
                Ok([check]) => check,
                Err(inner) => {
                    return Err(format!(
                        "element type of a sequence must compile to exactly one check; `{}` compiles to {}",
                        element,
                        inner.len()
                    ))
                }
            };
            out.push(Check::is_sequence_shaped(DeclaredType::sequence_of(
                declared_type(element),
            )));
            out.push(Check::each(inner));
        }
        ConstraintDescription::Other(text) => {
            return Err(format!("unrecognised type annotation `{}`", text));
        }
    }
    Ok(())
}

fn compile_item(item: &ConstraintItem, out: &mut Vec<Check>) -> std::result::Result<(), String> {
    match item {
        ConstraintItem::Check(check) => {
            if !check.is_value_check() {
                return Err(format!(
                    "expected a value-check instance; received check `{}`",
                    check
                ));
            }
            out.push(check.clone());
        }
        ConstraintItem::Kind(kind) => match kind.instantiate() {
            Some(check) => out.push(check),
            None => {
                return Err(format!(
                    "expected a default-constructible value-check kind; received `{}`",
                    kind
                ))
            }
        },
        ConstraintItem::List(items) => {
            if items.is_empty() {
                return Err("nested list of value checks must not be empty".to_string());
            }
            for item in items {
                compile_item(item, out)?;
            }
        }
    }
    Ok(())
}

/// The declared type a description's type checks enforce.
fn declared_type(description: &ConstraintDescription) -> DeclaredType {
    match description {
        ConstraintDescription::Plain(t) => DeclaredType::Type(*t),
        ConstraintDescription::Refined { base, .. } => declared_type(base),
        ConstraintDescription::SequenceOf(element) => {
            DeclaredType::sequence_of(declared_type(element))
        }
        ConstraintDescription::Other(_) => DeclaredType::Type(ValueType::Object),
    }
}
