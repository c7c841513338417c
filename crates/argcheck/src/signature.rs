//! Declared parameters and signatures.

use std::collections::HashSet;
use std::sync::Arc;

use argcheck_core::{ConstraintDescription, ParamKind, SignatureError, Value};

/// A declared function parameter.
///
/// Immutable once its signature is built.
#[derive(Debug, Clone, PartialEq)]
pub struct ParamDecl {
    pub name: Arc<str>,
    pub kind: ParamKind,
    pub default: Option<Value>,
    pub annotation: Option<ConstraintDescription>,
}

impl ParamDecl {
    pub fn new(name: impl Into<Arc<str>>, kind: ParamKind) -> Self {
        Self {
            name: name.into(),
            kind,
            default: None,
            annotation: None,
        }
    }

    pub fn positional_only(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, ParamKind::PositionalOnly)
    }

    pub fn positional_or_keyword(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, ParamKind::PositionalOrKeyword)
    }

    /// Collects surplus positional arguments, like `*args`.
    pub fn var_positional(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, ParamKind::VarPositional)
    }

    pub fn keyword_only(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, ParamKind::KeywordOnly)
    }

    /// Collects surplus keyword arguments, like `**kwargs`.
    pub fn var_keyword(name: impl Into<Arc<str>>) -> Self {
        Self::new(name, ParamKind::VarKeyword)
    }

    /// Attaches a constraint description.
    pub fn annotated(mut self, annotation: impl Into<ConstraintDescription>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    /// Declares a default used when the argument is omitted.
    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }

    pub fn has_default(&self) -> bool {
        self.default.is_some()
    }
}

/// An ordered, validated list of declared parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Signature {
    params: Vec<ParamDecl>,
}

impl Signature {
    /// Builds a signature, rejecting parameter lists no function could declare.
    ///
    /// # Errors
    ///
    /// Returns error on empty or duplicate names, kinds out of order, a
    /// repeated variadic kind, a default on a variadic parameter, or a
    /// required positional parameter after a defaulted one.
    pub fn new(params: Vec<ParamDecl>) -> Result<Self, SignatureError> {
        let mut names = HashSet::new();
        let mut previous: Option<ParamKind> = None;
        let mut seen_default = false;

        for (idx, param) in params.iter().enumerate() {
            if param.name.is_empty() {
                return Err(SignatureError::EmptyName(idx));
            }
            if !names.insert(param.name.clone()) {
                return Err(SignatureError::DuplicateName(param.name.clone()));
            }
            if let Some(prev) = previous {
                if param.kind < prev {
                    return Err(SignatureError::WrongOrder {
                        name: param.name.clone(),
                        kind: param.kind,
                        previous: prev,
                    });
                }
                if param.kind == prev && param.kind.is_variadic() {
                    return Err(SignatureError::DuplicateVariadic {
                        name: param.name.clone(),
                        kind: param.kind,
                    });
                }
            }
            if param.kind.is_variadic() && param.has_default() {
                return Err(SignatureError::VariadicDefault {
                    name: param.name.clone(),
                    kind: param.kind,
                });
            }
            if param.kind.accepts_positional() {
                if param.has_default() {
                    seen_default = true;
                } else if seen_default {
                    return Err(SignatureError::RequiredAfterDefault(param.name.clone()));
                }
            }
            previous = Some(param.kind);
        }

        Ok(Self { params })
    }

    pub fn params(&self) -> &[ParamDecl] {
        &self.params
    }

    pub fn position(&self, name: &str) -> Option<usize> {
        self.params.iter().position(|p| p.name.as_ref() == name)
    }

    pub fn len(&self) -> usize {
        self.params.len()
    }

    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }
}
