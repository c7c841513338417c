//! Descriptors of declared parameters and supplied arguments.
//!
//! These are the small, cloneable records that diagnostics carry: which
//! parameter a failure concerns and which argument (and under which
//! position or keyword) caused it.

use std::fmt;
use std::sync::Arc;

use crate::value::Value;

/// How a declared parameter accepts arguments.
///
/// Variants are ordered as they must appear in a parameter list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ParamKind {
    PositionalOnly,
    PositionalOrKeyword,
    /// Collects surplus positional arguments.
    VarPositional,
    KeywordOnly,
    /// Collects surplus keyword arguments.
    VarKeyword,
}

impl ParamKind {
    pub fn is_variadic(self) -> bool {
        matches!(self, ParamKind::VarPositional | ParamKind::VarKeyword)
    }

    /// Returns true if an argument can fill this parameter by position.
    pub fn accepts_positional(self) -> bool {
        matches!(
            self,
            ParamKind::PositionalOnly | ParamKind::PositionalOrKeyword
        )
    }

    pub fn description(self) -> &'static str {
        match self {
            ParamKind::PositionalOnly => "positional-only",
            ParamKind::PositionalOrKeyword => "positional or keyword",
            ParamKind::VarPositional => "variadic positional",
            ParamKind::KeywordOnly => "keyword-only",
            ParamKind::VarKeyword => "variadic keyword",
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.description())
    }
}

/// Identifies a declared parameter in diagnostics: its ordinal and name.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ParamRef {
    pub idx: usize,
    pub name: Arc<str>,
}

impl ParamRef {
    pub fn new(idx: usize, name: impl Into<Arc<str>>) -> Self {
        Self {
            idx,
            name: name.into(),
        }
    }

    /// Constructor-like form listing every attribute.
    pub fn repr(&self) -> String {
        format!("ParamRef(idx={}, name={:?})", self.idx, self.name)
    }
}

impl fmt::Display for ParamRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]='{}'", self.idx, self.name)
    }
}

/// Where a bound value came from in a call.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ArgSource {
    /// Supplied positionally at this index of the call.
    Positional(usize),
    /// Supplied under this keyword.
    Keyword(Arc<str>),
    /// Not supplied; the declared default was substituted.
    Default,
}

impl fmt::Display for ArgSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgSource::Positional(idx) => write!(f, "{}", idx),
            ArgSource::Keyword(kw) => write!(f, "'{}'", kw),
            ArgSource::Default => write!(f, "default"),
        }
    }
}

/// The argument that caused a failure: its source and value.
#[derive(Debug, Clone, PartialEq)]
pub struct CallArg {
    pub source: ArgSource,
    pub value: Value,
}

impl CallArg {
    pub fn new(source: ArgSource, value: Value) -> Self {
        Self { source, value }
    }

    /// Constructor-like form listing every attribute.
    pub fn repr(&self) -> String {
        format!("CallArg(source={}, value={})", self.source, self.value)
    }
}

impl fmt::Display for CallArg {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}]={}", self.source, self.value)
    }
}
