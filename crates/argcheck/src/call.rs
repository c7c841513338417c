//! Arguments supplied to one call.

use std::sync::Arc;

use argcheck_core::Value;

/// Positional and keyword arguments, in the order the caller supplied them.
///
/// # Examples
///
/// ```
/// use argcheck::CallArgs;
///
/// let args = CallArgs::new().arg(1).arg("two").kwarg("flag", true);
/// assert_eq!(args.positional().len(), 2);
/// assert_eq!(args.keyword("flag"), Some(&true.into()));
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CallArgs {
    positional: Vec<Value>,
    keywords: Vec<(Arc<str>, Value)>,
}

impl CallArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a positional argument.
    pub fn arg(mut self, value: impl Into<Value>) -> Self {
        self.positional.push(value.into());
        self
    }

    /// Appends a keyword argument.
    pub fn kwarg(mut self, name: impl Into<Arc<str>>, value: impl Into<Value>) -> Self {
        self.keywords.push((name.into(), value.into()));
        self
    }

    pub fn positional(&self) -> &[Value] {
        &self.positional
    }

    pub fn keywords(&self) -> &[(Arc<str>, Value)] {
        &self.keywords
    }

    /// First value supplied under `name`.
    pub fn keyword(&self, name: &str) -> Option<&Value> {
        self.keywords
            .iter()
            .find(|(k, _)| k.as_ref() == name)
            .map(|(_, v)| v)
    }
}

impl<T: Into<Value>> FromIterator<T> for CallArgs {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            positional: iter.into_iter().map(Into::into).collect(),
            keywords: Vec::new(),
        }
    }
}
