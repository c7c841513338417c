//! Binds a call's arguments to declared parameters.
//!
//! Positional arguments fill positional parameters in order and spill into
//! a variadic-positional parameter. Keywords then fill the remaining named
//! parameters, surplus keywords go to a variadic-keyword parameter, and
//! declared defaults fill whatever is left.


use std::collections::HashSet;

use argcheck_core::{ArgSource, BindError, ParamKind, Value};

use crate::call::CallArgs;
use crate::signature::Signature;

/// One value bound to a declared parameter.
///
/// Variadic parameters produce one `BoundArgument` per collected value.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundArgument<'a> {
    pub param_idx: usize,
    pub source: ArgSource,
    pub value: &'a Value,
}

/// Every bound value of a call, in parameter declaration order.
#[derive(Debug, Clone, PartialEq)]
pub struct BoundArguments<'a> {
    args: Vec<BoundArgument<'a>>,
}

impl<'a> BoundArguments<'a> {
    pub fn iter(&self) -> impl Iterator<Item = &BoundArgument<'a>> {
        self.args.iter()
    }

    /// Values bound to one parameter; empty for an unfilled variadic.
    pub fn for_param(&self, param_idx: usize) -> impl Iterator<Item = &BoundArgument<'a>> {
        self.args.iter().filter(move |a| a.param_idx == param_idx)
    }

    pub fn len(&self) -> usize {
        self.args.len()
    }

    pub fn is_empty(&self) -> bool {
        self.args.is_empty()
    }
}

impl<'a> IntoIterator for BoundArguments<'a> {
    type Item = BoundArgument<'a>;
    type IntoIter = std::vec::IntoIter<BoundArgument<'a>>;

    fn into_iter(self) -> Self::IntoIter {
        self.args.into_iter()
    }
}

impl Signature {
    /// Binds `call` to this signature, applying defaults.
    ///
    /// # Errors
    ///
    /// Returns the [`BindError`] describing the first arity, keyword or
    /// duplication problem found.
    pub fn bind<'a>(&'a self, call: &'a CallArgs) -> Result<BoundArguments<'a>, BindError> {
        reject_duplicate_keywords(call)?;

        let params = self.params();
        let positional = call.positional();
        let mut slots: Vec<Vec<(ArgSource, &'a Value)>> = vec![Vec::new(); params.len()];
        let mut next_param = 0;

        // Positional phase
        let mut pos = 0;
        while pos < positional.len() {
            let Some(param) = params.get(next_param) else {
                return Err(BindError::TooManyPositional);
            };
            match param.kind {
                ParamKind::PositionalOnly | ParamKind::PositionalOrKeyword => {
                    if param.kind == ParamKind::PositionalOrKeyword
                        && call.keyword(&param.name).is_some()
                    {
                        return Err(BindError::MultipleValues(param.name.clone()));
                    }
                    slots[next_param].push((ArgSource::Positional(pos), &positional[pos]));
                    pos += 1;
                    next_param += 1;
                }
                ParamKind::VarPositional => {
                    for (i, value) in positional.iter().enumerate().skip(pos) {
                        slots[next_param].push((ArgSource::Positional(i), value));
                    }
                    pos = positional.len();
                    next_param += 1;
                }
                ParamKind::KeywordOnly | ParamKind::VarKeyword => {
                    return Err(BindError::TooManyPositional);
                }
            }
        }

        // Keyword phase
        let var_keyword = params.iter().position(|p| p.kind == ParamKind::VarKeyword);
        let mut consumed: HashSet<&str> = HashSet::new();

        for (idx, param) in params.iter().enumerate().skip(next_param) {
            match param.kind {
                ParamKind::VarPositional | ParamKind::VarKeyword => continue,
                ParamKind::PositionalOnly => {
                    if var_keyword.is_none() && call.keyword(&param.name).is_some() {
                        return Err(BindError::PositionalOnlyAsKeyword(param.name.clone()));
                    }
                }
                ParamKind::PositionalOrKeyword | ParamKind::KeywordOnly => {
                    if let Some(value) = call.keyword(&param.name) {
                        slots[idx].push((ArgSource::Keyword(param.name.clone()), value));
                        consumed.insert(param.name.as_ref());
                        continue;
                    }
                }
            }
            match &param.default {
                Some(default) => slots[idx].push((ArgSource::Default, default)),
                None if param.kind == ParamKind::KeywordOnly => {
                    return Err(BindError::MissingKeywordOnlyArgument(param.name.clone()));
                }
                None => return Err(BindError::MissingArgument(param.name.clone())),
            }
        }

        // Surplus keywords
        for (name, value) in call.keywords() {
            if consumed.contains(name.as_ref()) {
                continue;
            }
            match var_keyword {
                Some(idx) => slots[idx].push((ArgSource::Keyword(name.clone()), value)),
                None => return Err(BindError::UnexpectedKeyword(name.clone())),
            }
        }

        let args = slots
            .into_iter()
            .enumerate()
            .flat_map(|(param_idx, values)| {
                values.into_iter().map(move |(source, value)| BoundArgument {
                    param_idx,
                    source,
                    value,
                })
            })
            .collect();
        Ok(BoundArguments { args })
    }
}

fn reject_duplicate_keywords(call: &CallArgs) -> Result<(), BindError> {
    let mut seen: HashSet<&str> = HashSet::new();
    for (name, _) in call.keywords() {
        if !seen.insert(name.as_ref()) {
            return Err(BindError::DuplicateKeyword(name.clone()));
        }
    }
    Ok(())
}
