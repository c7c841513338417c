//! Declared-parameter fixtures for the canonical test functions.
//!
//! Every canonical function returns the value bound to its first declared
//! parameter, or `None` when it declares no parameters.
//!
//! # Example
//!
//! ```
//! use argcheck_test::functions::two_params_first_int;
//!
//! let f = two_params_first_int();
//! assert_eq!(f.name, "deco_2_params_annot_1_int");
//! assert_eq!(f.params.len(), 2);
//! assert!(f.params[0].annotation.is_some());
//! ```

use argcheck_core::{ConstraintDescription, ParamKind, Value, ValueType};

/// A declared parameter, independent of the facade's signature model.
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureParam {
    pub name: &'static str,
    pub kind: ParamKind,
    pub annotation: Option<ConstraintDescription>,
    pub default: Option<Value>,
}

impl FixtureParam {
    /// A positional-or-keyword parameter with no annotation or default.
    pub fn plain(name: &'static str) -> Self {
        Self {
            name,
            kind: ParamKind::PositionalOrKeyword,
            annotation: None,
            default: None,
        }
    }

    pub fn with_kind(mut self, kind: ParamKind) -> Self {
        self.kind = kind;
        self
    }

    pub fn annotated(mut self, annotation: impl Into<ConstraintDescription>) -> Self {
        self.annotation = Some(annotation.into());
        self
    }

    pub fn with_default(mut self, default: impl Into<Value>) -> Self {
        self.default = Some(default.into());
        self
    }
}

/// A named function declaration.
#[derive(Clone, Debug, PartialEq)]
pub struct FixtureFn {
    pub name: &'static str,
    pub params: Vec<FixtureParam>,
}

impl FixtureFn {
    pub fn new(name: &'static str, params: Vec<FixtureParam>) -> Self {
        Self { name, params }
    }
}

pub fn zero_params() -> FixtureFn {
    FixtureFn::new("deco_0_params_no_annots", vec![])
}

pub fn one_param() -> FixtureFn {
    FixtureFn::new("deco_1_params_no_annots", vec![FixtureParam::plain("param")])
}

pub fn two_params() -> FixtureFn {
    FixtureFn::new(
        "deco_2_params_no_annots",
        vec![FixtureParam::plain("param_1"), FixtureParam::plain("param_2")],
    )
}

/// `(param_1: int, param_2)`
pub fn two_params_first_int() -> FixtureFn {
    FixtureFn::new(
        "deco_2_params_annot_1_int",
        vec![
            FixtureParam::plain("param_1").annotated(ValueType::Int),
            FixtureParam::plain("param_2"),
        ],
    )
}

/// `(param_1, param_2: int)`
pub fn two_params_second_int() -> FixtureFn {
    FixtureFn::new(
        "deco_2_params_annot_2_int",
        vec![
            FixtureParam::plain("param_1"),
            FixtureParam::plain("param_2").annotated(ValueType::Int),
        ],
    )
}

/// `(param: int = 33)`
pub fn int_with_int_default() -> FixtureFn {
    FixtureFn::new(
        "deco_1_params_annot_int_dflt_int",
        vec![FixtureParam::plain("param")
            .annotated(ValueType::Int)
            .with_default(33)],
    )
}

/// `(param: int = "hello")`; the default violates its own annotation.
pub fn int_with_str_default() -> FixtureFn {
    FixtureFn::new(
        "deco_1_params_annot_int_dflt_str",
        vec![FixtureParam::plain("param")
            .annotated(ValueType::Int)
            .with_default("hello")],
    )
}

/// `(*args: int, **kwargs: str)`
pub fn variadic_int_str() -> FixtureFn {
    FixtureFn::new(
        "variadic_int_str",
        vec![
            FixtureParam::plain("args")
                .with_kind(ParamKind::VarPositional)
                .annotated(ValueType::Int),
            FixtureParam::plain("kwargs")
                .with_kind(ParamKind::VarKeyword)
                .annotated(ValueType::Str),
        ],
    )
}
