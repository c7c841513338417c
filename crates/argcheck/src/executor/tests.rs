//! Tests for check execution.

use super::*;
use argcheck_core::{ArgSource, ConstraintDescription, ErrorKind, Value, ValueType};
use argcheck_test::{descriptions, values};

use crate::signature::ParamDecl;

fn compiled(params: Vec<ParamDecl>) -> CompiledFunctionChecks {
    CompiledFunctionChecks::compile("f", Signature::new(params).unwrap()).unwrap()
}

// ============================================================================
// Admission
// ============================================================================

#[test]
fn test_unannotated_admits_anything() {
    let table = compiled(vec![
        ParamDecl::positional_or_keyword("a"),
        ParamDecl::var_positional("rest"),
    ]);
    assert_eq!(table.check_count(), 0);
    let call: CallArgs = values::one_of_each().into_iter().collect();
    assert!(table.check_call(&call).is_ok());
}

#[test]
fn test_annotated_passes() {
    let table = compiled(vec![
        ParamDecl::positional_or_keyword("n").annotated(descriptions::positive_int()),
        ParamDecl::positional_or_keyword("xs").annotated(descriptions::sequence_of_int()),
    ]);
    assert_eq!(table.check_count(), 4);
    let call = CallArgs::new().arg(3).kwarg("xs", Value::list([1, 2]));
    assert!(table.check_call(&call).is_ok());
}

#[test]
fn test_idempotent() {
    let table = compiled(vec![
        ParamDecl::positional_or_keyword("n").annotated(descriptions::positive_int())
    ]);
    let good = CallArgs::new().arg(5);
    let bad = CallArgs::new().arg(-5);
    for _ in 0..3 {
        assert!(table.check_call(&good).is_ok());
        assert_eq!(
            table.check_call(&bad).unwrap_err().kind(),
            ErrorKind::CallArgValueCheckViolation
        );
    }
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn test_binding_before_checks() {
    let table = compiled(vec![
        ParamDecl::positional_or_keyword("a").annotated(ValueType::Int),
        ParamDecl::positional_or_keyword("b").annotated(ValueType::Int),
    ]);
    let err = table.check_call(&CallArgs::new().arg("not an int")).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CallArgBindingRejection);
}

#[test]
fn test_type_violation_reports_source() {
    let table = compiled(vec![
        ParamDecl::positional_or_keyword("a"),
        ParamDecl::keyword_only("b").annotated(ValueType::Int),
    ]);
    let err = table
        .check_call(&CallArgs::new().arg(1).kwarg("b", "x"))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CallArgTypeCheckViolation);
    assert_eq!(err.param(), Some(&ParamRef::new(1, "b")));
    assert_eq!(
        err.arg(),
        Some(&CallArg::new(ArgSource::Keyword("b".into()), Value::from("x")))
    );
}

#[test]
fn test_short_circuits_per_value() {
    // Positive would fail to compare "x" with 0 if it ran.
    let table = compiled(vec![
        ParamDecl::positional_or_keyword("n").annotated(descriptions::positive_int())
    ]);
    let err = table.check_call(&CallArgs::new().arg("x")).unwrap_err();
    assert_eq!(err.check(), Some(&Check::TypeEquals(ValueType::Int)));
}

#[test]
fn test_variadic_values_checked_individually() {
    let table = compiled(vec![
        ParamDecl::var_positional("args").annotated(ValueType::Int)
    ]);
    assert!(table.check_call(&CallArgs::new().arg(1).arg(2)).is_ok());

    let err = table
        .check_call(&CallArgs::new().arg(1).arg(2).arg("three"))
        .unwrap_err();
    assert_eq!(err.arg().map(|a| &a.source), Some(&ArgSource::Positional(2)));
}

#[test]
fn test_variadic_keywords_checked_individually() {
    let table = compiled(vec![
        ParamDecl::var_keyword("kwargs").annotated(ValueType::Str)
    ]);
    let err = table
        .check_call(&CallArgs::new().kwarg("a", "ok").kwarg("b", 2))
        .unwrap_err();
    assert_eq!(
        err.arg().map(|a| &a.source),
        Some(&ArgSource::Keyword("b".into()))
    );
}

#[test]
fn test_default_is_checked() {
    let table = compiled(vec![ParamDecl::positional_or_keyword("param")
        .annotated(ValueType::Int)
        .with_default("hello")]);
    assert!(table.check_call(&CallArgs::new().arg(1)).is_ok());

    let err = table.check_call(&CallArgs::new()).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CallArgTypeCheckViolation);
    assert_eq!(
        err.to_string(),
        "violation of type check `TypeEquals(type_declared=int)` for param [0]='param' \
         (declared=int; received=str): [default]=\"hello\""
    );
}

#[test]
fn test_each_violation_context() {
    let table = compiled(vec![
        ParamDecl::positional_or_keyword("xs").annotated(descriptions::sequence_of_int())
    ]);
    let err = table
        .check_call(&CallArgs::new().arg(values::ints_then_str()))
        .unwrap_err();
    match err {
        ArgCheckError::CallArgEachCheckViolation { index, element, .. } => {
            assert_eq!(index, 2);
            assert_eq!(element, Value::from("x"));
        }
        other => panic!("unexpected error {:?}", other),
    }
}

#[test]
fn test_shape_fails_before_elements() {
    let table = compiled(vec![
        ParamDecl::positional_or_keyword("xs").annotated(descriptions::sequence_of_int())
    ]);
    let err = table.check_call(&CallArgs::new().arg(5)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CallArgTypeCheckViolation);
    assert_eq!(
        err.to_string(),
        "violation of type check `IsSequenceShaped(type_declared=Sequence[int])` for param \
         [0]='xs' (declared=Sequence[int]; received=int): [0]=5"
    );
}

#[test]
fn test_execution_failure() {
    let table = compiled(vec![ParamDecl::positional_or_keyword("xs").annotated(
        object_refined(vec![Check::NonEmpty]),
    )]);
    let err = table.check_call(&CallArgs::new().arg(5)).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CallArgCheckExecution);
    assert!(err.is(ErrorKind::CallArgCheck));
    assert!(!err.is(ErrorKind::CallArgCheckViolation));
    assert_eq!(
        err.to_string(),
        "operation `len(x)` failed for param [0]='xs' during check `NonEmpty()` for this value: 5"
    );
}

#[test]
fn test_monotonic_violation() {
    let table = compiled(vec![ParamDecl::positional_or_keyword("xs")
        .annotated(descriptions::non_empty_increasing_list())]);
    assert!(table
        .check_call(&CallArgs::new().arg(values::increasing()))
        .is_ok());

    let err = table
        .check_call(&CallArgs::new().arg(values::decreasing()))
        .unwrap_err();
    assert_eq!(err.check(), Some(&Check::MonotonicIncreasing));

    let err = table
        .check_call(&CallArgs::new().arg(values::empty_list()))
        .unwrap_err();
    assert_eq!(err.check(), Some(&Check::NonEmpty));

    let err = table
        .check_call(&CallArgs::new().arg(values::unorderable()))
        .unwrap_err();
    assert_eq!(err.kind(), ErrorKind::CallArgCheckExecution);
}

fn object_refined(checks: Vec<Check>) -> ConstraintDescription {
    ConstraintDescription::refined(ValueType::Object, checks.into_iter().map(Into::into))
}
