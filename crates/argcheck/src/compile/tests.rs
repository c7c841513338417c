//! Tests for the annotation compiler.

use super::*;
use argcheck_core::{CheckKind, ErrorKind, Outcome, Value};
use argcheck_test::descriptions;

use crate::signature::ParamDecl;

fn param() -> ParamRef {
    ParamRef::new(0, "x")
}

fn compile(description: &ConstraintDescription) -> Result<Vec<Check>> {
    compile_annotation(&param(), description)
}

fn problem(err: ArgCheckError) -> String {
    match err {
        ArgCheckError::AnnotationCompilation { problem, .. } => problem,
        other => panic!("expected AnnotationCompilation, got {:?}", other),
    }
}

// ============================================================================
// Plain and refined
// ============================================================================

#[test]
fn test_plain_type() {
    let checks = compile(&ValueType::Int.into()).unwrap();
    assert_eq!(checks, vec![Check::TypeEquals(ValueType::Int)]);
}

#[test]
fn test_refined_type_then_values() {
    let checks = compile(&descriptions::positive_int()).unwrap();
    assert_eq!(
        checks,
        vec![Check::TypeEquals(ValueType::Int), Check::Positive]
    );
}

#[test]
fn test_refined_nested_list_flattened() {
    let checks = compile(&descriptions::non_empty_increasing_list()).unwrap();
    assert_eq!(
        checks,
        vec![
            Check::TypeEquals(ValueType::List),
            Check::NonEmpty,
            Check::MonotonicIncreasing,
        ]
    );
}

#[test]
fn test_multi_level_refinement() {
    let checks = compile(&descriptions::doubly_refined()).unwrap();
    assert_eq!(
        checks,
        vec![
            Check::TypeEquals(ValueType::Int),
            Check::Positive,
            Check::NonEmpty,
        ]
    );
}

#[test]
fn test_refined_accepts_each_satisfies() {
    let checks = compile(&descriptions::sequence_of_positive_ints()).unwrap();
    assert_eq!(checks.len(), 3);
    assert_eq!(checks[2], Check::each(Check::Positive));
}

// ============================================================================
// Sequences
// ============================================================================

#[test]
fn test_sequence_of_yields_two_checks() {
    let checks = compile(&descriptions::sequence_of_int()).unwrap();
    assert_eq!(
        checks,
        vec![
            Check::IsSequenceShaped(DeclaredType::sequence_of(ValueType::Int.into())),
            Check::each(Check::TypeEquals(ValueType::Int)),
        ]
    );
    assert_eq!(
        checks[0].to_string(),
        "IsSequenceShaped(type_declared=Sequence[int])"
    );

    let ints = Value::list([1, 2, 3]);
    assert!(checks.iter().all(|c| c.evaluate(&ints) == Ok(Outcome::Pass)));
    assert_eq!(checks[0].evaluate(&Value::from(5)), Ok(Outcome::Fail));
}

#[test]
fn test_nested_sequence() {
    let description =
        ConstraintDescription::sequence_of(ConstraintDescription::sequence_of(ValueType::Int));
    let err = compile(&description).unwrap_err();
    assert!(problem(err).contains("compiles to 2"));
}

#[test]
fn test_sequence_of_multi_check_element_rejected() {
    let err = compile(&descriptions::sequence_of_refined()).unwrap_err();
    assert_eq!(
        problem(err),
        "element type of a sequence must compile to exactly one check; \
         `Refined[int, Positive]` compiles to 2"
    );
}

// ============================================================================
// Rejections
// ============================================================================

#[test]
fn test_unrecognised_annotation() {
    let err = compile(&ConstraintDescription::other("Callable[[int], str]")).unwrap_err();
    assert!(err.is(ErrorKind::AnnotationCompilation));
    assert_eq!(
        err.to_string(),
        "unable to compile type annotation `Callable[[int], str]` into checks: \
         unrecognised type annotation `Callable[[int], str]`"
    );
    assert_eq!(err.param(), Some(&param()));
}

#[test]
fn test_nested_unrecognised_annotation_is_named() {
    let description = ConstraintDescription::sequence_of(ConstraintDescription::refined(
        ConstraintDescription::other("Foo"),
        [CheckKind::Positive.into()],
    ));
    let err = compile(&description).unwrap_err();
    assert_eq!(
        err.to_string(),
        "unable to compile type annotation `Sequence[Refined[Foo, Positive]]` into checks: \
         unrecognised type annotation `Foo`"
    );
}

#[test]
fn test_type_check_in_refinement_rejected() {
    let description = ConstraintDescription::refined(
        ValueType::Int,
        [Check::TypeEquals(ValueType::Str).into()],
    );
    assert_eq!(
        problem(compile(&description).unwrap_err()),
        "expected a value-check instance; received check `TypeEquals(type_declared=str)`"
    );
}

#[test]
fn test_kind_needing_argument_rejected() {
    let description =
        ConstraintDescription::refined(ValueType::List, [CheckKind::EachSatisfies.into()]);
    assert_eq!(
        problem(compile(&description).unwrap_err()),
        "expected a default-constructible value-check kind; received `EachSatisfies`"
    );
}

#[test]
fn test_empty_refinement_rejected() {
    let description = ConstraintDescription::refined(ValueType::Int, Vec::<ConstraintItem>::new());
    assert!(compile(&description).is_err());
}

#[test]
fn test_empty_nested_list_rejected() {
    let description =
        ConstraintDescription::refined(ValueType::Int, [ConstraintItem::List(vec![])]);
    assert!(compile(&description).is_err());
}

#[test]
fn test_error_names_full_annotation() {
    let description = ConstraintDescription::refined(
        ValueType::Int,
        [CheckKind::Positive.into(), CheckKind::TypeEquals.into()],
    );
    match compile(&description).unwrap_err() {
        ArgCheckError::AnnotationCompilation { annotation, .. } => {
            assert_eq!(annotation, "Refined[int, Positive, TypeEquals]");
        }
        other => panic!("unexpected error {:?}", other),
    }
}

// ============================================================================
// Signatures
// ============================================================================

#[test]
fn test_compile_signature() {
    let signature = Signature::new(vec![
        ParamDecl::positional_or_keyword("a").annotated(ValueType::Int),
        ParamDecl::positional_or_keyword("b"),
        ParamDecl::var_positional("rest").annotated(descriptions::positive_int()),
    ])
    .unwrap();
    let table = compile_signature(&signature).unwrap();
    assert_eq!(table.len(), 3);
    assert_eq!(table[0].len(), 1);
    assert!(table[1].is_empty());
    assert_eq!(table[2].len(), 2);
}

#[test]
fn test_compile_signature_reports_param() {
    let signature = Signature::new(vec![
        ParamDecl::positional_or_keyword("ok").annotated(ValueType::Int),
        ParamDecl::positional_or_keyword("bad").annotated(ConstraintDescription::other("?")),
    ])
    .unwrap();
    let err = compile_signature(&signature).unwrap_err();
    assert_eq!(err.param(), Some(&ParamRef::new(1, "bad")));
}
