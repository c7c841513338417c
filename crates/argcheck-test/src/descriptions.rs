//! Common constraint descriptions.

use argcheck_core::{Check, CheckKind, ConstraintDescription, ConstraintItem, ValueType};

/// `Refined[int, Positive]`
pub fn positive_int() -> ConstraintDescription {
    ConstraintDescription::refined(ValueType::Int, [CheckKind::Positive.into()])
}

/// `Refined[list, [NonEmpty(), MonotonicIncreasing]]`, mixing an instance and a kind.
pub fn non_empty_increasing_list() -> ConstraintDescription {
    ConstraintDescription::refined(
        ValueType::List,
        [ConstraintItem::List(vec![
            Check::NonEmpty.into(),
            CheckKind::MonotonicIncreasing.into(),
        ])],
    )
}

/// `Sequence[int]`
pub fn sequence_of_int() -> ConstraintDescription {
    ConstraintDescription::sequence_of(ValueType::Int)
}

/// `Refined[Sequence[int], EachSatisfies(Positive())]`
pub fn sequence_of_positive_ints() -> ConstraintDescription {
    ConstraintDescription::refined(
        sequence_of_int(),
        [Check::each(Check::Positive).into()],
    )
}

/// `Sequence[Refined[int, Positive]]`; the element compiles to two checks.
pub fn sequence_of_refined() -> ConstraintDescription {
    ConstraintDescription::sequence_of(positive_int())
}

/// `Refined[Refined[int, Positive], NonEmpty]`
pub fn doubly_refined() -> ConstraintDescription {
    ConstraintDescription::refined(positive_int(), [CheckKind::NonEmpty.into()])
}
