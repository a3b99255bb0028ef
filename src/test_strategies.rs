use crate::common::{BinaryOperator, NonZeroUInt};
use crate::dice::DicePool;
use proptest::prelude::*;

pub(crate) fn dice_pool_strategy() -> impl Strategy<Value = DicePool> {
    (1u32..=100, 1u32..=1000).prop_map(|(count, sides)| {
        DicePool::new(
            NonZeroUInt::new(count).unwrap(),
            NonZeroUInt::new(sides).unwrap(),
        )
    })
}

/// Dice notation along with the count and sides it denotes. The count is
/// sometimes left out, meaning one die.
pub(crate) fn dice_notation_strategy() -> impl Strategy<Value = (String, u32, u32)> {
    (prop::option::of(1u32..=100), 1u32..=1000).prop_map(|(count, sides)| match count {
        Some(count) => (format!("{}d{}", count, sides), count, sides),
        None => (format!("d{}", sides), 1, sides),
    })
}

pub(crate) fn operator_strategy() -> impl Strategy<Value = BinaryOperator> {
    prop_oneof![
        Just(BinaryOperator::Add),
        Just(BinaryOperator::Sub),
        Just(BinaryOperator::Mul),
        Just(BinaryOperator::Div),
    ]
}

pub(crate) fn dice_expression_strategy() -> impl Strategy<Value = String> {
    let leaf = prop_oneof![
        (1u16..=1000).prop_map(|n| n.to_string()),
        dice_notation_strategy().prop_map(|(s, _, _)| s),
    ]
    .boxed();
    (leaf.clone(), prop::collection::vec((operator_strategy(), leaf), 0..6)).prop_map(
        |(first, rest)| {
            rest.into_iter().fold(first, |acc, (op, leaf)| format!("{} {} {}", acc, op, leaf))
        },
    )
}

/// A starting count for a `d1` term and a chain of operations with non-zero
/// right-hand sides.
pub(crate) fn left_to_right_strategy() -> impl Strategy<Value = (u32, Vec<(BinaryOperator, u32)>)> {
    (
        1u32..=100,
        prop::collection::vec((operator_strategy(), 1u32..=100), 1..6),
    )
}
