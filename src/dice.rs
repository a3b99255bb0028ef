use crate::common::*;
use crate::error::{Error, Result};
use crate::roll::{RollContext, Roller};
use std::fmt;
use std::num::ParseIntError;
use std::str::FromStr;

/// A pool of dice, each with the same number of sides.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub struct DicePool {
    pub count: NonZeroUInt,
    pub sides: NonZeroUInt,
}

impl DicePool {
    pub const fn new(count: NonZeroUInt, sides: NonZeroUInt) -> Self {
        Self { count, sides }
    }

    /// Builds a pool from the two halves of a dice term. An empty or absent
    /// count means a single die.
    pub fn from_parts(count: Option<&str>, sides: Option<&str>) -> Result<Self, ParseDiceError> {
        let count = match count {
            None | Some("") => NonZeroUInt::MIN,
            Some(s) => s.parse().map_err(ParseDiceError::InvalidCount)?,
        };
        let sides = match sides {
            None | Some("") => return Err(ParseDiceError::MissingSides),
            Some(s) => s.parse().map_err(ParseDiceError::InvalidSides)?,
        };
        Ok(Self::new(count, sides))
    }

    /// Sums `count` independent uniform draws from `1..=sides`.
    pub fn roll<R: Roller>(&self, ctx: &mut RollContext<R>) -> Result<Int> {
        ctx.roll(self.count, self.sides)?
            .try_fold(0 as Int, |total, x| total.checked_add(Int::from(x)))
            .ok_or(Error::Overflow)
    }

    pub fn min(&self) -> Int {
        Int::from(self.count.get())
    }

    pub fn max(&self) -> Result<Int> {
        Int::from(self.count.get())
            .checked_mul(Int::from(self.sides.get()))
            .ok_or(Error::Overflow)
    }

    /// `count * (sides + 1) / 2`, rounded down.
    pub fn average(&self) -> Result<Int> {
        Int::from(self.count.get())
            .checked_mul(Int::from(self.sides.get()) + 1)
            .map(|x| x / 2)
            .ok_or(Error::Overflow)
    }

    pub fn reduce<R: Roller>(&self, reduction: Reduction, ctx: &mut RollContext<R>) -> Result<Int> {
        match reduction {
            Reduction::Roll => self.roll(ctx),
            Reduction::Min => Ok(self.min()),
            Reduction::Max => self.max(),
            Reduction::Average => self.average(),
        }
    }
}

impl fmt::Display for DicePool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}d{}", self.count, self.sides)
    }
}

impl FromStr for DicePool {
    type Err = ParseDiceError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (count, sides) = s.split_once('d').ok_or(ParseDiceError::NoDelimiter)?;
        Self::from_parts(Some(count), Some(sides))
    }
}

#[derive(thiserror::Error, Debug, Clone, Eq, PartialEq)]
pub enum ParseDiceError {
    #[error("cannot parse string as dice without 'd' delimiter")]
    NoDelimiter,
    #[error("dice must have a number of sides")]
    MissingSides,
    #[error("invalid number of dice: {0}")]
    InvalidCount(ParseIntError),
    #[error("invalid number of sides: {0}")]
    InvalidSides(ParseIntError),
}

/// The function used to collapse a [DicePool] into a single number.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum Reduction {
    Roll,
    Min,
    Max,
    Average,
}

impl Reduction {
    pub const ALL: &'static [Self] = &[Self::Roll, Self::Min, Self::Max, Self::Average];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Roll => "roll",
            Self::Min => "min",
            Self::Max => "max",
            Self::Average => "average",
        }
    }
}

impl fmt::Display for Reduction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Reduction {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|r| r.as_str() == s)
            .ok_or_else(|| Error::unknown_reduction(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::roll::StepRoller;
    use crate::test_strategies::dice_pool_strategy;
    use proptest::prelude::*;
    use rand::{rngs::StdRng, SeedableRng};

    fn pool(count: u32, sides: u32) -> DicePool {
        DicePool::new(
            NonZeroUInt::new(count).unwrap(),
            NonZeroUInt::new(sides).unwrap(),
        )
    }

    fn int_err(s: &str) -> ParseIntError {
        s.parse::<NonZeroUInt>().unwrap_err()
    }

    #[test]
    fn test_dice_from_str() {
        assert_eq!("1d20".parse::<DicePool>().unwrap(), pool(1, 20));
        assert_eq!("d20".parse::<DicePool>().unwrap(), pool(1, 20));
        assert_eq!("14d4".parse::<DicePool>().unwrap(), pool(14, 4));
        assert_eq!("1".parse::<DicePool>(), Err(ParseDiceError::NoDelimiter));
        assert_eq!("2d".parse::<DicePool>(), Err(ParseDiceError::MissingSides));
        assert_eq!("hd2".parse::<DicePool>(), Err(ParseDiceError::InvalidCount(int_err("h"))));
        assert_eq!("2dx".parse::<DicePool>(), Err(ParseDiceError::InvalidSides(int_err("x"))));
    }

    #[test]
    fn test_zero_dice() {
        assert_eq!("0d6".parse::<DicePool>(), Err(ParseDiceError::InvalidCount(int_err("0"))));
        assert_eq!("3d0".parse::<DicePool>(), Err(ParseDiceError::InvalidSides(int_err("0"))));
    }

    #[test]
    fn test_from_parts() {
        assert_eq!(DicePool::from_parts(None, Some("6")), Ok(pool(1, 6)));
        assert_eq!(DicePool::from_parts(Some("3"), Some("8")), Ok(pool(3, 8)));
        assert_eq!(DicePool::from_parts(Some("3"), None), Err(ParseDiceError::MissingSides));
    }

    #[test]
    fn test_display() {
        assert_eq!(pool(1, 20).to_string(), "1d20");
        assert_eq!("d6".parse::<DicePool>().unwrap().to_string(), "1d6");
    }

    #[test]
    fn test_min_max_average() {
        assert_eq!(pool(2, 6).min(), 2);
        assert_eq!(pool(2, 6).max(), Ok(12));
        assert_eq!(pool(2, 6).average(), Ok(7));
        assert_eq!(pool(1, 20).average(), Ok(10));
        assert_eq!(pool(3, 6).average(), Ok(10));
    }

    #[test]
    fn test_max_overflow() {
        let huge = pool(u32::MAX, u32::MAX);
        assert_eq!(huge.max(), Err(Error::Overflow));
        assert_eq!(huge.average(), Err(Error::Overflow));
    }

    #[test]
    fn test_roll() {
        let roller = StepRoller::new(NonZeroUInt::new(5).unwrap(), 1);
        let mut ctx = RollContext::new_bounded(1000, roller);
        assert_eq!(pool(3, 6).roll(&mut ctx), Ok(5 + 6 + 1));
        assert_eq!(pool(1, 20).roll(&mut ctx), Ok(8));
    }

    #[test]
    fn test_reduction_from_str() {
        assert_eq!("roll".parse::<Reduction>(), Ok(Reduction::Roll));
        assert_eq!("min".parse::<Reduction>(), Ok(Reduction::Min));
        assert_eq!("max".parse::<Reduction>(), Ok(Reduction::Max));
        assert_eq!("average".parse::<Reduction>(), Ok(Reduction::Average));
        assert_eq!(
            "explode".parse::<Reduction>(),
            Err(Error::UnknownReduction("explode".to_string()))
        );
        assert!("Min".parse::<Reduction>().is_err());
    }

    proptest! {
        #[test]
        fn prop_roll_within_bounds(pool in dice_pool_strategy(), seed in any::<u64>()) {
            let mut ctx = RollContext::new_unbounded(StdRng::seed_from_u64(seed));
            let total = pool.roll(&mut ctx).unwrap();
            prop_assert!(total >= pool.min());
            prop_assert!(total <= pool.max().unwrap());
        }

        #[test]
        fn prop_average_formula(count in 1u32..=1000, sides in 1u32..=1000) {
            let expected = i64::from(count) * (i64::from(sides) + 1) / 2;
            prop_assert_eq!(pool(count, sides).average(), Ok(expected));
        }
    }
}
