use super::roller::Roller;
use crate::common::*;
use crate::error::{Error, Result};

pub type DefaultRoller = rand::prelude::ThreadRng;

/// Rolling state for a single evaluation: the random source and an optional
/// cap on the number of dice drawn.
pub struct RollContext<R = DefaultRoller> {
    max_rolls: Option<usize>,
    rolls: usize,
    roller: R,
}

impl<R: Roller> RollContext<R> {
    pub const DEFAULT_MAX_ROLLS: usize = 1000;

    pub fn new(max_rolls: Option<usize>, roller: R) -> Self {
        Self {
            max_rolls,
            rolls: 0,
            roller,
        }
    }

    pub fn new_bounded(max_rolls: usize, roller: R) -> Self {
        Self::new(Some(max_rolls), roller)
    }

    pub fn new_unbounded(roller: R) -> Self {
        Self::new(None, roller)
    }

    pub fn rolls(&self) -> usize {
        self.rolls
    }

    pub fn reset(&mut self) {
        self.rolls = 0;
    }

    fn count_rolls(&mut self, n: usize) -> Result<()> {
        self.rolls = self.rolls.saturating_add(n);
        if self.max_rolls.map_or(false, |max| self.rolls > max) {
            Err(Error::TooManyRolls)
        } else {
            Ok(())
        }
    }

    pub fn roll(
        &mut self,
        num: NonZeroUInt,
        sides: NonZeroUInt,
    ) -> Result<impl Iterator<Item = UInt> + '_> {
        let num = num.get() as usize;
        self.count_rolls(num)?;
        let roller = &mut self.roller;
        Ok((0..num).map(move |_| roller.face(sides)))
    }
}

impl Default for RollContext {
    fn default() -> Self {
        Self::new_bounded(Self::DEFAULT_MAX_ROLLS, rand::thread_rng())
    }
}
