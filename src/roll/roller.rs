use crate::common::{NonZeroUInt, UInt};
use rand::Rng;

/// Where die faces come from. Every `rand::Rng` is a roller; tests plug in
/// predictable ones.
pub trait Roller {
    /// One face of a die with `sides` faces, in `1..=sides`.
    fn face(&mut self, sides: NonZeroUInt) -> UInt;
}

impl<R: Rng> Roller for R {
    fn face(&mut self, sides: NonZeroUInt) -> UInt {
        self.gen_range(1..=sides.get())
    }
}

/// Counts upward from a starting face, wrapping around each die's sides.
#[cfg(test)]
pub(crate) struct StepRoller {
    next: UInt,
    step: UInt,
}

#[cfg(test)]
impl StepRoller {
    pub fn new(initial: NonZeroUInt, step: UInt) -> Self {
        Self {
            next: initial.get(),
            step,
        }
    }
}

#[cfg(test)]
impl Roller for StepRoller {
    fn face(&mut self, sides: NonZeroUInt) -> UInt {
        let face = (self.next - 1) % sides.get() + 1;
        self.next += self.step;
        face
    }
}
