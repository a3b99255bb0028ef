mod ctx;
mod roller;

pub use ctx::{DefaultRoller, RollContext};
pub use roller::Roller;

#[cfg(test)]
pub(crate) use roller::StepRoller;
