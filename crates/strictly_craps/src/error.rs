//! Dice error types.

use derive_more::Display;

/// Error that can occur when rolling or loading dice.
#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DiceError {
    /// A roll was requested with zero dice.
    #[display("At least one die must be rolled")]
    NoDice,

    /// A face value outside 1-6 was supplied.
    #[display("Die face {} is outside 1-6", _0)]
    FaceOutOfRange(u8),

    /// No pair of dice adds up to the requested total.
    #[display("No two dice total {}", _0)]
    SumOutOfRange(u32),

    /// Scripted dice ran out of rolls.
    #[display("Loaded dice exhausted after {} rolls", _0)]
    Exhausted(usize),

    /// Scripted dice hold a roll with a different number of dice.
    #[display("Expected {} dice but the loaded roll has {}", expected, found)]
    CountMismatch {
        /// Dice requested.
        expected: usize,
        /// Dice in the loaded roll.
        found: usize,
    },
}

impl std::error::Error for DiceError {}
