//! Strictly Craps - pure craps game logic.
//!
//! A round of craps is a small state machine:
//!
//! - **Come-out**: 7 or 11 wins, 2, 3 or 12 loses, anything else sets the point.
//! - **Point**: roll until the point comes again (win) or a seven shows (loss).
//!
//! Each phase is its own type, so a finished round always carries an
//! outcome and a point round always carries its point. Dice are drawn
//! from an injected [`RollSource`], which keeps every round reproducible.
//!
//! # Example
//!
//! ```
//! use strictly_craps::{Outcome, Round};
//!
//! let round = Round::replay_sums(&[4, 6, 9, 4]).unwrap();
//! assert_eq!(round.outcome(), Outcome::Won);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod dice;
mod error;
mod invariants;
mod phases;
mod roll_name;
mod typestate;

pub use dice::{CRAPS_DICE, Dice, DiceRoll, FACES, LoadedDice, RollSource};
pub use error::DiceError;
pub use invariants::{
    ComeOutDecidesAlone, FinishedInvariants, Invariant, InvariantSet, InvariantViolation,
    NoDecisionYet, OutcomeMatchesLastRoll, PointFromComeOut, PointPhaseInvariants,
};
pub use phases::{ComeOutResult, Outcome, Point, SEVEN, Status};
pub use roll_name::RollName;
pub use typestate::{ComeOut, PointPhase, Round, RoundFinished, RoundResult};
