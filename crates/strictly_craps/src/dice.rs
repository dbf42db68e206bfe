//! Dice rolling for craps.
//!
//! The random source is always explicit: [`Dice`] owns the generator it
//! draws from, and the round engine only sees the [`RollSource`] trait.
//! Seeding the generator gives a fully reproducible session.

use crate::error::DiceError;
use derive_getters::Getters;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Number of dice thrown on every craps roll.
pub const CRAPS_DICE: usize = 2;

/// Highest face on a six-sided die.
pub const FACES: u8 = 6;

/// The faces of one throw and their total.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct DiceRoll {
    /// Individual face values, each in 1-6.
    faces: Vec<u8>,
    /// Sum of all faces.
    sum: u32,
}

impl DiceRoll {
    /// Creates a roll from explicit face values.
    #[instrument]
    pub fn new(faces: Vec<u8>) -> Result<Self, DiceError> {
        if faces.is_empty() {
            return Err(DiceError::NoDice);
        }
        if let Some(bad) = faces.iter().copied().find(|f| !(1..=FACES).contains(f)) {
            return Err(DiceError::FaceOutOfRange(bad));
        }
        let sum = faces.iter().map(|&f| u32::from(f)).sum();
        Ok(Self { faces, sum })
    }

    /// Creates a two-dice roll totalling `sum`.
    ///
    /// The first die takes the smallest face that still lets the second
    /// die make up the rest.
    #[instrument]
    pub fn pair_with_sum(sum: u32) -> Result<Self, DiceError> {
        let max = u32::from(FACES);
        if !(2..=2 * max).contains(&sum) {
            return Err(DiceError::SumOutOfRange(sum));
        }
        let first = sum.saturating_sub(max).max(1);
        let second = sum - first;
        Self::new(vec![first as u8, second as u8])
    }

    /// Returns the number of dice thrown.
    pub fn count(&self) -> usize {
        self.faces.len()
    }
}

impl std::fmt::Display for DiceRoll {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Rolled {:>2}  Dice (", self.sum)?;
        for (i, face) in self.faces.iter().enumerate() {
            let sep = if i > 0 { "," } else { "" };
            write!(f, "{} {}", sep, face)?;
        }
        write!(f, " )")
    }
}

/// Anything that can produce dice rolls for the round engine.
pub trait RollSource {
    /// Rolls `n` dice.
    fn roll_dice(&mut self, n: usize) -> Result<DiceRoll, DiceError>;

    /// Rolls the two dice used in craps.
    fn roll_pair(&mut self) -> Result<DiceRoll, DiceError> {
        self.roll_dice(CRAPS_DICE)
    }
}

impl<S: RollSource + ?Sized> RollSource for &mut S {
    fn roll_dice(&mut self, n: usize) -> Result<DiceRoll, DiceError> {
        (**self).roll_dice(n)
    }
}

/// Fair six-sided dice backed by a caller-supplied generator.
#[derive(Debug, Clone)]
pub struct Dice<R> {
    rng: R,
}

impl<R: Rng> Dice<R> {
    /// Wraps a random generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> RollSource for Dice<R> {
    #[instrument(skip(self))]
    fn roll_dice(&mut self, n: usize) -> Result<DiceRoll, DiceError> {
        if n == 0 {
            return Err(DiceError::NoDice);
        }
        let faces: Vec<u8> = (0..n).map(|_| self.rng.random_range(1..=FACES)).collect();
        let roll = DiceRoll::new(faces)?;
        debug!(sum = roll.sum, faces = ?roll.faces, "Dice rolled");
        Ok(roll)
    }
}

/// Scripted dice that hand out a fixed sequence of rolls.
///
/// Used to replay recorded rounds and to drive the engine
/// deterministically.
#[derive(Debug, Clone, Default)]
pub struct LoadedDice {
    rolls: Vec<DiceRoll>,
    next: usize,
}

impl LoadedDice {
    /// Creates loaded dice from recorded rolls.
    pub fn new(rolls: Vec<DiceRoll>) -> Self {
        Self { rolls, next: 0 }
    }

    /// Creates loaded two-dice rolls from their sums.
    #[instrument]
    pub fn from_sums(sums: &[u32]) -> Result<Self, DiceError> {
        let rolls = sums
            .iter()
            .map(|&sum| DiceRoll::pair_with_sum(sum))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(rolls))
    }

    /// Number of rolls not yet handed out.
    pub fn remaining(&self) -> usize {
        self.rolls.len() - self.next
    }
}

impl RollSource for LoadedDice {
    #[instrument(skip(self))]
    fn roll_dice(&mut self, n: usize) -> Result<DiceRoll, DiceError> {
        if n == 0 {
            return Err(DiceError::NoDice);
        }
        let roll = self
            .rolls
            .get(self.next)
            .cloned()
            .ok_or(DiceError::Exhausted(self.next))?;
        if roll.count() != n {
            return Err(DiceError::CountMismatch {
                expected: n,
                found: roll.count(),
            });
        }
        self.next += 1;
        Ok(roll)
    }
}
