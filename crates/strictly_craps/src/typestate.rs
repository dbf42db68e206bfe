//! Phase-specific typestate structs for a craps round.
//!
//! Each phase is its own type. A [`ComeOut`] has no point, a
//! [`PointPhase`] ALWAYS has one, and a [`RoundFinished`] ALWAYS has an
//! outcome. Rolling consumes the current phase and yields the next.

use crate::dice::{CRAPS_DICE, DiceRoll, LoadedDice, RollSource};
use crate::error::DiceError;
use crate::invariants::{FinishedInvariants, InvariantSet, PointPhaseInvariants};
use crate::phases::{ComeOutResult, Outcome, Point, SEVEN, Status};
use tracing::{debug, info, instrument};

// ─────────────────────────────────────────────────────────────
//  Come-out Phase
// ─────────────────────────────────────────────────────────────

/// A round waiting for its first roll.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ComeOut;

impl ComeOut {
    /// Creates a fresh round.
    #[instrument]
    pub fn new() -> Self {
        Self
    }

    /// Status before the come-out roll.
    pub fn status(&self) -> Status {
        Status::Continue
    }

    /// Applies the come-out roll.
    ///
    /// 7 or 11 wins and 2, 3 or 12 loses on the spot. Any other total
    /// becomes the point.
    #[instrument(skip(self), fields(sum = *roll.sum()))]
    pub fn roll(self, roll: DiceRoll) -> RoundResult {
        debug_assert_eq!(roll.count(), CRAPS_DICE);

        match ComeOutResult::classify(*roll.sum()) {
            ComeOutResult::Natural => finish(Vec::from([roll]), None, Outcome::Won),
            ComeOutResult::Craps => finish(Vec::from([roll]), None, Outcome::Lost),
            ComeOutResult::Point(point) => {
                debug!(point = point.value(), "Point established");
                let phase = PointPhase {
                    point,
                    rolls: vec![roll],
                };
                check::<_, PointPhaseInvariants>(&phase);
                RoundResult::InProgress(phase)
            }
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Point Phase
// ─────────────────────────────────────────────────────────────

/// A round with an established point, rolling until the point or a seven.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointPhase {
    point: Point,
    rolls: Vec<DiceRoll>,
}

impl PointPhase {
    /// The point to repeat.
    pub fn point(&self) -> Point {
        self.point
    }

    /// Every roll so far, come-out first.
    pub fn rolls(&self) -> &[DiceRoll] {
        &self.rolls
    }

    /// Status while the point is open.
    pub fn status(&self) -> Status {
        Status::Continue
    }

    /// Applies a roll after the point is set.
    #[instrument(skip(self), fields(point = self.point.value(), sum = *roll.sum()))]
    pub fn roll(self, roll: DiceRoll) -> RoundResult {
        debug_assert_eq!(roll.count(), CRAPS_DICE);

        let sum = *roll.sum();
        let mut phase = self;
        phase.rolls.push(roll);

        if sum == phase.point.value() {
            finish(phase.rolls, Some(phase.point), Outcome::Won)
        } else if sum == SEVEN {
            finish(phase.rolls, Some(phase.point), Outcome::Lost)
        } else {
            debug!("No decision, rolling again");
            check::<_, PointPhaseInvariants>(&phase);
            RoundResult::InProgress(phase)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Finished Phase
// ─────────────────────────────────────────────────────────────

/// A decided round. The outcome is always present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundFinished {
    point: Option<Point>,
    rolls: Vec<DiceRoll>,
    outcome: Outcome,
}

impl RoundFinished {
    /// The outcome.
    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Returns true if the round was won.
    pub fn is_won(&self) -> bool {
        self.outcome.is_won()
    }

    /// The point, if the come-out roll set one.
    pub fn point(&self) -> Option<Point> {
        self.point
    }

    /// Every roll of the round, come-out first.
    pub fn rolls(&self) -> &[DiceRoll] {
        &self.rolls
    }

    /// Terminal status matching the outcome.
    pub fn status(&self) -> Status {
        self.outcome.into()
    }
}

fn finish(rolls: Vec<DiceRoll>, point: Option<Point>, outcome: Outcome) -> RoundResult {
    let finished = RoundFinished {
        point,
        rolls,
        outcome,
    };
    check::<_, FinishedInvariants>(&finished);
    info!(%outcome, rolls = finished.rolls.len(), "Round decided");
    RoundResult::Finished(finished)
}

/// Checks invariants in debug builds.
fn check<S, I: InvariantSet<S>>(state: &S) {
    #[cfg(debug_assertions)]
    if let Err(violations) = I::check_all(state) {
        let descriptions = violations
            .iter()
            .map(|v| v.description.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        panic!("Round invariant violated: {}", descriptions);
    }
    #[cfg(not(debug_assertions))]
    let _ = state;
}

// ─────────────────────────────────────────────────────────────
//  Result Type
// ─────────────────────────────────────────────────────────────

/// Result of applying a roll.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RoundResult {
    /// Point is open, keep rolling.
    InProgress(PointPhase),
    /// Round decided.
    Finished(RoundFinished),
}

impl RoundResult {
    /// Status after the roll.
    pub fn status(&self) -> Status {
        match self {
            RoundResult::InProgress(phase) => phase.status(),
            RoundResult::Finished(round) => round.status(),
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Whole-round drivers
// ─────────────────────────────────────────────────────────────

/// Plays whole rounds from a roll source.
pub struct Round;

impl Round {
    /// Rolls until the round is decided.
    #[instrument(skip(source))]
    pub fn play<S: RollSource>(mut source: S) -> Result<RoundFinished, DiceError> {
        let mut state = ComeOut::new().roll(source.roll_pair()?);
        loop {
            match state {
                RoundResult::Finished(round) => return Ok(round),
                RoundResult::InProgress(phase) => state = phase.roll(source.roll_pair()?),
            }
        }
    }

    /// Replays a round from recorded rolls. Rolls after the deciding one
    /// are ignored.
    #[instrument(skip(rolls), fields(count = rolls.len()))]
    pub fn replay(rolls: &[DiceRoll]) -> Result<RoundFinished, DiceError> {
        Self::play(LoadedDice::new(rolls.to_vec()))
    }

    /// Replays a round from recorded two-dice totals.
    #[instrument]
    pub fn replay_sums(sums: &[u32]) -> Result<RoundFinished, DiceError> {
        Self::play(LoadedDice::from_sums(sums)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair(sum: u32) -> DiceRoll {
        DiceRoll::pair_with_sum(sum).unwrap()
    }

    #[test]
    fn test_come_out_natural_wins() {
        for sum in [7, 11] {
            match ComeOut::new().roll(pair(sum)) {
                RoundResult::Finished(round) => {
                    assert_eq!(round.outcome(), Outcome::Won);
                    assert_eq!(round.point(), None);
                    assert_eq!(round.rolls().len(), 1);
                }
                RoundResult::InProgress(_) => panic!("{} should decide the round", sum),
            }
        }
    }

    #[test]
    fn test_come_out_craps_loses() {
        for sum in [2, 3, 12] {
            match ComeOut::new().roll(pair(sum)) {
                RoundResult::Finished(round) => assert_eq!(round.status(), Status::Lost),
                RoundResult::InProgress(_) => panic!("{} should decide the round", sum),
            }
        }
    }

    #[test]
    fn test_come_out_sets_point() {
        for sum in Point::VALUES {
            match ComeOut::new().roll(pair(sum)) {
                RoundResult::InProgress(phase) => {
                    assert_eq!(phase.point().value(), sum);
                    assert_eq!(phase.status(), Status::Continue);
                }
                RoundResult::Finished(_) => panic!("{} should set a point", sum),
            }
        }
    }

    #[test]
    fn test_point_phase_ignores_other_totals() {
        let RoundResult::InProgress(phase) = ComeOut::new().roll(pair(6)) else {
            panic!("6 sets a point");
        };
        let RoundResult::InProgress(phase) = phase.roll(pair(11)) else {
            panic!("11 does not decide a point round");
        };
        let RoundResult::InProgress(phase) = phase.roll(pair(2)) else {
            panic!("2 does not decide a point round");
        };
        assert_eq!(phase.rolls().len(), 3);
        assert_eq!(phase.point().value(), 6);
    }

    #[test]
    fn test_point_then_seven_loses() {
        let round = Round::replay_sums(&[4, 7]).unwrap();
        assert_eq!(round.outcome(), Outcome::Lost);
        assert_eq!(round.point(), Point::new(4));
    }

    #[test]
    fn test_point_repeated_wins() {
        let round = Round::replay_sums(&[4, 6, 9, 4]).unwrap();
        assert!(round.is_won());
        assert_eq!(round.rolls().len(), 4);
    }

    #[test]
    fn test_replay_ignores_trailing_rolls() {
        let round = Round::replay_sums(&[11, 7, 7]).unwrap();
        assert_eq!(round.rolls().len(), 1);
    }

    #[test]
    fn test_replay_runs_out() {
        assert_eq!(Round::replay_sums(&[5, 6]), Err(DiceError::Exhausted(2)));
    }
}
