//! First-class invariants for craps rounds.
//!
//! Invariants are logical properties that must hold after every
//! transition. The typestate engine checks them in debug builds.

use crate::phases::{ComeOutResult, Outcome, Point, SEVEN};
use crate::typestate::{PointPhase, RoundFinished};
use tracing::instrument;

/// A logical property that must hold for a given state.
pub trait Invariant<S> {
    /// Checks if the invariant holds for the given state.
    fn holds(state: &S) -> bool;

    /// Human-readable description of the invariant.
    fn description() -> &'static str;
}

/// Violation of an invariant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    /// Description of the violated invariant.
    pub description: String,
}

impl InvariantViolation {
    /// Creates a new invariant violation.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
        }
    }
}

/// A set of invariants that can be checked together.
pub trait InvariantSet<S> {
    /// Checks all invariants in the set, collecting every violation.
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>>;
}

impl<S, I1, I2> InvariantSet<S> for (I1, I2)
where
    I1: Invariant<S>,
    I2: Invariant<S>,
{
    fn check_all(state: &S) -> Result<(), Vec<InvariantViolation>> {
        let mut violations = Vec::new();

        if !I1::holds(state) {
            violations.push(InvariantViolation::new(I1::description()));
        }
        if !I2::holds(state) {
            violations.push(InvariantViolation::new(I2::description()));
        }

        if violations.is_empty() {
            Ok(())
        } else {
            Err(violations)
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Point phase
// ─────────────────────────────────────────────────────────────

/// The come-out roll established the current point.
pub struct PointFromComeOut;

impl Invariant<PointPhase> for PointFromComeOut {
    #[instrument(skip(state))]
    fn holds(state: &PointPhase) -> bool {
        state
            .rolls()
            .first()
            .is_some_and(|r| Point::new(*r.sum()) == Some(state.point()))
    }

    fn description() -> &'static str {
        "Point equals the come-out total"
    }
}

/// No roll after the come-out has hit the point or a seven.
pub struct NoDecisionYet;

impl Invariant<PointPhase> for NoDecisionYet {
    #[instrument(skip(state))]
    fn holds(state: &PointPhase) -> bool {
        let point = state.point().value();
        state
            .rolls()
            .iter()
            .skip(1)
            .all(|r| *r.sum() != point && *r.sum() != SEVEN)
    }

    fn description() -> &'static str {
        "Only the come-out roll and undecided rolls are recorded"
    }
}

/// Invariants checked after every point-phase roll.
pub type PointPhaseInvariants = (PointFromComeOut, NoDecisionYet);

// ─────────────────────────────────────────────────────────────
//  Finished round
// ─────────────────────────────────────────────────────────────

/// The last roll decided the round, and decided it the recorded way.
pub struct OutcomeMatchesLastRoll;

impl Invariant<RoundFinished> for OutcomeMatchesLastRoll {
    #[instrument(skip(state))]
    fn holds(state: &RoundFinished) -> bool {
        let Some(last) = state.rolls().last() else {
            return false;
        };
        let sum = *last.sum();
        let expected = match state.point() {
            None => match ComeOutResult::classify(sum) {
                ComeOutResult::Natural => Some(Outcome::Won),
                ComeOutResult::Craps => Some(Outcome::Lost),
                ComeOutResult::Point(_) => None,
            },
            Some(point) if sum == point.value() => Some(Outcome::Won),
            Some(_) if sum == SEVEN => Some(Outcome::Lost),
            Some(_) => None,
        };
        expected == Some(state.outcome())
    }

    fn description() -> &'static str {
        "Outcome follows from the final roll"
    }
}

/// A round without a point ended on its come-out roll.
pub struct ComeOutDecidesAlone;

impl Invariant<RoundFinished> for ComeOutDecidesAlone {
    #[instrument(skip(state))]
    fn holds(state: &RoundFinished) -> bool {
        match state.point() {
            None => state.rolls().len() == 1,
            Some(_) => state.rolls().len() >= 2,
        }
    }

    fn description() -> &'static str {
        "Rounds without a point take exactly one roll"
    }
}

/// Invariants checked on every finished round.
pub type FinishedInvariants = (OutcomeMatchesLastRoll, ComeOutDecidesAlone);
