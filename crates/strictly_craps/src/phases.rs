//! Round status, outcome and point types.

use crate::roll_name::RollName;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Total that wins on the come-out roll and loses once a point is set.
pub const SEVEN: u32 = 7;

/// Status of a round in play.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Status {
    /// Round is still being rolled.
    #[default]
    Continue,
    /// Round ended in a win.
    Won,
    /// Round ended in a loss.
    Lost,
}

impl Status {
    /// Returns true for `Won` and `Lost`.
    pub fn is_terminal(self) -> bool {
        !matches!(self, Status::Continue)
    }
}

impl From<Outcome> for Status {
    fn from(outcome: Outcome) -> Self {
        match outcome {
            Outcome::Won => Status::Won,
            Outcome::Lost => Status::Lost,
        }
    }
}

/// Outcome of a finished round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// The shooter won.
    Won,
    /// The shooter lost.
    Lost,
}

impl Outcome {
    /// Returns true if the round was won.
    pub fn is_won(self) -> bool {
        matches!(self, Outcome::Won)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Won => write!(f, "Won"),
            Outcome::Lost => write!(f, "Lost"),
        }
    }
}

/// What a come-out total means for the round.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComeOutResult {
    /// 7 or 11.
    Natural,
    /// 2, 3 or 12.
    Craps,
    /// Any other total becomes the point.
    Point(Point),
}

impl ComeOutResult {
    /// Classifies a come-out total.
    #[instrument]
    pub fn classify(sum: u32) -> Self {
        match RollName::from_sum(sum) {
            RollName::Seven | RollName::YoLeven => ComeOutResult::Natural,
            RollName::SnakeEyes | RollName::Trey | RollName::BoxCars => ComeOutResult::Craps,
            _ => match Point::new(sum) {
                Some(point) => ComeOutResult::Point(point),
                // Unreachable with two dice; treat an impossible total as craps.
                None => ComeOutResult::Craps,
            },
        }
    }
}

/// An established point: one of 4, 5, 6, 8, 9 or 10.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Point(u32);

impl Point {
    /// All totals that can become a point.
    pub const VALUES: [u32; 6] = [4, 5, 6, 8, 9, 10];

    /// Creates a point, or `None` if the total cannot be a point.
    pub fn new(sum: u32) -> Option<Self> {
        Self::VALUES.contains(&sum).then_some(Self(sum))
    }

    /// The total that must be rolled again to win.
    pub fn value(self) -> u32 {
        self.0
    }

    /// Conventional name of the point total.
    pub fn name(self) -> RollName {
        RollName::from_sum(self.0)
    }
}

impl TryFrom<u32> for Point {
    type Error = String;

    fn try_from(sum: u32) -> Result<Self, Self::Error> {
        Point::new(sum).ok_or_else(|| format!("{} cannot be a point", sum))
    }
}

impl From<Point> for u32 {
    fn from(point: Point) -> Self {
        point.0
    }
}

impl std::fmt::Display for Point {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name(), self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_naturals() {
        assert_eq!(ComeOutResult::classify(7), ComeOutResult::Natural);
        assert_eq!(ComeOutResult::classify(11), ComeOutResult::Natural);
    }

    #[test]
    fn test_craps() {
        for sum in [2, 3, 12] {
            assert_eq!(ComeOutResult::classify(sum), ComeOutResult::Craps);
        }
    }

    #[test]
    fn test_points() {
        for sum in Point::VALUES {
            match ComeOutResult::classify(sum) {
                ComeOutResult::Point(p) => assert_eq!(p.value(), sum),
                other => panic!("{} classified as {:?}", sum, other),
            }
        }
    }

    #[test]
    fn test_point_rejects_non_points() {
        for sum in [0, 1, 2, 3, 7, 11, 12, 13] {
            assert_eq!(Point::new(sum), None);
        }
    }

    #[test]
    fn test_point_display() {
        let point = Point::new(4).unwrap();
        assert_eq!(point.to_string(), "Four (4)");
    }

    #[test]
    fn test_point_serde() {
        let point = Point::new(8).unwrap();
        assert_eq!(serde_json::to_string(&point).unwrap(), "8");
        assert!(serde_json::from_str::<Point>("7").is_err());
    }

    #[test]
    fn test_status_from_outcome() {
        assert_eq!(Status::from(Outcome::Won), Status::Won);
        assert_eq!(Status::from(Outcome::Lost), Status::Lost);
        assert!(!Status::Continue.is_terminal());
        assert!(Status::Won.is_terminal());
    }
}
