//! Conventional names for two-dice totals.

use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Name of a two-dice total, indexed by the total itself.
///
/// Totals 0 and 1 cannot be thrown with two dice; they exist so the
/// table can be indexed directly by sum.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::EnumIter,
    strum::Display,
)]
pub enum RollName {
    /// Placeholder for a total of 0.
    #[strum(to_string = "N/A")]
    ZeroNa,
    /// Placeholder for a total of 1.
    #[strum(to_string = "N/A")]
    OneNa,
    /// Two.
    #[strum(to_string = "Snake Eyes")]
    SnakeEyes,
    /// Three.
    #[strum(to_string = "Trey")]
    Trey,
    /// Four.
    Four,
    /// Five.
    Five,
    /// Six.
    Six,
    /// Seven.
    Seven,
    /// Eight.
    Eight,
    /// Nine.
    Nine,
    /// Ten.
    Ten,
    /// Eleven.
    #[strum(to_string = "Yo-leven")]
    YoLeven,
    /// Twelve.
    #[strum(to_string = "Box Cars")]
    BoxCars,
}

const BY_SUM: [RollName; 13] = [
    RollName::ZeroNa,
    RollName::OneNa,
    RollName::SnakeEyes,
    RollName::Trey,
    RollName::Four,
    RollName::Five,
    RollName::Six,
    RollName::Seven,
    RollName::Eight,
    RollName::Nine,
    RollName::Ten,
    RollName::YoLeven,
    RollName::BoxCars,
];

impl RollName {
    /// Looks up the name for a total. Totals above twelve fall back to
    /// the `N/A` placeholder.
    #[instrument]
    pub fn from_sum(sum: u32) -> Self {
        usize::try_from(sum)
            .ok()
            .and_then(|i| BY_SUM.get(i).copied())
            .unwrap_or(RollName::ZeroNa)
    }

    /// The total this name stands for, if it can be thrown with two dice.
    pub fn sum(self) -> Option<u32> {
        match self {
            RollName::ZeroNa | RollName::OneNa => None,
            other => BY_SUM
                .iter()
                .position(|&n| n == other)
                .and_then(|i| u32::try_from(i).ok()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_special_names() {
        assert_eq!(RollName::from_sum(2).to_string(), "Snake Eyes");
        assert_eq!(RollName::from_sum(3).to_string(), "Trey");
        assert_eq!(RollName::from_sum(11).to_string(), "Yo-leven");
        assert_eq!(RollName::from_sum(12).to_string(), "Box Cars");
    }

    #[test]
    fn test_plain_names() {
        let names: Vec<String> = (4..=10).map(|s| RollName::from_sum(s).to_string()).collect();
        assert_eq!(
            names,
            ["Four", "Five", "Six", "Seven", "Eight", "Nine", "Ten"]
        );
    }

    #[test]
    fn test_placeholders() {
        assert_eq!(RollName::from_sum(0).to_string(), "N/A");
        assert_eq!(RollName::from_sum(1).to_string(), "N/A");
        assert_eq!(RollName::from_sum(13).to_string(), "N/A");
        assert_eq!(RollName::ZeroNa.sum(), None);
    }

    #[test]
    fn test_table_is_indexed_by_sum() {
        for (i, name) in RollName::iter().enumerate() {
            assert_eq!(RollName::from_sum(i as u32), name);
            if i >= 2 {
                assert_eq!(name.sum(), Some(i as u32));
            }
        }
    }
}
