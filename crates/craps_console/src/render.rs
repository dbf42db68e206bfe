//! Text shown to the player.

use crate::error::ConsoleError;
use std::io::Write;
use strictly_craps::{DiceRoll, Outcome, Point, RollSource};
use tracing::instrument;

/// Banner printed when the program starts.
pub const BANNER: &str = "My Game of Craps";

/// Shown when a round is won.
pub const WON_STR: &str = "Congratulations 😀, you won this game";

/// Shown when a round is lost.
pub const LOST_STR: &str = "Hard luck 😳, you lost this game";

/// Prompt for the number of counted games.
pub const COUNT_PROMPT: &str = "How many games would you like to play? ";

/// Printed between the counted games and the replay loop.
pub const REPLAY_INTRO: &str = "Now lets play again while you enter Y or y";

/// Prompt asked before each extra game.
pub const REPLAY_PROMPT: &str = "Do you wish to play another game [y/N]: ";

/// Header printed before game `n`.
pub fn game_header(n: u32) -> String {
    format!("### Game {} ###", n)
}

/// Line announcing an established point.
pub fn point_message(point: Point) -> String {
    format!(
        "The Point is {}. Roll {} before 7 to win",
        point,
        point.value()
    )
}

/// Closing line of a round.
pub fn outcome_message(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Won => WON_STR,
        Outcome::Lost => LOST_STR,
    }
}

/// Final summary line.
pub fn summary(played: u32) -> String {
    format!("You played {} games. Bye!", played)
}

/// Rolls two dice, prints them, and returns the roll.
#[instrument(skip(source, out))]
pub fn roll_and_display<S, W>(source: &mut S, out: &mut W) -> Result<DiceRoll, ConsoleError>
where
    S: RollSource + ?Sized,
    W: Write + ?Sized,
{
    let roll = source.roll_pair()?;
    writeln!(out, "{}", roll)?;
    Ok(roll)
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_craps::LoadedDice;

    #[test]
    fn test_point_message() {
        let point = Point::new(4).unwrap();
        assert_eq!(
            point_message(point),
            "The Point is Four (4). Roll 4 before 7 to win"
        );
    }

    #[test]
    fn test_roll_and_display() {
        let mut dice = LoadedDice::from_sums(&[8]).unwrap();
        let mut out = Vec::new();
        let roll = roll_and_display(&mut dice, &mut out).unwrap();
        assert_eq!(*roll.sum(), 8);
        assert_eq!(String::from_utf8(out).unwrap(), "Rolled  8  Dice ( 2, 6 )\n");
    }

    #[test]
    fn test_headers() {
        assert_eq!(game_header(3), "### Game 3 ###");
        assert_eq!(summary(1), "You played 1 games. Bye!");
    }
}
