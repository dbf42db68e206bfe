//! Interactive session driver.
//!
//! Plays a counted block of games, then keeps offering one more game
//! until the player declines. Generic over its input, output and dice so
//! a whole session can run against in-memory buffers.

use crate::error::ConsoleError;
use crate::render::{
    self, BANNER, COUNT_PROMPT, REPLAY_INTRO, REPLAY_PROMPT, roll_and_display,
};
use crate::tally::Tally;
use std::io::{BufRead, Write};
use strictly_craps::{ComeOut, Outcome, RollSource, RoundResult};
use tracing::{debug, info, instrument};

/// A console session of craps.
pub struct Console<R, W, S> {
    input: R,
    output: W,
    dice: S,
    tally: Tally,
}

impl<R, W, S> Console<R, W, S>
where
    R: BufRead,
    W: Write,
    S: RollSource,
{
    /// Creates a session reading from `input`, writing to `output` and
    /// rolling with `dice`.
    pub fn new(input: R, output: W, dice: S) -> Self {
        Self {
            input,
            output,
            dice,
            tally: Tally::new(),
        }
    }

    /// Totals so far.
    pub fn tally(&self) -> &Tally {
        &self.tally
    }

    /// Consumes the session and returns its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Runs a whole session and returns the final tally.
    ///
    /// When `games` is `None` the player is asked how many games to play.
    #[instrument(skip(self))]
    pub fn run(&mut self, games: Option<u32>) -> Result<Tally, ConsoleError> {
        writeln!(self.output, "{}", BANNER)?;

        let games = match games {
            Some(n) => n,
            None => self.ask_game_count()?,
        };
        info!(games, "Starting counted games");

        for _ in 0..games {
            self.play_game()?;
        }

        writeln!(self.output, "\n{}", REPLAY_INTRO)?;
        while self.ask_play_again()? {
            self.play_game()?;
        }

        writeln!(self.output, "{}", render::summary(*self.tally.played()))?;
        self.output.flush()?;

        info!(
            played = self.tally.played(),
            won = self.tally.won(),
            lost = self.tally.lost(),
            "Session finished"
        );
        Ok(self.tally)
    }

    /// Asks for the number of counted games.
    ///
    /// Blank lines are skipped and only the first word is read. Zero or a negative count plays no counted
    /// games. Anything that is not a whole number is fatal.
    #[instrument(skip(self))]
    pub fn ask_game_count(&mut self) -> Result<u32, ConsoleError> {
        write!(self.output, "{}", COUNT_PROMPT)?;
        self.output.flush()?;

        let line = loop {
            let line = self
                .read_line()?
                .ok_or_else(|| ConsoleError::new("Input ended before the number of games"))?;
            if !line.trim().is_empty() {
                break line;
            }
        };
        let token = line.split_whitespace().next().unwrap_or_default();
        let count = token.parse::<i64>().map_err(|e| {
            ConsoleError::new(format!(
                "Expected a whole number of games, got '{}': {}",
                token, e
            ))
        })?;
        let games = u32::try_from(count.max(0)).unwrap_or(u32::MAX);

        debug!(count, games, "Game count read");
        Ok(games)
    }

    /// Asks whether to play another game.
    ///
    /// Only a first token of `y` or `Y` means yes. End of input means no.
    #[instrument(skip(self))]
    pub fn ask_play_again(&mut self) -> Result<bool, ConsoleError> {
        write!(self.output, "\n{}", REPLAY_PROMPT)?;
        self.output.flush()?;

        let again = self.read_line()?.is_some_and(|line| {
            line.split_whitespace()
                .next()
                .is_some_and(|token| token.eq_ignore_ascii_case("y"))
        });

        debug!(again, "Replay answer read");
        Ok(again)
    }

    /// Plays the next game under its header and records the outcome.
    #[instrument(skip(self), fields(game = self.tally.next_game()))]
    pub fn play_game(&mut self) -> Result<Outcome, ConsoleError> {
        writeln!(self.output, "\n{}", render::game_header(self.tally.next_game()))?;
        let outcome = self.play_round()?;
        self.tally.record(outcome);
        Ok(outcome)
    }

    /// Plays one round, printing every roll.
    #[instrument(skip(self))]
    pub fn play_round(&mut self) -> Result<Outcome, ConsoleError> {
        let come_out = roll_and_display(&mut self.dice, &mut self.output)?;
        let mut state = ComeOut::new().roll(come_out);

        if let RoundResult::InProgress(phase) = &state {
            writeln!(self.output, "{}", render::point_message(phase.point()))?;
        }

        let round = loop {
            match state {
                RoundResult::Finished(round) => break round,
                RoundResult::InProgress(phase) => {
                    let roll = roll_and_display(&mut self.dice, &mut self.output)?;
                    state = phase.roll(roll);
                }
            }
        };

        let outcome = round.outcome();
        writeln!(self.output, "{}", render::outcome_message(outcome))?;
        Ok(outcome)
    }

    /// Reads one line, or `None` at end of input.
    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use strictly_craps::LoadedDice;

    fn console(input: &str, sums: &[u32]) -> Console<Cursor<Vec<u8>>, Vec<u8>, LoadedDice> {
        Console::new(
            Cursor::new(input.as_bytes().to_vec()),
            Vec::new(),
            LoadedDice::from_sums(sums).unwrap(),
        )
    }

    #[test]
    fn test_count_accepts_whitespace() {
        let mut c = console("  3 \n", &[]);
        assert_eq!(c.ask_game_count().unwrap(), 3);

        let mut c = console("4 games\n", &[]);
        assert_eq!(c.ask_game_count().unwrap(), 4);
    }

    #[test]
    fn test_count_negative_plays_none() {
        for input in ["-1\n", "-250\n", "0\n"] {
            let mut c = console(input, &[]);
            assert_eq!(c.ask_game_count().unwrap(), 0, "{:?}", input);
        }
    }

    #[test]
    fn test_count_skips_blank_lines() {
        let mut c = console("\n   \n\n2\n", &[]);
        assert_eq!(c.ask_game_count().unwrap(), 2);
    }

    #[test]
    fn test_count_saturates() {
        let mut c = console("99999999999\n", &[]);
        assert_eq!(c.ask_game_count().unwrap(), u32::MAX);
    }

    #[test]
    fn test_count_rejects_garbage() {
        for input in ["three\n", "\n", "2.5\n", "- 1\n"] {
            let mut c = console(input, &[]);
            assert!(c.ask_game_count().is_err(), "{:?} accepted", input);
        }
    }

    #[test]
    fn test_count_rejects_eof() {
        let mut c = console("", &[]);
        let err = c.ask_game_count().unwrap_err();
        assert!(err.message.contains("Input ended"));
    }

    #[test]
    fn test_play_again_answers() {
        for (input, expected) in [
            ("y\n", true),
            ("Y\n", true),
            ("  y  \n", true),
            ("y please\n", true),
            ("yes\n", false),
            ("n\n", false),
            ("\n", false),
            ("", false),
        ] {
            let mut c = console(input, &[]);
            assert_eq!(c.ask_play_again().unwrap(), expected, "{:?}", input);
        }
    }

    #[test]
    fn test_play_round_prints_point() {
        let mut c = console("", &[5, 8, 5]);
        assert_eq!(c.play_round().unwrap(), Outcome::Won);
        let out = String::from_utf8(c.into_output()).unwrap();
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "Rolled  5  Dice ( 1, 4 )",
                "The Point is Five (5). Roll 5 before 7 to win",
                "Rolled  8  Dice ( 2, 6 )",
                "Rolled  5  Dice ( 1, 4 )",
                "Congratulations 😀, you won this game",
            ]
        );
    }

    #[test]
    fn test_play_round_dice_failure() {
        let mut c = console("", &[6]);
        let err = c.play_round().unwrap_err();
        assert!(err.message.contains("exhausted"));
    }
}
