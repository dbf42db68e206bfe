//! Craps Console - play craps in a terminal.
//!
//! # Architecture
//!
//! - **Console**: prompts, counted games, replay loop, final tally
//! - **Render**: every line of text the player sees
//! - **Engine**: rounds come from [`strictly_craps`], dice are injected
//!
//! # Example
//!
//! ```
//! use craps_console::Console;
//! use std::io::Cursor;
//! use strictly_craps::LoadedDice;
//!
//! let dice = LoadedDice::from_sums(&[7]).unwrap();
//! let mut console = Console::new(Cursor::new("n\n"), Vec::new(), dice);
//! let tally = console.run(Some(1)).unwrap();
//! assert_eq!(*tally.won(), 1);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod console;
mod error;
mod render;
mod tally;

pub use cli::Cli;
pub use console::Console;
pub use error::ConsoleError;
pub use render::{
    BANNER, COUNT_PROMPT, LOST_STR, REPLAY_INTRO, REPLAY_PROMPT, WON_STR, game_header,
    outcome_message, point_message, roll_and_display, summary,
};
pub use tally::Tally;
