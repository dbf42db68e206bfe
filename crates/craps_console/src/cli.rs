//! Command-line interface for the craps console.

use clap::Parser;

/// My Game of Craps - roll two dice, make your point before a seven
#[derive(Parser, Debug)]
#[command(name = "craps")]
#[command(about = "Interactive console game of craps", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Number of counted games to play (asked interactively if omitted)
    #[arg(short, long)]
    pub games: Option<u32>,

    /// Seed for the dice, for a reproducible session
    #[arg(short, long)]
    pub seed: Option<u64>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_flags() {
        let cli = Cli::parse_from(["craps", "--games", "3", "--seed", "42"]);
        assert_eq!(cli.games, Some(3));
        assert_eq!(cli.seed, Some(42));

        let cli = Cli::parse_from(["craps"]);
        assert_eq!(cli.games, None);
        assert_eq!(cli.seed, None);
    }

    #[test]
    fn test_negative_games_rejected() {
        assert!(Cli::try_parse_from(["craps", "--games", "-1"]).is_err());
    }
}
