use clap::{Arg, ArgAction, ArgMatches, Command, arg, command};
use log::LevelFilter;
use thiserror::Error;

use crate::board::{Board, LayoutError};

/// Error when command line options are inconsistent.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error(transparent)]
    Args(#[from] clap::Error),
    #[error("invalid --layout: {0}")]
    Layout(#[from] LayoutError),
}

/// Runtime options for the binary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Moves to replay instead of reading stdin.
    pub script: Option<String>,
    /// Starting placement; the standard layout when `None`.
    pub layout: Option<String>,
    pub clear_screen: bool,
    pub log_level: LevelFilter,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            script: None,
            layout: None,
            clear_screen: true,
            log_level: LevelFilter::Warn,
        }
    }
}

impl Config {
    pub fn command() -> Command {
        command!()
            .about("Two-player console chess; the game ends when a king is captured")
            .arg(
                arg!(-s --script <MOVES> "Play these moves (separated by '.' or ';') instead of reading stdin")
                    .required(false),
            )
            .arg(
                arg!(-l --layout <PLACEMENT> "Start from a FEN piece placement, White to move")
                    .required(false),
            )
            .arg(
                Arg::new("no-clear")
                    .long("no-clear")
                    .action(ArgAction::SetTrue)
                    .help("Do not clear the screen between moves"),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .action(ArgAction::Count)
                    .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"),
            )
            .arg(arg!(-q --quiet "Only log errors").conflicts_with("verbose"))
    }

    /// Parse the process arguments, exiting with usage on error.
    pub fn from_args() -> Self {
        Self::from_matches(&Self::command().get_matches())
    }

    /// Parse an explicit argument list.
    pub fn try_from_iter<I, T>(args: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = T>,
        T: Into<std::ffi::OsString> + Clone,
    {
        let matches = Self::command().try_get_matches_from(args)?;
        Ok(Self::from_matches(&matches))
    }

    fn from_matches(matches: &ArgMatches) -> Self {
        let log_level = if matches.get_flag("quiet") {
            LevelFilter::Error
        } else {
            match matches.get_count("verbose") {
                0 => LevelFilter::Warn,
                1 => LevelFilter::Info,
                2 => LevelFilter::Debug,
                _ => LevelFilter::Trace,
            }
        };

        Self {
            script: matches.get_one::<String>("script").cloned(),
            layout: matches.get_one::<String>("layout").cloned(),
            clear_screen: !matches.get_flag("no-clear"),
            log_level,
        }
    }

    /// The board to start from.
    pub fn board(&self) -> Result<Board, ConfigError> {
        match &self.layout {
            Some(layout) => Ok(Board::from_layout(layout)?),
            None => Ok(Board::new()),
        }
    }
}
