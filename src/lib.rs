use notation::Command;

pub mod board;
pub mod config;
pub mod feedback;
pub mod game_logic;
pub mod game_state;
pub mod notation;
pub mod piece;
pub mod position;
pub mod rules;
pub mod session;
pub mod terminal;
pub mod validation;

/// Trait for reading player commands.
///
/// Abstracts over interactive stdin and scripted input, providing a uniform
/// interface for [`session::run_game`].
pub trait MoveSource {
    /// Error type for input failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Next command for `player`, or `None` once input is exhausted.
    ///
    /// Lines that cannot be parsed are reported as `Some(Err(_))` so the
    /// driver can ask again.
    fn next_command(
        &mut self,
        player: piece::Color,
    ) -> Result<Option<Result<Command, notation::ParseError>>, Self::Error>;
}

/// Trait for presenting the game to the players.
///
/// Mirrors [`MoveSource`] on the output side.
pub trait BoardDisplay {
    /// Error type for display update failures.
    type Error: std::fmt::Debug + std::fmt::Display;

    /// Draw the board with the given highlights.
    fn show(
        &mut self,
        engine: &game_logic::GameEngine,
        feedback: &feedback::BoardFeedback,
    ) -> Result<(), Self::Error>;

    /// Report something that happened (rejection, capture, result...).
    fn notify(&mut self, notice: &session::Notice) -> Result<(), Self::Error>;
}
