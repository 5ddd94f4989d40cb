use std::io::{self, Stdout, Write};

use shakmaty::{File, Rank, Square};

use crate::BoardDisplay;
use crate::feedback::{BoardFeedback, SquareFeedback};
use crate::game_logic::GameEngine;
use crate::position::Position;
use crate::session::Notice;

/// Terminal-based board display.
///
/// Renders the board as an 8×8 grid of piece symbols with rank and file
/// labels, colouring squares that carry [`BoardFeedback`].
#[derive(Debug)]
pub struct TerminalDisplay<W: Write = Stdout> {
    out: W,
    clear_screen: bool,
}

impl TerminalDisplay<Stdout> {
    /// Create a display writing to stdout.
    pub fn new(clear_screen: bool) -> Self {
        Self::with_writer(io::stdout(), clear_screen)
    }
}

impl<W: Write> TerminalDisplay<W> {
    pub fn with_writer(out: W, clear_screen: bool) -> Self {
        Self { out, clear_screen }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

/// Error type for terminal display operations.
#[derive(Debug, thiserror::Error)]
pub enum DisplayError {
    #[error("failed to write to terminal: {0}")]
    Io(#[from] io::Error),
}

impl<W: Write> BoardDisplay for TerminalDisplay<W> {
    type Error = DisplayError;

    fn show(&mut self, engine: &GameEngine, feedback: &BoardFeedback) -> Result<(), Self::Error> {
        if self.clear_screen {
            // Clears the screen and moves cursor to top-left.
            write!(self.out, "\x1B[2J\x1B[H")?;
        }
        render_board(&mut self.out, engine, feedback)
    }

    fn notify(&mut self, notice: &Notice) -> Result<(), Self::Error> {
        writeln!(self.out, "{notice}")?;
        self.out.flush()?;
        Ok(())
    }
}

/// Render the board to any writer. Extracted for testability.
fn render_board(
    w: &mut impl Write,
    engine: &GameEngine,
    feedback: &BoardFeedback,
) -> Result<(), DisplayError> {
    writeln!(w, "♟️  Console Chess - capture the king to win")?;
    writeln!(w)?;
    writeln!(w, "Commands: e2 e4 | 1,4 3,4 | hint <square> | history | quit")?;
    writeln!(w)?;
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    for rank in Rank::ALL.iter().rev() {
        write!(w, " {} ", rank.char())?;
        for file in File::ALL {
            let position = Position::from(Square::from_coords(file, *rank));
            let symbol = engine.piece_at(position).map_or('·', |piece| piece.symbol());
            write!(w, "{}", format_square(symbol, feedback.get(position)))?;
        }
        writeln!(w, " {}", rank.char())?;
    }
    writeln!(w, "    a  b  c  d  e  f  g  h")?;
    writeln!(w)?;

    let board = engine.board();
    let state = engine.state();
    match state.winner() {
        Some(winner) => writeln!(w, "Winner: {winner}")?,
        None => writeln!(w, "{} to move", state.current_player())?,
    }
    writeln!(
        w,
        "Occupied: {:#018X} | Pieces: {:02} | Moves: {}",
        board.occupied(),
        board.occupied().count(),
        state.history().len()
    )?;
    w.flush()?;
    Ok(())
}

/// Map a symbol and its feedback to an ANSI-coloured cell string.
fn format_square(symbol: char, feedback: Option<SquareFeedback>) -> String {
    match feedback {
        Some(SquareFeedback::Origin) => format!("\x1b[42m {symbol} \x1b[0m"),
        Some(SquareFeedback::Destination) => format!("\x1b[44m {symbol} \x1b[0m"),
        Some(SquareFeedback::Capture) => format!("\x1b[41m {symbol} \x1b[0m"),
        None => format!(" {symbol} "),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::feedback::compute_feedback;
    use crate::position::Coord;

    fn render_to_string(engine: &GameEngine, feedback: &BoardFeedback) -> String {
        let mut buf = Vec::new();
        render_board(&mut buf, engine, feedback).expect("rendering to buffer should succeed");
        String::from_utf8(buf).expect("output should be valid UTF-8")
    }

    #[test]
    fn show_start_position_rows() {
        let output = render_to_string(&GameEngine::new(), &BoardFeedback::new());

        assert!(output.contains(" 8  r  n  b  q  k  b  n  r  8"));
        assert!(output.contains(" 2  P  P  P  P  P  P  P  P  2"));
        assert!(output.contains(" 4  ·  ·  ·  ·  ·  ·  ·  · "));
        assert!(output.contains("White to move"));
        assert!(output.contains("Pieces: 32"));
    }

    #[test]
    fn show_contains_file_labels() {
        let output = render_to_string(&GameEngine::new(), &BoardFeedback::new());

        assert!(
            output.contains("a  b  c  d  e  f  g  h"),
            "output should contain file labels"
        );
    }

    #[test]
    fn show_rank_eight_is_printed_first() {
        let output = render_to_string(&GameEngine::new(), &BoardFeedback::new());

        let eighth = output.find(" 8 ").expect("rank 8 label");
        let first = output.find(" 1 ").expect("rank 1 label");
        assert!(eighth < first);
    }

    #[test]
    fn show_hint_uses_colours() {
        let engine = GameEngine::new();
        let feedback = compute_feedback(&engine, Position::new(0, 6));

        let output = render_to_string(&engine, &feedback);

        assert!(output.contains("\x1b[42m N \x1b[0m"), "origin should be green");
        assert!(output.contains("\x1b[44m · \x1b[0m"), "destination should be blue");
        assert!(!output.contains("\x1b[41m"), "no captures from g1");
    }

    #[test]
    fn empty_feedback_has_no_ansi_codes() {
        let output = render_to_string(&GameEngine::new(), &BoardFeedback::new());

        assert!(
            !output.contains("\x1b[4"),
            "empty feedback should have no ANSI background codes"
        );
    }

    #[test]
    fn show_reflects_played_move() {
        let mut engine = GameEngine::new();
        engine
            .play(Coord::new(1, 4), Coord::new(3, 4))
            .expect("e2e4 is legal");

        let output = render_to_string(&engine, &BoardFeedback::new());

        assert!(output.contains(" 4  ·  ·  ·  ·  P  ·  ·  · "));
        assert!(output.contains("Black to move"));
    }

    #[test]
    fn notify_writes_a_line() {
        let mut display = TerminalDisplay::with_writer(Vec::new(), false);
        display.notify(&Notice::Quit).expect("writing to buffer");

        let output = String::from_utf8(display.into_inner()).expect("valid UTF-8");
        assert_eq!(output, "Game terminated by player.\n");
    }
}
