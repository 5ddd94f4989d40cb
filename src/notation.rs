//! Text commands typed by a player.
//!
//! Moves may be given algebraically (`e2 e4`, `e2,e4`, `e2e4`) or as
//! 0-indexed `row,col` pairs (`1,4 3,4`, `1,4,3,4`). Numeric coordinates are
//! only checked for syntax: whether they lie on the board is for the
//! legality engine to decide. Values beyond the `i8` range saturate, so they
//! still arrive off the board.
//!
//! Other commands: `hint <square>`, `history`, and `quit` (or `q`, `exit`).

use shakmaty::Square;
use thiserror::Error;

use crate::position::{Coord, Position};

/// A parsed line of player input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Move { start: Coord, end: Coord },
    /// Show where the piece on this square can go.
    Hint(Position),
    History,
    Quit,
}

/// Error when a line cannot be understood.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("could not parse '{0}', try 'e2 e4' or '1,4 3,4'")]
pub struct ParseError(pub String);

/// Parse one line of input into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, ParseError> {
    let input = line.trim().to_ascii_lowercase();
    let error = || ParseError(line.trim().to_string());

    match input.as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "history" => return Ok(Command::History),
        _ => {}
    }

    if let Some(("hint", square)) = input.split_once(char::is_whitespace) {
        return parse_square(square.trim())
            .map(Command::Hint)
            .ok_or_else(error);
    }

    parse_move(&input).ok_or_else(error)
}

/// Parse a move into its unchecked `(start, end)` pair.
pub fn parse_move(input: &str) -> Option<Command> {
    let parts: Vec<&str> = input
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|part| !part.is_empty())
        .collect();

    let (start, end) = match parts.as_slice() {
        // e2e4
        [joined] if joined.len() == 4 && joined.is_ascii() => {
            let (from, to) = joined.split_at(2);
            (algebraic(from)?, algebraic(to)?)
        }
        // e2 e4 | e2,e4
        [from, to] if from.len() == 2 && to.len() == 2 => {
            match (algebraic(from), algebraic(to)) {
                (Some(start), Some(end)) => (start, end),
                _ => (numeric(from, "")?, numeric(to, "")?),
            }
        }
        // 1,4 3,4 | 1,4,3,4
        [r1, c1, r2, c2] => (numeric(r1, c1)?, numeric(r2, c2)?),
        _ => return None,
    };
    Some(Command::Move { start, end })
}

fn parse_square(token: &str) -> Option<Position> {
    token.parse::<Square>().ok().map(Position::from)
}

fn algebraic(token: &str) -> Option<Coord> {
    parse_square(token).map(Coord::from)
}

/// `row` and `col` as integers; a single token like `"14"` is read digit by
/// digit when `col` is empty.
fn numeric(row: &str, col: &str) -> Option<Coord> {
    if col.is_empty() {
        let mut digits = row.chars();
        let (r, c) = (digits.next()?.to_digit(10)?, digits.next()?.to_digit(10)?);
        return Some(Coord::new(r as i8, c as i8));
    }
    Some(Coord::new(saturating(row)?, saturating(col)?))
}

fn saturating(token: &str) -> Option<i8> {
    let value: i64 = token.parse().ok()?;
    Some(value.clamp(i8::MIN.into(), i8::MAX.into()) as i8)
}
