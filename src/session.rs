use std::fmt;

use thiserror::Error;

use crate::feedback::{BoardFeedback, compute_feedback};
use crate::game_logic::{GameEngine, MoveOutcome, PlayError};
use crate::game_state::RecordedMove;
use crate::notation::{Command, ParseError};
use crate::piece::Color;
use crate::position::Position;
use crate::{BoardDisplay, MoveSource};

/// Something the players should be told about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    Unparsed(ParseError),
    Rejected(PlayError),
    Played(MoveOutcome),
    /// A hint was asked for a square with no piece of the side to move.
    NothingToShow(Position),
    History(Vec<RecordedMove>),
    GameOver { winner: Color, moves: usize },
    Quit,
}

impl fmt::Display for Notice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notice::Unparsed(e) => write!(f, "❌ {e}"),
            Notice::Rejected(e) => write!(f, "❌ {e}"),
            Notice::Played(outcome) => {
                let played = &outcome.played;
                write!(
                    f,
                    "{} played {} {}{}",
                    played.player,
                    played.symbol(),
                    played.start,
                    played.end
                )?;
                if let Some(taken) = outcome.captured {
                    write!(f, "\n✓ {} captured {taken}!", played.player)?;
                }
                Ok(())
            }
            Notice::NothingToShow(position) => write!(f, "No piece of yours on {position}"),
            Notice::History(moves) => {
                if moves.is_empty() {
                    return write!(f, "No moves yet");
                }
                for (i, mv) in moves.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{:>3}. {} {} {}{}", i + 1, mv.player, mv.symbol(), mv.start, mv.end)?;
                }
                Ok(())
            }
            Notice::GameOver { winner, moves } => write!(
                f,
                "🎉 GAME OVER! {winner} wins, {}'s king has been captured after {moves} moves.",
                winner.opponent()
            ),
            Notice::Quit => write!(f, "Game terminated by player."),
        }
    }
}

/// Failure of one of the collaborators driving the game.
#[derive(Debug, Error)]
pub enum SessionError<I, O> {
    #[error("failed to read input: {0}")]
    Input(I),
    #[error("failed to update display: {0}")]
    Display(O),
}

/// Runs the turn loop until the game ends, the player quits or input runs
/// out.
///
/// Unparseable lines and illegal moves are reported and the same player is
/// asked again. Returns the winner, if the game was decided.
pub fn run_game<S, D>(
    engine: &mut GameEngine,
    source: &mut S,
    display: &mut D,
) -> Result<Option<Color>, SessionError<S::Error, D::Error>>
where
    S: MoveSource,
    D: BoardDisplay,
{
    display
        .show(engine, &BoardFeedback::new())
        .map_err(SessionError::Display)?;

    while !engine.state().is_game_over() {
        let player = engine.state().current_player();
        let Some(command) = source.next_command(player).map_err(SessionError::Input)? else {
            log::debug!("input exhausted");
            break;
        };

        let notice = match command {
            Err(e) => Notice::Unparsed(e),
            Ok(Command::Quit) => {
                display.notify(&Notice::Quit).map_err(SessionError::Display)?;
                break;
            }
            Ok(Command::History) => Notice::History(engine.state().history().to_vec()),
            Ok(Command::Hint(position)) => {
                let feedback = compute_feedback(&*engine, Some(position));
                if feedback.is_empty() {
                    Notice::NothingToShow(position)
                } else {
                    display
                        .show(engine, &feedback)
                        .map_err(SessionError::Display)?;
                    continue;
                }
            }
            Ok(Command::Move { start, end }) => match engine.play(start, end) {
                Ok(outcome) => {
                    display
                        .show(engine, &BoardFeedback::new())
                        .map_err(SessionError::Display)?;
                    Notice::Played(outcome)
                }
                Err(e) => Notice::Rejected(e),
            },
        };
        display.notify(&notice).map_err(SessionError::Display)?;
    }

    let winner = engine.state().winner();
    if let Some(winner) = winner {
        let moves = engine.state().history().len();
        display
            .notify(&Notice::GameOver { winner, moves })
            .map_err(SessionError::Display)?;
    }
    Ok(winner)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::terminal::ScriptedSource;
    use crate::validation::Rejection;

    /// Display that keeps every notice and counts redraws.
    #[derive(Default)]
    struct RecordingDisplay {
        redraws: usize,
        highlighted: Vec<BoardFeedback>,
        notices: Vec<Notice>,
    }

    impl BoardDisplay for RecordingDisplay {
        type Error = std::convert::Infallible;

        fn show(&mut self, _engine: &GameEngine, feedback: &BoardFeedback) -> Result<(), Self::Error> {
            self.redraws += 1;
            if !feedback.is_empty() {
                self.highlighted.push(feedback.clone());
            }
            Ok(())
        }

        fn notify(&mut self, notice: &Notice) -> Result<(), Self::Error> {
            self.notices.push(notice.clone());
            Ok(())
        }
    }

    fn run(script: &str) -> (GameEngine, RecordingDisplay, Option<Color>) {
        let mut engine = GameEngine::new();
        let mut source = ScriptedSource::new(script);
        let mut display = RecordingDisplay::default();
        let winner = run_game(&mut engine, &mut source, &mut display).expect("infallible display");
        (engine, display, winner)
    }

    #[test]
    fn test_exhausted_script_stops_without_winner() {
        let (engine, display, winner) = run("e2e4. e7e5.");

        assert_eq!(winner, None);
        assert_eq!(engine.state().history().len(), 2);
        // Initial draw plus one per applied move.
        assert_eq!(display.redraws, 3);
        assert!(matches!(display.notices[0], Notice::Played(_)));
    }

    #[test]
    fn test_bad_input_is_reported_and_same_player_retries() {
        let (engine, display, _) = run("zz. e7e5. e2e4.");

        assert!(matches!(display.notices[0], Notice::Unparsed(_)));
        assert_eq!(
            display.notices[1],
            Notice::Rejected(PlayError::Illegal(Rejection::NotYourPiece))
        );
        assert!(matches!(display.notices[2], Notice::Played(_)));
        assert_eq!(engine.state().current_player(), Color::Black);
    }

    #[test]
    fn test_quit_stops_the_loop() {
        let (engine, display, winner) = run("e2e4. quit. e7e5.");

        assert_eq!(winner, None);
        assert_eq!(engine.state().history().len(), 1);
        assert_eq!(display.notices.last(), Some(&Notice::Quit));
    }

    #[test]
    fn test_hint_redraws_with_highlights() {
        let (_, display, _) = run("hint g1. hint e7.");

        assert_eq!(display.highlighted.len(), 1);
        assert_eq!(display.highlighted[0].squares().len(), 3);
        assert_eq!(
            display.notices,
            vec![Notice::NothingToShow(Position::new(6, 4).unwrap())]
        );
    }

    #[test]
    fn test_history_lists_played_moves() {
        let (_, display, _) = run("e2e4. history.");

        let Some(Notice::History(moves)) = display.notices.last() else {
            panic!("expected history notice, got {:?}", display.notices);
        };
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].symbol(), 'P');
    }

    #[test]
    fn test_king_capture_ends_session() {
        // Queen reaches e8 via h5 and g6 once the f7 pawn has moved.
        let (engine, display, winner) = run("e2e3. f7f6. d1h5. g7g6. h5g6. a7a6. g6e8. b7b6.");

        assert_eq!(winner, Some(Color::White));
        assert_eq!(engine.state().history().len(), 7, "moves after the win are not read");
        assert_eq!(
            display.notices.last(),
            Some(&Notice::GameOver {
                winner: Color::White,
                moves: 7
            })
        );
    }

    #[test]
    fn test_notice_text() {
        let notice = Notice::Rejected(PlayError::Illegal(Rejection::OwnPieceCapture));
        assert_eq!(notice.to_string(), "❌ cannot capture own piece");

        let notice = Notice::GameOver {
            winner: Color::Black,
            moves: 12,
        };
        assert!(notice.to_string().contains("Black wins"));
        assert!(notice.to_string().contains("White's king"));
    }
}
