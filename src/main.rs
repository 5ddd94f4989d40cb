use std::process::ExitCode;

use king_capture_chess::config::Config;
use king_capture_chess::game_logic::GameEngine;
use king_capture_chess::session::run_game;
use king_capture_chess::terminal::{ScriptedSource, StdinSource, TerminalDisplay};

fn main() -> ExitCode {
    let config = Config::from_args();
    env_logger::Builder::new()
        .filter_level(config.log_level)
        .parse_default_env()
        .init();
    log::info!("Console Chess");

    let board = match config.board() {
        Ok(board) => board,
        Err(e) => {
            log::error!("{e}");
            return ExitCode::FAILURE;
        }
    };
    let mut engine = GameEngine::from_board(board);
    let mut display = TerminalDisplay::new(config.clear_screen);

    let result = match &config.script {
        Some(script) => {
            let mut source = ScriptedSource::new(script);
            run_game(&mut engine, &mut source, &mut display).map_err(|e| e.to_string())
        }
        None => {
            let mut source = StdinSource::new();
            run_game(&mut engine, &mut source, &mut display).map_err(|e| e.to_string())
        }
    };

    match result {
        Ok(winner) => {
            log::info!("session finished, winner: {winner:?}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}
