use std::io::{self, BufRead, Write};

use crate::MoveSource;
use crate::notation::{Command, ParseError, parse_command};
use crate::piece::Color;

/// Prompts for and reads one command per line.
#[derive(Debug)]
pub struct StdinSource<R: BufRead = io::StdinLock<'static>, W: Write = io::Stdout> {
    input: R,
    prompt: W,
}

impl StdinSource {
    pub fn new() -> Self {
        Self::with_io(io::stdin().lock(), io::stdout())
    }
}

impl Default for StdinSource {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: BufRead, W: Write> StdinSource<R, W> {
    pub fn with_io(input: R, prompt: W) -> Self {
        Self { input, prompt }
    }
}

impl<R: BufRead, W: Write> MoveSource for StdinSource<R, W> {
    type Error = io::Error;

    fn next_command(
        &mut self,
        player: Color,
    ) -> Result<Option<Result<Command, ParseError>>, Self::Error> {
        loop {
            write!(self.prompt, "{player}'s turn. Enter move (e.g. 'e2 e4' or '1,4 3,4'): ")?;
            self.prompt.flush()?;

            let mut line = String::new();
            if self.input.read_line(&mut line)? == 0 {
                return Ok(None);
            }
            // Blank lines just prompt again.
            if !line.trim().is_empty() {
                return Ok(Some(parse_command(&line)));
            }
        }
    }
}
