use std::collections::VecDeque;
use std::convert::Infallible;

use crate::MoveSource;
use crate::notation::{Command, ParseError, parse_command};
use crate::piece::Color;

/// A move source replaying a fixed script.
///
/// Format:
/// - Commands are the same text a player would type (`e2e4`, `e2 e4`,
///   `1,4 3,4`, `hint g1`, `history`, `quit`)
/// - Periods, semicolons or newlines separate commands
///
/// Examples:
/// - `"e2e4. e7e5."` - two moves
/// - `"hint g1; g1f3"` - show knight destinations, then move it
#[derive(Debug, Clone, Default)]
pub struct ScriptedSource {
    pending: VecDeque<String>,
}

impl ScriptedSource {
    pub fn new(script: &str) -> Self {
        let mut source = Self::default();
        source.push_script(script);
        source
    }

    /// Queue additional commands after those already pending.
    pub fn push_script(&mut self, script: &str) {
        self.pending.extend(
            script
                .split(['.', ';', '\n'])
                .map(str::trim)
                .filter(|command| !command.is_empty())
                .map(str::to_string),
        );
    }

    /// Number of commands not yet read.
    #[inline]
    pub fn remaining(&self) -> usize {
        self.pending.len()
    }
}

impl MoveSource for ScriptedSource {
    type Error = Infallible;

    fn next_command(
        &mut self,
        player: Color,
    ) -> Result<Option<Result<Command, ParseError>>, Self::Error> {
        Ok(self.pending.pop_front().map(|line| {
            log::debug!("{player} script: {line}");
            parse_command(&line)
        }))
    }
}
