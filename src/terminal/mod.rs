mod display;
mod input;
mod script;

pub use display::{DisplayError, TerminalDisplay};
pub use input::StdinSource;
pub use script::ScriptedSource;
