//! Player commands and their text form.

use crate::core::CardId;

/// Something the player (or the display loop) asks the session to do.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    /// Turn a card over.
    Select(CardId),
    /// Deal a new game.
    NewGame,
    /// Pause or resume.
    TogglePause,
    /// Let time pass: fire timers, expire notices.
    Tick,
    /// Leave.
    Quit,
}

impl Command {
    /// Parse a line typed at the terminal.
    ///
    /// Cards are numbered from 1 on screen; `"5"` selects `CardId(4)`.
    #[must_use]
    pub fn parse(line: &str) -> Option<Self> {
        let word = line.trim().to_ascii_lowercase();
        match word.as_str() {
            "n" | "new" => Some(Command::NewGame),
            "p" | "pause" | "resume" => Some(Command::TogglePause),
            "q" | "quit" | "exit" => Some(Command::Quit),
            "" => Some(Command::Tick),
            other => {
                let position: u16 = other.parse().ok()?;
                position.checked_sub(1).map(|i| Command::Select(CardId::new(i)))
            }
        }
    }
}
