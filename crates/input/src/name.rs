use crate::types::GameCommand;

/// Longest name the prompt will hold; the engine applies the real limit.
const INPUT_CAPACITY: usize = 32;

/// Line buffer for the player name prompt.
#[derive(Debug, Clone, Default)]
pub struct NameInput {
    buf: String,
}

impl NameInput {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, ch: char) -> bool {
        if ch.is_control() || self.buf.chars().count() >= INPUT_CAPACITY {
            return false;
        }
        self.buf.push(ch);
        true
    }

    pub fn backspace(&mut self) {
        self.buf.pop();
    }

    pub fn as_str(&self) -> &str {
        &self.buf
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    /// Start command for the typed name. The buffer is kept so a rejected
    /// name can be edited.
    pub fn start_command(&self) -> GameCommand {
        GameCommand::Start {
            name: self.buf.clone(),
        }
    }
}
