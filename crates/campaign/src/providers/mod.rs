//! Destination providers: where the linker's choices come from.
//!
//! Interactive sessions answer through a console-backed provider living in the
//! client; tests and batch tools use [`ScriptedProvider`].

mod scripted;

pub use scripted::ScriptedProvider;

use game_core::{ErrorSeverity, GameError, MapId, Position};

/// Errors raised while waiting for an external choice.
#[derive(Debug, thiserror::Error)]
pub enum ChoiceError {
    #[error("input closed before a choice was made")]
    Closed,

    #[error("scripted choices exhausted")]
    Exhausted,

    #[error("input error: {0}")]
    Io(#[from] std::io::Error),
}

impl GameError for ChoiceError {
    fn severity(&self) -> ErrorSeverity {
        match self {
            ChoiceError::Closed | ChoiceError::Exhausted => ErrorSeverity::Recoverable,
            ChoiceError::Io(_) => ErrorSeverity::Fatal,
        }
    }

    fn error_code(&self) -> &'static str {
        match self {
            ChoiceError::Closed => "CHOICE_INPUT_CLOSED",
            ChoiceError::Exhausted => "CHOICE_EXHAUSTED",
            ChoiceError::Io(_) => "CHOICE_IO",
        }
    }
}

/// Question put to a provider for one unresolved door.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DestinationPrompt {
    pub map: MapId,
    pub position: Position,
    /// Highest acceptable answer; `0` means terminal.
    pub max: u32,
}

/// Source of map identities for the linker.
///
/// Answers are raw integers; range checking and re-prompting belong to the
/// caller, so a provider only reports what it was told.
pub trait DestinationProvider {
    /// Destination for a door: `0` for terminal, otherwise a map identity.
    fn choose_destination(&mut self, prompt: &DestinationPrompt) -> Result<i64, ChoiceError>;

    /// Starting map of a new campaign, expected in `[1, max]`.
    fn choose_start(&mut self, max: u32) -> Result<i64, ChoiceError>;

    /// Called after an answer was rejected as out of range.
    fn rejected(&mut self, _value: i64, _min: u32, _max: u32) {}
}
