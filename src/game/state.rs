use std::fmt;

use serde::{Deserialize, Serialize};

/// Lifecycle of a game; `Won` and `Lost` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameStatus {
    Unstarted,
    Played,
    Won,
    Lost,
}

impl GameStatus {
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::Won | GameStatus::Lost)
    }

    /// Human-readable status line for front ends
    pub fn text(&self) -> &'static str {
        match self {
            GameStatus::Unstarted => "Ready",
            GameStatus::Played => "Playing",
            GameStatus::Won => "You won!",
            GameStatus::Lost => "You lost!",
        }
    }

    /// Compact numbering used by foreign callers
    pub fn code(&self) -> u8 {
        match self {
            GameStatus::Unstarted => 0,
            GameStatus::Played => 1,
            GameStatus::Won => 2,
            GameStatus::Lost => 3,
        }
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.text())
    }
}

/// What occupies a board cell
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellKind {
    Head,
    Body,
    Reward,
    Empty,
}

/// Summary of a single `World::step` call
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StepEvent {
    /// The world was not in play, nothing changed
    Inert,
    /// The snake advanced without growing
    Moved,
    /// The snake ate the reward and a new one was placed
    Ate,
    /// The head ran into the body; the game is lost
    Collided,
    /// The snake ate the reward and reached the win length
    Won,
}
