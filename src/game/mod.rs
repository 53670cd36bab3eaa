//! Core game logic module for the toroidal snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! A front end owns a [`World`], forwards input to it and drives it with ticks.

pub mod action;
pub mod board;
pub mod config;
pub mod error;
pub mod state;
pub mod world;

// Re-export commonly used types
pub use action::Direction;
pub use board::Board;
pub use config::WorldConfig;
pub use error::WorldError;
pub use state::{CellKind, GameStatus, StepEvent};
pub use world::World;
