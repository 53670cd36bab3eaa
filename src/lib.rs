//! Wrap Snake - a snake game on a toroidal board
//!
//! This library provides:
//! - Core game logic (game module), free of I/O and timing
//! - Terminal front end: input mapping, TUI rendering and session metrics
//! - Execution modes (human play, headless autopilot)
//! - Optional browser bindings behind the `wasm` feature

pub mod game;

#[cfg(not(target_arch = "wasm32"))]
pub mod input;
#[cfg(not(target_arch = "wasm32"))]
pub mod metrics;
#[cfg(not(target_arch = "wasm32"))]
pub mod modes;
#[cfg(not(target_arch = "wasm32"))]
pub mod render;

#[cfg(feature = "wasm")]
pub mod wasm;
