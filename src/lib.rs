//! Deterministic grid Snake: a pure simulation engine plus a terminal UI.
//!
//! The engine (`game`, `snake`, `food`, `rng`) is a pure state-transition
//! core. Each tick maps one immutable [`game::GameState`] and an optional
//! requested direction to the next state; with a seeded generator the whole
//! game replays bit-for-bit. Everything else renders that state or routes
//! input into it.

pub mod config;
pub mod food;
pub mod game;
pub mod input;
pub mod renderer;
pub mod rng;
pub mod score;
pub mod snake;
pub mod terminal_runtime;
pub mod ui;
