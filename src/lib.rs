//! # Connect Four
//!
//! A two-player Connect Four engine played over line-based text input, with
//! board sizes from 5×5 to 9×9 and sessions of several games with a running
//! score.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, move validation, win detection, engine
//! - [`session`] — Multi-game session, score keeping, and the text-driven controller
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod session;
