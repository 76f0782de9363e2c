//! # Four in a Row
//!
//! Tic-tac-toe grown to a 7x7 grid: a move wins by completing four identical
//! marks in a straight line, horizontally, vertically or diagonally.
//!
//! ## Modules
//!
//! - [`game`] — Core game logic: board, players, winning-line catalog, state machine
//! - [`ui`] — Terminal UI: mode menu and game view
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod ui;
