//! # Connect Four
//!
//! Two-player Connect Four on a 6×7 board, played in the terminal with the
//! keyboard or the mouse. The UI is built with Ratatui on top of Crossterm.
//!
//! ## Modules
//!
//! - [`game`]: Core game logic: board, player markers, state machine
//! - [`ui`]: Terminal UI: game view, board widget, input loop
//! - [`config`]: TOML configuration loading and validation
//! - [`logging`]: File-backed tracing setup
//! - [`error`]: Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod logging;
pub mod ui;
