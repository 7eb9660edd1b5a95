//! Text adventure engine for tabletale.
//!
//! Drives a player through a story by interpreting two-word commands
//! (`take bagel`) against the story's rule table. Each accepted command
//! produces a fresh [`GameState`] snapshot; the previous one is never
//! mutated.

/// Which actions and targets the player can currently use.
pub mod availability;
/// Session configuration.
pub mod config;
/// Message decoration and help text.
pub mod display;
/// Resolved commands and their effect on game state.
pub mod effect;
/// Error types for the fiction engine.
pub mod error;
/// Player input parsing.
pub mod parser;
/// Rule lookup by scene, action, target, and flags.
pub mod rules;
/// Interactive fiction session management.
pub mod session;
/// Immutable game state snapshots.
pub mod state;

pub use availability::{available_actions, available_targets};
pub use config::SessionConfig;
pub use display::{decorate, help_text};
pub use effect::Command;
pub use error::{FictionError, FictionResult};
pub use parser::{ParsedCommand, PlayerInput, parse_command, parse_input};
pub use rules::{RuleBook, resolve_linear};
pub use session::{FictionSession, Rejection, Reply, Turn, step};
pub use state::GameState;

#[cfg(test)]
mod test_support;
