//! Core types for tabletale: the story tables and the story-flag set.
//!
//! A [`Story`] is the read-only reference data of a text adventure: scenes,
//! targets, the scene visibility tables, and the ordered effect rules. It is
//! loaded once (usually from JSON) and never mutated while a game runs.

/// Display colours for targets.
pub mod color;
/// Error types used throughout the crate.
pub mod error;
/// Story flags and flag-list parsing.
pub mod flags;
/// The story tables and their indexes.
pub mod story;
/// Consistency checks over a loaded story.
pub mod validate;

/// Re-export colour types.
pub use color::{Color, RESET};
/// Re-export error types.
pub use error::{StoryError, StoryResult};
/// Re-export flag types.
pub use flags::{FlagSet, parse_flag_list};
/// Re-export story model types.
pub use story::{Action, Rule, Scene, SceneAction, SceneTarget, Story, StoryMeta, Target};
/// Re-export validation types.
pub use validate::{ValidationIssue, validate_story};
