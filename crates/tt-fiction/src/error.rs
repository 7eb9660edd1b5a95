//! Error types for the fiction engine.
//!
//! Player mistakes are not errors: they come back as a
//! [`Rejection`](crate::session::Rejection). Everything here means the story
//! data is inconsistent and the game cannot continue.

use thiserror::Error;

/// Result type for fiction operations.
pub type FictionResult<T> = Result<T, FictionError>;

/// Errors that can occur during interactive fiction.
#[derive(Debug, Error)]
pub enum FictionError {
    /// A rule or the session configuration names a scene that does not exist.
    #[error("scene not found: \"{0}\"")]
    SceneNotFound(String),

    /// A scene-target row names a target that does not exist.
    #[error("scene \"{scene}\" shows unknown target \"{target}\"")]
    TargetNotFound {
        /// Scene whose visibility row is broken.
        scene: String,
        /// The unknown target name.
        target: String,
    },
}
