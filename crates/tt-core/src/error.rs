use std::path::PathBuf;

/// Alias for `Result<T, StoryError>`.
pub type StoryResult<T> = Result<T, StoryError>;

/// Errors that can occur when loading a story.
#[derive(Debug, thiserror::Error)]
pub enum StoryError {
    /// The story file could not be read.
    #[error("cannot read {path}: {source}")]
    Io {
        /// The file that failed to load.
        path: PathBuf,
        /// The underlying I/O error.
        source: std::io::Error,
    },

    /// The story file is not valid JSON or does not have the story shape.
    #[error("invalid story data: {0}")]
    Json(#[from] serde_json::Error),
}
