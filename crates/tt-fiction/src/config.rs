//! Configuration for a fiction session.

/// Configuration for a fiction session.
///
/// Story metadata supplies the defaults; these settings override or extend
/// them for a single run.
#[derive(Debug, Clone)]
pub struct SessionConfig {
    /// Scene to start in instead of the story's first scene.
    pub start_scene: Option<String>,
    /// Flags raised in addition to the story's initial flags.
    pub extra_flags: Vec<String>,
    /// Whether target names are highlighted in messages.
    pub color: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            start_scene: None,
            extra_flags: Vec::new(),
            color: true,
        }
    }
}

impl SessionConfig {
    /// Start in a specific scene.
    pub fn with_start_scene(mut self, scene: impl Into<String>) -> Self {
        self.start_scene = Some(scene.into());
        self
    }

    /// Raise additional flags at the start of the game.
    pub fn with_flags<I, S>(mut self, flags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.extra_flags.extend(flags.into_iter().map(Into::into));
        self
    }

    /// Enable or disable target highlighting.
    pub fn with_color(mut self, color: bool) -> Self {
        self.color = color;
        self
    }
}
