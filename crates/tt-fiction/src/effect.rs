//! Resolved commands and their effect on game state.

use tracing::debug;
use tt_core::{Rule, Story};

use crate::error::{FictionError, FictionResult};
use crate::state::GameState;

/// The effect of a matched rule, ready to apply.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    /// Narration to show the player.
    pub message: String,
    /// Scene to move to, if the rule changes scene.
    pub new_scene: Option<String>,
    /// Flags to lower.
    pub flags_to_clear: Vec<String>,
    /// Flags to raise. Raising wins over lowering the same flag.
    pub flags_to_set: Vec<String>,
}

impl Command {
    /// Take the effect of a rule.
    pub fn from_rule(rule: &Rule) -> Self {
        Self {
            message: rule.message.clone(),
            new_scene: rule.new_scene.clone(),
            flags_to_clear: rule.flags_to_clear.clone(),
            flags_to_set: rule.flags_to_set.clone(),
        }
    }

    /// Build the snapshot that follows `state` once this command is applied.
    ///
    /// `state` is left untouched. Fails if the new scene does not exist or
    /// the recomputed availability hits a broken visibility row.
    pub fn apply(&self, story: &Story, state: &GameState) -> FictionResult<GameState> {
        let flags = state.flags().apply(&self.flags_to_clear, &self.flags_to_set);
        let scene = match &self.new_scene {
            Some(name) => story
                .scene(name)
                .cloned()
                .ok_or_else(|| FictionError::SceneNotFound(name.clone()))?,
            None => state.scene().clone(),
        };
        debug!(
            from = %state.scene().name,
            to = %scene.name,
            before = %state.flags(),
            after = %flags,
            "applying command"
        );
        GameState::new(story, scene, flags)
    }
}

impl From<&Rule> for Command {
    fn from(rule: &Rule) -> Self {
        Self::from_rule(rule)
    }
}
