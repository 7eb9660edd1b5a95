//! Immutable game state snapshots.

use tt_core::{Action, FlagSet, Scene, Story, Target};

use crate::availability::{available_actions, available_targets};
use crate::config::SessionConfig;
use crate::error::{FictionError, FictionResult};

/// Everything that can change during a game, at one point in time.
///
/// A snapshot is never mutated; applying a command builds a new one. The
/// available actions and targets are derived from the scene and flags when
/// the snapshot is built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    scene: Scene,
    flags: FlagSet,
    actions: Vec<Action>,
    targets: Vec<Target>,
}

impl GameState {
    /// Build a snapshot for `scene` and `flags`, computing availability.
    pub fn new(story: &Story, scene: Scene, flags: FlagSet) -> FictionResult<Self> {
        let actions = available_actions(story, &scene, &flags);
        let targets = available_targets(story, &scene, &flags)?;
        Ok(Self {
            scene,
            flags,
            actions,
            targets,
        })
    }

    /// The opening snapshot of a game.
    ///
    /// Starts in the configured scene (or the story's first scene) with the
    /// story's initial flags plus any configured extras.
    pub fn initial(story: &Story, config: &SessionConfig) -> FictionResult<Self> {
        let name = config
            .start_scene
            .as_deref()
            .unwrap_or(&story.meta.first_scene);
        let scene = story
            .scene(name)
            .cloned()
            .ok_or_else(|| FictionError::SceneNotFound(name.to_string()))?;
        let flags: FlagSet = story
            .meta
            .initial_flags
            .iter()
            .chain(&config.extra_flags)
            .map(String::as_str)
            .collect();
        Self::new(story, scene, flags)
    }

    /// The current scene.
    pub fn scene(&self) -> &Scene {
        &self.scene
    }

    /// The raised flags.
    pub fn flags(&self) -> &FlagSet {
        &self.flags
    }

    /// Actions the player can use right now.
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }

    /// Targets the player can name right now.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// Check whether an action is available.
    pub fn has_action(&self, name: &str) -> bool {
        self.actions.iter().any(|a| a.name == name)
    }

    /// Check whether a target is visible.
    pub fn has_target(&self, name: &str) -> bool {
        self.targets.iter().any(|t| t.name == name)
    }
}
