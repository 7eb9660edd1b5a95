//! Visibility of actions and targets.
//!
//! A visibility row is active when its scene is the current scene and *any*
//! of its flags is raised. Rules, by contrast, need *all* of their flags.

use tracing::trace;
use tt_core::{Action, FlagSet, Scene, Story, Target};

use crate::error::{FictionError, FictionResult};

/// Actions the player can use in `scene` with the given flags.
///
/// Ordered by first appearance in the scene-action table.
pub fn available_actions(story: &Story, scene: &Scene, flags: &FlagSet) -> Vec<Action> {
    let mut actions: Vec<Action> = Vec::new();
    for row in story
        .scene_actions()
        .iter()
        .filter(|row| row.scene == scene.name && flags.contains_any(&row.flags))
    {
        if !actions.iter().any(|a| a.name == row.action) {
            actions.push(Action::new(row.action.as_str()));
        }
    }
    trace!(scene = %scene.name, count = actions.len(), "available actions");
    actions
}

/// Targets visible in `scene` with the given flags, joined with the target
/// table for their colours.
///
/// Ordered by first appearance in the scene-target table. A visible row
/// naming a target missing from the target table is an error.
pub fn available_targets(
    story: &Story,
    scene: &Scene,
    flags: &FlagSet,
) -> FictionResult<Vec<Target>> {
    let mut targets: Vec<Target> = Vec::new();
    for row in story
        .scene_targets()
        .iter()
        .filter(|row| row.scene == scene.name && flags.contains_any(&row.flags))
    {
        if targets.iter().any(|t| t.name == row.target) {
            continue;
        }
        let target = story
            .target(&row.target)
            .ok_or_else(|| FictionError::TargetNotFound {
                scene: scene.name.clone(),
                target: row.target.clone(),
            })?;
        targets.push(target.clone());
    }
    trace!(scene = %scene.name, count = targets.len(), "available targets");
    Ok(targets)
}
