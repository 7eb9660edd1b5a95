use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use crate::color::Color;
use crate::error::{StoryError, StoryResult};
use crate::flags::parse_flag_list;

/// The demo story shipped with tabletale.
pub const CAFE_STORY: &str = include_str!("../stories/cafe.json");

/// Story-wide settings: where the game starts and what is already true.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct StoryMeta {
    /// Human-readable title.
    #[serde(default)]
    pub title: String,
    /// Name of the scene the player starts in.
    pub first_scene: String,
    /// Flags raised when a new game starts.
    #[serde(default, deserialize_with = "flag_list")]
    pub initial_flags: Vec<String>,
    /// Text shown before the first prompt.
    #[serde(default)]
    pub intro: String,
}

impl StoryMeta {
    /// Create metadata for a story starting in `first_scene`.
    pub fn new(title: impl Into<String>, first_scene: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            first_scene: first_scene.into(),
            initial_flags: Vec::new(),
            intro: String::new(),
        }
    }
}

/// A location in the narrative graph.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Scene {
    /// Unique scene name.
    #[serde(rename = "scene")]
    pub name: String,
    /// Text shown when the player looks around.
    #[serde(default)]
    pub description: String,
}

impl Scene {
    /// Create a scene.
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: description.into(),
        }
    }
}

/// A noun the player can name as the object of a command.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Target {
    /// Unique target name.
    #[serde(rename = "target")]
    pub name: String,
    /// Colour used to highlight the name in messages.
    pub color: Color,
}

impl Target {
    /// Create a target.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Self {
            name: name.into(),
            color,
        }
    }
}

/// A verb the player can issue.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Action {
    /// The verb token.
    pub name: String,
}

impl Action {
    /// Create an action.
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Makes a target visible in a scene while any of its flags is raised.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SceneTarget {
    /// Scene the row applies to.
    pub scene: String,
    /// Target made visible.
    pub target: String,
    /// Alternative flags; any one of them unlocks the row.
    #[serde(rename = "flag", default, deserialize_with = "flag_list")]
    pub flags: Vec<String>,
}

/// Makes an action available in a scene while any of its flags is raised.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SceneAction {
    /// Scene the row applies to.
    pub scene: String,
    /// Action made available.
    pub action: String,
    /// Alternative flags; any one of them unlocks the row.
    #[serde(rename = "flag", default, deserialize_with = "flag_list")]
    pub flags: Vec<String>,
}

/// A row of the effect table: what happens when `action target` is issued in
/// `scene` while all `required_flags` are raised.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Rule {
    /// Scene the rule applies to.
    pub scene: String,
    /// Verb that triggers the rule.
    pub action: String,
    /// Object of the verb.
    pub target: String,
    /// Flags that must all be raised. An empty list never matches.
    #[serde(rename = "flag", default, deserialize_with = "flag_list")]
    pub required_flags: Vec<String>,
    /// Narration shown when the rule fires.
    #[serde(rename = "text", default)]
    pub message: String,
    /// Scene to move to, if any.
    #[serde(default, deserialize_with = "optional_name")]
    pub new_scene: Option<String>,
    /// Flags lowered when the rule fires.
    #[serde(rename = "flag_off", default, deserialize_with = "flag_list")]
    pub flags_to_clear: Vec<String>,
    /// Flags raised when the rule fires.
    #[serde(rename = "flag_on", default, deserialize_with = "flag_list")]
    pub flags_to_set: Vec<String>,
}

impl Rule {
    /// Create a rule with no effects besides its message.
    pub fn new(
        scene: impl Into<String>,
        action: impl Into<String>,
        target: impl Into<String>,
        required_flags: &str,
        message: impl Into<String>,
    ) -> Self {
        Self {
            scene: scene.into(),
            action: action.into(),
            target: target.into(),
            required_flags: parse_flag_list(required_flags),
            message: message.into(),
            new_scene: None,
            flags_to_clear: Vec::new(),
            flags_to_set: Vec::new(),
        }
    }

    /// Move the player to another scene when the rule fires.
    pub fn with_new_scene(mut self, scene: impl Into<String>) -> Self {
        self.new_scene = Some(scene.into());
        self
    }

    /// Lower these comma-separated flags when the rule fires.
    pub fn with_clear(mut self, flags: &str) -> Self {
        self.flags_to_clear = parse_flag_list(flags);
        self
    }

    /// Raise these comma-separated flags when the rule fires.
    pub fn with_set(mut self, flags: &str) -> Self {
        self.flags_to_set = parse_flag_list(flags);
        self
    }
}

/// Accepts `"A,B"`, `["A", "B"]`, or `null` and yields the flag names.
#[derive(Deserialize)]
#[serde(untagged)]
enum FlagField {
    Text(String),
    List(Vec<String>),
}

fn flag_list<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<String>, D::Error> {
    let field = Option::<FlagField>::deserialize(deserializer)?;
    Ok(match field {
        None => Vec::new(),
        Some(FlagField::Text(text)) => parse_flag_list(&text),
        Some(FlagField::List(items)) => items.iter().flat_map(|s| parse_flag_list(s)).collect(),
    })
}

fn optional_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    let field = Option::<String>::deserialize(deserializer)?;
    Ok(field
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty()))
}

/// On-disk shape of a story file.
#[derive(Deserialize)]
struct StoryFile {
    meta: StoryMeta,
    #[serde(default)]
    targets: Vec<Target>,
    #[serde(default)]
    scenes: Vec<Scene>,
    #[serde(default)]
    scene_targets: Vec<SceneTarget>,
    #[serde(default)]
    scene_actions: Vec<SceneAction>,
    #[serde(default)]
    rules: Vec<Rule>,
}

/// The read-only reference tables of a game.
///
/// Row order is kept for every table; for [`Story::rules`] it is the match
/// priority. Scene and target lookups by name resolve to the first row with
/// that name.
#[derive(Debug, Clone)]
pub struct Story {
    /// Story-wide settings.
    pub meta: StoryMeta,
    targets: Vec<Target>,
    scenes: Vec<Scene>,
    scene_targets: Vec<SceneTarget>,
    scene_actions: Vec<SceneAction>,
    rules: Vec<Rule>,

    // Indexes
    scene_by_name: HashMap<String, usize>,
    target_by_name: HashMap<String, usize>,
}

impl Story {
    /// Create an empty story.
    pub fn new(meta: StoryMeta) -> Self {
        Self {
            meta,
            targets: Vec::new(),
            scenes: Vec::new(),
            scene_targets: Vec::new(),
            scene_actions: Vec::new(),
            rules: Vec::new(),
            scene_by_name: HashMap::new(),
            target_by_name: HashMap::new(),
        }
    }

    /// Parse a story from its JSON representation.
    pub fn from_json(source: &str) -> StoryResult<Self> {
        let file: StoryFile = serde_json::from_str(source)?;
        let mut story = Story::new(file.meta);
        for scene in file.scenes {
            story.add_scene(scene);
        }
        for target in file.targets {
            story.add_target(target);
        }
        story.scene_targets = file.scene_targets;
        story.scene_actions = file.scene_actions;
        story.rules = file.rules;
        Ok(story)
    }

    /// Read and parse a story file.
    pub fn load(path: &Path) -> StoryResult<Self> {
        let source = std::fs::read_to_string(path).map_err(|source| StoryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&source)
    }

    /// The bundled demo story.
    pub fn cafe() -> StoryResult<Self> {
        Self::from_json(CAFE_STORY)
    }

    // -----------------------------------------------------------------------
    // Table construction
    // -----------------------------------------------------------------------

    /// Append a scene row.
    pub fn add_scene(&mut self, scene: Scene) {
        self.scene_by_name
            .entry(scene.name.clone())
            .or_insert(self.scenes.len());
        self.scenes.push(scene);
    }

    /// Append a target row.
    pub fn add_target(&mut self, target: Target) {
        self.target_by_name
            .entry(target.name.clone())
            .or_insert(self.targets.len());
        self.targets.push(target);
    }

    /// Append a scene-target visibility row.
    pub fn add_scene_target(&mut self, scene: &str, target: &str, flags: &str) {
        self.scene_targets.push(SceneTarget {
            scene: scene.to_string(),
            target: target.to_string(),
            flags: parse_flag_list(flags),
        });
    }

    /// Append a scene-action visibility row.
    pub fn add_scene_action(&mut self, scene: &str, action: &str, flags: &str) {
        self.scene_actions.push(SceneAction {
            scene: scene.to_string(),
            action: action.to_string(),
            flags: parse_flag_list(flags),
        });
    }

    /// Append a rule. Rules added earlier take priority.
    pub fn add_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// Look up a scene by name.
    pub fn scene(&self, name: &str) -> Option<&Scene> {
        self.scene_by_name.get(name).map(|&i| &self.scenes[i])
    }

    /// Look up a target by name.
    pub fn target(&self, name: &str) -> Option<&Target> {
        self.target_by_name.get(name).map(|&i| &self.targets[i])
    }

    /// All scene rows in table order.
    pub fn scenes(&self) -> &[Scene] {
        &self.scenes
    }

    /// All target rows in table order.
    pub fn targets(&self) -> &[Target] {
        &self.targets
    }

    /// All scene-target visibility rows in table order.
    pub fn scene_targets(&self) -> &[SceneTarget] {
        &self.scene_targets
    }

    /// All scene-action visibility rows in table order.
    pub fn scene_actions(&self) -> &[SceneAction] {
        &self.scene_actions
    }

    /// All rules in priority order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }
}
