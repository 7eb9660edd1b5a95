//! Interactive fiction session management.
//!
//! [`step`] is the whole game transition: classify the input, check the
//! action and target against the current snapshot, resolve a rule, and build
//! the next snapshot. [`FictionSession`] keeps the current snapshot and swaps
//! it for the next one after every accepted command.

use tracing::debug;
use tt_core::Story;

use crate::config::SessionConfig;
use crate::display::{decorate, help_text};
use crate::effect::Command;
use crate::error::FictionResult;
use crate::parser::{PlayerInput, parse_input};
use crate::rules::RuleBook;
use crate::state::GameState;

/// Why a line of input was turned down. The game state does not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Rejection {
    /// The input was blank or its verb is not available here.
    UnrecognizedAction,
    /// No target was given, or it is not visible here.
    MissingTarget,
    /// Action and target are fine but no rule matches the current flags.
    NoMatchingRule,
}

impl Rejection {
    /// The fixed message shown to the player.
    pub fn message(&self) -> &'static str {
        match self {
            Self::UnrecognizedAction => {
                "You can't do that! Type \"?\" to see the available actions."
            }
            Self::MissingTarget => {
                "There is no such target! Type \"?\" to see the available targets."
            }
            Self::NoMatchingRule => "You can't do that!",
        }
    }
}

/// What the game says back after one line of input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Reply {
    /// Listing of built-ins, actions, and targets.
    Help(String),
    /// Description of the current scene.
    LookAround(String),
    /// Narration from a matched rule.
    Narration(String),
    /// The input was turned down.
    Rejected(Rejection),
    /// The player asked to leave.
    Quit,
}

impl Reply {
    /// The undecorated reply text.
    pub fn text(&self) -> &str {
        match self {
            Self::Help(text) | Self::LookAround(text) | Self::Narration(text) => text,
            Self::Rejected(rejection) => rejection.message(),
            Self::Quit => "",
        }
    }

    /// True for the quit signal.
    pub fn is_quit(&self) -> bool {
        matches!(self, Self::Quit)
    }
}

/// The result of one game step.
#[derive(Debug, Clone)]
pub struct Turn {
    /// The snapshot to continue from, or `None` when the state is unchanged.
    pub next: Option<GameState>,
    /// What to show the player.
    pub reply: Reply,
}

impl Turn {
    fn unchanged(reply: Reply) -> Self {
        Self { next: None, reply }
    }
}

/// Run one game step against `state`.
///
/// Player mistakes come back as [`Reply::Rejected`] with no new state. An
/// error means the story tables are inconsistent.
pub fn step(
    story: &Story,
    rules: &RuleBook,
    state: &GameState,
    input: &str,
) -> FictionResult<Turn> {
    let command = match parse_input(input) {
        PlayerInput::Quit => return Ok(Turn::unchanged(Reply::Quit)),
        PlayerInput::Help => return Ok(Turn::unchanged(Reply::Help(help_text(state)))),
        PlayerInput::LookAround => {
            return Ok(Turn::unchanged(Reply::LookAround(
                state.scene().description.clone(),
            )));
        }
        PlayerInput::Malformed => {
            return Ok(Turn::unchanged(Reply::Rejected(Rejection::UnrecognizedAction)));
        }
        PlayerInput::Command(command) => command,
    };

    if !state.has_action(&command.action) {
        return Ok(Turn::unchanged(Reply::Rejected(Rejection::UnrecognizedAction)));
    }
    let Some(target) = command.target.as_deref() else {
        return Ok(Turn::unchanged(Reply::Rejected(Rejection::MissingTarget)));
    };
    if !state.has_target(target) {
        return Ok(Turn::unchanged(Reply::Rejected(Rejection::MissingTarget)));
    }

    let Some(rule) = rules.resolve(&state.scene().name, &command.action, target, state.flags())
    else {
        return Ok(Turn::unchanged(Reply::Rejected(Rejection::NoMatchingRule)));
    };

    let effect = Command::from_rule(rule);
    let next = effect.apply(story, state)?;
    Ok(Turn {
        next: Some(next),
        reply: Reply::Narration(effect.message),
    })
}

/// An interactive fiction session.
pub struct FictionSession {
    /// The story being played.
    story: Story,
    /// The story's rules, indexed.
    rules: RuleBook,
    /// Session settings.
    config: SessionConfig,
    /// The current snapshot.
    state: GameState,
    /// Accepted commands so far.
    turns: u32,
}

impl FictionSession {
    /// Create a new fiction session with default settings.
    pub fn new(story: Story) -> FictionResult<Self> {
        Self::with_config(story, SessionConfig::default())
    }

    /// Create a session with explicit settings.
    pub fn with_config(story: Story, config: SessionConfig) -> FictionResult<Self> {
        let state = GameState::initial(&story, &config)?;
        let rules = RuleBook::new(story.rules());
        debug!(
            title = %story.meta.title,
            scene = %state.scene().name,
            flags = %state.flags(),
            rules = rules.len(),
            "session started"
        );
        Ok(Self {
            story,
            rules,
            config,
            state,
            turns: 0,
        })
    }

    /// Get the current snapshot.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Number of commands that changed the game state.
    pub fn turns(&self) -> u32 {
        self.turns
    }

    /// Process a line of player input and return the reply.
    ///
    /// The current snapshot is replaced only when a rule fired and the next
    /// snapshot was built in full.
    pub fn process(&mut self, input: &str) -> FictionResult<Reply> {
        let turn = step(&self.story, &self.rules, &self.state, input)?;
        if let Some(next) = turn.next {
            self.state = next;
            self.turns += 1;
        }
        Ok(turn.reply)
    }

    /// Render a reply for display against the current snapshot.
    ///
    /// Rejections are shown as-is; everything else gets target highlighting
    /// when colour is enabled.
    pub fn render(&self, reply: &Reply) -> String {
        match reply {
            Reply::Rejected(_) | Reply::Quit => reply.text().to_string(),
            _ => self.highlight(reply.text()),
        }
    }

    /// The story's intro text, highlighted.
    pub fn intro(&self) -> String {
        self.highlight(&self.story.meta.intro)
    }

    fn highlight(&self, text: &str) -> String {
        if self.config.color {
            decorate(text, self.state.targets())
        } else {
            text.to_string()
        }
    }
}
