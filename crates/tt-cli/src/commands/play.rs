//! Console loop for playing a story.

use std::io::{self, BufRead, Write};
use std::path::Path;

use colored::Colorize;
use tracing::{debug, warn};
use tt_core::validate_story;
use tt_fiction::{FictionSession, Reply, SessionConfig};

/// Prompt shown before each line of input.
const PROMPT: &str = ">>> ";

/// Command-line overrides for a play session.
pub struct PlayOptions {
    /// Start scene override.
    pub scene: Option<String>,
    /// Extra flags to raise.
    pub flags: Vec<String>,
    /// Highlight targets and style messages.
    pub color: bool,
}

pub fn run(file: &Path, options: PlayOptions) -> Result<(), String> {
    let story = super::load_story(file)?;
    for issue in validate_story(&story).iter().filter(|i| i.is_error) {
        warn!("{issue}");
    }

    if !options.color {
        colored::control::set_override(false);
    }

    let mut config = SessionConfig::default()
        .with_flags(options.flags)
        .with_color(options.color);
    if let Some(scene) = options.scene {
        config = config.with_start_scene(scene);
    }

    let mut session = FictionSession::with_config(story, config).map_err(|e| e.to_string())?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    play_loop(&mut session, stdin.lock(), stdout.lock())
}

/// Read lines until `exit` or end of input, writing one reply per line.
fn play_loop<R: BufRead, W: Write>(
    session: &mut FictionSession,
    mut input: R,
    mut output: W,
) -> Result<(), String> {
    let io_err = |e: io::Error| format!("console error: {e}");

    writeln!(output, "{}", session.intro()).map_err(io_err)?;

    loop {
        write!(output, "{PROMPT}").map_err(io_err)?;
        output.flush().map_err(io_err)?;

        // Undecodable bytes become U+FFFD and get rejected like any other typo.
        let mut buf = Vec::new();
        if input.read_until(b'\n', &mut buf).map_err(io_err)? == 0 {
            writeln!(output).map_err(io_err)?;
            break;
        }
        let line = String::from_utf8_lossy(&buf);

        let reply = session.process(&line).map_err(|e| e.to_string())?;
        if reply.is_quit() {
            break;
        }

        let text = session.render(&reply);
        let written = match reply {
            Reply::Rejected(_) => writeln!(output, "{}", text.yellow()),
            _ => writeln!(output, "{text}"),
        };
        written.map_err(io_err)?;
    }

    debug!(turns = session.turns(), "session ended");
    Ok(())
}
