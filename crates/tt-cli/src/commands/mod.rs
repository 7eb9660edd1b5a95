pub mod check;
pub mod init;
pub mod list;
pub mod play;

use std::path::Path;

use tt_core::Story;

/// Load a story file, turning load errors into a printable message.
fn load_story(file: &Path) -> Result<Story, String> {
    Story::load(file).map_err(|e| e.to_string())
}
