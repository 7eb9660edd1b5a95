use std::fs;
use std::path::Path;

use tt_core::story::CAFE_STORY;

pub fn run(name: &str) -> Result<(), String> {
    let dir = Path::new(name);

    if dir.exists() {
        return Err(format!("directory '{}' already exists", name));
    }

    fs::create_dir_all(dir).map_err(|e| format!("cannot create directory: {e}"))?;
    fs::write(dir.join("story.json"), CAFE_STORY)
        .map_err(|e| format!("cannot write story.json: {e}"))?;

    println!("Created story '{}' in {}/", name, name);
    println!("  story.json  — the demo cafe story, ready to edit");
    println!();
    println!("Get started:");
    println!("  cd {}", name);
    println!("  tt check          # Validate the story tables");
    println!("  tt list rules     # Show the rule table");
    println!("  tt play           # Play the story");

    Ok(())
}
