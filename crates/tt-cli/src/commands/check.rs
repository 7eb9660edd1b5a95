use std::path::Path;

use colored::Colorize;
use tt_core::validate_story;

pub fn run(file: &Path) -> Result<(), String> {
    let story = super::load_story(file)?;
    let issues = validate_story(&story);

    for issue in &issues {
        let line = issue.to_string();
        if issue.is_error {
            eprintln!("  {}", line.red());
        } else {
            eprintln!("  {}", line.yellow());
        }
    }

    let errors = issues.iter().filter(|i| i.is_error).count();
    let warnings = issues.len() - errors;
    if errors > 0 {
        return Err(format!(
            "{} error{}, {} warning{}",
            errors,
            if errors == 1 { "" } else { "s" },
            warnings,
            if warnings == 1 { "" } else { "s" },
        ));
    }

    println!("  All checks passed for '{}'.", story.meta.title);
    println!(
        "  {} scenes, {} targets, {} rules",
        story.scenes().len(),
        story.targets().len(),
        story.rules().len()
    );
    if warnings > 0 {
        println!(
            "  {} warning{}",
            warnings,
            if warnings == 1 { "" } else { "s" }
        );
    }

    Ok(())
}
