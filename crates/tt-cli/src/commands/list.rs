use std::path::Path;

use clap::ValueEnum;
use comfy_table::{ContentArrangement, Table};
use tt_core::Story;

/// The story tables `tt list` can print.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TableKind {
    /// Scenes and their descriptions.
    Scenes,
    /// Targets and their colours.
    Targets,
    /// Scene-action visibility rows.
    Actions,
    /// Effect rules in priority order.
    Rules,
}

pub fn run(file: &Path, kind: TableKind) -> Result<(), String> {
    let story = super::load_story(file)?;

    let (table, count) = match kind {
        TableKind::Scenes => scenes_table(&story),
        TableKind::Targets => targets_table(&story),
        TableKind::Actions => actions_table(&story),
        TableKind::Rules => rules_table(&story),
    };

    if count == 0 {
        println!("  No rows found.");
        return Ok(());
    }

    println!("{table}");
    println!();
    println!("  {count} rows");

    Ok(())
}

fn new_table(header: Vec<&str>) -> Table {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(header);
    table
}

fn truncate(text: &str, max: usize) -> String {
    if text.is_empty() {
        "—".to_string()
    } else if text.chars().count() > max {
        let cut: String = text.chars().take(max - 3).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

fn scenes_table(story: &Story) -> (Table, usize) {
    let mut table = new_table(vec!["Scene", "Description"]);
    for scene in story.scenes() {
        table.add_row(vec![scene.name.clone(), truncate(&scene.description, 60)]);
    }
    (table, story.scenes().len())
}

fn targets_table(story: &Story) -> (Table, usize) {
    let mut table = new_table(vec!["Target", "Color"]);
    for target in story.targets() {
        table.add_row(vec![target.name.clone(), target.color.to_string()]);
    }
    (table, story.targets().len())
}

fn actions_table(story: &Story) -> (Table, usize) {
    let mut table = new_table(vec!["Scene", "Action", "Any of"]);
    for row in story.scene_actions() {
        table.add_row(vec![
            row.scene.clone(),
            row.action.clone(),
            row.flags.join(", "),
        ]);
    }
    (table, story.scene_actions().len())
}

fn rules_table(story: &Story) -> (Table, usize) {
    let mut table = new_table(vec!["#", "Scene", "Command", "Requires", "Effect"]);
    for (i, rule) in story.rules().iter().enumerate() {
        let mut effect = Vec::new();
        if let Some(scene) = &rule.new_scene {
            effect.push(format!("-> {scene}"));
        }
        effect.extend(rule.flags_to_clear.iter().map(|f| format!("-{f}")));
        effect.extend(rule.flags_to_set.iter().map(|f| format!("+{f}")));

        table.add_row(vec![
            i.to_string(),
            rule.scene.clone(),
            format!("{} {}", rule.action, rule.target),
            rule.required_flags.join(", "),
            effect.join(" "),
        ]);
    }
    (table, story.rules().len())
}
