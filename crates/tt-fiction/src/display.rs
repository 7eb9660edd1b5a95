//! Message decoration and help text.

use tt_core::{RESET, Target};

use crate::parser::{HELP, LOOK_AROUND, QUIT};
use crate::state::GameState;

/// Highlight every occurrence of each target's name with its colour.
///
/// Plain find-and-replace, applied target by target: a name that appears
/// inside a longer word is highlighted too.
pub fn decorate(message: &str, targets: &[Target]) -> String {
    targets
        .iter()
        .filter(|t| !t.name.is_empty())
        .fold(message.to_string(), |text, target| {
            let highlighted = format!("{}{}{}", target.color.start_code(), target.name, RESET);
            text.replace(&target.name, &highlighted)
        })
}

/// List the built-in commands, then the current actions and targets.
pub fn help_text(state: &GameState) -> String {
    let mut output = String::from("Actions you can currently take are:\n");
    output.push_str(&format!("{HELP}: learn what actions you can take\n"));
    output.push_str(&format!("{QUIT}: exit the game\n"));
    output.push_str(&format!(
        "{LOOK_AROUND}: get a description of your environment\n"
    ));
    for action in state.actions() {
        output.push_str(&action.name);
        output.push('\n');
    }

    output.push_str("\nInteractables in the area are:\n");
    for target in state.targets() {
        output.push_str(&target.name);
        output.push('\n');
    }
    output
}
