//! Command parsing for player input.

/// An `<action> [<target>]` command typed by the player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedCommand {
    /// The verb, first word of the input.
    pub action: String,
    /// The object, second word of the input, if any.
    pub target: Option<String>,
}

/// A line of player input, classified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayerInput {
    /// `?`: list current actions and targets.
    Help,
    /// `look around`: describe the current scene.
    LookAround,
    /// `exit`: end the session.
    Quit,
    /// A command to resolve against the rule table.
    Command(ParsedCommand),
    /// Nothing that looks like a command (empty or blank line).
    Malformed,
}

/// Reserved literal that requests help.
pub const HELP: &str = "?";
/// Reserved literal that ends the session.
pub const QUIT: &str = "exit";
/// Reserved literal that describes the current scene.
pub const LOOK_AROUND: &str = "look around";

/// Parse the first two whitespace-separated words of `input`.
///
/// Returns `None` for empty or whitespace-only input. Words after the
/// second are ignored.
pub fn parse_command(input: &str) -> Option<ParsedCommand> {
    let mut words = input.split_whitespace();
    let action = words.next()?;
    Some(ParsedCommand {
        action: action.to_string(),
        target: words.next().map(str::to_string),
    })
}

/// Classify a raw input line.
///
/// The reserved literals must match exactly (apart from the line ending);
/// they bypass the rule table.
pub fn parse_input(raw: &str) -> PlayerInput {
    match raw.trim_end_matches(['\r', '\n']) {
        HELP => PlayerInput::Help,
        QUIT => PlayerInput::Quit,
        LOOK_AROUND => PlayerInput::LookAround,
        line => parse_command(line).map_or(PlayerInput::Malformed, PlayerInput::Command),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cmd(action: &str, target: Option<&str>) -> Option<ParsedCommand> {
        Some(ParsedCommand {
            action: action.to_string(),
            target: target.map(str::to_string),
        })
    }

    #[test]
    fn parse_action_and_target() {
        assert_eq!(parse_command("take coin"), cmd("take", Some("coin")));
    }

    #[test]
    fn parse_bare_action() {
        assert_eq!(parse_command("look"), cmd("look", None));
    }

    #[test]
    fn empty_input_is_not_a_command() {
        assert_eq!(parse_command(""), None);
        assert_eq!(parse_command("   "), None);
        assert_eq!(parse_command("\t\n"), None);
    }

    #[test]
    fn extra_words_are_ignored() {
        assert_eq!(
            parse_command("give bagel to amnizu"),
            cmd("give", Some("bagel"))
        );
    }

    #[test]
    fn any_whitespace_separates_words() {
        assert_eq!(parse_command("take\t  coin "), cmd("take", Some("coin")));
        assert_eq!(parse_command("  take coin"), cmd("take", Some("coin")));
    }

    #[test]
    fn case_is_preserved() {
        assert_eq!(parse_command("Take Coin"), cmd("Take", Some("Coin")));
    }

    #[test]
    fn reserved_literals() {
        assert_eq!(parse_input("?"), PlayerInput::Help);
        assert_eq!(parse_input("exit\n"), PlayerInput::Quit);
        assert_eq!(parse_input("look around\r\n"), PlayerInput::LookAround);
    }

    #[test]
    fn reserved_literals_match_exactly() {
        assert_eq!(
            parse_input("look bagel"),
            PlayerInput::Command(ParsedCommand {
                action: "look".into(),
                target: Some("bagel".into()),
            })
        );
        assert_eq!(
            parse_input("exit now"),
            PlayerInput::Command(ParsedCommand {
                action: "exit".into(),
                target: Some("now".into()),
            })
        );
        assert!(matches!(parse_input(" ?"), PlayerInput::Command(_)));
    }

    #[test]
    fn blank_line_is_malformed() {
        assert_eq!(parse_input(""), PlayerInput::Malformed);
        assert_eq!(parse_input("   \n"), PlayerInput::Malformed);
    }
}
