//! Player input parsing.

mod command;

pub use command::{
    HELP, LOOK_AROUND, ParsedCommand, PlayerInput, QUIT, parse_command, parse_input,
};
