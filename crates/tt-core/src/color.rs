use serde::Deserialize;

/// Escape sequence that ends a coloured span.
pub const RESET: &str = "\x1b[0m";

/// Display colour (or text emphasis) used to highlight a target's name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Color {
    /// Bold text, no colour change.
    Bold,
    /// Underlined text.
    Underline,
    /// Purple.
    Purple,
    /// Cyan.
    Cyan,
    /// Blue.
    Blue,
    /// Green.
    Green,
    /// Yellow.
    Yellow,
    /// Red.
    Red,
    /// Black.
    Black,
    /// Grey.
    Grey,
    /// Cream.
    Cream,
    /// Light grey.
    LightGrey,
    /// Light purple.
    LightPurple,
    /// Dark purple.
    DarkPurple,
    /// Orange.
    Orange,
    /// Brown.
    Brown,
    /// Light brown.
    LightBrown,
    /// Dark blue.
    DarkBlue,
    /// Pink.
    Pink,
    /// White.
    White,
    /// Light blue.
    LightBlue,
    /// Dark grey.
    DarkGrey,
    /// Light green.
    LightGreen,
    /// Light yellow.
    LightYellow,
    /// Light pink.
    LightPink,
}

impl Color {
    /// The name used for this colour in story tables.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Bold => "bold",
            Self::Underline => "underline",
            Self::Purple => "purple",
            Self::Cyan => "cyan",
            Self::Blue => "blue",
            Self::Green => "green",
            Self::Yellow => "yellow",
            Self::Red => "red",
            Self::Black => "black",
            Self::Grey => "grey",
            Self::Cream => "cream",
            Self::LightGrey => "light_grey",
            Self::LightPurple => "light_purple",
            Self::DarkPurple => "dark_purple",
            Self::Orange => "orange",
            Self::Brown => "brown",
            Self::LightBrown => "light_brown",
            Self::DarkBlue => "dark_blue",
            Self::Pink => "pink",
            Self::White => "white",
            Self::LightBlue => "light_blue",
            Self::DarkGrey => "dark_grey",
            Self::LightGreen => "light_green",
            Self::LightYellow => "light_yellow",
            Self::LightPink => "light_pink",
        }
    }

    /// ANSI escape sequence that starts a span in this colour.
    pub fn start_code(&self) -> &'static str {
        match self {
            Self::Bold => "\x1b[1m",
            Self::Underline => "\x1b[4m",
            Self::Purple => "\x1b[1;35;48m",
            Self::Cyan => "\x1b[1;36;48m",
            Self::Blue => "\x1b[1;38;2;0;0;255m",
            Self::Green => "\x1b[1;32;48m",
            Self::Yellow => "\x1b[1;38;2;255;255;0m",
            Self::Red => "\x1b[1;31;48m",
            Self::Black => "\x1b[1;30;48m",
            Self::Grey => "\x1b[1;38;2;107;107;107m",
            Self::Cream => "\x1b[1;38;2;255;253;208m",
            Self::LightGrey => "\x1b[1;38;2;211;211;211m",
            Self::LightPurple => "\x1b[1;38;2;177;156;217m",
            Self::DarkPurple => "\x1b[1;38;2;106;13;173m",
            Self::Orange => "\x1b[1;38;2;255;165;0m",
            Self::Brown => "\x1b[1;38;2;150;75;0m",
            Self::LightBrown => "\x1b[1;38;2;195;155;119m",
            Self::DarkBlue => "\x1b[1;38;2;2;7;93m",
            Self::Pink | Self::LightPink => "\x1b[1;38;2;255;192;203m",
            Self::White => "\x1b[1;38;2;255;255;255m",
            Self::LightBlue => "\x1b[1;38;2;173;216;230m",
            Self::DarkGrey => "\x1b[1;38;2;77;78;79m",
            Self::LightGreen => "\x1b[1;38;2;151;251;152m",
            Self::LightYellow => "\x1b[1;38;2;255;255;102m",
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
