use owo_colors::{colors, Color};

pub const COLOR_ZERO: &str = colors::BrightBlack::ANSI_FG;
pub const COLOR_OFFSET: &str = colors::BrightBlack::ANSI_FG;
pub const COLOR_ASCII_PRINTABLE: &str = colors::Cyan::ANSI_FG;
pub const COLOR_ASCII_WHITESPACE: &str = colors::Green::ANSI_FG;
pub const COLOR_ASCII_NONPRINTABLE: &str = colors::Magenta::ANSI_FG;
pub const COLOR_NONASCII: &str = colors::Yellow::ANSI_FG;
pub const COLOR_RESET: &str = colors::Default::ANSI_FG;
