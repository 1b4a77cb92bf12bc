//! ANSI styling for help and error text.
//!
//! Colors are dropped when stdout is not a terminal or when the
//! NO_COLOR environment variable is set (https://no-color.org/).

use std::io::IsTerminal;

const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";
const CYAN: &str = "\x1b[36m";
const RED: &str = "\x1b[31m";

/// Check if stdout should carry ANSI codes.
#[must_use]
pub fn should_colorize() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    std::io::stdout().is_terminal()
}

fn paint_if(enabled: bool, text: &str, code: &str) -> String {
    if enabled {
        format!("{code}{text}{RESET}")
    } else {
        text.to_owned()
    }
}

fn paint(text: &str, code: &str) -> String {
    paint_if(should_colorize(), text, code)
}

/// Cyan text (section accents).
#[must_use]
pub fn cyan(text: &str) -> String {
    paint(text, CYAN)
}

/// Bold text.
#[must_use]
pub fn bold(text: &str) -> String {
    paint(text, BOLD)
}

/// Red text (error prefixes).
#[must_use]
pub fn red(text: &str) -> String {
    paint(text, RED)
}
