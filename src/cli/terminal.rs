//! Terminal styling helpers

use owo_colors::{colors::css, OwoColorize};

/// Widest separator rule drawn, regardless of terminal width
const MAX_RULE_WIDTH: usize = 60;

/// Detects whether colored output should be enabled
pub fn supports_color() -> bool {
    supports_color::on(supports_color::Stream::Stdout).is_some()
}

/// A horizontal rule sized to the terminal, or to [`MAX_RULE_WIDTH`] when the
/// width is unknown or larger.
pub fn rule() -> String {
    let width = terminal_size::terminal_size()
        .map_or(MAX_RULE_WIDTH, |(w, _)| usize::from(w.0))
        .min(MAX_RULE_WIDTH);
    "─".repeat(width)
}

/// Extension trait for colorizing output
pub trait Colorize {
    /// Color as success (green)
    fn success(&self) -> String;
    /// Color as warning (amber)
    fn warning(&self) -> String;
    /// Bold heading
    fn heading(&self) -> String;
    /// Dim the text
    fn dim(&self) -> String;
}

impl<T: AsRef<str> + ?Sized> Colorize for T {
    fn success(&self) -> String {
        styled(self.as_ref(), |s| s.fg::<css::Green>().to_string())
    }

    fn warning(&self) -> String {
        styled(self.as_ref(), |s| s.fg::<css::Orange>().to_string())
    }

    fn heading(&self) -> String {
        styled(self.as_ref(), |s| s.bold().to_string())
    }

    fn dim(&self) -> String {
        styled(self.as_ref(), |s| s.dimmed().to_string())
    }
}

fn styled(text: &str, style: impl FnOnce(&str) -> String) -> String {
    if supports_color() {
        style(text)
    } else {
        text.to_string()
    }
}
