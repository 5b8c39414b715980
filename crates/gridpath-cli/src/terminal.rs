//! Terminal styling and color utilities.
//!
//! This module provides ANSI escape code definitions and color detection
//! for terminal output formatting.

/// ANSI escape codes for text styling and colors.
pub mod colors {
    /// Reset all styling.
    pub const RESET: &str = "\x1b[0m";
    /// Bold reverse green for the start cell.
    pub const TAG_START: &str = "\x1b[1;7;32m";
    /// Bold reverse magenta for the target cell.
    pub const TAG_TARGET: &str = "\x1b[1;7;35m";
    /// Bright yellow for path cells.
    pub const YELLOW_BOLD: &str = "\x1b[1;93m";
    /// Gray for walls and secondary elements.
    pub const GRAY: &str = "\x1b[90m";
}

/// A collection of resolved color codes, either actual ANSI sequences
/// or empty strings when color is disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorPalette {
    pub reset: &'static str,
    pub start: &'static str,
    pub target: &'static str,
    pub path: &'static str,
    pub gray: &'static str,
}

impl ColorPalette {
    /// Create a palette with actual ANSI color codes.
    #[must_use]
    pub const fn colored() -> Self {
        Self {
            reset: colors::RESET,
            start: colors::TAG_START,
            target: colors::TAG_TARGET,
            path: colors::YELLOW_BOLD,
            gray: colors::GRAY,
        }
    }

    /// Create a palette with no colors (empty strings).
    #[must_use]
    pub const fn plain() -> Self {
        Self {
            reset: "",
            start: "",
            target: "",
            path: "",
            gray: "",
        }
    }

    /// Create a palette based on terminal capabilities.
    #[must_use]
    pub fn detect() -> Self {
        if supports_color() {
            Self::colored()
        } else {
            Self::plain()
        }
    }

    pub fn is_plain(&self) -> bool {
        self.reset.is_empty()
    }
}

/// Check if the terminal supports ANSI color codes.
///
/// This function respects:
/// - The `NO_COLOR` environment variable (https://no-color.org/)
/// - The `TERM=dumb` convention for non-capable terminals
#[must_use]
pub fn supports_color() -> bool {
    if std::env::var_os("NO_COLOR").is_some() {
        return false;
    }
    if let Ok(term) = std::env::var("TERM") {
        if term.eq_ignore_ascii_case("dumb") {
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_palette_is_empty() {
        let palette = ColorPalette::plain();
        assert!(palette.is_plain());
        assert_eq!(palette.path, "");
    }

    #[test]
    fn colored_palette_uses_ansi_codes() {
        let palette = ColorPalette::colored();
        assert!(!palette.is_plain());
        assert!(palette.start.starts_with("\x1b["));
    }
}
