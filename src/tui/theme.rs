//! Styles for the browse screen, one per thing drawn

use ratatui::style::{Color, Modifier, Style};

/// Resolved style for each role on the browse screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Highlighted row, current page, open category
    pub selected: Style,
    /// Search prompt, key names, category headers
    pub accent: Style,
    pub error: Style,
    /// Loading text and the pending-search marker
    pub pending: Style,
    pub frame: Style,
    /// Secondary text: counts, dates, gaps, hint labels
    pub muted: Style,
    pub tag: Style,
    /// Model or dataset name in a result row
    pub title: Style,
}

impl Default for Theme {
    fn default() -> Self {
        Self::colored()
    }
}

impl Theme {
    #[must_use]
    pub fn colored() -> Self {
        let bold = Modifier::BOLD;
        Self {
            selected: Style::new().bg(Color::Blue).fg(Color::White).add_modifier(bold),
            accent: Style::new().fg(Color::Cyan).add_modifier(bold),
            error: Style::new().fg(Color::Red),
            pending: Style::new().fg(Color::Yellow),
            frame: Style::new().fg(Color::DarkGray),
            muted: Style::new().fg(Color::DarkGray),
            tag: Style::new().fg(Color::Magenta),
            title: Style::new().fg(Color::White).add_modifier(bold),
        }
    }

    /// Attributes only, for terminals where color was turned off
    #[must_use]
    pub fn monochrome() -> Self {
        Self {
            selected: Style::new().add_modifier(Modifier::REVERSED | Modifier::BOLD),
            accent: Style::new().add_modifier(Modifier::BOLD),
            error: Style::new().add_modifier(Modifier::BOLD | Modifier::UNDERLINED),
            pending: Style::new().add_modifier(Modifier::ITALIC),
            frame: Style::new(),
            muted: Style::new().add_modifier(Modifier::DIM),
            tag: Style::new(),
            title: Style::new().add_modifier(Modifier::BOLD),
        }
    }

    /// Monochrome when `NO_COLOR` is set to anything non-empty
    #[must_use]
    pub fn from_env() -> Self {
        Self::for_no_color(std::env::var_os("NO_COLOR").as_deref())
    }

    fn for_no_color(value: Option<&std::ffi::OsStr>) -> Self {
        match value {
            Some(v) if !v.is_empty() => Self::monochrome(),
            _ => Self::colored(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsStr;

    #[test]
    fn test_no_color_selects_monochrome() {
        assert_eq!(Theme::for_no_color(Some(OsStr::new("1"))), Theme::monochrome());
        assert_eq!(Theme::for_no_color(Some(OsStr::new(""))), Theme::colored());
        assert_eq!(Theme::for_no_color(None), Theme::colored());
    }

    #[test]
    fn test_monochrome_has_no_colors() {
        let theme = Theme::monochrome();
        for style in [theme.selected, theme.accent, theme.error, theme.muted, theme.title] {
            assert_eq!(style.fg, None);
            assert_eq!(style.bg, None);
        }
    }

    #[test]
    fn test_selection_stands_out_in_both() {
        assert!(Theme::colored().selected.add_modifier.contains(Modifier::BOLD));
        assert!(
            Theme::monochrome()
                .selected
                .add_modifier
                .contains(Modifier::REVERSED)
        );
    }
}
