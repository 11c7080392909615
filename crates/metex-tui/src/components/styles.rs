//! Shared style definitions for TUI components.
//!
//! Provides consistent styling across all views, eliminating duplication.

use ratatui::style::{Color, Modifier, Style};

// === Border Styles ===

/// Border style for focused components.
pub const BORDER_FOCUSED: Style = Style::new().fg(Color::Cyan);

/// Border style for unfocused components.
pub const BORDER_UNFOCUSED: Style = Style::new().fg(Color::DarkGray);

/// Get border style based on focus state.
#[inline]
pub fn border_style(focused: bool) -> Style {
    if focused {
        BORDER_FOCUSED
    } else {
        BORDER_UNFOCUSED
    }
}

// === Tree Styles ===

/// Style for the cursor row in the tree.
pub fn cursor_highlight_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Persistent style for the selected table row. Text and icon switch to the
/// on-highlight variant together, matching the single-selection invariant.
pub fn selected_table_style() -> Style {
    Style::default()
        .bg(Color::Blue)
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Style for disclosure markers.
pub const MARKER_STYLE: Style = Style::new().fg(Color::DarkGray);

/// Cursor symbol for the tree list.
pub const HIGHLIGHT_SYMBOL: &str = "► ";

// === Detail Pane Styles ===

/// Style for table header text.
pub fn header_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Style for stat labels ("Row Count", "Size").
pub const STAT_LABEL: Style = Style::new().fg(Color::DarkGray);

/// Style for stat values.
pub fn stat_value_style() -> Style {
    Style::default()
        .fg(Color::White)
        .add_modifier(Modifier::BOLD)
}

/// Fixed-width/code style for data types.
pub const CODE_STYLE: Style = Style::new().fg(Color::Magenta);

/// Badge style for the Nullable column.
pub fn badge_style() -> Style {
    Style::default().fg(Color::White).bg(Color::DarkGray)
}

/// Style for the primary-key glyph.
pub const KEY_PRIMARY: Style = Style::new().fg(Color::Yellow);

/// Style for the foreign-key glyph.
pub const KEY_FOREIGN: Style = Style::new().fg(Color::DarkGray);

// === Text Styles ===

/// Style for dimmed/hint text.
pub const TEXT_DIM: Style = Style::new().fg(Color::DarkGray);

/// Style for error text.
pub const TEXT_ERROR: Style = Style::new().fg(Color::Red);
