//! Help overlay component.
//!
//! Displays a modal overlay showing all available keybindings.

use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Flex, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

/// Help overlay showing keybindings.
pub struct HelpOverlay;

impl HelpOverlay {
    const NAVIGATION_KEYS: &'static [(&'static str, &'static str)] = &[
        ("↑ / k", "Move up"),
        ("↓ / j", "Move down"),
        ("Home / g", "Go to first row"),
        ("End / G", "Go to last row"),
    ];

    const TREE_KEYS: &'static [(&'static str, &'static str)] = &[
        ("Enter", "Open table details / fold branch"),
        ("Space", "Fold or unfold branch"),
        ("← / h", "Collapse branch"),
        ("→ / l", "Expand branch"),
        ("Esc", "Clear table selection"),
        ("r", "Reload catalog"),
    ];

    const GLOBAL_KEYS: &'static [(&'static str, &'static str)] = &[
        ("?", "Toggle help"),
        ("q / Ctrl+C", "Quit"),
    ];

    /// Render the help overlay centered on screen.
    pub fn render(frame: &mut Frame, area: Rect) {
        let popup_area = Self::centered_rect(60, 70, area);

        frame.render_widget(Clear, popup_area);

        let mut lines: Vec<Line> = Vec::new();
        lines.push(Line::from(""));

        for (title, keys) in [
            ("Navigation", Self::NAVIGATION_KEYS),
            ("Tree", Self::TREE_KEYS),
            ("Global", Self::GLOBAL_KEYS),
        ] {
            lines.push(Line::from(Span::styled(
                format!("  {}", title),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )));
            lines.push(Line::from("  ──────────────────────────────────"));
            for (key, action) in keys {
                lines.push(Self::format_keybinding(key, action));
            }
            lines.push(Line::from(""));
        }

        lines.push(Line::from(Span::styled(
            "  Press ? or Esc to close",
            Style::default().fg(Color::DarkGray),
        )));

        let help_text = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(" Help ")
                    .title_alignment(Alignment::Center)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Left);

        frame.render_widget(help_text, popup_area);
    }

    /// Format a single keybinding line.
    fn format_keybinding(key: &str, action: &str) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {:<12}", key),
                Style::default().fg(Color::Yellow),
            ),
            Span::raw(action.to_string()),
        ])
    }

    /// Calculate a centered rect with percentage-based dimensions.
    fn centered_rect(percent_x: u16, percent_y: u16, area: Rect) -> Rect {
        let vertical = Layout::vertical([Constraint::Percentage(percent_y)]).flex(Flex::Center);
        let horizontal = Layout::horizontal([Constraint::Percentage(percent_x)]).flex(Flex::Center);

        let [area] = vertical.areas(area);
        let [area] = horizontal.areas(area);
        area
    }
}
