//! Status bar component.
//!
//! Displays keybindings and the most recent status message at the bottom of
//! the screen. Error messages are styled distinctly but never interrupt the
//! session; a rejected selection is a message here, not a fault.

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::styles::{TEXT_DIM, TEXT_ERROR};

/// Key binding display item.
#[derive(Debug, Clone)]
pub struct KeyBinding {
    pub key: &'static str,
    pub action: &'static str,
}

impl KeyBinding {
    pub const fn new(key: &'static str, action: &'static str) -> Self {
        Self { key, action }
    }
}

/// Severity of the current status message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum MessageKind {
    #[default]
    Info,
    Error,
}

/// Status bar showing keybindings and messages.
pub struct StatusBar {
    message: String,
    message_kind: MessageKind,
    bindings: Vec<KeyBinding>,
}

impl Default for StatusBar {
    fn default() -> Self {
        Self::new()
    }
}

impl StatusBar {
    /// Create a new status bar with default keybindings.
    pub fn new() -> Self {
        Self {
            message: String::new(),
            message_kind: MessageKind::Info,
            bindings: vec![
                KeyBinding::new("↑↓", "Nav"),
                KeyBinding::new("Enter", "Open"),
                KeyBinding::new("Space", "Fold"),
                KeyBinding::new("r", "Reload"),
                KeyBinding::new("?", "Help"),
                KeyBinding::new("q", "Quit"),
            ],
        }
    }

    /// Set an informational status message.
    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.message_kind = MessageKind::Info;
    }

    /// Set an error status message.
    pub fn set_error(&mut self, message: impl Into<String>) {
        self.message = message.into();
        self.message_kind = MessageKind::Error;
    }

    /// Current message text.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Draw the status bar.
    pub fn draw(&self, frame: &mut Frame, area: Rect) {
        let mut spans: Vec<Span> = Vec::new();

        for (i, binding) in self.bindings.iter().enumerate() {
            if i > 0 {
                spans.push(Span::styled(" │ ", TEXT_DIM));
            }
            spans.push(Span::styled(
                binding.key,
                Style::default().fg(Color::Yellow),
            ));
            spans.push(Span::raw(" "));
            spans.push(Span::raw(binding.action));
        }

        if !self.message.is_empty() {
            spans.push(Span::styled("  •  ", TEXT_DIM));
            let style = match self.message_kind {
                MessageKind::Info => Style::default().fg(Color::Green),
                MessageKind::Error => TEXT_ERROR,
            };
            spans.push(Span::styled(self.message.clone(), style));
        }

        let bar = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(TEXT_DIM),
        );
        frame.render_widget(bar, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_kinds() {
        let mut bar = StatusBar::new();
        assert!(bar.message().is_empty());

        bar.set_message("Selected table 'customers'");
        assert_eq!(bar.message(), "Selected table 'customers'");
        assert_eq!(bar.message_kind, MessageKind::Info);

        bar.set_error("cannot show details for a schema node");
        assert_eq!(bar.message_kind, MessageKind::Error);
    }
}
