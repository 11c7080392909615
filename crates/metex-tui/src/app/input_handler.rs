//! Keyboard input handling for the application.
//!
//! Overlay keys take priority, then global keys, then tree navigation and
//! row activation. Leaf and branch rows share the activation key; the
//! distinction is made by the row view-model.

use crossterm::event::{KeyCode, KeyModifiers};

use crate::action::AppAction;

use super::App;

impl App {
    /// Handle keyboard input with delegated responsibility.
    pub(crate) fn handle_key(&mut self, code: KeyCode, modifiers: KeyModifiers) {
        // 1. Overlay handling (highest priority)
        if self.handle_overlay_keys(code) {
            return;
        }

        // 2. Global keybindings
        if self.handle_global_keys(code, modifiers) {
            return;
        }

        // 3. Tree navigation and activation
        self.handle_tree_keys(code);
    }

    /// Handle keyboard input when the help overlay is active.
    /// Returns true if the key was handled.
    fn handle_overlay_keys(&mut self, code: KeyCode) -> bool {
        if !self.show_help {
            return false;
        }
        if matches!(code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            self.push_action(AppAction::ToggleHelp);
        }
        true
    }

    /// Handle global keybindings (quit, help, reload).
    /// Returns true if the key was handled.
    fn handle_global_keys(&mut self, code: KeyCode, modifiers: KeyModifiers) -> bool {
        match code {
            KeyCode::Char('q') | KeyCode::Char('Q') => {
                self.push_action(AppAction::Quit);
                true
            }
            KeyCode::Char('c') if modifiers.contains(KeyModifiers::CONTROL) => {
                self.push_action(AppAction::Quit);
                true
            }
            KeyCode::Char('?') => {
                self.push_action(AppAction::ToggleHelp);
                true
            }
            KeyCode::Char('r') => {
                self.push_action(AppAction::Reload);
                true
            }
            _ => false,
        }
    }

    /// Handle cursor movement and row activation in the tree.
    fn handle_tree_keys(&mut self, code: KeyCode) {
        match code {
            KeyCode::Up | KeyCode::Char('k') => self.tree.select_previous(),
            KeyCode::Down | KeyCode::Char('j') => self.tree.select_next(self.rows.len()),
            KeyCode::Home | KeyCode::Char('g') => self.tree.select_first(),
            KeyCode::End | KeyCode::Char('G') => self.tree.select_last(self.rows.len()),
            KeyCode::Enter => {
                if let Some(id) = self.cursor_row().map(|row| row.id) {
                    self.push_action(AppAction::Activate(id));
                }
            }
            KeyCode::Esc => self.push_action(AppAction::ClearSelection),
            KeyCode::Char(' ') => {
                if let Some(id) = self.cursor_row().map(|row| row.id) {
                    self.push_action(AppAction::Toggle(id));
                }
            }
            KeyCode::Left | KeyCode::Char('h') => {
                if let Some(id) = self.cursor_row().map(|row| row.id) {
                    self.push_action(AppAction::SetExpanded(id, false));
                }
            }
            KeyCode::Right | KeyCode::Char('l') => {
                if let Some(id) = self.cursor_row().map(|row| row.id) {
                    self.push_action(AppAction::SetExpanded(id, true));
                }
            }
            _ => {}
        }
    }
}
