//! AppAction processing.
//!
//! Each action mutates the explorer state machine, refreshes the cached row
//! view-model, and reports the outcome through the status bar. Failures are
//! messages, never faults: a rejected selection or a broken reload leaves
//! the current state in place.

use metex_core::explorer::{ExplorerState, NodeId};

use crate::action::AppAction;

use super::App;

impl App {
    /// Process a single action.
    pub(crate) fn handle_action(&mut self, action: AppAction) {
        match action {
            AppAction::Quit => {
                self.should_quit = true;
            }
            AppAction::ToggleHelp => {
                self.show_help = !self.show_help;
            }
            AppAction::Activate(id) => self.activate(id),
            AppAction::Toggle(id) => self.toggle(id),
            AppAction::SetExpanded(id, expanded) => {
                self.explorer.set_expanded(id, expanded);
                self.refresh_rows();
            }
            AppAction::ClearSelection => {
                if self.detail.details().is_some() {
                    self.explorer.clear_selection();
                    self.detail.clear();
                    self.status_bar.set_message("Selection cleared".to_string());
                }
            }
            AppAction::Reload => self.reload(),
        }
    }

    /// Activate a row: branches fold, table leaves populate the detail pane.
    fn activate(&mut self, id: NodeId) {
        let Some(row) = self.rows.iter().find(|r| r.id == id).cloned() else {
            return;
        };

        if row.is_branch {
            self.toggle(id);
            return;
        }

        match self.explorer.select(id, self.schema_provider.as_ref()) {
            Ok(details) => {
                self.status_bar
                    .set_message(format!("Selected table '{}'", details.name));
                self.detail.set_details(details);
            }
            // UnsupportedSelection and stale ids surface as messages only.
            Err(err) => self.status_bar.set_error(err.to_string()),
        }
    }

    /// Flip a branch's disclosure state.
    fn toggle(&mut self, id: NodeId) {
        let name = self
            .rows
            .iter()
            .find(|r| r.id == id)
            .map(|r| r.name.clone());

        match self.explorer.toggle(id) {
            Some(expanded) => {
                if let Some(name) = name {
                    let verb = if expanded { "Expanded" } else { "Collapsed" };
                    self.status_bar.set_message(format!("{} '{}'", verb, name));
                }
                self.refresh_rows();
            }
            None => {} // leaf or stale id, nothing to disclose
        }
    }

    /// Rebuild the tree from the catalog provider.
    ///
    /// On success the session state resets completely: default-expanded
    /// tree, no selection, empty detail pane, cursor at the root.
    fn reload(&mut self) {
        match self.catalog_provider.catalog() {
            Ok(root) => {
                self.explorer = ExplorerState::new(root);
                self.detail.clear();
                self.tree.select_first();
                self.refresh_rows();
                self.status_bar.set_message(format!(
                    "Reloaded {} ({} tables)",
                    self.catalog_provider.describe(),
                    self.explorer.leaf_count()
                ));
            }
            Err(err) => {
                self.status_bar
                    .set_error(format!("Reload failed: {}", err));
            }
        }
    }
}
