//! Application actions for event-driven flow.
//!
//! Flux-like unidirectional data flow:
//! key event → AppAction → App state → re-render. Every action is
//! processed synchronously within one event turn; there is no async work.

use metex_core::explorer::NodeId;

/// Application-level actions emitted by input handling.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppAction {
    /// Quit the application
    Quit,

    /// Activate the row under the cursor: branches toggle their disclosure
    /// state, table leaves populate the detail pane
    Activate(NodeId),

    /// Flip the disclosure state of a branch row
    Toggle(NodeId),

    /// Force a branch row to a specific disclosure state
    SetExpanded(NodeId, bool),

    /// Drop the current table selection and empty the detail pane
    ClearSelection,

    /// Rebuild the tree from the catalog provider
    Reload,

    /// Toggle the help overlay
    ToggleHelp,
}
