//! UI components for metex-tui.

mod detail;
mod help_overlay;
mod status_bar;
pub mod styles;
mod tree;

pub use detail::DetailPanel;
pub use help_overlay::HelpOverlay;
pub use status_bar::StatusBar;
pub use tree::TreePanel;
