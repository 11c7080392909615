//! Layout constants for metex-tui.
//!
//! Centralizes layout-related magic numbers for easy tuning and consistency.

/// Main layout constants.
pub mod main {
    /// Header panel height in rows.
    pub const HEADER_HEIGHT: u16 = 3;

    /// Status bar height in rows.
    pub const STATUS_BAR_HEIGHT: u16 = 3;

    /// Tree panel share of the content width, in percent.
    pub const TREE_WIDTH_PERCENT: u16 = 40;
}

/// Detail pane columns table widths.
pub mod columns_table {
    /// Column name share of the table width, in percent.
    pub const NAME_PERCENT: u16 = 45;

    /// Data type share of the table width, in percent.
    pub const TYPE_PERCENT: u16 = 35;

    /// Nullable badge column width.
    pub const NULLABLE_WIDTH: u16 = 10;
}
