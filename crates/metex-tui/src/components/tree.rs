//! Catalog tree panel.
//!
//! Renders the flattened tree view-model as a list: indentation by depth,
//! a disclosure marker for branches, a kind icon, and the node name. The
//! cursor row and the persistently selected table row are styled separately.

use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
};

use metex_core::catalog::NodeKind;
use metex_core::explorer::{NodeId, TreeRow};
use metex_core::format::truncate_to_width;

use super::styles::{
    HIGHLIGHT_SYMBOL, MARKER_STYLE, border_style, cursor_highlight_style, selected_table_style,
};

/// Disclosure marker for a row.
fn marker(row: &TreeRow) -> &'static str {
    if row.is_branch {
        if row.expanded { "▾ " } else { "▸ " }
    } else {
        "  "
    }
}

/// Kind icon for a row.
fn icon(kind: NodeKind) -> &'static str {
    match kind {
        NodeKind::Catalog => "🗄 ",
        NodeKind::Schema => "📁 ",
        NodeKind::Table => "📋 ",
    }
}

/// Tree panel with cursor state.
pub struct TreePanel {
    /// Cursor position within the visible rows.
    cursor: usize,
    list_state: ListState,
}

impl Default for TreePanel {
    fn default() -> Self {
        Self::new()
    }
}

impl TreePanel {
    pub fn new() -> Self {
        Self {
            cursor: 0,
            list_state: ListState::default(),
        }
    }

    /// Current cursor position.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor down by one row.
    pub fn select_next(&mut self, row_count: usize) {
        if row_count == 0 {
            return;
        }
        self.cursor = (self.cursor + 1).min(row_count - 1);
    }

    /// Move the cursor up by one row.
    pub fn select_previous(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor to the first row.
    pub fn select_first(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the last row.
    pub fn select_last(&mut self, row_count: usize) {
        if row_count > 0 {
            self.cursor = row_count - 1;
        }
    }

    /// Keep the cursor within the current row count. Needed after collapses
    /// and reloads shrink the visible set.
    pub fn clamp_cursor(&mut self, row_count: usize) {
        if row_count == 0 {
            self.cursor = 0;
        } else if self.cursor >= row_count {
            self.cursor = row_count - 1;
        }
    }

    /// Draw the tree.
    pub fn draw(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        rows: &[TreeRow],
        selected: Option<NodeId>,
        focused: bool,
    ) {
        // Everything left of the name: borders, highlight symbol, indent,
        // marker, and the two-column icon plus its trailing space.
        let inner_width = area.width.saturating_sub(2) as usize;
        let items: Vec<ListItem> = rows
            .iter()
            .map(|row| {
                let indent = "  ".repeat(row.depth);
                let name_width = inner_width.saturating_sub(row.depth * 2 + 7);
                let line = Line::from(vec![
                    Span::raw(indent),
                    Span::styled(marker(row), MARKER_STYLE),
                    Span::raw(icon(row.kind)),
                    Span::raw(truncate_to_width(&row.name, name_width)),
                ]);
                let item = ListItem::new(line);
                if selected == Some(row.id) {
                    item.style(selected_table_style())
                } else {
                    item
                }
            })
            .collect();

        let list = List::new(items)
            .block(
                Block::default()
                    .title(" Catalog ")
                    .borders(Borders::ALL)
                    .border_style(border_style(focused)),
            )
            .highlight_style(cursor_highlight_style())
            .highlight_symbol(HIGHLIGHT_SYMBOL);

        self.list_state.select(if rows.is_empty() {
            None
        } else {
            Some(self.cursor)
        });
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}
