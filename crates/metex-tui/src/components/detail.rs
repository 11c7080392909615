//! Detail panel for the selected table.
//!
//! Shows the table name, its row count (thousands-grouped) and size label,
//! and the column schema as a table: key-role glyph + column name, data type
//! in code style, and the Nullable badge. Nullability is a fixed "No" until a
//! real signal exists upstream.

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table},
};

use metex_core::catalog::KeyRole;
use metex_core::explorer::TableDetails;
use metex_core::format::pad_to_width;

use crate::layout::columns_table::{NAME_PERCENT, NULLABLE_WIDTH, TYPE_PERCENT};

use super::styles::{
    CODE_STYLE, KEY_FOREIGN, KEY_PRIMARY, STAT_LABEL, TEXT_DIM, badge_style, border_style,
    header_style, stat_value_style,
};

/// Height of the stats block above the columns table.
const STATS_HEIGHT: u16 = 4;

/// Width of the stat label column, so the values line up.
const STAT_LABEL_WIDTH: usize = 11;

/// Detail panel owning the current detail view-model.
#[derive(Default)]
pub struct DetailPanel {
    details: Option<TableDetails>,
}

impl DetailPanel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the pane content with a freshly built view-model.
    pub fn set_details(&mut self, details: TableDetails) {
        self.details = Some(details);
    }

    /// Clear the pane, e.g. after a reload rebuilt the tree.
    pub fn clear(&mut self) {
        self.details = None;
    }

    /// Currently displayed details, if any.
    pub fn details(&self) -> Option<&TableDetails> {
        self.details.as_ref()
    }

    /// Draw the detail pane.
    pub fn draw(&mut self, frame: &mut Frame, area: Rect, focused: bool) {
        match &self.details {
            Some(details) => Self::draw_details(frame, area, details, focused),
            None => Self::draw_placeholder(frame, area, focused),
        }
    }

    fn draw_placeholder(frame: &mut Frame, area: Rect, focused: bool) {
        let hint = Paragraph::new(vec![
            Line::from(""),
            Line::from(Span::styled(
                "  Select a table to inspect its metadata",
                TEXT_DIM,
            )),
            Line::from(""),
            Line::from(Span::styled(
                "  ↑↓ move · Enter select · Space fold · ? help",
                TEXT_DIM,
            )),
        ])
        .block(
            Block::default()
                .title(" Details ")
                .borders(Borders::ALL)
                .border_style(border_style(focused)),
        );
        frame.render_widget(hint, area);
    }

    fn draw_details(frame: &mut Frame, area: Rect, details: &TableDetails, focused: bool) {
        let block = Block::default()
            .title(format!(" 📋 {} ", details.name))
            .borders(Borders::ALL)
            .border_style(border_style(focused));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(STATS_HEIGHT), Constraint::Min(0)])
            .split(inner);

        frame.render_widget(Self::stats_paragraph(details), chunks[0]);
        frame.render_widget(Self::columns_table(details), chunks[1]);
    }

    /// The "Row Count" / "Size" stat lines.
    fn stats_paragraph(details: &TableDetails) -> Paragraph<'_> {
        Paragraph::new(vec![
            Line::from(""),
            Self::stat_line("ROW COUNT", details.row_count_display.clone()),
            Self::stat_line("SIZE", details.size.clone()),
        ])
    }

    fn stat_line(label: &str, value: String) -> Line<'static> {
        Line::from(vec![
            Span::styled(
                format!("  {} ", pad_to_width(label, STAT_LABEL_WIDTH)),
                STAT_LABEL,
            ),
            Span::styled(value, stat_value_style()),
        ])
    }

    /// The columns schema table.
    fn columns_table(details: &TableDetails) -> Table<'_> {
        let rows: Vec<Row> = details
            .columns
            .iter()
            .map(|column| {
                let mut name_spans: Vec<Span> = Vec::new();
                match column.key_role {
                    KeyRole::Primary => name_spans.push(Span::styled("🔑 ", KEY_PRIMARY)),
                    KeyRole::Foreign => name_spans.push(Span::styled("🔑 ", KEY_FOREIGN)),
                    KeyRole::None => {}
                }
                name_spans.push(Span::raw(column.name.clone()));

                Row::new(vec![
                    Cell::from(Line::from(name_spans)),
                    Cell::from(Span::styled(column.data_type.clone(), CODE_STYLE)),
                    Cell::from(Span::styled(" No ", badge_style())),
                ])
            })
            .collect();

        Table::new(
            rows,
            [
                Constraint::Percentage(NAME_PERCENT),
                Constraint::Percentage(TYPE_PERCENT),
                Constraint::Length(NULLABLE_WIDTH),
            ],
        )
        .header(
            Row::new(vec!["  Column Name", "Data Type", "Nullable"])
                .style(header_style())
                .bottom_margin(1),
        )
        .block(Block::default().title(" Columns Schema ").borders(Borders::TOP))
    }
}
