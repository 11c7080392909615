//! Application state and logic for the TUI.
//!
//! ## Module Structure
//! - `mod.rs`: App struct definition, initialization, and rendering
//! - `action_handler.rs`: AppAction processing
//! - `input_handler.rs`: Keyboard event processing
//!
//! The app owns the explorer state machine from metex-core plus the panel
//! components, and drives them through a synchronous action queue: every key
//! event is fully handled within its own event turn.

mod action_handler;
mod input_handler;

use std::collections::VecDeque;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use metex_core::catalog::{CatalogProvider, ColumnSchemaProvider};
use metex_core::explorer::{ExplorerState, TreeRow};

use crate::action::AppAction;
use crate::components::{DetailPanel, HelpOverlay, StatusBar, TreePanel, styles::TEXT_DIM};
use crate::error::TuiResult;
use crate::event::{Event, EventHandler};
use crate::layout::main::{HEADER_HEIGHT, STATUS_BAR_HEIGHT, TREE_WIDTH_PERCENT};

/// The main application state.
pub struct App {
    /// Whether the application should quit
    pub should_quit: bool,
    /// Explorer state machine (tree, disclosure, selection)
    pub(crate) explorer: ExplorerState,
    /// Cached visible rows, refreshed after every state change
    pub(crate) rows: Vec<TreeRow>,
    /// Tree panel (left)
    pub(crate) tree: TreePanel,
    /// Detail panel (right)
    pub(crate) detail: DetailPanel,
    /// Status bar (bottom)
    pub(crate) status_bar: StatusBar,
    /// Whether to show the help overlay
    pub(crate) show_help: bool,
    /// Catalog source
    pub(crate) catalog_provider: Box<dyn CatalogProvider>,
    /// Column schema source
    pub(crate) schema_provider: Box<dyn ColumnSchemaProvider>,
    /// Pending actions, drained synchronously each turn
    actions: VecDeque<AppAction>,
}

impl App {
    /// Build the application from its two provider boundaries.
    ///
    /// The catalog is fetched eagerly; a provider failure here is a wiring
    /// problem and aborts startup instead of surfacing mid-session.
    pub fn new(
        catalog_provider: Box<dyn CatalogProvider>,
        schema_provider: Box<dyn ColumnSchemaProvider>,
    ) -> TuiResult<Self> {
        let root = catalog_provider.catalog()?;
        let explorer = ExplorerState::new(root);

        let mut status_bar = StatusBar::new();
        status_bar.set_message(format!(
            "Loaded {} ({} tables)",
            catalog_provider.describe(),
            explorer.leaf_count()
        ));

        let rows = explorer.visible_rows();
        Ok(Self {
            should_quit: false,
            explorer,
            rows,
            tree: TreePanel::new(),
            detail: DetailPanel::new(),
            status_bar,
            show_help: false,
            catalog_provider,
            schema_provider,
            actions: VecDeque::new(),
        })
    }

    /// Run the main application loop.
    pub fn run(
        &mut self,
        terminal: &mut ratatui::Terminal<impl ratatui::backend::Backend>,
    ) -> std::io::Result<()> {
        let event_handler = EventHandler::default();

        while !self.should_quit {
            self.process_actions();

            terminal.draw(|frame| self.draw(frame))?;

            match event_handler.next()? {
                Event::Key(key) => self.handle_key(key.code, key.modifiers),
                Event::Resize(_, _) => {} // Terminal will redraw automatically
                Event::Tick => {}
            }
        }

        Ok(())
    }

    /// Queue an action for the current event turn.
    pub(crate) fn push_action(&mut self, action: AppAction) {
        self.actions.push_back(action);
    }

    /// Drain and handle all pending actions.
    pub(crate) fn process_actions(&mut self) {
        while let Some(action) = self.actions.pop_front() {
            self.handle_action(action);
        }
    }

    /// Rebuild the cached row view-model and keep the cursor valid.
    pub(crate) fn refresh_rows(&mut self) {
        self.rows = self.explorer.visible_rows();
        self.tree.clamp_cursor(self.rows.len());
    }

    /// The row currently under the cursor.
    pub(crate) fn cursor_row(&self) -> Option<&TreeRow> {
        self.rows.get(self.tree.cursor())
    }

    // =========================================================================
    // Drawing
    // =========================================================================

    /// Draw the UI: header, tree + detail split, status bar, overlays.
    fn draw(&mut self, frame: &mut Frame) {
        let size = frame.area();

        let main_chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Min(0),
                Constraint::Length(STATUS_BAR_HEIGHT),
            ])
            .split(size);

        self.draw_header(frame, main_chunks[0]);

        let content_chunks = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Percentage(TREE_WIDTH_PERCENT),
                Constraint::Min(0),
            ])
            .split(main_chunks[1]);

        self.tree.draw(
            frame,
            content_chunks[0],
            &self.rows,
            self.explorer.selected(),
            true,
        );
        self.detail.draw(frame, content_chunks[1], false);

        self.status_bar.draw(frame, main_chunks[2]);

        if self.show_help {
            HelpOverlay::render(frame, size);
        }
    }

    /// Draw the header with catalog identity and counts.
    fn draw_header(&self, frame: &mut Frame, area: Rect) {
        let spans = vec![
            Span::styled(
                format!(" 🗄 {} ", self.explorer.root_name()),
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled("│", TEXT_DIM),
            Span::styled(
                format!(
                    " {} nodes · {} tables · {}",
                    self.explorer.node_count(),
                    self.explorer.leaf_count(),
                    self.catalog_provider.describe()
                ),
                TEXT_DIM,
            ),
        ];

        let header = Paragraph::new(Line::from(spans)).block(
            Block::default()
                .title(" metex ")
                .title_style(
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                )
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray)),
        );
        frame.render_widget(header, area);
    }
}
