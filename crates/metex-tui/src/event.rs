//! Terminal event pump.
//!
//! Polls crossterm with an idle timeout so the app redraws on a steady
//! cadence even when no input arrives. Only key *presses* are surfaced:
//! release and repeat events (reported on some platforms) would
//! double-toggle branches and double-select tables.

use crossterm::event::{self, Event as CrosstermEvent, KeyEvent, KeyEventKind};
use std::time::Duration;

/// How long to wait for input before reporting an idle tick.
pub const IDLE_TICK: Duration = Duration::from_millis(250);

/// Terminal events surfaced to the app.
#[derive(Debug)]
pub enum Event {
    /// A key was pressed
    Key(KeyEvent),
    /// No input arrived within the idle timeout
    Tick,
    /// The terminal was resized
    Resize(u16, u16),
}

/// Polling event pump.
pub struct EventHandler {
    timeout: Duration,
}

impl Default for EventHandler {
    fn default() -> Self {
        Self { timeout: IDLE_TICK }
    }
}

impl EventHandler {
    /// Wait for the next event, reporting `Tick` when the timeout elapses.
    pub fn next(&self) -> std::io::Result<Event> {
        if !event::poll(self.timeout)? {
            return Ok(Event::Tick);
        }
        match event::read()? {
            CrosstermEvent::Key(key) if key.kind == KeyEventKind::Press => Ok(Event::Key(key)),
            CrosstermEvent::Resize(width, height) => Ok(Event::Resize(width, height)),
            // Key releases, focus changes, paste and mouse events are
            // irrelevant to this app.
            _ => Ok(Event::Tick),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_idle_timeout() {
        assert_eq!(EventHandler::default().timeout, IDLE_TICK);
    }
}
