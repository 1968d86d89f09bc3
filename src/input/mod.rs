//! Terminal input: thin wrappers over crossterm events.

#[cfg(feature = "async-input")]
pub mod async_input;
pub mod keyboard;
pub mod mouse;

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event};

pub use keyboard::{KeyCode, KeyEvent, KeyModifiers};

/// Events the runner cares about; everything else is `Other`.
#[derive(Debug, Clone, PartialEq)]
pub enum InputEvent {
    Key(KeyEvent),
    Mouse(mouse::MouseEvent),
    Resize(u16, u16),
    Other,
}

impl From<Event> for InputEvent {
    fn from(ev: Event) -> Self {
        match ev {
            Event::Key(k) if k.kind != event::KeyEventKind::Release => InputEvent::Key(k),
            Event::Mouse(m) => InputEvent::Mouse(m.into()),
            Event::Resize(w, h) => InputEvent::Resize(w, h),
            _ => InputEvent::Other,
        }
    }
}

/// Wait up to `timeout` for an event to become available.
pub fn poll(timeout: Duration) -> io::Result<bool> {
    event::poll(timeout)
}

pub fn read_event() -> io::Result<InputEvent> {
    Ok(event::read()?.into())
}
