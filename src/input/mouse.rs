// Mouse input reduced to what the handlers need.
pub use crossterm::event::{MouseButton, MouseEventKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MouseEvent {
    pub column: u16,
    pub row: u16,
    pub kind: MouseEventKind,
}

impl From<crossterm::event::MouseEvent> for MouseEvent {
    fn from(m: crossterm::event::MouseEvent) -> Self {
        MouseEvent {
            column: m.column,
            row: m.row,
            kind: m.kind,
        }
    }
}
