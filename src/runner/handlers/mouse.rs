use std::time::Instant;

use ratatui::layout::Rect;

use crate::app::{App, Strip};
use crate::input::mouse::{MouseButton, MouseEvent, MouseEventKind};
use crate::ui;

/// Which strip, if any, covers terminal row `row`.
pub fn strip_at(layout: &ui::ScreenLayout, row: u16) -> Option<Strip> {
    let within = |r: Rect| row >= r.y && row < r.bottom();
    if within(layout.countries) {
        Some(Strip::Countries)
    } else if within(layout.places) {
        Some(Strip::Places)
    } else {
        None
    }
}

pub fn handle_mouse(app: &mut App, me: MouseEvent, term: Rect) -> anyhow::Result<()> {
    handle_mouse_at(app, me, term, Instant::now())
}

/// Map a mouse event onto carousel gestures at time `now`.
///
/// Left button down/drag/up over a strip is a touch gesture; the wheel pages
/// the strip under the pointer. Drag and release events are routed to the
/// strip the gesture started on, wherever the pointer is now.
pub fn handle_mouse_at(app: &mut App, me: MouseEvent, term: Rect, now: Instant) -> anyhow::Result<()> {
    if !app.settings.mouse_enabled || !app.router.is_dashboard() {
        return Ok(());
    }
    let layout = ui::layout(term);
    let strip = strip_at(&layout, me.row);
    match me.kind {
        MouseEventKind::Down(MouseButton::Left) => {
            if let Some(s) = strip {
                app.pointer_down(s, me.column, now);
            }
        }
        MouseEventKind::Drag(MouseButton::Left) => app.pointer_drag(me.column, now),
        MouseEventKind::Up(MouseButton::Left) => app.pointer_up(now),
        MouseEventKind::ScrollDown | MouseEventKind::ScrollRight => {
            if let Some(s) = strip {
                app.page(s, 1);
            }
        }
        MouseEventKind::ScrollUp | MouseEventKind::ScrollLeft => {
            if let Some(s) = strip {
                app.page(s, -1);
            }
        }
        _ => {}
    }
    Ok(())
}
