//! Split handlers: thin wrapper delegating to per-route submodules.

pub mod dashboard;
pub mod detail;
pub mod mouse;

pub use dashboard::handle_dashboard;
pub use detail::handle_detail;
pub use mouse::{handle_mouse, handle_mouse_at};

use crate::app::{App, Route};
use crate::input::keyboard::is_interrupt;
use crate::input::KeyEvent;

/// Top-level key handler. Returns `Ok(true)` when the app should quit.
pub fn handle_key(app: &mut App, key: KeyEvent) -> anyhow::Result<bool> {
    if is_interrupt(&key) {
        return Ok(true);
    }
    match app.router.current() {
        Route::Dashboard => handle_dashboard(app, key.code),
        Route::Place(_) => handle_detail(app, key.code),
    }
}

fn toggle_theme(app: &mut App) {
    app.settings.theme = crate::ui::colors::toggle();
    app.mark_dirty();
}
