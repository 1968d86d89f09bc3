use crate::app::settings::keybinds;
use crate::app::{App, Strip};
use crate::input::KeyCode;

/// Keys on the carousel screen.
pub fn handle_dashboard(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    if keybinds::is_quit(&code) {
        return Ok(true);
    }
    if keybinds::is_country_next(&code) {
        app.page(Strip::Countries, 1);
    } else if keybinds::is_country_prev(&code) {
        app.page(Strip::Countries, -1);
    } else if keybinds::is_place_next(&code) {
        app.page(Strip::Places, 1);
    } else if keybinds::is_place_prev(&code) {
        app.page(Strip::Places, -1);
    } else if keybinds::is_explore(&code) {
        app.explore();
    } else if keybinds::is_toggle_theme(&code) {
        super::toggle_theme(app);
    } else if keybinds::is_toggle_mouse(&code) {
        app.settings.mouse_enabled = !app.settings.mouse_enabled;
        if !app.settings.mouse_enabled {
            app.pointer_cancel();
        }
        app.status = Some(format!(
            "mouse {}",
            if app.settings.mouse_enabled { "on" } else { "off" }
        ));
        app.mark_dirty();
    }
    Ok(false)
}
