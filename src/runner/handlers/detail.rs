use crate::app::settings::keybinds;
use crate::app::App;
use crate::input::KeyCode;

/// Keys on the place detail screen.
pub fn handle_detail(app: &mut App, code: KeyCode) -> anyhow::Result<bool> {
    if keybinds::is_quit(&code) {
        return Ok(true);
    }
    if keybinds::is_back(&code) {
        app.back();
    } else if keybinds::is_toggle_theme(&code) {
        super::toggle_theme(app);
    }
    Ok(false)
}
