// Centralised keybind predicates for the application.
//
// Handlers ask `is_explore(&code)` rather than matching raw `KeyCode`
// patterns; the answers come from the runtime table so user overrides in
// `settings.toml` apply everywhere.

use crate::app::settings::runtime_keybinds;
use crate::input::KeyCode;

fn is_bound(action: &str, code: &KeyCode) -> bool {
    runtime_keybinds::get().is_bound(action, code)
}

pub fn is_quit(code: &KeyCode) -> bool {
    is_bound("quit", code)
}

pub fn is_back(code: &KeyCode) -> bool {
    is_bound("back", code)
}

pub fn is_explore(code: &KeyCode) -> bool {
    is_bound("explore", code)
}

pub fn is_country_prev(code: &KeyCode) -> bool {
    is_bound("country_prev", code)
}

pub fn is_country_next(code: &KeyCode) -> bool {
    is_bound("country_next", code)
}

pub fn is_place_prev(code: &KeyCode) -> bool {
    is_bound("place_prev", code)
}

pub fn is_place_next(code: &KeyCode) -> bool {
    is_bound("place_next", code)
}

pub fn is_toggle_theme(code: &KeyCode) -> bool {
    is_bound("toggle_theme", code)
}

pub fn is_toggle_mouse(code: &KeyCode) -> bool {
    is_bound("toggle_mouse", code)
}
