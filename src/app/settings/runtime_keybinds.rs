// Process-wide keybind table consulted by the `keybinds::is_*` predicates.
//
// Defaults are installed lazily; `install` swaps in a table built from the
// user's settings at startup.

use std::collections::{BTreeMap, HashMap};
use std::sync::{Arc, RwLock};

use once_cell::sync::Lazy;

use crate::input::KeyCode;

#[derive(Debug, Clone, PartialEq)]
pub struct Keybinds {
    map: HashMap<String, Vec<KeyCode>>,
}

const DEFAULTS: &[(&str, &[&str])] = &[
    ("quit", &["q"]),
    ("back", &["esc", "backspace"]),
    ("explore", &["enter", "space"]),
    ("country_prev", &["left"]),
    ("country_next", &["right"]),
    ("place_prev", &["h", "up"]),
    ("place_next", &["l", "down"]),
    ("toggle_theme", &["t"]),
    ("toggle_mouse", &["m"]),
];

impl Default for Keybinds {
    fn default() -> Self {
        let map = DEFAULTS
            .iter()
            .map(|(action, keys)| {
                let codes = keys.iter().filter_map(|k| parse_key(k)).collect();
                (action.to_string(), codes)
            })
            .collect();
        Keybinds { map }
    }
}

impl Keybinds {
    /// Defaults with per-action overrides. Unknown key names are skipped
    /// with a warning; an action whose keys all fail keeps its defaults.
    pub fn from_overrides(overrides: &BTreeMap<String, Vec<String>>) -> Self {
        let mut kb = Keybinds::default();
        for (action, names) in overrides {
            let codes: Vec<KeyCode> = names
                .iter()
                .filter_map(|n| {
                    let code = parse_key(n);
                    if code.is_none() {
                        tracing::warn!(action = %action, key = %n, "unknown key name in keybinds");
                    }
                    code
                })
                .collect();
            if !codes.is_empty() {
                kb.map.insert(action.clone(), codes);
            }
        }
        kb
    }

    pub fn is_bound(&self, action: &str, code: &KeyCode) -> bool {
        self.map.get(action).is_some_and(|codes| codes.contains(code))
    }

    /// First bound key of `action`, formatted for the help bar.
    pub fn label(&self, action: &str) -> String {
        self.map
            .get(action)
            .and_then(|codes| codes.first())
            .map(key_label)
            .unwrap_or_else(|| "-".to_string())
    }
}

/// Parse a key name such as `left`, `enter`, `f5` or a single character.
pub fn parse_key(name: &str) -> Option<KeyCode> {
    let lower = name.to_ascii_lowercase();
    let code = match lower.as_str() {
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "backspace" => KeyCode::Backspace,
        "tab" => KeyCode::Tab,
        "space" => KeyCode::Char(' '),
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        f if f.len() > 1 && f.starts_with('f') => KeyCode::F(f[1..].parse().ok()?),
        _ => {
            let mut chars = name.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };
    Some(code)
}

fn key_label(code: &KeyCode) -> String {
    match code {
        KeyCode::Left => "←".to_string(),
        KeyCode::Right => "→".to_string(),
        KeyCode::Up => "↑".to_string(),
        KeyCode::Down => "↓".to_string(),
        KeyCode::Enter => "Enter".to_string(),
        KeyCode::Esc => "Esc".to_string(),
        KeyCode::Backspace => "Backspace".to_string(),
        KeyCode::Char(' ') => "Space".to_string(),
        KeyCode::Char(c) => c.to_string(),
        KeyCode::F(n) => format!("F{n}"),
        other => format!("{other:?}"),
    }
}

static RUNTIME: Lazy<RwLock<Arc<Keybinds>>> = Lazy::new(|| RwLock::new(Arc::new(Keybinds::default())));

/// Current keybind table.
pub fn get() -> Arc<Keybinds> {
    match RUNTIME.read() {
        Ok(guard) => Arc::clone(&guard),
        Err(poisoned) => Arc::clone(&poisoned.into_inner()),
    }
}

pub fn install(keybinds: Keybinds) {
    let mut guard = match RUNTIME.write() {
        Ok(g) => g,
        Err(poisoned) => poisoned.into_inner(),
    };
    *guard = Arc::new(keybinds);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_named_and_char_keys() {
        assert_eq!(parse_key("Left"), Some(KeyCode::Left));
        assert_eq!(parse_key("f5"), Some(KeyCode::F(5)));
        assert_eq!(parse_key("F"), Some(KeyCode::Char('F')));
        assert_eq!(parse_key("x"), Some(KeyCode::Char('x')));
        assert_eq!(parse_key("space"), Some(KeyCode::Char(' ')));
        assert_eq!(parse_key("fx"), None);
        assert_eq!(parse_key("nonsense"), None);
    }

    #[test]
    fn overrides_replace_only_named_actions() {
        let mut o = BTreeMap::new();
        o.insert("quit".to_string(), vec!["x".to_string()]);
        o.insert("explore".to_string(), vec!["bogus".to_string()]);
        let kb = Keybinds::from_overrides(&o);
        assert!(kb.is_bound("quit", &KeyCode::Char('x')));
        assert!(!kb.is_bound("quit", &KeyCode::Char('q')));
        assert!(kb.is_bound("explore", &KeyCode::Enter));
        assert!(kb.is_bound("country_next", &KeyCode::Right));
        assert_eq!(kb.label("back"), "Esc");
    }
}
