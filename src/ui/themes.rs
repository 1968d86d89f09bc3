use serde::Deserialize;

use crate::app::core::interpolate::Rgb;

#[derive(Clone, Debug, PartialEq)]
pub struct Theme {
    pub name: String,
    pub bg: Rgb,
    pub fg: Rgb,
    pub accent: Rgb,
}

#[derive(Deserialize)]
struct Pal {
    bg: String,
    fg: String,
    accent: String,
}

impl Theme {
    pub fn dark() -> Self {
        Self { name: "dark".into(), bg: Rgb(11, 12, 13), fg: Rgb(235, 235, 235), accent: Rgb(0, 190, 210) }
    }

    pub fn light() -> Self {
        Self { name: "light".into(), bg: Rgb(250, 250, 250), fg: Rgb(20, 20, 20), accent: Rgb(30, 90, 200) }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "dark" => Some(Self::dark()),
            "light" => Some(Self::light()),
            _ => None,
        }
    }

    /// Parse a `[palette]` table of `#rrggbb` strings. Without one the dark
    /// theme is returned.
    pub fn from_toml(s: &str) -> Result<Self, toml::de::Error> {
        let v: toml::Value = toml::from_str(s)?;
        if let Some(p) = v.get("palette") {
            let p: Pal = p.clone().try_into()?;
            let dark = Self::dark();
            return Ok(Self {
                name: "custom".into(),
                bg: parse_hex(&p.bg).unwrap_or(dark.bg),
                fg: parse_hex(&p.fg).unwrap_or(dark.fg),
                accent: parse_hex(&p.accent).unwrap_or(dark.accent),
            });
        }
        Ok(Self::dark())
    }

    /// Resolve a settings value: a built-in name or a path to a palette file.
    pub fn resolve(name: &str) -> Self {
        if let Some(t) = Self::from_name(name) {
            return t;
        }
        match std::fs::read_to_string(name).map(|text| Self::from_toml(&text)) {
            Ok(Ok(t)) => t,
            Ok(Err(e)) => {
                tracing::warn!(theme = name, error = %e, "invalid palette file, using dark theme");
                Self::dark()
            }
            Err(e) => {
                tracing::warn!(theme = name, error = %e, "unknown theme, using dark theme");
                Self::dark()
            }
        }
    }
}

fn parse_hex(s: &str) -> Option<Rgb> {
    let s = s.trim_start_matches('#');
    if s.len() != 6 {
        return None;
    }
    let ch = |r: std::ops::Range<usize>| u8::from_str_radix(s.get(r)?, 16).ok();
    Some(Rgb(ch(0..2)?, ch(2..4)?, ch(4..6)?))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn palette_overrides_and_falls_back() {
        let t = Theme::from_toml("[palette]\nbg = \"#000000\"\nfg = \"#ffcc00\"\naccent = \"oops\"\n").unwrap();
        assert_eq!(t.bg, Rgb(0, 0, 0));
        assert_eq!(t.fg, Rgb(255, 204, 0));
        assert_eq!(t.accent, Theme::dark().accent);
        assert_eq!(Theme::from_toml("title = 'x'").unwrap(), Theme::dark());
    }

    #[test]
    fn unknown_names_resolve_to_dark() {
        assert_eq!(Theme::resolve("light"), Theme::light());
        assert_eq!(Theme::resolve("/definitely/not/here.toml"), Theme::dark());
    }
}
