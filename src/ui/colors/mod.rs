use once_cell::sync::Lazy;
use ratatui::style::{Color, Modifier, Style};
use std::sync::Mutex;

use crate::app::core::interpolate::{Lerp, Rgb};
use crate::ui::Theme;

/// Concrete runtime styles derived from the active [`Theme`].
#[derive(Clone, Debug)]
pub struct Colors {
    pub theme: Theme,
    pub base_style: Style,
    pub header_style: Style,
    pub title_style: Style,
    pub help_style: Style,
    pub detail_style: Style,
    pub button_style: Style,
}

static CURRENT: Lazy<Mutex<Colors>> = Lazy::new(|| Mutex::new(derive(&Theme::dark())));

fn color(c: Rgb) -> Color {
    Color::Rgb(c.0, c.1, c.2)
}

fn derive(theme: &Theme) -> Colors {
    let bg = color(theme.bg);
    let fg = color(theme.fg);
    let accent = color(theme.accent);
    Colors {
        theme: theme.clone(),
        base_style: Style::default().fg(fg).bg(bg),
        header_style: Style::default().fg(fg).bg(bg),
        title_style: Style::default().fg(fg).bg(bg).add_modifier(Modifier::BOLD),
        help_style: Style::default().fg(accent).bg(bg),
        detail_style: Style::default().fg(fg).bg(bg),
        button_style: Style::default().fg(bg).bg(accent).add_modifier(Modifier::BOLD),
    }
}

impl Colors {
    /// Foreground blended towards the background by `opacity`.
    pub fn fade(&self, opacity: f32) -> Color {
        color(Rgb::lerp(self.theme.bg, self.theme.fg, opacity.clamp(0.0, 1.0)))
    }

    pub fn faded_style(&self, opacity: f32) -> Style {
        self.base_style.fg(self.fade(opacity))
    }
}

pub fn set_theme(name: &str) {
    set_from_theme(&Theme::resolve(name));
}

pub fn set_from_theme(theme: &Theme) {
    let mut g = CURRENT.lock().unwrap_or_else(|p| p.into_inner());
    *g = derive(theme);
}

pub fn current() -> Colors {
    CURRENT.lock().unwrap_or_else(|p| p.into_inner()).clone()
}

/// Flip between the built-in dark and light themes; returns the new name.
pub fn toggle() -> String {
    let next = if current().theme.name == "light" { Theme::dark() } else { Theme::light() };
    set_from_theme(&next);
    next.name
}
