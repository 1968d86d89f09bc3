use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::widgets::Paragraph;
use ratatui::Frame;

use crate::app::core::visuals::LayoutMetrics;
use crate::app::settings::runtime_keybinds;
use crate::app::{App, Route};

pub mod colors;
pub mod countries;
pub mod detail;
pub mod header;
pub mod places;
pub mod themes;
pub mod util;

pub use themes::Theme;

/// Screen regions shared by the renderer and the mouse handler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenLayout {
    pub header: Rect,
    pub countries: Rect,
    pub places: Rect,
    pub help: Rect,
}

pub fn layout(area: Rect) -> ScreenLayout {
    // header (3), countries (6), places (min), help (1)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);
    ScreenLayout {
        header: chunks[0],
        countries: chunks[1],
        places: chunks[2],
        help: chunks[3],
    }
}

/// Carousel metrics for a terminal of `area`: strips span the full width
/// and card heights scale with the full height.
pub fn metrics_for(area: Rect) -> LayoutMetrics {
    LayoutMetrics::new(area.width as f32, area.height as f32)
}

pub fn help_text() -> String {
    let kb = runtime_keybinds::get();
    format!(
        " {}/{}: country  {}/{}: place  {}: explore  {}: back  {}: theme  {}: quit",
        kb.label("country_prev"),
        kb.label("country_next"),
        kb.label("place_prev"),
        kb.label("place_next"),
        kb.label("explore"),
        kb.label("back"),
        kb.label("toggle_theme"),
        kb.label("quit"),
    )
}

pub fn ui(f: &mut Frame, app: &App) {
    let area = f.area();
    let colors = colors::current();
    f.render_widget(ratatui::widgets::Block::default().style(colors.base_style), area);

    match app.router.current() {
        Route::Place(item) => detail::render(f, area, item),
        Route::Dashboard => {
            let l = layout(area);
            header::render(f, l.header, app);
            countries::render(f, l.countries, app);
            places::render(f, l.places, app);
            f.render_widget(Paragraph::new(help_text()).style(colors.help_style), l.help);
        }
    }
}
