use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

use travelZoom::app::settings::Settings;
use travelZoom::app::{App, Gesture, StaticDataset, Strip};
use travelZoom::ui;

fn buffer_text(buf: &Buffer) -> String {
    let area = buf.area;
    let mut out = String::new();
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            out.push_str(buf[(x, y)].symbol());
        }
        out.push('\n');
    }
    out
}

fn draw(app: &App) -> String {
    let mut terminal = Terminal::new(TestBackend::new(90, 30)).unwrap();
    terminal.draw(|f| ui::ui(f, app)).unwrap();
    buffer_text(terminal.backend().buffer())
}

fn app() -> App {
    let area = Rect::new(0, 0, 90, 30);
    App::new(&StaticDataset::demo(), ui::metrics_for(area), Settings::default())
}

#[test]
fn dashboard_shows_region_countries_and_first_place() {
    let text = draw(&app());
    assert!(text.contains("ASIA"));
    // the centred country is emphasised, its neighbour is not
    assert!(text.contains("JAPAN"));
    assert!(text.contains("Thailand"));
    assert!(text.contains("Kyoto"));
    assert!(text.contains("[ Explore ]"));
    assert!(text.contains("quit"));
}

#[test]
fn explore_button_hides_while_places_move() {
    let mut app = app();
    app.apply(Strip::Places, Gesture::TouchDown);
    app.apply(Strip::Places, Gesture::DragBy(10.0));
    let text = draw(&app);
    assert!(text.contains("Kyoto"));
    assert!(!text.contains("[ Explore ]"));
}

#[test]
fn country_change_is_reflected_in_both_strips() {
    let mut app = app();
    app.apply(Strip::Countries, Gesture::MomentumEnd(app.countries.snap_width()));
    let text = draw(&app);
    assert!(text.contains("THAILAND"));
    assert!(text.contains("Bangkok"));
    assert!(text.contains("Thailand · 2 places"));
    assert!(!text.contains("Kyoto"));
}

#[test]
fn detail_route_renders_the_place() {
    let mut app = app();
    app.explore();
    let text = draw(&app);
    assert!(text.contains("Kyoto"));
    assert!(text.contains("Rating: ★ 4.8"));
    assert!(text.contains("Tags: temples, gardens"));
    assert!(text.contains("Esc: back"));
    assert!(!text.contains("ASIA"));
}
