use std::time::{Duration, Instant};

use ratatui::layout::Rect;

use crate::app::dataset::Dataset;
use crate::app::settings::runtime_keybinds::{self, Keybinds};
use crate::app::settings::{self, Settings};
use crate::app::App;
use crate::input::{poll, read_event, InputEvent};
use crate::runner::handlers;
use crate::runner::terminal::{init_terminal, restore_terminal, set_mouse_capture};
use crate::ui;

/// Run the dashboard until the user quits.
///
/// The loop redraws only when something changed (a scroll signal moved, the
/// route changed, or the terminal resized), waits up to one frame for input,
/// then advances any settle animations by the real elapsed time.
pub fn run_app(dataset: &dyn Dataset, settings: Settings) -> anyhow::Result<()> {
    let loaded = settings.clone();
    runtime_keybinds::install(Keybinds::from_overrides(&settings.keybinds));
    ui::colors::set_theme(&settings.theme);

    let mut terminal = init_terminal(settings.mouse_enabled)?;
    let size = terminal.size()?;
    let mut term_rect = Rect::new(0, 0, size.width, size.height);
    let mut app = App::new(dataset, ui::metrics_for(term_rect), settings);
    let mut mouse_capture_enabled = app.settings.mouse_enabled;
    let frame = Duration::from_millis(app.settings.frame_ms.max(1));
    let mut last_tick = Instant::now();

    let result = (|| -> anyhow::Result<()> {
        loop {
            if app.take_dirty() {
                terminal.draw(|f| ui::ui(f, &app))?;
            }

            if poll(frame)? {
                match read_event()? {
                    InputEvent::Key(key) => {
                        if handlers::handle_key(&mut app, key)? {
                            break;
                        }
                    }
                    InputEvent::Mouse(me) => handlers::handle_mouse(&mut app, me, term_rect)?,
                    InputEvent::Resize(w, h) => {
                        term_rect = Rect::new(0, 0, w, h);
                        app.resize(ui::metrics_for(term_rect));
                        app.mark_dirty();
                    }
                    InputEvent::Other => {}
                }
                if app.settings.mouse_enabled != mouse_capture_enabled {
                    mouse_capture_enabled = app.settings.mouse_enabled;
                    if let Err(e) = set_mouse_capture(&mut terminal, mouse_capture_enabled) {
                        tracing::warn!(error = %e, "could not toggle mouse capture");
                    }
                }
            }

            let now = Instant::now();
            app.tick(now.saturating_duration_since(last_tick));
            last_tick = now;
        }
        Ok(())
    })();

    restore_terminal(terminal)?;

    if app.settings != loaded {
        if let Err(e) = settings::save_settings(&app.settings) {
            tracing::warn!(error = %e, "could not persist settings");
        }
    }
    result
}
