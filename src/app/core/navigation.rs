use std::time::Instant;

use super::carousel::Gesture;
use super::*;
use crate::app::router::Navigator;

/// A pointer drag over one strip, tracked between mouse events.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerDrag {
    pub strip: Strip,
    pub last_column: u16,
    pub last_at: Instant,
    /// Smoothed content velocity in cells per second.
    pub velocity: f32,
    /// Total columns travelled; zero means the gesture was a tap.
    pub travelled: u32,
}

impl App {
    pub(super) fn dispatch_settle(&mut self, strip: Strip, index: usize) {
        match strip {
            Strip::Countries => self.sync_places(index),
            Strip::Places => {
                tracing::debug!(index, "place settled");
            }
        }
        self.notify_selection();
    }

    /// Rebuild the places strip from the country at `index` and hard-reset
    /// it to its first place. Runs on every settle of the countries strip,
    /// including one that lands on the page it started from; a place gesture
    /// in flight is discarded.
    fn sync_places(&mut self, index: usize) {
        let Some(country) = self.countries.sequence().real(index) else {
            return;
        };
        let name = country.name.clone();
        let items = country.items.clone();
        let count = items.len();
        if self.places.is_in_motion() {
            tracing::debug!("discarding place gesture on country change");
        }
        if self.pointer.is_some_and(|p| p.strip == Strip::Places) {
            self.pointer = None;
        }
        self.places.reset(RenderSequence::new(items));
        tracing::debug!(country = %name, index, places = count, "places synchronized");
        self.status = Some(format!("{name} · {count} places"));
    }

    /// The place `commit` would hand over, or `None` while the places strip
    /// is still moving.
    pub fn committable_place(&self) -> Option<&Item> {
        if self.places.is_in_motion() {
            return None;
        }
        self.places.sequence().resolve(self.places.settled_index())
    }

    /// Hand the last settled place to `navigator`. No-op mid-gesture.
    pub fn commit(&self, navigator: &mut dyn Navigator) {
        match self.committable_place() {
            Some(item) => navigator.navigate_to_detail(item),
            None => tracing::debug!("commit ignored while places are moving"),
        }
    }

    /// Commit through the screen's own router. A pointer gesture still in
    /// progress is released first, since its release event will not reach
    /// the dashboard once the detail route is on top.
    pub fn explore(&mut self) {
        self.pointer_cancel();
        if let Some(item) = self.committable_place().cloned() {
            self.router.navigate_to_detail(&item);
            self.mark_dirty();
        }
    }

    pub fn back(&mut self) -> bool {
        let popped = self.router.back();
        if popped {
            self.mark_dirty();
        }
        popped
    }

    pub fn page(&mut self, strip: Strip, delta: isize) {
        self.apply(strip, Gesture::Page(delta));
    }

    /// Start a pointer drag over `strip` at `column`.
    pub fn pointer_down(&mut self, strip: Strip, column: u16, now: Instant) {
        self.apply(strip, Gesture::TouchDown);
        self.pointer = Some(PointerDrag {
            strip,
            last_column: column,
            last_at: now,
            velocity: 0.0,
            travelled: 0,
        });
    }

    /// Follow the pointer. Moving the pointer left scrolls content forward.
    pub fn pointer_drag(&mut self, column: u16, now: Instant) {
        let Some(mut drag) = self.pointer else {
            return;
        };
        let dx = drag.last_column as f32 - column as f32;
        if dx == 0.0 {
            return;
        }
        let dt = now.saturating_duration_since(drag.last_at).as_secs_f32();
        if dt > 0.0 {
            let instant = dx / dt;
            drag.velocity = 0.8 * instant + 0.2 * drag.velocity;
        }
        drag.last_column = column;
        drag.last_at = now;
        drag.travelled = drag.travelled.saturating_add(dx.abs() as u32);
        self.pointer = Some(drag);
        self.apply(drag.strip, Gesture::DragBy(dx));
    }

    /// Settle the strip under a pointer gesture whose release will never
    /// arrive (mouse capture turned off, route changed). No fling.
    pub fn pointer_cancel(&mut self) {
        if let Some(drag) = self.pointer.take() {
            tracing::debug!(strip = %drag.strip, "pointer gesture cancelled");
            self.apply(drag.strip, Gesture::Release(0.0));
        }
    }

    /// Release the pointer. A pause before release kills the fling; a tap on
    /// the places strip explores the centred place.
    pub fn pointer_up(&mut self, now: Instant) {
        let Some(drag) = self.pointer.take() else {
            return;
        };
        let idle = now.saturating_duration_since(drag.last_at);
        let velocity = if idle.as_millis() > 100 { 0.0 } else { drag.velocity };
        self.apply(drag.strip, Gesture::Release(velocity));
        if drag.travelled == 0 && drag.strip == Strip::Places {
            self.explore();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::dataset::StaticDataset;
    use std::time::Duration;

    fn app() -> App {
        App::new(&StaticDataset::demo(), LayoutMetrics::new(90.0, 30.0), Settings::default())
    }

    #[test]
    fn pointer_fling_moves_countries_forward() {
        let mut app = app();
        let t0 = Instant::now();
        app.pointer_down(Strip::Countries, 60, t0);
        app.pointer_drag(50, t0 + Duration::from_millis(20));
        app.pointer_drag(40, t0 + Duration::from_millis(40));
        app.pointer_up(t0 + Duration::from_millis(50));
        for _ in 0..30 {
            app.tick(Duration::from_millis(16));
        }
        assert!(app.selection().country > 1);
        assert_eq!(
            app.places.sequence().real(1),
            app.selected_country().and_then(|c| c.items.first())
        );
    }

    #[test]
    fn tap_on_places_explores() {
        let mut app = app();
        let t0 = Instant::now();
        app.pointer_down(Strip::Places, 45, t0);
        app.pointer_up(t0 + Duration::from_millis(30));
        assert!(matches!(app.router.current(), crate::app::router::Route::Place(i) if i.name == "Kyoto"));
        assert!(app.back());
        assert!(app.router.is_dashboard());
    }

    #[test]
    fn cancel_settles_a_live_drag_without_fling() {
        let mut app = app();
        let t0 = Instant::now();
        app.pointer_down(Strip::Countries, 60, t0);
        app.pointer_drag(20, t0 + Duration::from_millis(10));
        app.pointer_cancel();
        assert!(app.pointer.is_none());
        assert_eq!(app.countries.state(), super::super::carousel::GestureState::Settled);
        assert_eq!(app.selection().country, 2);
        app.pointer_cancel();
        assert_eq!(app.selection().country, 2);
    }

    #[test]
    fn paused_release_settles_in_place() {
        let mut app = app();
        let t0 = Instant::now();
        app.pointer_down(Strip::Countries, 60, t0);
        app.pointer_drag(40, t0 + Duration::from_millis(10));
        app.pointer_up(t0 + Duration::from_millis(400));
        assert_eq!(app.countries.state(), super::super::carousel::GestureState::Settled);
        assert_eq!(app.selection().country, 2);
    }
}
