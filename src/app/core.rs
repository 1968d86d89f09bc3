use std::cell::Cell;
use std::rc::Rc;
use std::time::Duration;

use self::carousel::{Gesture, PagedList};
use self::visuals::LayoutMetrics;
use super::dataset::Dataset;
use super::router::Router;
use super::settings::Settings;
use super::types::{Group, Item, RenderSequence, Selection, Strip};

// submodules live in `src/app/core/`

pub mod animator;
pub mod carousel;
pub mod interpolate;
mod navigation;
pub mod signal;
pub mod visuals;

type SelectionListener = Box<dyn FnMut(&Selection)>;

/// State of the dashboard screen: both carousels, the route stack and the
/// pointer gesture in progress.
///
/// Everything here lives exactly as long as the screen. Nothing is global
/// except the runtime keybinds and colours owned by the settings/ui layers.
pub struct App {
    pub region: String,
    pub countries: PagedList<Group>,
    pub places: PagedList<Item>,
    pub router: Router,
    pub metrics: LayoutMetrics,
    pub settings: Settings,
    /// Last "selection changed" notice, shown in the header.
    pub status: Option<String>,
    /// Pointer drag in progress, maintained by the mouse handler.
    pub pointer: Option<navigation::PointerDrag>,
    dirty: Rc<Cell<bool>>,
    selection_listeners: Vec<SelectionListener>,
}

pub use navigation::PointerDrag;

impl App {
    /// Build the screen over `dataset`.
    ///
    /// Precondition: the dataset has at least one group and every group has
    /// at least one item. Loaders validate this; the screen does not recover.
    pub fn new(dataset: &dyn Dataset, metrics: LayoutMetrics, settings: Settings) -> Self {
        let groups = dataset.groups().to_vec();
        let first_places = groups.first().map(|g| g.items.clone()).unwrap_or_default();
        let gesture = settings.gesture.clone();

        let mut countries = PagedList::new(
            RenderSequence::new(groups),
            metrics.country_width(),
            gesture.clone(),
        );
        let mut places = PagedList::new(
            RenderSequence::new(first_places),
            metrics.place_width(),
            gesture,
        );

        let dirty = Rc::new(Cell::new(true));
        for signal in [countries.signal_mut(), places.signal_mut()] {
            let flag = Rc::clone(&dirty);
            signal.subscribe(move |_| flag.set(true));
        }

        tracing::info!(
            region = dataset.region(),
            countries = countries.sequence().real_count(),
            "dashboard mounted"
        );

        App {
            region: dataset.region().to_string(),
            countries,
            places,
            router: Router::new(),
            metrics,
            settings,
            status: None,
            pointer: None,
            dirty,
            selection_listeners: Vec::new(),
        }
    }

    pub fn selection(&self) -> Selection {
        Selection {
            country: self.countries.settled_index(),
            place: self.places.settled_index(),
        }
    }

    pub fn selected_country(&self) -> Option<&Group> {
        self.countries.settled_item()
    }

    pub fn selected_place(&self) -> Option<&Item> {
        self.places.settled_item()
    }

    /// Register a callback for settled selection changes on either strip.
    pub fn on_selection_changed(&mut self, listener: impl FnMut(&Selection) + 'static) {
        self.selection_listeners.push(Box::new(listener));
    }

    /// Feed one gesture to a strip and route any resulting settle.
    pub fn apply(&mut self, strip: Strip, gesture: Gesture) {
        let settled = match strip {
            Strip::Countries => self.countries.handle(gesture),
            Strip::Places => self.places.handle(gesture),
        };
        if let Some(index) = settled {
            self.dispatch_settle(strip, index);
        }
    }

    /// Advance both strips' settle animations by `dt`.
    pub fn tick(&mut self, dt: Duration) {
        if let Some(index) = self.countries.tick(dt) {
            self.dispatch_settle(Strip::Countries, index);
        }
        if let Some(index) = self.places.tick(dt) {
            self.dispatch_settle(Strip::Places, index);
        }
    }

    /// Apply new viewport dimensions; both strips keep their settled page.
    pub fn resize(&mut self, metrics: LayoutMetrics) {
        if metrics == self.metrics {
            return;
        }
        self.metrics = metrics;
        self.countries.set_snap_width(metrics.country_width());
        self.places.set_snap_width(metrics.place_width());
        self.mark_dirty();
    }

    pub fn mark_dirty(&self) {
        self.dirty.set(true);
    }

    /// Returns whether a redraw is due and clears the flag.
    pub fn take_dirty(&self) -> bool {
        self.dirty.replace(false)
    }

    fn notify_selection(&mut self) {
        let selection = self.selection();
        for listener in self.selection_listeners.iter_mut() {
            listener(&selection);
        }
        self.mark_dirty();
    }
}
