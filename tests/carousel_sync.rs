use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

use travelZoom::app::{
    App, Gesture, GestureState, Group, Item, LayoutMetrics, Navigator, Selection, StaticDataset, Strip,
};
use travelZoom::app::settings::Settings;

#[derive(Default)]
struct RecordingNavigator {
    opened: Vec<Item>,
}

impl Navigator for RecordingNavigator {
    fn navigate_to_detail(&mut self, item: &Item) {
        self.opened.push(item.clone());
    }
}

fn places(prefix: &str, n: u32) -> Vec<Item> {
    (1..=n)
        .map(|i| Item::new(i, format!("{prefix}{i}"), format!("about {prefix}{i}")))
        .collect()
}

/// Three countries with 2, 3 and 1 places on a 90x30 viewport:
/// country pages are 30 cells wide, place pages 75.
fn app() -> App {
    let ds = StaticDataset::new(
        "Test",
        vec![
            Group::new(1, "A", places("a", 2)),
            Group::new(2, "B", places("b", 3)),
            Group::new(3, "C", places("c", 1)),
        ],
    )
    .unwrap();
    App::new(&ds, LayoutMetrics::new(90.0, 30.0), Settings::default())
}

fn settle(app: &mut App) {
    for _ in 0..100 {
        app.tick(Duration::from_millis(16));
    }
}

#[test]
fn mounts_on_first_country() {
    let app = app();
    assert_eq!(app.selection(), Selection { country: 1, place: 1 });
    assert_eq!(app.places.sequence().real_count(), 2);
    assert_eq!(app.places.sequence().len(), 4);
    assert_eq!(app.places.offset(), 0.0);
}

#[test]
fn top_settle_rebuilds_and_resets_bottom() {
    let mut app = app();
    app.apply(Strip::Places, Gesture::MomentumEnd(75.0));
    assert_eq!(app.selection().place, 2);

    app.apply(Strip::Countries, Gesture::MomentumEnd(30.0));
    assert_eq!(app.selection(), Selection { country: 2, place: 1 });
    let names: Vec<_> = app.places.sequence().reals().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["b1", "b2", "b3"]);
    assert_eq!(app.places.offset(), 0.0);
    assert_eq!(app.places.state(), GestureState::Settled);

    app.apply(Strip::Countries, Gesture::MomentumEnd(60.0));
    assert_eq!(app.places.sequence().real_count(), 1);
    assert_eq!(app.selected_place().map(|p| p.name.as_str()), Some("c1"));
}

#[test]
fn settling_on_the_same_country_still_resets_places() {
    let mut app = app();
    app.apply(Strip::Places, Gesture::MomentumEnd(75.0));
    app.apply(Strip::Countries, Gesture::TouchDown);
    app.apply(Strip::Countries, Gesture::DragBy(5.0));
    app.apply(Strip::Countries, Gesture::Release(0.0));
    assert_eq!(app.selection(), Selection { country: 1, place: 1 });
    assert_eq!(app.places.offset(), 0.0);
}

#[test]
fn rapid_flick_clamps_and_notifies_once() {
    let mut app = app();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    app.on_selection_changed(move |s| sink.borrow_mut().push(*s));

    app.apply(Strip::Countries, Gesture::TouchDown);
    for _ in 0..10 {
        app.apply(Strip::Countries, Gesture::DragBy(40.0));
    }
    app.apply(Strip::Countries, Gesture::Release(2_000.0));
    assert!(seen.borrow().is_empty());
    settle(&mut app);

    assert_eq!(*seen.borrow(), vec![Selection { country: 3, place: 1 }]);
    assert_eq!(app.countries.offset(), 60.0);
}

#[test]
fn overscroll_before_the_start_clamps_to_first() {
    let mut app = app();
    app.apply(Strip::Countries, Gesture::MomentumEnd(-500.0));
    assert_eq!(app.selection().country, 1);
    assert_eq!(app.countries.offset(), 0.0);
}

#[test]
fn commit_is_a_no_op_mid_gesture() {
    let mut app = app();
    let mut nav = RecordingNavigator::default();

    app.apply(Strip::Places, Gesture::TouchDown);
    app.apply(Strip::Places, Gesture::DragBy(60.0));
    app.commit(&mut nav);
    assert!(nav.opened.is_empty());

    app.apply(Strip::Places, Gesture::Release(0.0));
    app.commit(&mut nav);
    assert_eq!(nav.opened.len(), 1);
    assert_eq!(nav.opened[0].name, "a2");
}

#[test]
fn commit_never_hands_over_a_sentinel() {
    let mut app = app();
    let mut nav = RecordingNavigator::default();

    app.apply(Strip::Places, Gesture::MomentumEnd(10_000.0));
    app.commit(&mut nav);
    app.apply(Strip::Places, Gesture::MomentumEnd(-10_000.0));
    app.commit(&mut nav);

    let names: Vec<_> = nav.opened.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, ["a2", "a1"]);
}

#[test]
fn stale_place_callbacks_after_a_country_change_are_ignored() {
    let mut app = app();
    app.apply(Strip::Places, Gesture::TouchDown);
    app.apply(Strip::Places, Gesture::DragBy(30.0));

    app.apply(Strip::Countries, Gesture::MomentumEnd(30.0));
    assert_eq!(app.places.offset(), 0.0);

    app.apply(Strip::Places, Gesture::DragBy(40.0));
    app.apply(Strip::Places, Gesture::Release(500.0));
    settle(&mut app);

    assert_eq!(app.places.offset(), 0.0);
    assert_eq!(app.places.state(), GestureState::Settled);
    assert_eq!(app.selected_place().map(|p| p.name.as_str()), Some("b1"));
}

#[test]
fn keyboard_paging_accumulates_while_animating() {
    let mut app = app();
    app.page(Strip::Countries, 1);
    app.page(Strip::Countries, 1);
    app.page(Strip::Countries, 1);
    settle(&mut app);
    assert_eq!(app.selection().country, 3);
    assert_eq!(app.places.sequence().real_count(), 1);
}

#[test]
fn second_country_third_place_is_committed() {
    let mut app = app();
    let mut nav = RecordingNavigator::default();

    app.apply(Strip::Countries, Gesture::MomentumEnd(30.0));
    assert_eq!(app.places.sequence().len(), 5);

    app.apply(Strip::Places, Gesture::MomentumEnd(150.0));
    assert_eq!(app.selection(), Selection { country: 2, place: 3 });
    app.commit(&mut nav);
    assert_eq!(nav.opened.len(), 1);
    assert_eq!(nav.opened[0].name, "b3");
}
