use std::ops::Range;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::animator::{Easing, SnapAnimator};
use super::signal::ScrollSignal;
use crate::app::types::RenderSequence;

/// Phase of a paged list's gesture cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureState {
    Idle,
    Dragging,
    Settling,
    Settled,
}

/// Input accepted by [`PagedList::handle`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Gesture {
    TouchDown,
    DragBy(f32),
    DragTo(f32),
    /// Touch released with the given velocity in cells per second.
    Release(f32),
    /// The scroll mechanism reports that motion ended at this offset.
    MomentumEnd(f32),
    /// Animate by this many pages relative to the current target.
    Page(isize),
}

/// Physics knobs shared by both carousels.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureConfig {
    /// Release velocities at or below this (cells/s) settle in place.
    pub fling_threshold: f32,
    /// How far ahead a fling is projected when picking its target page.
    pub fling_projection_ms: u64,
    pub snap_duration_ms: u64,
    pub easing: Easing,
}

impl Default for GestureConfig {
    fn default() -> Self {
        GestureConfig {
            fling_threshold: 8.0,
            fling_projection_ms: 250,
            snap_duration_ms: 180,
            easing: Easing::EaseOut,
        }
    }
}

/// Round half up: `2.5 -> 3`, `-2.5 -> -2`.
pub fn round_half_up(x: f32) -> f32 {
    (x + 0.5).floor()
}

/// A horizontally paginated, snap-to-item list over a [`RenderSequence`].
///
/// The settled index is only recomputed when the list enters
/// [`GestureState::Settled`], never per frame, so it cannot flap while a
/// gesture is in flight. Every method that can cause a settle returns the new
/// index exactly once, leaving routing to the owner.
#[derive(Debug)]
pub struct PagedList<T> {
    sequence: RenderSequence<T>,
    signal: ScrollSignal,
    snap_width: f32,
    state: GestureState,
    settled_index: usize,
    animator: SnapAnimator,
    config: GestureConfig,
}

impl<T> PagedList<T> {
    pub fn new(sequence: RenderSequence<T>, snap_width: f32, config: GestureConfig) -> Self {
        PagedList {
            sequence,
            signal: ScrollSignal::default(),
            snap_width,
            state: GestureState::Idle,
            settled_index: 1,
            animator: SnapAnimator::new(),
            config,
        }
    }

    pub fn sequence(&self) -> &RenderSequence<T> {
        &self.sequence
    }

    pub fn signal(&self) -> &ScrollSignal {
        &self.signal
    }

    pub fn signal_mut(&mut self) -> &mut ScrollSignal {
        &mut self.signal
    }

    pub fn offset(&self) -> f32 {
        self.signal.get()
    }

    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Last settled RenderSequence index; always within `[1, len - 2]`.
    pub fn settled_index(&self) -> usize {
        self.settled_index
    }

    pub fn settled_item(&self) -> Option<&T> {
        self.sequence.resolve(self.settled_index)
    }

    /// Page width used for both snap points and index arithmetic.
    pub fn snap_width(&self) -> f32 {
        self.snap_width
    }

    pub fn is_in_motion(&self) -> bool {
        matches!(self.state, GestureState::Dragging | GestureState::Settling)
    }

    /// Offset at which `index` is centred.
    pub fn offset_for(&self, index: usize) -> f32 {
        index.saturating_sub(1) as f32 * self.snap_width
    }

    /// Page index for an offset, clamped onto the real entries.
    pub fn index_for_offset(&self, offset: f32) -> usize {
        let last = self.sequence.last_real_index();
        if self.snap_width <= 0.0 || !offset.is_finite() {
            return self.sequence.first_real_index();
        }
        let page = round_half_up(offset / self.snap_width) + 1.0;
        page.clamp(1.0, last as f32) as usize
    }

    pub fn handle(&mut self, gesture: Gesture) -> Option<usize> {
        match gesture {
            Gesture::TouchDown => {
                self.touch_down();
                None
            }
            Gesture::DragBy(dx) => {
                self.drag_by(dx);
                None
            }
            Gesture::DragTo(x) => {
                self.drag_to(x);
                None
            }
            Gesture::Release(v) => self.release(v),
            Gesture::MomentumEnd(x) => Some(self.momentum_end(x)),
            Gesture::Page(delta) => self.page_by(delta),
        }
    }

    /// Begin a touch. Any in-flight settle animation is dropped.
    pub fn touch_down(&mut self) {
        self.animator.cancel();
        self.state = GestureState::Dragging;
    }

    /// Move by `dx`. Returns `false` (and does nothing) outside a drag, which
    /// is how callbacks from a gesture discarded by a reset are absorbed.
    pub fn drag_by(&mut self, dx: f32) -> bool {
        if self.state != GestureState::Dragging {
            tracing::trace!("ignoring drag outside of a gesture");
            return false;
        }
        let next = self.signal.get() + dx;
        self.signal.set(next);
        true
    }

    pub fn drag_to(&mut self, x: f32) -> bool {
        if self.state != GestureState::Dragging {
            tracing::trace!("ignoring drag outside of a gesture");
            return false;
        }
        self.signal.set(x);
        true
    }

    /// End a touch. A fast release animates to the projected page, a slow
    /// one settles immediately at the nearest page.
    pub fn release(&mut self, velocity: f32) -> Option<usize> {
        if self.state != GestureState::Dragging {
            return None;
        }
        let offset = self.signal.get();
        if velocity.abs() <= self.config.fling_threshold || !velocity.is_finite() {
            return Some(self.settle_at(offset));
        }
        let projection = self.config.fling_projection_ms as f32 / 1000.0;
        let target = self.index_for_offset(offset + velocity * projection);
        self.animate_to(target)
    }

    /// Platform-style momentum end: adopt `offset`, then settle.
    pub fn momentum_end(&mut self, offset: f32) -> usize {
        self.animator.cancel();
        self.signal.set(offset);
        self.settle_at(offset)
    }

    /// Animate `delta` pages from the current target. Ignored mid-drag.
    pub fn page_by(&mut self, delta: isize) -> Option<usize> {
        if self.state == GestureState::Dragging {
            return None;
        }
        let base = if self.animator.is_active() {
            self.index_for_offset(self.animator.target())
        } else {
            self.settled_index
        };
        let target = base.saturating_add_signed(delta);
        self.scroll_to(target)
    }

    /// Animate to `index` (clamped). Ignored mid-drag.
    pub fn scroll_to(&mut self, index: usize) -> Option<usize> {
        if self.state == GestureState::Dragging {
            return None;
        }
        let target = self.sequence.clamp_to_real(index);
        if !self.animator.is_active()
            && target == self.settled_index
            && self.signal.get() == self.offset_for(target)
        {
            return None;
        }
        self.animate_to(target)
    }

    /// Advance a settle animation. Returns the settled index on the tick
    /// that finishes it.
    pub fn tick(&mut self, dt: Duration) -> Option<usize> {
        if self.state != GestureState::Settling {
            return None;
        }
        let next = self.animator.tick(dt)?;
        self.signal.set(next);
        if self.animator.is_active() {
            None
        } else {
            Some(self.settle_at(next))
        }
    }

    /// Hard reset onto a new sequence: offset 0, settled at the first real
    /// entry. Pending gesture state is discarded.
    pub fn reset(&mut self, sequence: RenderSequence<T>) {
        self.sequence = sequence;
        self.animator.cancel();
        self.state = GestureState::Settled;
        self.settled_index = 1;
        self.signal.set(0.0);
    }

    /// Change the page width (viewport resize) while keeping the current page.
    pub fn set_snap_width(&mut self, width: f32) {
        if width <= 0.0 || width == self.snap_width {
            return;
        }
        let ratio = if self.snap_width > 0.0 { width / self.snap_width } else { 0.0 };
        self.snap_width = width;
        match self.state {
            GestureState::Idle | GestureState::Settled => {
                let offset = self.offset_for(self.settled_index);
                self.signal.set(offset);
            }
            GestureState::Dragging | GestureState::Settling => {
                self.animator.rescale(ratio);
                let offset = self.signal.get() * ratio;
                self.signal.set(offset);
            }
        }
    }

    /// RenderSequence indices of real entries that intersect a viewport of
    /// `viewport_width` centred on the current offset.
    pub fn visible_range(&self, viewport_width: f32) -> Range<usize> {
        if self.sequence.is_empty() || self.snap_width <= 0.0 {
            return 1..1;
        }
        let w = self.snap_width;
        let reach = viewport_width / 2.0 + w / 2.0;
        let offset = self.signal.get();
        let lo = ((offset - reach) / w).floor() + 1.0;
        let hi = ((offset + reach) / w).ceil() + 1.0;
        let last = self.sequence.last_real_index() as f32;
        let start = lo.clamp(1.0, last + 1.0) as usize;
        let end = (hi + 1.0).clamp(1.0, last + 1.0) as usize;
        start..end.max(start)
    }

    fn animate_to(&mut self, index: usize) -> Option<usize> {
        let from = self.signal.get();
        let to = self.offset_for(index);
        let duration = Duration::from_millis(self.config.snap_duration_ms);
        if duration.is_zero() {
            return Some(self.settle_at(to));
        }
        self.animator.start(from, to, duration, self.config.easing);
        self.state = GestureState::Settling;
        None
    }

    fn settle_at(&mut self, offset: f32) -> usize {
        let index = self.index_for_offset(offset);
        self.settled_index = index;
        self.state = GestureState::Settled;
        self.signal.set(self.offset_for(index));
        tracing::debug!(index, offset, "carousel settled");
        index
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(n: usize) -> PagedList<usize> {
        PagedList::new(RenderSequence::new(0..n), 10.0, GestureConfig::default())
    }

    fn run_until_settled(l: &mut PagedList<usize>) -> Vec<usize> {
        let mut events = Vec::new();
        for _ in 0..200 {
            if let Some(i) = l.tick(Duration::from_millis(16)) {
                events.push(i);
            }
        }
        events
    }

    #[test]
    fn index_rounds_half_up_and_clamps() {
        let l = list(5);
        assert_eq!(l.index_for_offset(0.0), 1);
        assert_eq!(l.index_for_offset(4.9), 1);
        assert_eq!(l.index_for_offset(5.0), 2);
        assert_eq!(l.index_for_offset(25.0), 4);
        assert_eq!(l.index_for_offset(-30.0), 1);
        assert_eq!(l.index_for_offset(10_000.0), 5);
        assert_eq!(l.index_for_offset(f32::NAN), 1);
        assert_eq!(round_half_up(-2.5), -2.0);
    }

    #[test]
    fn slow_release_settles_directly_and_snaps() {
        let mut l = list(4);
        l.touch_down();
        assert_eq!(l.state(), GestureState::Dragging);
        l.drag_by(13.0);
        assert_eq!(l.release(0.0), Some(2));
        assert_eq!(l.state(), GestureState::Settled);
        assert_eq!(l.offset(), 10.0);
    }

    #[test]
    fn fling_settles_once_after_ticks() {
        let mut l = list(6);
        l.touch_down();
        l.drag_by(2.0);
        assert_eq!(l.release(100.0), None);
        assert_eq!(l.state(), GestureState::Settling);
        // Settled index only changes at momentum end.
        assert_eq!(l.settled_index(), 1);
        let events = run_until_settled(&mut l);
        assert_eq!(events, vec![4]);
        assert_eq!(l.offset(), 30.0);
    }

    #[test]
    fn configured_easing_shapes_the_snap() {
        let config = GestureConfig {
            easing: Easing::Linear,
            snap_duration_ms: 100,
            ..GestureConfig::default()
        };
        let mut l = PagedList::new(RenderSequence::new(0..5), 10.0, config);
        l.scroll_to(3);
        assert_eq!(l.tick(Duration::from_millis(50)), None);
        assert!((l.offset() - 10.0).abs() < 1e-3);
        assert_eq!(run_until_settled(&mut l), vec![3]);
    }

    #[test]
    fn stale_drag_callbacks_are_ignored() {
        let mut l = list(3);
        assert!(!l.drag_by(5.0));
        assert_eq!(l.release(500.0), None);
        assert_eq!(l.offset(), 0.0);
        assert_eq!(l.state(), GestureState::Idle);
    }

    #[test]
    fn touch_down_interrupts_settling() {
        let mut l = list(5);
        assert_eq!(l.page_by(2), None);
        l.tick(Duration::from_millis(16));
        l.touch_down();
        assert_eq!(l.tick(Duration::from_millis(500)), None);
        assert_eq!(l.state(), GestureState::Dragging);
    }

    #[test]
    fn page_by_accumulates_while_animating() {
        let mut l = list(5);
        l.page_by(1);
        l.page_by(1);
        assert_eq!(run_until_settled(&mut l), vec![3]);
        assert_eq!(l.page_by(-10), None);
        assert_eq!(run_until_settled(&mut l), vec![1]);
        assert_eq!(l.page_by(-1), None);
        assert!(run_until_settled(&mut l).is_empty());
    }

    #[test]
    fn reset_returns_to_first_real_entry() {
        let mut l = list(5);
        l.momentum_end(30.0);
        assert_eq!(l.settled_index(), 4);
        l.touch_down();
        l.drag_by(3.0);
        l.reset(RenderSequence::new(vec![7, 8]));
        assert_eq!(l.state(), GestureState::Settled);
        assert_eq!(l.settled_index(), 1);
        assert_eq!(l.offset(), 0.0);
        assert_eq!(l.settled_item(), Some(&7));
        assert_eq!(l.release(900.0), None);
    }

    #[test]
    fn resize_keeps_the_settled_page() {
        let mut l = list(5);
        l.momentum_end(20.0);
        l.set_snap_width(16.0);
        assert_eq!(l.settled_index(), 3);
        assert_eq!(l.offset(), 32.0);
        assert_eq!(l.index_for_offset(l.offset()), 3);
    }

    #[test]
    fn visible_range_covers_neighbours_only() {
        let mut l = list(10);
        assert_eq!(l.visible_range(30.0), 1..4);
        l.momentum_end(50.0);
        let r = l.visible_range(30.0);
        assert!(r.contains(&6));
        assert!(r.start >= 4 && r.end <= 9, "{r:?}");
    }
}
