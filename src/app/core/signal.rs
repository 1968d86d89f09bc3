use std::fmt;

type Observer = Box<dyn FnMut(f32)>;

/// Horizontal content offset of one carousel.
///
/// Written by exactly one producer (its own list's scroll events) and read
/// by any number of interpolations. Observers run synchronously inside
/// [`set`](Self::set), so a read that follows a write in the same event turn
/// always sees the new value.
pub struct ScrollSignal {
    value: f32,
    observers: Vec<Observer>,
}

impl ScrollSignal {
    pub fn new(initial: f32) -> Self {
        ScrollSignal {
            value: initial,
            observers: Vec::new(),
        }
    }

    pub fn get(&self) -> f32 {
        self.value
    }

    /// Store `x` unvalidated (negative during overscroll is fine) and notify.
    pub fn set(&mut self, x: f32) {
        self.value = x;
        for observer in self.observers.iter_mut() {
            observer(x);
        }
    }

    /// Observers live as long as the signal.
    pub fn subscribe(&mut self, observer: impl FnMut(f32) + 'static) {
        self.observers.push(Box::new(observer));
    }
}

impl Default for ScrollSignal {
    fn default() -> Self {
        Self::new(0.0)
    }
}

impl fmt::Debug for ScrollSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScrollSignal")
            .field("value", &self.value)
            .field("observers", &self.observers.len())
            .finish()
    }
}
