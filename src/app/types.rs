use serde::{Deserialize, Serialize};
use std::fmt;

/// A single place shown in the lower carousel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Asset reference for the card background. Never loaded by the core.
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub rating: Option<f32>,
    #[serde(default)]
    pub tags: Vec<String>,
}

impl Item {
    pub fn new(id: u32, name: impl Into<String>, description: impl Into<String>) -> Self {
        Item {
            id,
            name: name.into(),
            description: description.into(),
            image: String::new(),
            rating: None,
            tags: Vec::new(),
        }
    }
}

/// A country together with the places that belong to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Group {
    pub id: u32,
    pub name: String,
    #[serde(default)]
    pub image: String,
    #[serde(default, alias = "places")]
    pub items: Vec<Item>,
}

impl Group {
    pub fn new(id: u32, name: impl Into<String>, items: Vec<Item>) -> Self {
        Group {
            id,
            name: name.into(),
            image: String::new(),
            items,
        }
    }
}

/// Out-of-band padding markers placed around every rendered sequence so
/// the first and last real entries can sit in the centre of the viewport.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentinel {
    Start,
    End,
}

impl Sentinel {
    /// Reserved identifier. Real identifiers are unsigned so these never collide.
    pub const fn id(self) -> i64 {
        match self {
            Sentinel::Start => -1,
            Sentinel::End => -2,
        }
    }
}

/// One position of a [`RenderSequence`].
#[derive(Debug, Clone, PartialEq)]
pub enum Slot<T> {
    Sentinel(Sentinel),
    Real(T),
}

impl<T> Slot<T> {
    pub fn as_real(&self) -> Option<&T> {
        match self {
            Slot::Real(v) => Some(v),
            Slot::Sentinel(_) => None,
        }
    }

    pub fn is_sentinel(&self) -> bool {
        matches!(self, Slot::Sentinel(_))
    }
}

/// `[Start, entries..., End]`, the unit fed to a paged list.
///
/// The length is always `real_count() + 2` and the sentinels always occupy
/// index `0` and `len() - 1`. The constructor is the only way to build one,
/// so the invariant cannot be broken from outside.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderSequence<T> {
    slots: Vec<Slot<T>>,
}

impl<T> RenderSequence<T> {
    pub fn new(entries: impl IntoIterator<Item = T>) -> Self {
        let mut slots = vec![Slot::Sentinel(Sentinel::Start)];
        slots.extend(entries.into_iter().map(Slot::Real));
        slots.push(Slot::Sentinel(Sentinel::End));
        RenderSequence { slots }
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when the sequence holds nothing but its two sentinels.
    pub fn is_empty(&self) -> bool {
        self.real_count() == 0
    }

    pub fn real_count(&self) -> usize {
        self.slots.len() - 2
    }

    pub fn get(&self, index: usize) -> Option<&Slot<T>> {
        self.slots.get(index)
    }

    /// Entry at `index`, or `None` for sentinels and out-of-range indices.
    pub fn real(&self, index: usize) -> Option<&T> {
        self.slots.get(index).and_then(Slot::as_real)
    }

    pub const fn first_real_index(&self) -> usize {
        1
    }

    /// Index of the last real entry. Falls back to `1` for a sequence
    /// without real entries so range arithmetic never underflows.
    pub fn last_real_index(&self) -> usize {
        self.slots.len().saturating_sub(2).max(1)
    }

    /// Clamp any index onto the real range `[1, len - 2]`.
    pub fn clamp_to_real(&self, index: usize) -> usize {
        index.clamp(self.first_real_index(), self.last_real_index())
    }

    /// Resolve an index to the nearest real entry.
    pub fn resolve(&self, index: usize) -> Option<&T> {
        self.real(self.clamp_to_real(index))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Slot<T>> {
        self.slots.iter()
    }

    pub fn reals(&self) -> impl Iterator<Item = &T> {
        self.slots.iter().filter_map(Slot::as_real)
    }
}

/// Which carousel an operation targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strip {
    Countries,
    Places,
}

impl fmt::Display for Strip {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strip::Countries => write!(f, "countries"),
            Strip::Places => write!(f, "places"),
        }
    }
}

/// Settled indices of both carousels, as RenderSequence indices.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub country: usize,
    pub place: usize,
}
