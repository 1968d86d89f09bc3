pub mod core;
pub mod dataset;
pub mod router;
pub mod settings;
pub mod types;

pub use self::core::carousel::{Gesture, GestureConfig, GestureState, PagedList};
pub use self::core::visuals::{LayoutMetrics, VisualRanges};
pub use self::core::App;
pub use dataset::{Dataset, DatasetError, StaticDataset};
pub use router::{Navigator, Route, Router};
pub use types::{Group, Item, RenderSequence, Selection, Sentinel, Slot, Strip};
