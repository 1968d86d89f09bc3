use serde::{Deserialize, Serialize};

use super::interpolate::{breakpoints, interpolate};

/// Output ranges for the four scroll-driven properties, as
/// `[previous, centred, next]`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VisualRanges {
    pub icon_size: [f32; 3],
    pub font_size: [f32; 3],
    pub opacity: [f32; 3],
    /// Divisors of the viewport height giving the place card height.
    pub card_height_divisors: [f32; 3],
}

impl Default for VisualRanges {
    fn default() -> Self {
        VisualRanges {
            icon_size: [25.0, 60.0, 25.0],
            font_size: [15.0, 25.0, 15.0],
            opacity: [0.3, 1.0, 0.3],
            card_height_divisors: [2.25, 1.65, 2.25],
        }
    }
}

/// Viewport dimensions the carousels are laid out against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    pub viewport_width: f32,
    pub viewport_height: f32,
}

impl LayoutMetrics {
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        LayoutMetrics {
            viewport_width,
            viewport_height,
        }
    }

    /// Three countries share the viewport.
    pub fn country_width(&self) -> f32 {
        self.viewport_width / 3.0
    }

    pub fn place_width(&self) -> f32 {
        self.viewport_width / 1.2
    }

    /// Width of each sentinel in the places strip.
    pub fn place_padding(&self) -> f32 {
        (self.viewport_width - self.place_width()) / 2.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CountryVisual {
    pub opacity: f32,
    pub icon_size: f32,
    pub font_size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaceVisual {
    pub opacity: f32,
    pub card_height: f32,
}

pub fn country_visual(signal: f32, index: usize, width: f32, ranges: &VisualRanges) -> CountryVisual {
    let input = breakpoints(index, width);
    CountryVisual {
        opacity: interpolate(signal, input, ranges.opacity),
        icon_size: interpolate(signal, input, ranges.icon_size),
        font_size: interpolate(signal, input, ranges.font_size),
    }
}

pub fn place_visual(
    signal: f32,
    index: usize,
    width: f32,
    viewport_height: f32,
    ranges: &VisualRanges,
) -> PlaceVisual {
    let input = breakpoints(index, width);
    let heights = ranges.card_height_divisors.map(|d| viewport_height / d);
    PlaceVisual {
        opacity: interpolate(signal, input, ranges.opacity),
        card_height: interpolate(signal, input, heights),
    }
}
