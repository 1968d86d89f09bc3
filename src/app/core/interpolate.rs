//! Three-point linear interpolation driven by a scroll offset.

/// Values that can be blended linearly. `t` is in `[0, 1]` for clamped use
/// and may leave that range when extrapolating.
pub trait Lerp: Copy {
    fn lerp(a: Self, b: Self, t: f32) -> Self;
}

impl Lerp for f32 {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        a + (b - a) * t
    }
}

/// 24-bit colour, blended per channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rgb(pub u8, pub u8, pub u8);

impl Lerp for Rgb {
    fn lerp(a: Self, b: Self, t: f32) -> Self {
        let ch = |x: u8, y: u8| <f32 as Lerp>::lerp(x as f32, y as f32, t).round().clamp(0.0, 255.0) as u8;
        Rgb(ch(a.0, b.0), ch(a.1, b.1), ch(a.2, b.2))
    }
}

/// Behaviour outside `[p-1, p+1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Extrapolate {
    /// Hold the edge output.
    #[default]
    Clamp,
    /// Continue the slope of the nearest segment.
    Extend,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interpolation<T> {
    input: [f32; 3],
    output: [T; 3],
    extrapolate: Extrapolate,
}

impl<T: Lerp> Interpolation<T> {
    /// `input` must be non-decreasing.
    pub fn new(input: [f32; 3], output: [T; 3]) -> Self {
        Interpolation {
            input,
            output,
            extrapolate: Extrapolate::Clamp,
        }
    }

    pub fn extrapolate(mut self, mode: Extrapolate) -> Self {
        self.extrapolate = mode;
        self
    }

    pub fn interpolate(&self, signal: f32) -> T {
        let [lo, mid, hi] = self.input;
        if signal <= lo {
            return match self.extrapolate {
                Extrapolate::Clamp => self.output[0],
                Extrapolate::Extend => self.segment(0, signal),
            };
        }
        if signal >= hi {
            return match self.extrapolate {
                Extrapolate::Clamp => self.output[2],
                Extrapolate::Extend => self.segment(1, signal),
            };
        }
        if signal < mid {
            self.segment(0, signal)
        } else {
            self.segment(1, signal)
        }
    }

    fn segment(&self, k: usize, signal: f32) -> T {
        let (a, b) = (self.input[k], self.input[k + 1]);
        if b == a {
            return self.output[k + 1];
        }
        let t = (signal - a) / (b - a);
        T::lerp(self.output[k], self.output[k + 1], t)
    }
}

/// One-shot form of [`Interpolation::interpolate`] with clamping.
pub fn interpolate<T: Lerp>(signal: f32, input: [f32; 3], output: [T; 3]) -> T {
    Interpolation::new(input, output).interpolate(signal)
}

/// Breakpoints for the entry at RenderSequence index `index`.
///
/// Offset `0` centres index 1, so the entry is centred at
/// `(index - 1) * width` and fully faded one page either side.
pub fn breakpoints(index: usize, width: f32) -> [f32; 3] {
    let centre = (index as f32 - 1.0) * width;
    [centre - width, centre, centre + width]
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPACITY: [f32; 3] = [0.3, 1.0, 0.3];

    #[test]
    fn clamps_outside_the_domain() {
        let input = breakpoints(3, 40.0);
        assert_eq!(input, [40.0, 80.0, 120.0]);
        for s in [-1000.0, -1.0, 0.0, 39.9, 40.0] {
            assert_eq!(interpolate(s, input, OPACITY), 0.3, "signal {s}");
        }
        for s in [120.0, 120.5, 5000.0] {
            assert_eq!(interpolate(s, input, OPACITY), 0.3, "signal {s}");
        }
    }

    #[test]
    fn midpoint_is_exact() {
        let input = breakpoints(2, 33.3);
        assert_eq!(interpolate(input[1], input, [25.0, 60.0, 25.0]), 60.0);
        assert_eq!(interpolate(input[1], input, [15.0, 25.0, 15.0]), 25.0);
    }

    #[test]
    fn linear_between_breakpoints() {
        let input = [0.0, 10.0, 20.0];
        let size = [25.0, 60.0, 25.0];
        assert!((interpolate(5.0, input, size) - 42.5).abs() < 1e-4);
        assert!((interpolate(15.0, input, size) - 42.5).abs() < 1e-4);
    }

    #[test]
    fn extend_continues_the_edge_slope() {
        let i = Interpolation::new([0.0, 10.0, 20.0], [0.0, 10.0, 30.0]).extrapolate(Extrapolate::Extend);
        assert!((i.interpolate(-5.0) - -5.0).abs() < 1e-4);
        assert!((i.interpolate(25.0) - 40.0).abs() < 1e-4);
    }

    #[test]
    fn composite_colour_output() {
        let black = Rgb(0, 0, 0);
        let white = Rgb(255, 255, 255);
        let fade = Interpolation::new([0.0, 1.0, 2.0], [black, white, black]);
        assert_eq!(fade.interpolate(1.0), white);
        assert_eq!(fade.interpolate(-3.0), black);
        assert_eq!(fade.interpolate(0.5), Rgb(128, 128, 128));
    }

    #[test]
    fn degenerate_segment_returns_right_edge() {
        let i = Interpolation::new([5.0, 5.0, 5.0], [1.0, 2.0, 3.0]);
        assert_eq!(i.interpolate(4.0), 1.0);
        assert_eq!(i.interpolate(6.0), 3.0);
    }
}
