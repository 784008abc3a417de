//! Scroll-driven value interpolation.
//!
//! Every animated property on the page is a clamped linear mapping from a
//! window of scroll offsets onto an output range. Components hold a table of
//! [`Transform`]s selected by breakpoint and sample them with the current
//! scroll offset on each render.

use crate::hooks::screen_size::Breakpoint;

/// Pixel distance over which the hero animation plays out.
pub fn section_height(breakpoint: Breakpoint) -> f64 {
    match breakpoint {
        Breakpoint::Desktop => 900.0,
        Breakpoint::Mobile => 700.0,
        Breakpoint::SuperMobile => 550.0,
    }
}

/// Clamped linear mapping from an input window onto an output range.
///
/// Offsets outside the window saturate at the nearest endpoint; there is no
/// extrapolation. Output moves monotonically across the window, constant when
/// both output endpoints are equal.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    input: [f64; 2],
    output: [f64; 2],
}

impl Transform {
    pub const fn new(input: [f64; 2], output: [f64; 2]) -> Self {
        Self { input, output }
    }

    /// Sample the mapping at `offset`.
    pub fn at(&self, offset: f64) -> f64 {
        let [a, b] = self.input;
        let [p, q] = self.output;
        if b <= a {
            // Degenerate window behaves as a step at its start.
            return if offset < a { p } else { q };
        }
        let t = ((offset - a) / (b - a)).clamp(0.0, 1.0);
        p + (q - p) * t
    }
}

/// Which side of the hero a staggered content panel enters from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
}

impl Direction {
    fn multiplier(self) -> f64 {
        match self {
            Direction::Left => -1.0,
            Direction::Right => 1.0,
        }
    }
}

/// The transforms behind one staggered panel: three horizontal offsets with
/// increasing travel that settle to zero over the section, an entrance
/// opacity ramp whose window depends on the entry side, and a wrapper
/// opacity ramp over the last fifth of the section.
#[derive(Clone, Copy, Debug)]
pub struct ParallaxItems {
    pub x1: Transform,
    pub x2: Transform,
    pub x3: Transform,
    pub opacity: Transform,
    pub wrapper_opacity: Transform,
}

impl ParallaxItems {
    pub fn new(direction: Direction, section_height: f64) -> Self {
        let m = direction.multiplier();
        let settle = [0.0, section_height];
        let opacity_window = match direction {
            Direction::Left => [0.6 * section_height, section_height],
            Direction::Right => [0.4 * section_height, 0.8 * section_height],
        };
        Self {
            x1: Transform::new(settle, [100.0 * m, 0.0]),
            x2: Transform::new(settle, [150.0 * m, 0.0]),
            x3: Transform::new(settle, [200.0 * m, 0.0]),
            opacity: Transform::new(opacity_window, [0.0, 1.0]),
            wrapper_opacity: Transform::new(
                [0.8 * section_height, section_height],
                [0.0, 1.0],
            ),
        }
    }

    /// Sample every transform at one scroll offset.
    pub fn sample(&self, offset: f64) -> ParallaxFrame {
        ParallaxFrame {
            x1: self.x1.at(offset),
            x2: self.x2.at(offset),
            x3: self.x3.at(offset),
            opacity: self.opacity.at(offset),
            wrapper_opacity: self.wrapper_opacity.at(offset),
        }
    }
}

/// Sampled panel values for one scroll offset.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParallaxFrame {
    pub x1: f64,
    pub x2: f64,
    pub x3: f64,
    pub opacity: f64,
    pub wrapper_opacity: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn output_saturates_below_the_window() {
        let t = Transform::new([100.0, 200.0], [3.0, 9.0]);
        assert!(approx(t.at(-50.0), 3.0));
        assert!(approx(t.at(0.0), 3.0));
        assert!(approx(t.at(100.0), 3.0));
    }

    #[test]
    fn output_saturates_above_the_window() {
        let t = Transform::new([100.0, 200.0], [3.0, 9.0]);
        assert!(approx(t.at(200.0), 9.0));
        assert!(approx(t.at(10_000.0), 9.0));
    }

    #[test]
    fn output_is_monotonic_inside_the_window() {
        let rising = Transform::new([0.0, 100.0], [0.0, 1.0]);
        let falling = Transform::new([0.0, 100.0], [1.0, 0.0]);
        let mut prev_up = rising.at(0.0);
        let mut prev_down = falling.at(0.0);
        for step in 1..=10 {
            let offset = f64::from(step) * 10.0;
            let up = rising.at(offset);
            let down = falling.at(offset);
            assert!(up > prev_up);
            assert!(down < prev_down);
            prev_up = up;
            prev_down = down;
        }
        assert!(approx(rising.at(50.0), 0.5));
    }

    #[test]
    fn output_is_constant_when_endpoints_match() {
        let t = Transform::new([0.0, 100.0], [4.0, 4.0]);
        for offset in [-10.0, 0.0, 33.0, 100.0, 500.0] {
            assert!(approx(t.at(offset), 4.0));
        }
    }

    #[test]
    fn degenerate_window_steps_at_its_start() {
        let t = Transform::new([300.0, 300.0], [0.0, 1.0]);
        assert!(approx(t.at(299.0), 0.0));
        assert!(approx(t.at(300.0), 1.0));
        assert!(approx(t.at(301.0), 1.0));
    }

    #[test]
    fn side_panels_enter_from_opposite_sides() {
        let left = ParallaxItems::new(Direction::Left, 900.0).sample(0.0);
        let right = ParallaxItems::new(Direction::Right, 900.0).sample(0.0);
        assert!(approx(left.x1, -100.0));
        assert!(approx(left.x2, -150.0));
        assert!(approx(left.x3, -200.0));
        assert!(approx(right.x1, 100.0));
        assert!(approx(right.x2, 150.0));
        assert!(approx(right.x3, 200.0));
    }

    #[test]
    fn side_panels_settle_at_section_end() {
        for direction in [Direction::Left, Direction::Right] {
            let settled = ParallaxItems::new(direction, 900.0).sample(900.0);
            assert!(approx(settled.x1, 0.0));
            assert!(approx(settled.x2, 0.0));
            assert!(approx(settled.x3, 0.0));
            assert!(approx(settled.opacity, 1.0));
            assert!(approx(settled.wrapper_opacity, 1.0));
        }
    }

    #[test]
    fn entrance_opacity_window_depends_on_direction() {
        let h = 900.0;
        let left = ParallaxItems::new(Direction::Left, h);
        let right = ParallaxItems::new(Direction::Right, h);

        // Left ramps over [0.6h, h].
        assert!(approx(left.opacity.at(0.6 * h), 0.0));
        assert!(approx(left.opacity.at(0.8 * h), 0.5));
        assert!(approx(left.opacity.at(h), 1.0));

        // Right ramps over [0.4h, 0.8h] and holds from there on.
        assert!(approx(right.opacity.at(0.4 * h), 0.0));
        assert!(approx(right.opacity.at(0.6 * h), 0.5));
        assert!(approx(right.opacity.at(0.8 * h), 1.0));
        assert!(approx(right.opacity.at(h), 1.0));
    }

    #[test]
    fn wrapper_opacity_ramps_over_the_last_fifth() {
        let h = 900.0;
        let items = ParallaxItems::new(Direction::Right, h);
        assert!(approx(items.wrapper_opacity.at(0.0), 0.0));
        assert!(approx(items.wrapper_opacity.at(0.8 * h), 0.0));
        assert!(approx(items.wrapper_opacity.at(0.9 * h), 0.5));
        assert!(approx(items.wrapper_opacity.at(h), 1.0));
    }

    #[test]
    fn section_height_shrinks_with_the_viewport() {
        assert!(approx(section_height(Breakpoint::Desktop), 900.0));
        assert!(approx(section_height(Breakpoint::Mobile), 700.0));
        assert!(approx(section_height(Breakpoint::SuperMobile), 550.0));
    }

    #[test]
    fn negative_offsets_clamp_to_the_rest_state() {
        let items = ParallaxItems::new(Direction::Left, 900.0);
        let frame = items.sample(-120.0);
        assert!(approx(frame.x1, -100.0));
        assert!(approx(frame.opacity, 0.0));
    }
}
