//! Per-frame simulation entry point
//!
//! One call per frame: apply whatever input the frame drained, then advance
//! the dot by the frame's time step.

use macroquad::math::Vec2;

use super::dot::Dot;
use super::input::DragLauncher;
use crate::level::TileMap;
use crate::tuning::Tuning;

/// Input drained from the event queue for a single frame
#[derive(Debug, Clone, Default)]
pub struct TickInput {
    /// Pointer press position, if the button went down this frame
    pub press: Option<Vec2>,
    /// Pointer release position, if the button came up this frame
    pub release: Option<Vec2>,
}

/// Advance the simulation by one variable-length frame
pub fn tick(
    dot: &mut Dot,
    launcher: &mut DragLauncher,
    map: &TileMap,
    input: &TickInput,
    dt: f32,
    tuning: &Tuning,
) {
    if let Some(at) = input.press {
        launcher.on_press(at, dot.vel());
    }
    if let Some(at) = input.release {
        if let Some(impulse) = launcher.on_release(at, dot.vel(), tuning.launch_gain) {
            dot.set_vel(impulse);
        }
    }

    dot.step(map, dt, tuning);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::TOTAL_TILES;
    use macroquad::math::vec2;

    fn open_map() -> TileMap {
        TileMap::parse(&vec!["0"; TOTAL_TILES].join(" ")).unwrap()
    }

    #[test]
    fn test_press_and_release_launch_in_one_frame() {
        let map = open_map();
        let tuning = Tuning::default();
        let mut dot = Dot::new(vec2(640.0, 480.0));
        let mut launcher = DragLauncher::new();

        // Whole drag resolved within a single frame's event drain
        let input = TickInput {
            press: Some(vec2(700.0, 500.0)),
            release: Some(vec2(600.0, 450.0)),
        };
        tick(&mut dot, &mut launcher, &map, &input, 0.0, &tuning);

        // Impulse (100, 50) * 2, damped once by the same frame's step
        assert_eq!(dot.vel(), vec2(198.0, 99.0));
    }

    #[test]
    fn test_drag_across_frames_then_coast() {
        let map = open_map();
        let tuning = Tuning::default();
        let mut dot = Dot::new(vec2(640.0, 480.0));
        let mut launcher = DragLauncher::new();

        let press = TickInput {
            press: Some(vec2(700.0, 480.0)),
            release: None,
        };
        tick(&mut dot, &mut launcher, &map, &press, 0.016, &tuning);
        assert_eq!(dot.vel(), Vec2::ZERO);

        let release = TickInput {
            press: None,
            release: Some(vec2(600.0, 480.0)),
        };
        tick(&mut dot, &mut launcher, &map, &release, 0.016, &tuning);

        // (100, 0) * 2 damped once; the dot moved this frame
        assert_eq!(dot.vel(), vec2(198.0, 0.0));
        assert!(dot.pos().x > 640.0);

        // Mid-flight presses change nothing
        let stray = TickInput {
            press: Some(vec2(0.0, 0.0)),
            release: Some(vec2(50.0, 50.0)),
        };
        let vel_before = dot.vel();
        tick(&mut dot, &mut launcher, &map, &stray, 0.0, &tuning);
        assert_eq!(dot.vel(), vel_before * 0.99);
    }
}
