//! Drag-and-release launch gesture
//!
//! Dragging down-right and letting go launches the dot up-left, proportional
//! to the drag distance. The dot takes one impulse at a time: while it is
//! moving, presses and releases are ignored entirely.

use macroquad::math::Vec2;

/// Maps a press/release point pair to a velocity impulse
#[derive(Debug, Clone, Default)]
pub struct DragLauncher {
    press: Option<Vec2>,
}

impl DragLauncher {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the press point of a drag
    ///
    /// Only meaningful while the dot is at rest; a press mid-flight is
    /// dropped by the guard, not queued.
    pub fn on_press(&mut self, at: Vec2, current_vel: Vec2) {
        if current_vel == Vec2::ZERO {
            self.press = Some(at);
        }
    }

    /// Complete the drag and yield the launch impulse, if any
    ///
    /// The impulse is `(press - release) * gain`: the dot flies opposite the
    /// drag direction. Returns `None` without a recorded press, or if the
    /// dot started moving in the meantime.
    pub fn on_release(&mut self, at: Vec2, current_vel: Vec2, gain: f32) -> Option<Vec2> {
        if current_vel != Vec2::ZERO {
            return None;
        }
        let press = self.press.take()?;
        Some((press - at) * gain)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use macroquad::math::vec2;

    #[test]
    fn test_drag_yields_scaled_opposite_impulse() {
        let mut launcher = DragLauncher::new();
        launcher.on_press(vec2(100.0, 100.0), Vec2::ZERO);

        // Dragged down-right by (60, 80): launch up-left, doubled
        let impulse = launcher.on_release(vec2(160.0, 180.0), Vec2::ZERO, 2.0);
        assert_eq!(impulse, Some(vec2(-120.0, -160.0)));
    }

    #[test]
    fn test_press_ignored_while_moving() {
        let mut launcher = DragLauncher::new();
        launcher.on_press(vec2(100.0, 100.0), vec2(50.0, 0.0));

        // The press never registered, so the release yields nothing
        assert_eq!(launcher.on_release(vec2(0.0, 0.0), Vec2::ZERO, 2.0), None);
    }

    #[test]
    fn test_release_ignored_while_moving() {
        let mut launcher = DragLauncher::new();
        launcher.on_press(vec2(100.0, 100.0), Vec2::ZERO);
        assert_eq!(
            launcher.on_release(vec2(0.0, 0.0), vec2(0.0, -1.0), 2.0),
            None
        );
    }

    #[test]
    fn test_release_without_press_yields_nothing() {
        let mut launcher = DragLauncher::new();
        assert_eq!(launcher.on_release(vec2(10.0, 10.0), Vec2::ZERO, 2.0), None);
    }

    #[test]
    fn test_press_consumed_by_release() {
        let mut launcher = DragLauncher::new();
        launcher.on_press(vec2(100.0, 100.0), Vec2::ZERO);
        assert!(launcher
            .on_release(vec2(90.0, 90.0), Vec2::ZERO, 2.0)
            .is_some());
        // A second release has no stale press point to reuse
        assert_eq!(launcher.on_release(vec2(0.0, 0.0), Vec2::ZERO, 2.0), None);
    }
}
