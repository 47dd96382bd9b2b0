use raylib::prelude::*;

use crate::constants::{TAP_SLOP, VELOCITY_SMOOTHING};
use crate::geometry::{Point, Rect};

/// Everything a view needs to know about user input for one frame.
///
/// Captured once per frame from raylib, then handed to the active view so
/// view logic never touches the window directly.
#[derive(Debug, Clone, Default)]
pub struct FrameInput {
    pub pointer: Point,
    pub pressed: bool,
    pub down: bool,
    pub released: bool,
    pub pointer_inside: bool,

    pub typed: Vec<char>,
    pub backspace: bool,
    pub tab: bool,
    pub enter: bool,
    pub escape: bool,

    pub screen_width: f32,
    pub screen_height: f32,
}

impl FrameInput {
    pub fn capture(rl: &mut RaylibHandle) -> Self {
        let mouse = rl.get_mouse_position();
        let screen_width = rl.get_screen_width() as f32;
        let screen_height = rl.get_screen_height() as f32;
        let pointer = Point::new(mouse.x, mouse.y);

        let mut typed = Vec::new();
        while let Some(c) = rl.get_char_pressed() {
            typed.push(c);
        }

        Self {
            pointer,
            pressed: rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT),
            down: rl.is_mouse_button_down(MouseButton::MOUSE_BUTTON_LEFT),
            released: rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT),
            pointer_inside: rl.is_cursor_on_screen(),
            typed,
            backspace: rl.is_key_pressed(KeyboardKey::KEY_BACKSPACE),
            tab: rl.is_key_pressed(KeyboardKey::KEY_TAB),
            enter: rl.is_key_pressed(KeyboardKey::KEY_ENTER),
            escape: rl.is_key_pressed(KeyboardKey::KEY_ESCAPE),
            screen_width,
            screen_height,
        }
    }

    /// A click (pointer release) landed inside `area` this frame.
    pub fn clicked_in(&self, area: &Rect) -> bool {
        self.released && area.contains(self.pointer)
    }
}

/// How a pointer press ended.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerRelease {
    Tap(Point),
    Drag { offset: f32, velocity: f32 },
}

/// Follows one press from down to up and reports horizontal offset and
/// release velocity (px/s), the two inputs of swipe power.
#[derive(Debug, Default)]
pub struct DragTracker {
    start: Option<Point>,
    last: Point,
    velocity: f32,
    travelled: f32,
}

impl DragTracker {
    pub fn press(&mut self, at: Point) {
        self.start = Some(at);
        self.last = at;
        self.velocity = 0.0;
        self.travelled = 0.0;
    }

    pub fn track(&mut self, at: Point, dt: f32) {
        let Some(start) = self.start else {
            return;
        };
        if dt > 0.0 {
            let sample = (at.x - self.last.x) / dt;
            self.velocity = VELOCITY_SMOOTHING * sample + (1.0 - VELOCITY_SMOOTHING) * self.velocity;
        }
        self.travelled = self.travelled.max(start.distance(at));
        self.last = at;
    }

    pub fn release(&mut self, at: Point) -> Option<PointerRelease> {
        let start = self.start.take()?;
        let travelled = self.travelled.max(start.distance(at));
        if travelled <= TAP_SLOP {
            Some(PointerRelease::Tap(at))
        } else {
            Some(PointerRelease::Drag { offset: at.x - start.x, velocity: self.velocity })
        }
    }

    pub fn cancel(&mut self) {
        self.start = None;
    }

    pub fn is_active(&self) -> bool {
        self.start.is_some()
    }

    /// Current horizontal drag distance, for content that follows the finger.
    pub fn offset_x(&self) -> f32 {
        self.start.map_or(0.0, |s| self.last.x - s.x)
    }

    pub fn started_in(&self, area: &Rect) -> bool {
        self.start.is_some_and(|s| area.contains(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::FRAME_TIME;

    #[test]
    fn press_release_in_place_is_tap() {
        let mut drag = DragTracker::default();
        drag.press(Point::new(300.0, 400.0));
        drag.track(Point::new(303.0, 401.0), FRAME_TIME);
        assert_eq!(drag.release(Point::new(302.0, 400.0)), Some(PointerRelease::Tap(Point::new(302.0, 400.0))));
        assert!(!drag.is_active());
    }

    #[test]
    fn fast_leftward_drag_reports_negative_offset_and_velocity() {
        let mut drag = DragTracker::default();
        drag.press(Point::new(300.0, 400.0));
        let mut x = 300.0;
        for _ in 0..4 {
            x -= 50.0;
            drag.track(Point::new(x, 400.0), FRAME_TIME);
        }
        match drag.release(Point::new(x, 400.0)) {
            Some(PointerRelease::Drag { offset, velocity }) => {
                assert_eq!(offset, -200.0);
                assert!(velocity < -2_000.0, "velocity was {velocity}");
            }
            other => panic!("expected drag, got {other:?}"),
        }
    }

    #[test]
    fn drag_back_to_origin_is_not_a_tap() {
        let mut drag = DragTracker::default();
        drag.press(Point::new(100.0, 100.0));
        drag.track(Point::new(180.0, 100.0), FRAME_TIME);
        drag.track(Point::new(100.0, 100.0), FRAME_TIME);
        assert!(matches!(drag.release(Point::new(100.0, 100.0)), Some(PointerRelease::Drag { .. })));
    }

    #[test]
    fn release_without_press_is_ignored() {
        let mut drag = DragTracker::default();
        assert_eq!(drag.release(Point::new(1.0, 1.0)), None);
    }
}
