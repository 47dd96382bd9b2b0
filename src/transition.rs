use raylib::prelude::*;

use crate::constants::SLIDE_ANIMATION_DURATION;

/// Horizontal push between two panels of a sequence.
///
/// The incoming panel enters from the side `direction` points at and the
/// outgoing one leaves from the other side. Progress runs 0 to 1.
pub struct SlideTransition {
    pub from: usize,
    pub direction: i32,
    tween: ease::Tween,
    timer: f32,
    progress: f32,
}

impl SlideTransition {
    pub fn new(from: usize, direction: i32) -> Self {
        Self {
            from,
            direction,
            tween: ease::Tween::new(ease::cubic_out, 0.0, 1.0, SLIDE_ANIMATION_DURATION),
            timer: 0.0,
            progress: 0.0,
        }
    }

    pub fn update(&mut self, dt: f32) {
        self.progress = self.tween.apply(dt).clamp(0.0, 1.0);
        self.timer += dt;
        if self.timer >= SLIDE_ANIMATION_DURATION {
            self.progress = 1.0;
        }
    }

    pub fn is_done(&self) -> bool {
        self.timer >= SLIDE_ANIMATION_DURATION
    }

    /// X offset of the incoming panel for a viewport `width` wide.
    pub fn incoming_offset(&self, width: f32) -> f32 {
        self.side() * width * (1.0 - self.progress)
    }

    /// X offset of the outgoing panel.
    pub fn outgoing_offset(&self, width: f32) -> f32 {
        -self.side() * width * self.progress
    }

    // A zero direction (jump to the current index) still needs a side to animate from.
    fn side(&self) -> f32 {
        if self.direction < 0 { -1.0 } else { 1.0 }
    }
}
