use raylib::prelude::*;

use crate::input::FrameInput;
use crate::state::Screen;

/// A full-window screen driven by the frame loop.
pub trait View {
    /// Advances the view by one frame. Returns the screen to switch to, if any.
    fn update(&mut self, input: &FrameInput, dt: f32) -> Option<Screen>;

    fn draw(&self, d: &mut RaylibDrawHandle);

    /// Called once before the view is dropped in favour of another screen.
    fn dispose(&mut self) {}
}
