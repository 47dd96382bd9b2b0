use raylib::prelude::*;
use tracing::info;

use crate::constants::*;
use crate::engine::View;
use crate::geometry::Rect;
use crate::input::{DragTracker, FrameInput, PointerRelease};
use crate::state::Screen;
use crate::stories::sequencer::{Sequencer, SequencerEvent};
use crate::stories::slide::Slide;
use crate::transition::SlideTransition;
use crate::ui;

const BAR_HEIGHT: f32 = 4.0;
const BAR_GAP: f32 = 4.0;
const BAR_MARGIN: f32 = 12.0;

/// Full-screen intro stories: one slide at a time, progress bars on top.
pub struct StoriesView {
    slides: Vec<Slide>,
    sequencer: Sequencer,
    drag: DragTracker,
    transition: Option<SlideTransition>,
    width: f32,
}

impl StoriesView {
    pub fn new(slides: Vec<Slide>) -> Self {
        let sequencer = Sequencer::new(slides.len(), STORY_DURATION, STORY_SWIPE_THRESHOLD);
        Self {
            slides,
            sequencer,
            drag: DragTracker::default(),
            transition: None,
            width: WINDOW_WIDTH as f32,
        }
    }

    pub fn sequencer(&self) -> &Sequencer {
        &self.sequencer
    }

    fn handle_pointer(&mut self, input: &FrameInput, dt: f32) -> Option<SequencerEvent> {
        if input.pressed {
            self.drag.press(input.pointer);
            self.sequencer.press();
            return None;
        }

        if input.down && self.drag.is_active() {
            if !input.pointer_inside {
                // Pointer left the window mid-press: resume without navigating
                self.drag.cancel();
                self.sequencer.release();
            } else {
                self.drag.track(input.pointer, dt);
            }
            return None;
        }

        if input.released {
            self.sequencer.release();
            return match self.drag.release(input.pointer) {
                Some(PointerRelease::Tap(at)) => self.sequencer.tap(at.x, input.screen_width),
                Some(PointerRelease::Drag { offset, velocity }) => self.sequencer.swipe(offset, velocity),
                None => None,
            };
        }

        None
    }

    fn draw_slide(&self, d: &mut RaylibDrawHandle, slide: &Slide, dx: f32, height: f32) {
        let area = Rect::new(dx, 0.0, self.width, height);
        slide.background.draw(d, area);

        // Soft decorative circles
        d.draw_circle((dx + self.width * 0.85) as i32, (height * 0.12) as i32, self.width * 0.3, ui::hex_alpha(0xffffff, 20));
        d.draw_circle((dx + self.width * 0.1) as i32, (height * 0.9) as i32, self.width * 0.35, ui::hex_alpha(0x000000, 25));

        let center_x = dx + self.width * 0.5;
        let icon_area = Rect::new(dx, height * 0.28, self.width, 80.0);
        ui::draw_text_centered(d, slide.icon, icon_area, 64, Color::WHITE);
        ui::draw_wrapped_centered(d, slide.text, center_x, height * 0.45, self.width * 0.8, 30, Color::WHITE);
    }

    fn draw_progress(&self, d: &mut RaylibDrawHandle) {
        let count = self.slides.len().max(1) as f32;
        let segment = (self.width - 2.0 * BAR_MARGIN - BAR_GAP * (count - 1.0)) / count;
        for i in 0..self.slides.len() {
            let x = BAR_MARGIN + i as f32 * (segment + BAR_GAP);
            let track = Rect::new(x, BAR_MARGIN, segment, BAR_HEIGHT);
            ui::draw_pill(d, track, ui::hex_alpha(0xffffff, 76));
            let fill = self.sequencer.progress_fill(i) / 100.0;
            if fill > 0.0 {
                ui::draw_pill(d, Rect { width: segment * fill, ..track }, Color::WHITE);
            }
        }
    }
}

impl View for StoriesView {
    fn update(&mut self, input: &FrameInput, dt: f32) -> Option<Screen> {
        self.width = input.screen_width;

        if let Some(t) = self.transition.as_mut() {
            t.update(dt);
            if t.is_done() {
                self.transition = None;
            }
        }

        let event = self.handle_pointer(input, dt).or_else(|| self.sequencer.tick(dt));
        match event {
            Some(SequencerEvent::Moved { from, .. }) => {
                self.transition = Some(SlideTransition::new(from, self.sequencer.direction()));
                None
            }
            Some(SequencerEvent::Completed) => {
                info!(slides = self.slides.len(), "intro stories finished");
                Some(Screen::Product)
            }
            None => None,
        }
    }

    fn draw(&self, d: &mut RaylibDrawHandle) {
        let height = d.get_screen_height() as f32;
        let Some(current) = self.slides.get(self.sequencer.current_index()) else {
            return;
        };

        match &self.transition {
            Some(t) => {
                if let Some(previous) = self.slides.get(t.from) {
                    self.draw_slide(d, previous, t.outgoing_offset(self.width), height);
                }
                self.draw_slide(d, current, t.incoming_offset(self.width), height);
            }
            None => self.draw_slide(d, current, 0.0, height),
        }

        self.draw_progress(d);

        let hint = Rect::new(0.0, height - 60.0, self.width, 30.0);
        ui::draw_text_centered(d, "Tap atau swipe untuk lanjut >", hint, 16, ui::hex_alpha(0xffffff, 180));
    }

    fn dispose(&mut self) {
        self.sequencer.dispose();
        self.drag.cancel();
    }
}
