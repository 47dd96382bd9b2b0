//! Timed, gesture-driven progression through a fixed list of slides.
//!
//! The sequencer is pure state: the owning view feeds it frame time and
//! pointer events, and reads back the current index and progress to draw.
//! It ends in exactly one [`SequencerEvent::Completed`], either when the last
//! slide's timer runs out or when the user moves forward past it.

use tracing::debug;

use crate::gesture::classify_swipe;
use crate::stories::state::SequencerPhase;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequencerEvent {
    Moved { from: usize, to: usize },
    Completed,
}

#[derive(Debug)]
pub struct Sequencer {
    len: usize,
    current_index: usize,
    direction: i32,
    elapsed: f32,
    duration: f32,
    swipe_threshold: f32,
    paused: bool,
    phase: SequencerPhase,
}

impl Sequencer {
    pub fn new(len: usize, duration: f32, swipe_threshold: f32) -> Self {
        Self {
            len,
            current_index: 0,
            direction: 0,
            elapsed: 0.0,
            duration,
            swipe_threshold,
            paused: false,
            phase: SequencerPhase::Playing,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn direction(&self) -> i32 {
        self.direction
    }

    pub fn phase(&self) -> SequencerPhase {
        self.phase
    }

    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Progress through the current slide, 0 to 100.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 100.0;
        }
        (self.elapsed / self.duration * 100.0).min(100.0)
    }

    /// Fill of the progress segment for slide `index`, 0 to 100.
    pub fn progress_fill(&self, index: usize) -> f32 {
        if index < self.current_index {
            100.0
        } else if index == self.current_index {
            self.progress()
        } else {
            0.0
        }
    }

    /// Advances the slide timer by `dt` seconds.
    pub fn tick(&mut self, dt: f32) -> Option<SequencerEvent> {
        if self.phase != SequencerPhase::Playing || self.paused {
            return None;
        }
        if self.len == 0 {
            return self.complete();
        }

        self.elapsed += dt.max(0.0);
        if self.progress() < 100.0 {
            return None;
        }

        if self.current_index < self.len - 1 {
            self.move_to(self.current_index + 1, 1)
        } else {
            self.complete()
        }
    }

    /// Manual navigation by one slide. Going back from the first slide does
    /// nothing; going forward from the last one completes the sequence.
    pub fn paginate(&mut self, step: i32) -> Option<SequencerEvent> {
        if self.phase != SequencerPhase::Playing {
            return None;
        }
        let target = self.current_index as i64 + step as i64;
        if target < 0 {
            return None;
        }
        if target >= self.len as i64 {
            return self.complete();
        }
        self.move_to(target as usize, step.signum())
    }

    /// Tap at horizontal position `x` on a viewport `width` wide.
    pub fn tap(&mut self, x: f32, width: f32) -> Option<SequencerEvent> {
        if x > width / 2.0 { self.paginate(1) } else { self.paginate(-1) }
    }

    /// Drag release with horizontal `offset` (px) and `velocity` (px/s).
    pub fn swipe(&mut self, offset: f32, velocity: f32) -> Option<SequencerEvent> {
        let swipe = classify_swipe(offset, velocity, self.swipe_threshold)?;
        self.paginate(swipe.step())
    }

    /// Pointer held down: freeze the timer where it is.
    pub fn press(&mut self) {
        self.paused = true;
    }

    /// Pointer lifted: resume from the progress already made.
    pub fn release(&mut self) {
        self.paused = false;
    }

    /// Cancel the timer for good. Further ticks and navigation do nothing.
    pub fn dispose(&mut self) {
        self.phase = SequencerPhase::Disposed;
    }

    fn move_to(&mut self, to: usize, direction: i32) -> Option<SequencerEvent> {
        let from = self.current_index;
        self.current_index = to;
        self.direction = direction;
        self.elapsed = 0.0;
        debug!(from, to, "story slide changed");
        Some(SequencerEvent::Moved { from, to })
    }

    fn complete(&mut self) -> Option<SequencerEvent> {
        self.phase = SequencerPhase::Completed;
        Some(SequencerEvent::Completed)
    }
}
