use tracing::debug;

use crate::gesture::classify_swipe;

/// Cyclic image browser. No timer, no end: moving past either edge wraps.
#[derive(Debug)]
pub struct Carousel {
    len: usize,
    current_index: usize,
    direction: i32,
    swipe_threshold: f32,
}

impl Carousel {
    pub fn new(len: usize, swipe_threshold: f32) -> Self {
        Self { len, current_index: 0, direction: 0, swipe_threshold }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn direction(&self) -> i32 {
        self.direction
    }

    /// Moves `step` images, wrapping at both ends. Returns the index left behind.
    pub fn paginate(&mut self, step: i32) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        let from = self.current_index;
        let n = self.len as i64;
        self.current_index = (from as i64 + step as i64).rem_euclid(n) as usize;
        self.direction = step.signum();
        debug!(from, to = self.current_index, "carousel moved");
        Some(from)
    }

    /// Jumps straight to image `index` (indicator dot). Out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        let from = self.current_index;
        self.direction = (index as i64 - from as i64).signum() as i32;
        self.current_index = index;
        Some(from)
    }

    pub fn swipe(&mut self, offset: f32, velocity: f32) -> Option<usize> {
        let swipe = classify_swipe(offset, velocity, self.swipe_threshold)?;
        self.paginate(swipe.step())
    }
}
