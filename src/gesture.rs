//! Swipe intent from a drag release.

/// Which way a swipe moves through a sequence.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Swipe {
    Forward,
    Backward,
}

impl Swipe {
    pub fn step(self) -> i32 {
        match self {
            Swipe::Forward => 1,
            Swipe::Backward => -1,
        }
    }
}

/// Product of drag distance and release velocity. The sign follows the velocity.
pub fn swipe_power(offset: f32, velocity: f32) -> f32 {
    offset.abs() * velocity
}

/// A leftward flick (negative power) moves forward, a rightward one moves back.
pub fn classify_swipe(offset: f32, velocity: f32, threshold: f32) -> Option<Swipe> {
    let power = swipe_power(offset, velocity);
    if power < -threshold {
        Some(Swipe::Forward)
    } else if power > threshold {
        Some(Swipe::Backward)
    } else {
        None
    }
}
