#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum SequencerPhase {
    Playing,   // A slide is on screen, timer running unless paused
    Completed, // Completion was signalled; nothing moves any more
    Disposed,  // Torn down by its owner; timer cancelled
}
