pub mod engine;
pub mod sequencer;
pub mod slide;
pub mod state;

pub use engine::StoriesView;
