pub mod carousel;
pub mod engine;
pub mod layout;

pub use engine::{ProductPanel, ProductView};
