//! Mood state: the fixed vocabulary and the store holding the active
//! selection.

pub mod store;
pub mod vocabulary;

pub use store::{MoodSelection, MoodStore};
pub use vocabulary::MOOD_TAGS;
