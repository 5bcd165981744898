//! Stanza model and the mood augmentation hook.

pub mod augmenter;
pub mod element;

pub use augmenter::{AugmentOutcome, MoodAugmenter, SendPolicy, MOOD_NS};
pub use element::Element;
