//! Error types for the mood subsystem.

use thiserror::Error;

/// Errors produced at the mood-store and XML boundaries.
///
/// The augmenter's skip paths (no active mood, no message body) are not
/// errors; they are reported through
/// [`AugmentOutcome`](crate::stanza::augmenter::AugmentOutcome).
#[derive(Debug, Error)]
pub enum MoodError {
    /// Attempt to set a tag that is not part of the mood vocabulary.
    ///
    /// Rejected at the store boundary; the previous selection is kept.
    #[error("invalid mood tag: {tag}")]
    InvalidTag { tag: String },

    /// XML encoding or decoding failure at the stanza boundary.
    #[error(transparent)]
    Xml(#[from] quick_xml::Error),
}
