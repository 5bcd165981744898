//! The mood store: single source of truth for the active selection.
//!
//! The store is a cheaply clonable handle over shared state, so the
//! selection UI and the send pipeline can hold the same store without
//! threading a reference through the host. A single `RwLock` guarantees
//! that readers always observe a consistent `(tag, text)` pair even if
//! the host dispatches UI callbacks and stanza sends on different
//! threads.

use std::sync::{Arc, RwLock};

use serde::{Deserialize, Serialize};

use crate::errors::MoodError;
use crate::mood::vocabulary;

/// The active mood selection: a vocabulary tag plus optional free text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodSelection {
    /// Vocabulary tag, validated on entry to the store.
    pub tag: String,
    /// Free-text annotation; `None` when the user supplied none.
    pub text: Option<String>,
}

/// Thread-safe holder for the current mood selection.
///
/// Empty at creation; mutated only by [`set`](MoodStore::set) and
/// [`clear`](MoodStore::clear) (and, under the one-shot send policy, by
/// the augmenter after a successful injection).
#[derive(Debug, Clone, Default)]
pub struct MoodStore {
    state: Arc<RwLock<Option<MoodSelection>>>,
}

impl MoodStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the active selection.
    ///
    /// `tag` must belong to the mood vocabulary; an empty `text` is
    /// normalised to absent. On [`MoodError::InvalidTag`] the previous
    /// selection is left untouched.
    pub fn set(&self, tag: &str, text: &str) -> Result<(), MoodError> {
        if !vocabulary::is_valid_tag(tag) {
            return Err(MoodError::InvalidTag {
                tag: tag.to_string(),
            });
        }

        let selection = MoodSelection {
            tag: tag.to_string(),
            text: if text.is_empty() {
                None
            } else {
                Some(text.to_string())
            },
        };

        log::debug!("[MoodStore] set mood {:?}", selection.tag);

        if let Ok(mut state) = self.state.write() {
            *state = Some(selection);
        }
        Ok(())
    }

    /// Clear the active selection. Idempotent.
    pub fn clear(&self) {
        log::debug!("[MoodStore] clear mood");
        if let Ok(mut state) = self.state.write() {
            *state = None;
        }
    }

    /// Snapshot of the current selection, or `None` when no mood is set.
    ///
    /// Returns a clone, never a live reference into the store.
    pub fn current(&self) -> Option<MoodSelection> {
        self.state.read().ok().and_then(|s| s.clone())
    }

    /// `true` when a mood is currently set.
    pub fn is_set(&self) -> bool {
        self.state.read().map(|s| s.is_some()).unwrap_or(false)
    }
}
