//! Selection-UI adapter.
//!
//! The surface a GUI wires its callbacks to: a mood button click ends
//! up in [`MoodSelector::select`] or [`MoodSelector::deselect`], and
//! the current-mood indicator renders from [`MoodSelector::current`]
//! plus [`MoodSelector::icon_path`]. Widget trees, dialogs, and image
//! loading stay host-side; icon paths are computed here without I/O.

use std::path::PathBuf;

use crate::config::MoodConfig;
use crate::errors::MoodError;
use crate::mood::store::{MoodSelection, MoodStore};
use crate::mood::vocabulary;

/// Adapter between the host UI and the mood store.
#[derive(Debug, Clone)]
pub struct MoodSelector {
    store: MoodStore,
    config: MoodConfig,
}

impl MoodSelector {
    /// Create a selector over the given store and config.
    pub fn new(store: MoodStore, config: MoodConfig) -> Self {
        Self { store, config }
    }

    /// User clicked a mood button, with whatever text the entry field
    /// held. Empty text is treated as no annotation.
    pub fn select(&self, tag: &str, text: &str) -> Result<(), MoodError> {
        self.store.set(tag, text)
    }

    /// User un-toggled the mood button: drop the selection.
    pub fn deselect(&self) {
        self.store.clear();
    }

    /// Snapshot for rendering the current-mood indicator.
    pub fn current(&self) -> Option<MoodSelection> {
        self.store.current()
    }

    /// The tags to offer as choices, in display order.
    pub fn choices(&self) -> impl Iterator<Item = &'static str> {
        vocabulary::iter()
    }

    /// Icon file for one mood: `<icon_dir>/<tag>.png`.
    pub fn icon_path(&self, tag: &str) -> PathBuf {
        self.config.icon_dir.join(format!("{}.png", tag))
    }

    /// Icon file for the toolbar button itself.
    pub fn button_icon_path(&self) -> PathBuf {
        self.config.icon_dir.join("mood-button.png")
    }
}
