//! Mood augmentation for outgoing message stanzas.
//!
//! Invoked by the host's send pipeline just before transmission. When a
//! mood is set and the stanza carries a `body` child, a namespace-
//! qualified mood element is appended to the stanza root:
//!
//! ```xml
//! <mood xmlns="http://jabber.org/protocol/mood">
//!   <happy/>
//!   <text>feeling great</text>
//! </mood>
//! ```
//!
//! The `<text>` child is present only when the selection carries
//! non-empty free text. Stanzas without a body (typing notifications,
//! receipts) are never annotated.

use crate::hooks::OutgoingStanzaHook;
use crate::mood::store::{MoodSelection, MoodStore};
use crate::stanza::element::Element;

/// Namespace of the mood extension (XEP-0107).
pub const MOOD_NS: &str = "http://jabber.org/protocol/mood";

/// What happens to the stored mood after a successful injection.
///
/// The two deployed variants of the plugin disagree here, so the policy
/// is per-instance configuration rather than a hard-coded behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SendPolicy {
    /// The mood survives across sends until changed or cleared.
    #[default]
    Persistent,
    /// The store is cleared after one successful injection, so each
    /// selection annotates exactly one outgoing stanza.
    OneShot,
}

/// Result of one augmentation attempt.
///
/// The skip variants are ordinary outcomes, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AugmentOutcome {
    /// A mood element was appended to the stanza.
    Applied,
    /// No mood is currently set; the stanza was left untouched.
    SkippedNoMood,
    /// The stanza carries no `body` child; left untouched.
    SkippedNoBody,
}

/// Appends mood elements to outgoing message stanzas.
#[derive(Debug, Clone)]
pub struct MoodAugmenter {
    store: MoodStore,
    policy: SendPolicy,
}

impl MoodAugmenter {
    /// Create an augmenter reading from the given store.
    pub fn new(store: MoodStore, policy: SendPolicy) -> Self {
        Self { store, policy }
    }

    /// Inspect the store and, if applicable, append a mood element to
    /// the stanza root.
    ///
    /// Preconditions checked in order: an active mood, then a `body`
    /// child. Either missing makes this a no-op. Tags read from the
    /// store were validated on entry and are not re-checked here.
    pub fn augment(&self, stanza: &mut Element) -> AugmentOutcome {
        let selection = match self.store.current() {
            Some(selection) => selection,
            None => return AugmentOutcome::SkippedNoMood,
        };

        if !stanza.has_child("body") {
            return AugmentOutcome::SkippedNoBody;
        }

        log::debug!("[MoodAugmenter] attaching mood {:?}", selection.tag);
        stanza.append_child(build_mood_element(&selection));

        if self.policy == SendPolicy::OneShot {
            self.store.clear();
        }
        AugmentOutcome::Applied
    }
}

impl OutgoingStanzaHook for MoodAugmenter {
    fn on_outgoing(&self, stanza: &mut Element) -> AugmentOutcome {
        self.augment(stanza)
    }
}

/// Build the mood element for a selection.
///
/// The tag becomes a child *element name*, not character data; the
/// vocabulary doubles as the set of legal element names.
fn build_mood_element(selection: &MoodSelection) -> Element {
    let mut mood = Element::new("mood").with_namespace(MOOD_NS);
    mood.append_child(Element::new(selection.tag.as_str()));
    if let Some(text) = &selection.text {
        mood.append_child(Element::new("text").with_text(text.as_str()));
    }
    mood
}
