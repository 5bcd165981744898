//! Hook trait and pipeline for intercepting outgoing stanzas.
//!
//! The host messaging layer owns stanza construction and transmission;
//! this seam lets extensions observe and mutate a stanza synchronously
//! before it leaves. Hooks take `&self` and are `Send + Sync`, so one
//! registered instance can serve every conversation.

use std::sync::Arc;

use crate::stanza::augmenter::AugmentOutcome;
use crate::stanza::element::Element;

/// Intercepts a stanza about to be sent.
///
/// The default implementation leaves the stanza untouched.
pub trait OutgoingStanzaHook: Send + Sync + 'static {
    /// Called with the stanza root immediately before transmission.
    /// Must complete before the host proceeds to send.
    fn on_outgoing(&self, _stanza: &mut Element) -> AugmentOutcome {
        AugmentOutcome::SkippedNoMood
    }
}

/// Runs registered hooks over each outgoing stanza, in registration
/// order, before the host transmits it.
#[derive(Default)]
pub struct SendPipeline {
    hooks: Vec<Arc<dyn OutgoingStanzaHook>>,
}

impl SendPipeline {
    /// Create an empty pipeline.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a hook. Hooks run in the order they were registered.
    pub fn register(&mut self, hook: Arc<dyn OutgoingStanzaHook>) {
        self.hooks.push(hook);
    }

    /// Dispatch the stanza through every hook, returning each outcome.
    pub fn dispatch(&self, stanza: &mut Element) -> Vec<AugmentOutcome> {
        self.hooks
            .iter()
            .map(|hook| hook.on_outgoing(stanza))
            .collect()
    }

    /// Number of registered hooks.
    pub fn len(&self) -> usize {
        self.hooks.len()
    }

    /// `true` when no hooks are registered.
    pub fn is_empty(&self) -> bool {
        self.hooks.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mood::store::MoodStore;
    use crate::stanza::augmenter::{MoodAugmenter, SendPolicy};

    #[test]
    fn test_empty_pipeline_leaves_stanza_untouched() {
        let pipeline = SendPipeline::new();
        let mut stanza = Element::new("message");
        stanza.append_child(Element::new("body").with_text("hi"));
        let before = stanza.clone();

        assert!(pipeline.dispatch(&mut stanza).is_empty());
        assert_eq!(stanza, before);
    }

    #[test]
    fn test_registered_augmenter_annotates_sends() {
        let store = MoodStore::new();
        let mut pipeline = SendPipeline::new();
        pipeline.register(Arc::new(MoodAugmenter::new(
            store.clone(),
            SendPolicy::Persistent,
        )));
        assert_eq!(pipeline.len(), 1);

        store.set("playful", "").unwrap();

        let mut stanza = Element::new("message");
        stanza.append_child(Element::new("body").with_text("hi"));
        let outcomes = pipeline.dispatch(&mut stanza);

        assert_eq!(outcomes, vec![AugmentOutcome::Applied]);
        assert!(stanza.has_child("mood"));
    }
}
