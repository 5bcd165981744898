//! # xmpp-mood
//!
//! Mood support for XMPP messaging clients: a store for the user's
//! current mood (fixed vocabulary tag plus optional free text) and a
//! send-pipeline hook that embeds it into outgoing message stanzas as
//! a `http://jabber.org/protocol/mood` element.
//!
//! The host client owns widgets, conversations, preferences, and the
//! transport. This crate owns the mood state and the stanza
//! augmentation:
//!
//! ```
//! use std::sync::Arc;
//! use xmpp_mood::config::MoodConfig;
//! use xmpp_mood::hooks::SendPipeline;
//! use xmpp_mood::mood::MoodStore;
//! use xmpp_mood::stanza::{Element, MoodAugmenter, SendPolicy};
//! use xmpp_mood::ui::MoodSelector;
//!
//! let store = MoodStore::new();
//! let selector = MoodSelector::new(store.clone(), MoodConfig::new("/tmp/moods"));
//!
//! let mut pipeline = SendPipeline::new();
//! pipeline.register(Arc::new(MoodAugmenter::new(store, SendPolicy::Persistent)));
//!
//! selector.select("happy", "feeling great").unwrap();
//!
//! let mut stanza = Element::new("message");
//! stanza.append_child(Element::new("body").with_text("hello"));
//! pipeline.dispatch(&mut stanza);
//! assert!(stanza.has_child("mood"));
//! ```

pub mod config;
pub mod errors;
pub mod hooks;
pub mod mood;
pub mod stanza;
pub mod ui;

pub use config::MoodConfig;
pub use errors::MoodError;
pub use hooks::{OutgoingStanzaHook, SendPipeline};
pub use mood::{MoodSelection, MoodStore};
pub use stanza::{AugmentOutcome, Element, MoodAugmenter, SendPolicy, MOOD_NS};
pub use ui::MoodSelector;

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
