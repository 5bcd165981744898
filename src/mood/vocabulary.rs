//! The fixed mood vocabulary.
//!
//! These tags double as XML element names in the wire format
//! (`<mood xmlns="http://jabber.org/protocol/mood"><happy/></mood>`), so
//! every entry must be a legal element name: lowercase ASCII plus
//! underscore. The list is ordered and never changes at runtime.

use std::collections::HashSet;

use once_cell::sync::Lazy;

/// All mood tags, in display order.
pub const MOOD_TAGS: &[&str] = &[
    "afraid",
    "amazed",
    "angry",
    "annoyed",
    "anxious",
    "aroused",
    "ashamed",
    "bored",
    "brave",
    "calm",
    "cold",
    "confused",
    "contented",
    "cranky",
    "curious",
    "depressed",
    "disappointed",
    "disgusted",
    "distracted",
    "embarrassed",
    "excited",
    "flirtatious",
    "frustrated",
    "grumpy",
    "guilty",
    "happy",
    "hot",
    "humbled",
    "humiliated",
    "hungry",
    "hurt",
    "impressed",
    "in_awe",
    "in_love",
    "indignant",
    "interested",
    "intoxicated",
    "invincible",
    "jealous",
    "lonely",
    "mean",
    "moody",
    "nervous",
    "neutral",
    "offended",
    "playful",
    "proud",
    "relieved",
    "remorseful",
    "restless",
    "sad",
    "sarcastic",
    "serious",
    "shocked",
    "shy",
    "sick",
    "sleepy",
    "stressed",
    "surprised",
    "thirsty",
    "worried",
];

/// Lookup set over [`MOOD_TAGS`], built on first use.
static TAG_SET: Lazy<HashSet<&'static str>> =
    Lazy::new(|| MOOD_TAGS.iter().copied().collect());

/// Returns `true` if `tag` is a member of the mood vocabulary.
pub fn is_valid_tag(tag: &str) -> bool {
    TAG_SET.contains(tag)
}

/// Iterate over the vocabulary in declared order.
pub fn iter() -> impl Iterator<Item = &'static str> {
    MOOD_TAGS.iter().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_tags_are_valid() {
        assert!(is_valid_tag("happy"));
        assert!(is_valid_tag("afraid"));
        assert!(is_valid_tag("worried"));
        assert!(is_valid_tag("in_love"));
    }

    #[test]
    fn test_unknown_tag_is_invalid() {
        assert!(!is_valid_tag("ecstatic"));
        assert!(!is_valid_tag(""));
        assert!(!is_valid_tag("HAPPY"));
    }

    #[test]
    fn test_no_duplicates() {
        let set: HashSet<&str> = MOOD_TAGS.iter().copied().collect();
        assert_eq!(set.len(), MOOD_TAGS.len());
    }

    #[test]
    fn test_tags_are_legal_element_names() {
        for tag in iter() {
            assert!(!tag.is_empty());
            assert!(
                tag.chars()
                    .all(|c| c.is_ascii_lowercase() || c == '_'),
                "tag {:?} is not a legal element name",
                tag
            );
        }
    }
}
