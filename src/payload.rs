//! Lexical parsing of payload specifiers.
//!
//! A payload addresses a generator as `topic`, `topic.subtopic`, or with a
//! trailing repeat count: `topic.subtopic|n`. The literal-pattern form
//! `fake<pattern>` keeps everything after the `fake` prefix as its subtopic.

/// Parsed generator coordinates of one payload string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PayloadSpec {
    pub topic: String,
    pub subtopic: Option<String>,
    pub count: Option<u64>,
}

impl PayloadSpec {
    /// Parse a payload string. Purely lexical, no generator lookups.
    pub fn parse(payload: &str) -> Self {
        let (topic, subtopic) = if let Some(rest) = payload.strip_prefix("fake") {
            match rest {
                "" => ("fake", None),
                pattern => ("fake", Some(pattern)),
            }
        } else {
            // Split on the first dot only; the subtopic may carry further
            // dots. A trailing dot with nothing after it is not a split.
            match payload.split_once('.') {
                Some((topic, rest)) if !rest.is_empty() => (topic, Some(rest)),
                _ => (payload, None),
            }
        };

        // The count suffix sits on the rightmost populated segment.
        match subtopic {
            Some(sub) => match sub.split_once('|') {
                Some((sub, count)) => Self {
                    topic: topic.to_string(),
                    subtopic: Some(sub.to_string()),
                    count: parse_count(count),
                },
                None => Self {
                    topic: topic.to_string(),
                    subtopic: Some(sub.to_string()),
                    count: None,
                },
            },
            None => match topic.split_once('|') {
                Some((topic, count)) => Self {
                    topic: topic.to_string(),
                    subtopic: None,
                    count: parse_count(count),
                },
                None => Self {
                    topic: topic.to_string(),
                    subtopic: None,
                    count: None,
                },
            },
        }
    }
}

/// Only a positive integer triggers repetition; anything else is no count.
fn parse_count(raw: &str) -> Option<u64> {
    raw.parse::<u64>().ok().filter(|&n| n > 0)
}
