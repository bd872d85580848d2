//! Parser for the ticket/category commit-message grammar.
//!
//! ```text
//! message := segment (";" segment)*
//! first   := ticket ":" category ":" description
//! later   := category ":" description
//! ```
//!
//! Fields are taken verbatim, with no trimming.

use crate::buckets::CategoryBuckets;

/// One category/description pair taken from a message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub category: String,
    pub description: String,
}

/// A message that passed the first-segment gate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedMessage {
    pub ticket: String,
    /// Accepted segments in message order; the first segment is always present
    pub entries: Vec<Segment>,
    /// Later segments dropped for not splitting into exactly two fields
    pub dropped_segments: usize,
}

impl ParsedMessage {
    /// Changelog entry text for a segment: the ticket followed by the description.
    pub fn entry_text(&self, segment: &Segment) -> String {
        format!("{}{}", self.ticket, segment.description)
    }
}

/// Why a message contributed nothing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    /// Fewer than two `:` characters in the whole message
    TooFewColons,
    /// First segment does not split into exactly ticket, category and description
    MalformedFirstSegment,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    Accepted(ParsedMessage),
    Ignored(IgnoreReason),
}

/// Parses a single commit message. Never fails; malformed input comes back as
/// [`ParseOutcome::Ignored`] or as dropped segments.
pub fn parse_commit_message(message: &str) -> ParseOutcome {
    if message.matches(':').count() < 2 {
        return ParseOutcome::Ignored(IgnoreReason::TooFewColons);
    }

    let mut segments = message.split(';');
    let first: Vec<&str> = segments.next().unwrap_or_default().split(':').collect();
    let [ticket, category, description] = first.as_slice() else {
        return ParseOutcome::Ignored(IgnoreReason::MalformedFirstSegment);
    };

    let mut entries = vec![Segment {
        category: category.to_string(),
        description: description.to_string(),
    }];
    let mut dropped_segments = 0;

    for segment in segments {
        let fields: Vec<&str> = segment.split(':').collect();
        match fields.as_slice() {
            [category, description] => entries.push(Segment {
                category: category.to_string(),
                description: description.to_string(),
            }),
            _ => dropped_segments += 1,
        }
    }

    ParseOutcome::Accepted(ParsedMessage {
        ticket: ticket.to_string(),
        entries,
        dropped_segments,
    })
}

/// Parses `message` and records any accepted entries into `buckets`.
pub fn process_commit_message(message: &str, buckets: &mut CategoryBuckets) -> ParseOutcome {
    let outcome = parse_commit_message(message);
    if let ParseOutcome::Accepted(parsed) = &outcome {
        buckets.record(parsed);
    }
    outcome
}
