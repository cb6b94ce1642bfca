//! Topic classification for incoming queries.
//!
//! A query is grounded in retrieved documents only when it mentions one of
//! a fixed set of topics. Matching is plain case-insensitive substring
//! containment over a small ordered vocabulary — a linear scan is all this
//! scale needs.

/// The fixed topic vocabulary, in match-priority order.
///
/// Immutable for the process lifetime. When a query mentions several
/// topics, the one listed earliest here wins.
pub const TOPIC_VOCABULARY: [&str; 6] = [
    "climate",
    "ai",
    "artificial intelligence",
    "environment",
    "policy",
    "regulation",
];

/// Find the first vocabulary topic contained in the query.
///
/// Lower-cases the query and tests each token in vocabulary order.
/// Returns the matched token, which doubles as the document search
/// keyword — a single scan, so the "does any topic match" decision and
/// the keyword choice cannot disagree.
///
/// The caller is responsible for rejecting empty queries; no trimming
/// happens here.
pub fn match_topic(query: &str) -> Option<&'static str> {
    let lowered = query.to_lowercase();
    TOPIC_VOCABULARY
        .iter()
        .copied()
        .find(|topic| lowered.contains(*topic))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn matches_single_topic() {
        assert_eq!(match_topic("What is the AI regulation?"), Some("ai"));
        assert_eq!(match_topic("climate outlook"), Some("climate"));
    }

    #[test]
    fn matching_is_case_insensitive() {
        assert_eq!(match_topic("CLIMATE Change Action Plan"), Some("climate"));
        assert_eq!(match_topic("Artificial Intelligence law"), Some("ai"));
    }

    #[test]
    fn no_topic_returns_none() {
        assert_eq!(match_topic("What's the weather today?"), None);
        assert_eq!(match_topic(""), None);
    }

    #[test]
    fn first_match_wins_in_vocabulary_order() {
        // "climate policy" mentions both "climate" and "policy";
        // "climate" is listed first and must win every time.
        for _ in 0..10 {
            assert_eq!(match_topic("climate policy"), Some("climate"));
        }
        // "policy" precedes "regulation" in the vocabulary even though
        // "regulation" appears first in the query text.
        assert_eq!(match_topic("regulation policy"), Some("policy"));
    }

    #[test]
    fn substring_containment_not_word_boundary() {
        // "ai" matches as a bare substring; this mirrors the keyword
        // scan's containment semantics.
        assert_eq!(match_topic("maintain the system"), Some("ai"));
    }
}
