//! Literal substring matching over file content.

use crate::record::MatchRecord;

/// Find every line of `content` that contains `pattern`.
///
/// Matching is case-sensitive substring containment with no regex semantics,
/// so an empty pattern matches every line. Only the line terminator is
/// stripped from the returned text. Results are in ascending line order.
pub fn find_matches(content: &str, pattern: &str) -> Vec<MatchRecord> {
    content
        .lines()
        .enumerate()
        .filter(|(_, line)| line.contains(pattern))
        .map(|(index, line)| MatchRecord::new(index + 1, line))
        .collect()
}
