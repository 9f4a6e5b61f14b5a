//! Frequency counting

use indexmap::IndexMap;

/// Word → count, iterated in first-insertion order.
pub type FrequencyMap = IndexMap<String, u64>;

/// Tally how often each token occurs.
///
/// Keys keep the order in which a word was first seen; that order is the
/// tie-break when the index is later sorted by count.
pub fn count<I, S>(tokens: I) -> FrequencyMap
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    let mut counts = FrequencyMap::new();
    for token in tokens {
        *counts.entry(token.into()).or_insert(0) += 1;
    }
    counts
}

/// Sum of all counts in the map.
pub fn total(counts: &FrequencyMap) -> u64 {
    counts.values().sum()
}
