//! Cross-point aggregation and deduplication of dealer records.

use std::collections::HashSet;

use super::types::DealerRecord;

/// Dedup key for a dealer: `name-address`.
///
/// Website and email are not part of the key, so two listings for the same
/// dealer that differ only in links collapse to the first one seen.
#[must_use]
pub fn dealer_key(dealer: &DealerRecord) -> String {
    format!("{}-{}", dealer.name, dealer.address)
}

/// Concatenate per-point results in processing order and drop repeated dealers.
///
/// The first occurrence of each key is kept and order is otherwise preserved,
/// so running this over its own output returns the same sequence.
#[must_use]
pub fn aggregate(per_point: Vec<Vec<DealerRecord>>) -> Vec<DealerRecord> {
    let mut seen = HashSet::new();
    let mut unique = Vec::new();

    for dealer in per_point.into_iter().flatten() {
        if seen.insert(dealer_key(&dealer)) {
            unique.push(dealer);
        }
    }

    unique
}
