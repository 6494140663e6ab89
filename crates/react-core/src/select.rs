//! ReACT selection by triggered features.

use std::collections::BTreeSet;

use crate::entry::ReactEntry;

/// Keep the entries tagged with at least one triggered feature, ranked by
/// importance (highest first).
///
/// The sort is stable: entries of equal importance keep their order from
/// `entries`.
pub fn select(entries: &[ReactEntry], triggered: &BTreeSet<String>) -> Vec<ReactEntry> {
    let mut kept: Vec<ReactEntry> = entries
        .iter()
        .filter(|entry| entry.has_any_feature(triggered))
        .cloned()
        .collect();
    kept.sort_by(|a, b| b.importance().cmp(&a.importance()));
    kept
}
