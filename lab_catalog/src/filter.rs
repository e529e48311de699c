// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Query filtering over a [`GroupIndex`].

use alloc::string::String;
use alloc::vec::Vec;
use core::ops::Range;

use crate::{GroupId, GroupIndex, Searchable};

/// A normalized text query.
///
/// The raw text is trimmed and lower-cased once; matching is plain substring
/// containment against each lower-cased searchable field.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct Query {
    needle: String,
}

impl Query {
    /// Normalizes `raw` into a query.
    #[must_use]
    pub fn new(raw: &str) -> Self {
        Self {
            needle: raw.trim().to_lowercase(),
        }
    }

    /// Returns `true` if the query matches everything.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.needle.is_empty()
    }

    /// Returns the normalized query text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.needle
    }

    /// Returns `true` if any searchable field of `item` contains the query.
    #[must_use]
    pub fn matches<T: Searchable + ?Sized>(&self, item: &T) -> bool {
        if self.is_empty() {
            return true;
        }
        item.searchable_fields()
            .any(|field| field.to_lowercase().contains(self.needle.as_str()))
    }
}

/// A group reduced to the item indices that survived a query.
///
/// `indices` is never empty: groups without matches are dropped by [`filter`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilteredGroup {
    /// The group this was derived from.
    pub group: GroupId,
    /// The group's original, unfiltered item range.
    pub range: Range<usize>,
    /// Surviving item indices, ascending.
    pub indices: Vec<usize>,
}

impl FilteredGroup {
    /// Returns the number of surviving items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Always `false` for groups produced by [`filter`].
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }
}

/// Reduces `groups` to the items of `items` that match `query`.
///
/// The result preserves group order and item order. Groups without a single
/// match are omitted. An empty query keeps every item of every group.
///
/// `groups` must have been built for `items`, that is
/// `groups.total_items() == items.len()`. Debug builds assert this.
///
/// ```rust
/// use lab_catalog::{GroupIndex, filter};
///
/// let items = ["Alpha", "Beta", "Gamma", "Delta", "Epsilon"];
/// let groups = GroupIndex::from_counts([("one", "One", 3), ("two", "Two", 2)]).unwrap();
///
/// let filtered = filter(&groups, &items, "m");
/// assert_eq!(filtered.len(), 1);
/// assert_eq!(filtered[0].indices, [2]);
/// ```
#[must_use]
pub fn filter<T: Searchable>(groups: &GroupIndex, items: &[T], query: &str) -> Vec<FilteredGroup> {
    filter_query(groups, items, &Query::new(query))
}

/// Like [`filter`], with a pre-normalized [`Query`].
#[must_use]
pub fn filter_query<T: Searchable>(
    groups: &GroupIndex,
    items: &[T],
    query: &Query,
) -> Vec<FilteredGroup> {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!(
        "filter",
        groups = groups.len(),
        items = items.len(),
        query = query.as_str()
    )
    .entered();

    debug_assert_eq!(
        groups.total_items(),
        items.len(),
        "the group index must be built for this item array"
    );

    let mut out = Vec::with_capacity(groups.len());
    for (id, group) in groups.iter() {
        let range = group.range();
        // Only reachable in release builds with a mismatched index.
        let Some(slice) = items.get(range.clone()) else {
            break;
        };
        let indices: Vec<usize> = slice
            .iter()
            .zip(range.clone())
            .filter(|(item, _)| query.matches(*item))
            .map(|(_, index)| index)
            .collect();
        if !indices.is_empty() {
            out.push(FilteredGroup {
                group: id,
                range,
                indices,
            });
        }
    }

    #[cfg(feature = "tracing")]
    tracing::trace!(surviving_groups = out.len(), "filter complete");

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Specimen;
    use alloc::vec;

    const NAMES: [&str; 5] = ["Alpha", "Beta", "Gamma", "Delta", "Epsilon"];

    fn index() -> GroupIndex {
        GroupIndex::from_counts([("one", "One", 3), ("two", "Two", 2)]).unwrap()
    }

    fn kept(filtered: &[FilteredGroup]) -> Vec<(usize, Vec<usize>)> {
        filtered
            .iter()
            .map(|g| (g.group.ordinal(), g.indices.clone()))
            .collect()
    }

    #[test]
    fn empty_query_is_identity() {
        let filtered = filter(&index(), &NAMES, "");
        assert_eq!(kept(&filtered), vec![(0, vec![0, 1, 2]), (1, vec![3, 4])]);
        assert_eq!(filtered[1].range, 3..5);
    }

    #[test]
    fn whitespace_query_is_identity() {
        assert_eq!(filter(&index(), &NAMES, "   \t"), filter(&index(), &NAMES, ""));
    }

    #[test]
    fn substring_match_is_case_insensitive() {
        let filtered = filter(&index(), &NAMES, " A ");
        assert_eq!(kept(&filtered), vec![(0, vec![0, 1, 2]), (1, vec![3])]);
    }

    #[test]
    fn groups_without_matches_are_dropped() {
        let filtered = filter(&index(), &NAMES, "m");
        assert_eq!(kept(&filtered), vec![(0, vec![2])]);
        assert!(filtered.iter().all(|g| !g.is_empty()));
    }

    #[test]
    fn no_match_yields_empty() {
        assert!(filter(&index(), &NAMES, "zzz").is_empty());
    }

    #[test]
    fn matches_any_specimen_field() {
        let items = vec![
            Specimen::new("s0", "Breath").with_signature("Pulse"),
            Specimen::new("s1", "Ripple").with_subtitle("water surface"),
            Specimen::new("s2", "Orbit"),
        ];
        let groups = GroupIndex::from_counts([("act", "Act", 3)]).unwrap();

        assert_eq!(kept(&filter(&groups, &items, "pulse")), vec![(0, vec![0])]);
        assert_eq!(kept(&filter(&groups, &items, "WATER")), vec![(0, vec![1])]);
        assert_eq!(kept(&filter(&groups, &items, "r")), vec![(0, vec![0, 1, 2])]);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "the group index must be built for this item array")]
    fn mismatched_item_array_is_rejected() {
        let _ = filter(&index(), &NAMES[..4], "");
    }

    #[test]
    fn query_normalizes_once() {
        let query = Query::new("  GaMMa ");
        assert_eq!(query.as_str(), "gamma");
        assert!(query.matches("Gamma"));
        assert!(!query.matches("Delta"));
        assert!(Query::default().matches("anything"));
    }
}
