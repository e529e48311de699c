// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Property tests for query filtering.
//!
//! 1. An item survives iff the lowered query is a substring of one of its fields.
//! 2. The empty query reproduces the unfiltered grouping.
//! 3. Surviving groups are non-empty and indices stay inside their original range.
//! 4. Filtering is idempotent.

use lab_catalog::{GroupIndex, Specimen, filter};
use proptest::prelude::*;

fn catalog_strategy() -> impl Strategy<Value = (GroupIndex, Vec<Specimen>)> {
    prop::collection::vec(1_usize..6, 0..8).prop_flat_map(|sizes| {
        let total: usize = sizes.iter().sum();
        let titles = prop::collection::vec("[a-dA-D ]{0,6}", total);
        let signatures = prop::collection::vec("[a-d]{0,3}", total);
        (Just(sizes), titles, signatures).prop_map(|(sizes, titles, signatures)| {
            let groups = GroupIndex::from_counts(
                sizes
                    .iter()
                    .enumerate()
                    .map(|(i, &n)| (format!("g{i}"), format!("G{i}"), n)),
            )
            .unwrap();
            let items = titles
                .into_iter()
                .zip(signatures)
                .enumerate()
                .map(|(i, (title, sig))| Specimen::new(format!("s{i}"), title).with_signature(sig))
                .collect();
            (groups, items)
        })
    })
}

fn oracle(item: &Specimen, query: &str) -> bool {
    let q = query.trim().to_lowercase();
    [&item.title, &item.signature, &item.subtitle]
        .iter()
        .any(|f| f.to_lowercase().contains(&q))
}

proptest! {
    #[test]
    fn survivors_are_exactly_the_matches(
        (groups, items) in catalog_strategy(),
        query in "[a-dA-D ]{0,3}",
    ) {
        let filtered = filter(&groups, &items, &query);
        let survivors: Vec<usize> = filtered.iter().flat_map(|g| g.indices.iter().copied()).collect();
        let expected: Vec<usize> = (0..items.len()).filter(|&i| oracle(&items[i], &query)).collect();
        prop_assert_eq!(survivors, expected);
    }

    #[test]
    fn empty_query_is_identity((groups, items) in catalog_strategy()) {
        let filtered = filter(&groups, &items, "");
        prop_assert_eq!(filtered.len(), groups.len());
        for (fg, group) in filtered.iter().zip(groups.groups()) {
            prop_assert_eq!(fg.indices.clone(), group.range().collect::<Vec<_>>());
        }
    }

    #[test]
    fn surviving_groups_are_non_empty_and_in_range(
        (groups, items) in catalog_strategy(),
        query in "[a-d]{1,2}",
    ) {
        for fg in filter(&groups, &items, &query) {
            prop_assert!(!fg.indices.is_empty());
            prop_assert!(fg.indices.windows(2).all(|w| w[0] < w[1]));
            prop_assert!(fg.indices.iter().all(|i| fg.range.contains(i)));
            prop_assert_eq!(groups.get(fg.group).map(|g| g.range()), Some(fg.range.clone()));
        }
    }

    #[test]
    fn filtering_is_idempotent(
        (groups, items) in catalog_strategy(),
        query in "[a-d]{0,2}",
    ) {
        prop_assert_eq!(filter(&groups, &items, &query), filter(&groups, &items, &query));
    }
}
