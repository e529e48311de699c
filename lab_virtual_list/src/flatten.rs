// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Flattening filtered groups into positioned rows.

use alloc::vec::Vec;
use core::ops::Range;

use hashbrown::HashMap;
use lab_catalog::{CompletedSet, FilteredGroup};

use crate::{Row, RowKind, RowLayout, RowMetrics};

/// The flattened, positioned row sequence for one filter/selection state.
///
/// Invariants:
/// - `rows()[k].top` equals the sum of the heights of all rows before `k`.
/// - [`FlatRows::total_height`] equals the sum of all row heights.
/// - Every item row's index maps to its `top` in [`FlatRows::top_by_index`].
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FlatRows {
    rows: Vec<RowLayout>,
    total_height: f64,
    top_by_index: HashMap<usize, f64>,
    metrics: RowMetrics,
}

impl FlatRows {
    /// Returns all rows in display order.
    #[must_use]
    pub fn rows(&self) -> &[RowLayout] {
        &self.rows
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns `true` when nothing survived the filter.
    ///
    /// Hosts render their "no results" placeholder in this case.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns the height of the scrollable content.
    #[must_use]
    pub fn total_height(&self) -> f64 {
        self.total_height
    }

    /// Returns the metrics the rows were laid out with.
    #[must_use]
    pub fn metrics(&self) -> RowMetrics {
        self.metrics
    }

    /// Returns the item-index → top map.
    #[must_use]
    pub fn top_by_index(&self) -> &HashMap<usize, f64> {
        &self.top_by_index
    }

    /// Returns the top of the row showing item `index`, if present.
    #[must_use]
    pub fn top_of(&self, index: usize) -> Option<f64> {
        self.top_by_index.get(&index).copied()
    }

    /// Returns `true` if item `index` has a row.
    #[must_use]
    pub fn contains_item(&self, index: usize) -> bool {
        self.top_by_index.contains_key(&index)
    }

    /// Returns the rows intersecting the given viewport, see [`crate::visible_range`].
    #[must_use]
    pub fn visible(&self, scroll_top: f64, viewport_height: f64, overscan: f64) -> &[RowLayout] {
        &self.rows[self.visible_range(scroll_top, viewport_height, overscan)]
    }

    /// Returns the index range of rows intersecting the given viewport.
    #[must_use]
    pub fn visible_range(&self, scroll_top: f64, viewport_height: f64, overscan: f64) -> Range<usize> {
        crate::visible_range(&self.rows, scroll_top, viewport_height, overscan)
    }

    /// Returns the scroll offset centering item `index`, see [`crate::scroll_target_for`].
    #[must_use]
    pub fn scroll_target(&self, index: usize, viewport_height: f64) -> Option<f64> {
        crate::scroll_target_for(
            &self.top_by_index,
            index,
            viewport_height,
            self.metrics.item_height,
        )
    }
}

/// Lays out `filtered` groups as a header row followed by one row per item.
///
/// `current` is the selected item index. A header is marked current whenever
/// `current` falls in its group's *unfiltered* range, so the group stays
/// highlighted while a query hides the current item itself. An absent or
/// out-of-range `current` marks nothing.
///
/// ```rust
/// use lab_catalog::{CompletedSet, GroupIndex, filter};
/// use lab_virtual_list::{RowMetrics, flatten};
///
/// let items = ["a", "b", "c"];
/// let groups = GroupIndex::from_counts([("x", "X", 2), ("y", "Y", 1)]).unwrap();
/// let rows = flatten(
///     &filter(&groups, &items, ""),
///     Some(2),
///     &CompletedSet::new(),
///     RowMetrics::default(),
/// );
///
/// let tops: Vec<f64> = rows.rows().iter().map(|r| r.top).collect();
/// assert_eq!(tops, [0.0, 30.0, 64.0, 98.0, 128.0]);
/// assert_eq!(rows.total_height(), 162.0);
/// assert_eq!(rows.top_of(2), Some(128.0));
/// ```
#[must_use]
pub fn flatten(
    filtered: &[FilteredGroup],
    current: Option<usize>,
    completed: &CompletedSet,
    metrics: RowMetrics,
) -> FlatRows {
    #[cfg(feature = "tracing")]
    let _span = tracing::debug_span!("flatten", groups = filtered.len(), ?current).entered();

    let row_count: usize = filtered.iter().map(|g| g.indices.len() + 1).sum();
    let item_count = row_count - filtered.len();
    // Struct literals bypass `RowMetrics::new`.
    let metrics = RowMetrics::new(metrics.header_height, metrics.item_height);
    let mut rows = Vec::with_capacity(row_count);
    let mut top_by_index = HashMap::with_capacity(item_count);
    let mut top = 0.0;

    let header_height = metrics.height_of(RowKind::Header);
    let item_height = metrics.height_of(RowKind::Item);

    for group in filtered {
        rows.push(RowLayout {
            row: Row::Header {
                group: group.group,
                is_current_group: current.is_some_and(|c| group.range.contains(&c)),
                completed_in_group: completed.count_in(group.range.clone()),
            },
            top,
            height: header_height,
        });
        top += header_height;

        for &item_index in &group.indices {
            rows.push(RowLayout {
                row: Row::Item {
                    item_index,
                    group: group.group,
                    is_current_item: current == Some(item_index),
                    is_completed_item: completed.contains(item_index),
                },
                top,
                height: item_height,
            });
            top_by_index.insert(item_index, top);
            top += item_height;
        }
    }

    debug_assert_eq!(
        rows.iter().filter(|r| r.row.kind() == RowKind::Item).count(),
        top_by_index.len(),
        "item rows must be unique per index"
    );

    FlatRows {
        rows,
        total_height: top,
        top_by_index,
        metrics,
    }
}
