// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Viewport windowing over positioned rows.

use core::ops::Range;

use crate::row::{sanitize_extent, sanitize_offset};
use crate::{FlatRows, RowLayout, ScrollAlign};

/// Returns the index range of `rows` that intersect the overscanned viewport.
///
/// With `lo = max(0, scroll_top - overscan)` and
/// `hi = scroll_top + viewport_height + overscan`, a row is included when
/// `row.top + row.height >= lo` and `row.top < hi`. Because rows are sorted by
/// construction, both ends are found by binary search.
///
/// Negative or non-finite `viewport_height` and `overscan` are treated as zero,
/// as is a non-finite `scroll_top`. An empty `rows` yields `0..0`.
#[must_use]
pub fn visible_range(
    rows: &[RowLayout],
    scroll_top: f64,
    viewport_height: f64,
    overscan: f64,
) -> Range<usize> {
    if rows.is_empty() {
        return 0..0;
    }
    let scroll_top = sanitize_offset(scroll_top);
    let viewport_height = sanitize_extent(viewport_height);
    let overscan = sanitize_extent(overscan);

    let lo = (scroll_top - overscan).max(0.0);
    let hi = scroll_top + viewport_height + overscan;

    let start = rows.partition_point(|r| r.bottom() < lo);
    let end = rows.partition_point(|r| r.top < hi).max(start);

    #[cfg(feature = "tracing")]
    tracing::trace!(scroll_top, viewport_height, overscan, start, end, "visible range");

    start..end
}

/// Returns the contiguous slice of `rows` that intersects the overscanned viewport.
///
/// See [`visible_range`] for the inclusion rule.
#[must_use]
pub fn visible_slice(
    rows: &[RowLayout],
    scroll_top: f64,
    viewport_height: f64,
    overscan: f64,
) -> &[RowLayout] {
    &rows[visible_range(rows, scroll_top, viewport_height, overscan)]
}

/// Scroll state for a windowed row list.
///
/// `RowWindow` owns the scroll offset, viewport height, and overscan for a
/// list, and answers visibility questions against whatever [`FlatRows`] the
/// host currently holds. It does not own the rows: they are replaced wholesale
/// on every refilter, and the window simply re-queries them.
///
/// ```rust
/// use lab_catalog::{CompletedSet, GroupIndex, filter};
/// use lab_virtual_list::{RowMetrics, RowWindow, flatten};
///
/// let names: Vec<String> = (0..100).map(|i| format!("item {i}")).collect();
/// let groups = GroupIndex::from_counts([("a", "A", 50), ("b", "B", 50)]).unwrap();
/// let rows = flatten(&filter(&groups, &names, ""), None, &CompletedSet::new(), RowMetrics::default());
///
/// let mut window = RowWindow::new(340.0, 0.0);
/// window.set_scroll_top(1_000.0);
/// let range = window.visible_range(&rows);
/// assert!(range.start > 0 && range.end > range.start);
///
/// // Scrolling past the end is clamped to the last full viewport.
/// window.set_scroll_top_clamped(1e9, &rows);
/// assert_eq!(window.scroll_top(), rows.total_height() - 340.0);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct RowWindow {
    scroll_top: f64,
    viewport_height: f64,
    overscan: f64,
}

impl RowWindow {
    /// Creates a window at scroll offset zero.
    #[must_use]
    pub fn new(viewport_height: f64, overscan: f64) -> Self {
        Self {
            scroll_top: 0.0,
            viewport_height: sanitize_extent(viewport_height),
            overscan: sanitize_extent(overscan),
        }
    }

    /// Returns the scroll offset.
    #[must_use]
    pub fn scroll_top(&self) -> f64 {
        self.scroll_top
    }

    /// Records the scroll offset reported by the host.
    ///
    /// Native scroll containers already clamp their offset, so the value is
    /// only sanitized, not clamped against content.
    pub fn set_scroll_top(&mut self, scroll_top: f64) {
        self.scroll_top = sanitize_offset(scroll_top).max(0.0);
    }

    /// Sets the scroll offset, clamped to `[0, max_scroll_top(rows)]`.
    pub fn set_scroll_top_clamped(&mut self, scroll_top: f64, rows: &FlatRows) {
        self.set_scroll_top(scroll_top);
        self.clamp_to(rows);
    }

    /// Returns the viewport height.
    #[must_use]
    pub fn viewport_height(&self) -> f64 {
        self.viewport_height
    }

    /// Sets the viewport height.
    pub fn set_viewport_height(&mut self, viewport_height: f64) {
        self.viewport_height = sanitize_extent(viewport_height);
    }

    /// Returns the overscan distance.
    #[must_use]
    pub fn overscan(&self) -> f64 {
        self.overscan
    }

    /// Sets the overscan distance; negative values clamp to zero.
    pub fn set_overscan(&mut self, overscan: f64) {
        self.overscan = sanitize_extent(overscan);
    }

    /// Returns the largest scroll offset that still fills the viewport.
    #[must_use]
    pub fn max_scroll_top(&self, rows: &FlatRows) -> f64 {
        (rows.total_height() - self.viewport_height).max(0.0)
    }

    /// Clamps the scroll offset after the content height changed.
    ///
    /// Returns `true` if the offset moved.
    pub fn clamp_to(&mut self, rows: &FlatRows) -> bool {
        let clamped = self.scroll_top.min(self.max_scroll_top(rows));
        let moved = clamped != self.scroll_top;
        self.scroll_top = clamped;
        moved
    }

    /// Returns the index range of rows to realize.
    #[must_use]
    pub fn visible_range(&self, rows: &FlatRows) -> Range<usize> {
        visible_range(
            rows.rows(),
            self.scroll_top,
            self.viewport_height,
            self.overscan,
        )
    }

    /// Returns the rows to realize.
    #[must_use]
    pub fn visible_rows<'a>(&self, rows: &'a FlatRows) -> &'a [RowLayout] {
        &rows.rows()[self.visible_range(rows)]
    }

    /// Returns `true` if item `index` has a row fully inside the viewport
    /// (overscan excluded).
    #[must_use]
    pub fn is_item_fully_visible(&self, rows: &FlatRows, index: usize) -> bool {
        rows.top_of(index).is_some_and(|top| {
            top >= self.scroll_top
                && top + rows.metrics().item_height <= self.scroll_top + self.viewport_height
        })
    }

    /// Returns the scroll offset that brings item `index` into view with `align`.
    ///
    /// `None` when the item has no row.
    #[must_use]
    pub fn target_for(&self, rows: &FlatRows, index: usize, align: ScrollAlign) -> Option<f64> {
        crate::scroll_target_aligned(
            rows.top_by_index(),
            index,
            self.viewport_height,
            rows.metrics().item_height,
            self.scroll_top,
            align,
        )
    }
}
