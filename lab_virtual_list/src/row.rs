// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Row model: the two kinds of renderable rows and their fixed heights.

use lab_catalog::GroupId;

/// Default height of a group header row, in logical pixels.
pub const HEADER_HEIGHT: f64 = 30.0;

/// Default height of an item row, in logical pixels.
pub const ITEM_HEIGHT: f64 = 34.0;

/// Discriminant of a [`Row`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum RowKind {
    /// A group header.
    Header,
    /// A single item.
    Item,
}

/// One renderable unit of the flattened list.
///
/// Rows are derived data. They are rebuilt wholesale whenever the filter,
/// selection, or completion set changes, never patched in place.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Row {
    /// Header for a group with at least one surviving item.
    Header {
        /// The group this header introduces.
        group: GroupId,
        /// Whether the current item lies in this group's unfiltered range.
        is_current_group: bool,
        /// Completed items in the group's unfiltered range.
        completed_in_group: usize,
    },
    /// A surviving item.
    Item {
        /// Position of the item in the host's item array.
        item_index: usize,
        /// Owning group; hosts resolve the row accent from it.
        group: GroupId,
        /// Whether this is the current item.
        is_current_item: bool,
        /// Whether this item has been completed.
        is_completed_item: bool,
    },
}

impl Row {
    /// Returns the kind of this row.
    #[must_use]
    pub fn kind(&self) -> RowKind {
        match self {
            Self::Header { .. } => RowKind::Header,
            Self::Item { .. } => RowKind::Item,
        }
    }

    /// Returns the group this row belongs to.
    #[must_use]
    pub fn group(&self) -> GroupId {
        match *self {
            Self::Header { group, .. } | Self::Item { group, .. } => group,
        }
    }

    /// Returns the item index for item rows.
    #[must_use]
    pub fn item_index(&self) -> Option<usize> {
        match *self {
            Self::Item { item_index, .. } => Some(item_index),
            Self::Header { .. } => None,
        }
    }
}

/// Fixed heights for the two row kinds.
///
/// With the `serde` feature, deserialized heights pass through
/// [`RowMetrics::new`], and missing fields take their defaults.
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "RawRowMetrics"))]
pub struct RowMetrics {
    /// Height of a header row.
    pub header_height: f64,
    /// Height of an item row.
    pub item_height: f64,
}

impl RowMetrics {
    /// Creates metrics from explicit heights.
    ///
    /// Negative or non-finite heights are replaced by zero.
    #[must_use]
    pub fn new(header_height: f64, item_height: f64) -> Self {
        Self {
            header_height: sanitize_extent(header_height),
            item_height: sanitize_extent(item_height),
        }
    }

    /// Returns the height of rows of `kind`.
    #[must_use]
    #[inline]
    pub fn height_of(&self, kind: RowKind) -> f64 {
        match kind {
            RowKind::Header => self.header_height,
            RowKind::Item => self.item_height,
        }
    }
}

impl Default for RowMetrics {
    fn default() -> Self {
        Self {
            header_height: HEADER_HEIGHT,
            item_height: ITEM_HEIGHT,
        }
    }
}

#[cfg(feature = "serde")]
#[derive(Debug, serde::Deserialize)]
#[serde(default)]
struct RawRowMetrics {
    header_height: f64,
    item_height: f64,
}

#[cfg(feature = "serde")]
impl Default for RawRowMetrics {
    fn default() -> Self {
        Self {
            header_height: HEADER_HEIGHT,
            item_height: ITEM_HEIGHT,
        }
    }
}

#[cfg(feature = "serde")]
impl From<RawRowMetrics> for RowMetrics {
    fn from(raw: RawRowMetrics) -> Self {
        Self::new(raw.header_height, raw.item_height)
    }
}

/// A row together with its absolute vertical placement.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct RowLayout {
    /// The row.
    pub row: Row,
    /// Offset of the row's top edge from the top of the content.
    pub top: f64,
    /// Height of the row; determined by its kind.
    pub height: f64,
}

impl RowLayout {
    /// Returns the offset of the row's bottom edge.
    #[must_use]
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Clamps extents to finite, non-negative values.
pub(crate) fn sanitize_extent(value: f64) -> f64 {
    if value.is_finite() && value > 0.0 {
        value
    } else {
        0.0
    }
}

/// Replaces non-finite offsets with zero, keeping the sign otherwise.
pub(crate) fn sanitize_offset(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}
