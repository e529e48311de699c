// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Group index: the contiguous partition of the item array into named groups.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt;
use core::ops::Range;

/// Ordinal position of a group inside a [`GroupIndex`].
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GroupId(usize);

impl GroupId {
    /// Creates a group id from its ordinal.
    #[must_use]
    #[inline]
    pub const fn new(ordinal: usize) -> Self {
        Self(ordinal)
    }

    /// Returns the ordinal of this group in its index.
    #[must_use]
    #[inline]
    pub const fn ordinal(self) -> usize {
        self.0
    }
}

impl fmt::Debug for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("GroupId").field(&self.0).finish()
    }
}

/// A named, contiguous range of items sharing a category (an "act").
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Group {
    /// Stable identifier, unique within a catalog.
    pub id: String,
    /// Display label.
    pub label: String,
    /// Secondary display text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub subtitle: String,
    /// Index of the first item of this group in the item array.
    pub start: usize,
    /// Number of items in this group. Must be at least 1.
    pub count: usize,
}

impl Group {
    /// Creates a group covering `start..start + count`.
    #[must_use]
    pub fn new(
        id: impl Into<String>,
        label: impl Into<String>,
        subtitle: impl Into<String>,
        start: usize,
        count: usize,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            subtitle: subtitle.into(),
            start,
            count,
        }
    }

    /// Returns the item range covered by this group.
    #[must_use]
    #[inline]
    pub fn range(&self) -> Range<usize> {
        self.start..self.start.saturating_add(self.count)
    }

    /// Returns `true` if `index` falls inside this group's range.
    #[must_use]
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.range().contains(&index)
    }
}

/// Reasons a list of groups cannot form a [`GroupIndex`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GroupIndexError {
    /// A group has `count == 0`.
    EmptyGroup {
        /// Position of the offending group.
        group: GroupId,
    },
    /// A group does not start where the previous one ended.
    ///
    /// `found > expected` is a gap, `found < expected` an overlap.
    Discontiguous {
        /// Position of the offending group.
        group: GroupId,
        /// Start required for contiguity.
        expected: usize,
        /// Start the group actually declares.
        found: usize,
    },
    /// A group's range ends past `usize::MAX`.
    Overflow {
        /// Position of the offending group.
        group: GroupId,
    },
    /// The groups do not add up to the number of items.
    CountMismatch {
        /// Number of items covered by the groups.
        covered: usize,
        /// Number of items in the item array.
        total: usize,
    },
}

impl fmt::Display for GroupIndexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyGroup { group } => {
                write!(f, "group {} has no items", group.ordinal())
            }
            Self::Discontiguous {
                group,
                expected,
                found,
            } => {
                let kind = if found > expected { "gap" } else { "overlap" };
                write!(
                    f,
                    "group {} starts at {found} but the previous group ends at {expected} ({kind})",
                    group.ordinal()
                )
            }
            Self::Overflow { group } => {
                write!(f, "group {} ends past the largest item index", group.ordinal())
            }
            Self::CountMismatch { covered, total } => {
                write!(f, "groups cover {covered} items but the catalog has {total}")
            }
        }
    }
}

impl core::error::Error for GroupIndexError {}

/// A validated, immutable partition of `0..total_items` into groups.
///
/// Construction checks that groups are listed in ascending order, are
/// contiguous and non-overlapping, are non-empty, and cover exactly
/// `total_items` items. Everything downstream relies on these invariants
/// without re-checking them.
///
/// ```rust
/// use lab_catalog::{Group, GroupIndex};
///
/// let index = GroupIndex::new(
///     vec![
///         Group::new("arrival", "Arrival", "", 0, 3),
///         Group::new("afterglow", "Afterglow", "", 3, 2),
///     ],
///     5,
/// )
/// .unwrap();
/// assert_eq!(index.len(), 2);
/// assert_eq!(index.group_of(4).map(|id| id.ordinal()), Some(1));
///
/// // A gap between groups is rejected up front.
/// assert!(GroupIndex::new(vec![Group::new("a", "A", "", 1, 2)], 3).is_err());
/// ```
#[derive(Clone, Debug)]
pub struct GroupIndex {
    groups: Vec<Group>,
    total_items: usize,
}

impl GroupIndex {
    /// Validates `groups` against an item array of `total_items` entries.
    pub fn new(groups: Vec<Group>, total_items: usize) -> Result<Self, GroupIndexError> {
        let mut expected = 0_usize;
        for (ordinal, group) in groups.iter().enumerate() {
            let id = GroupId::new(ordinal);
            if group.count == 0 {
                return Err(GroupIndexError::EmptyGroup { group: id });
            }
            if group.start != expected {
                return Err(GroupIndexError::Discontiguous {
                    group: id,
                    expected,
                    found: group.start,
                });
            }
            expected = group
                .start
                .checked_add(group.count)
                .ok_or(GroupIndexError::Overflow { group: id })?;
        }
        if expected != total_items {
            return Err(GroupIndexError::CountMismatch {
                covered: expected,
                total: total_items,
            });
        }
        Ok(Self {
            groups,
            total_items,
        })
    }

    /// Builds an index from consecutive group sizes, assigning `start` offsets.
    ///
    /// `labels` yields `(id, label, count)` triples in order.
    pub fn from_counts<I, S>(labels: I) -> Result<Self, GroupIndexError>
    where
        I: IntoIterator<Item = (S, S, usize)>,
        S: Into<String>,
    {
        let mut start = 0;
        let mut groups = Vec::new();
        for (id, label, count) in labels {
            let ordinal = groups.len();
            groups.push(Group::new(id, label, String::new(), start, count));
            start = start
                .checked_add(count)
                .ok_or(GroupIndexError::Overflow {
                    group: GroupId::new(ordinal),
                })?;
        }
        Self::new(groups, start)
    }

    /// Returns the number of groups.
    #[must_use]
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns `true` if the index has no groups (and therefore no items).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Returns the number of items covered by the index.
    #[must_use]
    pub fn total_items(&self) -> usize {
        self.total_items
    }

    /// Returns all groups in order.
    #[must_use]
    pub fn groups(&self) -> &[Group] {
        &self.groups
    }

    /// Returns the group with the given id, if it exists.
    #[must_use]
    pub fn get(&self, id: GroupId) -> Option<&Group> {
        self.groups.get(id.ordinal())
    }

    /// Iterates `(GroupId, &Group)` pairs in order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (GroupId, &Group)> + '_ {
        self.groups
            .iter()
            .enumerate()
            .map(|(ordinal, group)| (GroupId::new(ordinal), group))
    }

    /// Returns the group containing item `index`, or `None` if out of range.
    ///
    /// Groups are sorted and contiguous, so this is a binary search.
    #[must_use]
    pub fn group_of(&self, index: usize) -> Option<GroupId> {
        if index >= self.total_items {
            return None;
        }
        let ordinal = self.groups.partition_point(|g| g.range().end <= index);
        Some(GroupId::new(ordinal))
    }
}
