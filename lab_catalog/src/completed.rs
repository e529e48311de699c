// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The set of items an operator has already visited.

use core::ops::Range;

use hashbrown::HashSet;

/// A grow-only set of completed item indices with a revision counter.
///
/// The revision bumps only when an insertion actually adds a new index, so
/// observers can cheaply tell whether derived rows need rebuilding.
///
/// ```rust
/// use lab_catalog::CompletedSet;
///
/// let mut completed = CompletedSet::new();
/// assert!(completed.insert(4));
/// assert!(!completed.insert(4));
/// assert_eq!(completed.revision(), 1);
/// assert_eq!(completed.count_in(0..5), 1);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CompletedSet {
    indices: HashSet<usize>,
    revision: u64,
}

impl CompletedSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks `index` completed. Returns `true` if it was not already.
    pub fn insert(&mut self, index: usize) -> bool {
        let inserted = self.indices.insert(index);
        if inserted {
            self.revision = self.revision.wrapping_add(1);
        }
        inserted
    }

    /// Returns `true` if `index` is completed.
    #[must_use]
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }

    /// Returns the number of completed items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.indices.len()
    }

    /// Returns `true` if nothing has been completed yet.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Counts completed indices inside `range`.
    #[must_use]
    pub fn count_in(&self, range: Range<usize>) -> usize {
        // Iterate whichever side is smaller.
        if range.len() <= self.indices.len() {
            range.filter(|i| self.indices.contains(i)).count()
        } else {
            self.indices.iter().filter(|&&i| range.contains(&i)).count()
        }
    }

    /// Returns the revision counter.
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Iterates completed indices in arbitrary order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.indices.iter().copied()
    }
}

impl Extend<usize> for CompletedSet {
    fn extend<I: IntoIterator<Item = usize>>(&mut self, iter: I) {
        for index in iter {
            self.insert(index);
        }
    }
}

impl FromIterator<usize> for CompletedSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        let mut set = Self::new();
        set.extend(iter);
        set
    }
}

#[cfg(test)]
mod tests {
    use super::CompletedSet;

    #[test]
    fn revision_bumps_only_on_new_index() {
        let mut set = CompletedSet::new();
        assert_eq!(set.revision(), 0);
        set.insert(1);
        set.insert(1);
        set.insert(2);
        assert_eq!(set.revision(), 2);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn count_in_agrees_for_small_and_large_ranges() {
        let set: CompletedSet = [0, 3, 4, 9].into_iter().collect();
        assert_eq!(set.count_in(3..5), 2);
        assert_eq!(set.count_in(0..100), 4);
        assert_eq!(set.count_in(5..9), 0);
        assert_eq!(set.count_in(5..5), 0);
    }
}
