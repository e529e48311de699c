// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::fmt;

use lab_catalog::GroupIndexError;

/// Errors rejected when a [`LabSession`](crate::LabSession) is created.
///
/// After construction every session operation is total.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SessionError {
    /// The groups do not tile the item array.
    Groups(GroupIndexError),
    /// The configured initial selection is not an item index.
    SelectionOutOfRange {
        /// Requested index.
        index: usize,
        /// Number of items.
        total: usize,
    },
}

impl fmt::Display for SessionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Groups(err) => write!(f, "invalid group index: {err}"),
            Self::SelectionOutOfRange { index, total } => {
                write!(f, "initial selection {index} is out of range for {total} items")
            }
        }
    }
}

impl core::error::Error for SessionError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            Self::Groups(err) => Some(err),
            Self::SelectionOutOfRange { .. } => None,
        }
    }
}

impl From<GroupIndexError> for SessionError {
    fn from(err: GroupIndexError) -> Self {
        Self::Groups(err)
    }
}
