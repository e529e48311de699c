// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lab Catalog: grouped specimen catalogs and query filtering.
//!
//! This crate describes the static shape of a specimen collection and the
//! query-driven reduction of it that a browser renders:
//!
//! - [`GroupIndex`]: a validated partition of the item array into contiguous,
//!   non-empty [`Group`]s (acts). Malformed groupings are rejected once, at
//!   construction, with a [`GroupIndexError`].
//! - [`Searchable`]: the text an item exposes to queries. [`Specimen`] is the
//!   stock record; `&str` and `String` work for quick tests.
//! - [`filter`]: reduces a [`GroupIndex`] to [`FilteredGroup`]s holding only the
//!   items whose fields contain the (trimmed, case-folded) query, dropping
//!   groups left empty.
//! - [`CompletedSet`]: a grow-only set of visited items with a revision counter.
//!
//! Items themselves are owned by the host; nothing here mutates them.
//!
//! ## Minimal example
//!
//! ```rust
//! use lab_catalog::{CompletedSet, GroupIndex, Specimen, filter};
//!
//! let items = vec![
//!     Specimen::new("s0", "Breath").with_signature("pulse"),
//!     Specimen::new("s1", "Ripple"),
//!     Specimen::new("s2", "Bloom").with_signature("pulse"),
//! ];
//! let groups = GroupIndex::from_counts([("arrival", "Arrival", 2), ("afterglow", "Afterglow", 1)])?;
//!
//! let filtered = filter(&groups, &items, "PULSE");
//! assert_eq!(filtered.len(), 2);
//! assert_eq!(filtered[0].indices, [0]);
//! assert_eq!(filtered[1].indices, [2]);
//!
//! let mut completed = CompletedSet::new();
//! completed.insert(1);
//! assert_eq!(completed.count_in(groups.groups()[0].range()), 1);
//! # Ok::<(), lab_catalog::GroupIndexError>(())
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod completed;
mod filter;
mod group;
mod item;

pub use completed::CompletedSet;
pub use filter::{FilteredGroup, Query, filter, filter_query};
pub use group::{Group, GroupId, GroupIndex, GroupIndexError};
pub use item::{Searchable, Specimen};
