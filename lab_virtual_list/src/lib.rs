// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lab_virtual_list --heading-base-level=0

//! Lab Virtual List: windowing primitives for grouped, filtered lists.
//!
//! This crate turns the output of [`lab_catalog::filter`] into something a
//! host can render without realizing every row:
//!
//! - [`flatten`]: lays filtered groups out as one linear sequence of
//!   [`RowLayout`]s (a header [`Row`] per group, an item [`Row`] per surviving
//!   index), each with an absolute `top` and a fixed height taken from
//!   [`RowMetrics`]. The resulting [`FlatRows`] also records the total content
//!   height and an item-index → top map.
//! - [`visible_range`] / [`visible_slice`]: given a scroll offset, viewport
//!   height, and overscan distance, returns the contiguous run of rows that
//!   intersect the overscanned viewport.
//! - [`scroll_target_for`]: the scroll offset that centers an item, or `None`
//!   when the item is filtered out. [`scroll_target_aligned`] generalizes this
//!   to other [`ScrollAlign`]ments.
//! - [`RowWindow`]: a small controller holding scroll offset, viewport height,
//!   and overscan, with clamping and visibility queries against a
//!   [`FlatRows`].
//! - [`ScrollDirective`] and [`ScrollTween`]: an eased scroll animation hosts
//!   can drive from their frame clock.
//!
//! This crate deliberately does **not** know about widgets, styling, or any
//! particular UI framework. Host frameworks are responsible for:
//!
//! - Rebuilding [`FlatRows`] whenever the query, selection, or completion set
//!   changes, before windowing against it again.
//! - Calling [`RowWindow::visible_rows`] on scroll and resize.
//! - Positioning each returned row absolutely at `top` inside a container of
//!   [`FlatRows::total_height`].
//!
//! ## Minimal example
//!
//! ```rust
//! use lab_catalog::{CompletedSet, GroupIndex, filter};
//! use lab_virtual_list::{Row, RowMetrics, RowWindow, flatten};
//!
//! let names = ["Alpha", "Beta", "Gamma", "Delta", "Epsilon"];
//! let groups = GroupIndex::from_counts([("one", "One", 2), ("two", "Two", 1)]).unwrap();
//! let rows = flatten(
//!     &filter(&groups, &names[..3], ""),
//!     Some(2),
//!     &CompletedSet::new(),
//!     RowMetrics::default(),
//! );
//! assert_eq!(rows.total_height(), 162.0);
//!
//! // A 100px viewport at the top shows the first four rows.
//! let window = RowWindow::new(100.0, 0.0);
//! let visible = window.visible_rows(&rows);
//! assert_eq!(visible.len(), 4);
//! assert!(matches!(visible[3].row, Row::Header { is_current_group: true, .. }));
//!
//! // Centering item 2 (top = 128) in that viewport.
//! assert_eq!(rows.scroll_target(2, 100.0), Some(95.0));
//! ```
//!
//! All extents and offsets are `f64` logical pixels and are expected to be
//! finite; non-finite inputs are treated as zero and negative extents are
//! clamped. This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod flatten;
mod row;
mod scroll;
mod window;

pub use flatten::{FlatRows, flatten};
pub use row::{HEADER_HEIGHT, ITEM_HEIGHT, Row, RowKind, RowLayout, RowMetrics};
pub use scroll::{
    ScrollAlign, ScrollBehavior, ScrollDirective, ScrollTween, scroll_target_aligned,
    scroll_target_for,
};
pub use window::{RowWindow, visible_range, visible_slice};
