// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lab_session --heading-base-level=0

//! Lab Session: the controller behind the specimen browser overlay.
//!
//! A [`LabSession`] owns the state a host would otherwise scatter across
//! callbacks: the current specimen index, the filter query, the completed set,
//! whether the browser overlay is open, and the scroll state of the list. Every
//! change that affects the rows rebuilds them synchronously through
//! [`lab_catalog::filter`] and [`lab_virtual_list::flatten`] before anything
//! windows against them, so a scroll event never sees stale offsets.
//!
//! Hosts feed it input and read back two things:
//!
//! - [`LabSession::visible_rows`]: the rows to realize for the current scroll
//!   offset and viewport height.
//! - [`ScrollDirective`]s, returned from query and selection changes when the
//!   current item is visible under the filter.
//!
//! ```rust
//! use lab_catalog::Group;
//! use lab_session::{Key, KeyOutcome, LabSession, SessionConfig};
//!
//! let groups = vec![Group::new("one", "One", "", 0, 3), Group::new("two", "Two", "", 3, 2)];
//! let items = vec!["Alpha", "Beta", "Gamma", "Delta", "Epsilon"];
//! let config = SessionConfig::default().with_viewport_height(100.0).with_overscan(0.0);
//! let mut session = LabSession::new(groups, items, config).unwrap();
//!
//! // Selecting an item asks the host to center it.
//! let directive = session.select(2).unwrap();
//! assert_eq!(directive.offset, 65.0);
//!
//! // Filtering hides the current item; no scroll is requested.
//! assert!(session.set_query("delta").is_none());
//! assert_eq!(session.visible_selection(), None);
//! assert_eq!(session.rows().len(), 2);
//!
//! // Arrow keys walk the full item array regardless of the filter.
//! assert!(matches!(session.handle_key(Key::ArrowRight), KeyOutcome::Moved { index: 3, .. }));
//! assert_eq!(session.visible_selection(), Some(3));
//! ```
//!
//! With the `tracing` feature, each rebuild runs inside a `session_refresh`
//! span and query and selection changes are logged at debug level.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

mod config;
mod error;
mod key;
mod session;

pub use config::SessionConfig;
pub use error::SessionError;
pub use key::{Direction, Key, KeyOutcome};
pub use session::LabSession;

pub use lab_virtual_list::{ScrollBehavior, ScrollDirective};
