// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use lab_catalog::{
    CompletedSet, Group, GroupIndex, GroupIndexError, Query, Searchable, filter_query,
};
use lab_event_state::hold::{HoldConfig, HoldEvent, HoldEvents, HoldState};
use lab_virtual_list::{FlatRows, RowLayout, RowWindow, ScrollDirective, ScrollTween, flatten};

use crate::{Direction, Key, KeyOutcome, SessionConfig, SessionError};

/// State of one browsing session over a fixed catalog.
///
/// The catalog (groups and items) is immutable for the session's lifetime.
/// Everything derived from it is cached in [`FlatRows`] and rebuilt whenever
/// the query, the current index, or the completed set changes; each rebuild
/// bumps [`LabSession::revision`].
///
/// Operations that change the selection or the query return
/// `Option<ScrollDirective>`: `Some` when the current item has a row under the
/// active filter, `None` when there is nothing to scroll to or nothing
/// changed.
#[derive(Clone, Debug)]
pub struct LabSession<T> {
    groups: GroupIndex,
    items: Vec<T>,
    config: SessionConfig,
    query: Query,
    current: Option<usize>,
    completed: CompletedSet,
    open: bool,
    window: RowWindow,
    hold: HoldState,
    rows: FlatRows,
    revision: u64,
}

impl<T: Searchable> LabSession<T> {
    /// Creates a session, validating `groups` against `items`.
    pub fn new(groups: Vec<Group>, items: Vec<T>, config: SessionConfig) -> Result<Self, SessionError> {
        let groups = GroupIndex::new(groups, items.len())?;
        Self::with_index(groups, items, config)
    }

    /// Creates a session from an already validated [`GroupIndex`].
    ///
    /// Fails if the index was built for a different number of items or the
    /// configured initial selection is out of range.
    pub fn with_index(
        groups: GroupIndex,
        items: Vec<T>,
        config: SessionConfig,
    ) -> Result<Self, SessionError> {
        if groups.total_items() != items.len() {
            return Err(GroupIndexError::CountMismatch {
                covered: groups.total_items(),
                total: items.len(),
            }
            .into());
        }
        if let Some(index) = config.initial_selection.filter(|&i| i >= items.len()) {
            return Err(SessionError::SelectionOutOfRange {
                index,
                total: items.len(),
            });
        }
        let mut session = Self {
            window: RowWindow::new(config.viewport_height, config.overscan),
            hold: HoldState::new(HoldConfig::new(config.hold_ms)),
            current: config.initial_selection,
            groups,
            items,
            config,
            query: Query::default(),
            completed: CompletedSet::new(),
            open: false,
            rows: FlatRows::default(),
            revision: 0,
        };
        session.refresh();
        Ok(session)
    }

    /// Returns the group index.
    #[must_use]
    pub fn groups(&self) -> &GroupIndex {
        &self.groups
    }

    /// Returns all items, unfiltered.
    #[must_use]
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Returns the configuration the session was created with.
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }

    /// Returns the normalized query.
    #[must_use]
    pub fn query(&self) -> &str {
        self.query.as_str()
    }

    /// Returns the current item index, whether or not it passes the filter.
    #[must_use]
    pub fn current(&self) -> Option<usize> {
        self.current
    }

    /// Returns the current item.
    #[must_use]
    pub fn current_item(&self) -> Option<&T> {
        self.items.get(self.current?)
    }

    /// Returns the current index only if it has a row under the active filter.
    #[must_use]
    pub fn visible_selection(&self) -> Option<usize> {
        self.current.filter(|&index| self.rows.contains_item(index))
    }

    /// Returns the completed set.
    #[must_use]
    pub fn completed(&self) -> &CompletedSet {
        &self.completed
    }

    /// Returns `true` while the browser overlay is open.
    #[must_use]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Returns the derived rows for the current state.
    #[must_use]
    pub fn rows(&self) -> &FlatRows {
        &self.rows
    }

    /// Returns the scroll state.
    #[must_use]
    pub fn window(&self) -> &RowWindow {
        &self.window
    }

    /// Returns the hold gesture state for the current item.
    #[must_use]
    pub fn hold(&self) -> &HoldState {
        &self.hold
    }

    /// Returns a counter bumped on every rebuild of [`LabSession::rows`].
    #[must_use]
    pub fn revision(&self) -> u64 {
        self.revision
    }

    /// Replaces the filter query.
    ///
    /// Queries are compared after normalization, so `" Alpha"` after
    /// `"alpha"` changes nothing and returns `None`.
    pub fn set_query(&mut self, raw: &str) -> Option<ScrollDirective> {
        let query = Query::new(raw);
        if query == self.query {
            return None;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(query = query.as_str(), "query changed");
        self.query = query;
        self.refresh();
        self.scroll_directive()
    }

    /// Makes `index` the current item.
    ///
    /// Out-of-range indices and re-selecting the current item are ignored.
    pub fn select(&mut self, index: usize) -> Option<ScrollDirective> {
        if index >= self.items.len() || self.current == Some(index) {
            return None;
        }
        self.set_current(Some(index));
        self.scroll_directive()
    }

    /// Clears the current item.
    pub fn clear_selection(&mut self) {
        if self.current.is_some() {
            self.set_current(None);
        }
    }

    /// Moves the current index one step over the full item array.
    ///
    /// Steps clamp at both ends. With no current item, [`Direction::Next`]
    /// selects the first item and [`Direction::Previous`] the last.
    pub fn step(&mut self, direction: Direction) -> KeyOutcome {
        let Some(last) = self.items.len().checked_sub(1) else {
            return KeyOutcome::Ignored;
        };
        let index = match (self.current, direction) {
            (None, Direction::Next) => 0,
            (None, Direction::Previous) => last,
            (Some(i), Direction::Next) => (i + 1).min(last),
            (Some(i), Direction::Previous) => i.saturating_sub(1),
        };
        if self.current == Some(index) {
            return KeyOutcome::Ignored;
        }
        let directive = self.select(index);
        KeyOutcome::Moved { index, directive }
    }

    /// Applies a key press.
    ///
    /// Arrow keys step the selection whether or not the overlay is open.
    /// Escape closes an open overlay.
    pub fn handle_key(&mut self, key: Key) -> KeyOutcome {
        match key {
            Key::ArrowLeft => self.step(Direction::Previous),
            Key::ArrowRight => self.step(Direction::Next),
            Key::Escape if self.open => {
                self.close();
                KeyOutcome::Closed
            }
            Key::Escape | Key::Other => KeyOutcome::Ignored,
        }
    }

    /// Marks item `index` as completed. Returns `true` if it was not already.
    pub fn mark_completed(&mut self, index: usize) -> bool {
        if index >= self.items.len() || !self.completed.insert(index) {
            return false;
        }
        #[cfg(feature = "tracing")]
        tracing::debug!(index, completed = self.completed.len(), "item completed");
        self.refresh();
        true
    }

    /// Marks the current item as completed.
    pub fn complete_current(&mut self) -> bool {
        self.current.is_some_and(|index| self.mark_completed(index))
    }

    /// Starts holding the current item at `now` (milliseconds).
    ///
    /// Ignored without a current item. A completed hold marks the item
    /// completed; see [`LabSession::complete_current`].
    pub fn press_hold(&mut self, now: u64) -> HoldEvents {
        if self.current.is_none() {
            return HoldEvents::new();
        }
        let events = self.hold.press(now);
        self.absorb_hold(&events);
        events
    }

    /// Advances the hold gesture to `now`.
    pub fn tick_hold(&mut self, now: u64) -> HoldEvents {
        let events = self.hold.tick(now);
        self.absorb_hold(&events);
        events
    }

    /// Releases the hold gesture at `now`, cancelling it if unfinished.
    pub fn release_hold(&mut self, now: u64) -> HoldEvents {
        let events = self.hold.release(now);
        self.absorb_hold(&events);
        events
    }

    /// Opens the browser overlay, returning a directive to reveal the current item.
    pub fn open(&mut self) -> Option<ScrollDirective> {
        self.open = true;
        self.scroll_directive()
    }

    /// Closes the browser overlay. The scroll state is kept for the next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    /// Records a scroll offset reported by the host.
    pub fn set_scroll_top(&mut self, scroll_top: f64) {
        self.window.set_scroll_top(scroll_top);
    }

    /// Records a viewport height reported by the host.
    pub fn set_viewport_height(&mut self, viewport_height: f64) {
        self.window.set_viewport_height(viewport_height);
        self.window.clamp_to(&self.rows);
    }

    /// Returns the rows to realize for the current scroll state.
    #[must_use]
    pub fn visible_rows(&self) -> &[RowLayout] {
        self.window.visible_rows(&self.rows)
    }

    /// Returns the directive that brings the current item into view, if it
    /// has a row.
    #[must_use]
    pub fn scroll_directive(&self) -> Option<ScrollDirective> {
        let index = self.current?;
        let offset = self
            .window
            .target_for(&self.rows, index, self.config.scroll_align)?;
        Some(ScrollDirective::new(offset, self.config.scroll_behavior))
    }

    /// Builds a tween from the current scroll offset towards `directive`.
    #[must_use]
    pub fn tween(&self, directive: ScrollDirective, now_ms: u64) -> ScrollTween {
        directive.tween(self.window.scroll_top(), now_ms, self.config.smooth_scroll_ms)
    }

    fn set_current(&mut self, current: Option<usize>) {
        #[cfg(feature = "tracing")]
        tracing::debug!(from = ?self.current, to = ?current, "selection changed");
        self.current = current;
        self.hold.reset();
        self.refresh();
    }

    fn absorb_hold(&mut self, events: &HoldEvents) {
        if events.iter().any(|e| matches!(e, HoldEvent::Completed)) {
            self.complete_current();
        }
    }

    fn refresh(&mut self) {
        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!(
            "session_refresh",
            revision = self.revision,
            query = self.query.as_str(),
            current = ?self.current
        )
        .entered();

        let filtered = filter_query(&self.groups, &self.items, &self.query);
        self.rows = flatten(&filtered, self.current, &self.completed, self.config.metrics);
        self.window.clamp_to(&self.rows);
        self.revision = self.revision.wrapping_add(1);
    }
}
