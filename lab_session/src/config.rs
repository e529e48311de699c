// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Session configuration.

use lab_virtual_list::{RowMetrics, ScrollAlign, ScrollBehavior};

/// Tunables for a [`LabSession`](crate::LabSession).
///
/// All fields have defaults suited to the Lab overlay, so hosts usually start
/// from [`SessionConfig::default`] and override a few with the `with_*`
/// setters. With the `serde` feature, missing fields deserialize to their
/// defaults.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
pub struct SessionConfig {
    /// Header and item row heights.
    pub metrics: RowMetrics,
    /// Extra distance realized above and below the viewport, in pixels.
    pub overscan: f64,
    /// Viewport height to assume until the host reports one.
    pub viewport_height: f64,
    /// Where a newly selected item lands in the viewport.
    pub scroll_align: ScrollAlign,
    /// Behavior carried by emitted scroll directives.
    pub scroll_behavior: ScrollBehavior,
    /// Duration of smooth scroll tweens.
    pub smooth_scroll_ms: u64,
    /// How long a specimen must be held to count as completed.
    pub hold_ms: u64,
    /// Item selected when the session starts.
    pub initial_selection: Option<usize>,
}

impl SessionConfig {
    /// Default overscan distance.
    pub const DEFAULT_OVERSCAN: f64 = 240.0;
    /// Default smooth scroll duration.
    pub const DEFAULT_SMOOTH_SCROLL_MS: u64 = 240;
    /// Default hold duration.
    pub const DEFAULT_HOLD_MS: u64 = 1_200;

    /// Sets the row metrics.
    #[must_use]
    pub fn with_metrics(mut self, metrics: RowMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Sets the overscan distance.
    #[must_use]
    pub fn with_overscan(mut self, overscan: f64) -> Self {
        self.overscan = overscan;
        self
    }

    /// Sets the initial viewport height.
    #[must_use]
    pub fn with_viewport_height(mut self, viewport_height: f64) -> Self {
        self.viewport_height = viewport_height;
        self
    }

    /// Sets the scroll alignment.
    #[must_use]
    pub fn with_scroll_align(mut self, align: ScrollAlign) -> Self {
        self.scroll_align = align;
        self
    }

    /// Sets the scroll behavior.
    #[must_use]
    pub fn with_scroll_behavior(mut self, behavior: ScrollBehavior) -> Self {
        self.scroll_behavior = behavior;
        self
    }

    /// Sets the smooth scroll duration.
    #[must_use]
    pub fn with_smooth_scroll_ms(mut self, ms: u64) -> Self {
        self.smooth_scroll_ms = ms;
        self
    }

    /// Sets the hold duration.
    #[must_use]
    pub fn with_hold_ms(mut self, ms: u64) -> Self {
        self.hold_ms = ms;
        self
    }

    /// Sets the initial selection.
    #[must_use]
    pub fn with_initial_selection(mut self, index: Option<usize>) -> Self {
        self.initial_selection = index;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            metrics: RowMetrics::default(),
            overscan: Self::DEFAULT_OVERSCAN,
            viewport_height: 0.0,
            scroll_align: ScrollAlign::Center,
            scroll_behavior: ScrollBehavior::Smooth,
            smooth_scroll_ms: Self::DEFAULT_SMOOTH_SCROLL_MS,
            hold_ms: Self::DEFAULT_HOLD_MS,
            initial_selection: None,
        }
    }
}
