// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection scrolling: scroll targets for items and smooth-scroll tweens.
//!
//! Targets are pure functions of the current row layout. They are computed
//! once per selection change (or per refilter, since tops move), never per
//! frame. Animating towards a target is left to the host; [`ScrollTween`]
//! covers the common eased case with an injected millisecond clock.

use hashbrown::HashMap;

/// Where an item should land in the viewport when scrolled to.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollAlign {
    /// Align the item's top edge with the viewport top.
    Start,
    /// Center the item vertically.
    #[default]
    Center,
    /// Align the item's bottom edge with the viewport bottom.
    End,
    /// Scroll as little as possible to make the item fully visible.
    Nearest,
}

/// How the host should move to a scroll target.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScrollBehavior {
    /// Animate towards the target.
    #[default]
    Smooth,
    /// Jump straight to the target.
    Instant,
}

/// An imperative request to scroll the list container.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollDirective {
    /// Target scroll offset, never negative.
    pub offset: f64,
    /// How to get there.
    pub behavior: ScrollBehavior,
}

impl ScrollDirective {
    /// Creates a directive.
    #[must_use]
    pub fn new(offset: f64, behavior: ScrollBehavior) -> Self {
        Self { offset, behavior }
    }

    /// Builds a tween from `from` that honors this directive's behavior.
    ///
    /// [`ScrollBehavior::Instant`] yields a zero-length tween that samples
    /// the target immediately.
    #[must_use]
    pub fn tween(&self, from: f64, now_ms: u64, duration_ms: u64) -> ScrollTween {
        let duration_ms = match self.behavior {
            ScrollBehavior::Smooth => duration_ms,
            ScrollBehavior::Instant => 0,
        };
        ScrollTween::new(from, self.offset, now_ms, duration_ms)
    }
}

/// Returns the scroll offset that vertically centers item `item_index`.
///
/// The offset is `max(0, top - viewport_height / 2 + item_height / 2)` where
/// `top` comes from `top_by_index`. Returns `None` when the item has no row,
/// for example because the current query filtered it out; hosts must not
/// scroll in that case.
///
/// ```rust
/// use hashbrown::HashMap;
/// use lab_virtual_list::scroll_target_for;
///
/// let tops = HashMap::from([(7_usize, 128.0)]);
/// assert_eq!(scroll_target_for(&tops, 7, 100.0, 34.0), Some(95.0));
/// assert_eq!(scroll_target_for(&tops, 8, 100.0, 34.0), None);
/// ```
#[must_use]
pub fn scroll_target_for(
    top_by_index: &HashMap<usize, f64>,
    item_index: usize,
    viewport_height: f64,
    item_height: f64,
) -> Option<f64> {
    let top = *top_by_index.get(&item_index)?;
    Some((top - viewport_height / 2.0 + item_height / 2.0).max(0.0))
}

/// Like [`scroll_target_for`], with a configurable alignment.
///
/// `current_scroll` is only consulted by [`ScrollAlign::Nearest`], which keeps
/// the current offset when the item is already fully visible.
#[must_use]
pub fn scroll_target_aligned(
    top_by_index: &HashMap<usize, f64>,
    item_index: usize,
    viewport_height: f64,
    item_height: f64,
    current_scroll: f64,
    align: ScrollAlign,
) -> Option<f64> {
    let top = *top_by_index.get(&item_index)?;
    let bottom = top + item_height;
    let target = match align {
        ScrollAlign::Start => top,
        ScrollAlign::Center => top - viewport_height / 2.0 + item_height / 2.0,
        ScrollAlign::End => bottom - viewport_height,
        ScrollAlign::Nearest => {
            if top < current_scroll {
                top
            } else if bottom > current_scroll + viewport_height {
                bottom - viewport_height
            } else {
                current_scroll
            }
        }
    };
    Some(target.max(0.0))
}

/// An eased scroll animation between two offsets, driven by a caller clock.
///
/// Sampling uses smoothstep easing. Interrupting an animation with a new
/// target via [`ScrollTween::retarget`] continues from the current sampled
/// position, so there is no visible jump.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ScrollTween {
    from: f64,
    to: f64,
    start_ms: u64,
    duration_ms: u64,
}

impl ScrollTween {
    /// Creates a tween from `from` to `to` starting at `start_ms`.
    #[must_use]
    pub fn new(from: f64, to: f64, start_ms: u64, duration_ms: u64) -> Self {
        Self {
            from,
            to,
            start_ms,
            duration_ms,
        }
    }

    /// Returns the target offset.
    #[must_use]
    pub fn target(&self) -> f64 {
        self.to
    }

    /// Returns `true` once the animation has reached its target.
    #[must_use]
    pub fn is_done(&self, now_ms: u64) -> bool {
        now_ms.saturating_sub(self.start_ms) >= self.duration_ms
    }

    /// Returns the offset to apply at `now_ms`.
    #[must_use]
    pub fn sample(&self, now_ms: u64) -> f64 {
        if self.is_done(now_ms) {
            return self.to;
        }
        let elapsed = now_ms.saturating_sub(self.start_ms);
        let t = (elapsed as f64 / self.duration_ms as f64).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * smoothstep(t)
    }

    /// Redirects the animation to `to`, starting from the offset at `now_ms`.
    pub fn retarget(&mut self, now_ms: u64, to: f64, duration_ms: u64) {
        *self = Self::new(self.sample(now_ms), to, now_ms, duration_ms);
    }
}

fn smoothstep(t: f64) -> f64 {
    t * t * (3.0 - 2.0 * t)
}
