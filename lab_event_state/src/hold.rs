// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hold gesture state: press, keep holding until a duration elapses, release.
//!
//! ## Usage
//!
//! 1) Call [`HoldState::press`] with the current time when the pointer goes down.
//! 2) On every frame, call [`HoldState::tick`] and react to the returned events.
//! 3) Call [`HoldState::release`] when the pointer goes up; an unfinished hold
//!    is cancelled.
//! 4) Query [`HoldState::tension_at`] to drive visuals.
//!
//! All timestamps are caller-supplied milliseconds from any monotonic clock,
//! so the machine can be stepped deterministically in tests.
//!
//! ## Minimal example
//!
//! ```
//! use lab_event_state::hold::{HoldConfig, HoldEvent, HoldState};
//!
//! let mut hold = HoldState::new(HoldConfig::new(1_000).with_thresholds([0.5]));
//!
//! assert_eq!(hold.press(0).as_slice(), &[HoldEvent::Started]);
//! assert_eq!(hold.tick(500).as_slice(), &[HoldEvent::ThresholdCrossed { index: 0 }]);
//! assert_eq!(hold.tension_at(750), 0.75);
//! assert_eq!(hold.tick(1_000).as_slice(), &[HoldEvent::Completed]);
//! assert!(hold.is_completed());
//! ```

use smallvec::SmallVec;

/// Tension of a hold after `elapsed_ms` out of `duration_ms`, in `[0, 1]`.
///
/// Linear in elapsed time. A zero duration is immediately fully tense.
#[must_use]
pub fn tension(elapsed_ms: u64, duration_ms: u64) -> f64 {
    if duration_ms == 0 || elapsed_ms >= duration_ms {
        return 1.0;
    }
    elapsed_ms as f64 / duration_ms as f64
}

/// Parameters of a hold gesture.
#[derive(Clone, Debug, PartialEq)]
pub struct HoldConfig {
    duration_ms: u64,
    thresholds: SmallVec<[f64; 4]>,
}

impl HoldConfig {
    /// Creates a configuration completing after `duration_ms` with no thresholds.
    #[must_use]
    pub fn new(duration_ms: u64) -> Self {
        Self {
            duration_ms,
            thresholds: SmallVec::new(),
        }
    }

    /// Sets intermediate tension thresholds that emit [`HoldEvent::ThresholdCrossed`].
    ///
    /// Values are clamped to `[0, 1]` and sorted ascending; non-finite values are dropped.
    #[must_use]
    pub fn with_thresholds(mut self, thresholds: impl IntoIterator<Item = f64>) -> Self {
        self.thresholds = thresholds
            .into_iter()
            .filter(|t| t.is_finite())
            .map(|t| t.clamp(0.0, 1.0))
            .collect();
        self.thresholds.sort_unstable_by(f64::total_cmp);
        self
    }

    /// Returns the hold duration.
    #[must_use]
    pub fn duration_ms(&self) -> u64 {
        self.duration_ms
    }

    /// Returns the thresholds, ascending.
    #[must_use]
    pub fn thresholds(&self) -> &[f64] {
        &self.thresholds
    }
}

impl Default for HoldConfig {
    fn default() -> Self {
        Self::new(1_200)
    }
}

/// Where a hold gesture currently is.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Default)]
pub enum HoldPhase {
    /// Not pressed.
    #[default]
    Idle,
    /// Pressed since `started_at`.
    Holding {
        /// Press timestamp.
        started_at: u64,
    },
    /// Held for the full duration. Stays here until [`HoldState::reset`].
    Completed,
}

/// Transition produced by a [`HoldState`] operation.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum HoldEvent {
    /// A hold began.
    Started,
    /// Tension reached the threshold at `index` in [`HoldConfig::thresholds`].
    ThresholdCrossed {
        /// Position of the threshold.
        index: usize,
    },
    /// The hold lasted the full duration.
    Completed,
    /// The hold was released early at the given tension.
    Cancelled {
        /// Tension at release.
        tension: f64,
    },
}

/// Events returned by one operation. Rarely more than a couple.
pub type HoldEvents = SmallVec<[HoldEvent; 4]>;

/// Explicit hold gesture state machine.
#[derive(Clone, Debug, Default)]
pub struct HoldState {
    config: HoldConfig,
    phase: HoldPhase,
    crossed: usize,
}

impl HoldState {
    /// Creates an idle hold with the given configuration.
    #[must_use]
    pub fn new(config: HoldConfig) -> Self {
        Self {
            config,
            phase: HoldPhase::Idle,
            crossed: 0,
        }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &HoldConfig {
        &self.config
    }

    /// Returns the current phase.
    #[must_use]
    pub fn phase(&self) -> HoldPhase {
        self.phase
    }

    /// Returns `true` while pressed and not yet complete.
    #[must_use]
    pub fn is_holding(&self) -> bool {
        matches!(self.phase, HoldPhase::Holding { .. })
    }

    /// Returns `true` once the hold has completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.phase == HoldPhase::Completed
    }

    /// Returns the tension at `now`: 0 when idle, 1 when completed.
    #[must_use]
    pub fn tension_at(&self, now: u64) -> f64 {
        match self.phase {
            HoldPhase::Idle => 0.0,
            HoldPhase::Holding { started_at } => {
                tension(now.saturating_sub(started_at), self.config.duration_ms)
            }
            HoldPhase::Completed => 1.0,
        }
    }

    /// Begins a hold at `now`. Ignored unless idle.
    pub fn press(&mut self, now: u64) -> HoldEvents {
        let mut events = HoldEvents::new();
        if self.phase == HoldPhase::Idle {
            self.phase = HoldPhase::Holding { started_at: now };
            self.crossed = 0;
            events.push(HoldEvent::Started);
            #[cfg(feature = "tracing")]
            tracing::trace!(now, "hold started");
            // A zero-length hold completes on the press itself.
            events.extend(self.tick(now));
        }
        events
    }

    /// Advances the hold to `now`, reporting crossed thresholds and completion.
    pub fn tick(&mut self, now: u64) -> HoldEvents {
        let mut events = HoldEvents::new();
        let HoldPhase::Holding { .. } = self.phase else {
            return events;
        };
        let tension = self.tension_at(now);
        while let Some(&threshold) = self.config.thresholds.get(self.crossed) {
            if threshold > tension {
                break;
            }
            events.push(HoldEvent::ThresholdCrossed {
                index: self.crossed,
            });
            self.crossed += 1;
        }
        if tension >= 1.0 {
            self.phase = HoldPhase::Completed;
            events.push(HoldEvent::Completed);
            #[cfg(feature = "tracing")]
            tracing::debug!(now, "hold completed");
        }
        events
    }

    /// Ends the hold at `now`.
    ///
    /// A hold that reached its duration by `now` completes; otherwise it is
    /// cancelled and returns to [`HoldPhase::Idle`].
    pub fn release(&mut self, now: u64) -> HoldEvents {
        let mut events = self.tick(now);
        if self.is_holding() {
            let tension = self.tension_at(now);
            self.phase = HoldPhase::Idle;
            self.crossed = 0;
            events.push(HoldEvent::Cancelled { tension });
        }
        events
    }

    /// Returns to [`HoldPhase::Idle`] from any phase.
    pub fn reset(&mut self) {
        self.phase = HoldPhase::Idle;
        self.crossed = 0;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn events(e: HoldEvents) -> alloc::vec::Vec<HoldEvent> {
        e.into_vec()
    }

    #[test]
    fn tension_is_linear_and_clamped() {
        assert_eq!(tension(0, 1_000), 0.0);
        assert_eq!(tension(250, 1_000), 0.25);
        assert_eq!(tension(1_000, 1_000), 1.0);
        assert_eq!(tension(5_000, 1_000), 1.0);
        assert_eq!(tension(0, 0), 1.0);
    }

    #[test]
    fn new_hold_is_idle() {
        let hold = HoldState::default();
        assert_eq!(hold.phase(), HoldPhase::Idle);
        assert_eq!(hold.tension_at(10_000), 0.0);
    }

    #[test]
    fn press_while_holding_is_ignored() {
        let mut hold = HoldState::new(HoldConfig::new(100));
        hold.press(10);
        assert!(hold.press(20).is_empty());
        assert_eq!(hold.phase(), HoldPhase::Holding { started_at: 10 });
    }

    #[test]
    fn early_release_cancels() {
        let mut hold = HoldState::new(HoldConfig::new(1_000));
        hold.press(0);
        assert_eq!(
            events(hold.release(400)),
            [HoldEvent::Cancelled { tension: 0.4 }]
        );
        assert_eq!(hold.phase(), HoldPhase::Idle);
    }

    #[test]
    fn late_release_completes_instead_of_cancelling() {
        let mut hold = HoldState::new(HoldConfig::new(1_000).with_thresholds([0.5]));
        hold.press(0);
        assert_eq!(
            events(hold.release(1_500)),
            [HoldEvent::ThresholdCrossed { index: 0 }, HoldEvent::Completed]
        );
        assert!(hold.is_completed());
        assert!(hold.release(1_600).is_empty());
    }

    #[test]
    fn thresholds_cross_once_in_order() {
        let mut hold =
            HoldState::new(HoldConfig::new(1_000).with_thresholds([0.75, 0.25, f64::NAN, 2.0]));
        assert_eq!(hold.config().thresholds(), &[0.25, 0.75, 1.0]);
        hold.press(0);
        assert_eq!(
            events(hold.tick(300)),
            [HoldEvent::ThresholdCrossed { index: 0 }]
        );
        assert!(hold.tick(310).is_empty());
        assert_eq!(
            events(hold.tick(1_000)),
            [
                HoldEvent::ThresholdCrossed { index: 1 },
                HoldEvent::ThresholdCrossed { index: 2 },
                HoldEvent::Completed
            ]
        );
    }

    #[test]
    fn zero_duration_completes_on_press() {
        let mut hold = HoldState::new(HoldConfig::new(0));
        assert_eq!(
            events(hold.press(5)),
            [HoldEvent::Started, HoldEvent::Completed]
        );
    }

    #[test]
    fn reset_returns_to_idle_and_allows_new_hold() {
        let mut hold = HoldState::new(HoldConfig::new(100).with_thresholds([0.5]));
        hold.press(0);
        hold.tick(100);
        hold.reset();
        assert_eq!(hold.phase(), HoldPhase::Idle);
        assert_eq!(events(hold.press(200)), [HoldEvent::Started]);
        assert_eq!(
            events(hold.tick(250)),
            [HoldEvent::ThresholdCrossed { index: 0 }]
        );
    }
}
