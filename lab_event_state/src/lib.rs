// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=lab_event_state --heading-base-level=0

//! Lab Event State: interaction state machines for specimen screens.
//!
//! Specimens are driven by a small number of stateful gestures. This crate
//! models them as explicit state machines stepped by the host with
//! timestamps from its own clock, instead of free-running timers:
//!
//! - [`hold`]: press-and-hold with a linear tension curve, intermediate
//!   thresholds, completion, and early-release cancellation.
//!
//! The machines never read a clock and never schedule work. Each operation
//! takes `now` in milliseconds and returns the transitions it caused, so a
//! whole gesture can be replayed in a unit test with plain integers.
//!
//! ```rust
//! use lab_event_state::hold::{HoldConfig, HoldEvent, HoldPhase, HoldState};
//!
//! let mut hold = HoldState::new(HoldConfig::new(800));
//! hold.press(1_000);
//! assert_eq!(hold.tension_at(1_200), 0.25);
//!
//! // Letting go early cancels the gesture.
//! let events = hold.release(1_200);
//! assert_eq!(events.as_slice(), &[HoldEvent::Cancelled { tension: 0.25 }]);
//! assert_eq!(hold.phase(), HoldPhase::Idle);
//! ```
//!
//! Completion of a hold is what marks a specimen as visited in the Lab; see
//! `lab_session` for how that feeds back into the browser's completed set.
//!
//! This crate is `no_std` compatible (with `alloc`).

#![no_std]

extern crate alloc;

pub mod hold;
