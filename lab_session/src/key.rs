// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard surface.

use lab_virtual_list::ScrollDirective;

/// Keys the session reacts to. Hosts map everything else to [`Key::Other`].
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Previous specimen.
    ArrowLeft,
    /// Next specimen.
    ArrowRight,
    /// Close the browser overlay.
    Escape,
    /// Any other key.
    Other,
}

/// Direction of a selection step.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Towards index 0.
    Previous,
    /// Towards the last item.
    Next,
}

/// What [`LabSession::handle_key`](crate::LabSession::handle_key) did.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum KeyOutcome {
    /// The selection moved to `index`.
    Moved {
        /// New current index.
        index: usize,
        /// Scroll request, when the new item is visible under the filter.
        directive: Option<ScrollDirective>,
    },
    /// The overlay was closed.
    Closed,
    /// Nothing changed.
    Ignored,
}
