// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Lab Palette: accent colors for browser rows.
//!
//! Row accents are a pure lookup from a [`Palette`] (one hue family per act)
//! and an [`Intensity`] to a [`Color`]. Nothing is computed from strings at
//! render time; the table is `const`.
//!
//! ```rust
//! use lab_catalog::GroupId;
//! use lab_palette::{Intensity, Palette, accent};
//!
//! let palette = Palette::for_group(GroupId::new(7));
//! assert_eq!(palette, Palette::Dusk);
//! assert_ne!(
//!     accent(palette, Intensity::Dim).to_rgba8(),
//!     accent(palette, Intensity::Bright).to_rgba8()
//! );
//! ```

#![no_std]

use lab_catalog::GroupId;
use lab_virtual_list::Row;
use peniko::Color;

/// A hue family. Groups are assigned palettes by ordinal, cycling.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Palette {
    /// Warm orange.
    Ember,
    /// Sea blue.
    Tide,
    /// Soft green.
    Moss,
    /// Muted violet.
    Dusk,
    /// Rose.
    Bloom,
    /// Pale cyan.
    Frost,
}

impl Palette {
    /// All palettes in assignment order.
    pub const ALL: [Self; 6] = [
        Self::Ember,
        Self::Tide,
        Self::Moss,
        Self::Dusk,
        Self::Bloom,
        Self::Frost,
    ];

    /// Returns the palette assigned to a group.
    #[must_use]
    pub const fn for_group(group: GroupId) -> Self {
        Self::ALL[group.ordinal() % Self::ALL.len()]
    }

    const fn row(self) -> usize {
        match self {
            Self::Ember => 0,
            Self::Tide => 1,
            Self::Moss => 2,
            Self::Dusk => 3,
            Self::Bloom => 4,
            Self::Frost => 5,
        }
    }
}

/// How strongly an accent is drawn.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Intensity {
    /// Completed or de-emphasized rows.
    Dim,
    /// Regular rows.
    #[default]
    Base,
    /// The current row or group.
    Bright,
}

impl Intensity {
    const fn column(self) -> usize {
        match self {
            Self::Dim => 0,
            Self::Base => 1,
            Self::Bright => 2,
        }
    }
}

// Columns: Dim, Base, Bright.
const TABLE: [[Color; 3]; 6] = [
    [
        Color::from_rgb8(0x6b, 0x3a, 0x22),
        Color::from_rgb8(0xe0, 0x7a, 0x3f),
        Color::from_rgb8(0xff, 0xa8, 0x6b),
    ],
    [
        Color::from_rgb8(0x1f, 0x43, 0x5e),
        Color::from_rgb8(0x3f, 0x8c, 0xc4),
        Color::from_rgb8(0x7c, 0xc3, 0xf2),
    ],
    [
        Color::from_rgb8(0x2d, 0x4a, 0x2c),
        Color::from_rgb8(0x5f, 0xa0, 0x5b),
        Color::from_rgb8(0x9b, 0xd8, 0x8f),
    ],
    [
        Color::from_rgb8(0x3b, 0x2d, 0x57),
        Color::from_rgb8(0x81, 0x66, 0xb8),
        Color::from_rgb8(0xb9, 0xa2, 0xec),
    ],
    [
        Color::from_rgb8(0x5e, 0x2a, 0x3c),
        Color::from_rgb8(0xc9, 0x5b, 0x7f),
        Color::from_rgb8(0xf3, 0x9a, 0xb7),
    ],
    [
        Color::from_rgb8(0x25, 0x4d, 0x52),
        Color::from_rgb8(0x5c, 0xb3, 0xbd),
        Color::from_rgb8(0xa6, 0xe6, 0xec),
    ],
];

/// Returns the accent color for a palette at an intensity.
#[must_use]
pub const fn accent(palette: Palette, intensity: Intensity) -> Color {
    TABLE[palette.row()][intensity.column()]
}

/// Returns the intensity a row should be drawn at.
///
/// Current rows (and the header of the current group) are bright, completed
/// items are dim, everything else is base.
#[must_use]
pub fn intensity_for_row(row: &Row) -> Intensity {
    match *row {
        Row::Header {
            is_current_group: true,
            ..
        }
        | Row::Item {
            is_current_item: true,
            ..
        } => Intensity::Bright,
        Row::Item {
            is_completed_item: true,
            ..
        } => Intensity::Dim,
        Row::Header { .. } | Row::Item { .. } => Intensity::Base,
    }
}

/// Returns the accent color for a row, from its group's palette.
#[must_use]
pub fn accent_for_row(row: &Row) -> Color {
    accent(Palette::for_group(row.group()), intensity_for_row(row))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(current: bool, completed: bool) -> Row {
        Row::Item {
            item_index: 0,
            group: GroupId::new(1),
            is_current_item: current,
            is_completed_item: completed,
        }
    }

    #[test]
    fn palettes_cycle_by_group_ordinal() {
        assert_eq!(Palette::for_group(GroupId::new(0)), Palette::Ember);
        assert_eq!(Palette::for_group(GroupId::new(5)), Palette::Frost);
        assert_eq!(Palette::for_group(GroupId::new(6)), Palette::Ember);
    }

    #[test]
    fn current_beats_completed() {
        assert_eq!(intensity_for_row(&item(true, true)), Intensity::Bright);
        assert_eq!(intensity_for_row(&item(false, true)), Intensity::Dim);
        assert_eq!(intensity_for_row(&item(false, false)), Intensity::Base);
    }

    #[test]
    fn header_intensity_follows_current_group() {
        let header = |current| Row::Header {
            group: GroupId::new(2),
            is_current_group: current,
            completed_in_group: 3,
        };
        assert_eq!(intensity_for_row(&header(true)), Intensity::Bright);
        assert_eq!(intensity_for_row(&header(false)), Intensity::Base);
    }

    #[test]
    fn row_accent_uses_group_palette() {
        assert_eq!(
            accent_for_row(&item(false, false)).to_rgba8(),
            accent(Palette::Tide, Intensity::Base).to_rgba8()
        );
    }

    #[test]
    fn every_entry_is_opaque_and_distinct_per_palette() {
        for palette in Palette::ALL {
            let [dim, base, bright] = [Intensity::Dim, Intensity::Base, Intensity::Bright]
                .map(|i| accent(palette, i).to_rgba8());
            assert_eq!(dim.a, 255);
            assert_ne!(dim, base);
            assert_ne!(base, bright);
        }
    }
}
