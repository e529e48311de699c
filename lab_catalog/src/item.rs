// Copyright 2026 the Specimen Lab Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item records and the text they expose to the filter.

use alloc::string::String;

/// An item that exposes text fields to query filtering.
///
/// Items are owned by the host and never mutated by the catalog. All a filter
/// needs from them is the set of strings a query may match against.
pub trait Searchable {
    /// Returns the fields a query is matched against, in any order.
    fn searchable_fields(&self) -> impl Iterator<Item = &str>;
}

impl Searchable for str {
    fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        core::iter::once(self)
    }
}

impl Searchable for &str {
    fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        core::iter::once(*self)
    }
}

impl Searchable for String {
    fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        core::iter::once(self.as_str())
    }
}

/// A catalog entry for one micro-interaction specimen.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Specimen {
    /// Unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Category or signature label.
    #[cfg_attr(feature = "serde", serde(default))]
    pub signature: String,
    /// Secondary display text.
    #[cfg_attr(feature = "serde", serde(default))]
    pub subtitle: String,
}

impl Specimen {
    /// Creates a specimen with an empty signature and subtitle.
    #[must_use]
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            ..Self::default()
        }
    }

    /// Sets the signature label.
    #[must_use]
    pub fn with_signature(mut self, signature: impl Into<String>) -> Self {
        self.signature = signature.into();
        self
    }

    /// Sets the subtitle.
    #[must_use]
    pub fn with_subtitle(mut self, subtitle: impl Into<String>) -> Self {
        self.subtitle = subtitle.into();
        self
    }
}

impl Searchable for Specimen {
    fn searchable_fields(&self) -> impl Iterator<Item = &str> {
        [
            self.title.as_str(),
            self.signature.as_str(),
            self.subtitle.as_str(),
        ]
        .into_iter()
    }
}
