//! Sorted marker list with splice-based range updates.

use crate::Error;
use core::{iter::FusedIterator, ops::RangeInclusive, slice::Windows};

/// The point at which the attribute takes on a new state.
///
/// Starting at `id` (inclusive), the attribute is `state` until the `id` of the next marker.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Marker {
    pub id: u64,
    pub state: bool,
}

impl Marker {
    /// Creates a new marker.
    pub const fn new(id: u64, state: bool) -> Self {
        Self { id, state }
    }
}

/// A boolean attribute over the `u64` domain, stored as normalized state-change markers.
///
/// See the [crate] documentation for the representation and the open tail convention.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Store {
    /// Strictly increasing by id, alternating in state.
    markers: Vec<Marker>,
}

impl Store {
    /// Creates an empty store (the attribute is `false` everywhere).
    pub const fn new() -> Self {
        Self {
            markers: Vec::new(),
        }
    }

    /// Returns the normalized markers.
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    /// Returns the number of markers.
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    /// Returns `true` if the store holds no markers.
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Returns the index of the first marker with an id `>= id`, or `> id` if `strict`.
    fn search(&self, id: u64, strict: bool) -> usize {
        self.markers.partition_point(|marker| {
            if strict {
                marker.id <= id
            } else {
                marker.id < id
            }
        })
    }

    /// Sets the attribute to `true` for every id in `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or if `end == u64::MAX`.
    pub fn set_range(&mut self, start: u64, end: u64) {
        self.set_range_to(start, end, true);
    }

    /// Sets the attribute to `state` for every id in `[start, end]`.
    ///
    /// # Panics
    ///
    /// Panics if `start > end` or if `end == u64::MAX`.
    pub fn set_range_to(&mut self, start: u64, end: u64, state: bool) {
        if let Err(err) = self.try_set_range_to(start, end, state) {
            panic!("{err}");
        }
    }

    /// Sets the attribute to `true` for every id in `[start, end]`, returning an error (and
    /// leaving the store unchanged) if the range is invalid.
    pub fn try_set_range(&mut self, start: u64, end: u64) -> Result<(), Error> {
        self.try_set_range_to(start, end, true)
    }

    /// Sets the attribute to `state` for every id in `[start, end]`, returning an error (and
    /// leaving the store unchanged) if the range is invalid.
    pub fn try_set_range_to(&mut self, start: u64, end: u64, state: bool) -> Result<(), Error> {
        if start > end {
            return Err(Error::InvalidRange { start, end });
        }
        let boundary = end.checked_add(1).ok_or(Error::EndOverflow { end })?;

        let idx_start = self.search(start, false);
        let idx_end = self.search(boundary, false);

        // State in force just before `start`
        let before = match idx_start {
            0 => false,
            i => self.markers[i - 1].state,
        };

        // State in force at `boundary` prior to this update
        let exact = self
            .markers
            .get(idx_end)
            .filter(|marker| marker.id == boundary)
            .copied();
        let after = match (exact, idx_end) {
            (Some(marker), _) => marker.state,
            (None, 0) => false,
            (None, i) => self.markers[i - 1].state,
        };

        // Only emit markers where the state actually changes
        let replacement = [
            (before != state).then_some(Marker::new(start, state)),
            (after != state).then_some(Marker::new(boundary, after)),
        ];

        // A marker exactly at the boundary is superseded by the replacement
        let until = idx_end + usize::from(exact.is_some());
        self.markers
            .splice(idx_start..until, replacement.into_iter().flatten());
        Ok(())
    }

    /// Returns whether the attribute is set at `id`.
    ///
    /// Ids below the first marker are `false`.
    pub fn is_set(&self, id: u64) -> bool {
        match self.search(id, true) {
            0 => false,
            i => self.markers[i - 1].state,
        }
    }

    /// Returns the number of ids in closed runs where the attribute is set.
    ///
    /// The open tail after the last marker is not counted, even if it is set.
    pub fn count_set_extent(&self) -> u64 {
        self.markers
            .windows(2)
            .filter(|pair| pair[0].state)
            .map(|pair| pair[1].id - pair[0].id)
            .sum()
    }

    /// Returns an iterator over the closed runs where the attribute is set, as inclusive ranges.
    ///
    /// Like [Self::count_set_extent], the open tail is not yielded.
    pub fn ranges(&self) -> Ranges<'_> {
        Ranges {
            pairs: self.markers.windows(2),
        }
    }
}

impl Extend<RangeInclusive<u64>> for Store {
    fn extend<I: IntoIterator<Item = RangeInclusive<u64>>>(&mut self, iter: I) {
        for range in iter {
            self.set_range(*range.start(), *range.end());
        }
    }
}

impl FromIterator<RangeInclusive<u64>> for Store {
    fn from_iter<I: IntoIterator<Item = RangeInclusive<u64>>>(iter: I) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}

/// Iterator over the closed set runs of a [Store].
#[derive(Clone, Debug)]
pub struct Ranges<'a> {
    pairs: Windows<'a, Marker>,
}

impl Iterator for Ranges<'_> {
    type Item = RangeInclusive<u64>;

    fn next(&mut self) -> Option<Self::Item> {
        self.pairs
            .by_ref()
            .find(|pair| pair[0].state)
            .map(|pair| pair[0].id..=pair[1].id - 1)
    }
}

impl FusedIterator for Ranges<'_> {}
