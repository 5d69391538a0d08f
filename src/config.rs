use alloc::collections::BTreeMap;

use crate::common::BoardSize;

pub const DEFAULT_BOARD_SIZE: BoardSize = BoardSize::new(10, 10);

/// Attempts per ship before the placement generator gives up.
pub const MAX_PLACEMENT_ATTEMPTS: usize = 100;

/// Default fleet as (length, count): one ship of each length 1 to 5.
pub const DEFAULT_FLEET: [(usize, usize); 5] = [(1, 1), (2, 1), (3, 1), (4, 1), (5, 1)];

/// Requested fleet composition: ship length → number of ships.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    counts: BTreeMap<usize, usize>,
}

impl Fleet {
    /// An empty fleet.
    pub fn new() -> Self {
        Self {
            counts: BTreeMap::new(),
        }
    }

    /// Build a fleet from a multiset of lengths, e.g. `[5, 4, 3, 3, 2]`.
    pub fn from_lengths<I: IntoIterator<Item = usize>>(lengths: I) -> Self {
        lengths
            .into_iter()
            .fold(Self::new(), |fleet, len| fleet.with_ship(len, 1))
    }

    /// Add `count` ships of `length`.
    pub fn with_ship(mut self, length: usize, count: usize) -> Self {
        if count > 0 {
            let n = self.counts.entry(length).or_insert(0);
            *n = n.saturating_add(count);
        }
        self
    }

    /// Number of ships requested of `length`.
    pub fn count(&self, length: usize) -> usize {
        self.counts.get(&length).copied().unwrap_or(0)
    }

    /// Number of ships requested, saturating at `usize::MAX`.
    pub fn ship_count(&self) -> usize {
        self.counts.values().fold(0, |acc, &n| acc.saturating_add(n))
    }

    /// Total number of cells the fleet occupies, saturating at `usize::MAX`.
    pub fn total_cells(&self) -> usize {
        self.checked_total_cells().unwrap_or(usize::MAX)
    }

    /// Total number of cells, or `None` if it does not fit in a `usize`.
    pub fn checked_total_cells(&self) -> Option<usize> {
        self.counts
            .iter()
            .try_fold(0usize, |acc, (len, n)| acc.checked_add(len.checked_mul(*n)?))
    }

    /// Distinct requested lengths, longest first.
    pub fn lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts.keys().rev().copied()
    }

    /// Every requested ship length, longest first, repeated per count.
    pub fn longest_first(&self) -> impl Iterator<Item = usize> + '_ {
        self.counts
            .iter()
            .rev()
            .flat_map(|(&len, &n)| core::iter::repeat(len).take(n))
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }
}

impl Default for Fleet {
    fn default() -> Self {
        DEFAULT_FLEET
            .iter()
            .fold(Self::new(), |fleet, &(len, n)| fleet.with_ship(len, n))
    }
}

impl FromIterator<(usize, usize)> for Fleet {
    fn from_iter<I: IntoIterator<Item = (usize, usize)>>(iter: I) -> Self {
        iter.into_iter()
            .fold(Self::new(), |fleet, (len, n)| fleet.with_ship(len, n))
    }
}
