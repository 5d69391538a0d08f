//! Hunt/target attacker that finds ships using only hit and sink feedback.
//!
//! The strategy keeps a set of candidate cells (never attacked and not ruled
//! out) and a [`Phase`]:
//!
//! - `Search`: no unfinished ship is known, pick a random candidate.
//! - `Hunt`: one hit on an unfinished ship, try its orthogonal neighbours.
//! - `Track`: two or more hits in a line, extend the line at either end.
//!
//! Because ships never touch, every cell around a sunk ship is removed from
//! the candidates as soon as the sink is reported.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{AttackOutcome, BoardSize, Cell, TargetingError};
use crate::config::DEFAULT_BOARD_SIZE;
use crate::player::Player;
use crate::ship::Orientation;

/// What the attacker currently knows about an unfinished ship.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    /// No unsunk hits outstanding.
    #[default]
    Search,
    /// A single hit; orientation still unknown.
    Hunt { hit: Cell },
    /// Two or more hits, in the order they were made.
    Track { hits: Vec<Cell> },
}

impl Phase {
    /// Hits outstanding in this phase.
    pub fn hits(&self) -> &[Cell] {
        match self {
            Phase::Search => &[],
            Phase::Hunt { hit } => core::slice::from_ref(hit),
            Phase::Track { hits } => hits,
        }
    }

    fn from_hits(mut hits: Vec<Cell>) -> Self {
        match hits.len() {
            0 => Phase::Search,
            1 => Phase::Hunt { hit: hits.remove(0) },
            _ => Phase::Track { hits },
        }
    }
}

/// Automated attacker choosing targets from hit and sink feedback alone.
#[derive(Debug, Clone)]
pub struct TargetingStrategy {
    size: BoardSize,
    candidates: BTreeSet<Cell>,
    phase: Phase,
    pending: Option<Cell>,
    shots: usize,
}

impl TargetingStrategy {
    /// A fresh attacker for an opponent board of `size`.
    pub fn new(size: BoardSize) -> Self {
        Self {
            size,
            candidates: size.cells().collect(),
            phase: Phase::Search,
            pending: None,
            shots: 0,
        }
    }

    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    /// Cells still considered possible ship locations.
    pub fn remaining_candidates(&self) -> &BTreeSet<Cell> {
        &self.candidates
    }

    pub fn is_candidate(&self, cell: Cell) -> bool {
        self.candidates.contains(&cell)
    }

    /// Number of results recorded so far.
    pub fn shots_fired(&self) -> usize {
        self.shots
    }

    /// Choose the next cell to attack.
    ///
    /// The returned cell is always a candidate. It stays pending until the
    /// outcome is passed to [`record_result`](Self::record_result).
    pub fn next_target<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Cell, TargetingError> {
        let focused = match &self.phase {
            Phase::Search => None,
            Phase::Hunt { hit } => self.hunt(*hit),
            Phase::Track { hits } => self.track(hits),
        };
        let target = match focused {
            Some(cell) => cell,
            None => {
                if self.phase != Phase::Search {
                    log::warn!("no follow-up target for {:?}, searching instead", self.phase);
                }
                self.search(rng)?
            }
        };
        self.pending = Some(target);
        Ok(target)
    }

    /// Record the outcome of the attack on the last selected target.
    pub fn record_result(&mut self, is_hit: bool, is_sunk: bool) -> Result<(), TargetingError> {
        let cell = self.pending.take().ok_or(TargetingError::NoPendingTarget)?;
        self.record_at(cell, is_hit, is_sunk);
        Ok(())
    }

    /// Record the outcome of an attack on `cell`, whether or not the cell
    /// came from [`next_target`](Self::next_target). Clears any pending
    /// target.
    pub fn record_at(&mut self, cell: Cell, is_hit: bool, is_sunk: bool) {
        self.pending = None;
        self.candidates.remove(&cell);
        self.shots += 1;

        if !is_hit {
            return;
        }

        let mut hits = core::mem::take(&mut self.phase).hits().to_vec();
        hits.push(cell);

        if is_sunk {
            let (sunk, rest) = split_sunk(cell, hits);
            for c in &sunk {
                for n in c.neighbours() {
                    if !sunk.contains(&n) {
                        self.candidates.remove(&n);
                    }
                }
            }
            log::debug!("ship of length {} sunk at {}", sunk.len(), cell);
            self.phase = Phase::from_hits(rest);
        } else {
            self.phase = Phase::from_hits(hits);
        }
    }

    fn search<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Cell, TargetingError> {
        if self.candidates.is_empty() {
            return Err(TargetingError::NoCandidatesLeft);
        }
        let idx = rng.random_range(0..self.candidates.len());
        self.candidates
            .iter()
            .nth(idx)
            .copied()
            .ok_or(TargetingError::NoCandidatesLeft)
    }

    fn hunt(&self, hit: Cell) -> Option<Cell> {
        hit.orthogonal().find(|c| self.is_open(*c))
    }

    fn track(&self, hits: &[Cell]) -> Option<Cell> {
        let (first, second) = (hits[0], hits[1]);
        let orientation = if first.x == second.x {
            Orientation::Vertical
        } else {
            Orientation::Horizontal
        };
        let along = |c: Cell| match orientation {
            Orientation::Vertical => c.y,
            Orientation::Horizontal => c.x,
        };
        let at = |v: usize| match orientation {
            Orientation::Vertical => Cell::new(first.x, v),
            Orientation::Horizontal => Cell::new(v, first.y),
        };
        let min = hits.iter().copied().map(along).min()?;
        let max = hits.iter().copied().map(along).max()?;

        let past_max = at(max + 1);
        if self.is_open(past_max) {
            return Some(past_max);
        }
        if min > 1 && self.is_open(at(min - 1)) {
            return Some(at(min - 1));
        }
        (min..=max).map(at).find(|c| self.is_open(*c))
    }

    fn is_open(&self, cell: Cell) -> bool {
        self.size.contains(cell) && self.candidates.contains(&cell)
    }
}

impl Default for TargetingStrategy {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE)
    }
}

/// Split `hits` into the sunk ship (the cells orthogonally connected to
/// `sinking`) and the hits that belong to some other ship.
fn split_sunk(sinking: Cell, hits: Vec<Cell>) -> (BTreeSet<Cell>, Vec<Cell>) {
    let mut sunk = BTreeSet::new();
    let mut frontier = alloc::vec![sinking];
    while let Some(c) = frontier.pop() {
        if !sunk.insert(c) {
            continue;
        }
        frontier.extend(c.orthogonal().filter(|n| hits.contains(n) && !sunk.contains(n)));
    }
    let rest = hits.into_iter().filter(|c| !sunk.contains(c)).collect();
    (sunk, rest)
}

impl Player for TargetingStrategy {
    fn select_target(&mut self, rng: &mut SmallRng) -> Result<Cell, TargetingError> {
        self.next_target(rng)
    }

    fn handle_result(&mut self, outcome: AttackOutcome) -> Result<(), TargetingError> {
        self.record_result(outcome.hit, outcome.sunk)
    }
}
