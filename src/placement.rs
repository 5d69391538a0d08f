//! Random fleet generation obeying the no-overlap and no-touching rules.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use rand::Rng;

use crate::common::{BoardSize, Cell, GenerateError};
use crate::config::{Fleet, DEFAULT_BOARD_SIZE, MAX_PLACEMENT_ATTEMPTS};
use crate::ship::{Orientation, Ship};

/// Generates ship layouts for a board size and fleet request.
///
/// Ships are placed greedily, longest first. Each ship gets a fixed number of
/// random attempts; a candidate is kept only if it neither overlaps nor
/// touches an already placed ship. Running out of attempts fails the whole
/// layout with [`GenerateError::PlacementExhausted`]. This is a bounded
/// retry, not a complete solver: a tight fleet may fail even when a valid
/// layout exists.
#[derive(Debug, Clone)]
pub struct PlacementGenerator {
    size: BoardSize,
    fleet: Fleet,
    max_attempts: usize,
}

impl PlacementGenerator {
    pub fn new(size: BoardSize, fleet: Fleet) -> Self {
        Self {
            size,
            fleet,
            max_attempts: MAX_PLACEMENT_ATTEMPTS,
        }
    }

    /// Override the per-ship attempt cap.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts;
        self
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Produce one layout satisfying the fleet request.
    pub fn generate<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<Ship>, GenerateError> {
        self.check_feasible()?;

        let mut ships: Vec<Ship> = Vec::new();
        let mut occupied: BTreeSet<Cell> = BTreeSet::new();

        for len in self.fleet.longest_first() {
            let ship = self.place_one(rng, len, &ships, &occupied)?;
            occupied.extend(ship.occupied_cells().iter().copied());
            ships.push(ship);
        }
        Ok(ships)
    }

    /// Like [`generate`](Self::generate), but starts over from an empty board
    /// up to `restarts` more times when a ship cannot be placed.
    pub fn generate_with_restarts<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        restarts: usize,
    ) -> Result<Vec<Ship>, GenerateError> {
        let mut round = 0;
        loop {
            match self.generate(rng) {
                Err(GenerateError::PlacementExhausted(len)) if round < restarts => {
                    round += 1;
                    log::warn!(
                        "could not place ship of length {}, restarting layout ({}/{})",
                        len,
                        round,
                        restarts
                    );
                }
                res => return res,
            }
        }
    }

    /// Reject requests that can never fit, before spending any attempts.
    fn check_feasible(&self) -> Result<(), GenerateError> {
        for len in self.fleet.lengths() {
            if len == 0 {
                return Err(GenerateError::InvalidLength(len));
            }
            if len > self.size.width && len > self.size.height {
                return Err(GenerateError::ShipTooLong(len));
            }
        }
        let capacity = self.size.area();
        match self.fleet.checked_total_cells() {
            Some(cells) if cells <= capacity => Ok(()),
            cells => Err(GenerateError::FleetTooLarge {
                cells: cells.unwrap_or(usize::MAX),
                capacity,
            }),
        }
    }

    fn place_one<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        len: usize,
        placed: &[Ship],
        occupied: &BTreeSet<Cell>,
    ) -> Result<Ship, GenerateError> {
        let fits_h = len <= self.size.width;
        let fits_v = len <= self.size.height;

        for attempt in 1..=self.max_attempts {
            let horizontal = match (fits_h, fits_v) {
                (true, true) => rng.random_bool(0.5),
                (h, _) => h,
            };
            let orientation = if horizontal {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (max_x, max_y) = match orientation {
                Orientation::Horizontal => (self.size.width - len + 1, self.size.height),
                Orientation::Vertical => (self.size.width, self.size.height - len + 1),
            };
            let origin = Cell::new(rng.random_range(1..=max_x), rng.random_range(1..=max_y));
            let ship = Ship::from_origin(origin, orientation, len)?;

            if ship.occupied_cells().iter().any(|c| occupied.contains(c)) {
                continue;
            }
            if placed.iter().any(|other| ship.is_adjacent_to(other)) {
                continue;
            }
            log::debug!("placed length {} ship at {:?} after {} attempts", len, ship, attempt);
            return Ok(ship);
        }
        Err(GenerateError::PlacementExhausted(len))
    }
}

impl Default for PlacementGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_BOARD_SIZE, Fleet::default())
    }
}
