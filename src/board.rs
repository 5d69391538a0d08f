//! Game board state: ship placements and attacked cells.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::common::{AttackError, AttackOutcome, BoardSize, Cell, GenerateError, PlacementError};
use crate::placement::PlacementGenerator;
use crate::ship::Ship;

/// One player's board: the ships it owns and the cells attacked so far.
#[derive(Clone)]
pub struct Board {
    size: BoardSize,
    ships: Vec<Ship>,
    attacked: BTreeSet<Cell>,
    placed: bool,
}

impl Board {
    /// Create an empty board (no ships placed).
    pub fn new(size: BoardSize) -> Self {
        Board {
            size,
            ships: Vec::new(),
            attacked: BTreeSet::new(),
            placed: false,
        }
    }

    /// Create a board and install `ships` on it.
    pub fn with_ships(size: BoardSize, ships: Vec<Ship>) -> Result<Self, PlacementError> {
        let mut board = Self::new(size);
        board.place(ships)?;
        Ok(board)
    }

    /// Create a board with a randomly generated fleet.
    pub fn with_random_fleet<R: Rng + ?Sized>(
        rng: &mut R,
        generator: &PlacementGenerator,
        restarts: usize,
    ) -> Result<Self, GenerateError> {
        let ships = generator.generate_with_restarts(rng, restarts)?;
        let mut board = Self::new(generator.size());
        // generated fleets satisfy every placement rule
        board.ships = ships;
        board.placed = true;
        Ok(board)
    }

    pub fn size(&self) -> BoardSize {
        self.size
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Cells attacked so far.
    pub fn attacked(&self) -> &BTreeSet<Cell> {
        &self.attacked
    }

    /// Ship occupying `cell`, if any.
    pub fn ship_at(&self, cell: Cell) -> Option<&Ship> {
        self.ships.iter().find(|s| s.contains(cell))
    }

    /// Number of ships not yet sunk.
    pub fn remaining_ships(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// Install the whole ship set at once.
    ///
    /// Nothing is installed unless every ship is in bounds, no two ships
    /// share a cell and no two ships touch (diagonals included).
    pub fn place(&mut self, ships: Vec<Ship>) -> Result<(), PlacementError> {
        if self.placed {
            return Err(PlacementError::AlreadyPlaced);
        }
        if let Some(index) = ships.iter().position(|s| !s.fits_within(self.size)) {
            return Err(PlacementError::OutOfBounds { index });
        }
        if let Some((first, second)) = find_pair(&ships, Ship::overlaps) {
            return Err(PlacementError::Overlap { first, second });
        }
        if let Some((first, second)) = find_pair(&ships, Ship::is_adjacent_to) {
            return Err(PlacementError::TooClose { first, second });
        }
        log::debug!("placed {} ships on {}x{} board", ships.len(), self.size.width, self.size.height);
        self.ships = ships;
        self.placed = true;
        Ok(())
    }

    /// Process an attack at `cell`, damaging whichever ship occupies it.
    pub fn receive_attack(&mut self, cell: Cell) -> Result<AttackOutcome, AttackError> {
        if !self.size.contains(cell) {
            return Err(AttackError::OutOfBounds(cell));
        }
        if !self.attacked.insert(cell) {
            return Err(AttackError::AlreadyAttacked(cell));
        }
        let outcome = match self.ships.iter_mut().find(|s| s.contains(cell)) {
            Some(ship) => {
                ship.apply_damage(cell);
                AttackOutcome {
                    hit: true,
                    sunk: ship.is_sunk(),
                }
            }
            None => AttackOutcome::MISS,
        };
        log::trace!("attack at {}: {:?}", cell, outcome);
        Ok(outcome)
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_ships_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }
}

fn find_pair(ships: &[Ship], conflict: impl Fn(&Ship, &Ship) -> bool) -> Option<(usize, usize)> {
    ships.iter().enumerate().find_map(|(i, a)| {
        ships[i + 1..]
            .iter()
            .position(|b| conflict(a, b))
            .map(|j| (i, i + 1 + j))
    })
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  size: {}x{},\n  ships: {:?},\n  attacked: {}\n}}",
            self.size.width,
            self.size.height,
            self.ships,
            self.attacked.len()
        )
    }
}
