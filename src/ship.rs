//! Ship geometry and damage tracking.

use alloc::collections::BTreeSet;
use alloc::vec::Vec;
use core::fmt;

use crate::common::{BoardSize, Cell, ShipError};

/// Orientation of a ship on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// A ship spanning a straight line of cells, with hits tracked per cell.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    start: Cell,
    end: Cell,
    orientation: Orientation,
    cells: Vec<Cell>,
    damaged: BTreeSet<Cell>,
}

impl Ship {
    /// Build a ship from two corner cells, in either order.
    ///
    /// The corners are normalized so that `start` is the top-left end. A
    /// single cell is a valid length-1 ship and is treated as horizontal.
    pub fn new(start: Cell, end: Cell) -> Result<Self, ShipError> {
        let (lo, hi) = (
            Cell::new(start.x.min(end.x), start.y.min(end.y)),
            Cell::new(start.x.max(end.x), start.y.max(end.y)),
        );
        let orientation = if lo.y == hi.y {
            Orientation::Horizontal
        } else if lo.x == hi.x {
            Orientation::Vertical
        } else {
            return Err(ShipError::InvalidGeometry { start, end });
        };

        let cells = match orientation {
            Orientation::Horizontal => (lo.x..=hi.x).map(|x| Cell::new(x, lo.y)).collect(),
            Orientation::Vertical => (lo.y..=hi.y).map(|y| Cell::new(lo.x, y)).collect(),
        };

        Ok(Ship {
            start: lo,
            end: hi,
            orientation,
            cells,
            damaged: BTreeSet::new(),
        })
    }

    /// Place a ship of `length` cells extending right or down from `origin`.
    pub fn from_origin(
        origin: Cell,
        orientation: Orientation,
        length: usize,
    ) -> Result<Self, ShipError> {
        if length == 0 {
            return Err(ShipError::ZeroLength);
        }
        let end = match orientation {
            Orientation::Horizontal => Cell::new(origin.x + length - 1, origin.y),
            Orientation::Vertical => Cell::new(origin.x, origin.y + length - 1),
        };
        let mut ship = Self::new(origin, end)?;
        // length-1 ships keep the requested orientation
        ship.orientation = orientation;
        Ok(ship)
    }

    /// Top-left end of the ship.
    pub fn start(&self) -> Cell {
        self.start
    }

    /// Bottom-right end of the ship.
    pub fn end(&self) -> Cell {
        self.end
    }

    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    pub fn is_horizontal(&self) -> bool {
        self.start.y == self.end.y
    }

    pub fn is_vertical(&self) -> bool {
        self.start.x == self.end.x
    }

    /// Cells the ship spans, from `start` to `end` inclusive.
    pub fn occupied_cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn length(&self) -> usize {
        self.cells.len()
    }

    pub fn contains(&self, cell: Cell) -> bool {
        (self.start.x..=self.end.x).contains(&cell.x)
            && (self.start.y..=self.end.y).contains(&cell.y)
    }

    /// Register damage at `cell`. Returns `true` if the ship occupies it.
    pub fn apply_damage(&mut self, cell: Cell) -> bool {
        if self.contains(cell) {
            self.damaged.insert(cell);
            true
        } else {
            false
        }
    }

    pub fn damaged_cells(&self) -> &BTreeSet<Cell> {
        &self.damaged
    }

    pub fn damage_count(&self) -> usize {
        self.damaged.len()
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.damaged.len() == self.cells.len()
    }

    /// Returns `true` if `cell` is on the ship or touches it, corners included.
    pub fn is_near_cell(&self, cell: Cell) -> bool {
        self.start.x.saturating_sub(1) <= cell.x
            && cell.x <= self.end.x.saturating_add(1)
            && self.start.y.saturating_sub(1) <= cell.y
            && cell.y <= self.end.y.saturating_add(1)
    }

    /// Returns `true` if any cell of `other` is near this ship.
    pub fn is_adjacent_to(&self, other: &Ship) -> bool {
        other.cells.iter().any(|&c| self.is_near_cell(c))
    }

    /// Returns `true` if any cell is shared with `other`.
    pub fn overlaps(&self, other: &Ship) -> bool {
        other.cells.iter().any(|&c| self.contains(c))
    }

    /// Returns `true` if the whole ship lies on a board of `size`.
    pub fn fits_within(&self, size: BoardSize) -> bool {
        size.contains(self.start) && size.contains(self.end)
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ start: {}, end: {}, orientation: {:?}, hits: {} }}",
            self.start,
            self.end,
            self.orientation,
            self.damaged.len(),
        )
    }
}
