//! Common types for Battleship: cells, board dimensions, attack outcomes and
//! the error enums returned by the core operations.

use core::fmt;

/// One (x, y) grid position. Coordinates are 1-indexed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Cell {
    pub x: usize,
    pub y: usize,
}

impl Cell {
    pub const fn new(x: usize, y: usize) -> Self {
        Self { x, y }
    }

    /// The up to eight cells surrounding this one, diagonals included.
    /// Cells that would fall below coordinate 1 are skipped; the upper bound
    /// is the caller's concern.
    pub fn neighbours(self) -> impl Iterator<Item = Cell> {
        let xs = self.x.saturating_sub(1).max(1)..=self.x + 1;
        xs.flat_map(move |x| {
            (self.y.saturating_sub(1).max(1)..=self.y + 1).map(move |y| Cell::new(x, y))
        })
        .filter(move |c| *c != self)
    }

    /// Orthogonal neighbours in the order they are tried: left, right, up, down.
    pub fn orthogonal(self) -> impl Iterator<Item = Cell> {
        let left = (self.x > 1).then(|| Cell::new(self.x - 1, self.y));
        let right = Some(Cell::new(self.x + 1, self.y));
        let up = (self.y > 1).then(|| Cell::new(self.x, self.y - 1));
        let down = Some(Cell::new(self.x, self.y + 1));
        [left, right, up, down].into_iter().flatten()
    }
}

impl From<(usize, usize)> for Cell {
    fn from((x, y): (usize, usize)) -> Self {
        Cell::new(x, y)
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Width × height of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct BoardSize {
    pub width: usize,
    pub height: usize,
}

impl BoardSize {
    pub const fn new(width: usize, height: usize) -> Self {
        Self { width, height }
    }

    /// Returns `true` when `cell` lies on the board.
    pub fn contains(&self, cell: Cell) -> bool {
        (1..=self.width).contains(&cell.x) && (1..=self.height).contains(&cell.y)
    }

    /// Number of cells on the board, saturating at `usize::MAX`.
    pub fn area(&self) -> usize {
        self.width.saturating_mul(self.height)
    }

    /// Every cell of the board in row-major order.
    pub fn cells(self) -> impl Iterator<Item = Cell> {
        (1..=self.height).flat_map(move |y| (1..=self.width).map(move |x| Cell::new(x, y)))
    }
}

/// Result of a single attack on a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct AttackOutcome {
    /// A ship occupies the attacked cell.
    pub hit: bool,
    /// The ship that was hit is now fully damaged.
    pub sunk: bool,
}

impl AttackOutcome {
    pub const MISS: Self = Self { hit: false, sunk: false };
    pub const HIT: Self = Self { hit: true, sunk: false };
    pub const SINK: Self = Self { hit: true, sunk: true };
}

/// Errors returned when building a ship.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShipError {
    /// Corner cells describe neither a horizontal nor a vertical line.
    InvalidGeometry { start: Cell, end: Cell },
    /// A ship must occupy at least one cell.
    ZeroLength,
}

/// Errors returned by `Board::place`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlacementError {
    /// Ships were already installed on this board.
    AlreadyPlaced,
    /// Ship at `index` extends past the board edge.
    OutOfBounds { index: usize },
    /// Two ships share a cell.
    Overlap { first: usize, second: usize },
    /// Two ships touch, diagonals included.
    TooClose { first: usize, second: usize },
}

/// Errors returned by `Board::receive_attack`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttackError {
    OutOfBounds(Cell),
    AlreadyAttacked(Cell),
}

/// Errors returned by the placement generator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenerateError {
    /// No valid spot was found for a ship of this length within the attempt cap.
    PlacementExhausted(usize),
    /// Requested ship length is zero.
    InvalidLength(usize),
    /// Ship is longer than both board dimensions.
    ShipTooLong(usize),
    /// Requested fleet has more cells than the board.
    FleetTooLarge { cells: usize, capacity: usize },
    /// Underlying ship construction failed.
    Geometry(ShipError),
}

/// Errors returned by attackers selecting or recording targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TargetingError {
    /// Every cell was attacked or excluded.
    NoCandidatesLeft,
    /// A result was reported without a target having been selected first.
    NoPendingTarget,
}

impl From<ShipError> for GenerateError {
    fn from(err: ShipError) -> Self {
        GenerateError::Geometry(err)
    }
}

impl fmt::Display for ShipError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShipError::InvalidGeometry { start, end } => write!(
                f,
                "Ship from {} to {} is neither horizontal nor vertical",
                start, end
            ),
            ShipError::ZeroLength => write!(f, "Ship must occupy at least one cell"),
        }
    }
}

impl fmt::Display for PlacementError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlacementError::AlreadyPlaced => write!(f, "Ships are already placed on the board"),
            PlacementError::OutOfBounds { index } => {
                write!(f, "Ship {} is out of bounds", index)
            }
            PlacementError::Overlap { first, second } => {
                write!(f, "Ships {} and {} overlap", first, second)
            }
            PlacementError::TooClose { first, second } => {
                write!(f, "Ships {} and {} are too close to each other", first, second)
            }
        }
    }
}

impl fmt::Display for AttackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AttackError::OutOfBounds(cell) => write!(f, "Cell {} is outside the board", cell),
            AttackError::AlreadyAttacked(cell) => {
                write!(f, "Cell {} was already attacked", cell)
            }
        }
    }
}

impl fmt::Display for GenerateError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GenerateError::PlacementExhausted(len) => {
                write!(f, "Unable to place ship of length {}", len)
            }
            GenerateError::InvalidLength(len) => write!(f, "Invalid ship length {}", len),
            GenerateError::ShipTooLong(len) => {
                write!(f, "Ship of length {} does not fit on the board", len)
            }
            GenerateError::FleetTooLarge { cells, capacity } => write!(
                f,
                "Fleet needs {} cells but the board only has {}",
                cells, capacity
            ),
            GenerateError::Geometry(e) => write!(f, "Ship error: {}", e),
        }
    }
}

impl fmt::Display for TargetingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TargetingError::NoCandidatesLeft => write!(f, "No candidate cells left to attack"),
            TargetingError::NoPendingTarget => {
                write!(f, "Result reported before a target was selected")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ShipError {}
#[cfg(feature = "std")]
impl std::error::Error for PlacementError {}
#[cfg(feature = "std")]
impl std::error::Error for AttackError {}
#[cfg(feature = "std")]
impl std::error::Error for GenerateError {}
#[cfg(feature = "std")]
impl std::error::Error for TargetingError {}
