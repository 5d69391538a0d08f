//! Commonly used types and utilities for ease of import.

pub use crate::{
    AttackOutcome, Board, BoardSize, Cell, Fleet, Orientation, Phase, PlacementGenerator, Player,
    RandomPlayer, Ship, TargetingStrategy,
};

#[cfg(feature = "std")]
pub use crate::init_logging;
