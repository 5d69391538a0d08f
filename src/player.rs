use alloc::collections::BTreeSet;
use rand::rngs::SmallRng;
use rand::Rng;

use crate::common::{AttackOutcome, BoardSize, Cell, TargetingError};

/// Attacking side of a turn, implemented by the different attacker types.
pub trait Player {
    /// Choose the next cell to attack on the opponent board.
    fn select_target(&mut self, rng: &mut SmallRng) -> Result<Cell, TargetingError>;

    /// Inform the player of the outcome of its last attack.
    fn handle_result(&mut self, _outcome: AttackOutcome) -> Result<(), TargetingError> {
        Ok(())
    }
}

/// Baseline attacker: random cells, never the same one twice, no deduction.
#[derive(Debug, Clone)]
pub struct RandomPlayer {
    untried: BTreeSet<Cell>,
}

impl RandomPlayer {
    pub fn new(size: BoardSize) -> Self {
        Self {
            untried: size.cells().collect(),
        }
    }

    /// Cells not attacked yet.
    pub fn untried(&self) -> &BTreeSet<Cell> {
        &self.untried
    }
}

impl Player for RandomPlayer {
    fn select_target(&mut self, rng: &mut SmallRng) -> Result<Cell, TargetingError> {
        if self.untried.is_empty() {
            return Err(TargetingError::NoCandidatesLeft);
        }
        let idx = rng.random_range(0..self.untried.len());
        let cell = self
            .untried
            .iter()
            .nth(idx)
            .copied()
            .ok_or(TargetingError::NoCandidatesLeft)?;
        self.untried.remove(&cell);
        Ok(cell)
    }
}
