use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use super::*;

/// Purely random placement, every layout with the configured mine count is equally likely.
#[derive(Clone, Debug)]
pub struct RandomBoardGenerator<R = SmallRng> {
    rng: R,
}

impl RandomBoardGenerator<SmallRng> {
    pub fn from_seed(seed: u64) -> Self {
        Self::new(SmallRng::seed_from_u64(seed))
    }
}

impl<R: Rng> RandomBoardGenerator<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }
}

impl<R: Rng> BoardGenerator for RandomBoardGenerator<R> {
    fn generate(mut self, config: GameConfig) -> Board {
        let mut board = Board::empty(config.size());
        board.place_mines(config.mines(), &mut self.rng);
        board.calculate_numbers();

        // double check mine count
        if board.mine_count() != config.mines() {
            log::warn!(
                "Generated board count mismatch, actual: {}, requested: {}",
                board.mine_count(),
                config.mines()
            );
        }
        log::debug!(
            "Generated {}x{} board with {} mines",
            config.rows(),
            config.cols(),
            board.mine_count()
        );
        board
    }
}
