use rand::Rng as _;

use crate::{array::Array2D, dims::Dims};

use super::Random;

/// Life-like cellular automaton that grows maze-looking corridors from a random patch.
///
/// A dead cell is born with exactly `birth` live neighbors, a live cell survives with a count
/// in `survive_min..=survive_max`. The Moore neighborhood wraps around the board edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LifeLike {
    pub birth: u8,
    pub survive_min: u8,
    pub survive_max: u8,
}

impl Default for LifeLike {
    /// B3/S12345
    fn default() -> Self {
        Self {
            birth: 3,
            survive_min: 1,
            survive_max: 5,
        }
    }
}

impl LifeLike {
    pub const DEFAULT_SIZE: Dims = Dims(200, 150);
    pub const DEFAULT_PATCH: Dims = Dims(20, 16);
    pub const DEFAULT_ITERATIONS: usize = 400;
    pub const DEFAULT_DENSITY: f64 = 0.25;

    /// Dead board with a centered `patch` where each cell is alive with `density` probability.
    ///
    /// The patch is cut down to the board if it doesn't fit.
    pub fn seed_patch(size: Dims, patch: Dims, density: f64, rng: &mut Random) -> Array2D<bool> {
        let size = Dims(size.0.max(0), size.1.max(0));
        let mut board = Array2D::new(false, size.0 as usize, size.1 as usize);

        let patch = Dims(patch.0.clamp(0, size.0), patch.1.clamp(0, size.1));
        let from = Dims(size.0 / 2 - patch.0 / 2, size.1 / 2 - patch.1 / 2);
        let density = density.clamp(0.0, 1.0);

        for pos in Dims::iter_fill(from, from + patch) {
            if let Some(cell) = board.get_mut(pos) {
                *cell = rng.gen_bool(density);
            }
        }

        board
    }

    fn live_neighbors(board: &Array2D<bool>, pos: Dims) -> u8 {
        let Dims(w, h) = board.size();
        let mut count = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if dx == 0 && dy == 0 {
                    continue;
                }

                let wrapped = Dims((pos.0 + dx).rem_euclid(w), (pos.1 + dy).rem_euclid(h));
                if board[wrapped] {
                    count += 1;
                }
            }
        }
        count
    }

    pub fn step(&self, board: &Array2D<bool>) -> Array2D<bool> {
        let mut next = board.clone();
        for pos in board.iter_pos() {
            let n = Self::live_neighbors(board, pos);
            next[pos] = n == self.birth
                || (board[pos] && (self.survive_min..=self.survive_max).contains(&n));
        }
        next
    }

    pub fn run(&self, mut board: Array2D<bool>, iterations: usize) -> Array2D<bool> {
        for i in 0..iterations {
            board = self.step(&board);
            if i % 50 == 0 {
                log::trace!(
                    "life-like iteration {}/{}, {} alive",
                    i,
                    iterations,
                    board.iter().filter(|&&alive| alive).count()
                );
            }
        }
        board
    }
}
