use rand::Rng;

use crate::config::Config;
use crate::Cell;

/// Random placement gives up after this many samples and falls back to a
/// deterministic scan. Not tied to the grid size; inherited as a tunable.
const MAX_PLACEMENT_ATTEMPTS: u32 = 1000;

pub struct Food {
    position: Cell,
}

impl Food {
    pub fn new(config: &Config, forbidden: impl Fn(Cell) -> bool, rng: &mut impl Rng) -> Self {
        let mut food = Food { position: config.center() };
        food.relocate(config, forbidden, rng);
        food
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the food to a uniformly random cell for which `forbidden`
    /// returns false. If sampling exhausts its attempt cap (the grid is
    /// nearly full), scans all cells in row-major order and takes the
    /// first free one.
    ///
    /// Precondition: at least one cell is free. The game loop upholds
    /// this structurally, so it is not checked here; with every cell
    /// forbidden the previous position is kept.
    pub fn relocate(&mut self, config: &Config, forbidden: impl Fn(Cell) -> bool, rng: &mut impl Rng) {
        for _ in 0..MAX_PLACEMENT_ATTEMPTS {
            let cell = (rng.gen_range(0..config.grid_width), rng.gen_range(0..config.grid_height));
            if !forbidden(cell) {
                self.position = cell;
                return;
            }
        }

        for y in 0..config.grid_height {
            for x in 0..config.grid_width {
                if !forbidden((x, y)) {
                    self.position = (x, y);
                    return;
                }
            }
        }
    }

    #[cfg(test)]
    pub fn place(&mut self, cell: Cell) {
        self.position = cell;
    }
}
