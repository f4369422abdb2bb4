use rand::Rng;

use crate::config::Config;
use crate::food::Food;
use crate::snake::{Direction, Snake};
use crate::Cell;

/// What a tick did, for the render layer to apply incrementally.
pub struct TickOutcome {
    pub ate: bool,
    pub reset: bool,
    /// Tail cell vacated this tick, to be erased. None when the body
    /// grew (or the whole playfield is being redrawn after a reset).
    pub removed_tail: Option<Cell>,
}

/// The two peer entities plus the per-tick sequencing that ties them
/// together: direction commit, movement, consumption, self-collision.
pub struct World {
    config: Config,
    snake: Snake,
    food: Food,
}

impl World {
    pub fn new(config: Config, rng: &mut impl Rng) -> Self {
        let snake = Snake::new(&config);
        let food = Food::new(&config, |cell| snake.occupies(cell), rng);
        World { config, snake, food }
    }

    pub fn queue_direction(&mut self, direction: Direction) {
        self.snake.set_pending(direction);
    }

    pub fn tick(&mut self, rng: &mut impl Rng) -> TickOutcome {
        self.snake.apply_pending_direction();
        let mut removed_tail = self.snake.advance(&self.config);

        let mut ate = false;
        if self.snake.head() == self.food.position() {
            // Hand the dropped tail back so growth shows this tick.
            self.snake.grow(removed_tail.take());
            ate = true;
        }

        let mut reset = false;
        if self.snake.hit_self() {
            self.snake.reset(&self.config);
            reset = true;
        }

        if ate || reset {
            let snake = &self.snake;
            self.food.relocate(&self.config, |cell| snake.occupies(cell), rng);
        }

        TickOutcome { ate, reset, removed_tail }
    }

    pub fn snake(&self) -> &Snake {
        &self.snake
    }

    pub fn food(&self) -> &Food {
        &self.food
    }
}
