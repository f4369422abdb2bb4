use std::collections::VecDeque;

use crate::config::Config;
use crate::Cell;
use Direction::*;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(&self) -> Cell {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn is_opposite(&self, other: Direction) -> bool {
        matches!((*self, other), (Up, Down) | (Down, Up) | (Left, Right) | (Right, Left))
    }
}

pub struct Snake {
    /// Body cells, head at the front. A deque keeps the per-tick
    /// head-insert/tail-pop O(1).
    segments: VecDeque<Cell>,
    /// Length the body is growing toward; the segment count catches up
    /// within one tick of a growth event.
    target_len: usize,
    heading: Direction,
    /// Buffered input direction, consumed at most once per tick.
    pending: Option<Direction>,
}

impl Snake {
    pub fn new(config: &Config) -> Self {
        let mut segments = VecDeque::new();
        segments.push_back(config.center());
        Snake { segments, target_len: 1, heading: Right, pending: None }
    }

    pub fn head(&self) -> Cell {
        *self.segments.front().unwrap()
    }

    pub fn segments(&self) -> &VecDeque<Cell> {
        &self.segments
    }

    pub fn occupies(&self, cell: Cell) -> bool {
        self.segments.contains(&cell)
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    /// Buffers a direction change for the next tick. Several calls within
    /// one tick overwrite each other: last write wins.
    pub fn set_pending(&mut self, direction: Direction) {
        self.pending = Some(direction);
    }

    /// Commits the buffered direction unless it is a straight reversal.
    /// The buffer is cleared either way, so an illegal turn is dropped
    /// rather than retried on a later tick.
    pub fn apply_pending_direction(&mut self) {
        if let Some(direction) = self.pending.take() {
            if !direction.is_opposite(self.heading) {
                self.heading = direction;
            }
        }
    }

    /// Moves one cell in the current heading, wrapping at the grid edges,
    /// and returns the tail cell that was dropped. Returns None on the
    /// tick where the body is still shorter than its target length.
    pub fn advance(&mut self, config: &Config) -> Option<Cell> {
        let (dx, dy) = self.heading.delta();
        let (head_x, head_y) = self.head();
        let mut x = head_x + dx;
        let mut y = head_y + dy;

        if x < 0 {
            x = config.grid_width - 1;
        } else if x >= config.grid_width {
            x = 0;
        }
        if y < 0 {
            y = config.grid_height - 1;
        } else if y >= config.grid_height {
            y = 0;
        }

        self.segments.push_front((x, y));

        if self.segments.len() > self.target_len {
            self.segments.pop_back()
        } else {
            None
        }
    }

    /// Registers growth for the move that just happened. Restoring the
    /// tail dropped by advance() makes the extra segment visible on this
    /// tick instead of the next one.
    pub fn grow(&mut self, removed_tail: Option<Cell>) {
        self.target_len += 1;
        if let Some(tail) = removed_tail {
            self.segments.push_back(tail);
        }
    }

    /// Whether the head overlaps any body segment.
    pub fn hit_self(&self) -> bool {
        let head = self.head();
        self.segments.iter().skip(1).any(|&cell| cell == head)
    }

    /// Back to the initial state: one segment at grid center, heading
    /// Right, nothing buffered.
    pub fn reset(&mut self, config: &Config) {
        self.segments.clear();
        self.segments.push_back(config.center());
        self.target_len = 1;
        self.heading = Right;
        self.pending = None;
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn target_len(&self) -> usize {
        self.target_len
    }

    pub fn head_char(&self) -> char {
        match self.heading {
            Up => '^',
            Down => 'v',
            Left => '<',
            Right => '>',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> Config {
        Config::default()
    }

    #[test]
    fn starts_as_single_segment_at_center() {
        let snake = Snake::new(&config());
        assert_eq!(snake.len(), 1);
        assert_eq!(snake.target_len(), 1);
        assert_eq!(snake.head(), (16, 12));
        assert_eq!(snake.heading(), Right);
    }

    #[test]
    fn reversal_is_rejected_and_buffer_cleared() {
        let mut snake = Snake::new(&config());
        snake.set_pending(Left); // opposite of initial Right
        snake.apply_pending_direction();
        assert_eq!(snake.heading(), Right);
        assert!(snake.pending.is_none());
    }

    #[test]
    fn non_opposite_direction_is_committed() {
        let mut snake = Snake::new(&config());
        snake.set_pending(Up);
        snake.apply_pending_direction();
        assert_eq!(snake.heading(), Up);

        snake.set_pending(Left);
        snake.apply_pending_direction();
        assert_eq!(snake.heading(), Left);
    }

    #[test]
    fn last_buffered_direction_wins() {
        let mut snake = Snake::new(&config());
        snake.set_pending(Up);
        snake.set_pending(Down);
        snake.apply_pending_direction();
        assert_eq!(snake.heading(), Down);
    }

    #[test]
    fn advance_moves_one_cell() {
        let config = config();
        let mut snake = Snake::new(&config);
        let removed = snake.advance(&config);
        assert_eq!(snake.head(), (17, 12));
        assert_eq!(removed, Some((16, 12)));
        assert_eq!(snake.len(), 1);
    }

    #[test]
    fn advance_wraps_on_every_edge() {
        let config = config();

        let mut snake = Snake::new(&config);
        snake.segments = VecDeque::from(vec![(0, 5)]);
        snake.heading = Left;
        snake.advance(&config);
        assert_eq!(snake.head(), (31, 5));

        snake.segments = VecDeque::from(vec![(31, 5)]);
        snake.heading = Right;
        snake.advance(&config);
        assert_eq!(snake.head(), (0, 5));

        snake.segments = VecDeque::from(vec![(7, 0)]);
        snake.heading = Up;
        snake.advance(&config);
        assert_eq!(snake.head(), (7, 23));

        snake.segments = VecDeque::from(vec![(7, 23)]);
        snake.heading = Down;
        snake.advance(&config);
        assert_eq!(snake.head(), (7, 0));
    }

    #[test]
    fn growth_is_visible_on_the_same_tick() {
        let config = config();
        let mut snake = Snake::new(&config);

        let removed = snake.advance(&config);
        snake.grow(removed);

        assert_eq!(snake.target_len(), 2);
        assert_eq!(snake.len(), 2);
        assert_eq!(snake.segments, VecDeque::from(vec![(17, 12), (16, 12)]));
    }

    #[test]
    fn segment_count_never_exceeds_target() {
        let config = config();
        let mut snake = Snake::new(&config);

        for _ in 0..10 {
            let removed = snake.advance(&config);
            assert!(snake.len() <= snake.target_len());
            snake.grow(removed);
            assert!(snake.len() <= snake.target_len());
            assert_eq!(snake.len(), snake.target_len());
        }
    }

    #[test]
    fn detects_head_overlapping_body() {
        let config = config();
        let mut snake = Snake::new(&config);
        assert!(!snake.hit_self());

        snake.segments = VecDeque::from(vec![(5, 5), (6, 5), (6, 6), (5, 6), (5, 5)]);
        assert!(snake.hit_self());
    }

    #[test]
    fn reset_restores_initial_state() {
        let config = config();
        let mut snake = Snake::new(&config);
        snake.segments = VecDeque::from(vec![(5, 5), (4, 5), (3, 5)]);
        snake.target_len = 3;
        snake.heading = Down;
        snake.set_pending(Left);

        snake.reset(&config);

        assert_eq!(snake.len(), 1);
        assert_eq!(snake.target_len(), 1);
        assert_eq!(snake.head(), (16, 12));
        assert_eq!(snake.heading(), Right);
        assert!(snake.pending.is_none());
    }
}
