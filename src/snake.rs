use std::collections::VecDeque;

use crate::board::Board;
use crate::Cell;
use Direction::*;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn delta(self) -> (i32, i32) {
        match self {
            Up => (0, -1),
            Down => (0, 1),
            Left => (-1, 0),
            Right => (1, 0),
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        matches!(
            (self, other),
            (Up, Down) | (Down, Up) | (Left, Right) | (Right, Left)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Snake {
    board: Board,
    segments: VecDeque<Cell>,
    direction: Direction,
    pending_direction: Option<Direction>,
    target_length: usize,
    last_tail: Option<Cell>,
}

impl Snake {
    pub fn new(board: Board) -> Self {
        let mut snake = Snake {
            board,
            segments: VecDeque::new(),
            direction: Right,
            pending_direction: None,
            target_length: 1,
            last_tail: None,
        };
        snake.reset();
        snake
    }

    #[cfg(test)]
    pub fn from_segments(board: Board, segments: &[Cell], direction: Direction) -> Self {
        assert!(!segments.is_empty(), "a snake needs a head");
        Snake {
            board,
            segments: segments.iter().copied().collect(),
            direction,
            pending_direction: None,
            target_length: segments.len(),
            last_tail: None,
        }
    }

    /// Buffers a turn for the next `advance`. Turning straight back into the
    /// body is ignored; a later request replaces an earlier one.
    pub fn set_pending_direction(&mut self, direction: Direction) {
        if !direction.is_opposite(self.direction) {
            self.pending_direction = Some(direction);
        }
    }

    /// Moves one cell and returns the tail cell that was vacated, if any.
    pub fn advance(&mut self) -> Option<Cell> {
        if let Some(direction) = self.pending_direction.take() {
            self.direction = direction;
        }

        let new_head = self.board.step(self.get_head(), self.direction);
        self.segments.push_front(new_head);

        // The tail stays put while the snake is still short of its target
        self.last_tail = if self.segments.len() > self.target_length {
            self.segments.pop_back()
        } else {
            None
        };

        self.last_tail
    }

    pub fn get_head(&self) -> Cell {
        self.segments[0]
    }

    pub fn has_self_collision(&self) -> bool {
        let head = self.get_head();
        self.segments.iter().skip(1).any(|segment| *segment == head)
    }

    pub fn grow(&mut self) {
        self.target_length += 1;
    }

    pub fn reset(&mut self) {
        self.segments.clear();
        self.segments.push_back(self.board.center());
        self.direction = Right;
        self.pending_direction = None;
        self.target_length = 1;
        self.last_tail = None;
    }

    pub fn segments(&self) -> impl Iterator<Item = &Cell> {
        self.segments.iter()
    }

    pub fn last_tail(&self) -> Option<Cell> {
        self.last_tail
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    #[cfg(test)]
    pub fn pending_direction(&self) -> Option<Direction> {
        self.pending_direction
    }

    pub fn target_length(&self) -> usize {
        self.target_length
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cells(snake: &Snake) -> Vec<Cell> {
        snake.segments().copied().collect()
    }

    #[test]
    fn test_opposite_directions() {
        assert!(Up.is_opposite(Down));
        assert!(Down.is_opposite(Up));
        assert!(Left.is_opposite(Right));
        assert!(Right.is_opposite(Left));

        assert!(!Up.is_opposite(Left));
        assert!(!Right.is_opposite(Up));
        assert!(!Right.is_opposite(Right));
    }

    #[test]
    fn test_new_snake_starts_in_center() {
        let snake = Snake::new(Board::new(10, 8));
        assert_eq!(cells(&snake), vec![(5, 4)]);
        assert_eq!(snake.direction(), Right);
        assert_eq!(snake.pending_direction(), None);
        assert_eq!(snake.target_length(), 1);
    }

    #[test]
    fn test_advance_moves_head_and_drops_tail() {
        let mut snake = Snake::from_segments(Board::new(10, 10), &[(3, 3), (2, 3), (1, 3)], Right);

        let tail = snake.advance();

        assert_eq!(tail, Some((1, 3)));
        assert_eq!(snake.last_tail(), Some((1, 3)));
        assert_eq!(cells(&snake), vec![(4, 3), (3, 3), (2, 3)]);
    }

    #[test]
    fn test_length_never_exceeds_target() {
        let mut snake = Snake::new(Board::new(6, 6));

        for i in 0..40 {
            if i % 3 == 0 {
                snake.grow();
            }
            assert!(snake.len() <= snake.target_length());
            snake.advance();
            assert!(snake.len() <= snake.target_length());
        }
    }

    #[test]
    fn test_growth_shows_up_on_next_advance() {
        let mut snake = Snake::new(Board::new(20, 20));
        snake.advance();
        assert_eq!(snake.len(), 1);

        snake.grow();
        assert_eq!(snake.len(), 1);

        assert_eq!(snake.advance(), None);
        assert_eq!(snake.len(), 2);

        // Target reached, back to plain movement
        assert!(snake.advance().is_some());
        assert_eq!(snake.len(), 2);
    }

    #[test]
    fn test_wrap_around_all_edges() {
        let board = Board::new(10, 8);

        let mut snake = Snake::from_segments(board, &[(9, 4)], Right);
        snake.advance();
        assert_eq!(snake.get_head(), (0, 4));

        let mut snake = Snake::from_segments(board, &[(0, 4)], Left);
        snake.advance();
        assert_eq!(snake.get_head(), (9, 4));

        let mut snake = Snake::from_segments(board, &[(3, 0)], Up);
        snake.advance();
        assert_eq!(snake.get_head(), (3, 7));

        let mut snake = Snake::from_segments(board, &[(3, 7)], Down);
        snake.advance();
        assert_eq!(snake.get_head(), (3, 0));
    }

    #[test]
    fn test_reversal_is_rejected() {
        let mut snake = Snake::new(Board::default());
        assert_eq!(snake.direction(), Right);

        snake.set_pending_direction(Left);
        assert_eq!(snake.pending_direction(), None);

        snake.set_pending_direction(Up);
        assert_eq!(snake.pending_direction(), Some(Up));

        // Still heading right, so left stays invalid and keeps the earlier request
        snake.set_pending_direction(Left);
        assert_eq!(snake.pending_direction(), Some(Up));
    }

    #[test]
    fn test_latest_pending_direction_wins() {
        let mut snake = Snake::new(Board::new(10, 10));
        let (x, y) = snake.get_head();

        snake.set_pending_direction(Up);
        snake.set_pending_direction(Down);
        snake.advance();

        assert_eq!(snake.direction(), Down);
        assert_eq!(snake.pending_direction(), None);
        assert_eq!(snake.get_head(), (x, y + 1));
    }

    #[test]
    fn test_pending_direction_lasts_one_tick() {
        let mut snake = Snake::new(Board::new(10, 10));
        snake.set_pending_direction(Up);
        snake.advance();
        snake.advance();
        assert_eq!(snake.direction(), Up);
        assert_eq!(snake.get_head(), (5, 3));
    }

    #[test]
    fn test_self_collision_through_wrap() {
        let mut snake = Snake::from_segments(Board::new(3, 5), &[(2, 2), (1, 2), (0, 2)], Right);
        assert!(!snake.has_self_collision());

        // Growing keeps the tail in place, so wrapping onto it is a hit
        snake.grow();
        snake.advance();

        assert_eq!(snake.get_head(), (0, 2));
        assert!(snake.has_self_collision());
    }

    #[test]
    fn test_self_collision_tight_loop() {
        let mut snake = Snake::from_segments(
            Board::new(10, 10),
            &[(2, 2), (2, 3), (1, 3), (1, 2), (0, 2)],
            Up,
        );
        snake.set_pending_direction(Left);
        snake.advance();

        assert_eq!(snake.get_head(), (1, 2));
        assert!(snake.has_self_collision());
    }

    #[test]
    fn test_moving_into_vacated_tail_is_safe() {
        let mut snake = Snake::from_segments(Board::new(10, 10), &[(2, 2), (2, 3), (1, 3), (1, 2)], Up);
        snake.set_pending_direction(Left);
        snake.advance();

        assert_eq!(snake.get_head(), (1, 2));
        assert!(!snake.has_self_collision());
    }

    #[test]
    fn test_reset_restores_start_state() {
        let board = Board::new(8, 8);
        let mut snake = Snake::from_segments(board, &[(2, 2), (1, 2), (0, 2)], Down);
        snake.grow();
        snake.set_pending_direction(Left);

        snake.reset();

        assert_eq!(cells(&snake), vec![board.center()]);
        assert_eq!(snake.target_length(), 1);
        assert_eq!(snake.direction(), Right);
        assert_eq!(snake.pending_direction(), None);
        assert_eq!(snake.last_tail(), None);
    }

    #[test]
    fn test_reset_is_idempotent() {
        let mut snake = Snake::from_segments(Board::new(8, 8), &[(2, 2), (1, 2)], Up);
        snake.advance();

        snake.reset();
        let first = snake.clone();
        snake.reset();

        assert_eq!(snake, first);
    }
}
