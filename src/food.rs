use rand::Rng;

use crate::board::Board;
use crate::Cell;

#[derive(Debug, Clone, PartialEq)]
pub struct Food {
    board: Board,
    position: Cell,
}

impl Food {
    pub fn new<R: Rng + ?Sized>(board: Board, rng: &mut R) -> Self {
        let mut food = Food { board, position: board.center() };
        food.randomize_position(rng);
        food
    }

    #[cfg(test)]
    pub fn at(board: Board, position: Cell) -> Self {
        Food { board, position }
    }

    pub fn position(&self) -> Cell {
        self.position
    }

    /// Moves the food to a uniformly random cell. It may land on the snake.
    pub fn randomize_position<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.position = self.board.random_cell(rng);
    }
}
