use crate::snake::Direction;
use crate::{Cell, GridInt};

use rand::Rng;

pub const GRID_WIDTH: GridInt = 32;
pub const GRID_HEIGHT: GridInt = 24;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    width: GridInt,
    height: GridInt,
}

impl Board {
    pub fn new(width: GridInt, height: GridInt) -> Self {
        debug_assert!(width > 0 && height > 0, "board must have at least one cell");
        Board { width, height }
    }

    pub fn width(&self) -> GridInt {
        self.width
    }

    pub fn height(&self) -> GridInt {
        self.height
    }

    pub fn center(&self) -> Cell {
        (self.width / 2, self.height / 2)
    }

    /// The cell one step away from `from`, re-entering on the opposite edge
    /// when it leaves the board.
    pub fn step(&self, from: Cell, direction: Direction) -> Cell {
        let (dx, dy) = direction.delta();
        let x = (i32::from(from.0) + dx).rem_euclid(i32::from(self.width));
        let y = (i32::from(from.1) + dy).rem_euclid(i32::from(self.height));

        (x as GridInt, y as GridInt)
    }

    pub fn random_cell<R: Rng + ?Sized>(&self, rng: &mut R) -> Cell {
        (rng.gen_range(0..self.width), rng.gen_range(0..self.height))
    }

    pub fn cell_count(&self) -> usize {
        self.width as usize * self.height as usize
    }

    pub fn index(&self, cell: Cell) -> usize {
        debug_assert!(self.contains(cell), "{:?} is off the board", cell);
        self.width as usize * cell.1 as usize + cell.0 as usize
    }

    pub fn cell_at(&self, index: usize) -> Cell {
        let width = self.width as usize;
        ((index % width) as GridInt, (index / width) as GridInt)
    }

    pub fn contains(&self, cell: Cell) -> bool {
        cell.0 < self.width && cell.1 < self.height
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::new(GRID_WIDTH, GRID_HEIGHT)
    }
}
