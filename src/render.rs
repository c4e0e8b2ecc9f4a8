use anyhow::Result;
use crossterm::style::Color;

use crate::food::Food;
use crate::snake::Snake;
use crate::Cell;

pub const BOARD_BACKGROUND_COLOR: Color = Color::Rgb { r: 0, g: 0, b: 0 };
pub const BORDER_COLOR: Color = Color::Rgb { r: 93, g: 216, b: 228 };
pub const FOOD_COLOR: Color = Color::Rgb { r: 255, g: 0, b: 0 };
pub const SNAKE_COLOR: Color = Color::Rgb { r: 0, g: 255, b: 0 };

pub trait Surface {
    fn fill(&mut self, color: Color);

    fn fill_square(&mut self, cell: Cell, color: Color);

    fn draw_square(&mut self, cell: Cell, fill: Color, border: Color);

    fn present(&mut self) -> Result<()>;
}

pub trait Render {
    fn render<S: Surface + ?Sized>(&self, surface: &mut S);
}

impl Render for Food {
    fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        surface.draw_square(self.position(), FOOD_COLOR, BORDER_COLOR);
    }
}

impl Render for Snake {
    fn render<S: Surface + ?Sized>(&self, surface: &mut S) {
        // Erase first: the new head may sit where the old tail was
        if let Some(tail) = self.last_tail() {
            surface.fill_square(tail, BOARD_BACKGROUND_COLOR);
        }

        for segment in self.segments() {
            surface.draw_square(*segment, SNAKE_COLOR, BORDER_COLOR);
        }
    }
}
