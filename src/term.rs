use crate::board::Board;
use crate::render::Surface;
use crate::Cell;

use std::io::{stdout, Stdout, Write};

use anyhow::{bail, Context, Result};
use log::warn;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use crossterm::terminal::{ClearType, EnterAlternateScreen, LeaveAlternateScreen, SetTitle};
use crossterm::{cursor, execute, queue, terminal};

const CELL_COLUMNS: u16 = 2;
const WINDOW_TITLE: &str = "Змейка";
const HELP_LINE: &str = "Arrows/WASD to move, Esc/Q/CTRL+C to quit";

#[derive(Debug, Clone, Copy, PartialEq)]
enum Paint {
    Plain(Color),
    Square { fill: Color, border: Color },
}

/// Draws the board into the terminal.
///
/// Drawing calls only touch the back buffer. `present` compares it against
/// what is already on screen and writes the cells that differ.
pub struct TermManager<W: Write = Stdout> {
    out: W,
    board: Board,
    back: Vec<Paint>,
    front: Vec<Option<Paint>>,
}

impl TermManager {
    pub fn new(board: Board) -> Self {
        TermManager::with_writer(stdout(), board)
    }
}

impl<W: Write> TermManager<W> {
    pub fn with_writer(out: W, board: Board) -> Self {
        let cells = board.cell_count();
        TermManager {
            out,
            board,
            back: vec![Paint::Plain(Color::Reset); cells],
            front: vec![None; cells],
        }
    }

    pub fn required_size(&self) -> (u16, u16) {
        (self.board.width() * CELL_COLUMNS + 2, self.board.height() + 3)
    }

    pub fn setup(&mut self) -> Result<()> {
        let (width, height) = terminal::size().context("Error reading terminal size")?;
        let (min_width, min_height) = self.required_size();
        if width < min_width || height < min_height {
            bail!(
                "Terminal is {}x{}, the board needs at least {}x{}",
                width, height, min_width, min_height
            );
        }

        let entered = self.enter_game_screen();
        self.restore_on_error(entered)
    }

    /// Hands the terminal back. Every step is attempted even if an earlier
    /// one fails, and the first failure is reported.
    pub fn restore(&mut self) -> Result<()> {
        let raw_mode = terminal::disable_raw_mode().context("Error unsetting raw mode");
        let screen = execute!(
            self.out,
            ResetColor,
            cursor::Show,
            cursor::EnableBlinking,
            LeaveAlternateScreen
        )
        .context("Error leaving alt screen");

        raw_mode.and(screen)
    }

    pub fn flush(&mut self) -> Result<()> {
        self.out.flush().context("Error flushing")
    }

    ///////////////////////////////////////////////////////////////////////////

    fn enter_game_screen(&mut self) -> Result<()> {
        execute!(self.out, EnterAlternateScreen, SetTitle(WINDOW_TITLE))
            .context("Error entering alt screen")?;
        terminal::enable_raw_mode().context("Error setting raw mode")?;
        execute!(
            self.out,
            cursor::Hide,
            cursor::DisableBlinking,
            terminal::Clear(ClearType::All)
        )
        .context("Error preparing the screen")?;

        self.front = vec![None; self.board.cell_count()];
        self.draw_borders()?;
        self.flush()
    }

    // A half-entered terminal is left the way it was found
    fn restore_on_error<T>(&mut self, result: Result<T>) -> Result<T> {
        if result.is_err() {
            if let Err(e) = self.restore() {
                warn!("Restoring the terminal after a failed setup also failed: {:#}", e);
            }
        }

        result
    }

    fn draw_borders(&mut self) -> Result<()> {
        let width = self.board.width() * CELL_COLUMNS + 2;
        let height = self.board.height() + 2;
        let end_x = width - 1;
        let end_y = height - 1;

        for x in 0..width {
            let ch = if x == 0 || x == end_x { '+' } else { '-' };
            queue!(self.out, cursor::MoveTo(x, 0), Print(ch), cursor::MoveTo(x, end_y), Print(ch))?;
        }

        for y in 1..end_y {
            queue!(self.out, cursor::MoveTo(0, y), Print('|'), cursor::MoveTo(end_x, y), Print('|'))?;
        }

        queue!(self.out, cursor::MoveTo(0, height), Print(HELP_LINE))?;
        Ok(())
    }

    fn set(&mut self, cell: Cell, paint: Paint) {
        let index = self.board.index(cell);
        self.back[index] = paint;
    }

    #[cfg(test)]
    fn into_writer(self) -> W {
        self.out
    }
}

fn screen_position(cell: Cell) -> (u16, u16) {
    (cell.0 * CELL_COLUMNS + 1, cell.1 + 1)
}

impl<W: Write> Surface for TermManager<W> {
    fn fill(&mut self, color: Color) {
        for paint in self.back.iter_mut() {
            *paint = Paint::Plain(color);
        }
    }

    fn fill_square(&mut self, cell: Cell, color: Color) {
        self.set(cell, Paint::Plain(color));
    }

    fn draw_square(&mut self, cell: Cell, fill: Color, border: Color) {
        self.set(cell, Paint::Square { fill, border });
    }

    fn present(&mut self) -> Result<()> {
        let mut changed = false;

        for (index, paint) in self.back.iter().enumerate() {
            if self.front[index] == Some(*paint) {
                continue;
            }

            let (x, y) = screen_position(self.board.cell_at(index));
            match *paint {
                Paint::Plain(color) => {
                    queue!(self.out, cursor::MoveTo(x, y), SetBackgroundColor(color), Print("  "))?;
                }
                Paint::Square { fill, border } => {
                    queue!(
                        self.out,
                        cursor::MoveTo(x, y),
                        SetBackgroundColor(fill),
                        SetForegroundColor(border),
                        Print("[]")
                    )?;
                }
            }

            self.front[index] = Some(*paint);
            changed = true;
        }

        if changed {
            queue!(self.out, ResetColor)?;
            self.flush()?;
        }

        Ok(())
    }
}
