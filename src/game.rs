use anyhow::Result;
use log::{debug, info, trace};
use rand::{rngs::ThreadRng, Rng};

use crate::board::Board;
use crate::clock::Clock;
use crate::food::Food;
use crate::input::{InputEvent, InputSource};
use crate::render::{Render, Surface, BOARD_BACKGROUND_COLOR};
use crate::snake::Snake;

pub const SPEED: u32 = 10;
pub const COLLISION_PAUSE_MS: u64 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    Continue,
    Quit,
}

pub struct SnakeGame<R: Rng = ThreadRng> {
    snake: Snake,
    food: Food,
    rng: R,
}

impl SnakeGame {
    pub fn new(board: Board) -> Self {
        SnakeGame::with_rng(board, rand::thread_rng())
    }
}

impl<R: Rng> SnakeGame<R> {
    pub fn with_rng(board: Board, mut rng: R) -> Self {
        let food = Food::new(board, &mut rng);
        SnakeGame { snake: Snake::new(board), food, rng }
    }

    pub fn run<S, I, C>(&mut self, surface: &mut S, input: &mut I, clock: &mut C) -> Result<()>
    where
        S: Surface + ?Sized,
        I: InputSource + ?Sized,
        C: Clock + ?Sized,
    {
        info!("Game started, food at {:?}", self.food.position());

        loop {
            if self.tick(surface, input, clock)? == TickOutcome::Quit {
                info!("Quit requested at length {}", self.snake.len());
                return Ok(());
            }
        }
    }

    pub fn tick<S, I, C>(&mut self, surface: &mut S, input: &mut I, clock: &mut C) -> Result<TickOutcome>
    where
        S: Surface + ?Sized,
        I: InputSource + ?Sized,
        C: Clock + ?Sized,
    {
        clock.tick(SPEED);

        for event in input.poll_events()? {
            match event {
                InputEvent::Quit => return Ok(TickOutcome::Quit),
                InputEvent::Turn(direction) => self.snake.set_pending_direction(direction),
            }
        }

        self.snake.advance();
        trace!("Head at {:?} moving {:?}", self.snake.get_head(), self.snake.direction());

        if self.snake.has_self_collision() {
            info!("Snake bit itself at length {}, resetting", self.snake.len());
            clock.delay(COLLISION_PAUSE_MS);
            self.snake.reset();
        } else if self.snake.get_head() == self.food.position() {
            self.snake.grow();
            self.food.randomize_position(&mut self.rng);
            debug!(
                "Food eaten, target length {}, next food at {:?}",
                self.snake.target_length(),
                self.food.position()
            );
        }

        self.render(surface)?;

        Ok(TickOutcome::Continue)
    }

    fn render<S: Surface + ?Sized>(&self, surface: &mut S) -> Result<()> {
        surface.fill(BOARD_BACKGROUND_COLOR);
        self.food.render(surface);
        self.snake.render(surface);
        surface.present()
    }
}
