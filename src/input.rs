use std::time::Duration;

use anyhow::{Context, Result};
use crossterm::event::{poll, read, Event, KeyCode, KeyEvent, KeyModifiers};

use crate::snake::Direction;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    Quit,
    Turn(Direction),
}

pub trait InputSource {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>>;
}

pub struct KeyboardInput;

impl KeyboardInput {
    pub fn new() -> Self {
        KeyboardInput
    }

    pub fn map_key(key: &KeyEvent) -> Option<InputEvent> {
        if is_ctrl_c(key) {
            return Some(InputEvent::Quit);
        }

        match key.code {
            KeyCode::Up | KeyCode::Char('w') | KeyCode::Char('W') => Some(InputEvent::Turn(Direction::Up)),
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') => Some(InputEvent::Turn(Direction::Down)),
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') => Some(InputEvent::Turn(Direction::Left)),
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') => Some(InputEvent::Turn(Direction::Right)),
            KeyCode::Esc | KeyCode::Char('q') | KeyCode::Char('Q') => Some(InputEvent::Quit),
            _ => None,
        }
    }
}

impl Default for KeyboardInput {
    fn default() -> Self {
        Self::new()
    }
}

impl InputSource for KeyboardInput {
    fn poll_events(&mut self) -> Result<Vec<InputEvent>> {
        let mut events = vec![];

        while poll(Duration::from_millis(0)).context("Error polling for input")? {
            if let Event::Key(key) = read().context("Error reading input")? {
                if let Some(event) = Self::map_key(&key) {
                    events.push(event);
                }
            }
        }

        Ok(events)
    }
}

fn is_ctrl_c(key: &KeyEvent) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL) && matches!(key.code, KeyCode::Char('c') | KeyCode::Char('C'))
}
