use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::geometry::Direction;

/// The four steering keys, in the order they win when several are pressed
/// during the same frame.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DirectionKey {
    Up,
    Down,
    Left,
    Right,
}

impl DirectionKey {
    /// Resolution order for simultaneous presses.
    pub const PRIORITY: [Self; 4] = [Self::Up, Self::Down, Self::Left, Self::Right];

    /// Returns the unit heading this key requests.
    #[must_use]
    pub fn direction(self) -> Direction {
        match self {
            Self::Up => Direction::UP,
            Self::Down => Direction::DOWN,
            Self::Left => Direction::LEFT,
            Self::Right => Direction::RIGHT,
        }
    }

    fn slot(self) -> usize {
        match self {
            Self::Up => 0,
            Self::Down => 1,
            Self::Left => 2,
            Self::Right => 3,
        }
    }
}

/// Meaning of a single key press.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum KeyIntent {
    Steer(DirectionKey),
    Quit,
}

/// Everything sampled from the terminal during one frame.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq)]
pub struct FrameInput {
    pub quit: bool,
    /// At most one heading per frame, chosen by [`DirectionKey::PRIORITY`].
    pub direction: Option<Direction>,
}

impl FrameInput {
    /// Folds every intent seen this frame into a single frame sample.
    #[must_use]
    pub fn from_intents(intents: impl IntoIterator<Item = KeyIntent>) -> Self {
        let mut pressed = [false; 4];
        let mut quit = false;

        for intent in intents {
            match intent {
                KeyIntent::Quit => quit = true,
                KeyIntent::Steer(key) => pressed[key.slot()] = true,
            }
        }

        let direction = DirectionKey::PRIORITY
            .into_iter()
            .find(|key| pressed[key.slot()])
            .map(DirectionKey::direction);

        Self { quit, direction }
    }
}

/// Maps one key event to its intent. Releases and unbound keys map to `None`.
#[must_use]
pub fn map_key(key: KeyEvent) -> Option<KeyIntent> {
    if key.kind == KeyEventKind::Release {
        return None;
    }

    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Some(KeyIntent::Quit);
    }

    match key.code {
        KeyCode::Esc | KeyCode::Char('q' | 'Q') => Some(KeyIntent::Quit),
        KeyCode::Up | KeyCode::Char('w' | 'W') => Some(KeyIntent::Steer(DirectionKey::Up)),
        KeyCode::Down | KeyCode::Char('s' | 'S') => Some(KeyIntent::Steer(DirectionKey::Down)),
        KeyCode::Left | KeyCode::Char('a' | 'A') => Some(KeyIntent::Steer(DirectionKey::Left)),
        KeyCode::Right | KeyCode::Char('d' | 'D') => {
            Some(KeyIntent::Steer(DirectionKey::Right))
        }
        _ => None,
    }
}

/// Drains pending terminal events without blocking.
#[derive(Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    /// Collects every key event queued since the previous call.
    pub fn poll_frame(&mut self) -> io::Result<FrameInput> {
        let mut intents = Vec::new();

        while event::poll(Duration::ZERO)? {
            if let Event::Key(key) = event::read()? {
                intents.extend(map_key(key));
            }
        }

        Ok(FrameInput::from_intents(intents))
    }
}
