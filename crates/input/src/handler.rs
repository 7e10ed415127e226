//! Held-key repeat handler for terminal environments.
//!
//! Holding a direction keeps the player moving after a short delay. Supports
//! terminals that do not emit key release events by using a timeout.

use crossterm::event::{KeyCode, KeyEvent};

use arrayvec::ArrayVec;

use crate::map::handle_key_event;
use crate::types::{
    Direction, GameAction, DEFAULT_REPEAT_DELAY_MS, DEFAULT_REPEAT_INTERVAL_MS,
};

// In terminals without key-release events, a short timeout prevents a single
// tap from turning into a sustained "held" state that triggers repeats.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks the held movement direction and produces repeat actions.
#[derive(Debug, Clone)]
pub struct InputHandler {
    held: Option<Direction>,
    last_key_time: std::time::Instant,
    delay_timer: u32,
    repeat_accumulator: u32,
    repeat_delay: u32,
    repeat_interval: u32,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_config(DEFAULT_REPEAT_DELAY_MS, DEFAULT_REPEAT_INTERVAL_MS)
    }

    pub fn with_config(repeat_delay: u32, repeat_interval: u32) -> Self {
        Self {
            held: None,
            last_key_time: std::time::Instant::now(),
            delay_timer: 0,
            repeat_accumulator: 0,
            repeat_delay,
            repeat_interval: repeat_interval.max(1),
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    pub fn key_release_timeout_ms(&self) -> u32 {
        self.key_release_timeout_ms
    }

    /// Handle a key press, returning the immediate action if any.
    ///
    /// Movement keys start (or redirect) the held state; pressing the key of
    /// the already-held direction returns nothing, its repeats come from
    /// [`InputHandler::update`].
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        let dir = match handle_key_event(KeyEvent::from(code)) {
            Some(GameAction::Move(dir)) => dir,
            _ => return None,
        };

        self.last_key_time = std::time::Instant::now();
        if self.held == Some(dir) {
            return None;
        }

        self.held = Some(dir);
        self.delay_timer = 0;
        self.repeat_accumulator = 0;
        Some(GameAction::Move(dir))
    }

    /// Handle a key release event (when the terminal provides them).
    pub fn handle_key_release(&mut self, code: KeyCode) {
        let dir = match handle_key_event(KeyEvent::from(code)) {
            Some(GameAction::Move(dir)) => dir,
            _ => return,
        };

        if self.held == Some(dir) {
            self.clear_held();
        }
    }

    /// Advance the repeat timers and collect pending repeat actions.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 8> {
        let mut actions = ArrayVec::new();

        // Auto-release when terminal does not emit release events.
        let time_since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if time_since_last_key > self.key_release_timeout_ms {
            self.clear_held();
        }

        let Some(dir) = self.held else {
            return actions;
        };

        let prev_delay = self.delay_timer;
        self.delay_timer += elapsed_ms;

        if self.delay_timer >= self.repeat_delay {
            let excess = if prev_delay < self.repeat_delay {
                self.delay_timer - self.repeat_delay
            } else {
                elapsed_ms
            };
            self.repeat_accumulator += excess;

            while self.repeat_accumulator >= self.repeat_interval {
                let _ = actions.try_push(GameAction::Move(dir));
                self.repeat_accumulator -= self.repeat_interval;
            }
        }

        actions
    }

    pub fn reset(&mut self) {
        self.clear_held();
        self.last_key_time = std::time::Instant::now();
    }

    fn clear_held(&mut self) {
        self.held = None;
        self.delay_timer = 0;
        self.repeat_accumulator = 0;
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
