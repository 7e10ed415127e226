//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Grid Dimensions
//!
//! The play field is a fixed square grid:
//!
//! - **Size**: 10×10 cells (each axis indexed 0-9)
//! - **Player spawn**: (0, 0), the top-left corner
//!
//! # Game Timing Constants
//!
//! Timing values are in milliseconds:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MS` | 16 | Fixed timestep interval (~60 FPS) |
//! | `OPPONENT_INTERVAL_MS` | 1000 | Base opponent move interval |
//! | `OPPONENT_INTERVAL_FLOOR_MS` | 200 | Minimum opponent move interval |
//! | `ITEM_SPAWN_INTERVAL_MS` | 5000 | Item spawn period (fixed) |
//!
//! # Tuning Constants
//!
//! - `INITIAL_OPPONENTS`: 3 opponents at uniformly random cells on reset
//! - `MAX_OPPONENTS`: hard cap of 5 opponents
//! - `ITEM_SCORE`: 10 points per collected item
//! - `SPEEDUP_THRESHOLD`: every 50 points the opponent interval shrinks
//! - `SPEEDUP_NUMERATOR` / `SPEEDUP_DENOMINATOR`: 9/10 interval scaling
//!   (the 0.9 speedup factor in integer milliseconds)
//!
//! # Examples
//!
//! ```
//! use tui_chase_types::{Direction, GameAction, Position, GRID_SIZE};
//!
//! // Clamped movement stays on the grid
//! let origin = Position::new(0, 0);
//! assert_eq!(origin.clamped_add(-1, 0), origin);
//! assert_eq!(origin.clamped_add(1, 1), Position::new(1, 1));
//!
//! // Parse a game action (case-insensitive)
//! let action = GameAction::from_str("moveUp").unwrap();
//! assert_eq!(action, GameAction::Move(Direction::Up));
//!
//! assert_eq!(GRID_SIZE, 10);
//! ```

/// Grid side length in cells (10×10 play field)
pub const GRID_SIZE: i8 = 10;

/// Fixed timestep interval in milliseconds (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Number of opponents placed on reset
pub const INITIAL_OPPONENTS: usize = 3;

/// Maximum number of opponents on the grid
pub const MAX_OPPONENTS: usize = 5;

/// Base opponent move interval (1000ms) (survival-game parity).
pub const OPPONENT_INTERVAL_MS: u32 = 1000;

/// Minimum opponent move interval (200ms) (survival-game parity).
pub const OPPONENT_INTERVAL_FLOOR_MS: u32 = 200;

/// Item spawn period (5000ms), independent of difficulty.
pub const ITEM_SPAWN_INTERVAL_MS: u32 = 5000;

/// Points awarded per collected item
pub const ITEM_SCORE: u32 = 10;

/// Score threshold for a difficulty step (every 50 points)
pub const SPEEDUP_THRESHOLD: u32 = 50;

/// Speedup factor numerator (9/10 = 0.9x interval per step)
pub const SPEEDUP_NUMERATOR: u32 = 9;

/// Speedup factor denominator
pub const SPEEDUP_DENOMINATOR: u32 = 10;

/// Held-key repeat delay in milliseconds (time before auto-repeat starts)
pub const DEFAULT_REPEAT_DELAY_MS: u32 = 200;

/// Held-key repeat interval in milliseconds
pub const DEFAULT_REPEAT_INTERVAL_MS: u32 = 120;


/// A cell coordinate on the grid
///
/// Both axes are always within `[0, GRID_SIZE - 1]`; construction and movement
/// clamp out-of-range values rather than rejecting them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    pub x: i8,
    pub y: i8,
}

impl Position {
    /// Create a position, clamping both axes onto the grid
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_chase_types::Position;
    ///
    /// assert_eq!(Position::new(3, 4), Position { x: 3, y: 4 });
    /// assert_eq!(Position::new(-2, 99), Position { x: 0, y: 9 });
    /// ```
    pub fn new(x: i8, y: i8) -> Self {
        Self {
            x: x.clamp(0, GRID_SIZE - 1),
            y: y.clamp(0, GRID_SIZE - 1),
        }
    }

    /// Add a delta to each axis, clamping independently to grid bounds
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_chase_types::Position;
    ///
    /// let p = Position::new(9, 0);
    /// assert_eq!(p.clamped_add(1, 0), Position::new(9, 0));
    /// assert_eq!(p.clamped_add(-1, 1), Position::new(8, 1));
    /// ```
    pub fn clamped_add(self, dx: i8, dy: i8) -> Self {
        Self::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// The four directional player moves
///
/// The player moves exactly one cell per input; diagonal movement is not
/// available to the player (opponents, by contrast, random-walk the full
/// 8-neighborhood).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Unit delta for this direction as `(dx, dy)`
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_chase_types::Direction;
    ///
    /// assert_eq!(Direction::Up.delta(), (0, -1));
    /// assert_eq!(Direction::Right.delta(), (1, 0));
    /// ```
    pub fn delta(&self) -> (i8, i8) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// Parse direction from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" | "u" => Some(Direction::Up),
            "down" | "d" => Some(Direction::Down),
            "left" | "l" => Some(Direction::Left),
            "right" | "r" => Some(Direction::Right),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::Up => "up",
            Direction::Down => "down",
            Direction::Left => "left",
            Direction::Right => "right",
        }
    }
}

/// Game actions that can be applied to modify game state
///
/// Each action maps to a specific engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move the player one cell in the given direction
    Move(Direction),
    /// Restart the game (when game over or at any time)
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    ///
    /// # Examples
    ///
    /// ```
    /// use tui_chase_types::{Direction, GameAction};
    ///
    /// assert_eq!(GameAction::from_str("moveLeft"), Some(GameAction::Move(Direction::Left)));
    /// assert_eq!(GameAction::from_str("restart"), Some(GameAction::Restart));
    /// assert_eq!(GameAction::from_str("unknown"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "moveup" => Some(GameAction::Move(Direction::Up)),
            "movedown" => Some(GameAction::Move(Direction::Down)),
            "moveleft" => Some(GameAction::Move(Direction::Left)),
            "moveright" => Some(GameAction::Move(Direction::Right)),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Move(Direction::Up) => "moveUp",
            GameAction::Move(Direction::Down) => "moveDown",
            GameAction::Move(Direction::Left) => "moveLeft",
            GameAction::Move(Direction::Right) => "moveRight",
            GameAction::Restart => "restart",
        }
    }
}

/// Fire-and-forget audio cues emitted by the engine
///
/// Cues are queued by state mutations and drained by the caller; playback is
/// best-effort and never feeds back into game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    /// Player moved (emitted on every non-game-over move input)
    Move,
    /// Item collected
    Collect,
    /// Collision with an opponent ended the game
    GameOver,
}

impl SoundCue {
    /// Convert to lowercase string representation
    pub fn as_str(&self) -> &'static str {
        match self {
            SoundCue::Move => "move",
            SoundCue::Collect => "collect",
            SoundCue::GameOver => "gameover",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_position_clamps_on_construction() {
        assert_eq!(Position::new(-1, -1), Position { x: 0, y: 0 });
        assert_eq!(Position::new(10, 10), Position { x: 9, y: 9 });
        assert_eq!(Position::new(5, 5), Position { x: 5, y: 5 });
    }

    #[test]
    fn test_clamped_add_per_axis() {
        let corner = Position::new(9, 9);
        assert_eq!(corner.clamped_add(1, 1), corner);
        // One axis clamps, the other still moves.
        assert_eq!(corner.clamped_add(1, -1), Position::new(9, 8));
    }

    #[test]
    fn test_direction_deltas_are_unit_vectors() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            let (dx, dy) = dir.delta();
            assert_eq!(dx.abs() + dy.abs(), 1);
        }
    }

    #[test]
    fn test_direction_round_trip() {
        for dir in [
            Direction::Up,
            Direction::Down,
            Direction::Left,
            Direction::Right,
        ] {
            assert_eq!(Direction::from_str(dir.as_str()), Some(dir));
        }
    }

    #[test]
    fn test_action_round_trip() {
        for action in [
            GameAction::Move(Direction::Up),
            GameAction::Move(Direction::Down),
            GameAction::Move(Direction::Left),
            GameAction::Move(Direction::Right),
            GameAction::Restart,
        ] {
            assert_eq!(GameAction::from_str(action.as_str()), Some(action));
        }
    }

    #[test]
    fn test_sound_cue_names() {
        assert_eq!(SoundCue::Move.as_str(), "move");
        assert_eq!(SoundCue::Collect.as_str(), "collect");
        assert_eq!(SoundCue::GameOver.as_str(), "gameover");
    }
}
