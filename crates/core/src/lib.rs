//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains all the game rules, state management, and simulation logic.
//! It has **zero dependencies** on UI, audio, or I/O, making it:
//!
//! - **Deterministic**: Same seed produces identical games
//! - **Testable**: Comprehensive unit tests for all game rules
//! - **Portable**: Can run in any environment (terminal, GUI, headless)
//! - **Fast**: Zero-allocation hot paths for game tick processing
//!
//! # Module Structure
//!
//! - [`game_state`]: Complete game state: player, opponents, items, score,
//!   difficulty, and the game-over latch
//! - [`rng`]: Seedable LCG random source for walks and spawns
//! - [`timers`]: Repeating interval timers for the fixed-timestep loop
//!
//! # Game Rules
//!
//! - The player moves one cell per input on a 10×10 grid, clamped to bounds
//! - Opponents random-walk the 8-neighborhood on a repeating timer
//! - Items spawn on an independent fixed timer and score 10 points each
//! - Every 50 points shrinks the opponent interval by 0.9 (floor 200ms) and
//!   adds an opponent up to the cap of 5
//! - Exact coordinate overlap with any opponent latches game over; only
//!   reset resumes play
//!
//! # Example
//!
//! ```
//! use tui_chase_core::GameState;
//! use tui_chase_types::{Direction, GameAction};
//!
//! let mut game = GameState::new(12345);
//!
//! // Apply game actions
//! game.apply_action(GameAction::Move(Direction::Right));
//! game.apply_action(GameAction::Move(Direction::Down));
//!
//! // Drive the timers from a fixed-timestep loop
//! game.tick(16);
//!
//! assert!(game.player().x <= 1 && game.player().y <= 1);
//! ```
//!
//! # Timing
//!
//! The game uses a fixed timestep system:
//! - **Tick Rate**: 16ms (approximately 60 FPS)
//! - **Opponent walks**: every 1000ms at base difficulty, shrinking with score
//! - **Item spawns**: every 5000ms, independent of difficulty
//!
//! Call [`GameState::tick`](game_state::GameState::tick) every frame with elapsed time.

pub mod game_state;
pub mod rng;
pub mod timers;

pub use tui_chase_types as types;

// Re-export commonly used types for convenience
pub use game_state::{CueQueue, GameState, CUE_QUEUE_CAP};
pub use rng::SimpleRng;
pub use timers::IntervalTimer;
