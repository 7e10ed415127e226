//! Game state module - manages the complete game state
//!
//! This module ties together the core components: player, opponents, items,
//! RNG, scoring, and the two interval timers. It handles movement, collision
//! resolution, difficulty progression, and the game lifecycle.

use arrayvec::ArrayVec;

use crate::rng::SimpleRng;
use crate::timers::IntervalTimer;
use crate::types::{
    Direction, GameAction, Position, SoundCue, INITIAL_OPPONENTS, ITEM_SCORE,
    ITEM_SPAWN_INTERVAL_MS, MAX_OPPONENTS, OPPONENT_INTERVAL_FLOOR_MS, OPPONENT_INTERVAL_MS,
    SPEEDUP_DENOMINATOR, SPEEDUP_NUMERATOR, SPEEDUP_THRESHOLD,
};

/// Capacity of the pending sound cue queue.
///
/// A single resolution can emit at most one cue per removed item plus the
/// game-over cue; anything beyond the capacity is silently dropped, which is
/// acceptable for best-effort audio.
pub const CUE_QUEUE_CAP: usize = 16;

/// Pending fire-and-forget sound cues, drained by the caller each frame.
pub type CueQueue = ArrayVec<SoundCue, CUE_QUEUE_CAP>;

/// Complete game state
///
/// Two phases: PLAYING and GAME_OVER. The transition to GAME_OVER latches on
/// collision with any opponent; only [`GameState::reset`] returns to PLAYING.
/// While game over, every other mutation is a no-op and both timers are
/// suspended.
#[derive(Debug, Clone)]
pub struct GameState {
    player: Position,
    opponents: ArrayVec<Position, MAX_OPPONENTS>,
    items: Vec<Position>,
    score: u32,
    /// Current opponent move period. Monotonically non-increasing within a
    /// game, floored at `OPPONENT_INTERVAL_FLOOR_MS`.
    opponent_interval_ms: u32,
    game_over: bool,
    /// Monotonic episode id (increments on restart).
    episode_id: u32,
    rng: SimpleRng,
    opponent_timer: IntervalTimer,
    spawn_timer: IntervalTimer,
    cues: CueQueue,
}

impl GameState {
    /// Create a new game with the given RNG seed
    pub fn new(seed: u32) -> Self {
        let mut state = Self {
            player: Position::new(0, 0),
            opponents: ArrayVec::new(),
            items: Vec::new(),
            score: 0,
            opponent_interval_ms: OPPONENT_INTERVAL_MS,
            game_over: false,
            episode_id: 0,
            rng: SimpleRng::new(seed),
            opponent_timer: IntervalTimer::new(OPPONENT_INTERVAL_MS),
            spawn_timer: IntervalTimer::new(ITEM_SPAWN_INTERVAL_MS),
            cues: CueQueue::new(),
        };
        state.place_initial_opponents();
        state
    }

    /// Reinitialize for a fresh game.
    ///
    /// Player returns to the origin, opponents are re-rolled at random cells,
    /// items and score are cleared, the opponent interval returns to its base
    /// value, and both timers are re-armed. The RNG continues its sequence so
    /// consecutive episodes differ; the episode id increments.
    pub fn reset(&mut self) {
        self.player = Position::new(0, 0);
        self.opponents.clear();
        self.place_initial_opponents();
        self.items.clear();
        self.score = 0;
        self.opponent_interval_ms = OPPONENT_INTERVAL_MS;
        self.game_over = false;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.opponent_timer = IntervalTimer::new(OPPONENT_INTERVAL_MS);
        self.spawn_timer = IntervalTimer::new(ITEM_SPAWN_INTERVAL_MS);
        self.cues.clear();
    }

    fn place_initial_opponents(&mut self) {
        for _ in 0..INITIAL_OPPONENTS {
            let cell = self.rng.cell();
            let _ = self.opponents.try_push(cell);
        }
    }

    pub fn player(&self) -> Position {
        self.player
    }

    pub fn opponents(&self) -> &[Position] {
        &self.opponents
    }

    pub fn items(&self) -> &[Position] {
        &self.items
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn opponent_interval_ms(&self) -> u32 {
        self.opponent_interval_ms
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    /// Move the player one cell, clamped to grid bounds.
    ///
    /// Emits a "move" cue and resolves collisions. No-op while game over.
    pub fn move_player(&mut self, dir: Direction) -> bool {
        if self.game_over {
            return false;
        }

        let (dx, dy) = dir.delta();
        self.player = self.player.clamped_add(dx, dy);
        self.push_cue(SoundCue::Move);
        self.resolve_collisions();
        true
    }

    /// Random-walk every opponent one step.
    ///
    /// Each opponent independently samples a delta in {-1, 0, 1} per axis and
    /// clamp-moves (8-neighborhood, staying still included). Resolves
    /// collisions afterwards. No-op while game over.
    pub fn tick_opponents(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        for opp in self.opponents.iter_mut() {
            let dx = self.rng.step();
            let dy = self.rng.step();
            *opp = opp.clamped_add(dx, dy);
        }
        self.resolve_collisions();
        true
    }

    /// Append one item at a uniformly random grid cell.
    ///
    /// Item count is unbounded; items only leave the grid by collection.
    /// An item spawned onto the player's cell is collected at the next
    /// resolution, not immediately. No-op while game over.
    pub fn spawn_item(&mut self) -> bool {
        if self.game_over {
            return false;
        }

        let cell = self.rng.cell();
        self.items.push(cell);
        true
    }

    /// Advance both repeating timers by `elapsed_ms` and run any fired jobs.
    ///
    /// Call this every frame from the fixed-timestep loop. Returns true when
    /// at least one opponent tick or item spawn ran. Suspended while game
    /// over.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.game_over {
            return false;
        }

        let mut advanced = false;
        for _ in 0..self.opponent_timer.advance(elapsed_ms) {
            advanced |= self.tick_opponents();
        }
        for _ in 0..self.spawn_timer.advance(elapsed_ms) {
            advanced |= self.spawn_item();
        }
        advanced
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(dir) => self.move_player(dir),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Take the pending sound cues, leaving the queue empty.
    pub fn take_cues(&mut self) -> CueQueue {
        std::mem::take(&mut self.cues)
    }

    fn push_cue(&mut self, cue: SoundCue) {
        // Overflow drops the cue; audio is best-effort.
        let _ = self.cues.try_push(cue);
    }

    /// Collision resolution, run after every player or opponent movement.
    ///
    /// One pass: opponent contact latches game over, then items under the
    /// player are collected, then the score threshold may step up the
    /// difficulty. All three steps run even when game over latches in this
    /// pass, matching the original game's single-update behavior.
    fn resolve_collisions(&mut self) {
        if !self.game_over && self.opponents.iter().any(|opp| *opp == self.player) {
            self.game_over = true;
            self.push_cue(SoundCue::GameOver);
        }

        let player = self.player;
        let before = self.items.len();
        self.items.retain(|item| *item != player);
        let collected = before - self.items.len();
        for _ in 0..collected {
            self.score += ITEM_SCORE;
            self.push_cue(SoundCue::Collect);
        }

        // Direct modulo test on the current score, as the original game does
        // it: refires while the score sits on a multiple, and a batch that
        // jumps past several multiples steps the difficulty only once.
        if self.score > 0 && self.score % SPEEDUP_THRESHOLD == 0 {
            let next = (self.opponent_interval_ms * SPEEDUP_NUMERATOR / SPEEDUP_DENOMINATOR)
                .max(OPPONENT_INTERVAL_FLOOR_MS);
            self.opponent_interval_ms = next;
            // Reschedule the opponent timer at the new period.
            self.opponent_timer.set_period(next);

            if self.opponents.len() < MAX_OPPONENTS {
                let cell = self.rng.cell();
                let _ = self.opponents.try_push(cell);
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
