//! Terminal chase game runner (default binary).
//!
//! This is the primary gameplay entrypoint. It uses crossterm for input and a
//! framebuffer-based renderer, driving the engine from a fixed-timestep loop.

use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};

use tui_chase::audio::{AudioSink, TerminalBell};
use tui_chase::core::GameState;
use tui_chase::input::{should_quit, InputHandler};
use tui_chase::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};
use tui_chase::types::{GameAction, TICK_MS};

fn main() -> Result<()> {
    let seed = seed_from_clock();
    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, seed);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn seed_from_clock() -> u32 {
    std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}

fn run(term: &mut TerminalRenderer, seed: u32) -> Result<()> {
    let mut game_state = GameState::new(seed);

    let view = GameView::default();
    let mut input_handler = InputHandler::new();
    let mut bell = TerminalBell::new();
    let mut fb = FrameBuffer::new(0, 0);

    let mut last_tick = Instant::now();
    let tick_duration = Duration::from_millis(TICK_MS as u64);

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        view.render_into(&game_state, Viewport::new(w, h), &mut fb);
        term.draw(&fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }

                        if let Some(action) = input_handler.handle_key_press(key.code) {
                            game_state.apply_action(action);
                        } else if let Some(GameAction::Restart) =
                            tui_chase::input::handle_key_event(key)
                        {
                            input_handler.reset();
                            game_state.apply_action(GameAction::Restart);
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Ignore terminal auto-repeat; the input handler
                        // produces repeats internally.
                    }
                    KeyEventKind::Release => {
                        input_handler.handle_key_release(key.code);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in input_handler.update(TICK_MS) {
                game_state.apply_action(action);
            }

            game_state.tick(TICK_MS);
        }

        // Best-effort audio; failures never reach game state.
        for cue in game_state.take_cues() {
            bell.play(cue);
        }
    }
}
