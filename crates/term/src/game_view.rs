//! GameView: maps `core::GameState` into a terminal framebuffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::GameState;
use crate::fb::{FrameBuffer, Rgb, Style};
use crate::types::GRID_SIZE;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

pub const PLAYER_GLYPH: char = '@';
pub const OPPONENT_GLYPH: char = 'Ø';
pub const ITEM_GLYPH: char = '◆';

/// A lightweight terminal renderer for the chase game.
pub struct GameView {
    /// Grid cell width in terminal columns.
    cell_w: u16,
    /// Grid cell height in terminal rows.
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        Self {
            cell_w: 2,
            cell_h: 1,
        }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render the current game state into an existing framebuffer.
    ///
    /// Callers can reuse a framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(&self, state: &GameState, viewport: Viewport, fb: &mut FrameBuffer) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(Style::default());

        let grid_px_w = (GRID_SIZE as u16) * self.cell_w;
        let grid_px_h = (GRID_SIZE as u16) * self.cell_h;
        let frame_w = grid_px_w + 2;
        let frame_h = grid_px_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let field = Style::new(Rgb::new(80, 80, 90), Rgb::new(30, 30, 40));
        let border = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        // Field background with grid dots.
        fb.fill_rect(start_x + 1, start_y + 1, grid_px_w, grid_px_h, ' ', field);
        for gy in 0..GRID_SIZE as u16 {
            for gx in 0..GRID_SIZE as u16 {
                self.fill_cell(fb, start_x, start_y, gx, gy, '·', field);
            }
        }

        self.draw_border(fb, start_x, start_y, frame_w, frame_h, border);

        // Items under tokens: draw first so tokens overwrite shared cells.
        let item_style = Style::new(Rgb::new(240, 220, 80), Rgb::new(30, 30, 40)).bold();
        for item in state.items() {
            self.fill_cell(
                fb,
                start_x,
                start_y,
                item.x as u16,
                item.y as u16,
                ITEM_GLYPH,
                item_style,
            );
        }

        let opponent_style = Style::new(Rgb::new(220, 80, 80), Rgb::new(30, 30, 40)).bold();
        for opp in state.opponents() {
            self.fill_cell(
                fb,
                start_x,
                start_y,
                opp.x as u16,
                opp.y as u16,
                OPPONENT_GLYPH,
                opponent_style,
            );
        }

        let player_style = Style::new(Rgb::new(80, 120, 220), Rgb::new(30, 30, 40)).bold();
        let player = state.player();
        self.fill_cell(
            fb,
            start_x,
            start_y,
            player.x as u16,
            player.y as u16,
            PLAYER_GLYPH,
            player_style,
        );

        self.draw_side_panel(fb, state, viewport, start_x, start_y, frame_w);

        if state.game_over() {
            self.draw_game_over(fb, state, start_x, start_y, frame_w, frame_h);
        }
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, state: &GameState, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(state, viewport, &mut fb);
        fb
    }

    fn fill_cell(
        &self,
        fb: &mut FrameBuffer,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        ch: char,
        style: Style,
    ) {
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        // One glyph per cell, padding with field background on wide cells.
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ' ', style);
        fb.put(px, py, ch, style);
    }

    fn draw_border(&self, fb: &mut FrameBuffer, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

        fb.put(x, y, '┌', style);
        fb.put(x + w - 1, y, '┐', style);
        fb.put(x, y + h - 1, '└', style);
        fb.put(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            fb.put(x + dx, y, '─', style);
            fb.put(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            fb.put(x, y + dy, '│', style);
            fb.put(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_side_panel(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width {
            return;
        }
        if viewport.width - panel_x < 12 {
            return;
        }

        let label = Style::new(Rgb::new(220, 220, 220), Rgb::new(0, 0, 0)).bold();
        let value = Style::new(Rgb::new(200, 200, 200), Rgb::new(0, 0, 0));

        let mut y = start_y;
        fb.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &state.score().to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "SPEED", label);
        y = y.saturating_add(1);
        let speed = format!("{}ms", state.opponent_interval_ms());
        fb.put_str(panel_x, y, &speed, value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "FOES", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &state.opponents().len().to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "ITEMS", label);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, &state.items().len().to_string(), value);
        y = y.saturating_add(2);

        fb.put_str(panel_x, y, "MOVE  arrows/wasd", value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "R     restart", value);
        y = y.saturating_add(1);
        fb.put_str(panel_x, y, "Q     quit", value);
    }

    fn draw_game_over(
        &self,
        fb: &mut FrameBuffer,
        state: &GameState,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
    ) {
        let style = Style::new(Rgb::new(255, 255, 255), Rgb::new(0, 0, 0)).bold();
        let mid_y = start_y.saturating_add(frame_h / 2);

        let title = "GAME OVER";
        let score_line = format!("FINAL SCORE {}", state.score());
        let hint = "R TO RESTART";

        for (i, text) in [title, score_line.as_str(), hint].iter().enumerate() {
            let text_w = text.chars().count() as u16;
            let x = start_x.saturating_add(frame_w.saturating_sub(text_w) / 2);
            let y = mid_y.saturating_sub(1).saturating_add(i as u16);
            fb.put_str(x, y, text, style);
        }
    }
}
