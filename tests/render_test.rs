//! Smoke tests for the terminal rendering pipeline (facade API).

use tui_chase::core::GameState;
use tui_chase::term::{encode_frame_into, FrameBuffer, GameView, Viewport};

#[test]
fn test_render_and_encode_full_pipeline() {
    let state = GameState::new(12345);
    let view = GameView::default();

    let fb = view.render(&state, Viewport::new(80, 24));
    assert_eq!((fb.width(), fb.height()), (80, 24));

    let mut out = Vec::new();
    encode_frame_into(&fb, &mut out).unwrap();
    assert!(!out.is_empty());
}

#[test]
fn test_render_into_reuses_framebuffer_across_resizes() {
    let state = GameState::new(7);
    let view = GameView::default();
    let mut fb = FrameBuffer::new(0, 0);

    view.render_into(&state, Viewport::new(80, 24), &mut fb);
    assert_eq!((fb.width(), fb.height()), (80, 24));

    view.render_into(&state, Viewport::new(40, 12), &mut fb);
    assert_eq!((fb.width(), fb.height()), (40, 12));
}

#[test]
fn test_score_is_visible_on_screen() {
    let state = GameState::new(99);
    let fb = GameView::default().render(&state, Viewport::new(80, 24));

    let all_text: String = (0..fb.height())
        .map(|y| fb.row_text(y))
        .collect::<Vec<_>>()
        .join("\n");
    assert!(all_text.contains("SCORE"));
}
