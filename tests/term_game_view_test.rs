use tui_2048::core::{GameState, Session};
use tui_2048::term::{AnchorY, GameView, Viewport};
use tui_2048::types::{status_line, KEY_LEFT};

fn checkerboard() -> GameState {
    GameState::from_cells(4, 4, vec![2, 4, 2, 4, 4, 2, 4, 2, 2, 4, 2, 4, 4, 2, 4, 2]).unwrap()
}

fn screen_text(fb: &tui_2048::term::FrameBuffer) -> String {
    let mut all = String::new();
    for y in 0..fb.height() {
        all.push_str(&fb.row_text(y));
        all.push('\n');
    }
    all
}

#[test]
fn term_view_draws_status_line_with_tabs_expanded() {
    let session = Session::new(GameState::new());
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&session, Viewport::new(61, 10));

    // "moves: 0" then four tabs land the hint on column 40.
    assert_eq!(fb.row_text(0), format!("moves: 0{}Press ↑ ← ↓ → to play", " ".repeat(32)));
    assert!(status_line(0).contains('\t'));
}

#[test]
fn term_view_frames_the_board_text() {
    let session = Session::new(GameState::new());
    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&session, Viewport::new(61, 10));

    // 32 columns of board text + padding + border => 36 wide.
    assert_eq!(fb.get(0, 2).unwrap().ch, '┌');
    assert_eq!(fb.get(35, 2).unwrap().ch, '┐');
    assert_eq!(fb.get(0, 7).unwrap().ch, '└');
    assert_eq!(fb.get(35, 7).unwrap().ch, '┘');

    assert_eq!(fb.row_text(3), "│        2      []      []       2 │");
    assert_eq!(fb.row_text(4), "│       []      []       2      [] │");
}

#[test]
fn term_view_centers_layout_by_default() {
    let session = Session::new(GameState::new());
    let view = GameView::default();

    // Layout is 61x8: status, gap, 6-row frame.
    let fb = view.render(&session, Viewport::new(81, 20));
    assert_eq!(fb.get(10, 8).unwrap().ch, '┌');
    assert_eq!(fb.get(10, 6).unwrap().ch, 'm');
}

#[test]
fn term_view_shows_game_over_banner_in_bold() {
    let mut session = Session::new(checkerboard());
    session.handle_key_code(KEY_LEFT);
    assert!(session.is_game_over());

    let view = GameView::default().with_anchor_y(AnchorY::Top);
    let fb = view.render(&session, Viewport::new(61, 12));

    // Banner is the first line inside the frame, two tab stops in.
    let cell = fb.get(18, 3).unwrap();
    assert_eq!(cell.ch, 'G');
    assert!(cell.style.bold);
    assert!(screen_text(&fb).contains("GAME OVER"));
    assert_eq!(fb.get(0, 8).unwrap().ch, '└');
}

#[test]
fn term_view_survives_tiny_viewports() {
    let session = Session::new(GameState::new());
    let fb = GameView::default().render(&session, Viewport::new(5, 2));
    assert_eq!(fb.width(), 5);
    assert_eq!(fb.height(), 2);
}
