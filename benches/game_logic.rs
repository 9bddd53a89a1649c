use criterion::{black_box, criterion_group, criterion_main, Criterion};
use tui_2048::core::{GameState, Session, TileGame};
use tui_2048::term::{GameView, Viewport};
use tui_2048::types::{Direction, KEY_LEFT};

fn bench_moves(c: &mut Criterion) {
    for dir in Direction::ALL {
        c.bench_function(&format!("move_{}", dir.as_str()), |b| {
            b.iter(|| {
                let mut state = GameState::new();
                state.shift(black_box(dir), true);
                state
            })
        });
    }
}

fn bench_check_game_over(c: &mut Criterion) {
    let mut state =
        GameState::from_cells(4, 4, vec![2, 4, 2, 4, 4, 2, 4, 2, 2, 4, 2, 4, 4, 2, 4, 2])
            .unwrap();

    c.bench_function("check_game_over_locked", |b| {
        b.iter(|| black_box(state.check_game_over()))
    });
}

fn bench_render_text(c: &mut Criterion) {
    let state = GameState::new();

    c.bench_function("render_text", |b| b.iter(|| black_box(state.render())));
}

fn bench_view_frame(c: &mut Criterion) {
    let mut session = Session::new(GameState::new());
    session.handle_key_code(KEY_LEFT);
    let view = GameView::default();

    c.bench_function("view_80x24", |b| {
        b.iter(|| view.render(&session, black_box(Viewport::new(80, 24))))
    });
}

criterion_group!(
    benches,
    bench_moves,
    bench_check_game_over,
    bench_render_text,
    bench_view_frame
);
criterion_main!(benches);
