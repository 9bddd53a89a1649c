//! Terminal 2048 runner (default binary).
//!
//! Arrow keys move, `q`/`Esc`/`Ctrl+C` quit. Input is read with crossterm and
//! drawn through a framebuffer-based renderer.

use anyhow::Result;
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};
use log::info;

use tui_2048::config::{init_logging, Args};
use tui_2048::core::{GameState, KeyOutcome, Session};
use tui_2048::input::{map_key_event, should_quit};
use tui_2048::term::{FrameBuffer, GameView, TerminalRenderer, Viewport};

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args);
    info!("tui-2048 starting");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, GameView::default().with_anchor_y(args.anchor_y()));

    // Always try to restore terminal state.
    let _ = term.exit();
    if let Err(err) = &result {
        log::error!("run loop failed: {err:#}");
    }
    result
}

fn run(term: &mut TerminalRenderer, view: GameView) -> Result<()> {
    let mut session = Session::new(GameState::new());
    let mut fb = FrameBuffer::new(0, 0);
    let mut redraw = true;

    loop {
        if redraw {
            let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
            view.render_into(&session, Viewport::new(w, h), &mut fb);
            term.draw_swap(&mut fb)?;
            redraw = false;
        }

        match event::read()? {
            Event::Key(key) if key.kind == KeyEventKind::Press => {
                if should_quit(key) {
                    info!("quit: {}", session.summary());
                    return Ok(());
                }
                let was_over = session.is_game_over();
                let outcome = session.handle(map_key_event(key));
                if outcome == KeyOutcome::GameOver && !was_over {
                    info!("final board: {}", session.summary());
                }
                redraw = outcome.redrawn();
            }
            Event::Resize(_, _) => {
                term.invalidate();
                redraw = true;
            }
            _ => {}
        }
    }
}
