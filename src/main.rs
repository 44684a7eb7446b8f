//! Terminal Game of Life runner (default binary).
//!
//! One loop iteration: render, wait for input until the next tick is due,
//! apply input to the session, then advance at most one generation.

use std::fs::File;
use std::path::Path;
use std::sync::Mutex;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use tracing::{info, warn};

use tui_life::core::Session;
use tui_life::input::{handle_key_event, handle_mouse_event, should_quit, should_save};
use tui_life::level::{Level, AUTOMATON_MAX_VALUE};
use tui_life::term::{FrameBuffer, LifeView, TerminalRenderer, Viewport};
use tui_life::LifeConfig;

fn main() -> Result<()> {
    let mut config = LifeConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    config.apply_args(&args)?;
    init_tracing(config.log_path.as_deref())?;

    let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
    let viewport = Viewport::new(w, h);
    let mut session = build_session(&config, viewport)?;
    info!(
        rows = session.grid().rows(),
        cols = session.grid().cols(),
        seed = config.seed,
        "session ready"
    );

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, &mut session, &config, viewport);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

/// Log to a file only; stderr would scribble over the alternate screen.
fn init_tracing(log_path: Option<&Path>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("cannot create log file {}", path.display()))?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_writer(Mutex::new(file))
        .try_init();
    Ok(())
}

fn build_session(config: &LifeConfig, viewport: Viewport) -> Result<Session> {
    let session_config =
        config.session_config(viewport.width as i32, viewport.sim_height() as i32);

    match &config.level_path {
        Some(path) => {
            let level = Level::load(path, AUTOMATON_MAX_VALUE)
                .with_context(|| format!("cannot load level {}", path.display()))?;
            Ok(Session::with_grid(
                level.to_grid(config.boundary()),
                session_config,
            ))
        }
        None => Ok(Session::new(session_config)),
    }
}

fn save_grid(session: &mut Session, config: &LifeConfig) {
    let path = config.effective_save_path();
    match Level::from_grid(session.grid()).save(&path) {
        Ok(()) => session.set_message(format!("saved {}", path.display())),
        Err(e) => {
            warn!(path = %path.display(), error = %e, "level save failed");
            session.set_message(format!("save failed: {}", e));
        }
    }
}

fn run(
    term: &mut TerminalRenderer,
    session: &mut Session,
    config: &LifeConfig,
    mut viewport: Viewport,
) -> Result<()> {
    let view = LifeView::default();
    let mut fb = FrameBuffer::new(viewport.width, viewport.height);

    let tick_duration = Duration::from_millis(config.tick_ms as u64);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        view.render_into(session, viewport, &mut fb);
        term.draw_swap(&mut fb)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!(generation = session.grid().generation(), "quit");
                        return Ok(());
                    }
                    if should_save(key) {
                        save_grid(session, config);
                    } else if let Some(action) = handle_key_event(key) {
                        session.apply_action(action);
                    }
                }
                Event::Mouse(mouse) => {
                    if let Some(pointer) = handle_mouse_event(mouse, viewport.sim_height()) {
                        session.handle_pointer(pointer);
                    }
                }
                Event::Resize(w, h) => {
                    viewport = Viewport::new(w, h);
                    session.resize_view(w as i32, viewport.sim_height() as i32);
                    term.invalidate();
                }
                _ => {}
            }
        }

        // Tick: at most one generation per iteration.
        let due = last_tick.elapsed() >= tick_duration;
        if due {
            last_tick = Instant::now();
        }
        if due || session.step_pending() {
            session.tick();
        }
    }
}
