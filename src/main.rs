//! Terminal blockfall runner (default binary).
//!
//! One loop interleaves input polling, gravity ticks, and rendering. Input
//! uses the time left until the next tick as its poll deadline, so keys stay
//! responsive between one-second gravity steps.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{ensure, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::core::{GameSession, SessionConfig};
use blockfall::input::{map_key_event, should_quit};
use blockfall::term::{GameView, Screen, Viewport};
use blockfall::types::{GameAction, DEFAULT_GRID_COLS, DEFAULT_GRID_ROWS, DEFAULT_TICK_MS};

#[derive(Debug, Parser)]
#[command(name = "blockfall", about = "Terminal falling-block puzzle game", version)]
struct Args {
    /// Playfield width in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_COLS)]
    cols: usize,

    /// Playfield height in cells.
    #[arg(long, default_value_t = DEFAULT_GRID_ROWS)]
    rows: usize,

    /// Gravity tick period in milliseconds.
    #[arg(long, default_value_t = DEFAULT_TICK_MS)]
    tick_ms: u64,

    /// RNG seed; derived from the clock when omitted.
    #[arg(long)]
    seed: Option<u32>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    ensure!(args.cols >= 4, "--cols must be at least 4 (the widest piece)");
    ensure!(args.rows >= 4, "--rows must be at least 4");
    ensure!(args.tick_ms > 0, "--tick-ms must be positive");

    let mut screen = Screen::new();
    screen.enter()?;

    let result = run(&mut screen, &args);

    // Always try to hand the terminal back.
    let _ = screen.restore();
    result
}

fn run(screen: &mut Screen, args: &Args) -> Result<()> {
    let seed = args.seed.unwrap_or_else(clock_seed);
    let mut session = GameSession::new(SessionConfig {
        rows: args.rows,
        cols: args.cols,
        seed,
    });
    session.start();

    let view = GameView::default();
    let tick_duration = Duration::from_millis(args.tick_ms);
    let mut last_tick = Instant::now();

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        let fb = view.render(&session, Viewport::new(w, h));
        screen.present(&fb)?;

        // Input with timeout until the next gravity tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                if key.kind == KeyEventKind::Press {
                    if should_quit(key) {
                        return Ok(());
                    }
                    if let Some(action) = map_key_event(key) {
                        if action == GameAction::Restart {
                            // The restarted session must not inherit a
                            // half-elapsed tick.
                            last_tick = Instant::now();
                        }
                        session.apply_action(action);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            session.step();
        }
    }
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
