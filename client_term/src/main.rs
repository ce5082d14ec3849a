//! Terminal Pong client
//!
//! Usage:
//!   cargo run --release -p client_term
//!   cargo run --release -p client_term -- --ticks 10000   (headless)
//!
//! W/S or the arrow keys move the left paddle. Esc quits.

mod audio;
mod canvas;
mod input;

use anyhow::{ensure, Context, Result};
use audio::Bell;
use canvas::Canvas;
use clap::Parser;
use crossterm::{
    cursor,
    event::{KeyboardEnhancementFlags, PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags},
    execute, terminal,
};
use game_core::{Config, Flow, IdleInput, Params, RecordingSurface, Session, SilentAudio};
use glam::Vec2;
use input::TermInput;
use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;
use std::sync::Mutex;
use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "pong")]
#[command(about = "Play Pong against a ball-tracking paddle in the terminal")]
struct Args {
    /// Simulation ticks per second
    #[arg(long, default_value_t = Params::TICKS_PER_SECOND)]
    fps: u32,

    /// Seed for serve directions (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Do not ring the terminal bell
    #[arg(long)]
    mute: bool,

    /// Write logs here (filtered by RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    /// Run this many ticks headless with no input, then print the score
    #[arg(long)]
    ticks: Option<u64>,
}

fn main() -> Result<()> {
    let args = Args::parse();
    ensure!(args.fps > 0, "--fps must be at least 1");

    init_logging(&args)?;

    let seed = args.seed.unwrap_or_else(clock_seed);
    let session = Session::new(Config::new(), seed).context("invalid game configuration")?;
    tracing::info!(seed, fps = args.fps, "session started");

    match args.ticks {
        Some(ticks) => run_headless(session, ticks),
        None => run_terminal(session, &args),
    }
}

fn init_logging(args: &Args) -> Result<()> {
    let filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    if let Some(path) = &args.log_file {
        let file = File::create(path)
            .with_context(|| format!("failed to create log file {}", path.display()))?;
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .init();
    } else if args.ticks.is_some() {
        // No screen to corrupt in headless mode
        tracing_subscriber::fmt()
            .with_env_filter(filter())
            .with_writer(io::stderr)
            .init();
    }
    Ok(())
}

fn clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0)
}

fn run_headless(mut session: Session, ticks: u64) -> Result<()> {
    let mut surface = RecordingSurface::new();
    for _ in 0..ticks {
        surface.commands.clear();
        session.frame(&mut IdleInput, &mut surface, &mut SilentAudio);
    }

    let state = session.engine.state;
    println!("ticks:  {}", session.frames());
    println!("player: {}", state.player_score);
    println!("ai:     {}", state.ai_score);
    match state.winner() {
        Some(winner) => println!("winner: {winner}"),
        None => println!("winner: -"),
    }
    Ok(())
}

/// Raw mode and alternate screen for the life of the value
struct TerminalGuard {
    enhanced: bool,
}

impl TerminalGuard {
    fn enter(out: &mut impl Write) -> Result<Self> {
        terminal::enable_raw_mode().context("failed to enable raw mode")?;
        execute!(out, terminal::EnterAlternateScreen, cursor::Hide)?;

        let enhanced = terminal::supports_keyboard_enhancement().unwrap_or(false);
        if enhanced {
            execute!(
                out,
                PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
            )?;
        }
        Ok(Self { enhanced })
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let mut out = io::stdout();
        if self.enhanced {
            let _ = execute!(out, PopKeyboardEnhancementFlags);
        }
        let _ = execute!(out, cursor::Show, terminal::LeaveAlternateScreen);
        let _ = terminal::disable_raw_mode();
    }
}

fn run_terminal(mut session: Session, args: &Args) -> Result<()> {
    let mut out = io::stdout();
    let guard = TerminalGuard::enter(&mut out)?;

    let playfield = Vec2::new(
        session.engine.config.playfield_width,
        session.engine.config.playfield_height,
    );
    let (cols, rows) = terminal::size().context("failed to read terminal size")?;
    let mut canvas = Canvas::new(cols, rows, playfield);
    let mut input = TermInput::new(guard.enhanced);
    let mut audio = Bell::new(io::stdout(), args.mute);

    let tick = Duration::from_secs(1) / args.fps;
    let mut next_frame = Instant::now();

    loop {
        input.poll().context("failed to read terminal input")?;
        if let Some((cols, rows)) = input.take_resize() {
            canvas.resize(cols, rows, playfield);
        }

        if session.frame(&mut input, &mut canvas, &mut audio) == Flow::Quit {
            break;
        }
        canvas.present(&mut out).context("failed to draw frame")?;

        next_frame += tick;
        let now = Instant::now();
        if next_frame > now {
            std::thread::sleep(next_frame - now);
        } else {
            // Fell behind, do not try to catch up
            next_frame = now;
        }
    }

    drop(guard);
    let state = session.engine.state;
    println!(
        "Final score: player {} - {} AI",
        state.player_score, state.ai_score
    );
    Ok(())
}
