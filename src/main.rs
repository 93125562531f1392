mod display;

use std::fs::File;
use std::io::{stdout, BufWriter, Write};
use std::path::{Path, PathBuf};
use std::sync::{mpsc, Mutex};
use std::thread;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    cursor,
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    terminal, ExecutableCommand,
};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;

use fighter_game::clock::{Clock, FrameLimiter, MonotonicClock};
use fighter_game::game::Game;
use fighter_game::input::KeyTracker;
use fighter_game::settings::Settings;

/// Redraw every Nth tick; the simulation runs faster than the terminal
/// needs to refresh.
const RENDER_EVERY: u64 = 4;

#[derive(Parser, Debug)]
#[command(name = "fighter_game")]
#[command(about = "Side-scrolling fighter plane shooter for the terminal")]
struct Args {
    /// Seed for spawn timing, formations and power-up drops
    #[arg(long)]
    seed: Option<u64>,

    /// Probability in [0, 1] that a destroyed enemy drops an extra life
    #[arg(long)]
    drop_chance: Option<f64>,

    /// Max bullets on screen at once
    #[arg(long)]
    bullets: Option<usize>,

    /// Lives at the start of each session
    #[arg(long)]
    lives: Option<u32>,

    /// Write tracing output to this file (filtered by RUST_LOG, default info)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Args {
    fn settings(&self) -> anyhow::Result<Settings> {
        let mut settings = Settings::default();
        if let Some(chance) = self.drop_chance {
            settings.powerup_drop_chance = chance;
        }
        if let Some(bullets) = self.bullets {
            settings.bullets_allowed = bullets;
        }
        if let Some(lives) = self.lives {
            settings.initial_lives = lives;
        }
        settings.validate().context("invalid settings")?;
        Ok(settings)
    }
}

/// The terminal belongs to the game, so logs only go to a file.
fn init_tracing(path: &Path) -> anyhow::Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create log file {}", path.display()))?;
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_ansi(false)
        .with_target(false)
        .with_writer(Mutex::new(file))
        .init();
    Ok(())
}

// ── Game loop ─────────────────────────────────────────────────────────────────

/// One fixed-rate iteration per tick: drain input, simulate, draw, wait.
/// Returns when the player asks to quit.
fn game_loop<W: Write>(
    out: &mut W,
    game: &mut Game,
    clock: &impl Clock,
    rx: &mpsc::Receiver<Event>,
    rng: &mut StdRng,
) -> std::io::Result<()> {
    let mut limiter = FrameLimiter::new(game.settings.tick_rate);
    let mut tracker = KeyTracker::new();

    loop {
        limiter.begin_tick();
        tracker.begin_frame();

        // ── Drain all pending input events (non-blocking) ─────────────────────
        while let Ok(ev) = rx.try_recv() {
            tracker.handle_event(&ev);
        }
        let input = tracker.snapshot();
        if input.quit {
            info!(score = game.state.score(), "quit requested");
            return Ok(());
        }

        game.tick(&input, clock.now_ms(), rng);

        if tracker.frame() % RENDER_EVERY == 0 {
            let button = display::render(out, game)?;
            tracker.set_restart_button(button);
        }

        limiter.wait();
    }
}

// ── Entry point ───────────────────────────────────────────────────────────────

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let settings = args.settings()?;
    if let Some(path) = &args.log_file {
        init_tracing(path)?;
    }

    let seed = args.seed.unwrap_or_else(rand::random);
    let mut rng = StdRng::seed_from_u64(seed);
    info!(seed, "starting session");

    let raw_out = stdout();
    let mut out = BufWriter::new(raw_out);

    terminal::enable_raw_mode().context("failed to enable raw mode")?;
    out.execute(terminal::EnterAlternateScreen)?;
    out.execute(cursor::Hide)?;
    out.execute(EnableMouseCapture)?;

    // Request key-release (and key-repeat) events from the terminal.
    // Kitty-protocol terminals support this; others fall back gracefully.
    let keyboard_enhanced = out
        .execute(PushKeyboardEnhancementFlags(
            KeyboardEnhancementFlags::REPORT_EVENT_TYPES,
        ))
        .is_ok();

    // Dedicate a thread exclusively to blocking event reads, sending them
    // through a channel so the game loop never has to block on I/O.
    let (tx, rx) = mpsc::channel::<Event>();
    thread::spawn(move || {
        while let Ok(ev) = event::read() {
            if tx.send(ev).is_err() {
                break; // receiver dropped → program exiting
            }
        }
    });

    let clock = MonotonicClock::new();
    let mut game = Game::new(settings, clock.now_ms(), &mut rng);
    let result = game_loop(&mut out, &mut game, &clock, &rx, &mut rng);

    // Always restore the terminal
    if keyboard_enhanced {
        let _ = out.execute(PopKeyboardEnhancementFlags);
    }
    let _ = out.execute(DisableMouseCapture);
    let _ = out.execute(cursor::Show);
    let _ = out.execute(terminal::LeaveAlternateScreen);
    let _ = terminal::disable_raw_mode();

    result.context("terminal I/O failed")?;
    Ok(())
}
