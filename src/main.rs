//! Ambient code-typing animation for the terminal.
//!
//! Fills the screen with independently-animated rows of code-like text that
//! type themselves out with a trailing fade, hold, fade away, and restart
//! with a fresh snippet.  `t` flips dark/light, `space` pauses, `q` quits.

mod app;
mod config;
mod core;
mod ui;

use std::io::{self, stdout};
use std::time::{Duration, Instant};

use anyhow::Result;
use clap::{Parser, ValueEnum};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, style::Style, widgets::Paragraph, Terminal};

use crate::app::{
    event::{spawn_event_reader, AppEvent},
    handler,
    state::AppState,
};
use crate::config::AppConfig;
use crate::core::{corpus, pool::RowPool};
use crate::ui::{canvas::CodeCanvas, layout::AppLayout, theme::Theme};

/// Cursor blink half-period.  Wall-clock driven so the blink cadence is the
/// same at any frame rate.
const BLINK_HALF_PERIOD_MS: u128 = 400;

// ───────────────────────────────────────── CLI ───────────────

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ThemeArg {
    Dark,
    Light,
}

#[derive(Parser, Debug)]
#[command(name = env!("CARGO_PKG_NAME"), about = "Ambient code-typing terminal animation")]
struct Cli {
    /// Colour theme for this run (overrides the saved preference).
    #[arg(long, value_enum)]
    theme: Option<ThemeArg>,

    /// Seed for the animation's randomness (default: from entropy).
    #[arg(long)]
    seed: Option<u64>,

    /// Terminal rows between animated lines.
    #[arg(long)]
    spacing: Option<u16>,

    /// Frame interval in milliseconds.
    #[arg(long)]
    frame_ms: Option<u64>,

    /// Start without the bottom hint bar.
    #[arg(long)]
    no_status: bool,
}

// ───────────────────────────────────────── main ─────────────

#[tokio::main]
async fn main() -> Result<()> {
    // Initialise tracing (only in debug builds / when RUST_LOG is set).
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr) // the animation owns stdout
        .init();

    let cli = Cli::parse();

    // ── configuration ─────────────────────────────────────────
    let mut user_config = AppConfig::load();
    if let Some(spacing) = cli.spacing {
        user_config.row_spacing = spacing.clamp(1, 16);
    }
    if let Some(frame_ms) = cli.frame_ms {
        user_config.frame_ms = frame_ms.clamp(10, 160);
    }
    let dark_theme = match cli.theme {
        Some(ThemeArg::Dark) => true,
        Some(ThemeArg::Light) => false,
        None => user_config.dark_theme,
    };

    // ── build the row pool ────────────────────────────────────
    let rng = match cli.seed {
        Some(seed) => fastrand::Rng::with_seed(seed),
        None => fastrand::Rng::new(),
    };
    // A failed size query behaves like a zero-sized surface: the pool comes
    // up empty and the loop idles until a resize arrives.
    let (width, height) = crossterm::terminal::size().unwrap_or((0, 0));
    let pool = RowPool::new(width, height, user_config.row_spacing, rng, corpus::SNIPPETS)?;

    let frame_ms = user_config.frame_ms;
    let mut state = AppState::new(pool, user_config, dark_theme);
    state.show_status = !cli.no_status;

    // ── terminal setup ────────────────────────────────────────
    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout());
    let mut terminal = Terminal::new(backend)?;
    terminal.hide_cursor()?;

    // ── event loop ────────────────────────────────────────────
    let mut events = spawn_event_reader(Duration::from_millis(frame_ms));
    let blink_clock = Instant::now();

    loop {
        // Draw first: the frame reflects the state as of the last fully
        // completed update pass.
        terminal.draw(|frame| {
            let layout = AppLayout::from_area(frame.area(), state.show_status);
            let blink_on =
                (blink_clock.elapsed().as_millis() / BLINK_HALF_PERIOD_MS) % 2 == 0;

            frame.render_widget(
                CodeCanvas::new(&state.pool.rows, state.dark_theme, blink_on),
                layout.canvas_area,
            );

            if state.show_status {
                let mut hint = state.config.status_bar_hint();
                if state.paused {
                    hint.push_str("  [paused]");
                }
                let status = Paragraph::new(hint).style(
                    Style::default()
                        .fg(Theme::status_fg(state.dark_theme))
                        .bg(Theme::background_color(state.dark_theme)),
                );
                frame.render_widget(status, layout.status_area);
            }
        })?;

        // Events apply strictly between frames, so a resize can never leave
        // the renderer reading a stale surface size mid-draw.
        match events.recv().await {
            Some(AppEvent::Tick) => {
                if !state.paused {
                    state.pool.tick();
                }
            }
            Some(AppEvent::Key(key)) => handler::handle_key(&mut state, key),
            Some(AppEvent::Resize(w, h)) => {
                tracing::debug!("resize to {w}x{h}, rebuilding row pool");
                state.pool.resize(w, h);
            }
            None => break, // reader task ended
        }

        if state.should_quit {
            break;
        }
    }

    // ── teardown ──────────────────────────────────────────────
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
