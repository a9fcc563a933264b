//! Terminal tic-tac-toe: you play O, the computer opens with X.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod app;
mod geometry;
mod input;
mod timer;
mod ui;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::Result;
use clap::Parser;
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, MouseButton,
        MouseEventKind,
    },
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use oxo_core::{Coord, GameEngine};
use ratatui::{Terminal, backend::CrosstermBackend, layout::Rect};
use tokio::sync::mpsc::{self, UnboundedReceiver};
use tracing::info;
use tracing_subscriber::EnvFilter;

use app::App;
use timer::{ResetTimer, TimerFired};

/// Terminal tic-tac-toe against a wandering computer opponent.
#[derive(Parser, Debug)]
#[command(name = "oxo", version, about = "Play tic-tac-toe in the terminal", long_about = None)]
struct Cli {
    /// Seed for the opponent's move selection (random when omitted).
    #[arg(long)]
    seed: Option<u64>,

    /// Where tracing output goes; logging to the terminal would corrupt
    /// the board.
    #[arg(long, default_value = "oxo_tui.log")]
    log_file: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let log_file = std::fs::File::create(&cli.log_file)?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!(seed = ?cli.seed, "starting oxo");

    let engine = match cli.seed {
        Some(seed) => GameEngine::with_seed(seed),
        None => GameEngine::default(),
    };

    let (timer_tx, mut timer_rx) = mpsc::unbounded_channel();
    let app = App::new(engine, ResetTimer::new(timer_tx));

    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = run_app(&mut terminal, app, &mut timer_rx).await;

    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {err}");
    }

    Ok(())
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    mut app: App,
    timer_rx: &mut UnboundedReceiver<TimerFired>,
) -> Result<()> {
    loop {
        let mut frame_area = Rect::default();
        terminal.draw(|frame| {
            frame_area = frame.area();
            ui::draw(frame, &app);
        })?;

        while let Ok(fired) = timer_rx.try_recv() {
            app.handle_timer(fired);
        }

        // Short poll keeps the reveal animation moving between inputs.
        if event::poll(Duration::from_millis(50))? {
            match event::read()? {
                Event::Key(key) => match key.code {
                    KeyCode::Char('q') => {
                        info!("user quit");
                        return Ok(());
                    }
                    KeyCode::Char('r') => app.reset(),
                    KeyCode::Enter | KeyCode::Char(' ') => {
                        let cursor = app.cursor();
                        app.click(cursor);
                    }
                    KeyCode::Char(c) if c.is_ascii_digit() => {
                        if let Some(digit) = c.to_digit(10) {
                            if (1..=9).contains(&digit) {
                                if let Some(coord) = Coord::from_index(digit as usize - 1) {
                                    app.click(coord);
                                }
                            }
                        }
                    }
                    code @ (KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right) => {
                        app.move_cursor(code);
                    }
                    _ => {}
                },
                Event::Mouse(mouse) => {
                    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
                        if let Some(coord) = ui::hit_test(frame_area, mouse.column, mouse.row) {
                            app.click(coord);
                        }
                    }
                }
                _ => {}
            }
        }
    }
}
