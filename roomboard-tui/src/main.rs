//! Room board TUI entry point.
//!
//! Terminal setup, the event loop and logging initialization. Logs go
//! to rolling files only; stdout belongs to the terminal UI.

mod app;
mod clipboard;
mod ui;

use std::io::{self, Stdout};
use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use roomboard_core::HousekeepingSession;
use tracing_appender::{non_blocking::WorkerGuard, rolling};
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

use app::App;

#[derive(Parser, Debug)]
#[command(name = "roomboard")]
#[command(about = "Daily housekeeping room board with a WhatsApp-ready summary")]
struct Args {
    /// Shift label to start with (Morning/Afternoon/Evening/Night)
    #[arg(long)]
    shift: Option<String>,

    /// Report date, YYYY-MM-DD
    #[arg(long)]
    date: Option<String>,

    /// Attendant name
    #[arg(long)]
    attendant: Option<String>,

    /// Directory for log files
    #[arg(long, default_value = "./logs")]
    log_dir: PathBuf,
}

struct LocalTimer;

impl FormatTime for LocalTimer {
    fn format_time(&self, w: &mut fmt::format::Writer<'_>) -> std::fmt::Result {
        write!(
            w,
            "{}",
            chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.3f")
        )
    }
}

fn init_logging(log_dir: &Path) -> anyhow::Result<WorkerGuard> {
    std::fs::create_dir_all(log_dir)
        .with_context(|| format!("failed to create log directory {}", log_dir.display()))?;

    let file_appender = rolling::daily(log_dir, "roomboard.log");
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = if let Ok(from_env) = EnvFilter::try_from_default_env() {
        from_env
    } else if cfg!(debug_assertions) {
        EnvFilter::new("info,roomboard=debug,roomboard_core=debug")
    } else {
        EnvFilter::new("warn")
    };

    let file_layer = fmt::layer()
        .with_timer(LocalTimer)
        .with_ansi(false)
        .with_target(true)
        .with_level(true)
        .with_writer(non_blocking_file);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .init();

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        let msg = info.to_string();
        tracing::error!(target: "panic", message = %msg, backtrace = %backtrace, "panic occurred");
    }));

    Ok(guard)
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let _guard = init_logging(&args.log_dir)?;

    let mut session = HousekeepingSession::new();
    if let Some(shift) = args.shift {
        session.shift = shift;
    }
    if let Some(date) = args.date {
        session.date = date;
    }
    if let Some(attendant) = args.attendant {
        session.attendant = attendant;
    }

    tracing::info!(
        rooms = session.rooms().len(),
        extras = session.extras().len(),
        "room board starting"
    );

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(session);
    let res = run_app(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        tracing::error!(error = %err, "room board exited with error");
        return Err(err.into());
    }
    tracing::info!("room board closed");
    Ok(())
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            if let Event::Key(key) = event::read()? {
                if matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                    app.handle_key(key);
                }
            }
        }

        app.tick();

        if app.should_quit {
            return Ok(());
        }
    }
}
