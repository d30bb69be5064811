use std::fs::File;
use std::io::{self, Stdout};
use std::sync::Mutex;

use anyhow::Context;
use crossterm::{
    event::{
        DisableMouseCapture, EnableMouseCapture, KeyboardEnhancementFlags,
        PopKeyboardEnhancementFlags, PushKeyboardEnhancementFlags,
    },
    execute,
    terminal::{
        disable_raw_mode, enable_raw_mode, supports_keyboard_enhancement, EnterAlternateScreen,
        LeaveAlternateScreen,
    },
};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use alien_invasion::app::App;
use alien_invasion::event::{Event, EventHandler};
use alien_invasion::game::Invasion;
use alien_invasion::scores::HighScoreFile;
use alien_invasion::ui;

const LOG_FILE: &str = "alien_invasion.log";
const TICK_RATE_MS: u64 = 16; // ~60 FPS

fn init_logging() -> anyhow::Result<()> {
    let file = File::create(LOG_FILE).with_context(|| format!("creating {LOG_FILE}"))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn main() -> anyhow::Result<()> {
    init_logging()?;

    // A missing file is fatal: ship the seed high_score.json next to the game.
    let scores = HighScoreFile::default();
    let high_score = scores
        .load()
        .with_context(|| format!("loading high score from {}", scores.path().display()))?;
    info!(high_score, "loaded high score");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let key_release = matches!(supports_keyboard_enhancement(), Ok(true));
    if key_release {
        execute!(
            stdout,
            PushKeyboardEnhancementFlags(KeyboardEnhancementFlags::REPORT_EVENT_TYPES)
        )?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    let result = run(&mut terminal, high_score, key_release);

    // Restore terminal
    if key_release {
        execute!(terminal.backend_mut(), PopKeyboardEnhancementFlags)?;
    }
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    let high_score = result?;
    scores
        .save(high_score)
        .with_context(|| format!("saving high score to {}", scores.path().display()))?;
    info!(high_score, "saved high score");
    Ok(())
}

/// Play until the user quits; returns the high score to persist.
fn run(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    high_score: u32,
    key_release: bool,
) -> io::Result<u32> {
    let size = terminal.size()?;
    let (width, height) = ui::world_size(Rect::new(0, 0, size.width, size.height));
    info!(width, height, key_release, "screen");
    if !key_release {
        warn!("terminal does not report key releases, movement keys expire after a short hold");
    }

    let mut app = App::new(Invasion::new(width, height, high_score), key_release);
    let mut events = EventHandler::new(TICK_RATE_MS);
    let mut mouse_captured = true;

    loop {
        terminal.draw(|frame| ui::render(frame, &mut app))?;

        for event in events.next_batch()? {
            match event {
                Event::Tick => app.on_tick(),
                other => app.on_event(other),
            }
        }

        // Pointer input only matters while the Play button is up.
        let want_mouse = app.game.cursor_visible();
        if want_mouse != mouse_captured {
            if want_mouse {
                execute!(terminal.backend_mut(), EnableMouseCapture)?;
            } else {
                execute!(terminal.backend_mut(), DisableMouseCapture)?;
            }
            mouse_captured = want_mouse;
        }

        if app.should_quit {
            break;
        }
    }

    Ok(app.game.stats.high_score)
}
