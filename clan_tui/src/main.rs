//! clan_tui - Interactive TUI for the clan balance calculators

mod app;
mod ui;

use anyhow::{Context, Result};
use app::App;
use clan_core::config::{default_balance, load_balance_config};
use crossterm::{
    event::{
        self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers,
    },
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::fs::File;
use std::io;
use std::path::Path;
use std::time::Duration;

fn main() -> Result<()> {
    // Log to a file so output does not tear the TUI
    let log_file = File::create("clan_tui.log").context("creating clan_tui.log")?;
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .target(env_logger::Target::Pipe(Box::new(log_file)))
        .init();

    log::info!("Starting clan_tui v{}", env!("CARGO_PKG_VERSION"));

    let (config, config_source) = match std::env::args().nth(1) {
        Some(path) => {
            let config = load_balance_config(Path::new(&path))
                .with_context(|| format!("loading balance config {}", path))?;
            (config, path)
        }
        None => (default_balance(), "built-in".to_string()),
    };
    log::info!("Using balance config: {}", config_source);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(config, config_source);
    let result = run(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(ref e) = result {
        log::error!("clan_tui exited with error: {:#}", e);
    }
    result
}

fn run(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> Result<()> {
    loop {
        terminal.draw(|f| ui::draw(f, app))?;

        if !event::poll(Duration::from_millis(250))? {
            continue;
        }
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if key.kind != KeyEventKind::Press {
            continue;
        }

        match (key.code, key.modifiers) {
            (KeyCode::Char('q'), _) | (KeyCode::Char('c'), KeyModifiers::CONTROL) => break,
            (KeyCode::Tab, _) => app.next_tab(),
            (KeyCode::BackTab, _) => app.prev_tab(),
            (KeyCode::F(n), _) => app.set_tab(n.saturating_sub(1) as usize),
            (KeyCode::Up, _) => app.on_up(),
            (KeyCode::Down, _) | (KeyCode::Enter, _) => app.on_down(),
            (KeyCode::Left, _) => app.on_left(),
            (KeyCode::Right, _) => app.on_right(),
            (KeyCode::Backspace, _) => app.on_backspace(),
            (KeyCode::Delete, _) => app.clear_field(),
            (KeyCode::Char('r'), _) => app.reset(),
            (KeyCode::Char('v'), _) => app.toggle_json(),
            (KeyCode::Char('?'), _) => app.set_tab(4),
            (KeyCode::Char(c), _) => app.on_char(c),
            _ => {}
        }
    }

    Ok(())
}
