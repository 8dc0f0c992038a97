use std::io;
use std::time::{Duration, Instant};

use clap::Parser;
use color_eyre::Result;
use ratatui::DefaultTerminal;
use ratatui::crossterm::event::{self, DisableMouseCapture, EnableMouseCapture};
use ratatui::crossterm::execute;

use tripseek::app::App;
use tripseek::cli::Args;
use tripseek::config::load_config;
use tripseek::logging;
use tripseek::lookup::Catalog;

/// How long to wait for input before advancing timers
const TICK_RATE: Duration = Duration::from_millis(25);

fn main() -> Result<()> {
    // Install color-eyre panic hook for better error messages
    color_eyre::install()?;

    let args = Args::parse();
    logging::init();

    let config = load_config(args.config.as_deref())?;
    let catalog = match args.catalog.as_ref().or(config.lookup.catalog.as_ref()) {
        Some(path) => Catalog::load(path)?,
        None => Catalog::builtin()?,
    };
    log::info!("Loaded {} places", catalog.len());

    let app = App::new(args.mode, &config, catalog);

    // Initialize terminal (handles raw mode, alternate screen, etc.)
    let terminal = ratatui::init();
    execute!(io::stdout(), EnableMouseCapture)?;

    let result = run(terminal, app);

    // Restore terminal before printing anything
    execute!(io::stdout(), DisableMouseCapture)?;
    ratatui::restore();

    let app = result?;
    if let Some(request) = app.output() {
        println!("{}", serde_json::to_string(request)?);
    }

    Ok(())
}

fn run(mut terminal: DefaultTerminal, mut app: App) -> Result<App> {
    loop {
        app.tick(Instant::now());
        terminal.draw(|frame| app.render(frame))?;

        if event::poll(TICK_RATE)? {
            let event = event::read()?;
            app.handle_event(event, Instant::now());
        }

        if app.should_quit() {
            break;
        }
    }

    Ok(app)
}
