use mlplay::app::{App, AppMessage};
use mlplay::config::Config;
use mlplay::{logging, terminal, ui};

use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::time::Duration;
use tokio::sync::mpsc;
use tracing::info;

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let log_path = logging::init();

    let config = Config::from_env();
    info!("Starting mlplay against {}", config.api_base);

    terminal::install_panic_hook();
    let mut stdout = io::stdout();
    terminal::enter_tui_mode(&mut stdout)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;

    let result = run(&mut terminal, config).await;

    terminal::leave_tui_mode(&mut io::stdout());
    if let Some(path) = log_path {
        eprintln!("Log written to {}", path.display());
    }
    result
}

async fn run(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: Config,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel::<AppMessage>();
    let tick_ms = config.tick_ms;
    let mut app = App::new(config, tx);

    app.load_datasets();

    let mut events = EventStream::new();
    let mut ticker = tokio::time::interval(Duration::from_millis(tick_ms));

    loop {
        terminal.draw(|frame| ui::draw(frame, &mut app))?;

        tokio::select! {
            event = events.next() => {
                match event {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        app.handle_key(key);
                    }
                    Some(Ok(Event::Mouse(mouse))) => app.handle_mouse(mouse),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        info!("Terminal event error: {}", e);
                    }
                    None => break,
                }
            }
            _ = ticker.tick() => app.on_tick(),
            msg = rx.recv() => {
                match msg {
                    Some(msg) => app.update(msg),
                    None => break,
                }
            }
        }

        if app.should_quit {
            app.disconnect();
            break;
        }
    }

    Ok(())
}
