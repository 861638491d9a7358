use std::sync::Mutex;
use std::time::{Duration, Instant};

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use drinkz::{
    client, print,
    tui::{
        app::{App, AppAction, Command, SearchOutcome},
        panes,
    },
};
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // The alternate screen owns stdout, so logs go to a file
    let log_file = std::fs::File::create("drinkz.log")?;
    tracing_subscriber::fmt()
        .with_writer(Mutex::new(log_file))
        .with_ansi(false)
        .init();
    info!("Starting up");

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let http = reqwest::Client::new();
    let (tx, mut rx) = mpsc::unbounded_channel::<SearchOutcome>();
    let mut app = App::new();

    // Main loop
    loop {
        // Draw UI
        terminal.draw(|f| panes::render(&app, f))?;
        app.tick(Instant::now());

        // Deliver completed searches
        while let Ok(outcome) = rx.try_recv() {
            app.apply_search(outcome);
        }

        // Dispatch requested side effects
        for command in app.take_commands() {
            match command {
                Command::Search { seq, query } => {
                    let http = http.clone();
                    let tx = tx.clone();
                    tokio::spawn(async move {
                        let drinks = match client::search_drinks(&http, &query).await {
                            Ok(drinks) => drinks,
                            Err(err) => {
                                // Degrade to an empty result, never abort
                                warn!("Search for {query:?} failed: {err}");
                                Vec::new()
                            }
                        };
                        let _ = tx.send(SearchOutcome { seq, drinks });
                    });
                }
                Command::Print { text } => print::dispatch(text),
            }
        }

        // Handle input; the timeout keeps toast deadlines serviced
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                match app.handle_key(key.code, Instant::now()) {
                    AppAction::Continue => {}
                    AppAction::Exit => break,
                }
            }
        }
    }

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    info!("Shutting down");
    Ok(())
}
