use std::io;
use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::api::SearchClient;
use crate::config::Config;
use crate::session::{FetchOutcome, RequestTicket};
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;

pub fn run(config: &Config, client: SearchClient, initial_query: Option<String>) -> io::Result<()> {
    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_ms);
    let events = EventHandler::new(tick_rate);
    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;

    let mut app = App::new(config);
    if let Ok((cols, rows)) = crossterm::terminal::size() {
        app.on_resize(cols, rows);
    }
    if let Some(query) = initial_query {
        for ch in query.chars() {
            app.input_push(ch);
        }
        app.submit();
    }

    let per_page = config.search.per_page;
    loop {
        while let Some(ticket) = app.take_pending_fetch() {
            spawn_fetch(&runtime, client.clone(), ticket, per_page, events.sender());
        }

        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Input(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(cols, rows)) => app.on_resize(cols, rows),
            Ok(AppEvent::Fetch { ticket, outcome }) => app.on_fetch(ticket, outcome),
            Err(std::sync::mpsc::RecvTimeoutError::Timeout) => {}
            Err(std::sync::mpsc::RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    Ok(())
}

/// Run one search call on the Tokio runtime.
///
/// Exactly one completion event reaches the UI on every exit path; the
/// scopeguard converts an unwound task into a `Failed` completion, so the
/// session's loading flag can never leak set.
fn spawn_fetch(
    runtime: &tokio::runtime::Runtime,
    client: SearchClient,
    ticket: RequestTicket,
    per_page: u32,
    tx: Sender<AppEvent>,
) {
    runtime.spawn(async move {
        let failsafe = scopeguard::guard((tx, ticket.clone()), |(tx, ticket)| {
            let _ = tx.send(AppEvent::Fetch {
                ticket,
                outcome: FetchOutcome::Failed,
            });
        });

        let outcome = match client.search(&ticket.query, ticket.page, per_page).await {
            Ok(response) => {
                tracing::debug!(
                    query = %ticket.query,
                    page = ticket.page,
                    total_hits = response.total_hits,
                    hits = response.hits.len(),
                    "search page loaded"
                );
                FetchOutcome::Loaded(response)
            }
            Err(err) => {
                tracing::warn!(
                    query = %ticket.query,
                    page = ticket.page,
                    error = %err,
                    "search request failed"
                );
                FetchOutcome::Failed
            }
        };

        let (tx, ticket) = scopeguard::ScopeGuard::into_inner(failsafe);
        let _ = tx.send(AppEvent::Fetch { ticket, outcome });
    });
}
