use crate::api::ArticleClient;
use crate::config::Config;
use crate::ui::app::App;
use crate::ui::events::{AppEvent, EventHandler};
use crate::ui::input::handle_key;
use crate::ui::render::draw;
use crate::ui::terminal_guard::setup_terminal;
use crate::ui::worker::{command_channel, run_fetch_worker};
use std::sync::mpsc::RecvTimeoutError;
use std::time::Duration;

/// Run the terminal UI until the user quits.
///
/// The UI loop owns all state on the calling thread; HTTP requests run on
/// a separate tokio runtime.
pub fn run(config: Config) -> anyhow::Result<()> {
    let client = ArticleClient::new(&config.api)?;
    let runtime = tokio::runtime::Runtime::new()?;

    let (mut terminal, guard) = setup_terminal()?;
    let tick_rate = Duration::from_millis(config.ui.tick_rate_ms);
    let events = EventHandler::new(tick_rate);

    let (command_tx, command_rx) = command_channel();
    runtime.spawn(run_fetch_worker(client, command_rx, events.sender()));

    let mut app = App::new(config);
    app.set_command_sender(command_tx);
    app.request_articles();

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        match events.next(tick_rate) {
            Ok(AppEvent::Key(key)) => handle_key(&mut app, key),
            Ok(AppEvent::Tick) => app.on_tick(),
            Ok(AppEvent::Resize(_, _)) => {}
            Ok(AppEvent::ArticleFetched { request, result }) => {
                app.on_article_fetched(request, result)
            }
            Ok(AppEvent::ArticlesFetched(result)) => app.on_articles_fetched(result),
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => break,
        }
    }

    drop(guard);
    runtime.shutdown_background();
    tracing::info!("newsdesk exited");
    Ok(())
}
