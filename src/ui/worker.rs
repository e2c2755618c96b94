//! Background fetching for the UI thread.
//!
//! The UI sends [`UiCommand`]s without blocking. Each command runs as its
//! own task, and its result comes back as an [`AppEvent`]. Tasks are never
//! cancelled; the modal drops answers to superseded requests.

use std::sync::mpsc as std_mpsc;

use tokio::sync::mpsc;

use crate::api::ArticleClient;
use crate::ui::article_modal::FetchRequest;
use crate::ui::events::AppEvent;

const COMMAND_BUFFER: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiCommand {
    FetchArticle(FetchRequest),
    FetchArticles,
}

pub type UiCommandSender = mpsc::Sender<UiCommand>;

pub fn command_channel() -> (UiCommandSender, mpsc::Receiver<UiCommand>) {
    mpsc::channel(COMMAND_BUFFER)
}

/// Serve commands until every sender is dropped.
pub async fn run_fetch_worker(
    client: ArticleClient,
    mut commands: mpsc::Receiver<UiCommand>,
    events: std_mpsc::Sender<AppEvent>,
) {
    while let Some(command) = commands.recv().await {
        let client = client.clone();
        let events = events.clone();
        tokio::spawn(async move {
            let event = match command {
                UiCommand::FetchArticle(request) => {
                    let result = client.fetch_article(request.article_id).await;
                    if let Err(err) = &result {
                        tracing::warn!(
                            article_id = request.article_id,
                            request_id = request.request_id,
                            url = err.url(),
                            kind = err.kind().as_str(),
                            error = %err,
                            "article fetch failed"
                        );
                    }
                    AppEvent::ArticleFetched { request, result }
                }
                UiCommand::FetchArticles => {
                    let result = client.fetch_articles().await;
                    if let Err(err) = &result {
                        tracing::warn!(
                            url = err.url(),
                            kind = err.kind().as_str(),
                            error = %err,
                            "article list fetch failed"
                        );
                    }
                    AppEvent::ArticlesFetched(result)
                }
            };
            if events.send(event).is_err() {
                tracing::trace!("fetch result dropped (UI gone)");
            }
        });
    }
}
