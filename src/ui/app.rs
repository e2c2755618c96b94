use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use crate::api::{FetchError, FetchErrorKind};
use crate::articles::{Article, ArticleDetail, ArticleSummary};
use crate::config::Config;
use crate::state::{ApplicationState, ArticlesAction, ArticlesReducer};
use crate::ui::article_modal::{ArticleModal, ArticleModalState, FetchRequest, ModalProps};
use crate::ui::mvi::Reducer;
use crate::ui::worker::{UiCommand, UiCommandSender};

/// Generic MVI dispatch: takes current state, runs reducer, stores result.
macro_rules! dispatch_mvi {
    ($self:expr, $field:ident, $reducer:ty, $intent:expr) => {
        $self.$field = <$reducer>::reduce(std::mem::take(&mut $self.$field), $intent);
    };
}

/// Host view: article list plus the detail modal it owns.
pub struct App {
    should_quit: bool,
    config: Config,
    /// Article list (MVI pattern).
    articles: ApplicationState,
    selection: usize,
    /// Visibility flag handed to the modal as a prop.
    modal_visible: bool,
    article_modal: ArticleModal,
    /// Set by the modal's close callback.
    close_requested: Arc<AtomicBool>,
    command_sender: Option<UiCommandSender>,
    list_loading: bool,
    last_error: Option<String>,
}

impl App {
    pub fn new(config: Config) -> Self {
        let close_requested = Arc::new(AtomicBool::new(false));
        let flag = Arc::clone(&close_requested);
        let article_modal = ArticleModal::new(Arc::new(move || {
            flag.store(true, Ordering::SeqCst);
        }));

        Self {
            should_quit: false,
            articles: ApplicationState::new(config.api.endpoint.clone()),
            config,
            selection: 0,
            modal_visible: false,
            article_modal,
            close_requested,
            command_sender: None,
            list_loading: false,
            last_error: None,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    pub fn request_quit(&mut self) {
        self.should_quit = true;
    }

    pub fn set_command_sender(&mut self, sender: UiCommandSender) {
        self.command_sender = Some(sender);
    }

    pub fn state(&self) -> &ApplicationState {
        &self.articles
    }

    pub fn articles(&self) -> &[Article] {
        &self.articles.articles
    }

    pub fn selection(&self) -> usize {
        self.selection
    }

    pub fn selected_article(&self) -> Option<&Article> {
        self.articles.articles.get(self.selection)
    }

    pub fn modal(&self) -> &ArticleModalState {
        self.article_modal.state()
    }

    pub fn modal_visible(&self) -> bool {
        self.modal_visible
    }

    pub fn placeholder_thumbnail(&self) -> &str {
        &self.config.ui.placeholder_thumbnail
    }

    pub fn is_list_loading(&self) -> bool {
        self.list_loading
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }

    pub fn on_tick(&mut self) {
        self.article_modal.on_tick();
    }

    // ========================================================================
    // Article list (MVI pattern)
    // ========================================================================

    /// Dispatch an action to the article list reducer.
    pub fn dispatch_articles(&mut self, action: ArticlesAction) {
        match &action {
            ArticlesAction::FetchRequested => self.list_loading = true,
            ArticlesAction::ArticlesFetched(_) => {
                self.list_loading = false;
                self.last_error = None;
            }
            ArticlesAction::FetchFailed { message } => {
                self.list_loading = false;
                self.last_error = Some(message.clone());
            }
        }
        dispatch_mvi!(self, articles, ArticlesReducer, action);
    }

    /// Ask the worker for a fresh article list.
    pub fn request_articles(&mut self) {
        self.dispatch_articles(ArticlesAction::FetchRequested);
        if !self.send_command(UiCommand::FetchArticles) {
            self.list_loading = false;
        }
    }

    pub fn on_articles_fetched(&mut self, result: Result<Vec<Article>, FetchError>) {
        match result {
            Ok(articles) => {
                tracing::info!(count = articles.len(), "article list loaded");
                self.dispatch_articles(ArticlesAction::ArticlesFetched(articles));
                self.clamp_selection();
                self.sync_modal();
            }
            Err(err) => {
                self.dispatch_articles(ArticlesAction::FetchFailed {
                    message: err.to_string(),
                });
            }
        }
    }

    pub fn move_selection(&mut self, direction: i32) {
        let len = self.articles.articles.len();
        if len == 0 {
            self.selection = 0;
            return;
        }

        let current = self.selection.min(len - 1);
        self.selection = if direction.is_negative() {
            if current == 0 {
                len - 1
            } else {
                current - 1
            }
        } else if current + 1 >= len {
            0
        } else {
            current + 1
        };
        self.sync_modal();
    }

    // ========================================================================
    // Article modal
    // ========================================================================

    /// Show the modal for the selected article.
    pub fn open_selected(&mut self) {
        self.modal_visible = true;
        self.sync_modal();
    }

    /// Owner-side toggle of the visibility flag.
    pub fn toggle_modal(&mut self) {
        self.modal_visible = !self.modal_visible;
        self.sync_modal();
    }

    /// The modal's close control.
    pub fn close_modal(&mut self) {
        self.article_modal.close();
        self.handle_close_request();
    }

    pub fn on_article_fetched(
        &mut self,
        request: FetchRequest,
        result: Result<ArticleDetail, FetchError>,
    ) {
        let applied = self
            .article_modal
            .apply_result(request.request_id, result.map_err(|err| err.kind()));
        if !applied {
            tracing::debug!(
                article_id = request.article_id,
                request_id = request.request_id,
                "ignored superseded article response"
            );
        }
    }

    fn handle_close_request(&mut self) {
        if self.close_requested.swap(false, Ordering::SeqCst) {
            self.modal_visible = false;
            self.sync_modal();
        }
    }

    /// Push current props into the modal and issue any fetch it asks for.
    fn sync_modal(&mut self) {
        let props = if self.modal_visible {
            ModalProps {
                visible: true,
                article: self.selected_article().map(ArticleSummary::from),
            }
        } else {
            ModalProps::hidden()
        };

        if let Some(request) = self.article_modal.set_props(props) {
            if !self.send_command(UiCommand::FetchArticle(request)) {
                tracing::warn!(
                    article_id = request.article_id,
                    request_id = request.request_id,
                    "article request could not be queued"
                );
                // Never sent, so nothing will answer it.
                self.article_modal
                    .apply_result(request.request_id, Err(FetchErrorKind::Transport));
            }
        }
    }

    fn send_command(&mut self, command: UiCommand) -> bool {
        let Some(sender) = &self.command_sender else {
            return false;
        };

        match sender.try_send(command) {
            Ok(()) => true,
            Err(err) => {
                self.last_error = Some(format!("Request queue unavailable: {}", err));
                false
            }
        }
    }

    fn clamp_selection(&mut self) {
        let len = self.articles.articles.len();
        if self.selection >= len {
            self.selection = len.saturating_sub(1);
        }
    }
}
