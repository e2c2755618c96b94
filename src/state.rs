//! Application-wide article list state and its reducer.

use crate::articles::Article;
use crate::ui::mvi::{Intent, Reducer, UiState};

/// Application state shared by the list view.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ApplicationState {
    /// Articles currently shown in the list, in backend order.
    pub articles: Vec<Article>,
    /// Endpoint the articles were loaded from.
    pub source: String,
}

impl UiState for ApplicationState {}

impl ApplicationState {
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            articles: Vec::new(),
            source: source.into(),
        }
    }
}

/// Actions dispatched on the article list path.
#[derive(Debug, Clone, PartialEq)]
pub enum ArticlesAction {
    /// A list request was issued.
    FetchRequested,
    /// The listing endpoint answered with a full article list.
    ArticlesFetched(Vec<Article>),
    /// The list request failed.
    FetchFailed { message: String },
}

impl Intent for ArticlesAction {}

/// Reducer for [`ApplicationState`].
pub struct ArticlesReducer;

impl Reducer for ArticlesReducer {
    type State = ApplicationState;
    type Intent = ArticlesAction;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ArticlesAction::ArticlesFetched(articles) => ApplicationState { articles, ..state },
            // Handled by the host UI; the list itself is untouched.
            ArticlesAction::FetchRequested | ArticlesAction::FetchFailed { .. } => state,
        }
    }
}

/// Free-function form of [`ArticlesReducer::reduce`].
pub fn reduce(state: ApplicationState, action: ArticlesAction) -> ApplicationState {
    ArticlesReducer::reduce(state, action)
}
