//! State for the article modal.

use crate::api::FetchErrorKind;
use crate::articles::{ArticleDetail, ArticleId};
use crate::ui::mvi::UiState;

/// Monotonically increasing tag of a detail request.
pub type RequestId = u64;

/// State of the article modal.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum ArticleModalState {
    /// Modal is not shown.
    #[default]
    Hidden,

    /// Modal is shown without an article to load.
    Unselected {
        /// Animation tick for spinner.
        animation_tick: u8,
    },

    /// Detail request in flight.
    Loading {
        article_id: ArticleId,
        /// Only a response tagged with this id may settle the state.
        request_id: RequestId,
        /// Animation tick for spinner.
        animation_tick: u8,
    },

    /// Detail received and decoded.
    Loaded {
        article_id: ArticleId,
        detail: ArticleDetail,
    },

    /// The request failed; no detail is held.
    Failed {
        article_id: ArticleId,
        kind: FetchErrorKind,
        /// Animation tick for spinner.
        animation_tick: u8,
    },
}

impl UiState for ArticleModalState {}

impl ArticleModalState {
    /// Check if the modal should be drawn.
    pub fn is_visible(&self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// The loaded detail, if any.
    pub fn detail(&self) -> Option<&ArticleDetail> {
        match self {
            Self::Loaded { detail, .. } => Some(detail),
            _ => None,
        }
    }

    /// Visible but without detail to show.
    pub fn shows_loading_indicator(&self) -> bool {
        matches!(
            self,
            Self::Unselected { .. } | Self::Loading { .. } | Self::Failed { .. }
        )
    }

    /// Article the modal is showing or loading.
    pub fn article_id(&self) -> Option<ArticleId> {
        match self {
            Self::Loading { article_id, .. }
            | Self::Loaded { article_id, .. }
            | Self::Failed { article_id, .. } => Some(*article_id),
            Self::Hidden | Self::Unselected { .. } => None,
        }
    }

    /// Id of the request the modal is waiting for.
    pub fn pending_request(&self) -> Option<RequestId> {
        match self {
            Self::Loading { request_id, .. } => Some(*request_id),
            _ => None,
        }
    }

    /// Kind of the last failure, if the modal is in the failed state.
    pub fn failure(&self) -> Option<FetchErrorKind> {
        match self {
            Self::Failed { kind, .. } => Some(*kind),
            _ => None,
        }
    }

    pub fn animation_tick(&self) -> u8 {
        match self {
            Self::Unselected { animation_tick }
            | Self::Loading { animation_tick, .. }
            | Self::Failed { animation_tick, .. } => *animation_tick,
            Self::Hidden | Self::Loaded { .. } => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hidden_is_default() {
        assert_eq!(ArticleModalState::default(), ArticleModalState::Hidden);
    }

    #[test]
    fn visibility_check() {
        assert!(!ArticleModalState::Hidden.is_visible());
        assert!(ArticleModalState::Unselected { animation_tick: 0 }.is_visible());
        assert!(ArticleModalState::Loading {
            article_id: 1,
            request_id: 1,
            animation_tick: 0,
        }
        .is_visible());
    }

    #[test]
    fn loading_indicator_only_without_detail() {
        assert!(!ArticleModalState::Hidden.shows_loading_indicator());
        assert!(ArticleModalState::Failed {
            article_id: 7,
            kind: FetchErrorKind::RequestFailed,
            animation_tick: 0,
        }
        .shows_loading_indicator());
        assert!(!ArticleModalState::Loaded {
            article_id: 7,
            detail: ArticleDetail::default(),
        }
        .shows_loading_indicator());
    }

    #[test]
    fn pending_request_only_while_loading() {
        let loading = ArticleModalState::Loading {
            article_id: 3,
            request_id: 9,
            animation_tick: 0,
        };
        assert_eq!(loading.pending_request(), Some(9));
        assert_eq!(loading.article_id(), Some(3));
        assert_eq!(ArticleModalState::Hidden.pending_request(), None);
    }
}
