//! Fetch-on-open driver for the article modal.
//!
//! The owner passes props on every frame. A change of visibility or of the
//! selected article while visible yields a [`FetchRequest`] that the owner
//! must execute and later report back through [`ArticleModal::apply_result`].

use std::fmt;
use std::sync::Arc;

use crate::api::FetchErrorKind;
use crate::articles::{ArticleDetail, ArticleId, ArticleSummary};
use crate::ui::mvi::Reducer;

use super::intent::ArticleModalIntent;
use super::reducer::ArticleModalReducer;
use super::state::{ArticleModalState, RequestId};

/// Informs the owner that the modal should no longer be shown.
pub type CloseCallback = Arc<dyn Fn() + Send + Sync>;

/// Inputs supplied by the owning view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ModalProps {
    pub visible: bool,
    pub article: Option<ArticleSummary>,
}

impl ModalProps {
    pub fn hidden() -> Self {
        Self::default()
    }

    pub fn showing(article: ArticleSummary) -> Self {
        Self {
            visible: true,
            article: Some(article),
        }
    }
}

/// Detail request the owner has to issue.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchRequest {
    pub article_id: ArticleId,
    pub request_id: RequestId,
}

pub struct ArticleModal {
    state: ArticleModalState,
    props: ModalProps,
    last_request_id: RequestId,
    on_close: CloseCallback,
}

impl fmt::Debug for ArticleModal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ArticleModal")
            .field("state", &self.state)
            .field("props", &self.props)
            .field("last_request_id", &self.last_request_id)
            .finish_non_exhaustive()
    }
}

impl Default for ArticleModal {
    fn default() -> Self {
        Self::new(Arc::new(|| {}))
    }
}

impl ArticleModal {
    pub fn new(on_close: CloseCallback) -> Self {
        Self {
            state: ArticleModalState::default(),
            props: ModalProps::default(),
            last_request_id: 0,
            on_close,
        }
    }

    pub fn state(&self) -> &ArticleModalState {
        &self.state
    }

    /// Apply new props. Returns the request to issue, if any.
    ///
    /// Unchanged props are a no-op, so calling this on every frame is fine.
    pub fn set_props(&mut self, props: ModalProps) -> Option<FetchRequest> {
        if props == self.props {
            return None;
        }
        self.props = props;

        if !props.visible {
            self.dispatch(ArticleModalIntent::Close);
            return None;
        }

        let Some(article) = props.article else {
            self.dispatch(ArticleModalIntent::OpenUnselected);
            return None;
        };

        self.last_request_id += 1;
        let request = FetchRequest {
            article_id: article.id,
            request_id: self.last_request_id,
        };
        self.dispatch(ArticleModalIntent::Open {
            article_id: request.article_id,
            request_id: request.request_id,
        });
        tracing::debug!(
            article_id = request.article_id,
            request_id = request.request_id,
            "article detail requested"
        );
        Some(request)
    }

    /// Feed back the outcome of a request. Returns whether it was applied.
    pub fn apply_result(
        &mut self,
        request_id: RequestId,
        result: Result<ArticleDetail, FetchErrorKind>,
    ) -> bool {
        if self.state.pending_request() != Some(request_id) {
            tracing::debug!(request_id, "discarding stale article response");
            return false;
        }

        let intent = match result {
            Ok(detail) => ArticleModalIntent::Loaded { request_id, detail },
            Err(kind) => ArticleModalIntent::Failed { request_id, kind },
        };
        self.dispatch(intent);
        true
    }

    /// Close control: hide, drop detail, and tell the owner.
    pub fn close(&mut self) {
        self.dispatch(ArticleModalIntent::Close);
        (self.on_close)();
    }

    pub fn on_tick(&mut self) {
        self.dispatch(ArticleModalIntent::AnimationTick);
    }

    fn dispatch(&mut self, intent: ArticleModalIntent) {
        self.state = ArticleModalReducer::reduce(std::mem::take(&mut self.state), intent);
    }
}
