//! Intents for the article modal.

use crate::api::FetchErrorKind;
use crate::articles::{ArticleDetail, ArticleId};
use crate::ui::mvi::Intent;

use super::state::RequestId;

/// Intents that can be dispatched to the article modal.
#[derive(Debug, Clone)]
pub enum ArticleModalIntent {
    /// Show the modal and start loading `article_id`.
    Open {
        article_id: ArticleId,
        request_id: RequestId,
    },

    /// Show the modal with no article selected.
    OpenUnselected,

    /// A detail request succeeded.
    Loaded {
        request_id: RequestId,
        detail: ArticleDetail,
    },

    /// A detail request failed.
    Failed {
        request_id: RequestId,
        kind: FetchErrorKind,
    },

    /// Animation tick (for spinner updates).
    AnimationTick,

    /// Hide the modal and drop any detail.
    Close,
}

impl Intent for ArticleModalIntent {}
