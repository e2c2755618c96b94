//! Reducer for the article modal.

use crate::ui::mvi::Reducer;

use super::intent::ArticleModalIntent;
use super::state::ArticleModalState;

/// Reducer for article modal state transitions.
pub struct ArticleModalReducer;

impl Reducer for ArticleModalReducer {
    type State = ArticleModalState;
    type Intent = ArticleModalIntent;

    fn reduce(state: Self::State, intent: Self::Intent) -> Self::State {
        match intent {
            ArticleModalIntent::Open {
                article_id,
                request_id,
            } => ArticleModalState::Loading {
                article_id,
                request_id,
                animation_tick: 0,
            },

            ArticleModalIntent::OpenUnselected => {
                ArticleModalState::Unselected { animation_tick: 0 }
            }

            ArticleModalIntent::Loaded { request_id, detail } => match state {
                ArticleModalState::Loading {
                    article_id,
                    request_id: pending,
                    ..
                } if pending == request_id => ArticleModalState::Loaded { article_id, detail },
                // Stale or unexpected response
                other => other,
            },

            ArticleModalIntent::Failed { request_id, kind } => match state {
                ArticleModalState::Loading {
                    article_id,
                    request_id: pending,
                    animation_tick,
                } if pending == request_id => ArticleModalState::Failed {
                    article_id,
                    kind,
                    animation_tick,
                },
                other => other,
            },

            ArticleModalIntent::AnimationTick => match state {
                ArticleModalState::Unselected { animation_tick } => {
                    ArticleModalState::Unselected {
                        animation_tick: animation_tick.wrapping_add(1),
                    }
                }
                ArticleModalState::Loading {
                    article_id,
                    request_id,
                    animation_tick,
                } => ArticleModalState::Loading {
                    article_id,
                    request_id,
                    animation_tick: animation_tick.wrapping_add(1),
                },
                ArticleModalState::Failed {
                    article_id,
                    kind,
                    animation_tick,
                } => ArticleModalState::Failed {
                    article_id,
                    kind,
                    animation_tick: animation_tick.wrapping_add(1),
                },
                other => other,
            },

            ArticleModalIntent::Close => ArticleModalState::Hidden,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::FetchErrorKind;
    use crate::articles::ArticleDetail;

    fn loading(article_id: u64, request_id: u64) -> ArticleModalState {
        ArticleModalState::Loading {
            article_id,
            request_id,
            animation_tick: 0,
        }
    }

    fn detail(title: &str) -> ArticleDetail {
        ArticleDetail {
            title: Some(title.to_string()),
            ..ArticleDetail::default()
        }
    }

    #[test]
    fn open_transitions_to_loading() {
        let state = ArticleModalReducer::reduce(
            ArticleModalState::Hidden,
            ArticleModalIntent::Open {
                article_id: 42,
                request_id: 1,
            },
        );
        assert_eq!(state, loading(42, 1));
    }

    #[test]
    fn matching_response_loads_detail() {
        let state = ArticleModalReducer::reduce(
            loading(42, 1),
            ArticleModalIntent::Loaded {
                request_id: 1,
                detail: detail("Cup final"),
            },
        );
        assert_eq!(
            state,
            ArticleModalState::Loaded {
                article_id: 42,
                detail: detail("Cup final"),
            }
        );
    }

    #[test]
    fn stale_response_is_dropped() {
        let state = ArticleModalReducer::reduce(
            loading(2, 5),
            ArticleModalIntent::Loaded {
                request_id: 4,
                detail: detail("old"),
            },
        );
        assert_eq!(state, loading(2, 5));
    }

    #[test]
    fn stale_failure_is_dropped() {
        let state = ArticleModalReducer::reduce(
            loading(2, 5),
            ArticleModalIntent::Failed {
                request_id: 4,
                kind: FetchErrorKind::Transport,
            },
        );
        assert_eq!(state, loading(2, 5));
    }

    #[test]
    fn response_after_close_is_dropped() {
        let state = ArticleModalReducer::reduce(
            ArticleModalState::Hidden,
            ArticleModalIntent::Loaded {
                request_id: 1,
                detail: detail("late"),
            },
        );
        assert_eq!(state, ArticleModalState::Hidden);
    }

    #[test]
    fn failure_clears_detail() {
        let state = ArticleModalReducer::reduce(
            loading(7, 3),
            ArticleModalIntent::Failed {
                request_id: 3,
                kind: FetchErrorKind::RequestFailed,
            },
        );
        assert_eq!(state.detail(), None);
        assert_eq!(state.failure(), Some(FetchErrorKind::RequestFailed));
        assert!(state.shows_loading_indicator());
    }

    #[test]
    fn animation_tick_increments() {
        let state = ArticleModalReducer::reduce(loading(1, 1), ArticleModalIntent::AnimationTick);
        assert_eq!(state.animation_tick(), 1);
    }

    #[test]
    fn close_hides_from_any_state() {
        let states = [
            loading(1, 1),
            ArticleModalState::Loaded {
                article_id: 1,
                detail: detail("x"),
            },
            ArticleModalState::Failed {
                article_id: 1,
                kind: FetchErrorKind::Decode,
                animation_tick: 0,
            },
            ArticleModalState::Unselected { animation_tick: 3 },
        ];
        for state in states {
            assert_eq!(
                ArticleModalReducer::reduce(state, ArticleModalIntent::Close),
                ArticleModalState::Hidden
            );
        }
    }
}
