//! Article detail modal.
//!
//! Fetches and shows one article's full record while visible.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Modal state enum (Hidden → Loading → Loaded / Failed)
//! - `intent.rs` - Open/close requests and fetch results
//! - `reducer.rs` - State transitions (pure, drops stale responses)
//! - `controller.rs` - Turns props into intents and fetch effects
//! - `dialog.rs` - Rendering

mod controller;
mod dialog;
mod intent;
mod reducer;
mod state;

pub use controller::{ArticleModal, CloseCallback, FetchRequest, ModalProps};
pub use dialog::render_article_modal;
pub use intent::ArticleModalIntent;
pub use reducer::ArticleModalReducer;
pub use state::{ArticleModalState, RequestId};
