//! Terminal reader for a sports article backend.
//!
//! The article list lives in [`state::ApplicationState`] and changes only
//! through [`state::reduce`]. The detail view is the
//! [`ui::article_modal`] feature, which fetches on open.

pub mod api;
pub mod articles;
pub mod cli;
pub mod config;
pub mod logging;
pub mod state;
pub mod ui;
