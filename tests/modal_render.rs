//! What the article modal draws in each state.

mod common;

use common::article;
use newsdesk::api::FetchErrorKind;
use newsdesk::articles::{ArticleDetail, Sport, Team};
use newsdesk::config::Config;
use newsdesk::ui::app::App;
use newsdesk::ui::article_modal::{render_article_modal, ArticleModalState};
use newsdesk::ui::render::draw;
use ratatui::backend::TestBackend;
use ratatui::Terminal;

const PLACEHOLDER: &str = "https://img.test/p.jpg";

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let width = buffer.area.width as usize;
    buffer
        .content
        .chunks(width)
        .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
        .collect::<Vec<_>>()
        .join("\n")
}

fn render_state(state: &ArticleModalState) -> String {
    let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
    terminal
        .draw(|frame| render_article_modal(frame, state, PLACEHOLDER))
        .unwrap();
    screen_text(&terminal)
}

fn loaded(detail: ArticleDetail) -> ArticleModalState {
    ArticleModalState::Loaded {
        article_id: 1,
        detail,
    }
}

#[test]
fn hidden_draws_nothing() {
    let text = render_state(&ArticleModalState::Hidden);
    assert!(text.chars().all(|c| c == ' ' || c == '\n'));
}

#[test]
fn loading_shows_indicator_and_close() {
    let text = render_state(&ArticleModalState::Loading {
        article_id: 1,
        request_id: 1,
        animation_tick: 0,
    });
    assert!(text.contains("Loading"));
    assert!(text.contains("Close"));
}

#[test]
fn unselected_and_failed_show_indicator() {
    for state in [
        ArticleModalState::Unselected { animation_tick: 3 },
        ArticleModalState::Failed {
            article_id: 2,
            kind: FetchErrorKind::Decode,
            animation_tick: 0,
        },
    ] {
        let text = render_state(&state);
        assert!(text.contains("Loading"));
        assert!(text.contains("Close"));
    }
}

#[test]
fn loaded_shows_title_summary_and_thumbnail() {
    let text = render_state(&loaded(ArticleDetail {
        title: Some("Derby day".into()),
        summary: Some("Neighbours meet again.".into()),
        thumbnail: Some("https://img.test/derby.jpg".into()),
        ..ArticleDetail::default()
    }));
    assert!(text.contains("Derby day"));
    assert!(text.contains("Neighbours meet again."));
    assert!(text.contains("https://img.test/derby.jpg"));
    assert!(!text.contains(PLACEHOLDER));
    assert!(!text.contains("Loading"));
    assert!(text.contains("Close"));
}

#[test]
fn missing_thumbnail_uses_placeholder() {
    let text = render_state(&loaded(ArticleDetail {
        title: Some("No picture".into()),
        ..ArticleDetail::default()
    }));
    assert!(text.contains(PLACEHOLDER));
}

#[test]
fn optional_sections_render_only_when_present() {
    let bare = render_state(&loaded(ArticleDetail {
        title: Some("Bare".into()),
        ..ArticleDetail::default()
    }));
    assert!(!bare.contains("Teams"));
    assert!(!bare.contains("Sport"));

    let rich = render_state(&loaded(ArticleDetail {
        title: Some("Rich".into()),
        content: Some("Full match report.".into()),
        sport: Some(Sport {
            id: 1,
            name: Some("Rugby".into()),
        }),
        teams: Some(vec![
            Team {
                id: Some(1),
                name: Some("Lions".into()),
            },
            Team {
                id: Some(2),
                name: Some("Tigers".into()),
            },
        ]),
        ..ArticleDetail::default()
    }));
    assert!(rich.contains("Full match report."));
    assert!(rich.contains("Teams"));
    assert!(rich.contains("Lions"));
    assert!(rich.contains("Tigers"));
    assert!(rich.contains("Rugby"));
}

#[test]
fn app_draws_list_and_modal_over_it() {
    let mut app = App::new(Config::default());
    app.on_articles_fetched(Ok(vec![article(1, "Opening day"), article(2, "Trade deadline")]));

    let mut terminal = Terminal::new(TestBackend::new(100, 30)).unwrap();
    terminal.draw(|frame| draw(frame, &app)).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Opening day"));
    assert!(text.contains("Trade deadline"));
    assert!(!text.contains("Close"));

    app.open_selected();
    terminal.draw(|frame| draw(frame, &app)).unwrap();
    let text = screen_text(&terminal);
    assert!(text.contains("Loading"));
    assert!(text.contains("Close"));
}
