//! Dialog rendering for the article modal.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::articles::ArticleDetail;
use crate::ui::layout::centered_rect;
use crate::ui::theme::{ACCENT, HEADER_TEXT, MUTED_TEXT, POPUP_BORDER, STATUS_ERROR, STATUS_OK};

use super::state::ArticleModalState;

/// Spinner animation frames.
const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const DIALOG_WIDTH_PERCENT: u16 = 80;
const DIALOG_HEIGHT_PERCENT: u16 = 80;

/// Render the article modal on top of the current frame.
///
/// `placeholder_thumbnail` is shown when the article carries no thumbnail.
pub fn render_article_modal(
    frame: &mut Frame,
    state: &ArticleModalState,
    placeholder_thumbnail: &str,
) {
    if !state.is_visible() {
        return;
    }

    let area = centered_rect(DIALOG_WIDTH_PERCENT, DIALOG_HEIGHT_PERCENT, frame.area());

    // Clear the area behind the dialog
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(" Article ")
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(POPUP_BORDER));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let sections = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(0), Constraint::Length(1)])
        .split(inner);

    match state.detail() {
        Some(detail) => render_detail(frame, sections[0], detail, placeholder_thumbnail),
        None => render_loading(frame, sections[0], state.animation_tick()),
    }

    frame.render_widget(Paragraph::new(close_button()).alignment(Alignment::Center), sections[1]);
}

fn render_loading(frame: &mut Frame, area: Rect, animation_tick: u8) {
    let spinner = SPINNER_FRAMES[(animation_tick as usize) % SPINNER_FRAMES.len()];

    let lines = vec![
        Line::from(""),
        Line::from(vec![
            Span::styled(format!("{} ", spinner), Style::default().fg(STATUS_OK)),
            Span::styled(
                "Loading",
                Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
            ),
        ]),
    ];

    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_detail(frame: &mut Frame, area: Rect, detail: &ArticleDetail, placeholder: &str) {
    let paragraph = Paragraph::new(detail_lines(detail, placeholder)).wrap(Wrap { trim: false });
    frame.render_widget(paragraph, area);
}

/// Lines of a loaded article. Optional sections appear only when present.
fn detail_lines<'a>(detail: &'a ArticleDetail, placeholder: &'a str) -> Vec<Line<'a>> {
    let text = Style::default().fg(HEADER_TEXT);
    let mut lines = vec![
        Line::from(Span::styled(
            detail.title.as_deref().unwrap_or_default(),
            Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(detail.summary.as_deref().unwrap_or_default(), text)),
        Line::from(""),
        Line::from(vec![
            Span::styled("Thumbnail: ", Style::default().fg(MUTED_TEXT)),
            Span::styled(detail.thumbnail_or(placeholder), Style::default().fg(MUTED_TEXT)),
        ]),
    ];

    if let Some(content) = detail.content.as_deref().filter(|c| !c.is_empty()) {
        lines.push(Line::from(""));
        lines.push(section_heading("Content:"));
        lines.push(Line::from(Span::styled(content, text)));
    }

    if let Some(teams) = &detail.teams {
        lines.push(Line::from(""));
        lines.push(section_heading("Teams:"));
        for team in teams {
            lines.push(Line::from(Span::styled(
                format!("  • {}", team.name.as_deref().unwrap_or_default()),
                text,
            )));
        }
    }

    if let Some(sport) = &detail.sport {
        lines.push(Line::from(""));
        lines.push(section_heading("Sport:"));
        lines.push(Line::from(Span::styled(
            sport.name.as_deref().unwrap_or_default(),
            text,
        )));
    }

    lines
}

fn section_heading(label: &'static str) -> Line<'static> {
    Line::from(Span::styled(
        label,
        Style::default().fg(HEADER_TEXT).add_modifier(Modifier::BOLD),
    ))
}

fn close_button() -> Line<'static> {
    Line::from(vec![
        Span::styled(
            " Close ",
            Style::default()
                .fg(HEADER_TEXT)
                .bg(STATUS_ERROR)
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled("  Esc", Style::default().fg(MUTED_TEXT)),
    ])
}
