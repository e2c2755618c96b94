use crate::ui::theme::{ACCENT, GLOBAL_BORDER, HEADER_SEPARATOR, HEADER_TEXT, STATUS_ERROR, STATUS_OK};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

/// Top bar: source endpoint, article count, list status.
pub struct Header<'a> {
    source: &'a str,
    count: usize,
    loading: bool,
    error: Option<&'a str>,
}

impl<'a> Header<'a> {
    pub fn new(source: &'a str, count: usize) -> Self {
        Self {
            source,
            count,
            loading: false,
            error: None,
        }
    }

    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    pub fn error(mut self, error: Option<&'a str>) -> Self {
        self.error = error;
        self
    }

    pub fn widget(&self) -> Paragraph<'a> {
        let text_style = Style::default().fg(HEADER_TEXT);
        let separator_style = Style::default().fg(HEADER_SEPARATOR);

        let (status, status_style) = match (self.error, self.loading) {
            (Some(_), _) => ("error", Style::default().fg(STATUS_ERROR)),
            (None, true) => ("loading", Style::default().fg(HEADER_TEXT)),
            (None, false) => ("ready", Style::default().fg(STATUS_OK)),
        };

        let mut spans = vec![
            Span::styled("  ", text_style),
            Span::styled(
                "newsdesk",
                Style::default().fg(ACCENT).add_modifier(Modifier::BOLD),
            ),
            Span::styled("  │  ", separator_style),
            Span::styled(self.source, text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(format!("{} articles", self.count), text_style),
            Span::styled("  │  ", separator_style),
            Span::styled(status, status_style),
        ];
        if let Some(error) = self.error {
            spans.push(Span::styled(format!(": {}", error), status_style));
        }

        Paragraph::new(Line::from(spans)).block(
            Block::default()
                .borders(Borders::TOP | Borders::BOTTOM)
                .border_style(Style::default().fg(GLOBAL_BORDER)),
        )
    }
}
