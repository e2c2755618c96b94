use crate::ui::theme::{GLOBAL_BORDER, HEADER_TEXT};
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

const VERSION: &str = env!("CARGO_PKG_VERSION");

const LIST_HINTS: &str = " ↑/↓: Select │ Enter: Open │ r: Reload │ q: Quit";
const MODAL_HINTS: &str = " n/p: Next/Prev │ Esc/c: Close │ v: Toggle │ Ctrl+C: Quit";

pub struct Footer {
    modal_open: bool,
}

impl Footer {
    pub fn new(modal_open: bool) -> Self {
        Self { modal_open }
    }

    pub fn widget(&self, area: Rect) -> Paragraph<'static> {
        let hints = if self.modal_open {
            MODAL_HINTS
        } else {
            LIST_HINTS
        };
        let version = format!("v{} ", VERSION);

        // Calculate padding using char count, not byte count (for Unicode)
        let hints_width = hints.chars().count();
        let version_width = version.chars().count();
        let content_width = area.width.saturating_sub(2) as usize; // minus borders
        let padding = content_width
            .saturating_sub(hints_width)
            .saturating_sub(version_width);

        let text_style = Style::default().fg(HEADER_TEXT).add_modifier(Modifier::DIM);

        let line = Line::from(vec![
            Span::styled(hints, text_style),
            Span::styled(" ".repeat(padding), text_style),
            Span::styled(version, text_style),
        ]);

        Paragraph::new(line)
            .style(text_style)
            .alignment(Alignment::Left)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(GLOBAL_BORDER)),
            )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hint_text(modal_open: bool) -> String {
        let area = Rect::new(0, 0, 120, 3);
        let mut buffer = ratatui::buffer::Buffer::empty(area);
        ratatui::widgets::Widget::render(Footer::new(modal_open).widget(area), area, &mut buffer);
        (0..area.width)
            .map(|x| buffer[(x, 1)].symbol().to_string())
            .collect()
    }

    #[test]
    fn modal_hints_list_every_modal_key() {
        let text = hint_text(true);
        assert!(text.contains("Esc/c: Close"));
        assert!(text.contains("v: Toggle"));
        assert!(text.contains("n/p"));
    }

    #[test]
    fn list_hints_show_open_and_reload() {
        let text = hint_text(false);
        assert!(text.contains("Enter: Open"));
        assert!(text.contains("r: Reload"));
    }
}
