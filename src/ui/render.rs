use crate::ui::app::App;
use crate::ui::article_modal::render_article_modal;
use crate::ui::footer::Footer;
use crate::ui::header::Header;
use crate::ui::layout::layout_regions;
use crate::ui::theme::{ACTIVE_HIGHLIGHT, HEADER_TEXT, MUTED_TEXT};
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, List, ListItem, ListState, Paragraph};
use ratatui::Frame;

pub fn draw(frame: &mut Frame, app: &App) {
    let (header, body, footer) = layout_regions(frame.area());

    let header_widget = Header::new(&app.state().source, app.articles().len())
        .loading(app.is_list_loading())
        .error(app.last_error());
    frame.render_widget(header_widget.widget(), header);

    draw_article_list(frame, body, app);

    let footer_widget = Footer::new(app.modal().is_visible());
    frame.render_widget(footer_widget.widget(footer), footer);

    render_article_modal(frame, app.modal(), app.placeholder_thumbnail());
}

fn draw_article_list(frame: &mut Frame, area: Rect, app: &App) {
    let block = Block::default().title(" Articles ").borders(Borders::ALL);

    if app.articles().is_empty() {
        let message = if app.is_list_loading() {
            "Loading articles..."
        } else {
            "No articles. Press r to reload."
        };
        let paragraph = Paragraph::new(Line::from(Span::styled(
            message,
            Style::default().fg(MUTED_TEXT),
        )))
        .block(block);
        frame.render_widget(paragraph, area);
        return;
    }

    let items: Vec<ListItem> = app
        .articles()
        .iter()
        .map(|article| {
            let mut spans = vec![Span::styled(
                article.title.as_str(),
                Style::default().fg(HEADER_TEXT),
            )];
            if let Some(sport) = article.sport.as_ref().and_then(|s| s.name.as_deref()) {
                spans.push(Span::styled(
                    format!("  [{}]", sport),
                    Style::default().fg(MUTED_TEXT),
                ));
            }
            if let Some(date) = article.date.as_deref() {
                spans.push(Span::styled(
                    format!("  {}", date),
                    Style::default().fg(MUTED_TEXT),
                ));
            }
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(
            Style::default()
                .bg(ACTIVE_HIGHLIGHT)
                .add_modifier(Modifier::BOLD),
        )
        .highlight_symbol("> ");

    let mut list_state = ListState::default();
    list_state.select(Some(app.selection()));
    frame.render_stateful_widget(list, area, &mut list_state);
}
