use crate::ui::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    if app.modal().is_visible() {
        match key.code {
            KeyCode::Esc | KeyCode::Char('c') => app.close_modal(),
            KeyCode::Char('v') => app.toggle_modal(),
            KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('n') => app.move_selection(1),
            KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('p') => app.move_selection(-1),
            _ => {}
        }
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => app.request_quit(),
        KeyCode::Down | KeyCode::Char('j') => app.move_selection(1),
        KeyCode::Up | KeyCode::Char('k') => app.move_selection(-1),
        KeyCode::Enter => app.open_selected(),
        KeyCode::Char('v') => app.toggle_modal(),
        KeyCode::Char('r') => app.request_articles(),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, ch: char) -> bool {
    key.modifiers.contains(KeyModifiers::CONTROL)
        && matches!(key.code, KeyCode::Char(c) if c.eq_ignore_ascii_case(&ch))
}
