use crate::ui::app::{App, Focus};
use crate::ui::dialog::{DialogIntent, DialogState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    if is_ctrl_char(key, 'q') || is_ctrl_char(key, 'c') {
        app.request_quit();
        return;
    }

    match app.dialog() {
        DialogState::Add(_) | DialogState::Edit(_) => handle_form_key(app, key),
        DialogState::ConfirmDelete => handle_confirm_key(app, key),
        DialogState::Hidden => match app.focus() {
            Focus::Search => handle_search_key(app, key),
            Focus::List => handle_list_key(app, key),
        },
    }
}

fn handle_form_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.dismiss_dialog(),
        KeyCode::Enter => app.submit_form(),
        KeyCode::Tab | KeyCode::Down => app.dispatch_dialog(DialogIntent::FocusNext),
        KeyCode::BackTab | KeyCode::Up => app.dispatch_dialog(DialogIntent::FocusPrev),
        KeyCode::Backspace => app.dispatch_dialog(DialogIntent::Backspace),
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.dispatch_dialog(DialogIntent::Input(ch))
        }
        _ => {}
    }
}

fn handle_confirm_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('y') | KeyCode::Char('Y') | KeyCode::Enter => app.confirm_delete(),
        KeyCode::Char('n') | KeyCode::Char('N') | KeyCode::Esc => app.close_delete_confirm(),
        _ => {}
    }
}

fn handle_search_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => app.set_focus(Focus::List),
        KeyCode::Backspace => app.pop_search_char(),
        KeyCode::Down => {
            app.set_focus(Focus::List);
            app.move_highlight(1);
        }
        KeyCode::Char(ch) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.push_search_char(ch)
        }
        _ => {}
    }
}

fn handle_list_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('q') => app.request_quit(),
        KeyCode::Char('/') => app.set_focus(Focus::Search),
        KeyCode::Up | KeyCode::Char('k') => app.move_highlight(-1),
        KeyCode::Down | KeyCode::Char('j') => app.move_highlight(1),
        KeyCode::Enter => app.select_highlighted(),
        KeyCode::Char('a') => app.open_add(),
        KeyCode::Char('e') => app.open_edit(),
        KeyCode::Char('d') | KeyCode::Delete => app.open_delete_confirm(),
        KeyCode::Char('r') => app.load_all(),
        KeyCode::Esc if !app.search_text().is_empty() => app.set_search_text(""),
        _ => {}
    }
}

fn is_ctrl_char(key: KeyEvent, needle: char) -> bool {
    matches!(key.code, KeyCode::Char(ch) if ch.eq_ignore_ascii_case(&needle))
        && key.modifiers.contains(KeyModifiers::CONTROL)
}
