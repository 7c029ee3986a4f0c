use crossterm::event::{KeyCode, KeyEvent};

use crate::tui::app::App;

pub(super) fn handle_menu(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Char('c') => app.ask_clear(),
        KeyCode::Esc | KeyCode::Char('m') | KeyCode::Char('q') => app.close_menu(),
        _ => {}
    }
}
