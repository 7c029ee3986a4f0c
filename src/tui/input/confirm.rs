use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::ops::Decision;
use crate::tui::app::App;

pub(super) fn handle_confirm(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (KeyModifiers::NONE, KeyCode::Char('y')) | (_, KeyCode::Enter) => {
            app.answer(Decision::Confirmed);
        }
        (KeyModifiers::NONE, KeyCode::Char('n')) | (_, KeyCode::Esc) => {
            app.answer(Decision::Cancelled);
        }
        _ => {}
    }
}
