use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::tui::app::App;

/// Inline title editor. Enter saves; Esc also saves, matching a focus loss.
pub(super) fn handle_edit(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Enter) | (_, KeyCode::Esc) => app.commit_edit(),

        (m, KeyCode::Left) if m.contains(KeyModifiers::ALT) => app.caret_word_left(),
        (m, KeyCode::Right) if m.contains(KeyModifiers::ALT) => app.caret_word_right(),
        (_, KeyCode::Left) => app.caret_left(),
        (_, KeyCode::Right) => app.caret_right(),
        (_, KeyCode::Home) => app.caret_home(),
        (_, KeyCode::End) => app.caret_end(),
        (m, KeyCode::Char('a')) if m.contains(KeyModifiers::CONTROL) => app.caret_home(),
        (m, KeyCode::Char('e')) if m.contains(KeyModifiers::CONTROL) => app.caret_end(),
        (m, KeyCode::Char('u')) if m.contains(KeyModifiers::CONTROL) => app.kill_to_start(),

        (_, KeyCode::Backspace) => app.delete_backward(),
        (_, KeyCode::Delete) => app.delete_forward(),

        (m, KeyCode::Char(c))
            if !m.contains(KeyModifiers::CONTROL) && !m.contains(KeyModifiers::ALT) =>
        {
            let mut buf = [0u8; 4];
            app.insert_text(c.encode_utf8(&mut buf));
        }
        _ => {}
    }
}
