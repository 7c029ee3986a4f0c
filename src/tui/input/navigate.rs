use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::Bucket;
use crate::tui::app::App;

pub(super) fn handle_navigate(app: &mut App, key: KeyEvent) {
    match (key.modifiers, key.code) {
        (_, KeyCode::Char('q')) => app.should_quit = true,

        // Cursor
        (_, KeyCode::Down) | (KeyModifiers::NONE, KeyCode::Char('j')) => app.move_cursor(1),
        (_, KeyCode::Up) | (KeyModifiers::NONE, KeyCode::Char('k')) => app.move_cursor(-1),
        (_, KeyCode::Home) | (KeyModifiers::NONE, KeyCode::Char('g')) => app.jump_to_top(),
        (_, KeyCode::End) | (_, KeyCode::Char('G')) => app.jump_to_bottom(),

        // Filter
        (_, KeyCode::Tab) | (_, KeyCode::BackTab) | (KeyModifiers::NONE, KeyCode::Char('t')) => {
            let other = app.tasks.active_filter().other();
            app.switch_filter(other);
        }
        (KeyModifiers::NONE, KeyCode::Char('1')) => app.switch_filter(Bucket::Today),
        (KeyModifiers::NONE, KeyCode::Char('2')) => app.switch_filter(Bucket::Tomorrow),

        // Task actions
        (KeyModifiers::NONE, KeyCode::Char('a')) | (KeyModifiers::NONE, KeyCode::Char('n')) => {
            app.create_task();
        }
        (KeyModifiers::NONE, KeyCode::Char(' ')) | (KeyModifiers::NONE, KeyCode::Char('x')) => {
            if let Some(id) = app.cursor_task_id() {
                app.toggle_task(id);
            }
        }
        (_, KeyCode::Enter) | (KeyModifiers::NONE, KeyCode::Char('e')) => {
            if let Some(id) = app.cursor_task_id() {
                app.start_edit(id);
            }
        }
        (_, KeyCode::Delete) | (KeyModifiers::NONE, KeyCode::Char('d')) => {
            if let Some(id) = app.cursor_task_id() {
                app.ask_delete(id);
            }
        }

        (KeyModifiers::NONE, KeyCode::Char('m')) => app.open_menu(),
        _ => {}
    }
}
