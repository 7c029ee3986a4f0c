mod confirm;
mod edit;
mod menu;
mod mouse;
mod navigate;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::app::{App, Mode};

use confirm::handle_confirm;
use edit::handle_edit;
use menu::handle_menu;
use navigate::handle_navigate;

pub use mouse::handle_click;

/// Handle a key event in the current mode
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Ignore bare modifier key presses (Shift, Ctrl, Alt, etc.)
    if matches!(key.code, KeyCode::Modifier(_)) {
        return;
    }
    // Ctrl-C always quits; an open edit is committed first like any blur
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        if app.mode() == Mode::Edit {
            app.commit_edit();
        }
        app.should_quit = true;
        return;
    }
    app.status_message = None;

    match app.mode() {
        Mode::Navigate => handle_navigate(app, key),
        Mode::Edit => handle_edit(app, key),
        Mode::Confirm => handle_confirm(app, key),
        Mode::Menu => handle_menu(app, key),
    }
}

/// Handle a bracketed paste. Only the inline editor accepts text; newlines
/// become spaces since titles are single-line.
pub fn handle_paste(app: &mut App, text: &str) {
    if app.mode() != Mode::Edit || text.is_empty() {
        return;
    }
    let clean = text.replace("\r\n", " ").replace(['\n', '\r'], " ");
    app.insert_text(&clean);
}

/// Mouse wheel moves the cursor in the list
pub fn handle_scroll(app: &mut App, delta: i32) {
    if app.mode() == Mode::Navigate {
        app.move_cursor(delta);
    }
}


#[cfg(test)]
mod tests {
    use super::test_keys::*;
    use super::*;
    use crate::ops::TaskList;
    use crate::tui::theme::Theme;

    #[test]
    fn test_ctrl_c_commits_and_quits() {
        let mut app = App::new(TaskList::new(), Theme::default());
        app.create_task();
        app.insert_text("?");
        handle_key(&mut app, ctrl('c'));
        assert!(app.should_quit);
        assert!(app.tasks.edit_session().is_none());
        assert_eq!(app.tasks.tasks()[0].title, "New Task?");
    }

    #[test]
    fn test_paste_flattens_newlines() {
        let mut app = App::new(TaskList::new(), Theme::default());
        app.create_task();
        app.kill_to_start();
        handle_paste(&mut app, "eggs\nflour\r\nsugar");
        assert_eq!(app.draft(), "eggs flour sugar");
    }

    #[test]
    fn test_paste_ignored_outside_edit() {
        let mut app = App::new(TaskList::new().with_demo_tasks(), Theme::default());
        handle_paste(&mut app, "text");
        assert_eq!(app.tasks.tasks()[0].title, "Complete React Native app");
    }

    #[test]
    fn test_any_key_clears_status() {
        let mut app = App::new(TaskList::new(), Theme::default());
        app.status_message = Some("Deleted task".into());
        handle_key(&mut app, key(KeyCode::Down));
        assert!(app.status_message.is_none());
    }
}
