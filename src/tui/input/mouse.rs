use crate::ops::Decision;
use crate::tui::app::{App, Mode};
use crate::tui::click_areas::ClickTarget;

/// Left click at (col, row), resolved against the regions of the last frame
pub fn handle_click(app: &mut App, col: u16, row: u16) {
    let target = app.click_areas.hit(col, row);
    app.status_message = None;

    match app.mode() {
        // Dialogs are modal: only their buttons respond
        Mode::Confirm => match target {
            Some(ClickTarget::ConfirmYes) => app.answer(Decision::Confirmed),
            Some(ClickTarget::ConfirmNo) => app.answer(Decision::Cancelled),
            _ => {}
        },
        Mode::Menu => match target {
            Some(ClickTarget::MenuClear) => app.ask_clear(),
            Some(ClickTarget::Popup) => {}
            _ => app.close_menu(),
        },
        Mode::Edit => match target {
            Some(ClickTarget::EditInput) => {}
            Some(ClickTarget::SaveEdit) => app.commit_edit(),
            other => {
                // Clicking anywhere else takes focus from the input, which saves it
                app.commit_edit();
                if let Some(target) = other {
                    activate(app, target);
                }
            }
        },
        Mode::Navigate => {
            if let Some(target) = target {
                activate(app, target);
            }
        }
    }
}

fn activate(app: &mut App, target: ClickTarget) {
    match target {
        ClickTarget::Checkbox(id) | ClickTarget::Title(id) => app.toggle_task(id),
        ClickTarget::Edit(id) => app.start_edit(id),
        ClickTarget::Delete(id) => app.ask_delete(id),
        ClickTarget::Tab(bucket) => app.switch_filter(bucket),
        ClickTarget::MenuButton => app.open_menu(),
        ClickTarget::AddFooter | ClickTarget::EmptyState | ClickTarget::AddButton => {
            app.create_task()
        }
        ClickTarget::EditInput
        | ClickTarget::SaveEdit
        | ClickTarget::ConfirmYes
        | ClickTarget::ConfirmNo
        | ClickTarget::MenuClear
        | ClickTarget::MenuClose
        | ClickTarget::Popup => {}
    }
}
