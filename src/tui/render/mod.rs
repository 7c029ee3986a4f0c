pub mod confirm_dialog;
pub mod header;
pub mod helpers;
pub mod menu;
pub mod status_row;
pub mod task_list;

#[cfg(test)]
pub mod test_helpers;

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout};
use ratatui::style::Style;
use ratatui::widgets::Block;

use super::app::App;

/// Draw the whole screen and record the click regions for this frame
pub fn render(frame: &mut Frame, app: &mut App) {
    let area = frame.area();
    app.click_areas.reset();

    // Background fill
    let bg_style = Style::default().bg(app.theme.background);
    frame.render_widget(Block::default().style(bg_style), area);

    // Layout: header (3 rows) | task list | status row (1 row)
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // title, tabs, separator
            Constraint::Min(1),    // task list
            Constraint::Length(1), // status row
        ])
        .split(area);

    header::render_header(frame, app, chunks[0]);
    task_list::render_task_list(frame, app, chunks[1]);
    status_row::render_status_row(frame, app, chunks[2]);

    // Popups (rendered on top of everything)
    if app.menu_open {
        menu::render_menu(frame, app, area);
    }
    if app.confirm.is_some() {
        confirm_dialog::render_confirm_dialog(frame, app, area);
    }
}
