use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Task;
use crate::tui::app::{App, Mode};
use crate::tui::click_areas::ClickTarget;
use crate::util::text;

use super::helpers::{checkbox, pad_to};

/// Cells left of the title: space, checkbox, space
const LEAD_W: u16 = 5;
const EDIT_LABEL: &str = " edit ";
const DELETE_LABEL: &str = " del ";
const SAVE_LABEL: &str = " [\u{2713}] ";
const EMPTY_TEXT: &str = "Click to add a task";
const FOOTER_TEXT: &str = "Tap here to add a task";

/// Render the visible bucket: one row per task plus the add-task footer,
/// or the empty-state panel when the bucket has no tasks
pub fn render_task_list(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.height == 0 || area.width == 0 {
        return;
    }
    let visible: Vec<Task> = app.tasks.visible_tasks().cloned().collect();
    if visible.is_empty() {
        render_empty_state(frame, app, area);
        return;
    }

    // Keep the cursor row on screen; the footer counts as one extra row
    let height = area.height as usize;
    let total_rows = visible.len() + 1;
    if app.cursor < app.scroll_offset {
        app.scroll_offset = app.cursor;
    } else if app.cursor >= app.scroll_offset + height {
        app.scroll_offset = app.cursor + 1 - height;
    }
    app.scroll_offset = app.scroll_offset.min(total_rows.saturating_sub(height));

    let end = (app.scroll_offset + height).min(total_rows);
    for (row, index) in (app.scroll_offset..end).enumerate() {
        let row_area = Rect::new(area.x, area.y + row as u16, area.width, 1);
        match visible.get(index) {
            Some(task) if app.tasks.is_editing(task.id()) => {
                render_edit_row(frame, app, row_area);
            }
            Some(task) => {
                let is_cursor = index == app.cursor && app.mode() == Mode::Navigate;
                render_task_row(frame, app, task, is_cursor, row_area);
            }
            None => render_footer(frame, app, row_area),
        }
    }
}

fn render_task_row(frame: &mut Frame, app: &mut App, task: &Task, is_cursor: bool, area: Rect) {
    let bg = if is_cursor {
        app.theme.selection_bg
    } else {
        app.theme.background
    };
    let actions_w = (text::cell_width(EDIT_LABEL) + text::cell_width(DELETE_LABEL)) as u16;
    let show_actions = area.width >= LEAD_W + actions_w + 4;
    let title_w = if show_actions {
        area.width - LEAD_W - actions_w - 1
    } else {
        area.width.saturating_sub(LEAD_W)
    };

    let check_style = if task.completed {
        Style::default()
            .fg(app.theme.accent)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.dim).bg(bg)
    };
    let title_style = if task.completed {
        Style::default()
            .fg(app.theme.dim)
            .bg(bg)
            .add_modifier(Modifier::CROSSED_OUT)
    } else if is_cursor {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text_bright).bg(bg)
    };

    let mut spans = vec![
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(checkbox(task.completed), check_style),
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(pad_to(&task.title, title_w as usize), title_style),
    ];

    let id = task.id();
    app.click_areas
        .push(Rect::new(area.x + 1, area.y, 3, 1), ClickTarget::Checkbox(id));
    app.click_areas.push(
        Rect::new(area.x + LEAD_W, area.y, title_w, 1),
        ClickTarget::Title(id),
    );

    if show_actions {
        spans.push(Span::styled(" ", Style::default().bg(bg)));
        spans.push(Span::styled(
            EDIT_LABEL,
            Style::default().fg(app.theme.accent).bg(bg),
        ));
        spans.push(Span::styled(
            DELETE_LABEL,
            Style::default().fg(app.theme.danger).bg(bg),
        ));
        let edit_x = area.x + area.width - actions_w;
        let edit_w = text::cell_width(EDIT_LABEL) as u16;
        app.click_areas
            .push(Rect::new(edit_x, area.y, edit_w, 1), ClickTarget::Edit(id));
        app.click_areas.push(
            Rect::new(edit_x + edit_w, area.y, actions_w - edit_w, 1),
            ClickTarget::Delete(id),
        );
    }

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(bg)),
        area,
    );
}

fn render_edit_row(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let save_w = text::cell_width(SAVE_LABEL) as u16;
    let field_w = area.width.saturating_sub(LEAD_W + save_w + 1);

    let draft = app.draft().to_string();
    let caret = app.edit_cursor.min(draft.len());
    let start = window_start(&draft, caret, field_w as usize);
    let shown = text::take_width(&draft[start..], field_w as usize);
    let field = format!(
        "{}{}",
        shown,
        " ".repeat((field_w as usize).saturating_sub(text::cell_width(shown)))
    );

    let spans = vec![
        Span::styled(" ".repeat(LEAD_W as usize), Style::default().bg(bg)),
        Span::styled(
            field,
            Style::default()
                .fg(app.theme.text_bright)
                .bg(app.theme.input_bg),
        ),
        Span::styled(" ", Style::default().bg(bg)),
        Span::styled(
            SAVE_LABEL,
            Style::default()
                .fg(app.theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ),
    ];
    frame.render_widget(Paragraph::new(Line::from(spans)), area);

    app.click_areas.push(
        Rect::new(area.x + LEAD_W, area.y, field_w, 1),
        ClickTarget::EditInput,
    );
    if area.width >= LEAD_W + save_w {
        app.click_areas.push(
            Rect::new(area.x + area.width - save_w, area.y, save_w, 1),
            ClickTarget::SaveEdit,
        );
    }

    // Terminal caret inside the field
    if app.mode() == Mode::Edit && field_w > 0 {
        let col = text::cell_width(&draft[start..caret]) as u16;
        frame.set_cursor_position((area.x + LEAD_W + col.min(field_w - 1), area.y));
    }
}

/// First byte of the draft to show so that the caret stays inside a field
/// `width` cells wide
fn window_start(draft: &str, caret: usize, width: usize) -> usize {
    let mut start = 0;
    while width > 0 && start < caret && text::cell_width(&draft[start..caret]) >= width {
        match text::next_boundary(draft, start) {
            Some(next) => start = next,
            None => break,
        }
    }
    start
}

fn render_footer(frame: &mut Frame, app: &mut App, area: Rect) {
    let footer = Paragraph::new(FOOTER_TEXT)
        .alignment(Alignment::Center)
        .style(Style::default().fg(app.theme.dim).bg(app.theme.background));
    frame.render_widget(footer, area);
    app.click_areas.push(area, ClickTarget::AddFooter);
}

fn render_empty_state(frame: &mut Frame, app: &mut App, area: Rect) {
    let style = Style::default().fg(app.theme.dim).bg(app.theme.background);
    let lines = vec![
        Line::from(Span::styled("+", style.add_modifier(Modifier::BOLD))),
        Line::from(""),
        Line::from(Span::styled(EMPTY_TEXT, style)),
    ];
    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let inner = Rect::new(area.x, area.y + top, area.width, area.height - top);
    frame.render_widget(
        Paragraph::new(lines).alignment(Alignment::Center).style(style),
        inner,
    );
    app.click_areas.push(area, ClickTarget::EmptyState);
}
