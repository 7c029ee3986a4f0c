use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};

use crate::tui::app::App;
use crate::tui::click_areas::ClickTarget;
use crate::util::text;

use super::helpers::centered_rect_fixed;

const CANCEL_BUTTON: &str = "[n] Cancel";

/// Render the confirmation dialog for the pending destructive action
pub fn render_confirm_dialog(frame: &mut Frame, app: &mut App, area: Rect) {
    let Some(action) = app.confirm else {
        return;
    };
    let prompt = action.prompt();

    let bg = app.theme.background;
    let text_style = Style::default().fg(app.theme.text).bg(bg);
    let danger_style = Style::default()
        .fg(app.theme.danger)
        .bg(bg)
        .add_modifier(Modifier::BOLD);
    let confirm_button = format!("[y] {}", prompt.confirm_label);

    let popup_w = (text::cell_width(&prompt.message) as u16 + 4)
        .max(36)
        .min(area.width.saturating_sub(2));
    let popup = centered_rect_fixed(popup_w, 7, area);

    let lines = vec![
        Line::from(Span::styled(
            format!(" {}", prompt.title),
            Style::default()
                .fg(app.theme.text_bright)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(format!(" {}", prompt.message), text_style)),
        Line::from(""),
        Line::from(vec![
            Span::styled("  ", text_style),
            Span::styled(CANCEL_BUTTON, Style::default().fg(app.theme.dim).bg(bg)),
            Span::styled("   ", text_style),
            Span::styled(confirm_button.clone(), danger_style),
        ]),
    ];

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(app.theme.danger).bg(bg))
        .style(Style::default().bg(bg));
    let paragraph = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .style(Style::default().bg(bg));
    frame.render_widget(paragraph, popup);

    app.click_areas.push(popup, ClickTarget::Popup);
    if popup.height == 7 {
        let row = popup.y + 5;
        let cancel_x = popup.x + 1 + 2;
        let cancel_w = text::cell_width(CANCEL_BUTTON) as u16;
        let confirm_x = cancel_x + cancel_w + 3;
        let right_edge = popup.x + popup.width.saturating_sub(1);
        if confirm_x < right_edge {
            let confirm_w = (text::cell_width(&confirm_button) as u16).min(right_edge - confirm_x);
            app.click_areas
                .push(Rect::new(cancel_x, row, cancel_w, 1), ClickTarget::ConfirmNo);
            app.click_areas
                .push(Rect::new(confirm_x, row, confirm_w, 1), ClickTarget::ConfirmYes);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Bucket;
    use crate::ops::TaskList;
    use crate::tui::render::test_helpers::*;
    use crate::tui::theme::Theme;

    #[test]
    fn delete_dialog_text() {
        let mut app = App::new(TaskList::new().with_demo_tasks(), Theme::default());
        let id = app.tasks.tasks()[0].id();
        app.ask_delete(id);
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_dialog(frame, &mut app, area);
        });
        assert!(output.contains("Delete Task"));
        assert!(output.contains("Are you sure you want to delete this task?"));
        assert!(output.contains("[n] Cancel   [y] Delete"));
    }

    #[test]
    fn clear_dialog_fits_message() {
        let mut app = App::new(TaskList::new().with_filter(Bucket::Tomorrow), Theme::default());
        app.ask_clear();
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_dialog(frame, &mut app, area);
        });
        assert!(output.contains("Are you sure you want to clear all tomorrow tasks?"));
        assert!(output.contains("[y] Clear"));
    }

    #[test]
    fn buttons_are_recorded_over_popup() {
        let mut app = App::new(TaskList::new(), Theme::default());
        app.ask_clear();
        render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_dialog(frame, &mut app, area);
        });
        let yes = app.click_areas.rect_of(ClickTarget::ConfirmYes).unwrap();
        let no = app.click_areas.rect_of(ClickTarget::ConfirmNo).unwrap();
        assert_eq!(yes.y, no.y);
        assert!(no.x < yes.x);
        assert_eq!(app.click_areas.hit(yes.x, yes.y), Some(ClickTarget::ConfirmYes));
    }

    #[test]
    fn nothing_pending_draws_nothing() {
        let mut app = App::new(TaskList::new(), Theme::default());
        let output = render_to_string(TERM_W, TERM_H, |frame, area| {
            render_confirm_dialog(frame, &mut app, area);
        });
        assert_eq!(output, "");
    }
}
