use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::tui::app::{App, Mode};
use crate::tui::click_areas::ClickTarget;
use crate::util::text;

const ADD_BUTTON: &str = " [+] ";

/// Key hints for each mode
fn hints(mode: Mode) -> &'static str {
    match mode {
        Mode::Navigate => "a add  space toggle  e edit  d delete  tab switch  m menu  q quit",
        Mode::Edit => "enter save  esc save  ctrl-u clear",
        Mode::Confirm => "y confirm  n cancel",
        Mode::Menu => "c clear  esc close",
    }
}

/// Render the status row (bottom of screen): add button, then either the
/// last status message or key hints
pub fn render_status_row(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let add_w = text::cell_width(ADD_BUTTON);
    let width = area.width as usize;

    let mut spans = Vec::new();
    if width >= add_w {
        spans.push(Span::styled(
            ADD_BUTTON,
            Style::default()
                .fg(app.theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
        app.click_areas.push(
            Rect::new(area.x, area.y, add_w as u16, 1),
            ClickTarget::AddButton,
        );
    }

    let room = width.saturating_sub(add_w + 1);
    let (body, style) = match &app.status_message {
        Some(msg) => (msg.as_str(), Style::default().fg(app.theme.text_bright).bg(bg)),
        None => (hints(app.mode()), Style::default().fg(app.theme.dim).bg(bg)),
    };
    spans.push(Span::styled(" ", Style::default().bg(bg)));
    spans.push(Span::styled(text::fit_width(body, room), style));

    let paragraph = Paragraph::new(Line::from(spans)).style(Style::default().bg(bg));
    frame.render_widget(paragraph, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ops::TaskList;
    use crate::tui::render::test_helpers::*;
    use crate::tui::theme::Theme;

    #[test]
    fn navigate_hints() {
        let mut app = App::new(TaskList::new(), Theme::default());
        let output = render_to_string(80, 1, |frame, area| {
            render_status_row(frame, &mut app, area);
        });
        assert_eq!(
            output,
            " [+]  a add  space toggle  e edit  d delete  tab switch  m menu  q quit"
        );
    }

    #[test]
    fn status_message_replaces_hints() {
        let mut app = App::new(TaskList::new(), Theme::default());
        app.status_message = Some("Deleted task".into());
        let output = render_to_string(40, 1, |frame, area| {
            render_status_row(frame, &mut app, area);
        });
        assert_eq!(output, " [+]  Deleted task");
    }

    #[test]
    fn hints_are_truncated() {
        let mut app = App::new(TaskList::new(), Theme::default());
        let output = render_to_string(20, 1, |frame, area| {
            render_status_row(frame, &mut app, area);
        });
        assert_eq!(output, " [+]  a add  space \u{2026}");
    }
}
