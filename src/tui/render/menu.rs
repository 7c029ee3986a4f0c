use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Clear, Paragraph};

use crate::tui::app::App;
use crate::tui::click_areas::ClickTarget;

use super::helpers::{centered_rect_fixed, pad_to};

/// Render the bucket menu popup
pub fn render_menu(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let key_style = Style::default().fg(app.theme.dim).bg(bg);
    let clear_label = format!("Clear {} tasks", app.tasks.active_filter());

    let popup = centered_rect_fixed(34, 4, area);
    let inner_w = popup.width.saturating_sub(2) as usize;
    let lines = vec![
        Line::from(vec![
            Span::styled(" c    ", key_style),
            Span::styled(
                pad_to(&clear_label, inner_w.saturating_sub(6)),
                Style::default().fg(app.theme.danger).bg(bg),
            ),
        ]),
        Line::from(vec![
            Span::styled(" esc  ", key_style),
            Span::styled(
                pad_to("Close", inner_w.saturating_sub(6)),
                Style::default().fg(app.theme.text).bg(bg),
            ),
        ]),
    ];

    frame.render_widget(Clear, popup);
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            " Menu ",
            Style::default()
                .fg(app.theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ))
        .border_style(Style::default().fg(app.theme.accent).bg(bg))
        .style(Style::default().bg(bg));
    frame.render_widget(Paragraph::new(lines).block(block), popup);

    app.click_areas.push(popup, ClickTarget::Popup);
    if popup.height >= 4 {
        let inner_x = popup.x + 1;
        let inner_w = popup.width.saturating_sub(2);
        app.click_areas.push(
            Rect::new(inner_x, popup.y + 1, inner_w, 1),
            ClickTarget::MenuClear,
        );
        app.click_areas.push(
            Rect::new(inner_x, popup.y + 2, inner_w, 1),
            ClickTarget::MenuClose,
        );
    }
}
