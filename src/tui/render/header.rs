use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Bucket;
use crate::tui::app::App;
use crate::tui::click_areas::ClickTarget;
use crate::util::text;

const MENU_BUTTON: &str = " \u{22EF} ";

/// Render the header: title + date, bucket tabs with menu button, separator
pub fn render_header(frame: &mut Frame, app: &mut App, area: Rect) {
    if area.height == 0 {
        return;
    }
    render_title_row(frame, app, Rect { height: 1, ..area });
    if area.height > 1 {
        render_tabs(frame, app, Rect::new(area.x, area.y + 1, area.width, 1));
    }
    if area.height > 2 {
        let sep = "\u{2500}".repeat(area.width as usize);
        frame.render_widget(
            Paragraph::new(sep).style(Style::default().fg(app.theme.dim).bg(app.theme.background)),
            Rect::new(area.x, area.y + 2, area.width, 1),
        );
    }
}

fn render_title_row(frame: &mut Frame, app: &App, area: Rect) {
    let bg = app.theme.background;
    let title = " Tasks";
    let date = app
        .date_of(app.tasks.active_filter())
        .format("%a, %b %-d ")
        .to_string();

    let mut spans = vec![Span::styled(
        title,
        Style::default()
            .fg(app.theme.text_bright)
            .bg(bg)
            .add_modifier(Modifier::BOLD),
    )];
    let used = text::cell_width(title) + text::cell_width(&date);
    let width = area.width as usize;
    if used < width {
        spans.push(Span::styled(" ".repeat(width - used), Style::default().bg(bg)));
        spans.push(Span::styled(date, Style::default().fg(app.theme.dim).bg(bg)));
    }
    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn render_tabs(frame: &mut Frame, app: &mut App, area: Rect) {
    let bg = app.theme.background;
    let mut spans: Vec<Span> = vec![Span::styled(" ", Style::default().bg(bg))];
    let mut col = 1usize;

    for bucket in Bucket::ALL {
        let label = format!(" {} {} ", bucket.label(), app.tasks.count(bucket));
        let w = text::cell_width(&label);
        let is_current = app.tasks.active_filter() == bucket;
        if col + w <= area.width as usize {
            app.click_areas.push(
                Rect::new(area.x + col as u16, area.y, w as u16, 1),
                ClickTarget::Tab(bucket),
            );
        }
        spans.push(Span::styled(label, tab_style(app, is_current)));
        col += w;
    }

    // Menu button, right-aligned
    let menu_w = text::cell_width(MENU_BUTTON);
    let width = area.width as usize;
    if col + menu_w < width {
        spans.push(Span::styled(
            " ".repeat(width - col - menu_w),
            Style::default().bg(bg),
        ));
        spans.push(Span::styled(
            MENU_BUTTON,
            Style::default()
                .fg(app.theme.accent)
                .bg(bg)
                .add_modifier(Modifier::BOLD),
        ));
        app.click_areas.push(
            Rect::new(area.x + (width - menu_w) as u16, area.y, menu_w as u16, 1),
            ClickTarget::MenuButton,
        );
    }

    frame.render_widget(Paragraph::new(Line::from(spans)), area);
}

/// Style for a tab: highlighted if current, normal otherwise
fn tab_style(app: &App, is_current: bool) -> Style {
    if is_current {
        Style::default()
            .fg(app.theme.text_bright)
            .bg(app.theme.selection_bg)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(app.theme.text).bg(app.theme.background)
    }
}
