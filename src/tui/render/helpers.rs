use ratatui::layout::Rect;
use ratatui::text::Span;

use crate::util::text;

/// Checkbox glyph for a task
pub(super) fn checkbox(completed: bool) -> &'static str {
    if completed { "[x]" } else { "[ ]" }
}

/// Total display width of a slice of spans
pub(super) fn spans_width(spans: &[Span]) -> usize {
    spans.iter().map(|s| text::cell_width(&s.content)).sum()
}

/// A `width` x `height` rect centered in `area`, clipped to it
pub(super) fn centered_rect_fixed(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width, height)
}

/// Pad `s` with spaces to exactly `width` cells (truncating if longer)
pub(super) fn pad_to(s: &str, width: usize) -> String {
    let fitted = text::fit_width(s, width);
    let pad = width.saturating_sub(text::cell_width(&fitted));
    format!("{}{}", fitted, " ".repeat(pad))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_centered_rect_fixed() {
        let area = Rect::new(0, 0, 80, 24);
        assert_eq!(centered_rect_fixed(40, 6, area), Rect::new(20, 9, 40, 6));
        assert_eq!(centered_rect_fixed(100, 6, area), Rect::new(0, 9, 80, 6));
    }

    #[test]
    fn test_pad_to() {
        assert_eq!(pad_to("ab", 4), "ab  ");
        assert_eq!(pad_to("abcdef", 4), "abc\u{2026}");
    }
}
