//! Grapheme- and width-aware helpers for single-line text.

use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

/// Width of `s` in terminal cells
pub fn cell_width(s: &str) -> usize {
    UnicodeWidthStr::width(s)
}

/// Cut `s` down to at most `max_cells` cells, ending in `…` when shortened
pub fn fit_width(s: &str, max_cells: usize) -> String {
    if cell_width(s) <= max_cells {
        return s.to_string();
    }
    if max_cells == 0 {
        return String::new();
    }
    let budget = max_cells - 1;
    let mut used = 0;
    let mut out = String::new();
    for g in s.graphemes(true) {
        let w = cell_width(g);
        if used + w > budget {
            break;
        }
        used += w;
        out.push_str(g);
    }
    out.push('\u{2026}');
    out
}

/// Longest prefix of `s` that fits in `max_cells` cells
pub fn take_width(s: &str, max_cells: usize) -> &str {
    let mut used = 0;
    for (i, g) in s.grapheme_indices(true) {
        let w = cell_width(g);
        if used + w > max_cells {
            return &s[..i];
        }
        used += w;
    }
    s
}

/// Byte offset of the grapheme after the one at `offset`, if any
pub fn next_boundary(s: &str, offset: usize) -> Option<usize> {
    let rest = s.get(offset..)?;
    let first = rest.graphemes(true).next()?;
    Some(offset + first.len())
}

/// Byte offset of the grapheme before `offset`, if any
pub fn prev_boundary(s: &str, offset: usize) -> Option<usize> {
    let head = s.get(..offset)?;
    head.grapheme_indices(true).next_back().map(|(i, _)| i)
}

/// Cell column of byte `offset`
pub fn column_at(s: &str, offset: usize) -> usize {
    cell_width(&s[..offset.min(s.len())])
}

/// Start of the word left of `offset` (whitespace-delimited)
pub fn word_start(s: &str, offset: usize) -> usize {
    let head = &s[..offset.min(s.len())];
    let trimmed = head.trim_end();
    match trimmed.rfind(char::is_whitespace) {
        Some(i) => i + trimmed[i..].chars().next().map_or(1, char::len_utf8),
        None => 0,
    }
}

/// Start of the next word right of `offset` (or the end of `s`)
pub fn next_word_start(s: &str, offset: usize) -> usize {
    let offset = offset.min(s.len());
    let rest = &s[offset..];
    let word_end = rest.find(char::is_whitespace).unwrap_or(rest.len());
    let after = &rest[word_end..];
    let gap = after.len() - after.trim_start().len();
    offset + word_end + gap
}
