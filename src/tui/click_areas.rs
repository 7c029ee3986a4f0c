use ratatui::layout::Rect;

use crate::model::{Bucket, TaskId};

/// Something the user can click
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Checkbox(TaskId),
    Title(TaskId),
    Edit(TaskId),
    Delete(TaskId),
    /// The text field of the row under edit
    EditInput,
    SaveEdit,
    Tab(Bucket),
    MenuButton,
    /// "Tap here to add a task" row below the list
    AddFooter,
    /// Placeholder panel shown for an empty bucket
    EmptyState,
    AddButton,
    ConfirmYes,
    ConfirmNo,
    MenuClear,
    MenuClose,
    /// Inside a popup but not on a button
    Popup,
}

/// Clickable regions recorded while rendering the current frame
#[derive(Debug, Default, Clone)]
pub struct ClickAreas {
    targets: Vec<(Rect, ClickTarget)>,
}

impl ClickAreas {
    pub fn reset(&mut self) {
        self.targets.clear();
    }

    pub fn push(&mut self, rect: Rect, target: ClickTarget) {
        if rect.width > 0 && rect.height > 0 {
            self.targets.push((rect, target));
        }
    }

    /// Topmost target at (col, row); later pushes sit above earlier ones
    pub fn hit(&self, col: u16, row: u16) -> Option<ClickTarget> {
        self.targets
            .iter()
            .rev()
            .find(|(rect, _)| contains(rect, col, row))
            .map(|(_, target)| *target)
    }

    /// Region recorded for `target`, if it was drawn
    pub fn rect_of(&self, target: ClickTarget) -> Option<Rect> {
        self.targets
            .iter()
            .rev()
            .find(|(_, t)| *t == target)
            .map(|(rect, _)| *rect)
    }
}

/// Whether (col, row) falls inside `rect`
pub fn contains(rect: &Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_edges() {
        let r = Rect::new(2, 3, 4, 1);
        assert!(contains(&r, 2, 3));
        assert!(contains(&r, 5, 3));
        assert!(!contains(&r, 6, 3));
        assert!(!contains(&r, 2, 4));
    }

    #[test]
    fn test_hit_prefers_topmost() {
        let mut areas = ClickAreas::default();
        areas.push(Rect::new(0, 0, 10, 10), ClickTarget::EmptyState);
        areas.push(Rect::new(2, 2, 3, 1), ClickTarget::ConfirmYes);
        assert_eq!(areas.hit(3, 2), Some(ClickTarget::ConfirmYes));
        assert_eq!(areas.hit(0, 0), Some(ClickTarget::EmptyState));
        assert_eq!(areas.hit(20, 20), None);
    }

    #[test]
    fn test_zero_sized_rects_are_ignored() {
        let mut areas = ClickAreas::default();
        areas.push(Rect::new(0, 0, 0, 1), ClickTarget::AddButton);
        assert_eq!(areas.rect_of(ClickTarget::AddButton), None);
    }
}
