/// Rows one card occupies in the gallery body: caption, thumbnail URL,
/// stats, separator.
pub const CARD_ROWS: u16 = 4;

/// Scroll and selection state of the gallery body.
///
/// Pure bookkeeping over row arithmetic; knows nothing about hits beyond
/// their count.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GalleryView {
    /// Index of the selected card.
    pub selected: usize,
    /// First visible row of the rendered card column.
    pub offset: u16,
}

impl GalleryView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Back to the top; used after a successful new search so the fresh
    /// results are in view.
    pub fn reset(&mut self) {
        self.selected = 0;
        self.offset = 0;
    }

    pub fn move_selection(&mut self, delta: isize, len: usize) {
        if len == 0 {
            self.selected = 0;
            return;
        }
        let max = len - 1;
        let next = self.selected as isize + delta;
        self.selected = next.clamp(0, max as isize) as usize;
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self, len: usize) {
        self.selected = len.saturating_sub(1);
    }

    /// Keep the selected card fully inside the viewport.
    pub fn ensure_visible(&mut self, viewport_rows: u16) {
        if viewport_rows == 0 {
            return;
        }
        let top = self.selected as u16 * CARD_ROWS;
        let bottom = top + CARD_ROWS;
        if top < self.offset {
            self.offset = top;
        } else if bottom > self.offset + viewport_rows {
            self.offset = bottom - viewport_rows;
        }
    }

    /// Clamp selection after the hit list changed underneath us.
    pub fn clamp(&mut self, len: usize) {
        if len == 0 {
            self.selected = 0;
            self.offset = 0;
        } else if self.selected >= len {
            self.selected = len - 1;
        }
    }

    /// Total rows the card column occupies, tail line included.
    pub fn total_rows(len: usize) -> u16 {
        (len as u16).saturating_mul(CARD_ROWS).saturating_add(1)
    }

    /// Scroll-proximity check: viewport bottom within `threshold` rows of
    /// the end of the rendered cards.
    pub fn near_bottom(&self, len: usize, viewport_rows: u16, threshold: u16) -> bool {
        if len == 0 {
            return false;
        }
        let total = Self::total_rows(len);
        self.offset + viewport_rows + threshold >= total
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selection_clamps_to_bounds() {
        let mut view = GalleryView::new();
        view.move_selection(-3, 10);
        assert_eq!(view.selected, 0);
        view.move_selection(100, 10);
        assert_eq!(view.selected, 9);
    }

    #[test]
    fn ensure_visible_scrolls_down_and_up() {
        let mut view = GalleryView::new();
        view.selected = 5;
        view.ensure_visible(8);
        // card 5 spans rows 20..24; viewport of 8 rows must end at 24
        assert_eq!(view.offset, 16);
        view.selected = 0;
        view.ensure_visible(8);
        assert_eq!(view.offset, 0);
    }

    #[test]
    fn near_bottom_respects_threshold() {
        let mut view = GalleryView::new();
        // 10 cards -> 41 rows total
        assert!(!view.near_bottom(10, 12, 3));
        view.offset = 26;
        assert!(view.near_bottom(10, 12, 3));
    }

    #[test]
    fn near_bottom_is_false_for_empty_gallery() {
        let view = GalleryView::new();
        assert!(!view.near_bottom(0, 20, 3));
    }
}
