//! Prefix-sum offset table for windowed rendering of variable-height rows.
//!
//! [`RowLayout`] answers three questions without touching row content:
//! where does row `i` start, how tall is the whole list, and which rows
//! overlap a given viewport. Heights are unit-agnostic `u32`s; the widget
//! layer feeds it terminal rows, the tests also exercise pixel-sized values.

use std::ops::Range;

/// Offset table over a sequence of row heights.
///
/// Maintains `offsets` with one entry per row plus a trailing sentinel, so
/// that row `i` spans `offsets[i]..offsets[i + 1]` and the sentinel equals
/// the total content size. The structural invariant
/// `offset(i + 1) == offset(i) + height(i)` holds after every mutation.
///
/// [`set_height`](RowLayout::set_height) rewrites only the offsets after the
/// changed row, so a single expand/collapse never recomputes the prefix, and
/// rows *above* the change keep their offsets untouched; their content does
/// not need re-rendering, only rows at or below the change move.
#[derive(Debug, Clone, Default)]
pub struct RowLayout {
    heights: Vec<u32>,
    offsets: Vec<u32>,
}

impl RowLayout {
    /// Create an empty layout (zero rows, zero total size).
    pub fn new() -> Self {
        Self {
            heights: Vec::new(),
            offsets: vec![0],
        }
    }

    /// (Re)initialize the table for `n` rows, pulling each row's height from
    /// `height_fn`. O(n); called whenever the ordered view is replaced.
    pub fn rebuild(&mut self, n: usize, height_fn: impl Fn(usize) -> u32) {
        self.heights.clear();
        self.heights.extend((0..n).map(&height_fn));
        self.offsets.clear();
        self.offsets.reserve(n + 1);
        let mut acc = 0u32;
        self.offsets.push(0);
        for &h in &self.heights {
            acc = acc.saturating_add(h);
            self.offsets.push(acc);
        }
    }

    /// Update row `i`'s height, shifting the offsets of every row after it.
    ///
    /// Worst case O(n - i), but rows before `i` are untouched and rows after
    /// it only change *position*, not content. Out-of-range indices are
    /// ignored; a stale index here would mean the caller's view and this
    /// table diverged, which the rebuild-on-replace contract rules out.
    pub fn set_height(&mut self, i: usize, height: u32) {
        if i >= self.heights.len() {
            return;
        }
        if self.heights[i] == height {
            return;
        }
        self.heights[i] = height;
        let mut acc = self.offsets[i];
        for j in i..self.heights.len() {
            acc = acc.saturating_add(self.heights[j]);
            self.offsets[j + 1] = acc;
        }
    }

    /// Number of rows in the table.
    pub fn len(&self) -> usize {
        self.heights.len()
    }

    /// Whether the table holds no rows.
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Height of row `i` (0 when out of range).
    pub fn height(&self, i: usize) -> u32 {
        self.heights.get(i).copied().unwrap_or(0)
    }

    /// Vertical start offset of row `i`. `offset(len())` is the total size.
    pub fn offset(&self, i: usize) -> u32 {
        self.offsets.get(i).copied().unwrap_or_else(|| self.total_size())
    }

    /// Sum of all row heights, the content size for scrollbar math.
    pub fn total_size(&self) -> u32 {
        *self.offsets.last().unwrap_or(&0)
    }

    /// Minimal contiguous range of rows whose vertical extent overlaps
    /// `[scroll_top - overscan, scroll_top + viewport_height + overscan]`.
    ///
    /// `overscan` is a height margin in the same units as the table (the
    /// windowed list passes `overscan_rows * collapsed_height`). Lookup is
    /// two binary searches over the offset table, O(log n).
    pub fn visible_range(&self, scroll_top: u32, viewport_height: u32, overscan: u32) -> Range<usize> {
        let n = self.heights.len();
        if n == 0 || viewport_height == 0 {
            return 0..0;
        }
        let lo = scroll_top.saturating_sub(overscan);
        let hi = scroll_top
            .saturating_add(viewport_height)
            .saturating_add(overscan);

        // First row whose end lies past `lo`: search the row ends
        // offsets[1..=n]. Rows ending exactly at `lo` are excluded.
        let start = self.offsets[1..].partition_point(|&end| end <= lo);
        // One past the last row whose start lies at or before `hi`.
        let end = self.offsets[..n].partition_point(|&begin| begin <= hi);

        if start >= end {
            // A zero-height suffix can push `start` past `end`.
            return start.min(n)..start.min(n);
        }
        start..end
    }

    /// Greatest scroll offset that still shows a full viewport of content
    /// (0 when everything fits).
    pub fn max_scroll(&self, viewport_height: u32) -> u32 {
        self.total_size().saturating_sub(viewport_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed(n: usize, h: u32) -> RowLayout {
        let mut layout = RowLayout::new();
        layout.rebuild(n, |_| h);
        layout
    }

    fn assert_invariant(layout: &RowLayout) {
        assert_eq!(layout.offset(0), 0);
        for i in 0..layout.len() {
            assert_eq!(
                layout.offset(i + 1),
                layout.offset(i) + layout.height(i),
                "offset chain broken at row {i}"
            );
        }
    }

    #[test]
    fn empty_layout() {
        let layout = RowLayout::new();
        assert!(layout.is_empty());
        assert_eq!(layout.total_size(), 0);
        assert_eq!(layout.visible_range(0, 600, 0), 0..0);
    }

    #[test]
    fn rebuild_computes_offsets() {
        let layout = fixed(5, 400);
        assert_eq!(layout.len(), 5);
        assert_eq!(layout.total_size(), 2000);
        assert_eq!(layout.offset(3), 1200);
        assert_invariant(&layout);
    }

    #[test]
    fn rebuild_to_zero_rows() {
        let mut layout = fixed(5, 400);
        layout.rebuild(0, |_| 400);
        assert!(layout.is_empty());
        assert_eq!(layout.total_size(), 0);
        assert_eq!(layout.visible_range(0, 600, 800), 0..0);
    }

    #[test]
    fn expand_first_row_shifts_second() {
        // Collapsed height 400, expanded 840: row 1 moves 400 -> 840 and back.
        let mut layout = fixed(5, 400);
        assert_eq!(layout.offset(1), 400);

        layout.set_height(0, 840);
        assert_eq!(layout.offset(1), 840);
        assert_eq!(layout.total_size(), 2440);
        assert_invariant(&layout);

        layout.set_height(0, 400);
        assert_eq!(layout.offset(1), 400);
        assert_eq!(layout.total_size(), 2000);
        assert_invariant(&layout);
    }

    #[test]
    fn set_height_leaves_preceding_offsets_alone() {
        let mut layout = fixed(5, 400);
        layout.set_height(3, 840);
        assert_eq!(layout.offset(0), 0);
        assert_eq!(layout.offset(1), 400);
        assert_eq!(layout.offset(2), 800);
        assert_eq!(layout.offset(3), 1200);
        assert_eq!(layout.offset(4), 2040);
        assert_invariant(&layout);
    }

    #[test]
    fn offscreen_height_change_shifts_rows_below() {
        let mut layout = fixed(100, 400);
        // Viewport is far below row 2; expanding row 2 must still move the
        // rows the viewport shows before the next scroll.
        let before = layout.visible_range(20_000, 600, 0);
        let first_visible = before.start;
        let offset_before = layout.offset(first_visible);

        layout.set_height(2, 840);
        assert_eq!(layout.offset(first_visible), offset_before + 440);
        assert_invariant(&layout);
    }

    #[test]
    fn set_height_out_of_range_is_ignored() {
        let mut layout = fixed(3, 400);
        layout.set_height(7, 840);
        assert_eq!(layout.total_size(), 1200);
    }

    #[test]
    fn visible_range_starts_at_zero_for_top_scroll() {
        let layout = fixed(50, 400);
        let range = layout.visible_range(0, 600, 0);
        assert_eq!(range.start, 0);
        // 600 of viewport covers rows 0 and 1 (1 is partially visible).
        assert_eq!(range.end, 2);
    }

    #[test]
    fn visible_range_excludes_rows_ending_at_top_edge() {
        let layout = fixed(10, 400);
        // Row 0 ends exactly at 400; scrolled to 400 it is out of view.
        assert_eq!(layout.visible_range(400, 400, 0), 1..3);
    }

    #[test]
    fn visible_range_with_overscan_margin() {
        let layout = fixed(50, 400);
        // Margin of 2 collapsed rows on both sides.
        let range = layout.visible_range(4000, 600, 800);
        assert_eq!(range, 8..14);
    }

    #[test]
    fn viewport_larger_than_content_shows_everything() {
        let layout = fixed(3, 400);
        assert_eq!(layout.visible_range(0, 10_000, 0), 0..3);
        assert_eq!(layout.max_scroll(10_000), 0);
    }

    #[test]
    fn total_size_matches_independent_sum() {
        let mut layout = RowLayout::new();
        layout.rebuild(8, |i| if i % 3 == 0 { 840 } else { 400 });
        layout.set_height(1, 840);
        layout.set_height(1, 400);
        layout.set_height(7, 840);

        let expected: u32 = (0..8).map(|i| layout.height(i)).sum();
        assert_eq!(layout.total_size(), expected);
        assert_invariant(&layout);
    }

    #[test]
    fn invariant_survives_arbitrary_interleaving() {
        let mut layout = fixed(20, 400);
        for &(i, h) in &[(0usize, 840u32), (19, 840), (10, 840), (0, 400), (10, 400), (5, 840)] {
            layout.set_height(i, h);
            assert_invariant(&layout);
        }
        layout.rebuild(7, |_| 400);
        assert_invariant(&layout);
        assert_eq!(layout.total_size(), 2800);
    }

    #[test]
    fn range_over_mixed_heights_uses_real_offsets() {
        let mut layout = fixed(5, 400);
        layout.set_height(0, 840);
        // Rows now start at 0, 840, 1240, 1640, 2040.
        assert_eq!(layout.visible_range(900, 400, 0), 1..3);
        // Row 1 starts exactly at the bottom edge (840) and is included:
        // the window bounds are a closed interval.
        assert_eq!(layout.visible_range(0, 840, 0), 0..2);
    }
}
