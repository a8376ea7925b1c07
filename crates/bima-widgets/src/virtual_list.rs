//! Windowed list of variable-height, expandable rows.
//!
//! [`VirtualList`] ties a [`RowLayout`](crate::layout::RowLayout) offset
//! table to an [`ExpansionState`](crate::expand::ExpansionState) and renders
//! only the rows whose vertical extent intersects the viewport, plus an
//! overscan margin. Each row is either collapsed or expanded, two fixed
//! heights supplied at construction; the layout table is told the target
//! height at toggle time, so scrolling stays consistent while the reveal is
//! still in flight.
//!
//! Row content comes from a [`RowDelegate`], which receives the full item
//! and a [`RowContext`] describing cursor, mark, and expansion state.

use crate::expand::ExpansionState;
use crate::layout::RowLayout;
use bima_core::command::Command;
use bima_core::component::Component;
use bima_core::subscription::Subscription;
use bima_core::subscriptions::after;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Style};
use ratatui::text::Line;
use ratatui::widgets::{Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState};
use ratatui::Frame;
use std::cell::Cell;
use std::collections::HashSet;
use std::ops::Range;
use std::time::Duration;

/// An item the list can display. The key must be unique within the list and
/// stable across reorderings; expansion and marks are tracked by it.
pub trait Row: Send + 'static {
    /// Stable identity of this item.
    fn key(&self) -> u64;
}

/// Render-time facts about one row, passed to the delegate.
#[derive(Debug, Clone, Copy)]
pub struct RowContext {
    /// Index in the current ordered sequence.
    pub index: usize,
    /// Whether the list cursor is on this row.
    pub cursor: bool,
    /// Whether the row is marked for comparison.
    pub marked: bool,
    /// Whether the row's target state is expanded.
    pub expanded: bool,
    /// Whether an expand/collapse reveal is still in flight.
    pub transitioning: bool,
    /// Width available to the row, in columns.
    pub width: u16,
    /// The row's current target height, in lines.
    pub height: u16,
}

/// Renders one item as a stack of lines, exactly `ctx.height` tall.
///
/// Lines beyond `ctx.height` are dropped; missing lines render blank. The
/// list clips rows that straddle the viewport edge, so the delegate never
/// deals with partial visibility.
pub trait RowDelegate<I: Row>: Send {
    /// Produce the row's content.
    fn render<'a>(&'a self, item: &'a I, ctx: RowContext) -> Vec<Line<'a>>;
}

/// Messages for the windowed list.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the list.
    KeyPress(KeyEvent),
    /// Flip the expansion of the row with this key.
    ToggleExpand(u64),
    /// The expand/collapse reveal for this key finished.
    SettleExpand(u64),
    /// Flip the comparison mark of the row with this key.
    ToggleMark(u64),
}

/// A windowed list over an ordered item sequence.
///
/// The sequence is replaced wholesale with [`set_items`](VirtualList::set_items)
/// whenever filtering or sorting changes; expansion and marks survive the
/// replacement because they are keyed by [`Row::key`], not position.
pub struct VirtualList<I: Row> {
    items: Vec<I>,
    layout: RowLayout,
    expansion: ExpansionState,
    marked: HashSet<u64>,
    cursor: usize,
    scroll_top: u32,
    focus: bool,
    collapsed_height: u16,
    expanded_height: u16,
    overscan_rows: u16,
    settle_delay: Duration,
    empty_text: String,
    visible_height: Cell<u16>,
    delegate: Box<dyn RowDelegate<I>>,
}

impl<I: Row> VirtualList<I> {
    /// Create an empty list with the two row heights, in lines.
    pub fn new(
        delegate: impl RowDelegate<I> + 'static,
        collapsed_height: u16,
        expanded_height: u16,
    ) -> Self {
        Self {
            items: Vec::new(),
            layout: RowLayout::new(),
            expansion: ExpansionState::new(),
            marked: HashSet::new(),
            cursor: 0,
            scroll_top: 0,
            focus: false,
            collapsed_height,
            expanded_height,
            overscan_rows: 2,
            settle_delay: Duration::from_millis(150),
            empty_text: "Nothing to show".to_string(),
            visible_height: Cell::new(24),
            delegate: Box::new(delegate),
        }
    }

    /// Set the overscan margin, in collapsed-row multiples.
    pub fn with_overscan(mut self, rows: u16) -> Self {
        self.overscan_rows = rows;
        self
    }

    /// Set the delay before an expand/collapse reveal settles.
    pub fn with_settle_delay(mut self, delay: Duration) -> Self {
        self.settle_delay = delay;
        self
    }

    /// Set the message shown when the list is empty.
    pub fn with_empty_text(mut self, text: impl Into<String>) -> Self {
        self.empty_text = text.into();
        self
    }

    /// Replace the item sequence, rebuilding the offset table from each
    /// item's current target height. Cursor and scroll are clamped to the
    /// new bounds; expansion and marks are untouched.
    pub fn set_items(&mut self, items: Vec<I>) {
        self.items = items;
        let heights: Vec<u32> = self
            .items
            .iter()
            .map(|item| self.target_height(item.key()) as u32)
            .collect();
        self.layout.rebuild(heights.len(), |i| heights[i]);
        if !self.items.is_empty() {
            self.cursor = self.cursor.min(self.items.len() - 1);
        } else {
            self.cursor = 0;
        }
        self.clamp_scroll();
    }

    /// The current items.
    pub fn items(&self) -> &[I] {
        &self.items
    }

    /// Number of items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of the cursor row.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// The item under the cursor, if any.
    pub fn cursor_item(&self) -> Option<&I> {
        self.items.get(self.cursor)
    }

    /// Keys currently marked for comparison.
    pub fn marked(&self) -> &HashSet<u64> {
        &self.marked
    }

    /// The offset table, for scrollbar math and assertions.
    pub fn layout(&self) -> &RowLayout {
        &self.layout
    }

    /// Expansion bookkeeping, keyed by item identity.
    pub fn expansion(&self) -> &ExpansionState {
        &self.expansion
    }

    /// Total content height in lines.
    pub fn total_size(&self) -> u32 {
        self.layout.total_size()
    }

    /// Current scroll offset in lines.
    pub fn scroll_top(&self) -> u32 {
        self.scroll_top
    }

    /// Rows intersecting a viewport of the given height at the current
    /// scroll offset, overscan margin included.
    pub fn visible_range(&self, viewport_height: u16) -> Range<usize> {
        self.layout.visible_range(
            self.scroll_top,
            viewport_height as u32,
            self.overscan_rows as u32 * self.collapsed_height as u32,
        )
    }

    /// Give the list keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    fn target_height(&self, key: u64) -> u16 {
        if self.expansion.target_expanded(key) {
            self.expanded_height
        } else {
            self.collapsed_height
        }
    }

    fn index_of(&self, key: u64) -> Option<usize> {
        self.items.iter().position(|item| item.key() == key)
    }

    fn clamp_scroll(&mut self) {
        let max = self.layout.max_scroll(self.visible_height.get() as u32);
        self.scroll_top = self.scroll_top.min(max);
    }

    fn move_cursor_to(&mut self, index: usize) {
        if self.items.is_empty() {
            return;
        }
        self.cursor = index.min(self.items.len() - 1);
        self.scroll_cursor_into_view();
    }

    fn scroll_cursor_into_view(&mut self) {
        let top = self.layout.offset(self.cursor);
        let bottom = top + self.layout.height(self.cursor);
        let viewport = self.visible_height.get() as u32;
        if top < self.scroll_top {
            self.scroll_top = top;
        } else if bottom > self.scroll_top + viewport {
            self.scroll_top = bottom.saturating_sub(viewport);
        }
    }

    fn page(&self) -> usize {
        let viewport = self.visible_height.get().max(1) as usize;
        (viewport / self.collapsed_height.max(1) as usize).max(1)
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        match key.code {
            KeyCode::Up | KeyCode::Char('k') => {
                self.move_cursor_to(self.cursor.saturating_sub(1));
                Command::none()
            }
            KeyCode::Down | KeyCode::Char('j') => {
                self.move_cursor_to(self.cursor + 1);
                Command::none()
            }
            KeyCode::PageUp => {
                self.move_cursor_to(self.cursor.saturating_sub(self.page()));
                Command::none()
            }
            KeyCode::PageDown => {
                self.move_cursor_to(self.cursor + self.page());
                Command::none()
            }
            KeyCode::Home | KeyCode::Char('g') => {
                self.move_cursor_to(0);
                Command::none()
            }
            KeyCode::End | KeyCode::Char('G') => {
                self.move_cursor_to(self.items.len().saturating_sub(1));
                Command::none()
            }
            KeyCode::Enter => match self.cursor_item() {
                Some(item) => Command::message(Message::ToggleExpand(item.key())),
                None => Command::none(),
            },
            KeyCode::Char(' ') => match self.cursor_item() {
                Some(item) => Command::message(Message::ToggleMark(item.key())),
                None => Command::none(),
            },
            _ => Command::none(),
        }
    }
}

impl<I: Row> Component for VirtualList<I> {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => self.handle_key(key),
            Message::ToggleExpand(key) => {
                self.expansion.toggle(key);
                if let Some(index) = self.index_of(key) {
                    self.layout.set_height(index, self.target_height(key) as u32);
                    self.clamp_scroll();
                    if index == self.cursor {
                        self.scroll_cursor_into_view();
                    }
                }
                Command::none()
            }
            Message::SettleExpand(key) => {
                self.expansion.settle(key);
                Command::none()
            }
            Message::ToggleMark(key) => {
                if !self.marked.remove(&key) {
                    self.marked.insert(key);
                }
                Command::none()
            }
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 || area.width == 0 {
            return;
        }
        self.visible_height.set(area.height);

        if self.items.is_empty() {
            let empty = Paragraph::new(Line::styled(
                self.empty_text.clone(),
                Style::default().fg(Color::DarkGray),
            ));
            frame.render_widget(empty, area);
            return;
        }

        let show_scrollbar = self.layout.total_size() > area.height as u32;
        let row_width = if show_scrollbar {
            area.width.saturating_sub(1)
        } else {
            area.width
        };

        for index in self.visible_range(area.height) {
            let height = self.layout.height(index) as i64;
            let row_top = self.layout.offset(index) as i64 - self.scroll_top as i64;
            // Clip rows straddling the viewport edges.
            let skip = (-row_top).max(0);
            let y = row_top.max(0);
            let draw_height = (height - skip).min(area.height as i64 - y);
            if draw_height <= 0 {
                continue;
            }

            let item = &self.items[index];
            let key = item.key();
            let ctx = RowContext {
                index,
                cursor: index == self.cursor,
                marked: self.marked.contains(&key),
                expanded: self.expansion.target_expanded(key),
                transitioning: self.expansion.phase(key).in_transition(),
                width: row_width,
                height: height as u16,
            };
            let lines: Vec<Line> = self
                .delegate
                .render(item, ctx)
                .into_iter()
                .skip(skip as usize)
                .take(draw_height as usize)
                .collect();
            let rect = Rect::new(area.x, area.y + y as u16, row_width, draw_height as u16);
            frame.render_widget(Paragraph::new(lines), rect);
        }

        if show_scrollbar {
            let mut state = ScrollbarState::new(self.layout.total_size() as usize)
                .viewport_content_length(area.height as usize)
                .position(self.scroll_top as usize);
            frame.render_stateful_widget(
                Scrollbar::new(ScrollbarOrientation::VerticalRight),
                area,
                &mut state,
            );
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        // One settle timer per in-flight transition. Toggling back before
        // the timer fires re-keys the set, so stale timers are dropped by
        // subscription diffing or ignored by `settle`.
        self.expansion
            .transitioning()
            .map(|key| {
                after(self.settle_delay, &format!("row-{key}"), move |_| {
                    Message::SettleExpand(key)
                })
            })
            .collect()
    }

    fn focused(&self) -> bool {
        self.focus
    }
}
