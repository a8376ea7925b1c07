//! Multi-select checkbox group.
//!
//! A vertical list of labelled checkboxes with a movable cursor. An empty
//! checked set is a meaningful state for callers ("no filter applied"), so
//! the group never forces a selection.

use bima_core::command::Command;
use bima_core::component::Component;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

/// Messages for the checkbox group.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the group.
    KeyPress(KeyEvent),
    /// Emitted when an option is toggled: option index and new state.
    Toggled(usize, bool),
}

/// A group of labelled checkboxes.
pub struct CheckGroup {
    label: String,
    options: Vec<String>,
    checked: Vec<bool>,
    cursor: usize,
    focus: bool,
}

impl CheckGroup {
    /// Create a group with all options unchecked.
    pub fn new(label: impl Into<String>, options: Vec<String>) -> Self {
        let checked = vec![false; options.len()];
        Self {
            label: label.into(),
            options,
            checked,
            cursor: 0,
            focus: false,
        }
    }

    /// Whether option `i` is checked (`false` when out of range).
    pub fn is_checked(&self, i: usize) -> bool {
        self.checked.get(i).copied().unwrap_or(false)
    }

    /// Indices of all checked options, in option order.
    pub fn checked_indices(&self) -> Vec<usize> {
        self.checked
            .iter()
            .enumerate()
            .filter(|(_, &on)| on)
            .map(|(i, _)| i)
            .collect()
    }

    /// Set option `i` directly; out-of-range indices are ignored.
    pub fn set_checked(&mut self, i: usize, on: bool) {
        if let Some(slot) = self.checked.get_mut(i) {
            *slot = on;
        }
    }

    /// Number of lines the group needs: one label line plus one per option.
    pub fn height(&self) -> u16 {
        1 + self.options.len() as u16
    }

    /// Give the group keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }
}

impl Component for CheckGroup {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.cursor = self.cursor.saturating_sub(1);
                    Command::none()
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    if !self.options.is_empty() {
                        self.cursor = (self.cursor + 1).min(self.options.len() - 1);
                    }
                    Command::none()
                }
                KeyCode::Char(' ') | KeyCode::Enter => {
                    if let Some(slot) = self.checked.get_mut(self.cursor) {
                        *slot = !*slot;
                        return Command::message(Message::Toggled(self.cursor, *slot));
                    }
                    Command::none()
                }
                _ => Command::none(),
            },
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        if area.height == 0 {
            return;
        }
        frame.render_widget(
            Line::styled(self.label.clone(), Style::default().fg(Color::DarkGray)),
            Rect { height: 1, ..area },
        );
        for (i, option) in self.options.iter().enumerate() {
            let y = area.y + 1 + i as u16;
            if y >= area.y + area.height {
                break;
            }
            let row = Rect::new(area.x, y, area.width, 1);
            let mark = if self.checked[i] { "[x]" } else { "[ ]" };
            let style = if self.focus && i == self.cursor {
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
            } else {
                Style::default()
            };
            frame.render_widget(
                Line::from(Span::styled(format!("{mark} {option}"), style)),
                row,
            );
        }
    }

    fn focused(&self) -> bool {
        self.focus
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn press(code: KeyCode) -> Message {
        Message::KeyPress(KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        })
    }

    fn group() -> CheckGroup {
        let mut g = CheckGroup::new(
            "Policy type",
            vec!["Term".into(), "Term with return".into()],
        );
        g.focus();
        g
    }

    #[test]
    fn starts_all_unchecked() {
        let g = group();
        assert!(g.checked_indices().is_empty());
    }

    #[test]
    fn space_toggles_under_cursor() {
        let mut g = group();
        g.update(press(KeyCode::Char(' ')));
        assert_eq!(g.checked_indices(), vec![0]);

        g.update(press(KeyCode::Down));
        g.update(press(KeyCode::Char(' ')));
        assert_eq!(g.checked_indices(), vec![0, 1]);

        g.update(press(KeyCode::Char(' ')));
        assert_eq!(g.checked_indices(), vec![0]);
    }

    #[test]
    fn toggled_reports_index_and_state() {
        let mut g = group();
        let cmd = g.update(press(KeyCode::Char(' ')));
        match cmd.into_message() {
            Some(Message::Toggled(0, true)) => {}
            other => panic!("expected Toggled(0, true), got {other:?}"),
        }
    }

    #[test]
    fn cursor_clamps_at_both_ends() {
        let mut g = group();
        g.update(press(KeyCode::Up));
        assert_eq!(g.cursor, 0);
        g.update(press(KeyCode::Down));
        g.update(press(KeyCode::Down));
        g.update(press(KeyCode::Down));
        assert_eq!(g.cursor, 1);
    }

    #[test]
    fn unfocused_group_ignores_keys() {
        let mut g = group();
        g.blur();
        assert!(g.update(press(KeyCode::Char(' '))).is_none());
        assert!(g.checked_indices().is_empty());
    }
}
