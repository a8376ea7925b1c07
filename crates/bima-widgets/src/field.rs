//! Single-line labelled input for text and unsigned-number values.
//!
//! Numeric mode accepts digits only, so downstream parsing cannot fail on
//! shape; empty input is the caller's "unset" signal. The filter sidebar
//! uses numeric fields for every bound and a text field for the query.

use bima_core::command::Command;
use bima_core::component::Component;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// What characters the field accepts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Any printable character.
    Text,
    /// ASCII digits only.
    Unsigned,
}

/// Messages for the field component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the field.
    KeyPress(KeyEvent),
    /// Emitted whenever the value changes, carrying the new text.
    Changed(String),
}

/// A labelled single-line input.
pub struct Field {
    label: String,
    value: String,
    cursor: usize,
    mode: Mode,
    focus: bool,
    placeholder: String,
}

impl Field {
    /// Create an empty field with the given label.
    pub fn new(label: impl Into<String>, mode: Mode) -> Self {
        Self {
            label: label.into(),
            value: String::new(),
            cursor: 0,
            mode,
            focus: false,
            placeholder: String::new(),
        }
    }

    /// Set placeholder text shown while the value is empty.
    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.placeholder = placeholder.into();
        self
    }

    /// Set the initial value, placing the cursor at the end.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self.cursor = self.value.chars().count();
        self
    }

    /// Current value.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Parse the value as an unsigned number. `None` when empty or (in text
    /// mode) non-numeric; numeric mode guarantees digits so overflow is the
    /// only other way to get `None`.
    pub fn value_u64(&self) -> Option<u64> {
        self.value.parse().ok()
    }

    /// Give the field keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    fn accepts(&self, c: char) -> bool {
        match self.mode {
            Mode::Text => !c.is_control(),
            Mode::Unsigned => c.is_ascii_digit(),
        }
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_index)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn changed(&self) -> Command<Message> {
        Command::message(Message::Changed(self.value.clone()))
    }
}

impl Component for Field {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => match key.code {
                KeyCode::Char(c) if self.accepts(c) => {
                    let at = self.byte_index(self.cursor);
                    self.value.insert(at, c);
                    self.cursor += 1;
                    self.changed()
                }
                KeyCode::Backspace if self.cursor > 0 => {
                    let at = self.byte_index(self.cursor - 1);
                    self.value.remove(at);
                    self.cursor -= 1;
                    self.changed()
                }
                KeyCode::Delete if self.cursor < self.value.chars().count() => {
                    let at = self.byte_index(self.cursor);
                    self.value.remove(at);
                    self.changed()
                }
                KeyCode::Left => {
                    self.cursor = self.cursor.saturating_sub(1);
                    Command::none()
                }
                KeyCode::Right => {
                    self.cursor = (self.cursor + 1).min(self.value.chars().count());
                    Command::none()
                }
                KeyCode::Home => {
                    self.cursor = 0;
                    Command::none()
                }
                KeyCode::End => {
                    self.cursor = self.value.chars().count();
                    Command::none()
                }
                _ => Command::none(),
            },
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let label_style = Style::default().fg(Color::DarkGray);
        let value_style = if self.focus {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };

        let mut spans = vec![Span::styled(format!("{}: ", self.label), label_style)];
        if self.value.is_empty() && !self.placeholder.is_empty() && !self.focus {
            spans.push(Span::styled(
                self.placeholder.clone(),
                Style::default().fg(Color::DarkGray),
            ));
        } else {
            // Keep the tail visible when the value outgrows the area.
            let budget = (area.width as usize)
                .saturating_sub(self.label.width() + 2)
                .saturating_sub(if self.focus { 1 } else { 0 });
            let mut shown: String = self.value.clone();
            while shown.width() > budget && !shown.is_empty() {
                shown.remove(0);
            }
            spans.push(Span::styled(shown, value_style));
        }
        if self.focus {
            spans.push(Span::styled(
                "▏",
                Style::default().fg(Color::Cyan),
            ));
        }
        frame.render_widget(Line::from(spans), area);
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

    fn type_str(field: &mut Field, s: &str) {
        for c in s.chars() {
            field.update(press(KeyCode::Char(c)));
        }
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut f = Field::new("Query", Mode::Text);
        f.focus();
        type_str(&mut f, "max");
        assert_eq!(f.value(), "max");
    }

    #[test]
    fn unsigned_mode_rejects_non_digits() {
        let mut f = Field::new("Premium", Mode::Unsigned);
        f.focus();
        type_str(&mut f, "5a0-0.");
        assert_eq!(f.value(), "500");
        assert_eq!(f.value_u64(), Some(500));
    }

    #[test]
    fn empty_value_parses_to_none() {
        let f = Field::new("Premium", Mode::Unsigned);
        assert_eq!(f.value_u64(), None);
    }

    #[test]
    fn backspace_and_delete_edit_around_cursor() {
        let mut f = Field::new("Query", Mode::Text);
        f.focus();
        type_str(&mut f, "maxx");
        f.update(press(KeyCode::Backspace));
        assert_eq!(f.value(), "max");

        f.update(press(KeyCode::Home));
        f.update(press(KeyCode::Delete));
        assert_eq!(f.value(), "ax");
    }

    #[test]
    fn cursor_insertion_mid_value() {
        let mut f = Field::new("Query", Mode::Text);
        f.focus();
        type_str(&mut f, "mx");
        f.update(press(KeyCode::Left));
        type_str(&mut f, "a");
        assert_eq!(f.value(), "max");
    }

    #[test]
    fn changed_carries_new_value() {
        let mut f = Field::new("Query", Mode::Text);
        f.focus();
        let cmd = f.update(press(KeyCode::Char('m')));
        match cmd.into_message() {
            Some(Message::Changed(v)) => assert_eq!(v, "m"),
            other => panic!("expected Changed, got {other:?}"),
        }
    }

    #[test]
    fn unfocused_field_is_inert() {
        let mut f = Field::new("Query", Mode::Text);
        assert!(f.update(press(KeyCode::Char('m'))).is_none());
        assert_eq!(f.value(), "");
    }
}
