//! Cycling single-choice selector.
//!
//! A one-line control that always holds exactly one of a fixed set of
//! options; Left/Right (or h/l) step through them. Used for the sort key
//! picker, where "no selection" is not a meaningful state.

use bima_core::command::Command;
use bima_core::component::Component;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

/// Messages for the select component.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press event forwarded to the selector.
    KeyPress(KeyEvent),
    /// Emitted when the choice changes, carrying the new option index.
    Changed(usize),
}

/// A cycling selector over a fixed, non-empty option list.
pub struct Select {
    label: String,
    options: Vec<String>,
    selected: usize,
    focus: bool,
}

impl Select {
    /// Create a selector with the given label and options. The first option
    /// starts selected; an empty option list yields an inert control.
    pub fn new(label: impl Into<String>, options: Vec<String>) -> Self {
        Self {
            label: label.into(),
            options,
            selected: 0,
            focus: false,
        }
    }

    /// Index of the current choice.
    pub fn selected(&self) -> usize {
        self.selected
    }

    /// Set the current choice, clamping to the option range.
    pub fn set_selected(&mut self, index: usize) {
        if !self.options.is_empty() {
            self.selected = index.min(self.options.len() - 1);
        }
    }

    /// Give the selector keyboard focus.
    pub fn focus(&mut self) {
        self.focus = true;
    }

    /// Remove keyboard focus.
    pub fn blur(&mut self) {
        self.focus = false;
    }

    fn cycle(&mut self, step: isize) -> Command<Message> {
        let n = self.options.len();
        if n == 0 {
            return Command::none();
        }
        self.selected = (self.selected as isize + step).rem_euclid(n as isize) as usize;
        Command::message(Message::Changed(self.selected))
    }
}

impl Component for Select {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) if self.focus => match key.code {
                KeyCode::Right | KeyCode::Char('l') | KeyCode::Enter => self.cycle(1),
                KeyCode::Left | KeyCode::Char('h') => self.cycle(-1),
                _ => Command::none(),
            },
            _ => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let value_style = if self.focus {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let value = self
            .options
            .get(self.selected)
            .map(String::as_str)
            .unwrap_or("");
        let line = Line::from(vec![
            Span::styled(
                format!("{}: ", self.label),
                Style::default().fg(Color::DarkGray),
            ),
            Span::styled(format!("◂ {value} ▸"), value_style),
        ]);
        frame.render_widget(line, area);
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

    fn options() -> Vec<String> {
        vec!["a".into(), "b".into(), "c".into()]
    }

    #[test]
    fn cycles_forward_and_wraps() {
        let mut sel = Select::new("Sort", options());
        sel.focus();
        sel.update(press(KeyCode::Right));
        sel.update(press(KeyCode::Right));
        assert_eq!(sel.selected(), 2);
        sel.update(press(KeyCode::Right));
        assert_eq!(sel.selected(), 0);
    }

    #[test]
    fn cycles_backward_and_wraps() {
        let mut sel = Select::new("Sort", options());
        sel.focus();
        sel.update(press(KeyCode::Left));
        assert_eq!(sel.selected(), 2);
    }

    #[test]
    fn emits_changed_with_new_index() {
        let mut sel = Select::new("Sort", options());
        sel.focus();
        let cmd = sel.update(press(KeyCode::Right));
        match cmd.into_message() {
            Some(Message::Changed(1)) => {}
            other => panic!("expected Changed(1), got {other:?}"),
        }
    }

    #[test]
    fn unfocused_ignores_keys() {
        let mut sel = Select::new("Sort", options());
        let cmd = sel.update(press(KeyCode::Right));
        assert!(cmd.is_none());
        assert_eq!(sel.selected(), 0);
    }

    #[test]
    fn empty_options_are_inert() {
        let mut sel = Select::new("Sort", vec![]);
        sel.focus();
        assert!(sel.update(press(KeyCode::Right)).is_none());
    }
}
