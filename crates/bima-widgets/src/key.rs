//! Key binding definitions and the help-line trait shared by the widgets.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// A single key press with optional modifier keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyCombination {
    /// The base key code (a character, arrow key, or function key).
    pub code: KeyCode,
    /// Modifier keys that must be held alongside the base key.
    pub modifiers: KeyModifiers,
}

impl KeyCombination {
    /// A key combination with no modifiers.
    pub fn new(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// A key combination with the Ctrl modifier.
    pub fn ctrl(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::CONTROL,
        }
    }

    /// A key combination with the Shift modifier.
    pub fn shift(code: KeyCode) -> Self {
        Self {
            code,
            modifiers: KeyModifiers::SHIFT,
        }
    }
}

/// One or more key combinations bound to a described action.
///
/// The `hint` is the short key label shown in the status line ("↑/↓",
/// "enter"); the `description` is the action ("move", "expand").
pub struct Binding {
    /// Key combinations that trigger this binding.
    pub keys: Vec<KeyCombination>,
    /// Short key label for the help line.
    pub hint: String,
    /// Human-readable action description.
    pub description: String,
    /// Disabled bindings never match.
    pub enabled: bool,
}

impl Binding {
    /// Bind a single key combination.
    pub fn new(
        key: KeyCombination,
        hint: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            keys: vec![key],
            hint: hint.into(),
            description: description.into(),
            enabled: true,
        }
    }

    /// Bind several key combinations to the same action.
    pub fn with_keys(
        keys: Vec<KeyCombination>,
        hint: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            keys,
            hint: hint.into(),
            description: description.into(),
            enabled: true,
        }
    }

    /// Whether the event matches any of this binding's combinations.
    /// Always `false` when disabled.
    pub fn matches(&self, event: &KeyEvent) -> bool {
        if !self.enabled {
            return false;
        }
        self.keys
            .iter()
            .any(|k| k.code == event.code && event.modifiers.contains(k.modifiers))
    }
}

/// Types that expose their bindings for a one-line help display.
pub trait KeyMap {
    /// The bindings worth surfacing in the status line, in display order.
    fn help(&self) -> Vec<&Binding>;

    /// Render the enabled bindings as a `hint action · hint action` line.
    fn help_line(&self) -> String {
        self.help()
            .iter()
            .filter(|b| b.enabled)
            .map(|b| format!("{} {}", b.hint, b.description))
            .collect::<Vec<_>>()
            .join(" · ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEventKind;

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: crossterm::event::KeyEventState::NONE,
        }
    }

    #[test]
    fn binding_matches_any_of_its_keys() {
        let b = Binding::with_keys(
            vec![
                KeyCombination::new(KeyCode::Up),
                KeyCombination::new(KeyCode::Char('k')),
            ],
            "↑/k",
            "up",
        );
        assert!(b.matches(&press(KeyCode::Up)));
        assert!(b.matches(&press(KeyCode::Char('k'))));
        assert!(!b.matches(&press(KeyCode::Down)));
    }

    #[test]
    fn disabled_binding_never_matches() {
        let mut b = Binding::new(KeyCombination::new(KeyCode::Enter), "enter", "open");
        b.enabled = false;
        assert!(!b.matches(&press(KeyCode::Enter)));
    }

    #[test]
    fn help_line_joins_enabled_bindings() {
        struct Map {
            up: Binding,
            quit: Binding,
        }
        impl KeyMap for Map {
            fn help(&self) -> Vec<&Binding> {
                vec![&self.up, &self.quit]
            }
        }
        let mut map = Map {
            up: Binding::new(KeyCombination::new(KeyCode::Up), "↑", "move"),
            quit: Binding::new(KeyCombination::new(KeyCode::Char('q')), "q", "quit"),
        };
        assert_eq!(map.help_line(), "↑ move · q quit");
        map.quit.enabled = false;
        assert_eq!(map.help_line(), "↑ move");
    }
}
