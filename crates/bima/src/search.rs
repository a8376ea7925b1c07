//! The policy search page: filter sidebar, sort selector, windowed list.
//!
//! Every control change rebuilds the criteria from the raw field values,
//! validates them, and replaces the ordered view wholesale. Invalid bounds
//! never reach the engine; the previous view stays on screen with the
//! validation error in the status line.

use crate::card::{CardDelegate, COLLAPSED_HEIGHT, EXPANDED_HEIGHT};
use crate::criteria::{Criteria, SortKey};
use crate::engine;
use crate::policy::{Policy, PolicyType};
use bima_core::command::Command;
use bima_core::component::Component;
use bima_core::subscription::Subscription;
use bima_widgets::checkgroup::{self, CheckGroup};
use bima_widgets::field::{self, Field, Mode};
use bima_widgets::key::{Binding, KeyCombination, KeyMap};
use bima_widgets::select::{self, Select};
use bima_widgets::virtual_list::{self, VirtualList};
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Line;
use ratatui::Frame;
use std::collections::BTreeSet;

/// Which control receives key input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    List,
    Query,
    MinCover,
    MinTerm,
    Types,
    PremiumLow,
    PremiumHigh,
    MinClaim,
    Sort,
}

impl Focus {
    const ORDER: [Focus; 9] = [
        Focus::List,
        Focus::Query,
        Focus::MinCover,
        Focus::MinTerm,
        Focus::Types,
        Focus::PremiumLow,
        Focus::PremiumHigh,
        Focus::MinClaim,
        Focus::Sort,
    ];

    fn step(self, delta: isize) -> Focus {
        let n = Self::ORDER.len() as isize;
        let at = Self::ORDER.iter().position(|&f| f == self).unwrap_or(0) as isize;
        Self::ORDER[((at + delta).rem_euclid(n)) as usize]
    }
}

/// Messages for the search page.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press routed to this page.
    KeyPress(KeyEvent),
    /// Leave the search page (Esc from the list).
    Close,
    Query(field::Message),
    MinCover(field::Message),
    MinTerm(field::Message),
    Types(checkgroup::Message),
    PremiumLow(field::Message),
    PremiumHigh(field::Message),
    MinClaim(field::Message),
    Sort(select::Message),
    List(virtual_list::Message),
}

struct SearchKeys {
    moving: Binding,
    expand: Binding,
    compare: Binding,
    search: Binding,
    focus: Binding,
    back: Binding,
}

impl Default for SearchKeys {
    fn default() -> Self {
        Self {
            moving: Binding::with_keys(
                vec![
                    KeyCombination::new(KeyCode::Up),
                    KeyCombination::new(KeyCode::Down),
                ],
                "↑/↓",
                "move",
            ),
            expand: Binding::new(KeyCombination::new(KeyCode::Enter), "enter", "expand"),
            compare: Binding::new(KeyCombination::new(KeyCode::Char(' ')), "space", "compare"),
            search: Binding::new(KeyCombination::new(KeyCode::Char('/')), "/", "search"),
            focus: Binding::new(KeyCombination::new(KeyCode::Tab), "tab", "filters"),
            back: Binding::new(KeyCombination::new(KeyCode::Esc), "esc", "back"),
        }
    }
}

impl KeyMap for SearchKeys {
    fn help(&self) -> Vec<&Binding> {
        vec![
            &self.moving,
            &self.expand,
            &self.compare,
            &self.search,
            &self.focus,
            &self.back,
        ]
    }
}

/// The search page component.
pub struct SearchPage {
    catalog: Vec<Policy>,
    query: Field,
    min_cover: Field,
    min_term: Field,
    types: CheckGroup,
    premium_low: Field,
    premium_high: Field,
    min_claim: Field,
    sort: Select,
    list: VirtualList<Policy>,
    focus: Focus,
    error: Option<String>,
    keys: SearchKeys,
}

impl SearchPage {
    /// Build the page with the default criteria applied to `catalog`.
    pub fn new(catalog: Vec<Policy>) -> Self {
        let defaults = Criteria::default();
        let mut page = Self {
            catalog,
            query: Field::new("Search", Mode::Text).with_placeholder("policy or provider"),
            min_cover: Field::new("Min life cover", Mode::Unsigned)
                .with_value(defaults.min_life_cover.to_string()),
            min_term: Field::new("Coverage till", Mode::Unsigned)
                .with_value(defaults.min_coverage_till.to_string()),
            types: CheckGroup::new(
                "Policy type",
                PolicyType::ALL.iter().map(|t| t.label().to_string()).collect(),
            ),
            premium_low: Field::new("Premium low", Mode::Unsigned)
                .with_value(defaults.premium_low.to_string()),
            premium_high: Field::new("Premium high", Mode::Unsigned)
                .with_value(defaults.premium_high.to_string()),
            min_claim: Field::new("Min claim %", Mode::Unsigned).with_value("90"),
            sort: Select::new(
                "Sort by",
                SortKey::ALL.iter().map(|k| k.label().to_string()).collect(),
            ),
            list: VirtualList::new(CardDelegate, COLLAPSED_HEIGHT, EXPANDED_HEIGHT)
                .with_overscan(2)
                .with_empty_text("No policies match the current filters"),
            focus: Focus::List,
            error: None,
            keys: SearchKeys::default(),
        };
        page.apply_focus();
        page.refresh();
        page
    }

    /// The windowed list, for assertions and the compare count.
    pub fn list(&self) -> &VirtualList<Policy> {
        &self.list
    }

    /// The active validation error, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The control holding key focus.
    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Move key focus to a specific control.
    pub fn set_focus(&mut self, focus: Focus) {
        self.focus = focus;
        self.apply_focus();
    }

    fn apply_focus(&mut self) {
        self.query.blur();
        self.min_cover.blur();
        self.min_term.blur();
        self.types.blur();
        self.premium_low.blur();
        self.premium_high.blur();
        self.min_claim.blur();
        self.sort.blur();
        self.list.blur();
        match self.focus {
            Focus::List => self.list.focus(),
            Focus::Query => self.query.focus(),
            Focus::MinCover => self.min_cover.focus(),
            Focus::MinTerm => self.min_term.focus(),
            Focus::Types => self.types.focus(),
            Focus::PremiumLow => self.premium_low.focus(),
            Focus::PremiumHigh => self.premium_high.focus(),
            Focus::MinClaim => self.min_claim.focus(),
            Focus::Sort => self.sort.focus(),
        }
    }

    fn sort_key(&self) -> SortKey {
        SortKey::ALL[self.sort.selected().min(SortKey::ALL.len() - 1)]
    }

    /// Rebuild criteria from the raw inputs. Empty numeric fields relax
    /// their constraint (zero minimums, unbounded premium high).
    fn criteria(&self) -> Result<Criteria, crate::criteria::CriteriaError> {
        let clamp = |v: u64| u32::try_from(v).unwrap_or(u32::MAX);
        let policy_types: BTreeSet<PolicyType> = self
            .types
            .checked_indices()
            .into_iter()
            .map(|i| PolicyType::ALL[i])
            .collect();
        Criteria::checked(
            self.min_cover.value_u64().unwrap_or(0),
            self.min_term.value_u64().map(clamp).unwrap_or(0),
            policy_types,
            self.premium_low.value_u64().map(clamp).unwrap_or(0),
            self.premium_high.value_u64().map(clamp).unwrap_or(u32::MAX),
            self.min_claim.value_u64().map(clamp).unwrap_or(0),
            self.query.value().to_string(),
        )
    }

    fn refresh(&mut self) -> Command<Message> {
        match self.criteria() {
            Ok(criteria) => {
                self.error = None;
                let view = engine::evaluate(&self.catalog, &criteria, self.sort_key());
                self.list.set_items(view);
            }
            Err(err) => self.error = Some(err.to_string()),
        }
        Command::none()
    }

    fn handle_key(&mut self, key: KeyEvent) -> Command<Message> {
        match key.code {
            KeyCode::Tab => {
                self.set_focus(self.focus.step(1));
                Command::none()
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.step(-1));
                Command::none()
            }
            KeyCode::Char('/') if self.focus == Focus::List => {
                self.set_focus(Focus::Query);
                Command::none()
            }
            KeyCode::Esc => {
                if self.focus == Focus::List {
                    Command::message(Message::Close)
                } else {
                    self.set_focus(Focus::List);
                    Command::none()
                }
            }
            _ => self.dispatch_key(key),
        }
    }

    fn dispatch_key(&mut self, key: KeyEvent) -> Command<Message> {
        match self.focus {
            Focus::List => self
                .list
                .update(virtual_list::Message::KeyPress(key))
                .map(Message::List),
            Focus::Query => self
                .query
                .update(field::Message::KeyPress(key))
                .map(Message::Query),
            Focus::MinCover => self
                .min_cover
                .update(field::Message::KeyPress(key))
                .map(Message::MinCover),
            Focus::MinTerm => self
                .min_term
                .update(field::Message::KeyPress(key))
                .map(Message::MinTerm),
            Focus::Types => self
                .types
                .update(checkgroup::Message::KeyPress(key))
                .map(Message::Types),
            Focus::PremiumLow => self
                .premium_low
                .update(field::Message::KeyPress(key))
                .map(Message::PremiumLow),
            Focus::PremiumHigh => self
                .premium_high
                .update(field::Message::KeyPress(key))
                .map(Message::PremiumHigh),
            Focus::MinClaim => self
                .min_claim
                .update(field::Message::KeyPress(key))
                .map(Message::MinClaim),
            Focus::Sort => self
                .sort
                .update(select::Message::KeyPress(key))
                .map(Message::Sort),
        }
    }

    fn status_line(&self) -> Line<'static> {
        if let Some(ref err) = self.error {
            return Line::styled(format!(" {err}"), Style::default().fg(Color::Red));
        }
        let marked = self.list.marked().len();
        let compare = if marked > 0 {
            format!(" · {marked} selected for comparison")
        } else {
            String::new()
        };
        Line::styled(
            format!(
                " {} of {} policies{compare} · {}",
                self.list.len(),
                self.catalog.len(),
                self.keys.help_line()
            ),
            Style::default().fg(Color::DarkGray),
        )
    }
}

impl Component for SearchPage {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => self.handle_key(key),
            // Close is for the parent; nothing to do here.
            Message::Close => Command::none(),
            // Any control change replaces the ordered view wholesale.
            Message::Query(field::Message::Changed(_))
            | Message::MinCover(field::Message::Changed(_))
            | Message::MinTerm(field::Message::Changed(_))
            | Message::PremiumLow(field::Message::Changed(_))
            | Message::PremiumHigh(field::Message::Changed(_))
            | Message::MinClaim(field::Message::Changed(_))
            | Message::Types(checkgroup::Message::Toggled(_, _))
            | Message::Sort(select::Message::Changed(_)) => self.refresh(),
            Message::Query(m) => self.query.update(m).map(Message::Query),
            Message::MinCover(m) => self.min_cover.update(m).map(Message::MinCover),
            Message::MinTerm(m) => self.min_term.update(m).map(Message::MinTerm),
            Message::Types(m) => self.types.update(m).map(Message::Types),
            Message::PremiumLow(m) => self.premium_low.update(m).map(Message::PremiumLow),
            Message::PremiumHigh(m) => self.premium_high.update(m).map(Message::PremiumHigh),
            Message::MinClaim(m) => self.min_claim.update(m).map(Message::MinClaim),
            Message::Sort(m) => self.sort.update(m).map(Message::Sort),
            Message::List(m) => self.list.update(m).map(Message::List),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let [header_area, body_area, status_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Fill(1),
            Constraint::Length(1),
        ])
        .areas(area);

        frame.render_widget(
            Line::styled(
                " Life Insurance Search",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            header_area,
        );

        let [sidebar_area, main_area] =
            Layout::horizontal([Constraint::Length(32), Constraint::Fill(1)]).areas(body_area);

        let sidebar = Layout::vertical([
            Constraint::Length(1), // "Filters"
            Constraint::Length(1), // query
            Constraint::Length(1), // min cover
            Constraint::Length(1), // min term
            Constraint::Length(self.types.height()),
            Constraint::Length(1), // premium low
            Constraint::Length(1), // premium high
            Constraint::Length(1), // min claim
            Constraint::Fill(1),
        ])
        .split(sidebar_area);

        frame.render_widget(
            Line::styled("Filters", Style::default().add_modifier(Modifier::BOLD)),
            sidebar[0],
        );
        self.query.view(frame, sidebar[1]);
        self.min_cover.view(frame, sidebar[2]);
        self.min_term.view(frame, sidebar[3]);
        self.types.view(frame, sidebar[4]);
        self.premium_low.view(frame, sidebar[5]);
        self.premium_high.view(frame, sidebar[6]);
        self.min_claim.view(frame, sidebar[7]);

        let [sort_area, list_area] =
            Layout::vertical([Constraint::Length(1), Constraint::Fill(1)]).areas(main_area);
        self.sort.view(frame, sort_area);
        self.list.view(frame, list_area);

        frame.render_widget(self.status_line(), status_area);
    }

    fn subscriptions(&self) -> Vec<Subscription<Message>> {
        self.list
            .subscriptions()
            .into_iter()
            .map(|sub| sub.map(Message::List))
            .collect()
    }

    fn focused(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use crossterm::event::{KeyEventKind, KeyEventState, KeyModifiers};

    fn page() -> SearchPage {
        SearchPage::new(catalog::builtin())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn pump(page: &mut SearchPage, msg: Message) {
        let mut cmd = page.update(msg);
        while let Some(next) = cmd.into_message() {
            cmd = page.update(next);
        }
    }

    fn press(page: &mut SearchPage, code: KeyCode) {
        pump(page, Message::KeyPress(key(code)));
    }

    fn type_str(page: &mut SearchPage, s: &str) {
        for c in s.chars() {
            press(page, KeyCode::Char(c));
        }
    }

    fn view_ids(page: &SearchPage) -> Vec<u64> {
        page.list().items().iter().map(|p| p.id).collect()
    }

    #[test]
    fn initial_view_applies_default_criteria() {
        let page = page();
        assert_eq!(view_ids(&page), vec![3, 4, 1, 2, 5]);
        assert!(page.error().is_none());
    }

    #[test]
    fn tab_cycles_through_every_control_and_back() {
        let mut page = page();
        assert_eq!(page.focus(), Focus::List);
        for _ in 0..Focus::ORDER.len() {
            press(&mut page, KeyCode::Tab);
        }
        assert_eq!(page.focus(), Focus::List);

        press(&mut page, KeyCode::BackTab);
        assert_eq!(page.focus(), Focus::Sort);
    }

    #[test]
    fn slash_jumps_to_query_and_typing_filters() {
        let mut page = page();
        press(&mut page, KeyCode::Char('/'));
        assert_eq!(page.focus(), Focus::Query);

        type_str(&mut page, "MAX");
        assert_eq!(view_ids(&page), vec![3]);
    }

    #[test]
    fn expansion_survives_filtering_round_trip() {
        let mut page = page();
        pump(&mut page, Message::List(virtual_list::Message::ToggleExpand(3)));
        assert_eq!(page.list().layout().height(0), EXPANDED_HEIGHT as u32);

        press(&mut page, KeyCode::Char('/'));
        type_str(&mut page, "hdfc");
        assert_eq!(view_ids(&page), vec![2]);
        assert_eq!(page.list().layout().height(0), COLLAPSED_HEIGHT as u32);

        for _ in 0.."hdfc".len() {
            press(&mut page, KeyCode::Backspace);
        }
        assert_eq!(view_ids(&page), vec![3, 4, 1, 2, 5]);
        // Policy 3 is back at index 0 and still expanded.
        assert_eq!(page.list().layout().height(0), EXPANDED_HEIGHT as u32);
    }

    #[test]
    fn zero_premium_range_yields_empty_view() {
        let mut page = page();
        page.set_focus(Focus::PremiumHigh);
        for _ in 0..4 {
            press(&mut page, KeyCode::Backspace);
        }
        type_str(&mut page, "0");

        assert!(page.error().is_none());
        assert!(page.list().is_empty());
        assert_eq!(page.list().total_size(), 0);
        assert_eq!(page.list().visible_range(24), 0..0);
    }

    #[test]
    fn inverted_premium_range_keeps_previous_view() {
        let mut page = page();
        page.set_focus(Focus::PremiumLow);
        type_str(&mut page, "6000"); // "0" becomes "06000" > 5000

        let err = page.error().unwrap_or_default().to_string();
        assert!(err.contains("inverted"), "{err}");
        assert_eq!(view_ids(&page), vec![3, 4, 1, 2, 5]);
    }

    #[test]
    fn claim_ratio_above_hundred_is_rejected() {
        let mut page = page();
        page.set_focus(Focus::MinClaim);
        type_str(&mut page, "9"); // "90" becomes "909"
        assert!(page.error().is_some());
    }

    #[test]
    fn emptying_a_bound_relaxes_it() {
        let mut page = page();
        page.set_focus(Focus::PremiumHigh);
        for _ in 0..4 {
            press(&mut page, KeyCode::Backspace);
        }
        // Empty high bound means no upper limit.
        assert!(page.error().is_none());
        assert_eq!(view_ids(&page), vec![3, 4, 1, 2, 5]);
    }

    #[test]
    fn policy_type_checkbox_restricts_view() {
        let mut page = page();
        page.set_focus(Focus::Types);
        press(&mut page, KeyCode::Char(' '));
        // "Term" checked: ICICI and HDFC, premium ascending.
        assert_eq!(view_ids(&page), vec![1, 2]);

        press(&mut page, KeyCode::Char(' '));
        assert_eq!(view_ids(&page), vec![3, 4, 1, 2, 5]);
    }

    #[test]
    fn sort_selector_reorders_view() {
        let mut page = page();
        page.set_focus(Focus::Sort);
        press(&mut page, KeyCode::Right);
        assert_eq!(view_ids(&page), vec![5, 2, 1, 4, 3]);

        press(&mut page, KeyCode::Right);
        assert_eq!(view_ids(&page), vec![5, 4, 3, 2, 1]);
    }

    #[test]
    fn space_marks_cursor_policy_for_comparison() {
        let mut page = page();
        press(&mut page, KeyCode::Char(' '));
        assert!(page.list().marked().contains(&3));

        press(&mut page, KeyCode::Down);
        press(&mut page, KeyCode::Char(' '));
        assert_eq!(page.list().marked().len(), 2);
    }

    #[test]
    fn esc_returns_to_list_then_closes() {
        let mut page = page();
        page.set_focus(Focus::Query);
        press(&mut page, KeyCode::Esc);
        assert_eq!(page.focus(), Focus::List);

        let cmd = page.update(Message::KeyPress(key(KeyCode::Esc)));
        assert!(matches!(cmd.into_message(), Some(Message::Close)));
    }

    #[test]
    fn expand_settle_timer_appears_and_clears() {
        let mut page = page();
        press(&mut page, KeyCode::Enter);
        assert_eq!(page.subscriptions().len(), 1);

        pump(&mut page, Message::List(virtual_list::Message::SettleExpand(3)));
        assert!(page.subscriptions().is_empty());
    }
}
