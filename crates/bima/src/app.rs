//! The top-level application model: landing page and search page.

use crate::landing::{self, LandingPage};
use crate::policy::Policy;
use crate::search::{self, SearchPage};
use bima_core::command::Command;
use bima_core::component::Component;
use bima_core::model::Model;
use bima_core::subscription::Subscription;
use bima_core::subscriptions::terminal_events;
use bima_core::TerminalEvent;
use crossterm::event::{KeyCode, KeyModifiers};
use ratatui::Frame;

/// Which page is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Landing,
    Search,
}

/// Top-level messages.
#[derive(Debug, Clone)]
pub enum Msg {
    Landing(landing::Message),
    Search(search::Message),
    Quit,
}

/// The application model. The catalog arrives through `Flags`, so tests can
/// run the whole app against a fixture catalog.
pub struct App {
    page: Page,
    landing: LandingPage,
    search: SearchPage,
}

impl App {
    /// The active page.
    pub fn page(&self) -> Page {
        self.page
    }

    /// The search page, for assertions.
    pub fn search(&self) -> &SearchPage {
        &self.search
    }
}

impl Model for App {
    type Message = Msg;
    type Flags = Vec<Policy>;

    fn init(catalog: Vec<Policy>) -> (Self, Command<Msg>) {
        (
            App {
                page: Page::Landing,
                landing: LandingPage::new(),
                search: SearchPage::new(catalog),
            },
            Command::none(),
        )
    }

    fn update(&mut self, msg: Msg) -> Command<Msg> {
        match msg {
            // Opening a product switches to the search page.
            Msg::Landing(landing::Message::Open) => {
                self.page = Page::Search;
                Command::none()
            }
            Msg::Landing(m) => self.landing.update(m).map(Msg::Landing),
            // Esc from the search list goes back to the landing page.
            Msg::Search(search::Message::Close) => {
                self.page = Page::Landing;
                Command::none()
            }
            Msg::Search(m) => self.search.update(m).map(Msg::Search),
            Msg::Quit => Command::quit(),
        }
    }

    fn view(&self, frame: &mut Frame) {
        match self.page {
            Page::Landing => self.landing.view(frame, frame.area()),
            Page::Search => self.search.view(frame, frame.area()),
        }
    }

    fn subscriptions(&self) -> Vec<Subscription<Msg>> {
        let page = self.page;
        let mut subs = vec![terminal_events(move |event| match event {
            TerminalEvent::Key(key) => match (key.code, key.modifiers) {
                (KeyCode::Char('c'), m) if m.contains(KeyModifiers::CONTROL) => Some(Msg::Quit),
                // 'q' quits only where no text input can swallow it.
                (KeyCode::Char('q'), KeyModifiers::NONE) if page == Page::Landing => {
                    Some(Msg::Quit)
                }
                (KeyCode::Esc, _) if page == Page::Landing => Some(Msg::Quit),
                _ => match page {
                    Page::Landing => Some(Msg::Landing(landing::Message::KeyPress(key))),
                    Page::Search => Some(Msg::Search(search::Message::KeyPress(key))),
                },
            },
            _ => None,
        })];
        if self.page == Page::Search {
            subs.extend(
                self.search
                    .subscriptions()
                    .into_iter()
                    .map(|sub| sub.map(Msg::Search)),
            );
        }
        subs
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;
    use bima_core::testing::TestProgram;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn program() -> TestProgram<App> {
        TestProgram::new(catalog::builtin())
    }

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    fn send_search_key(prog: &mut TestProgram<App>, code: KeyCode) {
        prog.send(Msg::Search(search::Message::KeyPress(key(code))));
        prog.drain_messages();
    }

    #[test]
    fn starts_on_landing_page() {
        let prog = program();
        assert_eq!(prog.model().page(), Page::Landing);
        let screen = prog.render_string(80, 24);
        assert!(screen.contains("Find the Best Insurance"));
        assert!(screen.contains("Term Life Insurance"));
    }

    #[test]
    fn opening_a_product_shows_the_search_page() {
        let mut prog = program();
        prog.send(Msg::Landing(landing::Message::KeyPress(key(KeyCode::Enter))));
        prog.drain_messages();
        assert_eq!(prog.model().page(), Page::Search);

        let screen = prog.render_string(120, 40);
        assert!(screen.contains("Life Insurance Search"));
        assert!(screen.contains("Smart Secure Plus"));
        assert!(screen.contains("5 of 5 policies"));
    }

    #[test]
    fn esc_returns_to_landing() {
        let mut prog = program();
        prog.send(Msg::Landing(landing::Message::Open));
        prog.drain_messages();
        assert_eq!(prog.model().page(), Page::Search);

        send_search_key(&mut prog, KeyCode::Esc);
        assert_eq!(prog.model().page(), Page::Landing);
    }

    #[test]
    fn search_flow_filters_and_expands() {
        let mut prog = program();
        prog.send(Msg::Landing(landing::Message::Open));
        prog.drain_messages();

        send_search_key(&mut prog, KeyCode::Char('/'));
        for c in "max".chars() {
            send_search_key(&mut prog, KeyCode::Char(c));
        }
        let ids: Vec<u64> = prog
            .model()
            .search()
            .list()
            .items()
            .iter()
            .map(|p| p.id)
            .collect();
        assert_eq!(ids, vec![3]);

        send_search_key(&mut prog, KeyCode::Esc); // back to the list
        send_search_key(&mut prog, KeyCode::Enter); // expand
        let screen = prog.render_string(120, 40);
        assert!(screen.contains("Revival period"));
        assert!(screen.contains("1 of 5 policies"));
    }

    #[test]
    fn marked_count_shows_in_status_line() {
        let mut prog = program();
        prog.send(Msg::Landing(landing::Message::Open));
        prog.drain_messages();

        send_search_key(&mut prog, KeyCode::Char(' '));
        let screen = prog.render_string(120, 40);
        assert!(screen.contains("1 selected for comparison"));
    }
}
