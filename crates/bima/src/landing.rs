//! The landing page: product grid with a single live route into search.
//!
//! Mirrors the storefront front page: a headline, a tagline, and a list of
//! insurance products with their discount/feature blurbs. Only some
//! products lead anywhere; picking one of those opens the search page.

use bima_core::command::Command;
use bima_core::component::Component;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::Frame;

struct Product {
    icon: &'static str,
    title: &'static str,
    blurb: &'static str,
    /// Whether this product routes to the search page.
    live: bool,
}

const PRODUCTS: &[Product] = &[
    Product {
        icon: "🌂",
        title: "Term Life Insurance",
        blurb: "Upto 10% Discount",
        live: true,
    },
    Product {
        icon: "❤️",
        title: "Health Insurance",
        blurb: "Cashless Anywhere",
        live: true,
    },
    Product {
        icon: "💰",
        title: "Investment Plans",
        blurb: "In-built Life Cover",
        live: true,
    },
    Product {
        icon: "🚗",
        title: "Car Insurance",
        blurb: "Upto 85% Discount",
        live: false,
    },
    Product {
        icon: "🛵",
        title: "2 Wheeler Insurance",
        blurb: "",
        live: false,
    },
    Product {
        icon: "👨",
        title: "Family Health Insurance",
        blurb: "Upto 25% Discount",
        live: false,
    },
    Product {
        icon: "✈️",
        title: "Travel Insurance",
        blurb: "",
        live: false,
    },
    Product {
        icon: "👩",
        title: "Term Insurance (Women)",
        blurb: "Upto 20% Cheaper",
        live: false,
    },
];

/// Messages for the landing page.
#[derive(Debug, Clone)]
pub enum Message {
    /// A key press routed to this page.
    KeyPress(KeyEvent),
    /// The selected product was opened.
    Open,
}

/// The landing page component.
pub struct LandingPage {
    cursor: usize,
}

impl LandingPage {
    pub fn new() -> Self {
        Self { cursor: 0 }
    }

    /// Index of the highlighted product.
    pub fn cursor(&self) -> usize {
        self.cursor
    }
}

impl Default for LandingPage {
    fn default() -> Self {
        Self::new()
    }
}

impl Component for LandingPage {
    type Message = Message;

    fn update(&mut self, msg: Message) -> Command<Message> {
        match msg {
            Message::KeyPress(key) => match key.code {
                KeyCode::Up | KeyCode::Char('k') => {
                    self.cursor = self.cursor.saturating_sub(1);
                    Command::none()
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.cursor = (self.cursor + 1).min(PRODUCTS.len() - 1);
                    Command::none()
                }
                KeyCode::Enter if PRODUCTS[self.cursor].live => {
                    Command::message(Message::Open)
                }
                _ => Command::none(),
            },
            Message::Open => Command::none(),
        }
    }

    fn view(&self, frame: &mut Frame, area: Rect) {
        let rows: u16 = 4 + PRODUCTS.len() as u16 + 2;
        let [_, content, _] = Layout::vertical([
            Constraint::Fill(1),
            Constraint::Length(rows),
            Constraint::Fill(1),
        ])
        .areas(area);

        let mut lines = vec![
            Line::styled(
                "Find the Best Insurance",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            )
            .centered(),
            Line::styled(
                "Compare and choose from 50+ top insurers",
                Style::default().fg(Color::DarkGray),
            )
            .centered(),
            Line::raw(""),
        ];
        for (i, product) in PRODUCTS.iter().enumerate() {
            let selected = i == self.cursor;
            let marker = if selected { "❯ " } else { "  " };
            let style = match (selected, product.live) {
                (true, _) => Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
                (false, true) => Style::default(),
                (false, false) => Style::default().fg(Color::DarkGray),
            };
            let mut spans = vec![Span::styled(
                format!("{marker}{} {}", product.icon, product.title),
                style,
            )];
            if !product.blurb.is_empty() {
                spans.push(Span::styled(
                    format!("  {}", product.blurb),
                    Style::default().fg(Color::Green),
                ));
            }
            if !product.live {
                spans.push(Span::styled(
                    "  (coming soon)",
                    Style::default().fg(Color::DarkGray),
                ));
            }
            lines.push(Line::from(spans).centered());
        }
        lines.push(Line::raw(""));
        lines.push(
            Line::styled(
                "↑/↓ move · enter open · q quit",
                Style::default().fg(Color::DarkGray),
            )
            .centered(),
        );

        for (i, line) in lines.into_iter().enumerate() {
            let y = content.y + i as u16;
            if y >= content.y + content.height {
                break;
            }
            frame.render_widget(line, Rect::new(content.x, y, content.width, 1));
        }
    }
}
