//! # TitleBar Component
//!
//! Top bar showing the screen title and a short status.
//!
//! Purely presentational: all data comes in as props.
//!
//! 1. **Status message**: `"Personajes de Futurama | 50 personajes"`
//! 2. **Default**: `"Personajes de Futurama"`

use crate::tui::component::Component;
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::Span;

pub const SCREEN_TITLE: &str = "Personajes de Futurama";

pub struct TitleBar {
    /// Status message (e.g., "Cargando...", "50 personajes")
    pub status_message: String,
}

impl TitleBar {
    pub fn new(status_message: String) -> Self {
        Self { status_message }
    }

    pub fn text(&self) -> String {
        if self.status_message.is_empty() {
            SCREEN_TITLE.to_string()
        } else {
            format!("{} | {}", SCREEN_TITLE, self.status_message)
        }
    }
}

impl Component for TitleBar {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let style = Style::default()
            .fg(Color::White)
            .bg(Color::Blue)
            .add_modifier(Modifier::BOLD);
        frame.render_widget(ratatui::widgets::Block::default().style(style), area);
        frame.render_widget(Span::styled(self.text(), style), area);
    }
}
