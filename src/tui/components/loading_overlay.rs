//! # Loading Overlay
//!
//! Blocking indicator drawn on top of whatever body is underneath while the
//! character request is in flight. It clears only its own box.

use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Flex, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Clear, Paragraph};

use crate::tui::component::Component;

pub const LOADING_MESSAGE: &str = "Cargando personajes...";

const SPINNER_FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const OVERLAY_WIDTH: u16 = 32;
const OVERLAY_HEIGHT: u16 = 3;

pub struct LoadingOverlay {
    spinner_frame: usize,
}

impl LoadingOverlay {
    pub fn new(spinner_frame: usize) -> Self {
        Self { spinner_frame }
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.spinner_frame % SPINNER_FRAMES.len()]
    }

    /// Centered box inside `area`, shrunk to fit small terminals.
    pub fn overlay_area(area: Rect) -> Rect {
        let [row] = Layout::vertical([Constraint::Length(OVERLAY_HEIGHT.min(area.height))])
            .flex(Flex::Center)
            .areas(area);
        let [cell] = Layout::horizontal([Constraint::Length(OVERLAY_WIDTH.min(area.width))])
            .flex(Flex::Center)
            .areas(row);
        cell
    }
}

impl Component for LoadingOverlay {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let overlay = Self::overlay_area(area);
        let style = Style::default().fg(Color::Yellow);

        let line = Line::from(vec![
            Span::styled(self.spinner(), style.add_modifier(Modifier::BOLD)),
            Span::raw(" "),
            Span::styled(LOADING_MESSAGE, style),
        ]);

        let paragraph = Paragraph::new(line).alignment(Alignment::Center).block(
            Block::bordered()
                .border_type(BorderType::Rounded)
                .border_style(style),
        );

        frame.render_widget(Clear, overlay);
        frame.render_widget(paragraph, overlay);
    }
}
