use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::widgets::{Paragraph, Wrap};

use crate::tui::component::Component;

pub const EMPTY_MESSAGE: &str = "No hay personajes para mostrar.";

/// A single line of text in place of the card list: the error or the
/// empty-state message.
pub struct Notice<'a> {
    pub text: &'a str,
    pub style: Style,
}

impl<'a> Notice<'a> {
    pub fn error(text: &'a str) -> Self {
        Self {
            text,
            style: Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
        }
    }

    pub fn empty() -> Self {
        Self {
            text: EMPTY_MESSAGE,
            style: Style::default(),
        }
    }
}

impl<'a> Component for Notice<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let paragraph = Paragraph::new(self.text)
            .style(self.style)
            .wrap(Wrap { trim: true });
        frame.render_widget(paragraph, area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    #[test]
    fn test_error_notice_is_red() {
        let mut terminal = Terminal::new(TestBackend::new(60, 2)).unwrap();
        terminal
            .draw(|f| Notice::error("boom").render(f, f.area()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].symbol(), "b");
        assert_eq!(buffer[(0, 0)].fg, Color::Red);
        assert!(buffer[(0, 0)].modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_empty_notice_text() {
        let notice = Notice::empty();
        assert_eq!(notice.text, "No hay personajes para mostrar.");
        assert_eq!(notice.style, Style::default());
    }
}
