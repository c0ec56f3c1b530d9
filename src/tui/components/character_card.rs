use ratatui::Frame;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, BorderType, Padding, Paragraph, Widget};

use crate::api::{Avatar, Character};
use crate::tui::component::Component;

/// Rows taken by one card: border + avatar + badges + species + border.
pub const CARD_HEIGHT: u16 = 5;

/// Horizontal padding (per side) between the border and the card content.
const CONTENT_PAD_H: u16 = 1;

const REMOTE_AVATAR_GLYPH: &str = "◉";
const PLACEHOLDER_AVATAR_GLYPH: &str = "○";

/// Badge style for the gender label.
pub fn gender_badge_style() -> Style {
    Style::default().fg(Color::Black).bg(Color::Magenta)
}

/// Badge style for the status label: green only for exactly `"ALIVE"`,
/// one shared gray style for everything else.
pub fn status_badge_style(character: &Character) -> Style {
    if character.is_alive() {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Green)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::White).bg(Color::DarkGray)
    }
}

/// A single character card. Transient: built each frame from the character
/// and the avatar the view resolved for it.
#[derive(Clone, Copy)]
pub struct CharacterCard<'a> {
    pub character: &'a Character,
    pub avatar: Avatar<'a>,
}

impl<'a> CharacterCard<'a> {
    pub fn new(character: &'a Character, avatar: Avatar<'a>) -> Self {
        Self { character, avatar }
    }

    fn avatar_line(&self) -> Line<'a> {
        let glyph = if self.avatar.is_placeholder() {
            Span::styled(PLACEHOLDER_AVATAR_GLYPH, Style::default().fg(Color::DarkGray))
        } else {
            Span::styled(REMOTE_AVATAR_GLYPH, Style::default().fg(Color::Cyan))
        };
        Line::from(vec![
            glyph,
            Span::raw(" "),
            Span::styled(self.avatar.source(), Style::default().fg(Color::DarkGray)),
        ])
    }

    fn badges_line(&self) -> Line<'a> {
        Line::from(vec![
            Span::styled(format!(" {} ", self.character.gender), gender_badge_style()),
            Span::raw(" "),
            Span::styled(
                format!(" {} ", self.character.status),
                status_badge_style(self.character),
            ),
        ])
    }

    fn species_line(&self) -> Line<'a> {
        Line::styled(
            format!("Especie: {}", self.character.species),
            Style::default().fg(Color::Gray),
        )
    }
}

impl<'a> Widget for CharacterCard<'a> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title(Span::styled(
                self.character.name.as_str(),
                Style::default().add_modifier(Modifier::BOLD),
            ))
            .border_type(BorderType::Rounded)
            .border_style(Style::default().fg(Color::Blue))
            .padding(Padding::horizontal(CONTENT_PAD_H));

        let inner_area = block.inner(area);
        block.render(area, buf);

        Paragraph::new(vec![
            self.avatar_line(),
            self.badges_line(),
            self.species_line(),
        ])
        .render(inner_area, buf);
    }
}

impl<'a> Component for CharacterCard<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        frame.render_widget(*self, area);
    }
}
