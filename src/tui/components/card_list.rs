//! # CardList Component
//!
//! Scrollable column of character cards, one per character, in response order.
//!
//! `CardList` is a transient component (created each frame) that wraps
//! `&'a mut CardListState` (persistent scroll state) and the view state (props).
//! Every card has the same height, so layout is a multiplication and only the
//! visible cards are rendered.

use ratatui::Frame;
use ratatui::layout::{Position, Rect, Size};
use tui_scrollview::{ScrollView, ScrollViewState, ScrollbarVisibility};

use crate::core::state::App;
use crate::tui::component::{Component, EventHandler};
use crate::tui::components::character_card::{CARD_HEIGHT, CharacterCard};
use crate::tui::event::TuiEvent;

/// Scroll state for the card list. Persisted in the parent `TuiState`.
#[derive(Default)]
pub struct CardListState {
    pub scroll_state: ScrollViewState,
    /// Last known viewport height (for scroll clamping between frames)
    pub viewport_height: u16,
    /// Content height from the last render
    pub content_height: u16,
}

impl CardListState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clamp scroll offset so it never exceeds the content bounds.
    pub fn clamp_scroll(&mut self) {
        let max_y = self.content_height.saturating_sub(self.viewport_height);
        let current = self.scroll_state.offset();
        if current.y > max_y {
            self.scroll_state.set_offset(Position {
                x: current.x,
                y: max_y,
            });
        }
    }
}

/// Index range of cards intersecting the viewport.
pub fn visible_range(card_count: usize, scroll_offset: u16, viewport_height: u16) -> std::ops::Range<usize> {
    let height = CARD_HEIGHT as usize;
    let first = scroll_offset as usize / height;
    let last = (scroll_offset as usize + viewport_height as usize).div_ceil(height);
    first.min(card_count)..last.min(card_count)
}

pub struct CardList<'a> {
    pub app: &'a App,
    pub state: &'a mut CardListState,
}

impl<'a> CardList<'a> {
    pub fn new(app: &'a App, state: &'a mut CardListState) -> Self {
        Self { app, state }
    }
}

impl<'a> Component for CardList<'a> {
    fn render(&mut self, frame: &mut Frame, area: Rect) {
        let content_width = area.width.saturating_sub(1); // -1 for scrollbar
        let characters = &self.app.characters;
        let total_height = (characters.len() as u16).saturating_mul(CARD_HEIGHT);

        self.state.viewport_height = area.height;
        self.state.content_height = total_height;
        self.state.clamp_scroll();

        let scroll_offset = self.state.scroll_state.offset().y;
        let range = visible_range(characters.len(), scroll_offset, area.height);

        let mut scroll_view = ScrollView::new(Size::new(content_width, total_height))
            .vertical_scrollbar_visibility(ScrollbarVisibility::Automatic)
            .horizontal_scrollbar_visibility(ScrollbarVisibility::Never);

        for i in range {
            let character = &characters[i];
            let card = CharacterCard::new(character, self.app.avatar_for(character));
            let rect = Rect::new(0, i as u16 * CARD_HEIGHT, content_width, CARD_HEIGHT);
            scroll_view.render_widget(card, rect);
        }

        frame.render_stateful_widget(scroll_view, area, &mut self.state.scroll_state);
    }
}

impl EventHandler for CardListState {
    type Event = (); // Scrolling is handled internally

    fn handle_event(&mut self, event: &TuiEvent) -> Option<Self::Event> {
        match event {
            TuiEvent::ScrollUp => self.scroll_state.scroll_up(),
            TuiEvent::ScrollDown => self.scroll_state.scroll_down(),
            TuiEvent::ScrollPageUp => self.scroll_state.scroll_page_up(),
            TuiEvent::ScrollPageDown => self.scroll_state.scroll_page_down(),
            TuiEvent::ScrollToTop => self.scroll_state.scroll_to_top(),
            TuiEvent::ScrollToBottom => self.scroll_state.scroll_to_bottom(),
            _ => return None,
        }
        self.clamp_scroll();
        None
    }
}
