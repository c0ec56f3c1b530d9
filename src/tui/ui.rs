use ratatui::Frame;
use ratatui::layout::{Constraint, Layout};
use ratatui::style::{Color, Style};
use ratatui::text::Span;

use crate::core::state::{App, Body, DisplayMode};
use crate::tui::TuiState;
use crate::tui::component::Component;
use crate::tui::components::{CardList, LoadingOverlay, Notice, TitleBar};

const KEY_HINTS: &str = "↑/↓ desplazar · PgUp/PgDn página · q salir";

pub fn draw_ui(frame: &mut Frame, app: &App, tui: &mut TuiState, spinner_frame: usize) {
    use Constraint::{Length, Min};
    let layout = Layout::vertical([Length(1), Min(0), Length(1)]);
    let [title_area, main_area, hints_area] = layout.areas(frame.area());

    TitleBar::new(status_message(app)).render(frame, title_area);

    match app.body() {
        Body::Blank => {}
        Body::Error(text) => Notice::error(text).render(frame, main_area),
        Body::Empty => Notice::empty().render(frame, main_area),
        Body::Cards(_) => CardList::new(app, &mut tui.card_list).render(frame, main_area),
    }

    // Overlay, not replacement: the body stays underneath
    if app.loading {
        LoadingOverlay::new(spinner_frame).render(frame, main_area);
    }

    frame.render_widget(
        Span::styled(KEY_HINTS, Style::default().fg(Color::DarkGray)),
        hints_area,
    );
}

fn status_message(app: &App) -> String {
    match app.display_mode() {
        DisplayMode::Loading => "Cargando...".to_string(),
        DisplayMode::Error => "Error".to_string(),
        DisplayMode::Empty => String::new(),
        DisplayMode::Populated => format!("{} personajes", app.characters.len()),
    }
}
