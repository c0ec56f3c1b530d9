//! # TUI Adapter
//!
//! The ratatui-specific layer. Handles terminal I/O, renders the character
//! list, and turns background task results into `core::Action` values.
//!
//! This is the only module that knows about ratatui and crossterm.
//!
//! ## Lifecycle
//!
//! The view activates once on entry (`Action::Activate` → one fetch task) and
//! deactivates once on exit (`Action::Deactivate` → in-flight tasks aborted).
//!
//! ## Redraw Strategy
//!
//! - **Loading**: draws every ~80ms so the spinner animates.
//! - **Idle**: sleeps up to 500ms, only redraws on events, task results or
//!   terminal resize.

mod component;
mod components;
mod event;
mod ui;

use log::{debug, info, warn};
use std::io::stdout;
use std::sync::{Arc, mpsc};

use crossterm::event::{DisableMouseCapture, EnableMouseCapture};
use crossterm::execute;
use futures::StreamExt;

use crate::api::{CharacterQuery, CharacterSource, HttpCharacterSource};
use crate::core::action::{Action, Effect, update};
use crate::core::config::ResolvedConfig;
use crate::core::state::App;
use crate::tui::component::EventHandler;
use crate::tui::components::CardListState;
use crate::tui::event::{TuiEvent, poll_event_immediate, poll_event_timeout};

/// TUI-specific presentation state (not part of the view's data)
pub struct TuiState {
    pub card_list: CardListState,
}

impl Default for TuiState {
    fn default() -> Self {
        Self::new()
    }
}

impl TuiState {
    pub fn new() -> Self {
        Self {
            card_list: CardListState::new(),
        }
    }
}

struct TerminalModeGuard;

impl TerminalModeGuard {
    fn new() -> std::io::Result<Self> {
        execute!(stdout(), EnableMouseCapture)?;
        info!("Terminal modes enabled (mouse)");
        Ok(Self)
    }
}

impl Drop for TerminalModeGuard {
    fn drop(&mut self) {
        let _ = execute!(stdout(), DisableMouseCapture);
    }
}

/// Build the character source from a resolved config.
pub fn build_source(config: &ResolvedConfig) -> Arc<dyn CharacterSource> {
    Arc::new(HttpCharacterSource::new(config.base_url.clone(), config.timeout))
}

pub fn run(config: ResolvedConfig) -> std::io::Result<()> {
    let source = build_source(&config);
    let mut app = App::from_config(source, &config);
    let mut tui = TuiState::new();

    let mut terminal = ratatui::init();
    let _terminal_mode_guard = TerminalModeGuard::new();

    // Channel for actions from background tasks
    let (tx, rx) = mpsc::channel();

    // Abort handles for work tied to this view (fetch + avatar loads)
    let mut active_abort_handles: Vec<tokio::task::AbortHandle> = Vec::new();

    let effect = update(&mut app, Action::Activate);
    if effect == Effect::SpawnFetch {
        active_abort_handles.push(spawn_fetch(&app, tx.clone()));
    }

    let start_time = std::time::Instant::now();
    let mut needs_redraw = true; // Force first frame

    'event_loop: loop {
        let animating = app.loading;
        if animating {
            needs_redraw = true;
        }

        if needs_redraw {
            let spinner_frame = (start_time.elapsed().as_secs_f32() * 12.0) as usize;
            terminal.draw(|f| ui::draw_ui(f, &app, &mut tui, spinner_frame))?;
            needs_redraw = false;
        }

        let timeout = if animating {
            std::time::Duration::from_millis(80)
        } else {
            std::time::Duration::from_millis(500)
        };
        let first_event = poll_event_timeout(timeout);

        // Process first event + drain all pending events before next draw
        if first_event.is_some() {
            needs_redraw = true;
        }
        for event in first_event
            .into_iter()
            .chain(std::iter::from_fn(poll_event_immediate))
        {
            match event {
                TuiEvent::Resize => {}
                TuiEvent::Quit | TuiEvent::ForceQuit => {
                    if update(&mut app, Action::Quit) == Effect::Quit {
                        break 'event_loop;
                    }
                }
                _ => {
                    tui.card_list.handle_event(&event);
                }
            }
        }

        // Handle background task actions
        while let Ok(action) = rx.try_recv() {
            needs_redraw = true;
            debug!("Event loop received: {:?}", action);
            match update(&mut app, action) {
                Effect::LoadImages(images) => {
                    active_abort_handles.push(spawn_image_loads(
                        &app,
                        images,
                        config.image_concurrency,
                        tx.clone(),
                    ));
                }
                Effect::Quit => break 'event_loop,
                _ => {}
            }
        }
    }

    // Teardown: drop late results and stop anything still running
    if update(&mut app, Action::Deactivate) == Effect::CancelRequests {
        for handle in active_abort_handles.drain(..) {
            handle.abort();
        }
    }

    ratatui::restore();
    Ok(())
}

fn spawn_fetch(app: &App, tx: mpsc::Sender<Action>) -> tokio::task::AbortHandle {
    let source = app.source.clone();
    info!("Spawning character fetch via {}", source.name());

    let handle = tokio::spawn(async move {
        let result = source.fetch_characters(&CharacterQuery::first_page()).await;
        if let Err(e) = &result {
            warn!("Character fetch failed: {}", e);
        }
        if tx.send(Action::FetchSettled(result)).is_err() {
            warn!("Failed to send fetch result: receiver dropped");
        }
    });

    handle.abort_handle()
}

fn spawn_image_loads(
    app: &App,
    images: Vec<(i64, String)>,
    concurrency: usize,
    tx: mpsc::Sender<Action>,
) -> tokio::task::AbortHandle {
    let source = app.source.clone();
    info!("Loading {} avatars ({} at a time)", images.len(), concurrency);

    let handle = tokio::spawn(async move {
        futures::stream::iter(images)
            .for_each_concurrent(concurrency, |(id, uri)| {
                let source = source.clone();
                let tx = tx.clone();
                async move {
                    let action = match source.load_image(&uri).await {
                        Ok(()) => Action::ImageLoaded { id },
                        Err(e) => {
                            debug!("Avatar for character {} failed ({}): {}", id, uri, e);
                            Action::ImageLoadFailed { id }
                        }
                    };
                    if tx.send(action).is_err() {
                        warn!("Failed to send avatar result for {}: receiver dropped", id);
                    }
                }
            })
            .await;
    });

    handle.abort_handle()
}
