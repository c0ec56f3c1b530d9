//! # Actions
//!
//! Everything that can happen to the character list becomes an `Action`.
//! View shows up? That's `Action::Activate`.
//! API answers (or doesn't)? That's `Action::FetchSettled(result)`.
//!
//! `update()` applies an action to the state and returns an `Effect` telling
//! the adapter what I/O to start. No side effects here.
//!
//! ```text
//! State + Action  →  update()  →  New State + Effect
//! ```

use log::{debug, info, warn};

use crate::api::{Character, FetchError};
use crate::core::state::{App, FETCH_ERROR_MESSAGE, ImageStatus};

#[derive(Debug)]
pub enum Action {
    /// The view became visible. Starts the one-shot load.
    Activate,
    /// The single fetch finished, one way or the other.
    FetchSettled(Result<Vec<Character>, FetchError>),
    /// An avatar resource loaded successfully.
    ImageLoaded { id: i64 },
    /// An avatar resource failed to load; the card falls back to the placeholder.
    ImageLoadFailed { id: i64 },
    /// The view is being torn down. Late results are discarded.
    Deactivate,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    None,
    /// Issue the characters request.
    SpawnFetch,
    /// Load these avatars: `(character id, uri)`.
    LoadImages(Vec<(i64, String)>),
    /// Abort any in-flight work tied to the view.
    CancelRequests,
    Quit,
}

pub fn update(app: &mut App, action: Action) -> Effect {
    match action {
        Action::Activate => {
            if app.activated || app.deactivated {
                debug!("Ignoring repeated activation");
                return Effect::None;
            }
            app.activated = true;
            app.loading = true;
            app.error = None;
            app.characters.clear();
            app.image_status.clear();
            Effect::SpawnFetch
        }

        Action::FetchSettled(result) => {
            if app.deactivated || !app.activated || !app.loading {
                debug!("Discarding fetch result: view no longer waiting");
                return Effect::None;
            }

            let effect = match result {
                Ok(characters) => {
                    info!("Loaded {} characters", characters.len());
                    app.characters = characters;
                    let pending: Vec<(i64, String)> = app
                        .characters
                        .iter()
                        .filter_map(|c| c.image_uri().map(|uri| (c.id, uri.to_string())))
                        .collect();
                    for (id, _) in &pending {
                        app.image_status.insert(*id, ImageStatus::Pending);
                    }
                    if pending.is_empty() {
                        Effect::None
                    } else {
                        Effect::LoadImages(pending)
                    }
                }
                Err(e) => {
                    warn!("Failed to load characters: {}", e);
                    app.error = Some(FETCH_ERROR_MESSAGE.to_string());
                    Effect::None
                }
            };

            // Settles exactly once, whichever branch ran.
            app.loading = false;
            effect
        }

        Action::ImageLoaded { id } => {
            set_image_status(app, id, ImageStatus::Loaded);
            Effect::None
        }

        Action::ImageLoadFailed { id } => {
            set_image_status(app, id, ImageStatus::Failed);
            Effect::None
        }

        Action::Deactivate => {
            app.deactivated = true;
            Effect::CancelRequests
        }

        Action::Quit => Effect::Quit,
    }
}

fn set_image_status(app: &mut App, id: i64, status: ImageStatus) {
    if app.deactivated {
        return;
    }
    match app.image_status.get_mut(&id) {
        Some(current) if *current == ImageStatus::Pending => *current = status,
        Some(_) => debug!("Avatar {} already settled, ignoring {:?}", id, status),
        None => debug!("No avatar pending for character {}", id),
    }
}
