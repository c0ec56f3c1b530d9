//! # TUI Components
//!
//! All UI components for the character list screen.
//!
//! ## Component Architecture
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components that receive all data as props:
//! - `TitleBar`: Screen title and status
//! - `CharacterCard`: One character (avatar, name, badges, species)
//! - `Notice`: Error or empty-state text
//! - `LoadingOverlay`: Spinner box drawn over the body while loading
//!
//! ### Stateful Components (Event-Driven)
//!
//! - `CardList`: Scrollable card column, state in `CardListState`
//!
//! ## Module Structure
//!
//! ```text
//! components/
//! ├── mod.rs              (this file)
//! ├── title_bar.rs        (Top bar)
//! ├── character_card.rs   (Single card renderer)
//! ├── card_list.rs        (Scrollable card container)
//! ├── notice.rs           (Error / empty text)
//! └── loading_overlay.rs  (Blocking loading indicator)
//! ```

pub mod card_list;
pub mod character_card;
pub mod loading_overlay;
pub mod notice;
mod title_bar;

pub use card_list::{CardList, CardListState};
pub use loading_overlay::LoadingOverlay;
pub use notice::Notice;
pub use title_bar::TitleBar;
