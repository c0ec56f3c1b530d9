//! # Core Application Logic
//!
//! The character list view's state and transitions.
//! It knows nothing about any specific UI technology.
//!
//! ```text
//!                    ┌─────────────────────────┐
//!                    │         CORE            │
//!                    │  (this module)          │
//!                    │                         │
//!                    │  • State (view data)    │
//!                    │  • Action (events)      │
//!                    │  • update() (reducer)   │
//!                    │                         │
//!                    │  No I/O. No UI. Pure.   │
//!                    └───────────┬─────────────┘
//!                                │
//!                    ┌───────────┴───────────┐
//!                    ▼                       ▼
//!             ┌────────────┐          ┌────────────┐
//!             │    TUI     │          │    API     │
//!             │  Adapter   │          │  (reqwest) │
//!             │ (ratatui)  │          │            │
//!             └────────────┘          └────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`state`]: The `App` struct and display precedence
//! - [`action`]: The `Action` enum, `Effect`s and `update()`
//! - [`config`]: Layered settings (file, env, CLI)

pub mod action;
pub mod config;
pub mod state;
