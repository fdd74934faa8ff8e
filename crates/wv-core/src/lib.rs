//! `wv-core` — foundational types for the `weave` view framework.
//!
//! This crate is a dependency of every other `wv-*` crate.  It intentionally
//! has no `wv-*` dependencies and minimal external ones (only `serde_json`
//! and `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module      | Contents                                              |
//! |-------------|-------------------------------------------------------|
//! | [`ids`]     | `ViewId`, `BehaviorKey`                               |
//! | [`key`]     | `EventKey` — structured `"<event> [selector]"` keys   |
//! | [`ui`]      | `UiMap` — named selector table, `@ui.` expansion      |
//! | [`event`]   | `DomEvent` — payload delivered to delegated handlers  |
//! | [`element`] | `Element` — headless root-element handle              |
//! | [`error`]   | `WeaveError`, `WeaveResult`                           |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod element;
pub mod error;
pub mod event;
pub mod ids;
pub mod key;
pub mod ui;

#[cfg(test)]
mod tests;

// ── Re-exports ────────────────────────────────────────────────────────────────

pub use element::Element;
pub use error::{WeaveError, WeaveResult};
pub use event::DomEvent;
pub use ids::{BehaviorKey, ViewId};
pub use key::EventKey;
pub use ui::UiMap;
