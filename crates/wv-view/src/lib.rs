//! `wv-view` — the headless view host for the weave framework.
//!
//! A [`View`] owns everything behavior wiring needs a view for:
//!
//! | Piece                     | Module       |
//! |---------------------------|--------------|
//! | semantic event emitter    | [`emitter`]  |
//! | DOM delegation table      | [`delegate`] |
//! | extension-point pipeline  | [`hooks`]    |
//! | the view itself + builder | [`view`]     |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wv_core::{DomEvent, Element};
//! use wv_view::View;
//!
//! let mut view = View::builder()
//!     .element(Element::new("nav", "#menu"))
//!     .ui("item", ".menu-item")
//!     .trigger("click @ui.item", "menu:item:chosen")
//!     .build()?;
//!
//! view.on("menu:item:chosen", |event, ev| println!("{event}: {ev}"));
//! view.dispatch(&DomEvent::at("click", ".menu-item"))?;
//! ```

pub mod delegate;
pub mod emitter;
pub mod error;
pub mod hooks;
pub mod view;

#[cfg(test)]
mod tests;

pub use delegate::{DelegateMap, DomHandler};
pub use emitter::{ListenerId, ViewEmitter};
pub use error::{ViewError, ViewResult};
pub use hooks::{HookOwner, HookPipeline, ViewHook};
pub use view::{AttachedBehaviors, BehaviorSource, View, ViewBuilder};
