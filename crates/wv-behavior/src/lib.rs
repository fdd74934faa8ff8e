//! `wv-behavior` — the behavior trait and declaration types.
//!
//! # Crate layout
//!
//! | Module       | Contents                                                       |
//! |--------------|----------------------------------------------------------------|
//! | [`behavior`] | `Behavior` trait, `BehaviorHandle`                             |
//! | [`host`]     | `ViewHost` — the view surface behaviors are allowed to touch   |
//! | [`decl`]     | `BehaviorDecls`, `Options`, event/trigger declaration tables   |
//! | [`lookup`]   | `BehaviorLookup` capability + `BehaviorRegistry`               |
//! | [`tree`]     | `BehaviorTree` — resolved instances, pre-order flatten         |
//! | [`noop`]     | `NoopBehavior` — declares nothing, handles nothing             |
//! | [`error`]    | `BehaviorError`, `BehaviorResult<T>`                           |
//!
//! # Design notes
//!
//! A behavior packages event handlers, DOM-trigger mappings, and UI selector
//! references so any number of views can share them without subclassing.
//! Behaviors never hold a reference to their view: every call that needs the
//! view receives a [`ViewHost`], which keeps the instance free to be shared
//! between declaration sites (one `Rc<RefCell<_>>` handle per resolved key).
//!
//! Resolution itself lives downstream in `wv-compose`; this crate owns the
//! vocabulary it operates on.

pub mod behavior;
pub mod decl;
pub mod error;
pub mod host;
pub mod lookup;
pub mod noop;
pub mod tree;


pub use behavior::{handle, Behavior, BehaviorHandle};
pub use decl::{
    BehaviorCtor, BehaviorDecl, BehaviorDecls, EventDecls, HandlerFn, HandlerSpec, Options,
    TriggerDecls,
};
pub use error::{BehaviorError, BehaviorResult};
pub use host::ViewHost;
pub use lookup::{BehaviorLookup, BehaviorRegistry};
pub use noop::NoopBehavior;
pub use tree::{BehaviorNode, BehaviorTree};
