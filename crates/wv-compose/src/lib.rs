//! `wv-compose` — behavior wiring for the weave view framework.
//!
//! # Attach flow
//!
//! ```text
//! attach_behaviors(view, lookup):
//!   ① Resolve  — walk the declared BehaviorDecls; construct each key once
//!                (first occurrence wins), recursing into nested behaviors.
//!   ② Slots    — store the tree + its deduplicated pre-order flattening
//!                in the view's behavior slots.
//!   ③ Hook     — install the subsystem's ViewHook under the "behaviors"
//!                owner tag (replace semantics, safe to re-run).
//!   ④ Delegate — view.delegate_all(): own entries first, then the hook's
//!                namespaced trigger + event entries.
//! ```
//!
//! # Cargo features
//!
//! | Feature   | Effect                                                  |
//! |-----------|---------------------------------------------------------|
//! | `fx-hash` | FxHash for the resolver's per-call instance cache.      |
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use wv_behavior::{BehaviorCtor, BehaviorDecls, BehaviorRegistry, Options};
//! use wv_compose::attach_behaviors;
//! use wv_view::View;
//!
//! let registry = BehaviorRegistry::new()
//!     .with("Tooltip", BehaviorCtor::of(Tooltip::from_options));
//!
//! let mut view = View::builder()
//!     .behaviors(BehaviorDecls::new().declare("Tooltip", Options::new()))
//!     .build()?;
//! let attached = attach_behaviors(&mut view, Some(&registry))?;
//! ```

pub mod attach;
pub mod error;
pub mod events;
pub mod resolver;
pub mod triggers;


pub use attach::{add_behavior, attach_behaviors, detach_behaviors, BEHAVIORS_HOOK};
pub use error::{ComposeError, ComposeResult};
pub use events::build_event_entries;
pub use resolver::{resolve, resolve_with_cache, DedupCache};
pub use triggers::build_trigger_entries;
