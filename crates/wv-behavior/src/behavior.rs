//! The `Behavior` trait — the main extension point for user code.

use std::any::Any;
use std::cell::RefCell;
use std::rc::Rc;

use wv_core::{DomEvent, UiMap};

use crate::decl::{BehaviorDecls, EventDecls, TriggerDecls};
use crate::error::{BehaviorError, BehaviorResult};
use crate::host::ViewHost;

/// A shared, mutable handle to one resolved behavior instance.
///
/// Handles are single-threaded by construction (`Rc<RefCell<_>>`, like the
/// host UI event loop).  Identity of the handle — not of the declaration —
/// is what deduplication preserves: the same key declared at two places in
/// one view's tree yields two clones of one handle.
pub type BehaviorHandle = Rc<RefCell<dyn Behavior>>;

/// Reusable view behavior.
///
/// Implement this trait to package event handlers, DOM→view-event triggers,
/// and UI selector references that any view can attach without subclassing.
/// All declaration methods have empty defaults so simple behaviors only
/// declare what they use.
///
/// # Declarations
///
/// [`events`][Self::events], [`triggers`][Self::triggers],
/// [`ui`][Self::ui], and [`behaviors`][Self::behaviors] are read at attach
/// time; the wiring layer namespaces the keys so entries from different
/// behaviors (and the view's own) never collide.
///
/// # Example
///
/// ```rust,ignore
/// struct Tooltip { text: String }
///
/// impl Behavior for Tooltip {
///     fn ui(&self) -> UiMap {
///         UiMap::new().with("tip", ".tooltip")
///     }
///
///     fn events(&self) -> EventDecls {
///         EventDecls::new()
///             .method("mouseenter @ui.tip", "show")
///             .method("mouseleave @ui.tip", "hide")
///     }
///
///     fn invoke(&mut self, method: &str, view: &mut dyn ViewHost, ev: &DomEvent)
///         -> BehaviorResult<()>
///     {
///         match method {
///             "show" => { view.emit("tooltip:shown", ev); Ok(()) }
///             "hide" => { view.emit("tooltip:hidden", ev); Ok(()) }
///             other  => Err(BehaviorError::UnknownHandler { method: other.into() }),
///         }
///     }
///
///     fn as_any(&self) -> &dyn Any { self }
///     fn as_any_mut(&mut self) -> &mut dyn Any { self }
/// }
/// ```
pub trait Behavior: 'static {
    /// Declared DOM event handlers: raw key → handler spec.
    ///
    /// Keys may use `@ui.name` references; they are expanded against this
    /// behavior's [`ui`][Self::ui] merged over the view's.
    fn events(&self) -> EventDecls {
        EventDecls::new()
    }

    /// Declared DOM→view-event trigger mappings: raw key → view event name.
    ///
    /// `@ui.name` references here see only this behavior's own
    /// [`ui`][Self::ui] table.
    fn triggers(&self) -> TriggerDecls {
        TriggerDecls::new()
    }

    /// UI selector shorthand entries this behavior defines.
    fn ui(&self) -> UiMap {
        UiMap::new()
    }

    /// Nested behavior declarations, resolved as this behavior's children.
    fn behaviors(&self) -> BehaviorDecls {
        BehaviorDecls::new()
    }

    /// Dispatch a handler declared by name in [`events`][Self::events].
    ///
    /// The default knows no methods; implementors match on the names their
    /// declarations use and fall through to `UnknownHandler`.
    fn invoke(
        &mut self,
        method: &str,
        view:   &mut dyn ViewHost,
        event:  &DomEvent,
    ) -> BehaviorResult<()> {
        let _ = (view, event);
        Err(BehaviorError::UnknownHandler {
            method: method.to_string(),
        })
    }

    /// Called after the hosting view's root element changes.
    ///
    /// Behaviors that cache view properties (the element, resolved selectors)
    /// refresh them here.  Default: no-op.
    fn proxy_view_properties(&mut self, view: &dyn ViewHost) {
        let _ = view;
    }

    #[doc(hidden)]
    fn as_any(&self) -> &dyn Any;

    #[doc(hidden)]
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Wrap a concrete behavior into a [`BehaviorHandle`].
pub fn handle<B: Behavior>(behavior: B) -> BehaviorHandle {
    Rc::new(RefCell::new(behavior))
}
