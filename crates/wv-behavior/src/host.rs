//! The `ViewHost` trait — the slice of a view that behaviors may touch.

use wv_core::{DomEvent, Element, UiMap, ViewId};

/// Read-mostly view surface passed into behavior calls.
///
/// Behaviors never store a view reference; each call that needs the view
/// receives the host as a parameter.  This keeps one behavior instance freely
/// shareable across declaration sites and leaves the concrete view type — and
/// its delegation machinery — downstream.
///
/// The only mutation the surface allows is [`emit`][Self::emit], which raises
/// a semantic view event through the view's emitter (the counterpart of a
/// declared trigger, available to handler code directly).
pub trait ViewHost {
    /// Unique id of the hosting view.
    fn view_id(&self) -> ViewId;

    /// The view's root element, if one has been set.
    fn element(&self) -> Option<&Element>;

    /// The view's own UI selector table.
    fn ui(&self) -> &UiMap;

    /// Emit a semantic view event to the view's listeners.
    ///
    /// Returns the number of listeners that received it.
    fn emit(&mut self, event: &str, payload: &DomEvent) -> usize;
}
