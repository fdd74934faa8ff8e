//! Behavior event-handler wiring.
//!
//! An event declaration `"click @ui.box" → "on_click"` becomes a delegation
//! entry whose handler dispatches to the declaring behavior instance —
//! either through [`Behavior::invoke`] for method names, or directly for
//! function-valued declarations.  Keys are namespaced
//! `<view id>-<behavior index>-<entry index>-`, unique across views,
//! behaviors, and entries.

use std::rc::Rc;

use wv_behavior::{Behavior, BehaviorHandle, HandlerSpec};
use wv_core::{EventKey, ViewId, WeaveResult};
use wv_view::{DomHandler, View, ViewResult};

/// Namespace for entry `j` of the behavior at flattened position `i` on
/// view `view_id`.
fn event_namespace(view_id: ViewId, i: usize, j: usize) -> String {
    format!("{view_id}-{i}-{j}-")
}

/// Build the merged event entries for a flattened behavior list.
///
/// `@ui.` references see the declaring behavior's UI table merged over the
/// view's, so behaviors may refer to elements the view named.
pub fn build_event_entries(
    view:      &View,
    behaviors: &[BehaviorHandle],
) -> WeaveResult<Vec<(EventKey, DomHandler)>> {
    let mut entries = Vec::new();
    for (i, handle) in behaviors.iter().enumerate() {
        let behavior = handle.borrow();
        let ui = behavior.ui().merged_over(view.ui());
        let events = behavior.events();
        for (j, (raw, spec)) in events.iter().enumerate() {
            let key = EventKey::parse(raw)?
                .with_namespace(event_namespace(view.id(), i, j))
                .expand_ui(&ui)?;
            entries.push((key, bind_handler(handle, spec)));
        }
    }
    Ok(entries)
}

/// Bind a handler spec to its owning behavior instance.
///
/// The returned handler carries its own clone of the instance handle, so
/// the receiver stays fixed no matter how the delegation layer stores or
/// invokes the entry.
fn bind_handler(handle: &BehaviorHandle, spec: &HandlerSpec) -> DomHandler {
    match spec {
        HandlerSpec::Method(method) => {
            let handle = Rc::clone(handle);
            let method = method.clone();
            Rc::new(move |view: &mut View, ev| -> ViewResult<()> {
                handle.borrow_mut().invoke(&method, view, ev)?;
                Ok(())
            })
        }
        HandlerSpec::Func(f) => {
            let handle = Rc::clone(handle);
            let f = Rc::clone(f);
            Rc::new(move |view: &mut View, ev| -> ViewResult<()> {
                let mut behavior = handle.borrow_mut();
                (f.as_ref())(&mut *behavior, view, ev)?;
                Ok(())
            })
        }
    }
}
